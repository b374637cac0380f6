use anyhow::Context;
use college_management_system::{
    dashboard::Dashboards,
    infrastructure::{build_config, telemetry::initialize_telemetry, AppConfig},
};
use domain_identity::model::vo::LoginOutcome;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_config(build_config().context("Cannot build config")?)
        .context("Cannot read config")?;
    initialize_telemetry(config.telemetry()).context("Cannot build logger")?;

    let dashboards = Dashboards::build(&config)?;

    if let (Some(email), Some(password)) = (config.session().email(), config.session().password())
    {
        match dashboards.session.login(email, password).await? {
            LoginOutcome::Admitted(claim) => {
                for item in dashboards.session.menu(claim.role) {
                    tracing::info!(title = item.title, path = %item.route, "Menu item.");
                }
            }
            LoginOutcome::Rejected { message } => {
                tracing::warn!(email = %email, "Configured login failed: {message}");
            }
        }
    }

    let imported = dashboards.seed(config.seeds()).await;
    tracing::info!(
        imported,
        route = %dashboards.history.current_path().await.unwrap_or_default(),
        "Ready."
    );
    Ok(())
}
