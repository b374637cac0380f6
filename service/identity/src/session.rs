use std::sync::Arc;

use async_trait::async_trait;
use domain_identity::{
    exception::{IdentityException, IdentityResult},
    model::vo::{LoginOutcome, MenuItem, Route},
    service::{Authenticator, Navigator, SessionService},
};
use infrastructure_command::NavigationCommand;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct SessionServiceImpl {
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
}

impl SessionServiceImpl {
    async fn go(&self, command: NavigationCommand) -> IdentityResult<()> {
        tracing::debug!(?command, "Navigating.");
        Ok(self.navigator.dispatch(command).await?)
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    async fn login(&self, email: &str, password: &str) -> IdentityResult<LoginOutcome> {
        let claim = match self.authenticator.authenticate(email, password).await {
            Ok(claim) => claim,
            Err(e @ IdentityException::InvalidCredentials) => {
                tracing::warn!(email, "Login rejected.");
                return Ok(LoginOutcome::Rejected {
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };
        self.go(NavigationCommand::Replace {
            path: claim.role.landing_route().path().to_string(),
        })
        .await?;
        tracing::info!(email, role = %claim.role, "Logged in.");
        Ok(LoginOutcome::Admitted(claim))
    }

    async fn logout(&self) -> IdentityResult<()> {
        self.go(NavigationCommand::Replace {
            path: Route::Login.path().to_string(),
        })
        .await?;
        tracing::info!("Logged out.");
        Ok(())
    }

    async fn open(&self, item: &MenuItem) -> IdentityResult<()> {
        self.go(NavigationCommand::Push {
            path: item.route.path().to_string(),
        })
        .await
    }

    async fn back(&self) -> IdentityResult<()> {
        self.go(NavigationCommand::Back).await
    }
}

#[cfg(test)]
mod tests {
    use domain_identity::{
        mock::{MockAuthenticator, MockNavigator},
        model::vo::{AuthClaim, Role},
    };

    use super::*;

    fn admin_only() -> MockAuthenticator {
        let mut authenticator = MockAuthenticator::new();
        authenticator.expect_authenticate().returning(|email, password| {
            if email == "admin@college.edu" && password == "admin123" {
                Ok(AuthClaim {
                    email: email.to_string(),
                    role: Role::Admin,
                })
            } else {
                Err(IdentityException::InvalidCredentials)
            }
        });
        authenticator
    }

    fn session(authenticator: MockAuthenticator, navigator: MockNavigator) -> SessionServiceImpl {
        SessionServiceImpl::builder()
            .authenticator(Arc::new(authenticator))
            .navigator(Arc::new(navigator))
            .build()
    }

    #[tokio::test]
    async fn admin_lands_on_dashboard() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_dispatch()
            .times(1)
            .withf(|command: &NavigationCommand| {
                *command
                    == NavigationCommand::Replace {
                        path: "/(dashboards)/admin".to_string(),
                    }
            })
            .returning(|_| Ok(()));

        let outcome = session(admin_only(), navigator)
            .login("admin@college.edu", "admin123")
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::Admitted(AuthClaim { role: Role::Admin, .. })));
    }

    #[tokio::test]
    async fn wrong_password_stays() {
        let mut navigator = MockNavigator::new();
        navigator.expect_dispatch().never();

        let outcome = session(admin_only(), navigator)
            .login("admin@college.edu", "wrong")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn authenticator_failure_propagates() {
        let mut authenticator = MockAuthenticator::new();
        authenticator
            .expect_authenticate()
            .returning(|_, _| Err(anyhow::anyhow!("directory offline").into()));
        let mut navigator = MockNavigator::new();
        navigator.expect_dispatch().never();

        let result = session(authenticator, navigator).login("a", "b").await;
        assert!(matches!(result, Err(IdentityException::InternalError { .. })));
    }

    #[tokio::test]
    async fn menu_open_back_and_logout() {
        let mut navigator = MockNavigator::new();
        let mut sequence = mockall::Sequence::new();
        for expected in [
            NavigationCommand::Push {
                path: "/admin/clubs".to_string(),
            },
            NavigationCommand::Back,
            NavigationCommand::Replace {
                path: "/".to_string(),
            },
        ] {
            navigator
                .expect_dispatch()
                .times(1)
                .in_sequence(&mut sequence)
                .withf(move |command: &NavigationCommand| *command == expected)
                .returning(|_| Ok(()));
        }
        let session = session(admin_only(), navigator);

        let clubs = session
            .menu(Role::Admin)
            .into_iter()
            .find(|item| item.title == "Clubs")
            .unwrap();
        session.open(&clubs).await.unwrap();
        session.back().await.unwrap();
        session.logout().await.unwrap();
    }
}
