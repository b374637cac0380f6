use crate::{
    exception::IdentityResult,
    model::vo::AuthClaim,
    service::{Authenticator, Navigator},
};
use async_trait::async_trait;
use infrastructure_command::NavigationCommand;
use mockall::mock;

mock! {
    pub Authenticator {}
    #[async_trait]
    impl Authenticator for Authenticator {
        async fn authenticate(&self, email: &str, password: &str) -> IdentityResult<AuthClaim>;
    }
}

mock! {
    pub Navigator {}
    #[async_trait]
    impl Navigator for Navigator {
        async fn dispatch(&self, command: NavigationCommand) -> anyhow::Result<()>;
    }
}
