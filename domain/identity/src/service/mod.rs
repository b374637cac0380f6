use async_trait::async_trait;
use infrastructure_command::NavigationCommand;

use crate::{
    exception::IdentityResult,
    model::vo::{AuthClaim, LoginOutcome, MenuItem, Role},
};

/// Checks credentials and tells which role they belong to.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> IdentityResult<AuthClaim>;
}

/// The navigation framework.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn dispatch(&self, command: NavigationCommand) -> anyhow::Result<()>;
}

/// Login screen and dashboard navigation.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Navigate to the role's dashboard on success, otherwise stay and report
    /// the inline message.
    async fn login(&self, email: &str, password: &str) -> IdentityResult<LoginOutcome>;

    async fn logout(&self) -> IdentityResult<()>;

    async fn open(&self, item: &MenuItem) -> IdentityResult<()>;

    async fn back(&self) -> IdentityResult<()>;

    /// Tiles of the role's dashboard.
    fn menu(&self, role: Role) -> Vec<MenuItem> {
        role.menu()
    }
}
