use serde::{Deserialize, Serialize};

use super::Role;

/// What the authenticator vouches for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaim {
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Admitted(AuthClaim),
    /// Shown inline on the login screen.
    Rejected { message: String },
}
