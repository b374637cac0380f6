use serde::{Deserialize, Serialize};

use crate::model::vo::Role;

/// Account known to the credential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Credential {
    pub fn new(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    /// Exact comparison of both fields.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
