use async_trait::async_trait;
use domain_identity::{
    exception::{IdentityException, IdentityResult},
    model::{entity::Credential, vo::AuthClaim},
    service::Authenticator,
};

/// Checks logins against the configured credential table.
pub struct ConfiguredAuthenticator {
    credentials: Vec<Credential>,
}

impl ConfiguredAuthenticator {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl Authenticator for ConfiguredAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> IdentityResult<AuthClaim> {
        self.credentials
            .iter()
            .find(|credential| credential.verify(email, password))
            .map(|credential| AuthClaim {
                email: credential.email.clone(),
                role: credential.role,
            })
            .ok_or(IdentityException::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use domain_identity::model::vo::Role;

    use super::*;
    use crate::infrastructure::AppConfig;

    #[tokio::test]
    async fn demo_accounts() {
        let authenticator = ConfiguredAuthenticator::new(AppConfig::default().credentials().clone());
        for (email, password, role) in [
            ("admin@college.edu", "admin123", Role::Admin),
            ("student@college.edu", "student123", Role::Student),
            ("teacher@college.edu", "teacher123", Role::TeachingStaff),
            ("staff@college.edu", "staff123", Role::NonTeachingStaff),
        ] {
            let claim = authenticator.authenticate(email, password).await.unwrap();
            assert_eq!(claim.role, role);
        }
    }

    #[tokio::test]
    async fn exact_match_only() {
        let authenticator = ConfiguredAuthenticator::new(AppConfig::default().credentials().clone());
        for (email, password) in [
            ("admin@college.edu", "wrong"),
            ("Admin@college.edu", "admin123"),
            ("", ""),
        ] {
            assert!(matches!(
                authenticator.authenticate(email, password).await,
                Err(IdentityException::InvalidCredentials)
            ));
        }
    }
}
