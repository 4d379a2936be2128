//! Authorization guards: self-access and the admin-role check.

use async_trait::async_trait;

use techland_core::result::AppResult;
use techland_database::repositories::user::UserRepository;
use techland_entity::user::User;

use crate::jwt::claims::Claims;

/// Read-only user lookup used by the admin check.
///
/// The guard performs exactly one external read; everything else it does
/// is pure. Keeping the lookup behind a trait keeps the guard independent
/// of the storage backend.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a user record by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }
}

/// Returns true iff the principal's email matches the requested email.
///
/// Gates per-user data queries; callers translate `false` into a
/// `Forbidden` response and must never return partial data on mismatch.
pub fn authorize_self(principal: &Claims, requested_email: &str) -> bool {
    principal.email == requested_email
}

/// Returns true iff a user record exists for `email` and its role is admin.
pub async fn check_admin(directory: &dyn UserDirectory, email: &str) -> AppResult<bool> {
    let user = directory.find_by_email(email).await?;
    Ok(user.map(|u| u.is_admin()).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use techland_entity::user::UserRole;
    use uuid::Uuid;

    struct MapDirectory(HashMap<String, User>);

    #[async_trait]
    impl UserDirectory for MapDirectory {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self.0.get(email).cloned())
        }
    }

    fn user(email: &str, role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: None,
            role,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    fn claims(email: &str) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            email: email.to_string(),
            iat: now,
            exp: now + 3600,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_authorize_self() {
        let principal = claims("a@x.com");
        assert!(authorize_self(&principal, "a@x.com"));
        assert!(!authorize_self(&principal, "b@x.com"));
        assert!(!authorize_self(&principal, ""));
    }

    #[test]
    fn test_issue_verify_authorize_flow() {
        let config = techland_core::config::AuthConfig {
            jwt_secret: "flow-secret".to_string(),
            ..Default::default()
        };
        let issuer = crate::TokenIssuer::new(&config);
        let verifier = crate::TokenVerifier::new(&config);

        let issued = issuer
            .issue_login_token("a@x.com", Default::default())
            .unwrap();
        let principal = verifier.verify(&issued.token).unwrap();

        assert!(authorize_self(&principal, "a@x.com"));
        assert!(!authorize_self(&principal, "b@x.com"));
    }

    #[tokio::test]
    async fn test_check_admin_for_admin_user() {
        let directory = MapDirectory(HashMap::from([(
            "a@x.com".to_string(),
            user("a@x.com", UserRole::Admin),
        )]));

        assert!(check_admin(&directory, "a@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_check_admin_for_regular_user() {
        let directory = MapDirectory(HashMap::from([(
            "a@x.com".to_string(),
            user("a@x.com", UserRole::User),
        )]));

        assert!(!check_admin(&directory, "a@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_check_admin_for_absent_user() {
        let directory = MapDirectory(HashMap::new());
        assert!(!check_admin(&directory, "ghost@x.com").await.unwrap());
    }
}
