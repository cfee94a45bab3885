use std::env;

use business::domain::shared::value_objects::UserId;
use persistence::seed::SYSTEM_USER_ID;

/// Resolves the acting user for a request. Handlers only ever see a
/// `UserId`; how it was obtained stays behind this trait.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> UserId;
}

/// Single-tenant identity: every request acts as one configured user.
///
/// Environment variables:
/// - DEFAULT_USER_ID: Numeric user id (default: the seeded system user)
pub struct FixedIdentity {
    user_id: UserId,
}

impl FixedIdentity {
    pub fn from_env() -> Self {
        let user_id = env::var("DEFAULT_USER_ID")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(SYSTEM_USER_ID);

        Self {
            user_id: UserId::new(user_id),
        }
    }

    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> UserId {
        self.user_id
    }
}
