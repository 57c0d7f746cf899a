//! Dashboard login accounts.

use serde::Deserialize;
use std::fmt;

use crate::ids::UserId;

/// A user to seed. `password` is the plaintext; only its bcrypt hash is ever
/// written to the database.
#[derive(Clone, Deserialize)]
pub struct UserSeed {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for UserSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSeed")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let user = UserSeed {
            id: UserId::from_u128(1),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            password: "secret".into(),
        };

        let rendered = format!("{:?}", user);
        assert!(rendered.contains("ana@x.com"));
        assert!(!rendered.contains("secret"));
    }
}
