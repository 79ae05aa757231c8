// User DTOs
//
// A "guest" is not a distinct entity: `get_guests` returns User-shaped rows
// still awaiting an accept/decline decision.

use serde::{Deserialize, Serialize};

/// A user as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    /// Sent back by the backend in plaintext. Known defect of the upstream
    /// API; carried as-is so payload round-trips stay faithful.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub balance: f64,
    /// Events this user is assigned to.
    #[serde(default)]
    pub event_ids: Vec<i64>,
}

/// A user pending approval. Same wire shape as [`User`].
pub type Guest = User;

/// Payload for `add_user` and `update_user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub event_ids: Vec<i64>,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            password: user.password.clone(),
            balance: user.balance,
            event_ids: user.event_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_missing_optional_fields() {
        let user: User =
            serde_json::from_str(r#"{"user_id":7,"email":"g@example.com","name":"Guest"}"#)
                .unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.balance, 0.0);
        assert!(user.event_ids.is_empty());
        assert!(user.password.is_empty());
    }

    #[test]
    fn payload_from_user_drops_the_id() {
        let user = User {
            user_id: 3,
            email: "a@b.c".into(),
            name: "A".into(),
            password: "pw".into(),
            balance: 12.5,
            event_ids: vec![1, 2],
        };
        let payload = UserPayload::from(&user);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("user_id").is_none());
        assert_eq!(value["event_ids"], serde_json::json!([1, 2]));
    }
}
