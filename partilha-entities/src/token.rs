use time::Duration;
use uuid::Uuid;

use crate::{id::Id, time::Timestamp};

/// An opaque, long-living token that is exchanged for a new
/// short-living access token.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token      : String,
    pub user_id    : Id,
    pub expires_at : Timestamp,
}

impl RefreshToken {
    pub fn generate(user_id: Id, now: Timestamp, valid_for: Duration) -> Self {
        let expires_at = now
            .checked_add(valid_for)
            .unwrap_or_else(|| Timestamp::from_millis(i64::MAX));
        Self {
            token: Uuid::new_v4().as_simple().to_string(),
            user_id,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}
