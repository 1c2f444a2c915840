//! Short-lived access tokens.
//!
//! Access tokens are signed with HS256 and carry the user id.
//! Tokens of users that logged out are remembered until they
//! expire on their own.

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::core::entities::Id;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id
    sub: String,
    /// Expiry time as Unix timestamp
    exp: u64,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    // Tokens signed with a random key become invalid after a restart
    fn random() -> Self {
        let secret = format!(
            "{}{}",
            Uuid::new_v4().as_simple(),
            Uuid::new_v4().as_simple()
        );
        Self::new(&secret)
    }
}

pub struct JwtState {
    key: Key,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(secret: Option<&str>, time_valid: Duration) -> Self {
        let key = match secret {
            Some(secret) => Key::new(secret),
            None => {
                warn!("No JWT secret configured: using a random key");
                Key::random()
            }
        };
        Self {
            key,
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn time_valid(&self) -> Duration {
        self.time_valid
    }

    pub fn generate_token(&self, user_id: Id) -> Result<String> {
        let exp = u64::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.key.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token(&self, token: &str) -> Result<Id> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.decode(token)?;
        let user_id = claims.sub.parse::<Id>()?;
        Ok(user_id)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let invalid_tokens = self
            .lock()
            .iter()
            .filter(|token| self.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        let mut blacklist = self.lock();
        for token in invalid_tokens {
            blacklist.remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}
