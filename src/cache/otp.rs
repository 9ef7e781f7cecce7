//! One-time passcode storage. Codes are never stored in the clear: Redis
//! holds an HMAC-SHA256 of `email:code` keyed by the JWT secret, with the
//! configured TTL. A code verifies at most once.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::cache::redis as cache;
use crate::error::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct OtpStore {
    client: redis::Client,
    secret: String,
    ttl: u64,
}

impl OtpStore {
    pub fn new(client: redis::Client, secret: String, ttl: u64) -> Self {
        Self {
            client,
            secret,
            ttl,
        }
    }

    fn key(email: &str) -> String {
        format!("otp:{}", email.to_lowercase())
    }

    fn digest(&self, email: &str, code: &str) -> AppResult<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| AppError::internal("Invalid OTP signing key"))?;
        mac.update(format!("{}:{}", email.to_lowercase(), code).as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Generates and stores a fresh 6-digit code, replacing any prior one.
    pub async fn issue(&self, email: &str) -> AppResult<String> {
        let code = format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000);
        let digest = self.digest(email, &code)?;
        cache::set_string_ex(&self.client, &Self::key(email), &digest, self.ttl).await?;
        Ok(code)
    }

    /// True when the code matches the stored digest; the digest is deleted
    /// on success so a code cannot be replayed.
    pub async fn verify(&self, email: &str, code: &str) -> AppResult<bool> {
        let key = Self::key(email);
        let stored = match cache::get_string(&self.client, &key).await? {
            Some(stored) => stored,
            None => return Ok(false),
        };

        if stored != self.digest(email, code)? {
            return Ok(false);
        }

        cache::delete(&self.client, &key).await?;
        Ok(true)
    }
}
