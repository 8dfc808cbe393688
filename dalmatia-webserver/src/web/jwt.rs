use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The id of the user
    sub: String,
    /// Expiry time as Unix timestamp
    exp: u64,
}

/// Generate a 256-bit base64 encoded secret
fn generate_secret() -> String {
    BASE64.encode(rand::random::<[u8; 32]>())
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        Self {
            encoding_key,
            decoding_key,
        }
    }
}

pub struct JwtState {
    key: Key,
    time_valid: Duration,
}

impl JwtState {
    pub fn new(secret: &str, time_valid: Duration) -> Self {
        Self {
            key: Key::new(secret),
            time_valid,
        }
    }

    /// Tokens signed with a random secret are only
    /// valid until the server restarts.
    pub fn random(time_valid: Duration) -> Self {
        Self::new(&generate_secret(), time_valid)
    }

    pub fn generate_token(&self, user_id: &str) -> Result<String> {
        let exp = u64::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<String> {
        let token_data = decode::<Claims>(
            token,
            &self.key.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_works() {
        let jwt_state = JwtState::random(Duration::days(7));
        let token = jwt_state.generate_token("user-1").unwrap();
        let user_id = jwt_state.validate_token_and_get_user_id(&token).unwrap();
        assert_eq!(user_id, "user-1");
        assert!(jwt_state
            .validate_token_and_get_user_id("dubidubidu")
            .is_err());
    }

    #[test]
    fn tokens_of_other_secrets_are_rejected() {
        let a = JwtState::new("secret-a", Duration::hours(1));
        let b = JwtState::new("secret-b", Duration::hours(1));
        let token = a.generate_token("user-1").unwrap();
        assert!(b.validate_token_and_get_user_id(&token).is_err());
        let same = JwtState::new("secret-a", Duration::hours(1));
        assert_eq!(
            "user-1",
            same.validate_token_and_get_user_id(&token).unwrap()
        );
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let jwt_state = JwtState::new("secret", Duration::minutes(-10));
        let token = jwt_state.generate_token("user-1").unwrap();
        assert!(jwt_state.validate_token_and_get_user_id(&token).is_err());
    }
}
