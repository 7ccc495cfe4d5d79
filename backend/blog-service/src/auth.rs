/// Bearer token handling for blog-service
///
/// Tokens are HS256 JWTs whose `sub` claim is the caller's user id. Keys are
/// built once at startup from configuration and shared with the auth
/// middleware through actix app data.
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("secret", &"[REDACTED]")
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign a token for `user_id` that expires after `ttl`.
    pub fn issue_token(
        &self,
        user_id: Uuid,
        username: &str,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding)
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenData<Claims>, JwtError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
    }
}
