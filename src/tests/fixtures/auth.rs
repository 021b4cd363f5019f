use crate::shared::auth::claims::TokenClaims;
use jsonwebtoken::{EncodingKey, Header, encode};

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-do-not-use-in-production";

pub fn make_token(claims: &TokenClaims, secret: &[u8]) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret)).unwrap()
}

/// `Authorization` header value for a fully authenticated caller.
pub fn bearer_for(user_id: i64, username: &str, tenant_id: i64) -> String {
    let claims = TokenClaims {
        sub: Some(username.to_string()),
        user_id: Some(user_id),
        tenant_id: Some(tenant_id),
        exp: Some(chrono::Utc::now().timestamp() + 3_600),
    };
    format!("Bearer {}", make_token(&claims, TEST_JWT_SECRET))
}
