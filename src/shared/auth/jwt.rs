use crate::shared::auth::claims::{AuthError, TokenClaims, TokenVerifier};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// HS256 bearer token verifier. Only the signature is checked here; expiry and
/// required claims are policy and are applied by `Credential::resolve`.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        let no_required_claims: &[&str] = &[];
        validation.set_required_spec_claims(no_required_claims);

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| AuthError::InvalidToken(err.to_string()))
    }
}
