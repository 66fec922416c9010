use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for issuing and validating access tokens.
///
/// The signing key, issuer, and audience are explicit constructor
/// dependencies; there is no process-wide signing state. Uses HS256
/// (HMAC with SHA-256).
///
/// A token is valid from issuance until its embedded expiry and invalid
/// forever after. There is no revocation; refreshing means issuing a brand
/// new token.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    /// * `issuer` - Value stamped into and required from the `iss` claim
    /// * `audience` - Value stamped into and required from the `aud` claim
    ///
    /// # Errors
    /// * `MissingSecret` - The signing key is empty. Tokens must never be
    ///   issued without one, so this fails at construction rather than at
    ///   first use.
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
            audience: audience.into(),
        })
    }

    /// Issue a signed token for the given claims.
    ///
    /// Stamps the configured issuer and audience into the claims before
    /// signing; the expiry was fixed when the claims were constructed.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn issue(&self, mut claims: Claims) -> Result<String, JwtError> {
        claims.iss = self.issuer.clone();
        claims.aud = self.audience.clone();

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Check whether a token is currently valid.
    ///
    /// True iff the signature verifies, issuer and audience match the
    /// configuration exactly, and the expiry instant has not passed (zero
    /// clock-skew tolerance). Malformed input is simply invalid; this never
    /// returns an error to the caller.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Decode and fully validate a token, returning its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - The expiry instant has passed
    /// * `DecodingFailed` - Signature mismatch, issuer/audience mismatch, or
    ///   malformed token
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract the subject id without verifying signature or expiry.
    ///
    /// Diagnostic/lookup use only: the result proves nothing about
    /// authenticity and must never drive an authorization decision.
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        self.decode_unverified(token).map(|claims| claims.sub).ok()
    }

    /// Extract the email claim without verifying signature or expiry.
    ///
    /// Same caveat as [`extract_subject`](Self::extract_subject).
    pub fn extract_email(&self, token: &str) -> Option<String> {
        self.decode_unverified(token)
            .map(|claims| claims.email)
            .ok()
    }

    fn decode_unverified(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| JwtError::DecodingFailed(e.to_string()))?;

        Ok(token_data.claims)
    }
}
