use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::debug;

use super::domain::Identity;
use super::errors::AuthError;

/// Validates bearer tokens issued by the external identity provider.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Pull the token out of an `Authorization` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingToken)?;
    let (scheme, token) = header.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

/// HS256 JWT verifier. Expiry is always checked; issuer and audience are
/// checked when a project id is configured.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str, project_id: Option<&str>) -> Self {
        Self::from_config(&configs::AuthConfig {
            jwt_secret: secret.to_string(),
            project_id: project_id.map(str::to_string),
        })
    }

    pub fn from_config(cfg: &configs::AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        match (cfg.issuer(), cfg.project_id.as_deref()) {
            (Some(issuer), Some(project)) => {
                validation.set_issuer(&[issuer]);
                validation.set_audience(&[project]);
                validation.set_required_spec_claims(&["exp", "iss", "aud"]);
            }
            _ => validation.validate_aud = false,
        }
        Self { key: DecodingKey::from_secret(cfg.jwt_secret.as_bytes()), validation }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            debug!(err = %e, "token rejected");
            AuthError::InvalidToken(e.to_string())
        })?;
        Ok(Identity { subject: data.claims.sub, email: data.claims.email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        email: &'a str,
        exp: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        iss: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aud: Option<&'a str>,
    }

    fn token(secret: &str, exp_offset: i64, project: Option<&str>) -> String {
        let claims = TestClaims {
            sub: "seller-1",
            email: "seller@example.com",
            exp: chrono::Utc::now().timestamp() + exp_offset,
            iss: project.map(|p| format!("https://securetoken.google.com/{p}")),
            aud: project,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn bearer_header_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc")), Ok("abc"));
        assert_eq!(bearer_token(Some("bearer  abc ")), Ok("abc"));
        assert_eq!(bearer_token(None), Err(AuthError::MissingToken));
        assert_eq!(bearer_token(Some("Bearer ")), Err(AuthError::MissingToken));
        assert_eq!(bearer_token(Some("Basic abc")), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token(Some("abc")), Err(AuthError::MalformedHeader));
    }

    #[tokio::test]
    async fn accepts_valid_token() {
        let verifier = JwtVerifier::new("secret", None);
        let identity = verifier.verify(&token("secret", 3600, None)).await.unwrap();
        assert_eq!(identity.subject, "seller-1");
        assert_eq!(identity.email.as_deref(), Some("seller@example.com"));
    }

    #[tokio::test]
    async fn rejects_wrong_secret_and_expired() {
        let verifier = JwtVerifier::new("secret", None);
        assert!(verifier.verify(&token("other", 3600, None)).await.is_err());
        assert!(verifier.verify(&token("secret", -3600, None)).await.is_err());
        assert!(verifier.verify("not-a-jwt").await.is_err());
    }

    #[tokio::test]
    async fn project_pins_issuer_and_audience() {
        let verifier = JwtVerifier::new("secret", Some("flowing-fusion"));
        assert!(verifier.verify(&token("secret", 3600, Some("flowing-fusion"))).await.is_ok());
        assert!(verifier.verify(&token("secret", 3600, Some("someone-else"))).await.is_err());
        assert!(verifier.verify(&token("secret", 3600, None)).await.is_err());
    }
}
