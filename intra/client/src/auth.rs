//! OAuth2 grants and bearer token acquisition.

use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;
use url::form_urlencoded::Serializer;

use crate::error::{ApiError, AuthError, ClientError};

/// Token endpoint of the intra API.
pub const TOKEN_URL: &str = "https://api.intra.42.fr/oauth/token";

/// Scope requested by [`Grant::client_credentials`].
pub const DEFAULT_SCOPE: &str = "public projects profile elearning tig forum";

/// Environment variable holding the application UID.
pub const UID_VAR: &str = "UID42";

/// Environment variable holding the application secret.
pub const SECRET_VAR: &str = "SECRET42";

/// Credentials exchanged for a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Application-only access.
    ClientCredentials {
        uid: String,
        secret: String,
        scope: String,
    },
    /// Access on behalf of a user, with the code from the OAuth redirect.
    AuthorizationCode {
        uid: String,
        secret: String,
        code: String,
        redirect_uri: String,
    },
}

impl Grant {
    /// Client credentials with the default scope.
    pub fn client_credentials(uid: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::ClientCredentials {
            uid: uid.into(),
            secret: secret.into(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Client credentials read from `UID42` and `SECRET42`.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] naming the first unset variable.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let var = |name: &str| {
            lookup(name).ok_or_else(|| AuthError::MissingCredentials {
                variable: name.to_string(),
            })
        };
        Ok(Self::client_credentials(var(UID_VAR)?, var(SECRET_VAR)?))
    }

    /// Application UID.
    pub fn uid(&self) -> &str {
        match self {
            Self::ClientCredentials { uid, .. } | Self::AuthorizationCode { uid, .. } => uid,
        }
    }

    /// Form-encoded body for the token request.
    pub(crate) fn form_body(&self) -> String {
        let mut form = Serializer::new(String::new());
        match self {
            Self::ClientCredentials { uid, secret, scope } => {
                form.append_pair("grant_type", "client_credentials")
                    .append_pair("client_id", uid)
                    .append_pair("client_secret", secret)
                    .append_pair("scope", scope);
            }
            Self::AuthorizationCode {
                uid,
                secret,
                code,
                redirect_uri,
            } => {
                form.append_pair("grant_type", "authorization_code")
                    .append_pair("client_id", uid)
                    .append_pair("client_secret", secret)
                    .append_pair("code", code)
                    .append_pair("redirect_uri", redirect_uri);
            }
        }
        form.finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges `grant` for a bearer token at `token_url`.
///
/// Only HTTP 200 is accepted.
#[instrument(skip(http, grant), fields(uid = %grant.uid()))]
pub(crate) async fn request_token(
    http: &reqwest::Client,
    token_url: &Url,
    grant: &Grant,
) -> Result<String, ApiError> {
    let response = http
        .post(token_url.clone())
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(grant.form_body())
        .send()
        .await
        .map_err(ClientError::Request)?;

    let status = response.status();
    let body = response.text().await.map_err(ClientError::Request)?;
    if status != reqwest::StatusCode::OK {
        return Err(AuthError::TokenRequestFailed {
            status: status.as_u16(),
            message: body,
        }
        .into());
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|source| AuthError::MalformedTokenResponse { source })?;
    debug!("Bearer token acquired");
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_credentials_uses_default_scope() {
        let grant = Grant::client_credentials("uid", "secret");
        assert_eq!(
            grant.form_body(),
            "grant_type=client_credentials&client_id=uid&client_secret=secret\
             &scope=public+projects+profile+elearning+tig+forum"
        );
    }

    #[test]
    fn authorization_code_form() {
        let grant = Grant::AuthorizationCode {
            uid: "uid".to_string(),
            secret: "secret".to_string(),
            code: "abc".to_string(),
            redirect_uri: "http://localhost:8080/callback".to_string(),
        };
        assert_eq!(
            grant.form_body(),
            "grant_type=authorization_code&client_id=uid&client_secret=secret&code=abc\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback"
        );
    }

    #[test]
    fn from_lookup_reads_both_variables() {
        let grant = Grant::from_lookup(|name| match name {
            "UID42" => Some("u".to_string()),
            "SECRET42" => Some("s".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(grant, Grant::client_credentials("u", "s"));
    }

    #[test]
    fn from_lookup_names_missing_variable() {
        let err = Grant::from_lookup(|name| (name == "UID42").then(|| "u".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::MissingCredentials { variable } if variable == "SECRET42"
        ));
    }
}
