use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::EnvironmentError;

/// Environment settings for one build of the front-end.
///
/// The serialized field names are the contract the application and the
/// identity-provider integration bind to, so the Rust names are mapped back
/// onto them with serde renames. URL-valued fields stay `String` rather than
/// `url::Url`: parsing normalizes a URL (e.g. appends a trailing slash), and
/// the record must serialize back byte-for-byte to what was authored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Environment {
    /// Build mode flag. Swapping it never affects any other field.
    pub production: bool,
    /// Base URL of the API server, e.g. "http://127.0.0.1:5000".
    #[serde(rename = "apiServerUrl")]
    pub api_server_url: String,
    /// Identity-provider descriptor.
    pub auth0: Auth0Settings,
}

/// The Auth0 descriptor nested under `auth0` in the settings record.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Auth0Settings {
    /// Tenant domain, e.g. "coffee-app-ufsnd.us.auth0.com". Bare domain,
    /// no scheme.
    pub url: String,
    /// Identifier of the protected resource tokens are issued for.
    pub audience: String,
    /// Public client identifier issued by the identity provider.
    #[serde(rename = "clientId")]
    pub client_id: String,
    /// URL the identity provider redirects to after login.
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Environment {
    /// Join a relative path onto the API base URL.
    ///
    /// The base is treated as a directory root, so "http://host/api" +
    /// "drinks" yields "http://host/api/drinks" whether or not the base
    /// carries a trailing slash.
    pub fn api_endpoint(&self, path: &str) -> Result<Url, EnvironmentError> {
        let mut base =
            Url::parse(&self.api_server_url).map_err(|source| EnvironmentError::InvalidUrl {
                field: "apiServerUrl",
                source,
            })?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|source| EnvironmentError::InvalidUrl {
                field: "apiServerUrl",
                source,
            })
    }
}

impl Auth0Settings {
    /// Assemble the hosted-login URL the front-end sends users to.
    ///
    /// Pure URL construction from the descriptor; no network call is made
    /// and no token is handled here.
    pub fn authorize_url(&self) -> Result<Url, EnvironmentError> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.url)).map_err(|source| {
            EnvironmentError::InvalidUrl {
                field: "auth0.url",
                source,
            }
        })?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }
}
