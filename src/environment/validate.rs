use url::Url;

use crate::environment::types::{Auth0Settings, Environment};
use crate::error::EnvironmentError;

impl Environment {
    /// Check that every field is present and well-formed for a build.
    ///
    /// Loading is deliberately permissive (an empty string is valid YAML);
    /// this is the explicit step build tooling runs before trusting the
    /// record.
    pub fn validate(&self) -> Result<(), EnvironmentError> {
        require_url("apiServerUrl", &self.api_server_url)?;
        self.auth0.validate()
    }
}

impl Auth0Settings {
    pub fn validate(&self) -> Result<(), EnvironmentError> {
        require_domain("auth0.url", &self.url)?;
        require("auth0.audience", &self.audience)?;
        require("auth0.clientId", &self.client_id)?;
        require_url("auth0.callbackURL", &self.callback_url)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), EnvironmentError> {
    if value.trim().is_empty() {
        return Err(EnvironmentError::EmptyField(field));
    }
    Ok(())
}

fn require_url(field: &'static str, value: &str) -> Result<(), EnvironmentError> {
    require(field, value)?;
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| EnvironmentError::InvalidUrl { field, source })
}

fn require_domain(field: &'static str, value: &str) -> Result<(), EnvironmentError> {
    require(field, value)?;
    if value.contains("://") || value.contains('/') || value.contains(char::is_whitespace) {
        return Err(EnvironmentError::NotADomain(value.to_string()));
    }
    // Must still be a parseable host once a scheme is attached.
    let parsed = Url::parse(&format!("https://{value}"))
        .map_err(|_| EnvironmentError::NotADomain(value.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(EnvironmentError::NotADomain(value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Environment {
        Environment {
            production: true,
            api_server_url: "https://api.coffee.example.com".to_string(),
            auth0: Auth0Settings {
                url: "coffee-app-ufsnd.us.auth0.com".to_string(),
                audience: "drink".to_string(),
                client_id: "MksFZp4vVu1kY1I6LFqXfCRmx6nKfgHL".to_string(),
                callback_url: "https://coffee.example.com/".to_string(),
            },
        }
    }

    #[test]
    fn accepts_a_complete_record() {
        sample().validate().expect("sample record is valid");
    }

    #[test]
    fn rejects_empty_audience() {
        let mut environment = sample();
        environment.auth0.audience = "  ".to_string();
        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::EmptyField("auth0.audience")
        ));
    }

    #[test]
    fn rejects_empty_client_id() {
        let mut environment = sample();
        environment.auth0.client_id = String::new();
        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::EmptyField("auth0.clientId")
        ));
    }

    #[test]
    fn rejects_empty_api_server_url() {
        let mut environment = sample();
        environment.api_server_url = String::new();
        let err = environment.validate().unwrap_err();
        assert!(matches!(err, EnvironmentError::EmptyField("apiServerUrl")));
    }

    #[test]
    fn rejects_empty_callback_url() {
        let mut environment = sample();
        environment.auth0.callback_url = "  ".to_string();
        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::EmptyField("auth0.callbackURL")
        ));
    }

    #[test]
    fn rejects_relative_api_server_url() {
        let mut environment = sample();
        environment.api_server_url = "127.0.0.1:5000/api".to_string();
        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::InvalidUrl {
                field: "apiServerUrl",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_callback_url() {
        let mut environment = sample();
        environment.auth0.callback_url = "not a url".to_string();
        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            EnvironmentError::InvalidUrl {
                field: "auth0.callbackURL",
                ..
            }
        ));
    }

    #[test]
    fn rejects_domain_with_scheme() {
        let mut environment = sample();
        environment.auth0.url = "https://coffee-app-ufsnd.us.auth0.com".to_string();
        let err = environment.validate().unwrap_err();
        assert!(matches!(err, EnvironmentError::NotADomain(_)));
    }

    #[test]
    fn rejects_domain_with_path() {
        let mut environment = sample();
        environment.auth0.url = "coffee-app-ufsnd.us.auth0.com/tenant".to_string();
        let err = environment.validate().unwrap_err();
        assert!(matches!(err, EnvironmentError::NotADomain(_)));
    }
}
