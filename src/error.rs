use thiserror::Error;

/// Errors surfaced while loading or validating an environment record.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// The settings source could not be read or did not match the record
    /// shape (missing file, malformed YAML, missing field).
    #[error("failed to load environment settings: {0}")]
    Load(#[from] figment::Error),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{field}` is not a valid URL: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// The identity-provider domain must be a bare host, no scheme or path.
    #[error("auth0.url must be a bare domain, got `{0}`")]
    NotADomain(String),
}
