//! Credential storage and token defaulting.

/// Supplies the default bearer token for operations called without one.
pub trait CredentialStore {
    /// Default bearer token, if one is configured.
    fn access_token(&self) -> Option<String>;
}

/// Environment variable read by [`Options::from_env`].
const TOKEN_ENV: &str = "NYLAS_ACCESS_TOKEN";

/// Bundled credential store holding one optional token.
#[derive(Debug, Clone, Default)]
pub struct Options {
    access_token: Option<String>,
}

impl Options {
    /// Store with a configured default token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
        }
    }

    /// Store without a default token; callers must pass one per call.
    pub fn none() -> Self {
        Self::default()
    }

    /// Read the default token from `NYLAS_ACCESS_TOKEN`.
    ///
    /// An unset or empty variable yields a store without a default, so the
    /// absence surfaces later as a `missing required field` violation.
    pub fn from_env() -> Self {
        Self {
            access_token: std::env::var(TOKEN_ENV).ok().filter(|v| !v.is_empty()),
        }
    }
}

impl CredentialStore for Options {
    fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }
}

/// Resolve the token for one call: the explicit argument wins, otherwise
/// the store default. Returns `None` when neither exists; the caller must
/// leave the field absent so validation reports it, never substitute a
/// silent null.
pub fn resolve_token<C>(explicit: Option<&str>, store: &C) -> Option<String>
where
    C: CredentialStore + ?Sized,
{
    match explicit {
        Some(token) => Some(token.to_string()),
        None => store.access_token(),
    }
}
