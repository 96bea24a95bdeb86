use std::path::PathBuf;

pub const DEFAULT_AUTH_COOKIE_NAME: &str = "furqan_auth";

#[derive(Clone)]
pub struct AppConfig {
    /// Directory holding the document collections.
    pub root: PathBuf,
    pub app_name: String,
    pub auth: Option<AuthConfig>,
}

#[derive(Clone)]
pub struct AuthConfig {
    /// Base64-encoded HS256 signing key.
    pub key: String,
    pub token_ttl: time::Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Settings for a key generated at startup. Sessions signed with an
    /// ephemeral key do not survive a restart.
    pub fn ephemeral(key: String) -> Self {
        Self {
            key,
            token_ttl: time::Duration::days(14),
            cookie_name: DEFAULT_AUTH_COOKIE_NAME.to_string(),
            cookie_secure: false,
        }
    }
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: "/".into(),
            app_name: "Al-Furqan".to_string(),
            auth: None,
        }
    }
}
