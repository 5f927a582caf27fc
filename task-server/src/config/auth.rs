use serde::Deserialize;

/// Credential verification configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to verify token signatures - mandatory at startup
    #[serde(default)]
    pub secret: String,

    /// Clock-skew leeway in seconds applied to expiry checks (default: 30)
    #[serde(default = "default_leeway")]
    pub leeway: u64,
}

fn default_leeway() -> u64 {
    30
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            leeway: default_leeway(),
        }
    }
}
