use std::env;
use std::net::SocketAddr;

/// Service configuration, read once at startup.
///
/// Environment overrides: `TINCT_BIND` for the listen address and
/// `TINCT_ALLOWED_ORIGIN` for the CORS origin.
#[derive(Clone, Debug)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind: SocketAddr,
    /// The one origin browsers may call this service from.
    pub allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            allowed_origin: "http://localhost:3000".to_owned(),
        }
    }
}

impl Config {
    /// Builds a config from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env::var("TINCT_BIND")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.bind),
            allowed_origin: env::var("TINCT_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let config = Config::default();
        assert_eq!(config.bind.port(), 5000);
        assert!(config.bind.ip().is_unspecified());
    }

    #[test]
    fn default_origin_is_a_parseable_header_value() {
        let config = Config::default();
        assert!(config.allowed_origin.parse::<axum::http::HeaderValue>().is_ok());
    }
}
