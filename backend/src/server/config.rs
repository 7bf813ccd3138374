//! Listener settings loaded via OrthoConfig.
//!
//! Values come from `EMAIL_FINDER_*` environment variables, an optional
//! configuration file and command-line flags, in OrthoConfig's usual order of
//! precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings controlling where the HTTP server listens.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMAIL_FINDER")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

/// Failure to turn [`ServerSettings`] into a socket address.
#[derive(Debug, Error)]
pub enum BindAddrError {
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`BindAddrError::InvalidHost`] when the host is not an IP
    /// address literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| BindAddrError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("email-finder")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("EMAIL_FINDER_HOST", None::<String>),
            ("EMAIL_FINDER_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port, 8080);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EMAIL_FINDER_HOST", Some("127.0.0.1".to_owned())),
            ("EMAIL_FINDER_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("configured address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    fn cli_flags_override_defaults() {
        let _guard = lock_env([
            ("EMAIL_FINDER_HOST", None::<String>),
            ("EMAIL_FINDER_PORT", None::<String>),
        ]);

        let settings = ServerSettings::load_from_iter([
            OsString::from("email-finder"),
            OsString::from("--port"),
            OsString::from("9191"),
        ])
        .expect("config should load");
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port, 9191);
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let settings = ServerSettings {
            host: Some("localhost".to_owned()),
            port: 8080,
        };
        let err = settings.bind_addr().expect_err("hostname is not an IP literal");
        assert!(err.to_string().starts_with("invalid bind host \"localhost\""));
    }
}
