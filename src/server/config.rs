use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_RETENTION_DAYS: i64 = 30;

/// Credentials of the administrator created on first start.
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Origin of the frontend, the only origin allowed by CORS.
    pub app_url: String,

    pub bootstrap_admin: Option<BootstrapAdmin>,

    pub log_level: dioxus_logger::tracing::Level,
    pub log_retention_days: i64,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `APP_URL` is not set, or only
    ///   one of `ADMIN_USERNAME`/`ADMIN_PASSWORD` is set
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable holds an unusable value
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which resolves a variable name to its value.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bind_address = var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDRESS", e))?;

        let log_level = var("LOG_LEVEL")
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .parse::<dioxus_logger::tracing::Level>()
            .map_err(|e| invalid("LOG_LEVEL", e))?;

        let log_retention_days = match var("LOG_RETENTION_DAYS") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(days) if days >= 1 => days,
                Ok(days) => {
                    return Err(
                        invalid("LOG_RETENTION_DAYS", format!("{} is not positive", days)).into(),
                    )
                }
                Err(e) => return Err(invalid("LOG_RETENTION_DAYS", e).into()),
            },
            None => DEFAULT_LOG_RETENTION_DAYS,
        };

        let bootstrap_admin = match (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(BootstrapAdmin { username, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_USERNAME".to_string()).into())
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address,
            app_url: required("APP_URL")?,
            bootstrap_admin,
            log_level,
            log_retention_days,
        })
    }
}

fn invalid(name: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    const BASE: [(&str, &str); 2] = [
        ("DATABASE_URL", "sqlite::memory:"),
        ("APP_URL", "http://localhost:3000"),
    ];

    #[test]
    fn applies_defaults() {
        let config = load(&BASE).unwrap();

        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.log_level, dioxus_logger::tracing::Level::INFO);
        assert_eq!(config.log_retention_days, DEFAULT_LOG_RETENTION_DAYS);
        assert!(config.bootstrap_admin.is_none());
    }

    #[test]
    fn reports_missing_required_variable() {
        let result = load(&[("DATABASE_URL", "sqlite::memory:"), ("APP_URL", " ")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "APP_URL"
        ));
    }

    #[test]
    fn parses_log_retention_days() {
        let config = load(&[BASE[0], BASE[1], ("LOG_RETENTION_DAYS", "7")]).unwrap();
        assert_eq!(config.log_retention_days, 7);

        for raw in ["0", "-3", "week"] {
            let result = load(&[BASE[0], BASE[1], ("LOG_RETENTION_DAYS", raw)]);

            assert!(
                matches!(
                    result,
                    Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. }))
                        if name == "LOG_RETENTION_DAYS"
                ),
                "LOG_RETENTION_DAYS={} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn requires_both_admin_variables() {
        let config = load(&[
            BASE[0],
            BASE[1],
            ("ADMIN_USERNAME", "root"),
            ("ADMIN_PASSWORD", "secret"),
        ])
        .unwrap();
        let admin = config.bootstrap_admin.unwrap();
        assert_eq!(admin.username, "root");
        assert_eq!(admin.password, "secret");

        let only_username = load(&[BASE[0], BASE[1], ("ADMIN_USERNAME", "root")]);
        assert!(matches!(
            only_username,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "ADMIN_PASSWORD"
        ));

        let only_password = load(&[BASE[0], BASE[1], ("ADMIN_PASSWORD", "secret")]);
        assert!(matches!(
            only_password,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "ADMIN_USERNAME"
        ));
    }
}
