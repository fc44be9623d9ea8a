use crate::server::error::config::ConfigError;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().map_err(|_| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: format!("expected a port number, got {:?}", port),
                })?,
                Err(_) => 3003,
            },
            admin_email: require_var("ADMIN_EMAIL")?,
            admin_password: require_var("ADMIN_PASSWORD")?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
