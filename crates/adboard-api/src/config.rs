use adboard_core::AppError;
use adboard_core::password::DEFAULT_COST;

const DEFAULT_PORT: u16 = 5000;

/// Process-wide server settings, resolved once at startup.
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// HS256 signing secret for bearer tokens.
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `JWT_SECRET` (required; there is no fallback secret)
    /// - `PORT` (optional, defaults to 5000)
    /// - `ADBOARD_BCRYPT_COST` (optional, defaults to 10)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("JWT_SECRET must be set to a non-empty value".into())
            })?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid PORT '{raw}': must be 0-65535"))
            })?,
        };

        let bcrypt_cost = match lookup("ADBOARD_BCRYPT_COST") {
            None => DEFAULT_COST,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid ADBOARD_BCRYPT_COST '{raw}': must be a positive integer"
                ))
            })?,
        };

        Ok(Self {
            port,
            jwt_secret,
            bcrypt_cost,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
