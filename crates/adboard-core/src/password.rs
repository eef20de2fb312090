//! One-way salted password hashing (bcrypt).

use crate::error::AppError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

/// Lowest cost bcrypt accepts. Only suitable for tests.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Hashes and verifies passwords with a fixed bcrypt work factor.
///
/// Every hash embeds a fresh random salt, so hashing the same plaintext
/// twice yields different strings. Compare with [`PasswordHasher::verify`],
/// never with `==`.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, AppError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AppError::ConfigError(format!(
                "bcrypt cost {cost} out of range {MIN_COST}..={MAX_COST}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {e}");
            AppError::PasswordHash(e.to_string())
        })
    }

    /// Check `plaintext` against a stored hash.
    ///
    /// A malformed hash verifies as `false`. The digest comparison is
    /// constant-time.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        match bcrypt::verify(plaintext, hashed) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {e}");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}
