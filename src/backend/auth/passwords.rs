/**
 * Password Hashing
 *
 * One-way hashing and verification of user passwords using bcrypt.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * rejected with `HashError::TooLong` instead of being silently truncated, so
 * two passwords sharing a 72-byte prefix can never verify against each other.
 */

use thiserror::Error;

/// Largest password, in bytes, that bcrypt hashes without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Cheapest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Most expensive cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
    /// Plaintext exceeds bcrypt's input limit
    #[error("password is {0} bytes, bcrypt accepts at most 72")]
    TooLong(usize),

    /// Configured cost outside bcrypt's supported range
    #[error("bcrypt cost {0} is outside 4..=31")]
    InvalidCost(u32),

    /// bcrypt failed, e.g. because a stored hash is malformed
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking hashing task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Credential hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Result<Self, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    /// The bcrypt cost this hasher uses
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashError::TooLong(plaintext.len()));
        }
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A mismatch is `Ok(false)`. Only a malformed stored hash is an error.
    /// A plaintext longer than `MAX_PASSWORD_BYTES` never matches, since no
    /// stored hash can have been made from it.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        Ok(bcrypt::verify(plaintext, hash)?)
    }

    /// Spend the same work as a `verify` without a stored hash to check
    ///
    /// Used when a login names an unknown user so the response takes as long
    /// as a wrong password would.
    pub fn burn(&self, plaintext: &str) {
        let _ = self.hash(plaintext);
    }

    /// `hash` on the blocking thread pool
    pub async fn hash_blocking(self, plaintext: String) -> Result<String, HashError> {
        tokio::task::spawn_blocking(move || self.hash(&plaintext)).await?
    }

    /// `verify` on the blocking thread pool
    pub async fn verify_blocking(self, plaintext: String, hash: String) -> Result<bool, HashError> {
        tokio::task::spawn_blocking(move || self.verify(&plaintext, &hash)).await?
    }

    /// `burn` on the blocking thread pool
    pub async fn burn_blocking(self, plaintext: String) {
        if let Err(e) = tokio::task::spawn_blocking(move || self.burn(&plaintext)).await {
            tracing::error!("Dummy password check failed: {}", e);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}
