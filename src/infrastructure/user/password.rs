//! Secret hashing with Argon2id
//!
//! Derivation is deterministic for a given (password, salt) pair so a
//! stored key can be recomputed for verification; verification compares
//! in constant time.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::domain::user::{User, UserOption};
use crate::domain::DomainError;

const DEFAULT_TIME_COST: u32 = 1;
/// 16 MiB, expressed in KiB as Argon2 expects
const DEFAULT_MEMORY_COST: u32 = 16 * 1024;
const DEFAULT_PARALLELISM: u32 = 4;
const DEFAULT_KEY_LENGTH: usize = 32;

/// Bytes of entropy behind each password salt
const SALT_LENGTH: usize = 64;

/// Memory-hard secret hasher.
///
/// Defaults are tuned for interactive logins: a single pass over 16 MiB
/// across 4 lanes, producing a 32-byte key.
#[derive(Debug, Clone)]
pub struct SecretHasher {
    time_cost: u32,
    memory_cost: u32,
    parallelism: u32,
    key_length: usize,
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_TIME_COST,
            memory_cost: DEFAULT_MEMORY_COST,
            parallelism: DEFAULT_PARALLELISM,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl SecretHasher {
    /// Create a hasher with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of iterations.
    pub fn with_time_cost(mut self, time_cost: u32) -> Self {
        self.time_cost = time_cost;
        self
    }

    /// Set the memory cost in KiB.
    pub fn with_memory_cost(mut self, memory_cost: u32) -> Self {
        self.memory_cost = memory_cost;
        self
    }

    /// Set the number of lanes.
    pub fn with_parallelism(mut self, parallelism: u32) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Set the derived key length in bytes.
    pub fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    /// Derive a key from a password and salt, URL-safe base64 encoded.
    ///
    /// Deterministic: the same inputs always produce the same output. The
    /// salt text is fed to Argon2 as raw bytes. Password strength is not
    /// judged here; an empty password hashes like any other.
    pub fn hash(&self, password: &str, salt: &str) -> Result<String, DomainError> {
        let params = Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(self.key_length),
        )
        .map_err(|e| DomainError::credential(format!("invalid hash parameters: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut key = vec![0u8; self.key_length];
        argon2
            .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut key)
            .map_err(|e| DomainError::credential(format!("failed to derive key: {}", e)))?;

        Ok(URL_SAFE_NO_PAD.encode(key))
    }

    /// Verify a password against a previously stored derived key.
    ///
    /// Recomputes the key from `password` and `salt` and compares it to
    /// `stored` in constant time; any inequality, including a length
    /// difference, is a [`DomainError::SecretMismatch`].
    pub fn compare(&self, stored: &str, password: &str, salt: &str) -> Result<(), DomainError> {
        let computed = self.hash(password, salt)?;

        if !constant_time_compare(stored, &computed) {
            return Err(DomainError::SecretMismatch);
        }

        Ok(())
    }
}

/// Generate `length` bytes of secure randomness from the OS entropy
/// source, URL-safe base64 encoded.
pub fn generate_salt(length: usize) -> Result<String, DomainError> {
    generate_salt_with(&mut OsRng, length)
}

/// Like [`generate_salt`], but drawing from a caller-supplied source so
/// tests can inject deterministic entropy.
pub fn generate_salt_with<R>(rng: &mut R, length: usize) -> Result<String, DomainError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = vec![0u8; length];

    rng.try_fill_bytes(&mut buf)
        .map_err(|e| DomainError::random_source(e.to_string()))?;

    Ok(URL_SAFE_NO_PAD.encode(buf))
}

/// Option that hashes a password under a fresh salt and sets both
/// credential fields together. Fails if salt generation fails.
///
/// Uses the default hasher configuration; pair with
/// [`set_password_with`] when the verifying service is configured
/// differently.
pub fn set_password(password: impl Into<String>) -> UserOption {
    set_password_with(SecretHasher::new(), password)
}

/// Like [`set_password`], hashing with a caller-supplied configuration.
pub fn set_password_with(hasher: SecretHasher, password: impl Into<String>) -> UserOption {
    let password = password.into();
    Box::new(move |user: &mut User| {
        let salt = generate_salt(SALT_LENGTH)?;
        let hashed = hasher.hash(&password, &salt)?;
        user.set_credentials(hashed, salt);
        Ok(())
    })
}

/// Constant-time string equality; comparison time does not depend on
/// where the first differing byte occurs.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut result = 0u8;

    for i in 0..a.len() {
        result |= a_bytes[i] ^ b_bytes[i];
    }

    result == 0
}
