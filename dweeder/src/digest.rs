//! Salted one-way hashing of secrets (passwords and remember tokens).

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Produces Argon2id digests with a fixed memory and time cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digester {
    /// Memory used per hash, in KiB.
    memory_kib: u32,
    /// Passes over that memory.
    iterations: u32,
}

impl Digester {
    /// A digester with the given cost, raised to Argon2's minimums.
    pub fn new(memory_kib: u32, iterations: u32) -> Self {
        Digester {
            memory_kib: memory_kib.max(Params::MIN_M_COST),
            iterations: iterations.max(Params::MIN_T_COST),
        }
    }

    /// The cheapest digester, for tests and other lightweight contexts.
    pub fn minimum() -> Self {
        Digester::new(Params::MIN_M_COST, Params::MIN_T_COST)
    }

    pub fn memory_kib(&self) -> u32 {
        self.memory_kib
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hash `plaintext` with a fresh random salt. The result is a PHC
    /// string that carries its own parameters.
    pub fn digest(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.hasher()?.hash_password(plaintext.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    fn hasher(&self) -> Result<Argon2<'static>> {
        let params = Params::new(
            self.memory_kib,
            self.iterations,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| Error::Config(format!("argon2 parameters: {e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Digester {
    fn default() -> Self {
        Digester::new(Params::DEFAULT_M_COST, Params::DEFAULT_T_COST)
    }
}

/// Whether `plaintext` hashes to `digest`. The parameters and salt are
/// read from the digest itself.
///
/// A digest that cannot be parsed never matches.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    let parsed = match PasswordHash::new(digest) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("unreadable digest: {e}");
            return false;
        }
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_and_verify() {
        let digester = Digester::minimum();
        let digest = digester.digest("foobar").unwrap();
        assert_ne!(digest, "foobar");
        assert!(digest.starts_with("$argon2id$"));
        assert!(verify("foobar", &digest));
        assert!(!verify("foobaz", &digest));
    }

    #[test]
    fn digests_are_salted() {
        let digester = Digester::minimum();
        let a = digester.digest("same").unwrap();
        let b = digester.digest("same").unwrap();
        assert_ne!(a, b);
        assert!(verify("same", &a));
        assert!(verify("same", &b));
    }

    #[test]
    fn verify_reads_cost_from_digest() {
        let digest = Digester::new(64, 2).digest("secret").unwrap();
        assert!(verify("secret", &digest));
    }

    #[test]
    fn malformed_digest_never_matches() {
        assert!(!verify("anything", "not a digest"));
        assert!(!verify("", ""));
    }

    #[test]
    fn cost_is_raised_to_minimum() {
        let digester = Digester::new(0, 0);
        assert_eq!(digester, Digester::minimum());
        assert_eq!(digester.memory_kib(), Params::MIN_M_COST);
        assert_eq!(digester.iterations(), Params::MIN_T_COST);
        assert_eq!(Digester::default().iterations(), Params::DEFAULT_T_COST);
    }
}
