//! Random tokens handed to clients.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};

/// Bytes of randomness in a token.
pub const TOKEN_BYTES: usize = 16;

/// A new URL-safe random token with 128 bits of entropy.
pub fn new_token() -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}
