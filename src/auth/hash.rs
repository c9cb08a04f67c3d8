//! Digest computation for both security levels

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::error::ValidationError;

/// Length of a projector or client random at security level 2
pub const RANDOM_LEN: usize = 16;

/// Level 1 digest: lowercase hex of `MD5(random_hex + password)`
pub fn level1_digest(random_hex: &str, password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(random_hex.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Level 2 digest: lowercase hex of
/// `SHA256(hex(client_random XOR projector_random) + password)`
pub fn level2_digest(
    client_random: &[u8],
    projector_random: &[u8],
    password: &str,
) -> Result<String, ValidationError> {
    let combined = xor_randoms(client_random, projector_random)?;
    let mut hasher = Sha256::new();
    hasher.update(hex::encode(combined).as_bytes());
    hasher.update(password.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Byte-wise XOR of two 16-byte randoms
pub fn xor_randoms(a: &[u8], b: &[u8]) -> Result<[u8; RANDOM_LEN], ValidationError> {
    for operand in [a, b] {
        if operand.len() != RANDOM_LEN {
            return Err(ValidationError::InvalidDataBufferCount {
                expected: RANDOM_LEN,
                actual: operand.len(),
            });
        }
    }

    let mut combined = [0u8; RANDOM_LEN];
    for (out, (x, y)) in combined.iter_mut().zip(a.iter().zip(b)) {
        *out = x ^ y;
    }
    Ok(combined)
}
