//! Hex-encoded byte buffers used by the authentication handshake

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Bytes parsed from (and formatted as) lowercase hex text
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HexBuffer(Vec<u8>);

impl HexBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        HexBuffer(bytes)
    }

    /// Parse hex text that must decode to exactly `count` bytes
    pub fn parse_exact(text: &str, count: usize) -> Result<Self, ValidationError> {
        let buffer: HexBuffer = text.parse()?;
        if buffer.len() != count {
            return Err(ValidationError::InvalidDataBufferCount {
                expected: count,
                actual: buffer.len(),
            });
        }
        Ok(buffer)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for HexBuffer {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        hex::decode(text)
            .map(HexBuffer)
            .map_err(|_| ValidationError::InvalidHex(text.to_string()))
    }
}

impl fmt::Display for HexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for HexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBuffer({})", self)
    }
}

impl From<&[u8]> for HexBuffer {
    fn from(bytes: &[u8]) -> Self {
        HexBuffer(bytes.to_vec())
    }
}
