//! Process-wide unique identifier type
//!
//! This module defines the id value emitted by the allocator and its
//! string encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::varint::{decode_uvarint, encode_uvarint, VarintError};

/// A process-wide unique ID backed by a u64 counter value.
///
/// The value is opaque to callers: ids from one process run are
/// monotonically non-decreasing, and nothing more is promised. In
/// particular the value is not a timestamp, even though the allocator
/// seeds its counter from the clock.
///
/// Benefits over UUID:
/// - 8 bytes vs 16 bytes (50% smaller)
/// - Cheap to allocate (one atomic add, no RNG)
/// - Compact hex rendering (2-20 chars instead of 36)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(u64);

impl Id {
    /// Create an Id from a raw u64
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Render as an uppercase hex string over the minimal varint
    /// encoding of the value. Injective: distinct ids render to
    /// distinct strings.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(encode_uvarint(self.0))
    }

    /// Parse the `to_hex` form back into an Id. Accepts lowercase hex.
    pub fn from_hex(s: &str) -> Result<Self, ParseIdError> {
        let bytes = hex::decode(s).map_err(|_| ParseIdError::InvalidHex)?;
        let (value, consumed) = decode_uvarint(&bytes).map_err(ParseIdError::Varint)?;
        if consumed != bytes.len() {
            return Err(ParseIdError::TrailingBytes);
        }
        Ok(Self(value))
    }

    /// Derive the salted unique token for this id under `prefix`.
    pub fn unique_token(&self, prefix: u64, salt: &str) -> String {
        crate::token::unique_token(self.0, prefix, salt)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string for JSON compatibility
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<u64>().map(Id).map_err(serde::de::Error::custom)
    }
}

/// Id parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseIdError {
    InvalidHex,
    Varint(VarintError),
    TrailingBytes,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdError::InvalidHex => write!(f, "Invalid hex in id"),
            ParseIdError::Varint(e) => write!(f, "Invalid id encoding: {}", e),
            ParseIdError::TrailingBytes => write!(f, "Trailing bytes after id"),
        }
    }
}

impl std::error::Error for ParseIdError {}
