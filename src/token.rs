//! Salted unique-token derivation
//!
//! Combines an allocated id with a caller prefix and salt into an opaque
//! Base32 token. The prefix acts as a namespace: the same id yields
//! unrelated tokens under different prefixes.
//!
//! The derivation is deterministic mixing, not a secrecy boundary: anyone
//! holding the prefix and salt can brute-force the id back out of a token.
//! PBKDF2-SHA1 stays as-is because changing it would break every token
//! already stored or compared by callers.

use data_encoding::BASE32_NOPAD;
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

/// PBKDF2 iteration count
pub const TOKEN_ROUNDS: u32 = 4096;

/// Derived key length in bytes. 16 bytes encode to 26 Base32 chars
/// once padding is dropped.
pub const TOKEN_KEY_LEN: usize = 16;

/// Input material layout: [prefix: u64 BE][id: u64 BE]
const TOKEN_MATERIAL_LEN: usize = 16;

/// Derive the unique token for `(id, prefix, salt)`.
///
/// Always succeeds: any id, any prefix, any salt (including empty) is
/// valid input, and identical inputs always produce the identical token.
pub fn unique_token(id: u64, prefix: u64, salt: &str) -> String {
    let mut material = [0u8; TOKEN_MATERIAL_LEN];
    material[..8].copy_from_slice(&prefix.to_be_bytes());
    material[8..].copy_from_slice(&id.to_be_bytes());

    let mut derived = [0u8; TOKEN_KEY_LEN];
    pbkdf2_hmac::<Sha1>(&material, salt.as_bytes(), TOKEN_ROUNDS, &mut derived);

    BASE32_NOPAD.encode(&derived)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    #[test]
    fn test_token_deterministic() {
        assert_eq!(unique_token(5, 7, "abc"), unique_token(5, 7, "abc"));
    }

    #[test]
    fn test_token_sensitivity() {
        let base = unique_token(5, 7, "abc");
        assert_ne!(base, unique_token(6, 7, "abc"), "id must change the token");
        assert_ne!(base, unique_token(5, 8, "abc"), "prefix must change the token");
        assert_ne!(base, unique_token(5, 7, "abd"), "salt must change the token");
    }

    #[test]
    fn test_token_shape() {
        let cases = [
            unique_token(0, 0, ""),
            unique_token(1, 0, ""),
            unique_token(5, 7, "abc"),
            unique_token(u64::MAX, u64::MAX, "x"),
        ];
        for token in cases {
            assert_eq!(token.len(), 26, "unexpected length for {}", token);
            assert!(!token.contains('='), "padding leaked into {}", token);
            assert!(
                token.chars().all(|c| BASE32_ALPHABET.contains(c)),
                "non-Base32 char in {}",
                token
            );
        }
    }

    #[test]
    fn test_token_reference_vectors() {
        // Pinned outputs; a change here breaks compatibility with stored tokens
        assert_eq!(unique_token(1, 0, ""), "IOOZMDZB5KMSZRA46MDBZBPB7Y");
        assert_eq!(unique_token(5, 7, "abc"), "K3T4454RSW6NBMNTNPEZLC6OWM");
        assert_eq!(unique_token(42, 1, "session"), "OEU6CKGXJYDLBJO2U3YUKYCI5A");
    }

    #[test]
    fn test_empty_salt_ok() {
        let token = unique_token(123, 456, "");
        assert_eq!(token.len(), 26);
    }
}
