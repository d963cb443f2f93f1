use crypto::digest::Digest;
use crypto::sha1::Sha1;
use crate::utils::bytes::random_size_bytes;

/// A naive `SHA1(secret || message)` MAC, the construction the forgery breaks.
///
/// Signing goes through `rust-crypto`'s SHA-1 rather than this crate's own,
/// so a forged tag that verifies here was checked by an independent hasher.
pub struct SecretPrefixMac {
    secret: Vec<u8>,
}

impl SecretPrefixMac {
    pub fn new(secret: &[u8]) -> SecretPrefixMac {
        SecretPrefixMac {
            secret: secret.to_vec(),
        }
    }

    /// A MAC keyed with 1 to 32 random bytes.
    pub fn random() -> SecretPrefixMac {
        SecretPrefixMac {
            secret: random_size_bytes(1, 33),
        }
    }

    pub fn sign(&self, message: &[u8]) -> String {
        let mut hasher = Sha1::new();
        hasher.input(&self.secret);
        hasher.input(message);
        hasher.result_str()
    }

    pub fn verify(&self, message: &[u8], tag_hex: &str) -> bool {
        self.sign(message).eq_ignore_ascii_case(tag_hex)
    }

    #[cfg(test)]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_like_keyed_sha1() {
        let mac = SecretPrefixMac::new(b"");
        assert_eq!(mac.sign(b"hello world"), "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");

        let mac = SecretPrefixMac::new(b"key");
        assert_eq!(mac.sign(b"message"), "7d89ca5f9535d3bd925ca99f484ae4413a14fe2d");
        assert!(mac.verify(b"message", "7D89CA5F9535D3BD925CA99F484AE4413A14FE2D"));

        let mac = SecretPrefixMac::new(b"notthekey");
        assert!(!mac.verify(b"message", "7d89ca5f9535d3bd925ca99f484ae4413a14fe2d"));
    }

    #[test]
    fn random_mac_is_consistent() {
        let mac = SecretPrefixMac::random();
        assert!(mac.secret_len() >= 1 && mac.secret_len() <= 32);

        let tag = mac.sign(b"testing");
        assert_eq!(tag, mac.sign(b"testing"));
        assert!(mac.verify(b"testing", &tag));
        assert!(!mac.verify(b"testinG", &tag));
    }
}
