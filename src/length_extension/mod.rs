pub mod oracle;
pub mod search;

use crate::utils::bytes::bytes_to_hex;
use crate::utils::crypto::sha1::{digest_from_state, pad, parse_state, ChainingState};
use crate::utils::errors::Result;

pub use self::oracle::SecretPrefixMac;
pub use self::search::{search_secret_length, Discovery, DEFAULT_MAX_SECRET_LENGTH};

/// Everything needed to extend `SHA1(secret || known_suffix)` by
/// `append` without knowing `secret`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeryRequest {
    pub original_digest_hex: String,
    pub known_suffix: Vec<u8>,
    pub append: Vec<u8>,
    pub assumed_secret_length: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeryResult {
    /// Tag for `secret || suffix`, valid when the assumed length was right.
    pub digest_hex: String,
    /// Bytes to send in place of the original suffix:
    /// `known_suffix || glue padding || append`.
    pub suffix: Vec<u8>,
}

impl ForgeryRequest {
    pub fn forge(&self) -> Result<ForgeryResult> {
        forge(
            &self.original_digest_hex,
            &self.known_suffix,
            &self.append,
            self.assumed_secret_length,
        )
    }
}

pub fn forge(
    original_digest_hex: &str,
    known_suffix: &[u8],
    append: &[u8],
    assumed_secret_length: u64,
) -> Result<ForgeryResult> {
    let state = parse_state(original_digest_hex)?;
    forge_from_state(state, known_suffix, append, assumed_secret_length)
}

/// `forge` for a state that has already been parsed, so a search over many
/// secret lengths doesn't re-parse the same digest.
pub fn forge_from_state(
    state: ChainingState,
    known_suffix: &[u8],
    append: &[u8],
    assumed_secret_length: u64,
) -> Result<ForgeryResult> {
    let original_length = assumed_secret_length + known_suffix.len() as u64;

    // what the honest hasher appended before it published its tag
    let glue = pad(original_length);
    let processed_length = original_length + glue.len() as u64;

    debug!(
        "forging: secret length {}, original length {}, glue {} bytes, resuming at {}",
        assumed_secret_length,
        original_length,
        glue.len(),
        processed_length
    );

    let mut suffix = Vec::with_capacity(known_suffix.len() + glue.len() + append.len());
    suffix.extend_from_slice(known_suffix);
    suffix.extend_from_slice(&glue);
    suffix.extend_from_slice(append);

    let forged = digest_from_state(state, processed_length, append)?;

    Ok(ForgeryResult {
        digest_hex: bytes_to_hex(&forged),
        suffix,
    })
}
