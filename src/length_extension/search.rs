use rayon::prelude::*;
use std::ops::Range;
use crate::length_extension::{forge_from_state, ForgeryResult};
use crate::utils::crypto::sha1::parse_state;
use crate::utils::errors::Result;

/// Candidate secret lengths tried when the caller has no better bound.
pub const DEFAULT_MAX_SECRET_LENGTH: u64 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub secret_length: u64,
    pub forgery: ForgeryResult,
}

/// Forges once per candidate secret length, in parallel, and returns the
/// shortest candidate whose `(suffix, digest_hex)` the oracle accepts.
///
/// The oracle is whatever actually holds the secret, e.g. a server that
/// checks submitted tags. `Ok(None)` means no candidate in range was accepted.
pub fn search_secret_length<F>(
    original_digest_hex: &str,
    known_suffix: &[u8],
    append: &[u8],
    candidates: Range<u64>,
    oracle: F,
) -> Result<Option<Discovery>>
where
    F: Fn(&[u8], &str) -> bool + Sync,
{
    let state = parse_state(original_digest_hex)?;

    let found = candidates
        .into_par_iter()
        .map(|secret_length| {
            forge_from_state(state, known_suffix, append, secret_length).map(|forgery| Discovery {
                secret_length,
                forgery,
            })
        })
        .find_first(|attempt| match *attempt {
            Ok(ref discovery) => {
                trace!("trying secret length {}", discovery.secret_length);
                oracle(&discovery.forgery.suffix, &discovery.forgery.digest_hex)
            }
            // surface contract errors instead of skipping them
            Err(_) => true,
        });

    match found {
        Some(Ok(discovery)) => {
            debug!("oracle accepted secret length {}", discovery.secret_length);
            Ok(Some(discovery))
        }
        Some(Err(e)) => Err(e),
        None => Ok(None),
    }
}
