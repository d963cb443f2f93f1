//! SHA-1 with its chaining state out in the open.
//!
//! Nothing here hides the five state words behind a finished digest, which is
//! what lets `length_extension` pick hashing back up from a published tag.

use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::str::FromStr;
use crate::utils::bytes::{bytes_to_hex, hex_to_bytes};
use crate::utils::errors::{Error, Result};

pub const BLOCK_LEN: usize = 64;
pub const DIGEST_LEN: usize = 20;

/// Offset inside the final block at which the 8-byte bit length starts.
const LENGTH_OFFSET: u64 = 56;

pub type Block = [u8; BLOCK_LEN];
pub type Digest = [u8; DIGEST_LEN];

/// The five 32-bit words h0..h4 carried from one block to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainingState(pub [u32; 5]);

impl ChainingState {
    pub const INITIAL: ChainingState =
        ChainingState([0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0]);

    pub fn words(&self) -> [u32; 5] {
        self.0
    }

    pub fn from_digest(digest: &Digest) -> ChainingState {
        let mut words = [0u32; 5];
        BigEndian::read_u32_into(&digest[..], &mut words);
        ChainingState(words)
    }

    pub fn to_digest(&self) -> Digest {
        let mut digest = [0u8; DIGEST_LEN];
        BigEndian::write_u32_into(&self.0, &mut digest);
        digest
    }
}

impl fmt::Display for ChainingState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", bytes_to_hex(&self.to_digest()))
    }
}

impl FromStr for ChainingState {
    type Err = Error;

    fn from_str(s: &str) -> Result<ChainingState> {
        parse_state(s)
    }
}

/// Merkle–Damgård strengthening for a message of `length` bytes:
/// `0x80`, zeros up to 56 mod 64, then the bit length as a big-endian u64.
pub fn pad(length: u64) -> Vec<u8> {
    let block = BLOCK_LEN as u64;
    let zeros = (block + LENGTH_OFFSET - 1 - length % block) % block;

    let mut padding = vec![0u8; 1 + zeros as usize + 8];
    padding[0] = 0x80;
    let tail = padding.len() - 8;
    BigEndian::write_u64(&mut padding[tail..], length.wrapping_mul(8));

    padding
}

#[inline]
fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline]
fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Working registers for one run of the round function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registers {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    e: u32,
}

impl Registers {
    fn load(state: &ChainingState) -> Registers {
        let [a, b, c, d, e] = state.0;
        Registers { a, b, c, d, e }
    }

    fn round(self, i: usize, w: u32) -> Registers {
        let Registers { a, b, c, d, e } = self;
        let (f, k) = match i {
            0..=19 => (ch(b, c, d), 0x5A827999),
            20..=39 => (parity(b, c, d), 0x6ED9EBA1),
            40..=59 => (maj(b, c, d), 0x8F1BBCDC),
            _ => (parity(b, c, d), 0xCA62C1D6),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w);

        Registers {
            a: temp,
            b: a,
            c: b.rotate_left(30),
            d: c,
            e: d,
        }
    }

    fn feed_forward(self, state: &ChainingState) -> ChainingState {
        let [h0, h1, h2, h3, h4] = state.0;
        ChainingState([
            h0.wrapping_add(self.a),
            h1.wrapping_add(self.b),
            h2.wrapping_add(self.c),
            h3.wrapping_add(self.d),
            h4.wrapping_add(self.e),
        ])
    }
}

fn schedule(block: &Block) -> [u32; 80] {
    let mut w = [0u32; 80];
    BigEndian::read_u32_into(&block[..], &mut w[..16]);

    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    w
}

/// One application of the SHA-1 compression function.
pub fn compress(state: ChainingState, block: &Block) -> ChainingState {
    schedule(block)
        .iter()
        .enumerate()
        .fold(Registers::load(&state), |registers, (i, &w)| {
            registers.round(i, w)
        })
        .feed_forward(&state)
}

/// Like `compress`, for blocks that arrive as slices. Anything other than
/// exactly 64 bytes is refused rather than padded.
pub fn compress_slice(state: ChainingState, block: &[u8]) -> Result<ChainingState> {
    if block.len() != BLOCK_LEN {
        return Err(Error::BlockLength { found: block.len() });
    }

    let mut full = [0u8; BLOCK_LEN];
    full.copy_from_slice(block);
    Ok(compress(state, &full))
}

/// Continues a SHA-1 computation from `state`, which must be the state after
/// absorbing `processed_length` bytes (padding included) of earlier input.
pub fn digest_from_state(
    state: ChainingState,
    processed_length: u64,
    data: &[u8],
) -> Result<Digest> {
    if processed_length % BLOCK_LEN as u64 != 0 {
        return Err(Error::UnalignedLength { length: processed_length });
    }

    let total_length = processed_length + data.len() as u64;
    let mut message = Vec::with_capacity(data.len() + 72);
    message.extend_from_slice(data);
    message.extend_from_slice(&pad(total_length));

    let blocks = message.chunks_exact(BLOCK_LEN);
    if !blocks.remainder().is_empty() {
        return Err(Error::UnalignedLength { length: processed_length + message.len() as u64 });
    }

    let mut state = state;
    for block in blocks {
        state = compress_slice(state, block)?;
    }

    Ok(state.to_digest())
}

/// Plain SHA-1 of `message`.
pub fn digest(message: &[u8]) -> Digest {
    match digest_from_state(ChainingState::INITIAL, 0, message) {
        Ok(digest) => digest,
        Err(e) => unreachable!("padding a fresh message cannot misalign: {}", e),
    }
}

pub fn digest_hex(message: &[u8]) -> String {
    bytes_to_hex(&digest(message))
}

/// Recovers the chaining state behind a hex-encoded SHA-1 digest.
pub fn parse_state(digest_hex: &str) -> Result<ChainingState> {
    let found = digest_hex.chars().count();
    if found != DIGEST_LEN * 2 {
        return Err(Error::DigestLength { found });
    }

    let bytes = hex_to_bytes(digest_hex)?;
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&bytes);

    Ok(ChainingState::from_digest(&digest))
}
