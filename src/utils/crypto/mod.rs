pub mod sha1;

pub use self::sha1::{
    compress, compress_slice, digest, digest_from_state, digest_hex, pad, parse_state, Block,
    ChainingState, Digest, BLOCK_LEN, DIGEST_LEN,
};
