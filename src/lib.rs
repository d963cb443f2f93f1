#![allow(clippy::unreadable_literal)]

extern crate byteorder;
extern crate crypto;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate rand;
extern crate rayon;

pub mod utils;

pub mod length_extension;

pub use length_extension::{forge, ForgeryRequest, ForgeryResult};
pub use utils::crypto::sha1::{compress, digest, pad, parse_state, ChainingState};
pub use utils::errors::{Error, Result};
