extern crate env_logger;
extern crate sha1_extend;

use sha1_extend::length_extension::{
    forge, search_secret_length, SecretPrefixMac, DEFAULT_MAX_SECRET_LENGTH,
};
use sha1_extend::utils::bytes::escape_bytes;
use sha1_extend::Result;
use std::env;
use std::process;

fn run(secret: &[u8], known_suffix: &[u8], append: &[u8]) -> Result<()> {
    let mac = SecretPrefixMac::new(secret);

    let mut message = secret.to_vec();
    message.extend_from_slice(known_suffix);
    let original_tag = mac.sign(known_suffix);

    println!("Original message: {}", escape_bytes(&message));
    println!("Original hash: {}", original_tag);

    let forged = forge(&original_tag, known_suffix, append, secret.len() as u64)?;

    println!();
    println!("New data (suffix sent by attacker): {}", escape_bytes(&forged.suffix));
    println!("New hash: {}", forged.digest_hex);

    let verification = mac.sign(&forged.suffix);
    println!();
    println!("Verification hash: {}", verification);
    println!("Hashes match: {}", verification == forged.digest_hex);

    // same attack against a secret whose length we don't get told
    let unknown = SecretPrefixMac::random();
    let unknown_tag = unknown.sign(known_suffix);
    println!();
    println!("Searching secret lengths 0..{} for {}", DEFAULT_MAX_SECRET_LENGTH, unknown_tag);

    match search_secret_length(
        &unknown_tag,
        known_suffix,
        append,
        0..DEFAULT_MAX_SECRET_LENGTH,
        |suffix, tag| unknown.verify(suffix, tag),
    )? {
        Some(discovery) => println!(
            "Secret length {} accepted, forged hash {}",
            discovery.secret_length, discovery.forgery.digest_hex
        ),
        None => println!("No secret length in range was accepted"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let secret = args.next().unwrap_or_else(|| "mysecret".to_string());
    let known_suffix = args.next().unwrap_or_else(|| "A|5".to_string());
    let append = args.next().unwrap_or_else(|| "|1000000000".to_string());

    if let Err(e) = run(secret.as_bytes(), known_suffix.as_bytes(), append.as_bytes()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
