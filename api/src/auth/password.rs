//! Salted password hashing
//!
//! Stored form is `salt$digest` where digest = SHA-256(salt || password),
//! both hex encoded. Raw secrets are never persisted or compared.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    let digest = digest_with_salt(&salt, password);
    format!("{}${}", salt, digest)
}

/// Verify a password against a stored `salt$digest` hash
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_with_salt(salt, password) == digest,
        None => false,
    }
}

fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..16).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
