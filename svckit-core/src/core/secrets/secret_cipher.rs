use crate::shared::constants::NONCE_SIZE;
use crate::shared::error::{UtilsError, UtilsResult};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Derive a 256-bit cipher key from a passphrase.
/// Deterministic: the same passphrase always yields the same key.
/// An empty passphrase is permitted and yields a valid, fixed key.
fn derive_key(passphrase: &str) -> [u8; 32] {
    Sha256::digest(passphrase.as_bytes()).into()
}

/// Encrypt a secret string with a passphrase-derived AES-256-GCM key.
///
/// A fresh random nonce is drawn from the OS entropy source for every
/// call, so encrypting the same data twice yields different envelopes.
/// The nonce is prepended to the sealed payload and the whole envelope is
/// base64-encoded so it can be stored in text-oriented fields.
pub fn encrypt_secret(data: &str, passphrase: &str) -> UtilsResult<String> {
    let mut key = derive_key(passphrase);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    key.zeroize();

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| UtilsError::PasswordEncryption(e.to_string()))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, data.as_bytes())
        .map_err(|e| UtilsError::PasswordEncryption(e.to_string()))?;

    let mut envelope = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(envelope))
}

/// Decrypt an envelope produced by [`encrypt_secret`].
///
/// Fails with [`UtilsError::PasswordDecryption`] on malformed base64, an
/// envelope shorter than the nonce, a wrong passphrase or corrupted
/// ciphertext. Wrong passphrase and corruption are deliberately not
/// distinguished.
pub fn decrypt_secret(data: &str, passphrase: &str) -> UtilsResult<String> {
    let envelope = STANDARD
        .decode(data)
        .map_err(|e| UtilsError::PasswordDecryption(e.to_string()))?;

    if envelope.len() < NONCE_SIZE {
        return Err(UtilsError::PasswordDecryption(
            "envelope is shorter than the nonce".to_string(),
        ));
    }
    let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_SIZE);

    let mut key = derive_key(passphrase);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    key.zeroize();

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|e| UtilsError::PasswordDecryption(e.to_string()))?;

    String::from_utf8(plaintext).map_err(|e| UtilsError::PasswordDecryption(e.to_string()))
}
