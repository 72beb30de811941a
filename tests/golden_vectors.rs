//! Golden test vector validation
//!
//! The vectors in testdata/golden-vectors.json were produced by an
//! independent PBKDF2/AES-GCM implementation. They pin the wire format:
//! a change to the KDF parameters, nonce handling, byte offsets, or base64
//! alphabet shows up here as a mismatch.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenVector {
    plaintext: String,
    password: String,
    salt: String,
    nonce: String,
    blob: String,
    comment: String,
}

fn load_golden_vectors() -> Vec<GoldenVector> {
    let json_data = include_str!("../testdata/golden-vectors.json");
    serde_json::from_str(json_data).expect("failed to parse golden vectors")
}

#[test]
fn test_golden_vectors() {
    let vectors = load_golden_vectors();
    assert!(!vectors.is_empty(), "no golden vectors found");

    let mut failed = 0;

    for (i, vector) in vectors.iter().enumerate() {
        let salt: [u8; 32] = BASE64_STANDARD
            .decode(&vector.salt)
            .expect("failed to decode salt")
            .try_into()
            .expect("salt must be 32 bytes");
        let nonce: [u8; 16] = BASE64_STANDARD
            .decode(&vector.nonce)
            .expect("failed to decode nonce")
            .try_into()
            .expect("nonce must be 16 bytes");

        // Deterministic encryption must reproduce the exact blob.
        let encrypted = match quantumbox::vault::encrypt_with_params(
            &vector.plaintext,
            &vector.password,
            &salt,
            &nonce,
        ) {
            Ok(blob) => blob,
            Err(e) => {
                eprintln!("Vector {}: FAILED to encrypt - {}", i, e);
                eprintln!("  Comment: {}", vector.comment);
                failed += 1;
                continue;
            }
        };

        if encrypted != vector.blob {
            eprintln!("Vector {}: FAILED - blob mismatch", i);
            eprintln!("  Comment: {}", vector.comment);
            eprintln!("  Expected: {}", vector.blob);
            eprintln!("  Actual:   {}", encrypted);
            failed += 1;
            continue;
        }

        // And the recorded blob must decrypt back to the plaintext.
        match quantumbox::decrypt(&vector.blob, &vector.password) {
            Ok(plaintext) if plaintext == vector.plaintext => {}
            Ok(_) => {
                eprintln!("Vector {}: FAILED - plaintext mismatch", i);
                eprintln!("  Comment: {}", vector.comment);
                failed += 1;
                continue;
            }
            Err(e) => {
                eprintln!("Vector {}: FAILED to decrypt - {}", i, e);
                eprintln!("  Comment: {}", vector.comment);
                failed += 1;
                continue;
            }
        }
    }

    assert_eq!(failed, 0, "some golden vectors failed validation");
}
