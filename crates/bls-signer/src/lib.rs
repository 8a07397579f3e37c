//! # BLS Signer
//!
//! This crate implements BLS signatures with the keccak "hash then multiply" map to G1,
//! the decimal key file format used by the alt_bn128 signer, and aggregation / verification
//! on top of them.
//!
//! ```rust
//! use bls_signer::{curve::AltBn128, hash_to_curve::KECCAK_HASH_TO_G1, KeyPair};
//!
//! let keypair = KeyPair::<AltBn128>::generate(&mut rand::rngs::OsRng).unwrap();
//! let hasher = &*KECCAK_HASH_TO_G1;
//! let sig = keypair.private_key().sign(b"hello", hasher).unwrap();
//! keypair.public_key().verify(b"hello", &sig, hasher).unwrap();
//! ```

/// BLS signing
pub(crate) mod bls;
pub use bls::{sign, KeyPair, MessageHash, PrivateKey, PublicKey, Signature};

/// Curve systems and group-tagged points
pub mod curve;
pub use curve::{CurveSystem, Group, Point};

/// Hashing to curve utilities
pub mod hash_to_curve;
pub use hash_to_curve::HashToCurve;

/// Useful hash functions
pub mod hashers;
pub use hashers::Hasher;

/// Decimal encoding of scalars and points
pub mod codec;

/// Key files
pub mod account;
pub use account::{export_key_file, import_key_file, import_public_key, Account};

/// Signing straight from a key file
pub mod signer;
pub use signer::sign_from_file;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::path::PathBuf;
use thiserror::Error;

/// Convenience result alias
pub type BlsResult<T> = std::result::Result<T, BLSError>;

#[derive(Debug, Error)]
/// Error type
pub enum BLSError {
    /// The secure random source could not be read
    #[error("could not obtain randomness: {0}")]
    RandomSourceError(#[from] rand::Error),
    /// An IO error
    #[error("io error {0}")]
    IoError(#[from] std::io::Error),
    /// The key file does not exist
    #[error("key file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Key material could not be parsed
    #[error("parse error: {0}")]
    ParseError(String),
    /// The message is not valid hex
    #[error("invalid hex message: {0}")]
    EncodingError(#[from] hex::FromHexError),
    /// An operation combined points from the wrong groups
    #[error("group mismatch: expected a {expected} point, got a {found} point")]
    GroupMismatch {
        /// The group the operation required
        expected: Group,
        /// The group of the point that was supplied
        found: Group,
    },
    /// The public key stored next to a secret key does not belong to it
    #[error("public key does not match the secret key")]
    KeyMismatch,
    /// Error
    #[error("signature verification failed")]
    VerificationFailed,
    /// Binary point encoding failed
    #[error("{0}")]
    SerializationError(#[from] ark_serialize::SerializationError),
    /// Batch verification got a different number of keys and messages
    #[error("number of public keys and messages must be equal")]
    UnevenNumKeysMessages,
}

impl BLSError {
    /// The process exit status the command line reports for this error.
    /// 2 is left to argument parsing.
    pub fn exit_code(&self) -> i32 {
        match self {
            BLSError::RandomSourceError(_) => 10,
            BLSError::IoError(_) => 11,
            BLSError::NotFound(_) => 12,
            BLSError::ParseError(_) => 13,
            BLSError::EncodingError(_) => 14,
            BLSError::GroupMismatch { .. } => 15,
            BLSError::KeyMismatch => 16,
            BLSError::VerificationFailed => 17,
            BLSError::SerializationError(_) => 18,
            BLSError::UnevenNumKeysMessages => 19,
        }
    }
}
