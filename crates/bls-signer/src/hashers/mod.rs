mod keccak;
pub use keccak::Keccak256Hasher;

/// A hasher compresses an arbitrary message into a fixed-length digest. The digest is what
/// the hash-to-curve map turns into a group element, so swapping the hasher changes every
/// signature the crate produces.
pub trait Hasher {
    /// The returned error type from each hashing call
    type Error;

    /// Length of the digest in bytes
    const DIGEST_LENGTH: usize;

    /// Hashes the message
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, Self::Error>;
}
