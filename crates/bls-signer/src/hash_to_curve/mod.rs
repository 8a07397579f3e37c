/// Implementation of the keccak "hash then multiply" map to G1.
///
/// The message is hashed with a [`Hasher`](crate::hashers::Hasher), the digest is read as a
/// big-endian integer `d`, and the result is `G1 · d`. The map is deterministic and cheap, but
/// it is not a uniform or constant-time hash-to-curve encoding: anyone can compute the
/// discrete log of the output with respect to the generator. It is kept because peers
/// (including on-chain verifiers) hash messages exactly this way.
///
/// # Examples
///
/// ```rust
/// use bls_signer::hash_to_curve::{HashToCurve, KECCAK_HASH_TO_G1};
///
/// // Instantiate the lazily evaluated hasher to alt_bn128.
/// let hasher = &*KECCAK_HASH_TO_G1;
///
/// let hash = hasher.hash(&b"some_data"[..]).expect("should not fail");
/// ```
///
/// Doing this manually requires picking the hasher and the curve:
///
/// ```rust
/// use bls_signer::{
///     curve::Bls12_377,
///     hashers::Keccak256Hasher,
///     hash_to_curve::{HashToCurve, hash_then_multiply::HashThenMultiply},
/// };
///
/// let hasher = HashThenMultiply::<_, Bls12_377>::new(&Keccak256Hasher);
/// let (hash, digest) = hasher.hash_with_digest(&b"some_data"[..]).expect("should not fail");
/// assert_eq!(digest.len(), 32);
/// ```
pub mod hash_then_multiply;
pub use hash_then_multiply::KECCAK_HASH_TO_G1;

use crate::BLSError;

/// Trait for hashing arbitrary data to a group element on an elliptic curve
pub trait HashToCurve {
    /// The type of the curve being used.
    type Output;

    /// Given a message, produces a hash of it which is a curve point.
    fn hash(&self, message: &[u8]) -> Result<Self::Output, BLSError>;
}
