use log::trace;
use std::marker::PhantomData;

use super::HashToCurve;
use crate::curve::{AltBn128, CurveSystem, Scalar, G1};
use crate::hashers::{Hasher, Keccak256Hasher};
use crate::BLSError;

use ark_ff::PrimeField;
use once_cell::sync::Lazy;

/// Keccak-256 hash-then-multiply hasher for alt_bn128.
pub static KECCAK_HASH_TO_G1: Lazy<HashThenMultiply<Keccak256Hasher, AltBn128>> =
    Lazy::new(|| HashThenMultiply::new(&Keccak256Hasher));

/// Maps a message to `G1 · H(message)`.
#[derive(Clone)]
pub struct HashThenMultiply<'a, H, C> {
    hasher: &'a H,
    curve: PhantomData<C>,
}

impl<'a, H, C> HashThenMultiply<'a, H, C>
where
    H: Hasher<Error = BLSError>,
    C: CurveSystem,
{
    /// Instantiates a new hash-then-multiply map with the provided hashing method
    /// and curve based on the type
    pub fn new(h: &'a H) -> Self {
        HashThenMultiply {
            hasher: h,
            curve: PhantomData,
        }
    }

    /// Hashes the message and also returns the digest that was used as the scalar
    pub fn hash_with_digest(&self, message: &[u8]) -> Result<(G1<C>, Vec<u8>), BLSError> {
        let digest = self.hasher.hash(message)?;
        // G1 has prime order equal to the scalar field modulus, so reducing the digest
        // leaves the product unchanged.
        let scalar = Scalar::<C>::from_be_bytes_mod_order(&digest);
        let point = C::g1() * scalar;
        trace!(
            "hashed \"{}\" to {} G1 with digest {}",
            hex::encode(message),
            C::NAME,
            hex::encode(&digest)
        );
        Ok((point, digest))
    }
}

impl<'a, H, C> HashToCurve for HashThenMultiply<'a, H, C>
where
    H: Hasher<Error = BLSError>,
    C: CurveSystem,
{
    type Output = G1<C>;

    fn hash(&self, message: &[u8]) -> Result<Self::Output, BLSError> {
        self.hash_with_digest(message).map(|res| res.0)
    }
}
