use super::{MessageHash, PublicKey, Signature};
use crate::{
    codec,
    curve::{CurveSystem, Scalar, G1},
    BlsResult, HashToCurve,
};

use ark_ff::PrimeField;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use std::fmt;

/// A BLS private key: a scalar in `[0, group_order)`. The scalar is wiped when the key is
/// dropped and never shows up in `Debug` output.
#[derive(Clone)]
pub struct PrivateKey<C: CurveSystem> {
    sk: Scalar<C>,
}

impl<C: CurveSystem> PrivateKey<C> {
    /// Samples a key from a cryptographically secure source. 512 random bits are reduced
    /// modulo the group order, which keeps the bias negligible.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> BlsResult<PrivateKey<C>> {
        let mut bytes = [0u8; 64];
        rng.try_fill_bytes(&mut bytes)?;
        let sk = Scalar::<C>::from_le_bytes_mod_order(&bytes);
        bytes.zeroize();
        Ok(PrivateKey { sk })
    }

    pub fn from_sk(sk: &Scalar<C>) -> PrivateKey<C> {
        PrivateKey { sk: *sk }
    }

    /// Parses the base-10 form used in key files
    pub fn from_decimal(sk: &str) -> BlsResult<PrivateKey<C>> {
        Ok(PrivateKey {
            sk: codec::scalar_from_decimal::<C>(sk)?,
        })
    }

    /// The base-10 form used in key files. Handle the result as secret material.
    pub fn to_decimal(&self) -> String {
        codec::scalar_to_decimal::<C>(&self.sk)
    }

    pub fn sign<H: HashToCurve<Output = G1<C>>>(
        &self,
        message: &[u8],
        hash_to_g1: &H,
    ) -> BlsResult<Signature<C>> {
        self.sign_with_hash(message, hash_to_g1).map(|res| res.1)
    }

    /// Signs the message and also returns the message hash the signature was computed over
    pub fn sign_with_hash<H: HashToCurve<Output = G1<C>>>(
        &self,
        message: &[u8],
        hash_to_g1: &H,
    ) -> BlsResult<(MessageHash<C>, Signature<C>)> {
        let hash = hash_to_g1.hash(message)?;
        Ok((MessageHash::from(hash), Signature::from(hash * self.sk)))
    }

    /// The G2 public key, `G2 · sk`
    pub fn to_public(&self) -> PublicKey<C> {
        PublicKey::from(C::g2() * self.sk)
    }

    /// The G1 public key, `G1 · sk`
    pub fn to_public_g1(&self) -> G1<C> {
        C::g1() * self.sk
    }
}

impl<C: CurveSystem> AsRef<Scalar<C>> for PrivateKey<C> {
    fn as_ref(&self) -> &Scalar<C> {
        &self.sk
    }
}

impl<C: CurveSystem> PartialEq for PrivateKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.sk == other.sk
    }
}

impl<C: CurveSystem> Eq for PrivateKey<C> {}

impl<C: CurveSystem> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey<{}>(<redacted>)", C::NAME)
    }
}

impl<C: CurveSystem> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.sk.zeroize();
    }
}
