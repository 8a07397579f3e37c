use super::PublicKey;
use crate::{
    codec,
    curve::{CurveSystem, Point, G1},
    BLSError, BlsResult,
};

use ark_ec::{models::short_weierstrass::Affine, pairing::Pairing, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use std::{borrow::Borrow, fmt};

/// A BLS signature on G1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<C: CurveSystem>(G1<C>);

/// The G1 point a message hashes to. Signing multiplies it by the secret scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageHash<C: CurveSystem>(G1<C>);

impl<C: CurveSystem> From<G1<C>> for Signature<C> {
    fn from(sig: G1<C>) -> Signature<C> {
        Signature(sig)
    }
}

impl<C: CurveSystem> AsRef<G1<C>> for Signature<C> {
    fn as_ref(&self) -> &G1<C> {
        &self.0
    }
}

impl<C: CurveSystem> From<Signature<C>> for Point<C> {
    fn from(sig: Signature<C>) -> Point<C> {
        Point::G1(sig.0)
    }
}

impl<C: CurveSystem> From<G1<C>> for MessageHash<C> {
    fn from(hash: G1<C>) -> MessageHash<C> {
        MessageHash(hash)
    }
}

impl<C: CurveSystem> AsRef<G1<C>> for MessageHash<C> {
    fn as_ref(&self) -> &G1<C> {
        &self.0
    }
}

impl<C: CurveSystem> MessageHash<C> {
    /// Affine coordinates of the hash point in base 10
    pub fn to_decimal_coords(&self) -> Vec<String> {
        codec::coords_to_decimal(&Point::<C>::G1(self.0).to_affine_coords())
    }
}

impl<C: CurveSystem> Signature<C> {
    /// Sums the provided signatures to produce the aggregate signature.
    pub fn aggregate<S: Borrow<Signature<C>>>(
        signatures: impl IntoIterator<Item = S>,
    ) -> Signature<C> {
        signatures
            .into_iter()
            .map(|s| s.borrow().0)
            .sum::<G1<C>>()
            .into()
    }

    /// Affine coordinates `[x, y]` in base 10, the form the signer prints
    pub fn to_decimal_coords(&self) -> Vec<String> {
        codec::coords_to_decimal(&Point::<C>::G1(self.0).to_affine_coords())
    }

    /// Parses `[x, y]` in base 10, checking that the point is on the curve
    pub fn from_decimal_coords(coords: &[&str]) -> BlsResult<Signature<C>> {
        Ok(Signature(codec::g1_from_coords::<C>(coords)?))
    }

    /// Compressed binary encoding
    pub fn to_bytes(&self) -> BlsResult<Vec<u8>> {
        let mut bytes = vec![];
        self.0.into_affine().serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Decodes the compressed binary encoding, validating the point
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Signature<C>> {
        let affine = Affine::<C::G1Config>::deserialize_compressed(bytes)?;
        Ok(Signature(affine.into()))
    }

    /// Verifies the signature against a vector of pubkey & message hash tuples.
    ///
    /// The check is `e(σ, G2) == Π e(h_i, pk_i)`; with a single pair this is plain
    /// BLS verification.
    pub fn batch_verify_hashes<P: Borrow<PublicKey<C>>>(
        &self,
        pubkeys: &[P],
        message_hashes: &[MessageHash<C>],
    ) -> BlsResult<()> {
        if pubkeys.len() != message_hashes.len() {
            return Err(BLSError::UnevenNumKeysMessages);
        };
        let lhs = C::pairing(&self.0, &C::g2());
        let rhs = C::Engine::multi_pairing(
            message_hashes.iter().map(|h| h.0.into_affine()),
            pubkeys.iter().map(|pk| pk.borrow().as_ref().into_affine()),
        );
        if lhs == rhs {
            Ok(())
        } else {
            Err(BLSError::VerificationFailed)
        }
    }
}

impl<C: CurveSystem> fmt::Display for Signature<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.to_decimal_coords().join(", "))
    }
}
