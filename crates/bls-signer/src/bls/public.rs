use super::{MessageHash, PrivateKey, Signature};
use crate::{
    codec,
    curve::{CurveSystem, Point, G1, G2},
    BlsResult, HashToCurve,
};

use ark_ec::{models::short_weierstrass::Affine, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use std::fmt;

/// A BLS public key on G2
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<C: CurveSystem>(G2<C>);

impl<C: CurveSystem> From<G2<C>> for PublicKey<C> {
    fn from(pk: G2<C>) -> PublicKey<C> {
        PublicKey(pk)
    }
}

impl<C: CurveSystem> From<&PrivateKey<C>> for PublicKey<C> {
    fn from(sk: &PrivateKey<C>) -> PublicKey<C> {
        PublicKey::from(C::g2() * sk.as_ref())
    }
}

impl<C: CurveSystem> AsRef<G2<C>> for PublicKey<C> {
    fn as_ref(&self) -> &G2<C> {
        &self.0
    }
}

impl<C: CurveSystem> From<PublicKey<C>> for Point<C> {
    fn from(pk: PublicKey<C>) -> Point<C> {
        Point::G2(pk.0)
    }
}

impl<C: CurveSystem> PublicKey<C> {
    pub fn aggregate(public_keys: &[PublicKey<C>]) -> PublicKey<C> {
        public_keys.iter().map(|pk| pk.0).sum::<G2<C>>().into()
    }

    pub fn verify<H: HashToCurve<Output = G1<C>>>(
        &self,
        message: &[u8],
        signature: &Signature<C>,
        hash_to_g1: &H,
    ) -> BlsResult<()> {
        let hash = MessageHash::from(hash_to_g1.hash(message)?);
        self.verify_hash(&hash, signature)
    }

    /// Checks `e(σ, G2) == e(h, pk)` for an already hashed message
    pub fn verify_hash(&self, hash: &MessageHash<C>, signature: &Signature<C>) -> BlsResult<()> {
        signature.batch_verify_hashes(&[self], std::slice::from_ref(hash))
    }

    /// Affine coordinates `[x1, x0, y1, y0]` in base 10, the form stored in key files
    pub fn to_decimal_coords(&self) -> Vec<String> {
        codec::coords_to_decimal(&Point::<C>::G2(self.0).to_affine_coords())
    }

    /// Parses `[x1, x0, y1, y0]` in base 10, checking that the point is on the curve and in
    /// the prime order subgroup
    pub fn from_decimal_coords(coords: &[&str]) -> BlsResult<PublicKey<C>> {
        Ok(PublicKey(codec::g2_from_coords::<C>(coords)?))
    }

    /// Compressed binary encoding
    pub fn to_bytes(&self) -> BlsResult<Vec<u8>> {
        let mut bytes = vec![];
        self.0.into_affine().serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Decodes the compressed binary encoding, validating the point
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<PublicKey<C>> {
        let affine = Affine::<C::G2Config>::deserialize_compressed(bytes)?;
        Ok(PublicKey(affine.into()))
    }
}

impl<C: CurveSystem> fmt::Display for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.to_decimal_coords().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        curve::{AltBn128, Bls12_377},
        hash_to_curve::KECCAK_HASH_TO_G1,
        BLSError,
    };
    use rand::thread_rng;

    #[test]
    fn test_public_key_serialization() {
        let rng = &mut thread_rng();
        for _ in 0..10 {
            let sk = PrivateKey::<AltBn128>::generate(rng).unwrap();
            let pk = sk.to_public();

            let pk_bytes = pk.to_bytes().unwrap();
            assert_eq!(pk_bytes.len(), 64);
            let de_pk = PublicKey::from_bytes(&pk_bytes).unwrap();
            assert_eq!(de_pk, pk);

            let coords = pk.to_decimal_coords();
            assert_eq!(coords.len(), 4);
            let refs = coords.iter().map(String::as_str).collect::<Vec<_>>();
            assert_eq!(PublicKey::from_decimal_coords(&refs).unwrap(), pk);
        }
    }

    #[test]
    fn from_private_key() {
        let rng = &mut thread_rng();
        let sk = PrivateKey::<Bls12_377>::generate(rng).unwrap();
        assert_eq!(PublicKey::from(&sk), sk.to_public());
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let rng = &mut thread_rng();
        let hasher = &*KECCAK_HASH_TO_G1;
        let sk = PrivateKey::<AltBn128>::generate(rng).unwrap();
        let other = PrivateKey::<AltBn128>::generate(rng).unwrap();
        let sig = sk.sign(b"message", hasher).unwrap();
        sk.to_public().verify(b"message", &sig, hasher).unwrap();
        assert!(matches!(
            other.to_public().verify(b"message", &sig, hasher),
            Err(BLSError::VerificationFailed)
        ));
    }

    #[test]
    fn aggregate_of_nothing_is_identity() {
        use ark_ff::Zero;
        let apk = PublicKey::<AltBn128>::aggregate(&[]);
        assert!(apk.as_ref().is_zero());
    }

    #[test]
    fn display_lists_four_coordinates() {
        let pk = PublicKey::<AltBn128>::from(AltBn128::g2());
        let shown = pk.to_string();
        assert!(shown.starts_with(
            "(11559732032986387107991004021392285783925812861821192530917403151452391805634, "
        ));
        assert_eq!(shown.matches(", ").count(), 3);
    }
}
