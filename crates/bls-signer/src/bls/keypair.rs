use super::{PrivateKey, PublicKey};
use crate::{
    curve::{CurveSystem, G1},
    BlsResult,
};

use log::debug;
use rand::{CryptoRng, RngCore};

/// A secret key together with both of its public points, `W = G1 · sk` and `X = G2 · sk`.
/// Only `X` is persisted in key files and used for verification.
#[derive(Clone, Debug)]
pub struct KeyPair<C: CurveSystem> {
    private_key: PrivateKey<C>,
    g1_public: G1<C>,
    public_key: PublicKey<C>,
}

impl<C: CurveSystem> KeyPair<C> {
    /// Samples a fresh secret key and derives both public points
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> BlsResult<KeyPair<C>> {
        let keypair = KeyPair::from_private_key(PrivateKey::generate(rng)?);
        debug!(
            "generated {} key pair with public key {}",
            C::NAME,
            keypair.public_key
        );
        Ok(keypair)
    }

    /// Derives the public points of an existing secret key
    pub fn from_private_key(private_key: PrivateKey<C>) -> KeyPair<C> {
        let g1_public = private_key.to_public_g1();
        let public_key = private_key.to_public();
        KeyPair {
            private_key,
            g1_public,
            public_key,
        }
    }

    pub fn private_key(&self) -> &PrivateKey<C> {
        &self.private_key
    }

    /// `G1 · sk`
    pub fn g1_public(&self) -> &G1<C> {
        &self.g1_public
    }

    /// `G2 · sk`
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    pub fn into_parts(self) -> (PrivateKey<C>, G1<C>, PublicKey<C>) {
        (self.private_key, self.g1_public, self.public_key)
    }
}
