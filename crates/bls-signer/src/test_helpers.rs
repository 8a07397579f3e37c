use crate::curve::{CurveSystem, Scalar, G1, G2};

use ark_ec::CurveGroup;
use ark_ff::UniformRand;
use std::path::PathBuf;

// Same RNG for all tests
pub fn rng() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}

/// generate a keypair
pub fn keygen<C: CurveSystem>() -> (Scalar<C>, G2<C>) {
    let rng = &mut rng();
    let secret_key = Scalar::<C>::rand(rng);
    let pubkey = C::g2() * secret_key;
    (secret_key, pubkey)
}

/// generate N keypairs
pub fn keygen_mul<C: CurveSystem>(num: usize) -> (Vec<Scalar<C>>, Vec<G2<C>>) {
    (0..num).map(|_| keygen::<C>()).unzip()
}

/// generate `num_batches` sets of keypair vectors, each `num_per_batch` size
#[allow(clippy::type_complexity)]
pub fn keygen_batch<C: CurveSystem>(
    num_batches: usize,
    num_per_batch: usize,
) -> (Vec<Vec<Scalar<C>>>, Vec<Vec<G2<C>>>) {
    (0..num_batches)
        .map(|_| keygen_mul::<C>(num_per_batch))
        .unzip()
}

/// sum the elements in the provided slice
pub fn sum<P: CurveGroup>(elements: &[P]) -> P {
    elements.iter().fold(P::zero(), |acc, key| acc + key)
}

/// N messages get signed by N committees of varying sizes
/// N aggregate signatures are returned
pub fn sign_batch<C: CurveSystem>(secret_keys: &[Vec<Scalar<C>>], messages: &[G1<C>]) -> Vec<G1<C>> {
    secret_keys
        .iter()
        .zip(messages)
        .map(|(secret_keys, message)| {
            let (_, asig) = sign::<C>(*message, secret_keys);
            asig
        })
        .collect::<Vec<_>>()
}

// signs a message with a vector of secret keys and returns the list of sigs + the agg sig
pub fn sign<C: CurveSystem>(message_hash: G1<C>, secret_keys: &[Scalar<C>]) -> (Vec<G1<C>>, G1<C>) {
    let sigs = secret_keys
        .iter()
        .map(|key| message_hash * key)
        .collect::<Vec<_>>();
    let asig = sum(&sigs);
    (sigs, asig)
}

/// A path under the system temp dir that is unique to this process and `name`.
/// Nothing is created.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bls-signer-{}-{}.json", std::process::id(), name))
}
