/// Implements BLS signatures as specified in https://crypto.stanford.edu/~dabo/pubs/papers/BLSmultisig.html.
mod secret;
pub use secret::PrivateKey;

mod public;
pub use public::PublicKey;

mod signature;
pub use signature::{MessageHash, Signature};

mod keypair;
pub use keypair::KeyPair;

use crate::{
    curve::{CurveSystem, G1},
    BlsResult, HashToCurve,
};

/// Hashes the message to G1 and multiplies the hash by the secret scalar. Returns both the
/// hash and the signature; nothing else is touched.
pub fn sign<C: CurveSystem, H: HashToCurve<Output = G1<C>>>(
    private_key: &PrivateKey<C>,
    message: &[u8],
    hash_to_g1: &H,
) -> BlsResult<(MessageHash<C>, Signature<C>)> {
    private_key.sign_with_hash(message, hash_to_g1)
}
