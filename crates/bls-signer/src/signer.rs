//! Signing with a key that lives in a key file.
//!
//! Every call runs `load key → decode message → hash → multiply` and stops at the first
//! failure. The secret key only lives for the duration of the call.

use crate::{
    account::import_key_file,
    curve::{CurveSystem, G1},
    BlsResult, HashToCurve, Signature,
};

use log::debug;
use std::path::Path;

/// Signs a hex encoded message with the key stored at `key_path`.
///
/// The message must be plain hex (no `0x` prefix, even length); anything else is an
/// [`EncodingError`](crate::BLSError::EncodingError).
pub fn sign_from_file<C, H, P>(key_path: P, hex_message: &str, hash_to_g1: &H) -> BlsResult<Signature<C>>
where
    C: CurveSystem,
    H: HashToCurve<Output = G1<C>>,
    P: AsRef<Path>,
{
    let private_key = import_key_file::<C, _>(key_path)?;
    let message = hex::decode(hex_message)?;
    let signature = private_key.sign(&message, hash_to_g1)?;
    debug!(
        "signed {} byte message on {}: {}",
        message.len(),
        C::NAME,
        signature
    );
    Ok(signature)
}
