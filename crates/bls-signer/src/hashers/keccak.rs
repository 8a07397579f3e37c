use super::Hasher;
use crate::BLSError;

use sha3::{Digest, Keccak256};

/// Legacy Keccak-256, the pre-standard padding used by Ethereum. This is not NIST SHA3-256.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    type Error = BLSError;

    const DIGEST_LENGTH: usize = 32;

    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Ok(Keccak256::digest(message).to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_digests() {
        let empty = Keccak256Hasher.hash(&[]).unwrap();
        assert_eq!(
            hex::encode(empty),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );

        let deadbeef = Keccak256Hasher.hash(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(deadbeef.len(), Keccak256Hasher::DIGEST_LENGTH);
        assert_eq!(
            hex::encode(deadbeef),
            "d4fd4e189132273036449fc9e11198c739161b4c0116a9a2dccdfa1c492006f1"
        );
    }

    #[test]
    fn differs_from_sha3() {
        use sha3::Sha3_256;
        let keccak = Keccak256Hasher.hash(b"hello").unwrap();
        let sha3 = Sha3_256::digest(b"hello").to_vec();
        assert_ne!(keccak, sha3);
    }
}
