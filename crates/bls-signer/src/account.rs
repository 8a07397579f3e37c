//! Key files.
//!
//! A key file is a single JSON object holding the secret scalar and the affine coordinates of
//! the G2 public key, all as base-10 strings:
//!
//! ```text
//! {
//!   "sk": "<decimal integer>",
//!   "pkx1": "<decimal>",
//!   "pkx2": "<decimal>",
//!   "pky1": "<decimal>",
//!   "pky2": "<decimal>"
//! }
//! ```

use crate::{
    curve::CurveSystem,
    BLSError, BlsResult, PrivateKey, PublicKey,
};

use log::debug;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use std::{fmt, fs, io, path::Path};

/// The on-disk form of a key pair. The `sk` string is wiped on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct Account {
    pub sk: String,
    pub pkx1: String,
    pub pkx2: String,
    pub pky1: String,
    pub pky2: String,
}

impl Account {
    /// Builds the record for a secret key and its G2 public key
    pub fn new<C: CurveSystem>(sk: &PrivateKey<C>, public_key: &PublicKey<C>) -> Account {
        let mut coords = public_key.to_decimal_coords().into_iter();
        let mut next = || coords.next().unwrap_or_default();
        Account {
            sk: sk.to_decimal(),
            pkx1: next(),
            pkx2: next(),
            pky1: next(),
            pky2: next(),
        }
    }

    /// Parses the JSON text of a key file
    pub fn from_json(data: &str) -> BlsResult<Account> {
        Account::from_json_bytes(data.as_bytes())
    }

    /// Parses the raw bytes of a key file. Bytes that are not UTF-8 are a parse error.
    pub fn from_json_bytes(data: &[u8]) -> BlsResult<Account> {
        serde_json::from_slice(data)
            .map_err(|e| BLSError::ParseError(format!("invalid key file: {}", e)))
    }

    /// Renders the JSON text of a key file
    pub fn to_json(&self) -> BlsResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BLSError::ParseError(format!("could not encode key file: {}", e)))
    }

    /// The secret key. The stored public key is not looked at; see [`Account::key_pair`].
    pub fn private_key<C: CurveSystem>(&self) -> BlsResult<PrivateKey<C>> {
        PrivateKey::from_decimal(&self.sk)
    }

    /// The stored public key, which must be a valid G2 point
    pub fn public_key<C: CurveSystem>(&self) -> BlsResult<PublicKey<C>> {
        PublicKey::from_decimal_coords(&[
            self.pkx1.as_str(),
            self.pkx2.as_str(),
            self.pky1.as_str(),
            self.pky2.as_str(),
        ])
    }

    /// The secret key and the stored public key, after checking that `G2 · sk` is the stored
    /// point
    pub fn key_pair<C: CurveSystem>(&self) -> BlsResult<(PrivateKey<C>, PublicKey<C>)> {
        let sk = self.private_key::<C>()?;
        let pk = self.public_key::<C>()?;
        if sk.to_public() != pk {
            return Err(BLSError::KeyMismatch);
        }
        Ok((sk, pk))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("sk", &"<redacted>")
            .field("pkx1", &self.pkx1)
            .field("pkx2", &self.pkx2)
            .field("pky1", &self.pky1)
            .field("pky2", &self.pky2)
            .finish()
    }
}

/// Writes a key file, creating or truncating `path`
pub fn export_key_file<C: CurveSystem, P: AsRef<Path>>(
    sk: &PrivateKey<C>,
    public_key: &PublicKey<C>,
    path: P,
) -> BlsResult<()> {
    let path = path.as_ref();
    let mut data = Account::new(sk, public_key).to_json()?;
    let written = fs::write(path, data.as_bytes());
    data.zeroize();
    written?;
    debug!(
        "wrote {} key file {} for public key {}",
        C::NAME,
        path.display(),
        public_key
    );
    Ok(())
}

fn read_account(path: &Path) -> BlsResult<Account> {
    let mut data = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BLSError::NotFound(path.to_path_buf()),
        _ => BLSError::IoError(e),
    })?;
    let account = Account::from_json_bytes(&data);
    data.zeroize();
    account
}

/// Reads a key file and returns its secret key. The stored public key must be the one that
/// belongs to the secret key.
pub fn import_key_file<C: CurveSystem, P: AsRef<Path>>(path: P) -> BlsResult<PrivateKey<C>> {
    let path = path.as_ref();
    let (sk, pk) = read_account(path)?.key_pair::<C>()?;
    debug!(
        "loaded {} key file {} for public key {}",
        C::NAME,
        path.display(),
        pk
    );
    Ok(sk)
}

/// Reads only the public key of a key file. The secret key is left unparsed.
pub fn import_public_key<C: CurveSystem, P: AsRef<Path>>(path: P) -> BlsResult<PublicKey<C>> {
    read_account(path.as_ref())?.public_key::<C>()
}
