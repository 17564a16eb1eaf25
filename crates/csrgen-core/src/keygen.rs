//! RSA key pair generation and PKCS#1 export.

use rand::rngs::OsRng;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::LineEnding;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;

/// Default RSA modulus size in bits.
///
/// 2048 is the smallest size common CA intake requirements accept; larger
/// sizes can be requested through [`KeyPair::generate_with_bits`].
pub const RSA_KEY_BITS: usize = 2048;

/// PEM block type for the private-key artifact.
pub const PRIVATE_KEY_PEM_TAG: &str = "RSA PRIVATE KEY";

/// A freshly generated RSA key pair.
///
/// Generated once per run from the operating system's secure random source
/// and never persisted except through the PKCS#1 export methods.
#[derive(Debug, Clone)]
pub struct KeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl KeyPair {
    /// Generate a key pair with the default modulus size.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::KeyGeneration`](crate::CsrError::KeyGeneration)
    /// if the RSA library or the entropy source fails. Not retryable within
    /// the same process; a retry means a fresh invocation and a fresh draw.
    pub fn generate() -> Result<Self> {
        Self::generate_with_bits(RSA_KEY_BITS)
    }

    /// Generate a key pair with an explicit modulus size.
    pub fn generate_with_bits(bits: usize) -> Result<Self> {
        let mut rng = OsRng;
        let private = RsaPrivateKey::new(&mut rng, bits)?;
        let public = RsaPublicKey::from(&private);
        debug!(bits, "generated RSA key pair");
        Ok(Self { private, public })
    }

    /// The private half, used to sign the request.
    #[must_use]
    pub const fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// The public half, embedded in the request.
    #[must_use]
    pub const fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// PKCS#1 DER encoding of the private key.
    pub fn to_pkcs1_der(&self) -> Result<der::SecretDocument> {
        Ok(self.private.to_pkcs1_der()?)
    }

    /// PKCS#1 PEM encoding of the private key (`RSA PRIVATE KEY` block).
    pub fn to_pkcs1_pem(&self) -> Result<Zeroizing<String>> {
        Ok(self.private.to_pkcs1_pem(LineEnding::LF)?)
    }
}
