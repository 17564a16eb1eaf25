use thiserror::Error;

/// Result type alias for request-generation operations.
pub type Result<T> = std::result::Result<T, CsrError>;

/// Errors that can occur while generating a key pair or building a request.
///
/// Every variant is terminal for the current run: retrying with the same
/// inputs is either pointless (the pipeline is deterministic apart from key
/// generation) or requires a fresh process-level invocation.
#[derive(Error, Debug)]
pub enum CsrError {
    /// Entropy or RSA library failure while generating a key pair.
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),

    /// Malformed ASN.1 construction while encoding the subject, the
    /// attribute set, key material, or the request itself.
    #[error("request encoding failed: {0}")]
    Encoding(String),

    /// Signature computation over the request info failed.
    #[error("request signing failed: {0}")]
    Signing(#[from] rsa::signature::Error),
}

impl From<der::Error> for CsrError {
    fn from(err: der::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for CsrError {
    fn from(err: rsa::pkcs1::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<x509_cert::spki::Error> for CsrError {
    fn from(err: x509_cert::spki::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
