//! Core pipeline for generating RSA key pairs and PKCS#10 certificate
//! signing requests from flat identity attributes.
//!
//! The crate is a linear composition of two pieces:
//!
//! - **Key generation**: a fresh 2048-bit RSA pair per run ([`KeyPair`])
//! - **Request building**: subject assembly, raw attribute injection
//!   (notably the PKCS#9 `emailAddress` attribute that subject-name APIs
//!   have no field for), and SHA-256/RSA signing ([`RequestBuilder`])
//!
//! # Example
//!
//! ```rust,ignore
//! use csrgen_core::{IdentityRecord, KeyPair, RequestBuilder};
//!
//! let identity = IdentityRecord {
//!     common_name: "svc1.example.com".into(),
//!     email: "ops@example.com".into(),
//!     ..IdentityRecord::default()
//! };
//!
//! let keys = KeyPair::generate()?;
//! let request = RequestBuilder::new().build(&identity, &keys)?;
//! std::fs::write("svc1.csr", request.to_pem())?;
//! ```
//!
//! File handling, configuration parsing, and flag handling live in the
//! `csrgen-cli` crate; this crate only transforms bytes.

mod error;
pub mod identity;
pub mod keygen;
pub mod request;

pub use error::{CsrError, Result};
pub use identity::IdentityRecord;
pub use keygen::{KeyPair, RSA_KEY_BITS};
pub use request::{
    CertificateRequestRecord, RawAttribute, RequestBuilder, EMAIL_ADDRESS_OID,
    SHA256_WITH_RSA_OID,
};
