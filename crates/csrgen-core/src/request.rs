//! PKCS#10 certification request construction and signing.
//!
//! The subject name only carries the standard RDN components (C, ST, L, O,
//! OU, CN). Everything a subject-name API has no field for is injected
//! through [`RawAttribute`]: an OID, an ASN.1 tag, and undecoded value
//! bytes appended to the request's attribute set. The PKCS#9 `emailAddress`
//! attribute is the one injected by default.

use std::str::FromStr;

use der::asn1::{Any, BitString, ObjectIdentifier, SetOfVec};
use der::{AnyRef, Decode, Encode, Tag};
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use tracing::debug;
use x509_cert::attr::{Attribute, Attributes};
use x509_cert::name::Name;
use x509_cert::request::{CertReq, CertReqInfo, Version};
use x509_cert::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};

use crate::error::Result;
use crate::identity::IdentityRecord;
use crate::keygen::KeyPair;

/// PKCS#9 `emailAddress` attribute type.
pub const EMAIL_ADDRESS_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1");

/// `sha256WithRSAEncryption` signature algorithm.
pub const SHA256_WITH_RSA_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");

/// PEM block type for the request artifact.
pub const REQUEST_PEM_TAG: &str = "CERTIFICATE REQUEST";

/// A raw attribute appended verbatim to the request's attribute set.
///
/// The value bytes are wrapped under `tag` without inspection, so any
/// vendor attribute can be carried without the builder learning about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    /// Attribute type.
    pub oid: ObjectIdentifier,
    /// ASN.1 tag of the single attribute value.
    pub tag: Tag,
    /// Raw value bytes, encoded as-is under `tag`.
    pub value: Vec<u8>,
}

impl RawAttribute {
    /// IA5String-tagged attribute from plain text.
    #[must_use]
    pub fn ia5(oid: ObjectIdentifier, text: &str) -> Self {
        Self {
            oid,
            tag: Tag::Ia5String,
            value: text.as_bytes().to_vec(),
        }
    }

    fn to_attribute(&self) -> Result<Attribute> {
        let value = Any::new(self.tag, self.value.as_slice())?;
        Ok(Attribute {
            oid: self.oid,
            values: SetOfVec::try_from(vec![value])?,
        })
    }
}

/// A signed, DER-encoded certification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequestRecord {
    der: Vec<u8>,
    signature_algorithm: ObjectIdentifier,
}

impl CertificateRequestRecord {
    /// DER bytes of the signed request.
    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Consume the record, returning the DER bytes.
    #[must_use]
    pub fn into_der(self) -> Vec<u8> {
        self.der
    }

    /// OID of the algorithm the request was signed with.
    #[must_use]
    pub const fn signature_algorithm(&self) -> ObjectIdentifier {
        self.signature_algorithm
    }

    /// PEM rendering with the `CERTIFICATE REQUEST` block type.
    #[must_use]
    pub fn to_pem(&self) -> String {
        pem::encode(&pem::Pem::new(REQUEST_PEM_TAG, self.der.clone()))
    }
}

/// Builds and signs PKCS#10 certification requests.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    extra_attributes: Vec<RawAttribute>,
}

impl RequestBuilder {
    /// A builder with the default attribute set (email injection only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vendor attribute to the request's attribute set.
    #[must_use]
    pub fn attribute(mut self, attribute: RawAttribute) -> Self {
        self.extra_attributes.push(attribute);
        self
    }

    /// Build the `CertificationRequestInfo` for `identity`, sign it with
    /// the private half of `keys`, and return the encoded request.
    ///
    /// Empty identity fields are omitted from the subject rather than
    /// emitted as empty strings, and an empty email address adds no
    /// attribute. Neither input is mutated; the same inputs produce the
    /// same bytes (PKCS#1 v1.5 signing is deterministic).
    ///
    /// # Errors
    ///
    /// [`CsrError::Encoding`](crate::CsrError::Encoding) if subject,
    /// attribute, or key encoding fails,
    /// [`CsrError::Signing`](crate::CsrError::Signing) if the signature
    /// computation fails. Both are fatal; retrying cannot change the
    /// outcome.
    pub fn build(
        &self,
        identity: &IdentityRecord,
        keys: &KeyPair,
    ) -> Result<CertificateRequestRecord> {
        let subject = subject_name(identity)?;

        let mut raw_attributes = Vec::with_capacity(self.extra_attributes.len() + 1);
        if !identity.email.is_empty() {
            raw_attributes.push(RawAttribute::ia5(EMAIL_ADDRESS_OID, &identity.email));
        }
        raw_attributes.extend(self.extra_attributes.iter().cloned());

        let attributes = raw_attributes
            .iter()
            .map(RawAttribute::to_attribute)
            .collect::<Result<Vec<_>>>()?;
        let attributes = Attributes::try_from(attributes)?;

        let spki_der = keys.public_key().to_public_key_der()?;
        let public_key = SubjectPublicKeyInfoOwned::from_der(spki_der.as_bytes())?;

        let info = CertReqInfo {
            version: Version::V1,
            subject,
            public_key,
            attributes,
        };
        let tbs = info.to_der()?;

        let signing_key = SigningKey::<Sha256>::new(keys.private_key().clone());
        let signature = signing_key.try_sign(&tbs)?;

        let request = CertReq {
            info,
            algorithm: AlgorithmIdentifierOwned {
                oid: SHA256_WITH_RSA_OID,
                parameters: Some(AnyRef::NULL.into()),
            },
            signature: BitString::from_bytes(&signature.to_vec())?,
        };

        debug!(algorithm = %SHA256_WITH_RSA_OID, "signed certification request");
        Ok(CertificateRequestRecord {
            der: request.to_der()?,
            signature_algorithm: SHA256_WITH_RSA_OID,
        })
    }
}

/// Map the non-empty identity fields onto a distinguished name.
///
/// Components are rendered most-specific-first (`CN=...,...,C=...`), which
/// the RFC 4514 parser reverses into DER order C, ST, L, O, OU, CN.
fn subject_name(identity: &IdentityRecord) -> Result<Name> {
    let components = [
        ("CN", identity.common_name.as_str()),
        ("OU", identity.organizational_unit.as_str()),
        ("O", identity.organization.as_str()),
        ("L", identity.locality.as_str()),
        ("ST", identity.state.as_str()),
        ("C", identity.country.as_str()),
    ];

    let rendered: Vec<String> = components
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", escape_rdn_value(value)))
        .collect();

    if rendered.is_empty() {
        return Ok(Name::default());
    }
    Ok(Name::from_str(&rendered.join(","))?)
}

/// RFC 4514 escaping for a distinguished-name value.
fn escape_rdn_value(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        let needs_escape = matches!(c, '"' | '+' | ',' | ';' | '<' | '>' | '\\')
            || (i == 0 && (c == ' ' || c == '#'))
            || (i == last && c == ' ');
        if needs_escape {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
