//! Subject identity attributes.

use serde::{Deserialize, Serialize};

/// Flat identity attributes for one request, as read from the operator's
/// identity file.
///
/// Every field is carried verbatim: no syntax checks are applied to the
/// email address or country code, and empty fields are simply left out of
/// the generated subject. The serde names match the identity-file schema
/// (`Host`, `EMail`, `CName`, ...); absent keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Base name for the output artifacts; not a certificate field.
    #[serde(rename = "Host", default)]
    pub host: String,

    /// Email address, injected as a raw request attribute.
    #[serde(rename = "EMail", default)]
    pub email: String,

    /// Subject common name (CN).
    #[serde(rename = "CName", default)]
    pub common_name: String,

    /// Subject country (C).
    #[serde(rename = "COuntry", default)]
    pub country: String,

    /// Subject state or province (ST).
    #[serde(rename = "STate", default)]
    pub state: String,

    /// Subject locality (L).
    #[serde(rename = "CIty", default)]
    pub locality: String,

    /// Subject organization (O).
    #[serde(rename = "O", default)]
    pub organization: String,

    /// Subject organizational unit (OU).
    #[serde(rename = "OU", default)]
    pub organizational_unit: String,
}
