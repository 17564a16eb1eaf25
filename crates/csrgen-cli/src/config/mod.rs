//! Identity-file loading.

use std::path::Path;

use anyhow::{Context, Result};
use csrgen_core::IdentityRecord;

/// Load an [`IdentityRecord`] from a YAML file.
///
/// The file schema is the flat key set `Host`, `EMail`, `CName`, `COuntry`,
/// `STate`, `CIty`, `O`, `OU`; absent keys read as empty strings and no
/// defaults are applied beyond that.
pub fn load_identity(path: &Path) -> Result<IdentityRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let identity: IdentityRecord = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(identity)
}
