//! csrgen - generate an RSA private key and a PKCS#10 certificate signing
//! request from a YAML identity file.

use anyhow::Result;

fn main() -> Result<()> {
    csrgen_cli::run()
}
