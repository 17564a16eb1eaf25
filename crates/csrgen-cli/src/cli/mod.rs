//! CLI argument parsing and the generation pipeline.

pub mod args;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use csrgen_core::{KeyPair, RequestBuilder};
use tracing::{debug, info};

use crate::{config, output};
use args::Cli;

/// Run the CLI application.
///
/// Any failure aborts the pipeline before an artifact for the failing stage
/// is written; the process exits non-zero with the error chain on stderr.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let identity_path = expand(&cli.file);
    let identity = config::load_identity(&identity_path)
        .with_context(|| format!("failed to load identity file {}", identity_path.display()))?;

    if identity.host.is_empty() {
        bail!(
            "identity file {} does not set Host (it names the output files)",
            identity_path.display()
        );
    }

    let output_dir = expand(&cli.output_dir);
    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;

    info!(host = %identity.host, "generating RSA key pair");
    let keys = KeyPair::generate().context("key generation failed")?;

    let request = RequestBuilder::new()
        .build(&identity, &keys)
        .context("certification request construction failed")?;

    // Both artifacts exist in memory before the first write, so a failure
    // never leaves a key file without a matching request.
    let key_pem = keys.to_pkcs1_pem().context("private key encoding failed")?;
    let request_pem = request.to_pem();

    let key_path = output_dir.join(format!("{}.key", identity.host));
    output::write_artifact(&key_path, key_pem.as_bytes())
        .with_context(|| format!("failed to write private key {}", key_path.display()))?;
    debug!(path = %key_path.display(), "wrote private key");

    let csr_path = output_dir.join(format!("{}.csr", identity.host));
    output::write_artifact(&csr_path, request_pem.as_bytes()).with_context(|| {
        format!("failed to write certificate request {}", csr_path.display())
    })?;
    debug!(path = %csr_path.display(), "wrote certificate request");

    println!("Private key: {}", key_path.display());
    println!("Certificate request: {}", csr_path.display());

    Ok(())
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
