//! Command-line argument definitions using clap.

use clap::Parser;

/// Generate an RSA private key and a PKCS#10 certificate signing request
/// from a YAML identity file.
///
/// The identity file names the subject (CName, O, OU, CIty, STate,
/// COuntry), the request email address (EMail), and the base name of the
/// output files (Host). Both artifacts are written PEM-encoded with
/// owner-only permissions.
#[derive(Parser, Debug)]
#[command(name = "csrgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML identity file
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        default_value = "~/file.yml"
    )]
    pub file: String,

    /// Directory the key and request files are written to
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = "/tmp/"
    )]
    pub output_dir: String,

    /// Increase log verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_paths() {
        let cli = Cli::parse_from(["csrgen"]);
        assert_eq!(cli.file, "~/file.yml");
        assert_eq!(cli.output_dir, "/tmp/");
        assert!(!cli.verbose);
    }

    #[test]
    fn short_flags_are_accepted() {
        let cli = Cli::parse_from(["csrgen", "-f", "id.yml", "-o", "out/", "-v"]);
        assert_eq!(cli.file, "id.yml");
        assert_eq!(cli.output_dir, "out/");
        assert!(cli.verbose);
    }
}
