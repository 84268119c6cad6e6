//! # Validate Subcommand
//!
//! Validates a package descriptor and reports either the resource count or
//! the first error together with its kind.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use datapack_core::ValidationPolicy;

use crate::load_package;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Descriptor file, or `-` for stdin.
    pub path: PathBuf,

    /// Resource validation policy (`strict` or `unchecked`).
    #[arg(long, default_value_t = ValidationPolicy::Strict)]
    pub policy: ValidationPolicy,
}

/// Run the validate subcommand. Returns 0 when valid and 1 otherwise.
///
/// # Errors
///
/// Fails if the input cannot be opened or the output cannot be written.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    match load_package(&args.path, args.policy)? {
        Ok(package) => {
            writeln!(out, "valid: {} resource(s)", package.len())?;
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "invalid [{}]: {e}", e.kind())?;
            Ok(1)
        }
    }
}
