//! # datapack-cli — Data Package Command-Line Interface
//!
//! Loads a data package descriptor from a file or stdin and runs it through
//! the validation engine.
//!
//! ## Subcommands
//!
//! - `datapack validate` — validate a descriptor and report the first error.
//! - `datapack resources` — list the resources of a valid descriptor.
//!
//! ```bash
//! datapack validate datapackage.json
//! cat datapackage.json | datapack resources - --json
//! datapack validate --policy unchecked datapackage.json
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers do I/O and formatting only; every rule lives in the library
//!   crates.
//! - Handlers write to a caller-supplied writer and return the process exit
//!   code, so they can be exercised without spawning the binary.

pub mod resources;
pub mod validate;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

use datapack_core::ValidationPolicy;
use datapack_package::{Package, PackageError};
use datapack_resource::validator_for;

/// Path argument that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Open `path` for reading, or stdin for [`STDIN_PATH`].
///
/// # Errors
///
/// Fails if the file cannot be opened.
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path == Path::new(STDIN_PATH) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file =
        File::open(path).with_context(|| format!("cannot open descriptor {}", path.display()))?;
    Ok(Box::new(file))
}

/// Load a package from `path` under `policy`.
///
/// The outer result carries failures to open the input; the inner one is the
/// engine's verdict on the descriptor.
///
/// # Errors
///
/// Fails if the input cannot be opened.
pub fn load_package(
    path: &Path,
    policy: ValidationPolicy,
) -> anyhow::Result<Result<Package, PackageError>> {
    let reader = open_input(path)?;
    tracing::debug!(path = %path.display(), %policy, "loading descriptor");
    Ok(Package::from_reader(reader, validator_for(policy)))
}
