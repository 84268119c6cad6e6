//! # Resources Subcommand
//!
//! Lists the resources of a valid package: name, content kind, and paths.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde_json::{json, Value};

use datapack_core::ValidationPolicy;
use datapack_resource::{Resource, ResourceContent};

use crate::load_package;

/// Arguments for the resources subcommand.
#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// Descriptor file, or `-` for stdin.
    pub path: PathBuf,

    /// Resource validation policy (`strict` or `unchecked`).
    #[arg(long, default_value_t = ValidationPolicy::Strict)]
    pub policy: ValidationPolicy,

    /// Emit a JSON array instead of tab-separated lines.
    #[arg(long)]
    pub json: bool,
}

/// Run the resources subcommand. Returns 0 on success and 1 for an invalid
/// descriptor.
///
/// # Errors
///
/// Fails if the input cannot be opened or the output cannot be written.
pub fn run_resources(args: &ResourcesArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let package = match load_package(&args.path, args.policy)? {
        Ok(package) => package,
        Err(e) => {
            writeln!(out, "invalid [{}]: {e}", e.kind())?;
            return Ok(1);
        }
    };

    if args.json {
        let listing: Vec<Value> = package.resources().iter().map(summary).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
    } else {
        for resource in package.resources() {
            let (kind, paths) = kind_and_paths(resource);
            writeln!(out, "{}\t{}\t{}", resource.name(), kind, paths.join(","))?;
        }
    }
    Ok(0)
}

fn summary(resource: &Resource) -> Value {
    let (kind, paths) = kind_and_paths(resource);
    json!({
        "name": resource.name(),
        "kind": kind,
        "paths": paths,
    })
}

/// Content label and path entries. Unchecked resources have no projection.
fn kind_and_paths(resource: &Resource) -> (&'static str, Vec<&str>) {
    match resource.content() {
        Some(ResourceContent::Paths(paths)) => (paths.kind().as_str(), paths.iter().collect()),
        Some(content @ ResourceContent::Data(_)) => (content.label(), Vec::new()),
        None => ("unchecked", Vec::new()),
    }
}
