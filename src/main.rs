mod consts;
mod discover;
mod error;
mod minify;
mod process;
mod run;
mod transform;


use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::consts::{DEFAULT_ROOT, MAX_PASSES, ROOT_ENV};
use crate::minify::SvgMinifier;
use crate::transform::Multipass;

/// Takes no arguments. The directory to scan comes from `SVG_OPTIMIZE_ROOT`,
/// defaulting to the current directory.
#[derive(Parser, Debug)]
#[command(name = "optimize-svgs", version, about = "Optimize SVG files in place, keeping *.bak backups")]
struct Cli {}

/// Scan root from the value of `ROOT_ENV`, if set and non-empty.
fn resolve_root(value: Option<OsString>) -> PathBuf {
    value.filter(|v| !v.is_empty()).map_or_else(|| PathBuf::from(DEFAULT_ROOT), PathBuf::from)
}

fn main() {
    tracing_subscriber::fmt::init();

    Cli::parse();
    let root = resolve_root(std::env::var_os(ROOT_ENV));
    let transformer = Multipass::new(SvgMinifier::default(), MAX_PASSES);
    let summary = run::run(&root, &transformer);

    if summary.failed() > 0 {
        tracing::warn!(failed = summary.failed(), "some files could not be processed");
    }
}
