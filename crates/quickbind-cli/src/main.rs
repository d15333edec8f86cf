//! Quickbind driver.
//!
//! Loads one or more JSON class-description documents, runs the generator,
//! surfaces diagnostics through `tracing`, and writes one `_bind.cpp` unit
//! per class. Units are buffered in full before any write, and an output
//! file whose content already matches the fresh text is left untouched so
//! downstream build systems see no spurious mtime changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use quickbind_codegen::{generate, GeneratedUnit};
use quickbind_types::{ClassMetadata, Diagnostic};

#[derive(Debug, Parser)]
#[command(name = "quickbind", version, about = "Generate script-runtime binding glue for native classes")]
struct Args {
    /// JSON class-description documents, one class per file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory receiving the generated units
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print generated source on stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Print all collected diagnostics as a JSON array on stdout
    #[arg(long)]
    diagnostics_json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for input in &args.inputs {
        let doc = fs::read_to_string(input)
            .with_context(|| format!("reading class description {}", input.display()))?;
        let class: ClassMetadata = serde_json::from_str(&doc)
            .with_context(|| format!("parsing class description {}", input.display()))?;
        let unit = generate(&class)
            .with_context(|| format!("generating bindings for class `{}`", class.name))?;

        for diagnostic in &unit.diagnostics {
            warn!(class = %diagnostic.class, "{}", diagnostic.message);
        }
        diagnostics.extend(unit.diagnostics.iter().cloned());

        if args.stdout {
            print!("{}", unit.source);
        } else {
            write_unit(&args.out_dir, &unit)?;
        }
    }

    if args.diagnostics_json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    }
    Ok(())
}

/// Write one unit, skipping the write when the on-disk content digest
/// already matches.
fn write_unit(out_dir: &Path, unit: &GeneratedUnit) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let path = out_dir.join(&unit.file_name);

    if let Ok(existing) = fs::read(&path) {
        if digest(&existing) == digest(unit.source.as_bytes()) {
            info!(class = %unit.class_name, "unchanged, skipping write");
            return Ok(());
        }
    }

    fs::write(&path, &unit.source)
        .with_context(|| format!("writing binding unit {}", path.display()))?;
    info!(class = %unit.class_name, path = %path.display(), "wrote binding unit");
    Ok(())
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbind_types::{FunctionMetadata, MemberMetadata, Visibility};

    fn widget() -> ClassMetadata {
        ClassMetadata {
            name: "Widget".to_string(),
            include: "widget.h".to_string(),
            members: vec![MemberMetadata::Function(FunctionMetadata {
                visibility: Visibility::Public,
                name: "Widget".to_string(),
                return_type: String::new(),
                params: vec![],
            })],
        }
    }

    #[test]
    fn test_write_then_skip_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let unit = generate(&widget()).unwrap();

        write_unit(dir.path(), &unit).unwrap();
        let path = dir.path().join("Widget_bind.cpp");
        let first_mtime = fs::metadata(&path).unwrap().modified().unwrap();

        // Second write with identical content must not rewrite the file.
        write_unit(dir.path(), &unit).unwrap();
        let second_mtime = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(first_mtime, second_mtime);
        assert_eq!(fs::read_to_string(&path).unwrap(), unit.source);
    }

    #[test]
    fn test_stale_content_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let unit = generate(&widget()).unwrap();
        let path = dir.path().join("Widget_bind.cpp");

        fs::write(&path, "stale").unwrap();
        write_unit(dir.path(), &unit).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), unit.source);
    }

    #[test]
    fn test_digest_distinguishes_content() {
        assert_ne!(digest(b"a"), digest(b"b"));
        assert_eq!(digest(b"same"), digest(b"same"));
    }
}
