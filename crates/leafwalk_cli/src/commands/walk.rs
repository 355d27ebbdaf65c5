//! Walk command implementation

use std::io::Read;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use leafwalk_tree::parse::forest_from_value;
use leafwalk_tree::{PathCollector, TreeError, walk_value};
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use tracing::debug;

use crate::config::{OutputFormat, WalkerConfig};
use crate::output::output_leaves;

/// Deepest `[`/`{` nesting accepted on input.
///
/// Parsing and walking recurse once per level, so deeper input would exhaust
/// the stack instead of failing cleanly.
pub const MAX_NESTING: usize = 1024;

/// Flags given to `walk` on the command line.
#[derive(Debug, Default)]
pub struct WalkArgs {
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub full_paths: bool,
    pub separator: Option<String>,
    pub count: bool,
}

pub fn run_walk(args: &WalkArgs, config: &WalkerConfig) -> Result<()> {
    let settings = merge_args(args, config)?;

    let source = read_input(args.input.as_deref())?;
    check_nesting(&source)?;
    let value = parse_input(&source)?;
    let leaves = collect_leaves(&value, &settings).into_diagnostic()?;
    debug!("Walked {} leaves", leaves.len());

    output_leaves(&leaves, settings.format, args.count)
}

/// Applies command-line flags on top of the loaded config.
fn merge_args(args: &WalkArgs, config: &WalkerConfig) -> Result<WalkerConfig> {
    let mut settings = config.clone();

    if let Some(format) = args.format {
        settings.format = format;
    }
    if args.full_paths {
        settings.full_paths = true;
    }
    if let Some(separator) = &args.separator {
        if separator.is_empty() {
            return Err(miette::miette!("--separator must not be empty"));
        }
        settings.separator = separator.clone();
    }

    Ok(settings)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!("Reading {}", path.display());
            std::fs::read_to_string(path)
                .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))
        }
        _ => {
            debug!("Reading stdin");
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()?;
            Ok(source)
        }
    }
}

fn check_nesting(source: &str) -> Result<()> {
    let depth = nesting_depth(source);
    if depth > MAX_NESTING {
        return Err(miette::miette!(
            "Input nests {} levels deep; at most {} are supported",
            depth,
            MAX_NESTING
        ));
    }
    Ok(())
}

/// Deepest bracket nesting in JSONC text. Strings and comments are skipped.
fn nesting_depth(source: &str) -> usize {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i < bytes.len() && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/')) {
                    i += 1;
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    deepest
}

fn parse_input(source: &str) -> Result<Value> {
    jsonc_parser::parse_to_serde_value(source, &ParseOptions::default())
        .map_err(|e| miette::miette!("Failed to parse input: {}", e))?
        .ok_or_else(|| miette::miette!("Input is empty"))
}

fn collect_leaves(value: &Value, settings: &WalkerConfig) -> Result<Vec<String>, TreeError> {
    if settings.full_paths {
        let forest = forest_from_value(value)?;
        return Ok(PathCollector::with_separator(settings.separator.as_str()).collect_from(&forest));
    }

    let mut leaves = Vec::new();
    walk_value(value, |leaf| leaves.push(leaf.to_string()))?;
    Ok(leaves)
}
