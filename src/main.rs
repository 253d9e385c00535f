//! spexml — translate Splunk `.conf.spec` files into DITA concept topics.
//!
//! Supports three modes:
//!
//! - **stdin mode**: `spexml < app.conf.spec > app.conf.xml`
//! - **file mode**: `spexml etc/app.conf.spec 'etc/*.conf.spec'`
//! - **batch mode**: `spexml --batch etc/system/README`

mod dita;
mod model;
mod parser;

use anyhow::{Context, Result};
use clap::Parser;
use model::Topic;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spexml",
    about = "Translate Splunk .conf.spec files into DITA concept topics"
)]
struct Cli {
    /// Input .conf.spec files (glob patterns supported). If omitted, reads
    /// from stdin and writes to stdout.
    files: Vec<String>,

    /// Translate every *.conf.spec file found in a directory
    #[arg(short, long, value_name = "DIR", conflicts_with = "files")]
    batch: Option<PathBuf>,

    /// Output directory (default: next to each input file)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Topic id used in stdin mode
    #[arg(long, default_value = "stdin")]
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.batch {
        return batch_mode(&cli, dir);
    }
    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }
    file_mode(&cli)
}

/// stdin mode: read spec text from stdin, write the topic XML to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let topic = Topic::from_stanzas(cli.name.clone(), parser::parse(&input));
    let xml = dita::serialize(&topic)?;
    io::stdout()
        .write_all(&xml)
        .context("failed to write stdout")?;
    Ok(())
}

/// file mode: translate each named file; any failure aborts the run.
fn file_mode(cli: &Cli) -> Result<()> {
    let inputs = expand_globs(&cli.files)?;
    let output_dir = prepare_output_dir(cli.output.as_deref())?;

    for input in &inputs {
        let output = output_path(input, output_dir.as_deref());
        translate_file(input, &output)?;
        println!("Translated: {} -> {}", input.display(), output.display());
    }
    Ok(())
}

/// batch mode: translate every *.conf.spec in a directory, continuing past
/// per-file failures.
fn batch_mode(cli: &Cli, dir: &Path) -> Result<()> {
    let inputs = discover_specs(dir)?;
    if inputs.is_empty() {
        eprintln!("warning: no .conf.spec files in {}", dir.display());
        return Ok(());
    }
    let output_dir = prepare_output_dir(cli.output.as_deref())?;

    for input in &inputs {
        let output = output_path(input, output_dir.as_deref());
        match translate_file(input, &output) {
            Ok(()) => println!("Translated: {} -> {}", input.display(), output.display()),
            Err(e) => eprintln!("warning: skipping {}: {:#}", input.display(), e),
        }
    }
    Ok(())
}

/// Translate a single spec file into a DITA topic at `output`.
///
/// Reads the whole file up front; the parser and builder are pure, so the
/// only failure points are the two I/O calls.
fn translate_file(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let topic = Topic::from_stanzas(topic_id(input), parser::parse(&content));
    let xml = dita::serialize(&topic)?;

    fs::write(output, xml).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

/// Create the output directory if one was requested.
fn prepare_output_dir(dir: Option<&Path>) -> Result<Option<PathBuf>> {
    match dir {
        Some(d) => {
            fs::create_dir_all(d)
                .with_context(|| format!("failed to create output directory: {}", d.display()))?;
            Ok(Some(d.to_path_buf()))
        }
        None => Ok(None),
    }
}

/// Topic id for a spec file: base name with the final extension stripped.
/// "etc/app.conf.spec" → "app.conf"
fn topic_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Output path for a spec file: final extension swapped to .xml, placed in
/// `dir` when given, otherwise next to the input.
/// "etc/app.conf.spec" → "etc/app.conf.xml"
fn output_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    let file_name = format!("{}.xml", topic_id(input));
    match dir {
        Some(d) => d.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Expand glob patterns into a list of input files.
///
/// Literal paths are passed through untouched so a missing file surfaces as
/// a read error instead of silently matching nothing.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() || !is_glob_pattern(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Files in `dir` named *.conf.spec, sorted for deterministic batch order.
fn discover_specs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_spec = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".conf.spec"));
        if is_spec && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
