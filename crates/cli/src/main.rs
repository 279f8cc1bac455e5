//! CLI tool for converting between GeoJSON and WKT.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use geotext_core::{Converter, ConverterOptions, Format, JsonStyle};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Convert GeoJSON to WKT and WKT to GeoJSON.
#[derive(Parser, Debug)]
#[command(name = "geotext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s); reads stdin when none are given or for "-"
    input: Vec<PathBuf>,

    /// Output format (default: the other format from the input's)
    #[arg(short, long, value_enum)]
    to: Option<Target>,

    /// Output directory (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write GeoJSON on a single line
    #[arg(short, long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    Wkt,
    Geojson,
}

impl From<Target> for Format {
    fn from(target: Target) -> Self {
        match target {
            Target::Wkt => Format::Wkt,
            Target::Geojson => Format::GeoJson,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let style = if args.compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    };
    let converter = Converter::new().with_options(ConverterOptions::new().with_json_style(style));

    let stdin = [PathBuf::from("-")];
    let inputs: &[PathBuf] = if args.input.is_empty() {
        &stdin
    } else {
        &args.input
    };

    let mut failed = false;
    for input_path in inputs {
        log::debug!("Processing: {}", input_path.display());

        if let Err(e) = process_input(input_path, &args, &converter) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Convert a single input and write the result.
fn process_input(input_path: &Path, args: &Args, converter: &Converter) -> Result<()> {
    let text = read_input(input_path)?;

    let from = detect_format(input_path, &text, args.to)
        .ok_or_else(|| anyhow::anyhow!("Could not detect input format"))?;
    log::debug!("  Converting {} to {}", from, from.other());

    let converted = converter.convert(from, &text)?;

    match &args.output {
        Some(dir) => {
            let output_path = get_output_path(input_path, dir, from.other())?;
            write_output(&output_path, &converted)?;
            log::info!("Written to: {}", output_path.display());
        }
        None => println!("{}", converted),
    }

    Ok(())
}

/// Pick the input format: explicit target first, then extension, then content.
fn detect_format(input_path: &Path, text: &str, to: Option<Target>) -> Option<Format> {
    if let Some(target) = to {
        return Some(Format::from(target).other());
    }

    input_path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Format::from_extension)
        .or_else(|| Format::from_content(text))
}

fn read_input(input_path: &Path) -> Result<String> {
    let mut text = String::new();

    if input_path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
    } else {
        File::open(input_path)
            .with_context(|| format!("Failed to open {}", input_path.display()))?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
    }

    Ok(text)
}

/// Determine the output path for a converted input.
fn get_output_path(input_path: &Path, output_dir: &Path, format: Format) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| *s != "-")
        .unwrap_or("stdin");

    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    Ok(output_dir.join(format!("{}.{}", stem, format.extension())))
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    writeln!(file, "{}", content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format_prefers_target() {
        let path = Path::new("shape.wkt");
        assert_eq!(
            detect_format(path, "POINT (1 2)", Some(Target::Wkt)),
            Some(Format::GeoJson)
        );
    }

    #[test]
    fn test_detect_format_from_extension_then_content() {
        assert_eq!(
            detect_format(Path::new("a.geojson"), "", None),
            Some(Format::GeoJson)
        );
        assert_eq!(
            detect_format(Path::new("-"), "POINT (1 2)", None),
            Some(Format::Wkt)
        );
        assert_eq!(detect_format(Path::new("notes.txt"), "", None), None);
    }

    #[test]
    fn test_output_path_uses_target_extension() {
        let dir = std::env::temp_dir().join("geotext-cli-test");
        let path = get_output_path(Path::new("data/parcels.geojson"), &dir, Format::Wkt).unwrap();
        assert_eq!(path, dir.join("parcels.wkt"));

        let path = get_output_path(Path::new("-"), &dir, Format::GeoJson).unwrap();
        assert_eq!(path, dir.join("stdin.geojson"));
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["geotext", "--to", "geojson", "--compact", "a.wkt"]).unwrap();
        assert!(matches!(args.to, Some(Target::Geojson)));
        assert!(args.compact);
        assert_eq!(args.input, vec![PathBuf::from("a.wkt")]);
    }
}
