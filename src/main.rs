//! Rafsuite CLI - Command-line tool for League of Legends cache textures.
//!
//! This is the main entry point for the Rafsuite command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use rafsuite::dds::expected_mipmap_count;
use rafsuite::prelude::*;

/// Rafsuite - League of Legends cache texture tool
#[derive(Parser)]
#[command(name = "rafsuite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header, format and mip table of a DDS file
    DdsInfo {
        /// Input DDS file
        #[arg(short, long, env = "RAFSUITE_INPUT")]
        input: PathBuf,
    },

    /// Decode a DDS file to PNG
    DdsDecode {
        /// Input DDS file
        #[arg(short, long, env = "RAFSUITE_INPUT")]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long, env = "RAFSUITE_OUTPUT")]
        output: PathBuf,
    },

    /// Decode every DDS file under a directory and report failures
    DdsCheck {
        /// Directory to scan
        #[arg(short, long, env = "RAFSUITE_INPUT")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::DdsInfo { input } => {
            cmd_dds_info(&input)?;
        }
        Commands::DdsDecode { input, output } => {
            cmd_dds_decode(&input, &output)?;
        }
        Commands::DdsCheck { input } => {
            cmd_dds_check(&input)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_dds_info(input: &Path) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    let texture = decode(&data).context("Failed to decode DDS")?;
    let header = &texture.header;
    let pixel_format = &header.pixel_format;

    println!("File:        {}", input.display());
    println!("Format:      {}", texture.format);
    println!("Size:        {}x{}", header.width, header.height);
    println!("Flags:       {:?}", header.flags);
    println!("Pitch:       {}", header.pitch_or_linear_size);
    println!("Depth:       {}", header.depth);
    println!("Mipmaps:     {}", header.mipmap_count);
    println!("PF flags:    {:?}", pixel_format.flags);
    match pixel_format.four_cc {
        Some(four_cc) => println!("FourCC:      {four_cc}"),
        None => println!("Bit count:   {}", pixel_format.rgb_bit_count),
    }
    if let Some(masks) = pixel_format.masks {
        println!(
            "Masks:       R {:#010x} G {:#010x} B {:#010x} A {:#010x}",
            masks.r, masks.g, masks.b, masks.a
        );
    }
    println!("Caps:        {:?}", header.caps_flags());
    println!("Caps2:       {:?}", header.caps2_flags());

    println!("\nMip levels:");
    for line in mip_level_lines(&texture) {
        println!("{line}");
    }

    if !texture.diagnostics.is_empty() {
        println!("\nDiagnostics:");
        for diagnostic in &texture.diagnostics {
            println!("  {diagnostic}");
        }
    }

    Ok(())
}

/// One line per mip level, capped at the full chain length for the
/// texture's dimensions. A declared count past that is summarized.
fn mip_level_lines(texture: &DecodedTexture) -> Vec<String> {
    let header = &texture.header;
    let shown = expected_mipmap_count(header.width, header.height) as usize;

    let mut lines: Vec<String> = texture
        .mipmap_sizes
        .iter()
        .take(shown)
        .enumerate()
        .map(|(level, size)| format!("  {:>2}: {:>10} bytes", level, size))
        .collect();

    let hidden = texture.mipmap_sizes.len().saturating_sub(shown);
    if hidden > 0 {
        lines.push(format!("  ... {hidden} more levels"));
    }
    lines
}

fn cmd_dds_decode(input: &Path, output: &Path) -> Result<()> {
    println!("Decoding: {} -> {}", input.display(), output.display());

    let start = Instant::now();
    let data = fs::read(input).context("Failed to read input file")?;
    let texture = decode(&data).context("Failed to decode DDS")?;

    let Some(image) = texture.image else {
        anyhow::bail!("No decompressor for {} textures", texture.format);
    };
    if image.width() == 0 || image.height() == 0 {
        anyhow::bail!("Texture has no pixels");
    }

    let rgba = image
        .into_rgba_image()
        .context("Decoded pixels do not match the image size")?;
    rgba.save(output).context("Failed to write output file")?;

    println!("Decode completed in {:?}", start.elapsed());

    Ok(())
}

/// Outcome of a batch check.
#[derive(Debug, Default)]
struct CheckSummary {
    decoded: usize,
    skipped: usize,
    with_diagnostics: usize,
    failures: Vec<(PathBuf, String)>,
}

fn cmd_dds_check(input: &Path) -> Result<()> {
    println!("Scanning: {}", input.display());

    let files = find_dds_files(input);
    println!("Checking {} files...", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let summary = check_files(&files, &pb);
    pb.finish_with_message("Done");

    for (path, error) in &summary.failures {
        eprintln!("Error decoding {}: {}", path.display(), error);
    }
    println!(
        "Checked {} files in {:?}: {} decoded, {} without decompressor, {} with diagnostics, {} failed",
        files.len(),
        start.elapsed(),
        summary.decoded,
        summary.skipped,
        summary.with_diagnostics,
        summary.failures.len()
    );

    if !summary.failures.is_empty() {
        anyhow::bail!("{} files failed to decode", summary.failures.len());
    }

    Ok(())
}

fn find_dds_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| EntryKind::from_path(&entry.path().to_string_lossy()) == EntryKind::DdsTexture)
        .map(|entry| entry.into_path())
        .collect()
}

fn check_files(files: &[PathBuf], pb: &ProgressBar) -> CheckSummary {
    let outcomes: Vec<(&PathBuf, Result<DecodedTexture>)> = files
        .par_iter()
        .map(|path| {
            let outcome = fs::read(path)
                .context("Failed to read file")
                .and_then(|data| decode(&data).map_err(anyhow::Error::from));
            pb.inc(1);
            (path, outcome)
        })
        .collect();

    let mut summary = CheckSummary::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(texture) => {
                if texture.image.is_some() {
                    summary.decoded += 1;
                } else {
                    summary.skipped += 1;
                }
                if !texture.diagnostics.is_empty() {
                    summary.with_diagnostics += 1;
                }
            }
            Err(e) => summary.failures.push((path.clone(), format!("{e:#}"))),
        }
    }
    summary
}
