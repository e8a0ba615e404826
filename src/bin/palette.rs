use anyhow::{Context, Result};
use clap::Parser;
use palette_namer::{CSS3_COLORS, ExtractOptions, HexCode, extract_palette_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::path::PathBuf;

/// Extract a named color palette from images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required_unless_present = "sample_reference")]
    inputs: Vec<PathBuf>,

    /// Number of palette colors (k-means clusters)
    #[arg(short = 'k', long, default_value_t = palette_namer::DEFAULT_COLORS)]
    colors: usize,

    /// Seed for clustering; omit for a different draw on every run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one JSON document per image instead of plain text
    #[arg(long)]
    json: bool,

    /// Print this many randomly chosen reference colors first
    #[arg(long, value_name = "N")]
    sample_reference: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    if let Some(count) = args.sample_reference {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        for entry in CSS3_COLORS.sample(count, &mut rng) {
            println!("{} {}", HexCode::from(entry.color), entry.name);
        }
    }

    let options = ExtractOptions {
        colors: args.colors,
        seed: args.seed,
    };

    for input in &args.inputs {
        let palette = extract_palette_with(input, &options)
            .with_context(|| format!("palette extraction failed for {}", input.display()))?;
        tracing::info!("Extracted {} colors from {}", palette.len(), input.display());

        if args.json {
            let colors: Vec<_> = palette
                .iter()
                .map(|e| json!({ "hex": e.hex.as_str(), "name": e.name }))
                .collect();
            let doc = json!({ "file": input.display().to_string(), "palette": colors });
            println!("{doc}");
        } else {
            println!("{}:", input.display());
            for entry in &palette {
                println!("  {} {}", entry.hex, entry.name);
            }
        }
    }

    Ok(())
}
