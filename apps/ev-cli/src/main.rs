use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use ev_app::{
    AppResult, EnvelopeOptions, FoundationReport, SurfaceConstruction, apportion_foundations,
    load_envelope, materialize_envelope, synthesize_all, validate_envelope, write_report,
};
use ev_core::units::to_inch;
use ev_foundation::ApportionConfig;

#[derive(Parser)]
#[command(name = "ev-cli")]
#[command(about = "Envelope CLI - construction synthesis and foundation apportionment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate envelope file syntax and structure
    Validate {
        /// Path to the envelope YAML or JSON file
        envelope_path: PathBuf,
    },
    /// Synthesize constructions for every opaque surface
    Constructions {
        /// Path to the envelope YAML or JSON file
        envelope_path: PathBuf,
        /// Also print the layer stack of each construction
        #[arg(long)]
        layers: bool,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Apportion foundation slabs into Kiva instances
    Foundations {
        /// Path to the envelope YAML or JSON file
        envelope_path: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Process the whole envelope
    Run {
        /// Path to the envelope YAML or JSON file
        envelope_path: PathBuf,
        /// Write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Args)]
struct OptionArgs {
    /// Allowed difference between requested and built R-value
    #[arg(long, default_value_t = EnvelopeOptions::default().rvalue_tolerance)]
    tolerance: f64,
    /// Smallest uncovered share of slab perimeter that becomes its own instance
    #[arg(long, default_value_t = ApportionConfig::default().min_remainder)]
    min_remainder: f64,
    /// Synthesize surfaces on a single thread
    #[arg(long)]
    serial: bool,
}

impl OptionArgs {
    fn to_options(&self) -> AppResult<EnvelopeOptions> {
        let options = EnvelopeOptions {
            rvalue_tolerance: self.tolerance,
            parallel: !self.serial,
            apportion: ApportionConfig {
                min_remainder: self.min_remainder,
                ..ApportionConfig::default()
            },
        };
        options.validate()?;
        Ok(options)
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { envelope_path } => cmd_validate(&envelope_path),
        Commands::Constructions {
            envelope_path,
            layers,
            options,
        } => cmd_constructions(&envelope_path, layers, &options.to_options()?),
        Commands::Foundations {
            envelope_path,
            options,
        } => cmd_foundations(&envelope_path, &options.to_options()?),
        Commands::Run {
            envelope_path,
            json,
            options,
        } => cmd_run(&envelope_path, json.as_deref(), &options.to_options()?),
    }
}

fn cmd_validate(envelope_path: &Path) -> AppResult<()> {
    println!("Validating envelope: {}", envelope_path.display());
    let envelope = load_envelope(envelope_path)?;
    validate_envelope(&envelope)?;
    println!(
        "✓ Envelope is valid ({} surfaces, {} foundation walls, {} slabs)",
        envelope.surfaces.len(),
        envelope.foundation_walls.len(),
        envelope.slabs.len()
    );
    Ok(())
}

fn cmd_constructions(
    envelope_path: &Path,
    show_layers: bool,
    options: &EnvelopeOptions,
) -> AppResult<()> {
    let envelope = load_envelope(envelope_path)?;
    validate_envelope(&envelope)?;

    let started = Instant::now();
    let constructions = synthesize_all(&envelope.surfaces, options)?;
    print_constructions(&constructions, show_layers);
    println!(
        "✓ {} constructions in {:.1} ms",
        constructions.len(),
        started.elapsed().as_secs_f64() * 1e3
    );
    Ok(())
}

fn cmd_foundations(envelope_path: &Path, options: &EnvelopeOptions) -> AppResult<()> {
    let envelope = load_envelope(envelope_path)?;
    let walls: Vec<_> = envelope.foundation_walls.iter().map(|w| w.to_wall()).collect();
    let slabs: Vec<_> = envelope.slabs.iter().map(|s| s.to_slab()).collect();

    let reports = apportion_foundations(&walls, &slabs, options)?;
    print_foundations(&reports);
    Ok(())
}

fn cmd_run(envelope_path: &Path, json: Option<&Path>, options: &EnvelopeOptions) -> AppResult<()> {
    println!("Processing envelope: {}", envelope_path.display());
    let envelope = load_envelope(envelope_path)?;

    let started = Instant::now();
    let report = materialize_envelope(&envelope, options)?;
    let elapsed = started.elapsed();

    print_constructions(&report.constructions, false);
    print_foundations(&report.foundations);

    let degraded = report.degraded_surfaces();
    if degraded.is_empty() {
        println!("✓ All constructions match their requested R-values");
    } else {
        println!("! {} degraded: {}", degraded.len(), degraded.join(", "));
    }

    if let Some(path) = json {
        write_report(path, &report)?;
        println!("✓ Report written to {}", path.display());
    }
    println!("  Elapsed: {:.1} ms", elapsed.as_secs_f64() * 1e3);
    Ok(())
}

fn print_constructions(constructions: &[SurfaceConstruction], show_layers: bool) {
    println!(
        "{:<20} {:<12} {:>4} {:>9} {:>9} {:>9}  status",
        "surface", "category", "set", "request", "built", "unknown"
    );
    for c in constructions {
        println!(
            "{:<20} {:<12} {:>4} {:>9.2} {:>9.2} {:>9.2}  {}",
            c.surface_id,
            c.category.to_string(),
            c.candidate_index,
            c.requested_r,
            c.achieved_r(),
            c.unknown_r,
            if c.matched { "matched" } else { "DEGRADED" }
        );
        if show_layers {
            for layer in &c.assembly.layers {
                let names: Vec<_> = layer.materials.iter().map(|m| m.name.as_str()).collect();
                println!(
                    "    {:<20} {:>6.3} in  [{}]",
                    layer.label,
                    to_inch(layer.thickness()),
                    names.join(" | ")
                );
            }
        }
    }
}

fn print_foundations(reports: &[FoundationReport]) {
    for report in reports {
        println!("Foundation space: {}", report.space);
        for row in report.summaries() {
            println!(
                "  {:<24} {:<16} P={:>8.2} ft  A={:>9.2} ft²  z={:>6.2} ft",
                row.wall.as_deref().unwrap_or("(no wall)"),
                row.slab,
                row.exposed_perimeter_ft,
                row.area_sqft,
                row.z_origin_ft
            );
        }
    }
}
