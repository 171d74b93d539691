//! gripgen CLI - suction gripper frame generator
//!
//! Computes the suction grid for a box stack and assembles the frame.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gripgen::{
    generate_pattern, BoxSpec, GenerationResult, Generator, GripgenConfig, Placement,
    PlacementRole, Scene, GRIPPER_GROUP,
};

#[derive(Parser)]
#[command(name = "gripgen")]
#[command(about = "Suction gripper frame generator", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the suction grid and assemble the gripper frame
    Generate {
        #[command(flatten)]
        dims: BoxArgs,
        /// Total weight of the stack
        #[arg(long)]
        weight: f64,
        /// Directory with joint, connection, suction and plate models
        #[arg(long, conflicts_with = "builtin")]
        assets: Option<PathBuf>,
        /// Use builtin placeholder geometry
        #[arg(long)]
        builtin: bool,
        /// Print the result and every placement as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a box stack can be gripped at all
    Check {
        #[command(flatten)]
        dims: BoxArgs,
    },
    /// Split a suction point count into a near-square pattern
    Pattern {
        /// Number of suction points
        count: u32,
    },
}

#[derive(Args)]
struct BoxArgs {
    /// Box width (mm)
    #[arg(long)]
    width: f64,
    /// Box height (mm)
    #[arg(long)]
    height: f64,
    /// Number of stacked boxes
    #[arg(long)]
    count: u32,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    result: GenerationResult,
    placements: &'a [Placement],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            dims,
            weight,
            assets,
            builtin,
            json,
        } => {
            apply_asset_flags(&mut config, assets, builtin);
            let spec = BoxSpec::new(dims.width, dims.height, dims.count, weight);
            generate(&config, &spec, json)?;
        }
        Commands::Check { dims } => {
            check(&config, &dims);
        }
        Commands::Pattern { count } => {
            let (a, b) = generate_pattern(count);
            println!("{a} x {b}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GripgenConfig> {
    match path {
        Some(path) => GripgenConfig::load(path)
            .with_context(|| format!("failed to read config {}", path.display())),
        None => Ok(GripgenConfig::default()),
    }
}

/// Command-line asset flags take precedence over the `[assets]` table.
fn apply_asset_flags(config: &mut GripgenConfig, assets: Option<PathBuf>, builtin: bool) {
    if let Some(dir) = assets {
        config.assets.dir = Some(dir);
        config.assets.builtin = false;
    }
    if builtin {
        config.assets.builtin = true;
    }
}

fn generate(config: &GripgenConfig, spec: &BoxSpec, json: bool) -> Result<()> {
    let loader = config.loader()?;
    let generator = Generator::from_loader(loader.as_ref())
        .context("failed to load part templates")?
        .with_limits(config.layout);

    if json {
        let (grid, placements) = generator.plan(spec)?;
        info!(placements = placements.len(), "planned gripper frame");
        let report = JsonReport {
            result: GenerationResult::from(grid),
            placements: &placements,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut scene = Scene::new("gripgen");
    let result = generator.run(spec, &mut scene)?;
    info!(instances = scene.instance_count(), "scene ready");
    println!("{result}");

    let Some(group) = scene.group(GRIPPER_GROUP) else {
        anyhow::bail!("generator produced no render group");
    };
    println!("\nParts ({} total):", group.len());
    for (role, label) in [
        (PlacementRole::Joint, "joints"),
        (PlacementRole::SuctionCup, "suction cups"),
        (PlacementRole::HorizontalConnector, "row connectors"),
        (PlacementRole::VerticalConnector, "column connectors"),
        (PlacementRole::Plate, "plates"),
        (PlacementRole::Stick, "plate sticks"),
    ] {
        println!("  {label}: {}", group.count(role));
    }
    if let Some((min, max)) = group.bounds() {
        println!(
            "\nBounds: [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
            min[0], min[1], min[2], max[0], max[1], max[2]
        );
    }
    Ok(())
}

fn check(config: &GripgenConfig, dims: &BoxArgs) {
    let feasible = config
        .layout
        .is_feasible(dims.count, dims.width, dims.height);
    if feasible {
        println!(
            "feasible: {} box(es) of {} x {} mm",
            dims.count, dims.width, dims.height
        );
    } else {
        println!(
            "not feasible: {} box(es) of {} x {} mm",
            dims.count, dims.width, dims.height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use gripgen::{AssemblyError, PartKind};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate() {
        let cli = Cli::try_parse_from([
            "gripgen", "generate", "--width", "300", "--height", "100", "--count", "4",
            "--weight", "3", "--builtin",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                dims,
                weight,
                builtin,
                json,
                ..
            } => {
                assert_eq!(dims.width, 300.0);
                assert_eq!(dims.count, 4);
                assert_eq!(weight, 3.0);
                assert!(builtin);
                assert!(!json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn assets_conflict_with_builtin() {
        let parsed = Cli::try_parse_from([
            "gripgen", "generate", "--width", "300", "--height", "100", "--count", "4",
            "--weight", "3", "--builtin", "--assets", "resources",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn assets_flag_overrides_builtin_config() {
        let mut config = GripgenConfig::from_toml_str("[assets]\nbuiltin = true\n").unwrap();
        apply_asset_flags(&mut config, Some(PathBuf::from("/nonexistent/assets")), false);
        assert!(!config.assets.builtin);

        let err = config.loader().unwrap().load(PartKind::Joint).unwrap_err();
        assert!(matches!(err, AssemblyError::Load { .. }));
    }

    #[test]
    fn builtin_flag_overrides_asset_dir_config() {
        let mut config =
            GripgenConfig::from_toml_str("[assets]\ndir = \"/nonexistent/assets\"\n").unwrap();
        apply_asset_flags(&mut config, None, true);
        assert!(config.loader().unwrap().load(PartKind::Joint).is_ok());
    }

    #[test]
    fn no_flags_keep_config() {
        let mut config = GripgenConfig::from_toml_str("[assets]\nbuiltin = true\n").unwrap();
        apply_asset_flags(&mut config, None, false);
        assert!(config.assets.builtin);
        assert!(config.assets.dir.is_none());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/gripgen.toml"))).is_err());
        assert!(load_config(None).is_ok());
    }
}
