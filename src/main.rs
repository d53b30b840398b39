use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use collage::Config;
use collage::demo::demo_scene;
use collage::draw::{SceneStats, outline};
use collage::scene::{self, CompressionMode, SceneOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "collage")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("COLLAGE_GIT_HASH"), ")"),
    about = "Build and inspect declarative 2D scene files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the demo scene to a file
    Demo {
        /// Destination scene file
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,

        /// Force gzip compression regardless of the configured mode
        #[arg(long, action = ArgAction::SetTrue)]
        compress: bool,
    },
    /// Print the element tree of a scene file
    Inspect {
        /// Scene file to read (plain or gzip-compressed JSON)
        file: PathBuf,

        /// Also print node counts and referenced images
        #[arg(long, action = ArgAction::SetTrue)]
        stats: bool,

        /// Deepest tree level to print (overrides the config)
        #[arg(long, value_name = "N")]
        depth: Option<usize>,

        /// Show each form's world-space origin
        #[arg(long, action = ArgAction::SetTrue)]
        transforms: bool,
    },
    /// Print the JSON schema of the scene file format
    Schema,
    /// Write a commented example config to ~/.config/collage/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { output, compress } => {
            let config = Config::load()?;
            let mut options = SceneOptions::from_config(&config.scene);
            if compress {
                options.compression = CompressionMode::On;
            }
            let element = demo_scene(&config.demo);
            let outcome = scene::save_scene(&output, &element, &options)
                .with_context(|| format!("Failed to write scene to {}", output.display()))?;
            println!(
                "Wrote {} ({} bytes{})",
                outcome.path.display(),
                outcome.bytes_written,
                if outcome.compressed { ", gzip" } else { "" }
            );
        }
        Command::Inspect {
            file,
            stats,
            depth,
            transforms,
        } => {
            let config = Config::load()?;
            let options = SceneOptions::from_config(&config.scene);
            let loaded = scene::load_scene(&file, &options)
                .with_context(|| format!("Failed to load scene from {}", file.display()))?;
            log::info!("Inspecting {}", file.display());

            println!(
                "Scene {} (version {}, saved {}{})",
                file.display(),
                loaded.version,
                loaded.last_modified,
                if loaded.compressed { ", gzip" } else { "" }
            );
            let max_depth = depth.unwrap_or(config.inspect.max_depth);
            let show_transforms = transforms || config.inspect.show_transforms;
            print!("{}", outline(&loaded.element, max_depth, show_transforms));

            if stats {
                let stats = SceneStats::collect(&loaded.element);
                println!();
                println!("Collages:        {}", stats.collages);
                println!("Images:          {}", stats.images);
                println!("Forms:           {}", stats.forms);
                println!("Traced paths:    {}", stats.traced_paths);
                println!("Filled shapes:   {}", stats.filled_shapes);
                println!("Outlined shapes: {}", stats.outlined_shapes);
                println!("Groups:          {}", stats.groups);
                println!("Max depth:       {}", stats.max_depth);
                for path in &stats.image_paths {
                    println!("Image file:      {path}");
                }
            }
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&scene::scene_schema())?);
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
        }
    }

    Ok(())
}
