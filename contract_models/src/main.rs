use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use contract_models::config::{self, Config, OutputFormat};
use contract_models::utils::logging::init_logging;
use contract_models::{configured_exports, Catalog, ModelRegistry};

/// Inspect the contract_models model registry
#[derive(Debug, Parser)]
#[command(name = "contract_models", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered models
    List,
    /// Show the fields of one model, by type or collection name
    Describe { model: String },
    /// Render the full model catalog
    Catalog {
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that every exported model is registered
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    init_logging(&config.logging).context("initializing logging")?;

    let registry =
        ModelRegistry::builtin(&config.models).context("registering built-in models")?;

    match cli.command {
        Command::List => {
            for info in registry.get_models().values() {
                println!(
                    "{:<26} {:<18} {}",
                    info.name,
                    info.kind,
                    info.collection_name.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Describe { model } => {
            let info = registry.resolve(&model)?;
            println!("{} ({})", info.name, info.kind);

            if let Some(collection) = &info.collection_name {
                println!("collection: {}", collection);
            }
            for variant in &info.variants {
                println!("  - {}", variant);
            }
            for field in &info.fields {
                let mut line = format!("  {:<20} {}", field.name, field.rust_type);
                if field.primary_key {
                    line.push_str(" [primary key]");
                }
                if let Some(reference) = &field.reference {
                    line.push_str(&format!(" -> {}", reference));
                }
                if let Some(source) = &field.flattened_from {
                    line.push_str(&format!(" (from {})", source));
                }
                println!("{}", line);
            }
        }
        Command::Catalog { format, output } => {
            let catalog = Catalog::from_registry(&registry, &config)?;
            let rendered = catalog.render(
                format.unwrap_or(config.output.format),
                config.output.pretty,
            )?;

            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("writing catalog to {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        models = catalog.models.len(),
                        "Wrote catalog"
                    );
                }
                None => println!("{}", rendered),
            }
        }
        Command::Verify => {
            registry.verify_exports(&configured_exports(&config))?;
            println!("{} models registered", registry.len());
        }
    }

    Ok(())
}
