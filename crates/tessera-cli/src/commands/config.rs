//! Default configuration command.

use clap::Args;
use std::path::PathBuf;
use tessera_config::RenderConfig;

/// Print or save the default configuration.
#[derive(Args)]
pub struct ConfigArgs {
    /// Write the TOML to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Run the config command.
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let config = RenderConfig::default();

    match args.output {
        Some(path) => {
            config.save(&path)?;
            tracing::info!(path = %path.display(), "saved default configuration");
            println!("Saved default configuration to {}", path.display());
        }
        None => print!("{}", config.to_toml()?),
    }

    Ok(())
}
