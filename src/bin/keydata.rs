use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "keydata")]
#[command(about = "Extract public key material and metadata from a Security World key", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Application the key belongs to (e.g. pkcs11, simple)
    pub appname: String,

    /// Key identifier within the application
    pub ident: String,

    /// Security World snapshot to connect to
    #[arg(long, env = "KEYDATA_WORLD")]
    pub world: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: FormatArg,

    /// Write the result to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let keydata = match keydata::extract_keydata(&cli.world, &cli.appname, &cli.ident) {
        Ok(keydata) => keydata,
        Err(e) => {
            error!("Failed to extract keydata: {}", e);
            std::process::exit(1);
        }
    };

    let rendered = match cli.format {
        FormatArg::Text => keydata.to_string(),
        FormatArg::Json => keydata.to_json().context("failed to serialize keydata")?,
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote keydata to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
