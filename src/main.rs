//! Abandono - dropout risk from spoken student descriptions
//!
//! Transcribes an audio description, extracts the student fields and scores
//! them with a linear risk model.

use abandono::asr::{AudioFormat, DeepgramClient, Transcriber};
use abandono::config::{config_path, Config};
use abandono::model::LinearModel;
use abandono::{prepare_text, Predictor};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Model file, overrides `model_path` from config
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict from text (reads stdin when --text is absent)
    Predict {
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Transcribe an audio file and print the prepared text
    Transcribe {
        audio: PathBuf,

        /// Where to save the prepared text
        #[arg(short, long, default_value = "transcripcion.txt")]
        output: PathBuf,
    },
    /// Transcribe an audio file and predict from it
    Analyze { audio: PathBuf },
    /// Write the current configuration to the config file
    InitConfig,
}

/// Installed before the config is read so config warnings reach stderr.
/// Returns a handle for swapping in the configured level afterwards.
fn init_logging(verbose: bool) -> Result<reload::Handle<EnvFilter, Registry>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(handle)
}

/// `--verbose` and `RUST_LOG` win over `log_level` from config
fn apply_log_level(
    handle: &reload::Handle<EnvFilter, Registry>,
    verbose: bool,
    config: &Config,
) -> Result<()> {
    if verbose || std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(());
    }
    handle.reload(EnvFilter::new(config.log_level.to_lowercase()))?;
    Ok(())
}

fn load_predictor(args: &Args, config: &Config) -> Result<Predictor> {
    let path = args
        .model
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.model_path));
    let model = LinearModel::load(&path)
        .with_context(|| format!("Failed to load model {}", path.display()))?;
    Ok(Predictor::new(Arc::new(model)))
}

async fn read_audio(audio: &Path) -> Result<(Vec<u8>, AudioFormat)> {
    let format = AudioFormat::from_path(audio)?;
    let bytes = tokio::fs::read(audio)
        .await
        .with_context(|| format!("No existe el archivo {}", audio.display()))?;
    info!("🎙️ Read {} ({} bytes)", audio.display(), bytes.len());
    Ok((bytes, format))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_handle = init_logging(args.verbose)?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_log_level(&log_handle, args.verbose, &config)?;

    info!("🎓 Abandono v{} starting...", env!("CARGO_PKG_VERSION"));
    debug!("Config: {:?}", config);

    match &args.command {
        Command::Predict { text } => {
            let text = match text {
                Some(t) => t.clone(),
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let predictor = load_predictor(&args, &config)?;
            let result = predictor.predict(&text)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Transcribe { audio, output } => {
            let (bytes, format) = read_audio(audio).await?;
            let transcript = DeepgramClient::from_env(&config)
                .transcribe(bytes, format)
                .await?;
            let text = prepare_text(&transcript);

            println!("\nTexto procesado:\n");
            if text.is_empty() {
                println!("No se detectó voz");
            } else {
                println!("{}", text);
            }

            tokio::fs::write(output, &text).await?;
            println!("\nGuardado en {}", output.display());
        }
        Command::Analyze { audio } => {
            let predictor = load_predictor(&args, &config)?;
            let (bytes, format) = read_audio(audio).await?;
            let client = DeepgramClient::from_env(&config);
            let result = predictor.analyze(&client, bytes, format).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::InitConfig => {
            let path = args.config.clone().unwrap_or_else(config_path);
            config.save_to(&path)?;
            println!("Configuración guardada en {}", path.display());
        }
    }

    Ok(())
}
