//! Letter prediction server.
//!
//! Loads the ONNX letter model once and serves `POST /predict`.
//!
//! # Usage
//!
//! ```bash
//! asl-server --model-path models/asl_letters.onnx --bind 0.0.0.0:5000
//! asl-server --config server.json --output-name dense
//! ```
//!
//! Set `RUST_LOG=debug` to log every prediction.

use asl_letters::core::config::{ConfigValidator, ServerConfig};
use asl_letters::core::{OrtInfer, init_tracing};
use asl_letters::predictor::LetterClassifier;
use asl_letters::server::{AppState, serve};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Command-line arguments for the prediction server
#[derive(Parser)]
#[command(name = "asl-server")]
#[command(about = "Serves ASL letter predictions from hand landmarks")]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (default: 127.0.0.1:5000)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Path to the ONNX letter model
    #[arg(short, long)]
    model_path: Option<PathBuf>,

    /// Model input tensor to feed (default: first declared input)
    #[arg(long)]
    input_name: Option<String>,

    /// Model output tensor holding the letter scores (default: first declared output)
    #[arg(long)]
    output_name: Option<String>,

    /// Session pool size for concurrent inference
    #[arg(long)]
    session_pool_size: Option<usize>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(path) = self.model_path {
            config.model.model_path = path;
        }
        if self.input_name.is_some() {
            config.model.input_name = self.input_name;
        }
        if self.output_name.is_some() {
            config.model.output_name = self.output_name;
        }
        if let Some(size) = self.session_pool_size {
            config.model.session_pool_size = size;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = Args::parse();

    let mut config = match args.config.take() {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            ServerConfig::from_file(&path)?
        }
        None => ServerConfig::default(),
    };
    args.apply(&mut config);

    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        return Err(e.into());
    }
    info!(?config, "starting");

    let engine = OrtInfer::from_config(&config.model)?;
    let classifier = LetterClassifier::new(Arc::new(engine));

    serve(&config, AppState::new(classifier)).await?;
    Ok(())
}
