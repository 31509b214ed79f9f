use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use url::Url;
use fnd_core::Result;
use fnd_dataset::DatasetProvisioner;
use fnd_inference::{load_detector, Config};
use fnd_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Download the labeled news dataset, synthesizing the deterministic
    /// fallback when the remote is unreachable
    Dataset {
        #[arg(long, default_value = fnd_dataset::DATASET_URL)]
        url: Url,
        #[arg(long, default_value = fnd_dataset::DATASET_FILE)]
        output: PathBuf,
    },
    /// Serve the detection web UI and API
    Serve {
        #[arg(long, default_value = fnd_inference::DEFAULT_MODEL_FILE)]
        model: PathBuf,
        #[arg(long, default_value = fnd_inference::DEFAULT_VECTORIZER_FILE)]
        vectorizer: PathBuf,
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        /// Cosmetic pause before each verdict, in milliseconds
        #[arg(long)]
        analysis_delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dataset { url, output } => {
            let provisioner = DatasetProvisioner::new(url, output);
            let report = provisioner.provision().await?;
            info!("✅ Dataset ready to use: {} articles at {}", report.rows, provisioner.path().display());
        }
        Commands::Serve {
            model,
            vectorizer,
            addr,
            analysis_delay_ms,
        } => {
            let config = Config {
                model_path: model,
                vectorizer_path: vectorizer,
                analysis_delay: analysis_delay_ms.map(Duration::from_millis),
            };
            // Artifact problems are fatal: better no service than a degraded one.
            let detector = load_detector(&config)?;
            info!("🧠 Detector initialized successfully (using {})", detector.name());

            let app = fnd_web::create_app(AppState { detector }).await;
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!("🌐 Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
