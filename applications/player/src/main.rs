/// Melodic Mango - terminal player for the hosted song catalog
use clap::{Parser, Subcommand};
use mango_catalog_client::CatalogClient;
use mango_player::{Backdrop, PlayerConfig, Session};
use mango_playback::format_time;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mango-player")]
#[command(about = "Play the Melodic Mango song catalog in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the playlist and start the interactive player
    Play {
        /// Configuration file path
        #[arg(short, long, env = "MANGO_CONFIG")]
        config: Option<PathBuf>,
        /// Initial volume (0-1), overrides the configuration
        #[arg(short, long)]
        volume: Option<f32>,
    },
    /// Print the playlist and exit
    List {
        /// Configuration file path
        #[arg(short, long, env = "MANGO_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout belongs to the player card
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mango_player=info,mango_playback=info,mango_catalog_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { config, volume } => {
            play(config, volume).await?;
        }
        Commands::List { config } => {
            list(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<PlayerConfig> {
    let config = PlayerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn play(config_path: Option<PathBuf>, volume: Option<f32>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(volume) = volume {
        config.playback.initial_volume = volume;
        config.validate()?;
    }

    tracing::info!(catalog = %config.catalog.url, table = %config.catalog.table, "Starting Melodic Mango");

    let client = CatalogClient::new(config.catalog_config())?;
    let mut session = Session::new(
        config.playback_config(),
        config.tick_interval(),
        Backdrop::new(config.display.backgrounds.clone()),
        std::io::stdout(),
    );
    session.load_playlist(&client).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let last = session.run(stdin).await?;
    tracing::debug!(index = ?last.index, "Session ended");

    Ok(())
}

async fn list(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let client = CatalogClient::new(config.catalog_config())?;

    let tracks = client.fetch_tracks().await?;
    if tracks.is_empty() {
        println!("No songs available");
        return Ok(());
    }

    println!("Songs:");
    for (index, track) in tracks.iter().enumerate() {
        println!(
            "  {:>3}. {} - {} ({})",
            index + 1,
            track.title,
            track.artist,
            format_time(track.duration_seconds)
        );
    }

    Ok(())
}
