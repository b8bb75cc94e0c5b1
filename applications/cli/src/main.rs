//! AI-Radio - headless radio and catalog driver
use airadio_cli::{commands, config::AppConfig};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "airadio")]
#[command(about = "AI-Radio playback engine driver", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./airadio.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Song catalog (JSON); overrides the configured one
    #[arg(long, global = true, env = "AIRADIO_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog songs
    Catalog {
        /// Only songs of this genre ("All" for everything)
        #[arg(short, long)]
        genre: Option<String>,
        /// Show the top N songs by plays instead
        #[arg(short, long)]
        trending: Option<usize>,
    },
    /// List the genres in the catalog
    Genres,
    /// Show one song and its share payload
    Show {
        /// Song id
        id: String,
    },
    /// Print one shuffled radio pass with ad slots marked
    Schedule {
        /// RNG seed for a reproducible pass
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Simulate a radio session
    Radio {
        /// Number of songs to play
        #[arg(short, long, default_value_t = 10)]
        tracks: usize,
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Build a playlist from song ids and play it through
    Playlist {
        /// Playlist name
        #[arg(short, long, default_value = "My Playlist")]
        name: String,
        /// Also add every song to Favorites
        #[arg(short, long)]
        favorite: bool,
        /// Song ids in play order
        #[arg(required = true)]
        songs: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airadio_cli=info,airadio_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
        config.validate()?;
    }

    let catalog = commands::load_catalog(&config)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Catalog { genre, trending } => {
            commands::list_catalog(&mut out, &catalog, genre.as_deref(), trending)?;
        }
        Commands::Genres => {
            commands::list_genres(&mut out, &catalog)?;
        }
        Commands::Show { id } => {
            commands::show_song(&mut out, &catalog, &id)?;
        }
        Commands::Schedule { seed } => {
            let mut radio = config.session.radio.clone();
            radio.seed = seed.or(radio.seed);
            commands::print_schedule(&mut out, catalog, &radio)?;
        }
        Commands::Radio { tracks, seed } => {
            let mut session = config.session.clone();
            session.radio.seed = seed.or(session.radio.seed);
            commands::run_radio(&mut out, catalog, session, tracks)?;
        }
        Commands::Playlist {
            name,
            favorite,
            songs,
        } => {
            commands::run_playlist(&mut out, catalog, config.session.clone(), &name, &songs, favorite)?;
        }
    }

    Ok(())
}
