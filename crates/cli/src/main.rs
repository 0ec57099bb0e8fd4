use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use artpal_api::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS, MuseumClient, fetch_random_artwork};
use artpal_tui::TuiOptions;
use artpal_util::{generate_palette, hsl_hex, hsl_to_hex};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Shuffle random museum artworks alongside generated colour palettes.
///
/// Without a subcommand the interactive terminal UI starts.
#[derive(Parser, Debug)]
#[command(name = "artpal", version, about)]
struct Args {
    /// Base URL of the museum collection API
    #[arg(long, global = true, env = "ARTPAL_CATALOG_BASE", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Records sampled per artwork request before giving up
    #[arg(long, global = true, env = "ARTPAL_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Per-request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "ARTPAL_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Seed for reproducible palettes and artwork sampling
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one random artwork with an image and print it as JSON
    Artwork,
    /// Print randomly generated palettes
    Palette {
        /// Number of palettes to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Convert an HSL string such as "hsl(200, 60%, 50%)" to hex
    Hex {
        /// Colour in `hsl(H, S%, L%)` form
        hsl: String,
    },
}

impl Args {
    fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_attempts: self.max_attempts,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let Some(command) = &args.command else {
        init_file_tracing();
        let config = args.catalog_config();
        let client = MuseumClient::new(&config).context("invalid catalog configuration")?;
        info!(base_url = %client.base_url, max_attempts = config.max_attempts, "starting TUI");
        return artpal_tui::run(TuiOptions {
            catalog: Arc::new(client),
            max_attempts: config.max_attempts,
            seed: args.seed,
        })
        .await;
    };

    init_tracing();
    match command {
        Command::Artwork => run_artwork(&args).await,
        Command::Palette { count } => run_palette(&args, *count),
        Command::Hex { hsl } => {
            println!("{}", hsl_to_hex(hsl)?);
            Ok(())
        }
    }
}

async fn run_artwork(args: &Args) -> Result<()> {
    let config = args.catalog_config();
    let client = MuseumClient::new(&config).context("invalid catalog configuration")?;
    let mut rng = args.rng();
    let fetched = fetch_random_artwork(&client, &mut rng, config.max_attempts)
        .await
        .context("failed to fetch an artwork")?;
    info!(object_id = fetched.artwork.object_id, attempts = fetched.attempts, "artwork fetched");
    println!("{}", serde_json::to_string_pretty(&fetched.artwork)?);
    Ok(())
}

fn run_palette(args: &Args, count: usize) -> Result<()> {
    let mut rng = args.rng();
    for index in 0..count {
        if index > 0 {
            println!();
        }
        let palette = generate_palette(&mut rng);
        for color in palette.iter() {
            println!("{color} {}", hsl_hex(*color));
        }
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr so stdout stays clean for command output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file while the TUI owns the terminal.
fn init_file_tracing() {
    let Some(file) = open_log_file() else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    debug!("file logging initialised");
}

fn log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("ARTPAL_LOG_PATH")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs_next::data_dir().map(|dir| dir.join("artpal").join("artpal.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
