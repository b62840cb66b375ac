use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gridfill::application::{
    AcquireCoversUseCase, AcquireEvent, DownloadCoverUseCase, FindMissingCoversUseCase,
    ResolveCoverUseCase,
};
use gridfill::domain::errors::LibraryError;
use gridfill::infrastructure::{
    AppConfig, CliArgs, CoverDirectory, HttpImageFetcher, STEAM_API_KEY_PAGE, SteamGridDbClient,
    SteamInstall, SteamWebClient, StorageManager,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn steam_api_key(config: &AppConfig) -> Result<gridfill::domain::entities::ApiKey> {
    match config.steam_api_key() {
        Ok(key) => Ok(key),
        Err(e @ LibraryError::MissingCredential { .. }) => {
            if config.open_key_page {
                info!(url = STEAM_API_KEY_PAGE, "Opening Steam API key page");
                if let Err(open_err) = opener::open(STEAM_API_KEY_PAGE) {
                    warn!(error = %open_err, "Failed to open browser");
                }
            } else {
                eprintln!("Register a Steam Web API key at {STEAM_API_KEY_PAGE}");
            }
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn spawn_progress_logger(
    mut rx: mpsc::UnboundedReceiver<AcquireEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                AcquireEvent::PhaseStarted { phase, total } => {
                    info!(%phase, total, "Phase started");
                }
                AcquireEvent::ItemCompleted {
                    phase,
                    item_id,
                    completed,
                    total,
                    outcome,
                } => {
                    debug!(%phase, item_id = %item_id, completed, total, ?outcome, "Item done");
                }
            }
        }
    })
}

async fn run(config: AppConfig) -> Result<()> {
    let steam_id = config.steam_id()?;
    let steam_key = steam_api_key(&config)?;

    let grid_dir = match &config.steam.grid_dir {
        Some(dir) => dir.clone(),
        None => {
            let install = SteamInstall::locate(config.steam.install_path.clone())?;
            info!(path = %install.root().display(), "Found Steam install");
            install.grid_dir(steam_id)
        }
    };
    let cover_dir = Arc::new(CoverDirectory::new(grid_dir));
    cover_dir.ensure_exists().await?;
    info!(path = %cover_dir.path().display(), "Using cover directory");

    let missing = {
        let owned = Arc::new(SteamWebClient::new(steam_key, steam_id)?);
        FindMissingCoversUseCase::new(owned, cover_dir.clone())
            .execute()
            .await?
    };

    if missing.is_empty() {
        println!("Every owned game already has a cover.");
        return Ok(());
    }

    if config.dry_run {
        println!("Missing covers ({}):", missing.len());
        for item_id in &missing {
            println!("  {item_id}");
        }
        return Ok(());
    }

    let sgdb_key = config.sgdb_api_key()?;
    let pipeline = &config.pipeline;
    let timeout = pipeline.request_timeout();

    let lookup = Arc::new(
        SteamGridDbClient::new(&sgdb_key, config.steamgriddb.styles.clone(), timeout)
            .wrap_err("failed to set up SteamGridDB client")?,
    );
    let fetcher =
        Arc::new(HttpImageFetcher::new(timeout).wrap_err("failed to set up image downloader")?);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let progress = spawn_progress_logger(event_rx);

    let report = {
        let acquire = AcquireCoversUseCase::new(
            ResolveCoverUseCase::new(lookup, pipeline.query_policy()),
            DownloadCoverUseCase::new(
                fetcher,
                cover_dir,
                pipeline.download_policy(),
                pipeline.acceptance,
            ),
        )
        .with_concurrency(pipeline.concurrency)
        .with_events(event_tx);

        acquire.execute(missing).await
    };

    progress.await?;
    println!("{report}");
    if report.failures() > 0 {
        warn!(
            failures = report.failures(),
            total = report.total(),
            "Some covers could not be fetched"
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = gridfill::VERSION, "Starting {}", gridfill::NAME);

    run(config).await
}
