// Framework bootstrap for the headless simulation runtime.

use crate::domain::resources::{SpriteSheets, TextureTable};
use crate::domain::tuning::Tuning;
use crate::frameworks::config;
use crate::interface_adapters::frames::frame_update_serializer;
use crate::interface_adapters::input_script::ScriptedInput;
use crate::level::{LevelData, LevelManager, builtin_levels};
use crate::use_cases::{
    FlowState, FrameUpdate, GameEvent, GameSession, SessionSummary, Simulation, WorldSettings,
    world_task,
};

use std::path::PathBuf;
use std::{io::Result, sync::Arc, time::Duration};
use tokio::sync::{Notify, broadcast, mpsc, watch};

/// Loads `.env`, installs the subscriber and routes panics through tracing.
/// Call once per process.
fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if config::json_logs() {
        subscriber.json().with_current_span(true).init();
    } else {
        subscriber.compact().init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "simulation thread panicked");
    }));
}

/// Everything the runner reads from the environment, resolved once.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub levels_dir: Option<PathBuf>,
    pub input_script: Option<PathBuf>,
    pub tick_interval: Duration,
    pub max_frames: Option<u64>,
    pub god_mode: bool,
    /// Send a restart after every game over instead of idling on it.
    pub auto_restart: bool,
}

impl RunSettings {
    pub fn from_env() -> Self {
        Self {
            levels_dir: config::levels_dir(),
            input_script: config::input_script(),
            tick_interval: config::tick_interval(),
            max_frames: Some(config::max_frames()),
            god_mode: config::god_mode(),
            auto_restart: true,
        }
    }
}

pub async fn run_with_config() -> Result<SessionSummary> {
    init_runtime();
    run(RunSettings::from_env()).await
}

pub async fn run(settings: RunSettings) -> Result<SessionSummary> {
    let mut textures = TextureTable::new();
    let sheets = SpriteSheets::register(&mut textures);
    let tuning = Tuning::default();

    let levels = load_levels(&settings)?;
    let manager = LevelManager::new(levels, sheets, tuning)
        .map_err(|e| std::io::Error::other(format!("failed to initialize levels: {e}")))?;
    let mut script = match &settings.input_script {
        Some(path) => ScriptedInput::load(path)
            .inspect_err(|e| tracing::error!(error = %e, "failed to load input script"))
            .map_err(std::io::Error::other)?,
        None => ScriptedInput::idle(),
    };
    tracing::debug!(
        textures = textures.len(),
        levels = manager.len(),
        scripted_frames = script.len_frames(),
        god_mode = settings.god_mode,
        "runtime configured"
    );

    let session = GameSession::new(Simulation::new(manager, &sheets, tuning), settings.god_mode);

    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INPUT_CHANNEL_CAPACITY);
    let (frame_tx, _) = broadcast::channel::<FrameUpdate>(config::FRAME_BROADCAST_CAPACITY);
    let (frame_json_tx, _) = broadcast::channel::<Arc<str>>(config::FRAME_BROADCAST_CAPACITY);
    let (frame_latest_tx, frame_latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
    let (flow_tx, mut flow_rx) = watch::channel(FlowState::Playing);
    let shutdown = Arc::new(Notify::new());

    let serializer = tokio::spawn(frame_update_serializer(
        frame_tx.subscribe(),
        frame_json_tx,
        frame_latest_tx,
    ));
    let world = tokio::spawn(world_task(
        session,
        input_rx,
        frame_tx,
        flow_tx,
        WorldSettings {
            tick_interval: settings.tick_interval,
            max_frames: settings.max_frames,
        },
        shutdown.clone(),
    ));

    let interrupt = shutdown.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received; stopping world loop");
            interrupt.notify_one();
        }
    });

    // Feeds one scripted button sample per tick.
    let tick_interval = settings.tick_interval;
    let auto_restart = settings.auto_restart;
    let feeder = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_interval);
        loop {
            interval.tick().await;
            if input_tx
                .send(GameEvent::Buttons(script.next_buttons()))
                .await
                .is_err()
            {
                break;
            }

            let game_over = flow_rx.has_changed().unwrap_or(false)
                && *flow_rx.borrow_and_update() == FlowState::GameOver;
            if game_over && auto_restart {
                tracing::info!("game over; restarting level");
                if input_tx.send(GameEvent::Restart).await.is_err() {
                    break;
                }
            }
        }
    });

    let summary = world
        .await
        .map_err(|e| std::io::Error::other(format!("world task failed: {e}")))?;
    feeder.abort();
    ctrl_c.abort();
    // The serializer exits once the world task drops its frame sender.
    let _ = serializer.await;

    tracing::info!(
        frames = summary.frames,
        deaths = summary.deaths,
        levels_completed = summary.levels_completed,
        flow = ?summary.flow,
        last_frame_bytes = frame_latest_rx.borrow().len(),
        "simulation finished"
    );
    Ok(summary)
}

fn load_levels(settings: &RunSettings) -> Result<Vec<LevelData>> {
    match &settings.levels_dir {
        Some(dir) => {
            let levels = LevelData::load_dir(dir)
                .inspect_err(|e| {
                    tracing::error!(dir = %dir.display(), error = %e, "failed to load levels");
                })
                .map_err(std::io::Error::other)?;
            tracing::info!(
                dir = %dir.display(),
                count = levels.len(),
                "levels loaded from disk"
            );
            Ok(levels)
        }
        None => Ok(builtin_levels()),
    }
}
