// Framework bootstrap for the headless runner.

use crate::domain::{LevelError, LevelLayout};
use crate::frameworks::config;
use crate::interface_adapters::input_script::{InputScript, ScriptError};
use crate::interface_adapters::protocol::SessionReportDto;
use crate::use_cases::{SessionSettings, World, run_session};

use std::fmt;
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug)]
pub enum RunError {
    Level(LevelError),
    Script(ScriptError),
    Report(serde_json::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Level(e) => write!(f, "{e}"),
            RunError::Script(e) => write!(f, "{e}"),
            RunError::Report(e) => write!(f, "failed to serialize session report: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Level(e) => Some(e),
            RunError::Script(e) => Some(e),
            RunError::Report(e) => Some(e),
        }
    }
}

impl From<LevelError> for RunError {
    fn from(e: LevelError) -> Self {
        RunError::Level(e)
    }
}

impl From<ScriptError> for RunError {
    fn from(e: ScriptError) -> Self {
        RunError::Script(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::Report(e)
    }
}

/// Everything a headless run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub layout: LevelLayout,
    pub script: InputScript,
    pub settings: SessionSettings,
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs one session and returns its report. Ctrl-C ends the session early.
pub async fn run(config: RunConfig) -> Result<SessionReportDto, RunError> {
    let mut world = World::try_new(config.layout)?;
    let mut script = config.script;

    tracing::info!(
        platforms = world.platforms().len(),
        enemies = world.enemies().len(),
        script_ticks = script.total_ticks(),
        tick_interval_ms = config.settings.tick_interval.as_secs_f64() * 1000.0,
        realtime = config.settings.realtime,
        "session starting"
    );

    let shutdown = Arc::new(Notify::new());
    let signal = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received; stopping session");
                shutdown.notify_one();
            }
        })
    };

    let summary = run_session(&mut world, &mut script, config.settings, shutdown, None).await;
    signal.abort();

    Ok(SessionReportDto::new(&summary, &world.snapshot()))
}

/// Loads configuration from the environment, runs, and prints the report as JSON.
pub async fn run_with_config() -> Result<SessionReportDto, RunError> {
    init_runtime();

    let layout = match config::level_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading level");
            LevelLayout::load(&path).inspect_err(|e| {
                tracing::error!(path = %path.display(), error = %e, "failed to load level");
            })?
        }
        None => LevelLayout::default(),
    };

    let script = match config::input_script_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading input script");
            InputScript::load(&path)?
        }
        None => InputScript::demo(),
    };

    let settings = SessionSettings {
        tick_interval: config::tick_interval(),
        max_ticks: config::max_ticks(),
        realtime: config::realtime(),
    };

    let report = run(RunConfig {
        layout,
        script,
        settings,
    })
    .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report)
}
