// Fixed-rate loop that feeds input into the world one tick at a time.

use super::game::World;
use super::types::{StepEvent, WorldUpdate};
use crate::domain::InputSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Simulated time per tick; also the wall-clock pacing when `realtime` is set.
    pub tick_interval: Duration,
    /// Stop after this many ticks (`None` runs until input ends or quit).
    pub max_ticks: Option<u64>,
    /// Pace ticks against the wall clock instead of running flat out.
    pub realtime: bool,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    QuitRequested,
    InputExhausted,
    TickLimit,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub score: u32,
    pub stomps: u32,
    pub hurts: u32,
    pub falls: u32,
    pub end: SessionEnd,
}

/// Drives `world` until the input source runs dry, quit is pressed, the tick limit
/// is hit or `shutdown` fires. Each tick's snapshot is published on `updates`.
pub async fn run_session<I: InputSource>(
    world: &mut World,
    input: &mut I,
    settings: SessionSettings,
    shutdown: Arc<Notify>,
    updates: Option<watch::Sender<WorldUpdate>>,
) -> SessionSummary {
    let dt = settings.tick_interval.as_secs_f32();
    // `interval` panics on a zero period, and only realtime pacing needs one.
    let mut pacing = settings
        .realtime
        .then(|| tokio::time::interval(settings.tick_interval.max(Duration::from_nanos(1))));
    let (mut stomps, mut hurts, mut falls) = (0u32, 0u32, 0u32);
    let mut ticks: u64 = 0;

    let end = loop {
        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            break SessionEnd::TickLimit;
        }

        if let Some(interval) = pacing.as_mut() {
            tokio::select! {
                _ = shutdown.notified() => break SessionEnd::Shutdown,
                _ = interval.tick() => {}
            }
        } else {
            // Still give the runtime a chance to deliver a shutdown between ticks.
            tokio::select! {
                biased;
                _ = shutdown.notified() => break SessionEnd::Shutdown,
                _ = tokio::task::yield_now() => {}
            }
        }

        let Some(frame) = input.next_input() else {
            break SessionEnd::InputExhausted;
        };

        let outcome = world.step(dt, frame);
        if outcome.quit_requested {
            break SessionEnd::QuitRequested;
        }
        ticks += 1;

        for event in &outcome.events {
            match event {
                StepEvent::EnemyStomped { .. } => stomps += 1,
                StepEvent::PlayerHurt { .. } => hurts += 1,
                StepEvent::PlayerFellOffScreen => falls += 1,
            }
        }

        if let Some(tx) = &updates {
            // No receivers is fine; the renderer may not be attached.
            let _ = tx.send(world.snapshot());
        }
    };

    let summary = SessionSummary {
        ticks,
        score: world.score(),
        stomps,
        hurts,
        falls,
        end,
    };
    info!(
        ticks = summary.ticks,
        score = summary.score,
        stomps,
        hurts,
        falls,
        end = ?summary.end,
        "session finished"
    );
    summary
}
