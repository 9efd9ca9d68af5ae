use super::session::GameSession;
use super::types::{
    EnemySnapshot, FlowState, FrameUpdate, GameEvent, HeroSnapshot, ProjectileSnapshot,
    SessionSummary,
};
use crate::domain::input::{ButtonState, InputIntent, InputTracker};
use crate::domain::systems::TerminalEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

/// Folds every button sample queued between two ticks into one intent.
///
/// A press that starts and ends between ticks still counts once, and a
/// release followed by a new press counts even if attack was held at the
/// previous tick.
#[derive(Debug, Default)]
struct TickInput {
    tracker: InputTracker,
    buttons: ButtonState,
    pressed: bool,
    released: bool,
    repressed: bool,
}

impl TickInput {
    fn record(&mut self, state: ButtonState) {
        if state.attack {
            self.pressed = true;
            self.repressed |= self.released;
        } else {
            self.released = true;
        }
        self.buttons = state;
    }

    fn intent(&mut self) -> InputIntent {
        if self.repressed && self.tracker.buttons().attack {
            self.tracker.push(ButtonState {
                attack: false,
                ..self.buttons
            });
        }
        self.tracker.push(ButtonState {
            attack: self.buttons.attack || self.pressed,
            ..self.buttons
        });

        self.pressed = false;
        self.released = !self.buttons.attack;
        self.repressed = false;
        self.tracker.intent()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WorldSettings {
    pub tick_interval: Duration,
    /// Stop after this many ticks; `None` runs until shutdown or the last level.
    pub max_frames: Option<u64>,
}

/// Drives the session at a fixed tick rate until shutdown, the frame cap, or
/// the end of the last level.
pub async fn world_task(
    mut session: GameSession,
    mut input_rx: mpsc::Receiver<GameEvent>,
    frame_tx: broadcast::Sender<FrameUpdate>,
    flow_tx: watch::Sender<FlowState>,
    settings: WorldSettings,
    shutdown: Arc<Notify>,
) -> SessionSummary {
    let mut tick: u64 = 0;
    let mut input = TickInput::default();

    let _ = flow_tx.send(session.flow());
    let mut interval = tokio::time::interval(settings.tick_interval);
    info!(
        tick_ms = settings.tick_interval.as_millis() as u64,
        max_frames = ?settings.max_frames,
        "world loop started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(ev) = input_rx.try_recv() {
            match ev {
                GameEvent::Buttons(state) => input.record(state),
                GameEvent::SetGodMode(enabled) => session.set_god_mode(enabled),
                GameEvent::Restart => {
                    info!("restart requested");
                    session.restart();
                }
            }
        }

        let event = session.step(&input.intent(), settings.tick_interval);
        if let Some(TerminalEvent::HeroDied(cause)) = event {
            debug!(tick, ?cause, "death handled");
        }

        tick += 1;
        let _ = flow_tx.send_if_modified(|flow| {
            let changed = *flow != session.flow();
            *flow = session.flow();
            changed
        });
        let _ = frame_tx.send(snapshot(&session, tick, event));

        if session.flow() == FlowState::Finished {
            info!(tick, "last level finished");
            break;
        }
        if settings.max_frames.is_some_and(|max| tick >= max) {
            info!(tick, "frame limit reached");
            break;
        }
    }

    let summary = session.summary();
    info!(
        frames = summary.frames,
        deaths = summary.deaths,
        levels_completed = summary.levels_completed,
        "world loop stopped"
    );
    summary
}

fn snapshot(session: &GameSession, tick: u64, event: Option<TerminalEvent>) -> FrameUpdate {
    let sim = session.simulation();
    let level = sim.level();

    let enemies = level
        .enemies()
        .iter()
        .enumerate()
        .map(|(id, enemy)| EnemySnapshot::new(id, enemy))
        .collect();
    let projectiles = level
        .enemies()
        .iter()
        .enumerate()
        .flat_map(|(id, enemy)| {
            enemy
                .projectiles()
                .iter()
                .map(move |p| ProjectileSnapshot::new(id, p))
        })
        .collect();

    FrameUpdate {
        tick,
        level: level.name().to_string(),
        level_index: sim.levels().current_index(),
        flow: session.flow(),
        god_mode: session.god_mode(),
        hero: HeroSnapshot::from(sim.hero()),
        enemies,
        projectiles,
        event,
    }
}
