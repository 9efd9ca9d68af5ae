// Flow controller: reacts to terminal events with respawns and level changes.

use super::simulation::Simulation;
use super::types::{FlowState, SessionSummary};
use crate::domain::input::InputIntent;
use crate::domain::systems::{DeathCause, TerminalEvent};
use glam::Vec2;
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct GameSession {
    sim: Simulation,
    flow: FlowState,
    god_mode: bool,
    deaths: u32,
    levels_completed: u32,
}

impl GameSession {
    pub fn new(sim: Simulation, god_mode: bool) -> Self {
        let mut session = Self {
            sim,
            flow: FlowState::Playing,
            god_mode: false,
            deaths: 0,
            levels_completed: 0,
        };
        session.set_god_mode(god_mode);
        session
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn flow(&self) -> FlowState {
        self.flow
    }

    pub fn god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn set_god_mode(&mut self, enabled: bool) {
        if self.god_mode != enabled {
            info!(enabled, "god mode changed");
        }
        self.god_mode = enabled;
        self.sim.hero_mut().set_god_mode(enabled);
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames: self.sim.frame(),
            deaths: self.deaths,
            levels_completed: self.levels_completed,
            flow: self.flow,
        }
    }

    /// Reloads the current level and puts the hero back on its spawn point.
    pub fn restart(&mut self) {
        self.sim.levels_mut().reload_current_level();
        self.sim.spawn_hero();
        self.set_flow(FlowState::Playing);
    }

    /// Back to the first level, as when starting a new game.
    pub fn start_over(&mut self) {
        self.sim.levels_mut().load_first_level();
        self.sim.spawn_hero();
        self.levels_completed = 0;
        self.set_flow(FlowState::Playing);
    }

    /// Steps the simulation while playing; paused in every other state.
    pub fn step(&mut self, input: &InputIntent, dt: Duration) -> Option<TerminalEvent> {
        if self.flow != FlowState::Playing {
            return None;
        }

        let event = self.sim.step(input, dt)?;
        match event {
            TerminalEvent::HeroDied(cause) => self.handle_death(cause),
            TerminalEvent::LevelCompleted { .. } => self.handle_level_complete(),
        }
        Some(event)
    }

    fn handle_death(&mut self, cause: DeathCause) {
        self.deaths += 1;
        let died_at = self.sim.hero().position;

        if self.god_mode {
            let lift = self.sim.tuning().world.god_mode_respawn_lift;
            let respawn = Vec2::new(died_at.x, died_at.y - lift);
            let hero = self.sim.hero_mut();
            hero.respawn(respawn);
            hero.set_grounded(false);
            info!(?cause, x = respawn.x, y = respawn.y, "god mode respawn");
            return;
        }

        self.sim.levels_mut().reload_current_level();
        self.sim.spawn_hero();
        self.set_flow(FlowState::GameOver);
    }

    fn handle_level_complete(&mut self) {
        self.levels_completed += 1;
        if self.sim.levels_mut().load_next_level() {
            self.sim.spawn_hero();
        } else {
            self.set_flow(FlowState::Finished);
        }
    }

    fn set_flow(&mut self, flow: FlowState) {
        if self.flow != flow {
            info!(from = ?self.flow, to = ?flow, "flow changed");
            self.flow = flow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::Tuning;
    use crate::level::{LevelBuilder, LevelData, LevelManager, test_support};

    const FRAME: Duration = Duration::from_millis(16);

    fn session(levels: Vec<LevelData>, god_mode: bool) -> GameSession {
        let sheets = test_support::sheets();
        let manager = LevelManager::new(levels, sheets, Tuning::default()).expect("levels load");
        GameSession::new(Simulation::new(manager, &sheets, Tuning::default()), god_mode)
    }

    /// Spawns over a gap: the hero falls straight to its death.
    fn pit() -> LevelData {
        let mut b = LevelBuilder::new("pit", Vec2::new(0.0, 500.0));
        b.floor(400, 640).level_end(2000, 512);
        b.build()
    }

    /// Spawns on top of the statue.
    fn instant_finish(name: &str) -> LevelData {
        let mut b = LevelBuilder::new(name, Vec2::new(0.0, 560.0));
        b.floor(0, 640).level_end(0, 512);
        b.build()
    }

    fn run_until_event(session: &mut GameSession) -> TerminalEvent {
        for _ in 0..600 {
            if let Some(event) = session.step(&InputIntent::default(), FRAME) {
                return event;
            }
        }
        panic!("no terminal event within 600 frames");
    }

    #[test]
    fn when_hero_dies_in_normal_mode_then_flow_is_game_over_until_restart() {
        let mut session = session(vec![pit()], false);

        let event = run_until_event(&mut session);

        assert_eq!(event, TerminalEvent::HeroDied(DeathCause::Fall));
        assert_eq!(session.flow(), FlowState::GameOver);
        assert_eq!(session.deaths(), 1);
        assert_eq!(session.simulation().hero().position, Vec2::new(0.0, 500.0));

        let frame = session.simulation().frame();
        assert_eq!(session.step(&InputIntent::default(), FRAME), None);
        assert_eq!(session.simulation().frame(), frame);

        session.restart();
        assert_eq!(session.flow(), FlowState::Playing);
    }

    #[test]
    fn when_hero_dies_in_god_mode_then_it_is_lifted_above_the_death_point() {
        let mut session = session(vec![pit()], true);

        run_until_event(&mut session);

        let hero = session.simulation().hero();
        assert_eq!(session.flow(), FlowState::Playing);
        assert!(hero.is_god_mode());
        assert!(!hero.is_grounded());
        assert!(hero.position.y > 0.0 && hero.position.y <= 12.0);
        assert_eq!(hero.velocity(), Vec2::ZERO);
    }

    #[test]
    fn when_levels_are_completed_then_session_advances_and_finally_finishes() {
        let mut session = session(vec![instant_finish("one"), instant_finish("two")], false);

        assert_eq!(
            run_until_event(&mut session),
            TerminalEvent::LevelCompleted {
                has_next_level: true
            }
        );
        assert_eq!(session.simulation().level().name(), "two");
        assert_eq!(session.flow(), FlowState::Playing);

        assert_eq!(
            run_until_event(&mut session),
            TerminalEvent::LevelCompleted {
                has_next_level: false
            }
        );
        assert_eq!(session.flow(), FlowState::Finished);
        assert_eq!(session.levels_completed(), 2);

        session.start_over();
        assert_eq!(session.simulation().level().name(), "one");
        assert_eq!(session.flow(), FlowState::Playing);
    }
}
