// One frame of gameplay. The step order below is load-bearing: later stages
// read what earlier stages wrote in the same frame.

use crate::domain::hero::Hero;
use crate::domain::input::InputIntent;
use crate::domain::render::RenderSink;
use crate::domain::resources::SpriteSheets;
use crate::domain::systems::{TerminalEvent, collision, combat, terminal};
use crate::domain::tuning::Tuning;
use crate::level::{Level, LevelManager};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Simulation {
    hero: Hero,
    levels: LevelManager,
    tuning: Tuning,
    frame: u64,
}

impl Simulation {
    /// Places the hero at the current level's spawn point.
    pub fn new(levels: LevelManager, sheets: &SpriteSheets, tuning: Tuning) -> Self {
        let mut sim = Self {
            hero: Hero::new(sheets, &tuning.hero),
            levels,
            tuning,
            frame: 0,
        };
        sim.spawn_hero();
        sim
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub fn level(&self) -> &Level {
        self.levels.current()
    }

    pub fn levels(&self) -> &LevelManager {
        &self.levels
    }

    pub fn levels_mut(&mut self) -> &mut LevelManager {
        &mut self.levels
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Puts the hero on the spawn point, at rest and grounded.
    pub fn spawn_hero(&mut self) {
        let spawn = self.levels.spawn_point();
        self.hero.respawn(spawn);
        self.hero.set_grounded(true);
    }

    /// Advances the world by one frame and reports a terminal event, if any.
    ///
    /// A death ends the frame before the level-end check runs.
    pub fn step(&mut self, input: &InputIntent, dt: Duration) -> Option<TerminalEvent> {
        self.frame += 1;
        let has_next_level = self.levels.has_next_level();
        let level = self.levels.current_mut();

        // Intent, grounded clear and animation; no movement yet.
        self.hero.update(input, dt);
        level.update_enemies(dt);
        self.hero.apply_physics();

        collision::resolve_floors(&mut self.hero, level.floor_bounds());
        collision::resolve_platforms(&mut self.hero, level.platform_bounds());
        level.collide_enemies();

        let hits = combat::apply_attack_hits(
            &self.hero,
            level.enemies_mut(),
            self.tuning.world.attack_damage,
        );
        if hits > 0 {
            debug!(frame = self.frame, hits, "attack landed");
        }
        combat::enemy_contact(&self.hero, level.enemies_mut());

        let (spikes, enemies) = level.hazards_mut();
        if let Some(cause) =
            terminal::evaluate_death(&self.hero, spikes, enemies, self.tuning.world.fall_death_y)
        {
            info!(
                frame = self.frame,
                ?cause,
                x = self.hero.position.x,
                y = self.hero.position.y,
                "hero died"
            );
            return Some(TerminalEvent::HeroDied(cause));
        }

        if !level.is_complete()
            && collision::touched_level_end(&self.hero, level.level_end_bounds()).is_some()
        {
            level.mark_complete();
            return Some(TerminalEvent::LevelCompleted { has_next_level });
        }

        None
    }

    /// Level first, hero on top. `debug` adds hitbox overlays.
    pub fn render(&self, sink: &mut dyn RenderSink, debug: bool) {
        self.levels.current().draw(sink);
        self.hero.draw(sink);
        if debug {
            self.hero.draw_debug(sink);
        }
    }
}
