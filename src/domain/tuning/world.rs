/// Rules that apply to the level as a whole.
#[derive(Debug, Clone, Copy)]
pub struct WorldTuning {
    /// The hero dies once its y position exceeds this value.
    pub fall_death_y: f32,

    /// Damage dealt to an enemy by one overlapping attack frame.
    pub attack_damage: i32,

    /// How far above the death point god mode drops the hero back in.
    pub god_mode_respawn_lift: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            fall_death_y: 1000.0,
            attack_damage: 1,
            god_mode_respawn_lift: 1000.0,
        }
    }
}
