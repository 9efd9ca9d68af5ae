// Process-scoped texture handles. Loading and caching pixels is the host's job;
// the simulation only ever passes ids around.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Registry of asset names to stable texture ids.
#[derive(Debug, Default)]
pub struct TextureTable {
    names: Vec<String>,
    ids: HashMap<String, TextureId>,
}

impl TextureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering it on first use.
    pub fn register(&mut self, name: &str) -> TextureId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = TextureId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn name(&self, id: TextureId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Every sheet the actors and props are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheets {
    pub hero_idle: TextureId,
    pub hero_run: TextureId,
    pub hero_jump: TextureId,
    pub hero_fall: TextureId,
    pub hero_attack: TextureId,
    pub floor: TextureId,
    pub platform: TextureId,
    pub spikes: TextureId,
    pub statue: TextureId,
    pub skeleton_walk: TextureId,
    pub skeleton_death: TextureId,
    pub ballista_shoot: TextureId,
    pub ballista_destroyed: TextureId,
    pub arrow: TextureId,
}

impl SpriteSheets {
    pub fn register(table: &mut TextureTable) -> Self {
        Self {
            hero_idle: table.register("_Idle"),
            hero_run: table.register("_Run"),
            hero_jump: table.register("_Jump"),
            hero_fall: table.register("_Fall"),
            hero_attack: table.register("_Attack"),
            floor: table.register("woodfl"),
            platform: table.register("platform"),
            spikes: table.register("16-bit-spike-Sheet"),
            statue: table.register("15"),
            skeleton_walk: table.register("Skeleton Walk"),
            skeleton_death: table.register("Skeleton Dead"),
            ballista_shoot: table.register("Balista"),
            ballista_destroyed: table.register("DestroyedBalista"),
            arrow: table.register("Arrow"),
        }
    }
}
