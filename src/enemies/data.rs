//! Enemy data loading from RON files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::components::EnemyKind;
use crate::core::SimulationError;

/// Directory holding one `<kind>.ron` per enemy kind.
pub const ENEMY_DATA_DIR: &str = "assets/data/enemies";

fn default_walk_throttle() -> u8 {
    3
}

/// Per-kind enemy stats.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_health: i32,
    pub half_size: (f32, f32),
    /// Animation calls per walk-cycle step
    #[serde(default = "default_walk_throttle")]
    pub walk_throttle: u8,
    /// Sprite folder under `assets/sprites`
    pub sprite_folder: String,
    /// File name prefix inside the sprite folder
    pub sprite_prefix: String,
}

impl EnemyDefinition {
    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.half_size.0, self.half_size.1)
    }

    fn guardian() -> Self {
        Self {
            name: "Guardian".to_string(),
            max_health: 50,
            half_size: (20.0, 32.0),
            walk_throttle: 3,
            sprite_folder: "guardian".to_string(),
            sprite_prefix: "guardian".to_string(),
        }
    }
}

/// Resource holding the stats table for every enemy kind.
#[derive(Resource, Debug, Clone)]
pub struct EnemyRegistry {
    pub definitions: HashMap<EnemyKind, EnemyDefinition>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        let mut definitions = HashMap::new();
        definitions.insert(EnemyKind::Guardian, EnemyDefinition::guardian());
        Self { definitions }
    }
}

impl EnemyRegistry {
    /// Get an enemy definition by kind.
    pub fn get(&self, kind: EnemyKind) -> Option<&EnemyDefinition> {
        self.definitions.get(&kind)
    }

    /// Resolve a kind name from level data to its kind and stats.
    pub fn resolve(&self, name: &str) -> Result<(EnemyKind, &EnemyDefinition), SimulationError> {
        let kind: EnemyKind = name.parse()?;
        self.get(kind)
            .map(|definition| (kind, definition))
            .ok_or_else(|| SimulationError::UnknownEnemyKind(name.to_string()))
    }
}

/// Load enemy definitions from `ENEMY_DATA_DIR`, replacing built-in stats.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let enemies_dir = Path::new(ENEMY_DATA_DIR);

    if !enemies_dir.exists() {
        warn!("Enemy definitions directory not found: {:?}", enemies_dir);
        return;
    }

    let Ok(entries) = fs::read_dir(enemies_dir) else {
        warn!("Failed to read enemy definitions directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let Ok(kind) = stem.parse::<EnemyKind>() else {
                warn!("Ignoring enemy definition for unknown kind: {:?}", path);
                continue;
            };

            match fs::read_to_string(&path) {
                Ok(contents) => match ron::from_str::<EnemyDefinition>(&contents) {
                    Ok(definition) => {
                        info!("Loaded enemy definition: {} ({})", definition.name, kind);
                        registry.definitions.insert(kind, definition);
                    }
                    Err(e) => {
                        error!("Failed to parse enemy definition {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    error!("Failed to read enemy definition {:?}: {}", path, e);
                }
            }
        }
    }

    info!("Enemy registry holds {} definitions", registry.definitions.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_guardian_has_fifty_health() {
        let registry = EnemyRegistry::default();
        let (kind, definition) = registry.resolve("guardian").unwrap();
        assert_eq!(kind, EnemyKind::Guardian);
        assert_eq!(definition.max_health, 50);
        assert_eq!(definition.walk_throttle, 3);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let registry = EnemyRegistry::default();
        assert_eq!(
            registry.resolve("dragon").unwrap_err(),
            SimulationError::UnknownEnemyKind("dragon".to_string())
        );
    }

    #[test]
    fn known_kind_without_stats_is_rejected() {
        let registry = EnemyRegistry {
            definitions: HashMap::new(),
        };
        assert!(matches!(
            registry.resolve("guardian"),
            Err(SimulationError::UnknownEnemyKind(_))
        ));
    }

    #[test]
    fn shipped_guardian_file_parses() {
        let contents = include_str!("../../assets/data/enemies/guardian.ron");
        let definition: EnemyDefinition = ron::from_str(contents).unwrap();
        assert_eq!(definition, EnemyDefinition::guardian());
    }
}
