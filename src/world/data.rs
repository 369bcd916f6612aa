//! Level data structures and RON loading.
//!
//! Levels are authored in tiles. The world origin is the bottom-left corner
//! of the level with y pointing up, so tile (0, 0) spans `0..tile_size` on
//! both axes.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::error::DataLoadError;
use crate::physics::TravelBounds;

/// Directory holding the `level_<n>.ron` files.
pub const LEVEL_DATA_DIR: &str = "assets/data/levels";

fn one() -> i32 {
    1
}

/// A rectangle of whole tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TileRect {
    pub x: i32,
    pub y: i32,
    #[serde(default = "one")]
    pub w: i32,
    #[serde(default = "one")]
    pub h: i32,
}

impl TileRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A single tile.
    pub fn tile(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// World-space center and half extents.
    pub fn world_box(&self, tile_size: f32) -> (Vec2, Vec2) {
        let half = Vec2::new(self.w as f32, self.h as f32) * tile_size / 2.0;
        let min = Vec2::new(self.x as f32, self.y as f32) * tile_size;
        (min + half, half)
    }
}

/// A platform that travels with a fixed speed and bounces between bounds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovingPlatformDef {
    pub rect: TileRect,
    /// Pixels per frame
    #[serde(default)]
    pub velocity: (f32, f32),
    #[serde(default)]
    pub boundary_left: Option<f32>,
    #[serde(default)]
    pub boundary_right: Option<f32>,
    #[serde(default)]
    pub boundary_bottom: Option<f32>,
    #[serde(default)]
    pub boundary_top: Option<f32>,
}

impl MovingPlatformDef {
    pub fn bounds(&self) -> TravelBounds {
        TravelBounds {
            left: self.boundary_left,
            right: self.boundary_right,
            bottom: self.boundary_bottom,
            top: self.boundary_top,
        }
    }
}

/// Enemy placement in a level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnemySpawnDef {
    /// Enemy kind id, resolved against `EnemyRegistry` at spawn time
    pub kind: String,
    /// Tile the enemy stands in
    pub tile: (i32, i32),
    #[serde(default)]
    pub boundary_left: Option<f32>,
    #[serde(default)]
    pub boundary_right: Option<f32>,
    /// Initial horizontal speed in pixels per frame
    #[serde(default)]
    pub change_x: Option<f32>,
}

/// Complete level definition loaded from RON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelDefinition {
    pub tile_size: f32,
    /// Player center at level start, in world pixels
    pub player_start: (f32, f32),
    pub solids: Vec<TileRect>,
    pub moving_platforms: Vec<MovingPlatformDef>,
    pub ladders: Vec<TileRect>,
    /// Touching one of these sends the player back to the checkpoint
    pub hazards: Vec<TileRect>,
    pub doors: Vec<TileRect>,
    /// Skulls; collecting enough opens the door
    pub coins: Vec<TileRect>,
    pub checkpoints: Vec<TileRect>,
    pub enemies: Vec<EnemySpawnDef>,
}

impl Default for LevelDefinition {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            player_start: (610.0, 100.0),
            solids: Vec::new(),
            moving_platforms: Vec::new(),
            ladders: Vec::new(),
            hazards: Vec::new(),
            doors: Vec::new(),
            coins: Vec::new(),
            checkpoints: Vec::new(),
            enemies: Vec::new(),
        }
    }
}

impl LevelDefinition {
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }

    /// Parse a level from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }
}

/// Registry of all loaded levels, keyed by 1-based level index.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelRegistry {
    pub levels: BTreeMap<u32, LevelDefinition>,
}

impl LevelRegistry {
    /// Get a level by index.
    pub fn get(&self, index: u32) -> Option<&LevelDefinition> {
        self.levels.get(&index)
    }

    pub fn insert(&mut self, index: u32, level: LevelDefinition) {
        self.levels.insert(index, level);
    }
}

/// Level index encoded in a `level_<n>.ron` file name.
pub fn level_index_from_path(path: &Path) -> Result<u32, DataLoadError> {
    let invalid = || DataLoadError::InvalidLevelFileName(path.display().to_string());

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.strip_prefix("level_"))
        .and_then(|index| index.parse::<u32>().ok())
        .filter(|index| *index >= 1)
        .ok_or_else(invalid)
}

/// Read and parse one level file.
pub fn load_level_file(path: &Path) -> Result<(u32, LevelDefinition), DataLoadError> {
    let index = level_index_from_path(path)?;

    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let level = LevelDefinition::from_ron(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    Ok((index, level))
}

/// Load all level definitions from `LEVEL_DATA_DIR`.
pub fn load_level_definitions(mut registry: ResMut<LevelRegistry>) {
    let levels_path = Path::new(LEVEL_DATA_DIR);

    if !levels_path.exists() {
        warn!("Levels directory not found: {:?}", levels_path);
        return;
    }

    if let Ok(entries) = fs::read_dir(levels_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                match load_level_file(&path) {
                    Ok((index, level)) => {
                        info!("Loaded level {} from {:?}", index, path);
                        registry.insert(index, level);
                    }
                    Err(e) => {
                        error!("{}", e);
                    }
                }
            }
        }
    }

    info!("Loaded {} level(s)", registry.levels.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_rect_world_box() {
        let (center, half) = TileRect::new(2, 0, 3, 1).world_box(64.0);
        assert_eq!(center, Vec2::new(224.0, 32.0));
        assert_eq!(half, Vec2::new(96.0, 32.0));
    }

    #[test]
    fn level_file_names() {
        assert_eq!(level_index_from_path(Path::new("levels/level_2.ron")).unwrap(), 2);
        assert!(matches!(
            level_index_from_path(Path::new("levels/level_0.ron")),
            Err(DataLoadError::InvalidLevelFileName(_))
        ));
        assert!(matches!(
            level_index_from_path(Path::new("levels/bonus.ron")),
            Err(DataLoadError::InvalidLevelFileName(_))
        ));
    }

    #[test]
    fn missing_level_file_is_reported() {
        assert!(matches!(
            load_level_file(Path::new("does/not/exist/level_9.ron")),
            Err(DataLoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn sparse_level_uses_defaults() {
        let level = LevelDefinition::from_ron(
            r#"(
                solids: [(x: 0, y: 0, w: 10)],
                enemies: [(kind: "guardian", tile: (4, 1), change_x: Some(2.0))],
            )"#,
        )
        .unwrap();
        assert_eq!(level.tile_size, 64.0);
        assert_eq!(level.solids[0].h, 1);
        assert_eq!(level.enemies[0].boundary_left, None);
        assert_eq!(level.enemies[0].change_x, Some(2.0));
    }

    #[test]
    fn shipped_levels_parse() {
        for contents in [
            include_str!("../../assets/data/levels/level_1.ron"),
            include_str!("../../assets/data/levels/level_2.ron"),
            include_str!("../../assets/data/levels/level_3.ron"),
        ] {
            let level = LevelDefinition::from_ron(contents).unwrap();
            assert!(!level.solids.is_empty());
            assert_eq!(level.doors.len(), 1);
            assert!(level.coins.len() >= 3);
        }
    }
}
