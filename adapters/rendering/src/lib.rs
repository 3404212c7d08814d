#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Maze Chase adapters.
//!
//! The engine exposes one draw-ready [`Scene`] per tick; pixel-level drawing
//! belongs to the presenting adapter. Scenes are assembled exclusively from
//! world queries and retain no borrow of the world.

use glam::Vec2;
use maze_chase_core::{CellCoord, Direction, EnemyId, Lives, SessionPhase};
use maze_chase_world::{query, World};

/// Side length of a square tile expressed in world units.
pub const TILE_LENGTH: f32 = 25.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Draw-ready description of one simulation frame.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Number of tile columns in the grid.
    pub columns: u32,
    /// Number of tile rows in the grid.
    pub rows: u32,
    /// Every wall cell of the loaded grid in row-major order.
    pub walls: Vec<CellCoord>,
    /// Remaining pellet cells in row-major order.
    pub pellets: Vec<CellCoord>,
    /// Enemy sprites in deterministic identifier order.
    pub enemies: Vec<EnemySprite>,
    /// The player sprite.
    pub player: PlayerSprite,
    /// Session values presented by the HUD.
    pub hud: HudState,
}

/// Enemy position and appearance handed to the presenting adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySprite {
    /// Identity of the enemy, stable across a level attempt.
    pub id: EnemyId,
    /// Cell occupied by the enemy.
    pub cell: CellCoord,
    /// Fill color for the enemy.
    pub color: Color,
}

/// Player position and facing handed to the presenting adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSprite {
    /// Cell occupied by the player.
    pub cell: CellCoord,
    /// Facing used for the directional mouth cue; `None` renders closed.
    pub facing: Option<Direction>,
}

/// Session values shown by the heads-up display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudState {
    /// Score accumulated by the active run.
    pub score: u32,
    /// Lives remaining in the active run.
    pub lives: Lives,
    /// One-based number of the loaded level.
    pub level: u32,
    /// Phase the session state machine currently occupies.
    pub phase: SessionPhase,
}

/// Assembles the draw-ready scene for the current world state.
#[must_use]
pub fn build_scene(world: &World) -> Scene {
    let (columns, rows) = query::grid_dimensions(world);
    let player = query::player_view(world);
    let enemies = query::enemy_view(world)
        .into_vec()
        .into_iter()
        .map(|snapshot| EnemySprite {
            id: snapshot.id,
            cell: snapshot.cell,
            color: Color::from_rgb_u8(
                snapshot.color.red(),
                snapshot.color.green(),
                snapshot.color.blue(),
            ),
        })
        .collect();

    Scene {
        columns,
        rows,
        walls: query::wall_cells(world),
        pellets: query::pellet_cells(world),
        enemies,
        player: PlayerSprite {
            cell: player.cell,
            facing: player.facing,
        },
        hud: HudState {
            score: query::score(world).get(),
            lives: query::lives(world),
            level: query::current_level(world).get(),
            phase: query::phase(world),
        },
    }
}

/// World-space center of a cell for pixel-level drawing.
#[must_use]
pub fn cell_center(cell: CellCoord) -> Vec2 {
    Vec2::new(
        (cell.column() as f32 + 0.5) * TILE_LENGTH,
        (cell.row() as f32 + 0.5) * TILE_LENGTH,
    )
}

/// World-space size of the full grid for viewport sizing.
#[must_use]
pub fn grid_extent(scene: &Scene) -> Vec2 {
    Vec2::new(
        scene.columns as f32 * TILE_LENGTH,
        scene.rows as f32 * TILE_LENGTH,
    )
}
