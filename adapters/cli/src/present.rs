//! Plain-text presentation of draw-ready scenes.

use std::collections::HashSet;
use std::fmt::Write as _;

use maze_chase_core::{CellCoord, Direction};
use maze_chase_rendering::Scene;

/// Renders the scene as a character grid topped by a HUD line.
pub(crate) fn render_text(scene: &Scene) -> String {
    let walls: HashSet<CellCoord> = scene.walls.iter().copied().collect();
    let pellets: HashSet<CellCoord> = scene.pellets.iter().copied().collect();
    let enemies: HashSet<CellCoord> = scene.enemies.iter().map(|sprite| sprite.cell).collect();

    let mut text = hud_line(scene);
    text.push('\n');
    for row in 0..scene.rows {
        for column in 0..scene.columns {
            let cell = CellCoord::new(column, row);
            let glyph = if cell == scene.player.cell {
                player_glyph(scene.player.facing)
            } else if enemies.contains(&cell) {
                'M'
            } else if walls.contains(&cell) {
                '#'
            } else if pellets.contains(&cell) {
                '.'
            } else {
                ' '
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

fn hud_line(scene: &Scene) -> String {
    let mut line = String::new();
    let _ = write!(
        line,
        "SCORE: {:04}  LIVES: {}  LEVEL: {}",
        scene.hud.score,
        scene.hud.lives.get(),
        scene.hud.level
    );
    line
}

fn player_glyph(facing: Option<Direction>) -> char {
    match facing {
        Some(Direction::North) => '^',
        Some(Direction::East) => '>',
        Some(Direction::South) => 'v',
        Some(Direction::West) => '<',
        None => 'C',
    }
}
