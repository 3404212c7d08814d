//! Hand-authored level layouts and the fixed enemy templates they ship with.
//!
//! Levels are static data, not generated: each entry pairs an ordered wall
//! coordinate list with the enemy roster template that is re-instantiated
//! verbatim on every level (re)start and after every player collision.

use maze_chase_core::{
    CellCoord, CellRect, CellRectSize, EnemyBehavior, EnemyColor, LevelNumber, Velocity,
};

pub(crate) const GRID_COLUMNS: u32 = 25;
pub(crate) const GRID_ROWS: u32 = 25;

/// Fixed start cell shared by every authored level.
pub(crate) const PLAYER_START: CellCoord = CellCoord::new(1, 1);

/// Blueprint for one enemy in a level's fixed roster.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EnemyTemplate {
    pub(crate) start: CellCoord,
    pub(crate) velocity: Velocity,
    pub(crate) color: EnemyColor,
    pub(crate) behavior: EnemyBehavior,
    pub(crate) move_interval: u32,
    pub(crate) cooldown: u32,
}

/// Static description of a single authored level.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LevelTemplate {
    pub(crate) walls: &'static [(u32, u32)],
    pub(crate) enemies: &'static [EnemyTemplate],
}

pub(crate) fn level_count() -> u32 {
    LEVELS.len() as u32
}

/// Clamps an out-of-range level number to the first defined level.
pub(crate) fn clamped(level: LevelNumber) -> LevelNumber {
    if level.get() == 0 || level.get() > level_count() {
        LevelNumber::new(1)
    } else {
        level
    }
}

/// Template for the provided level number, which must already be clamped.
pub(crate) fn template(level: LevelNumber) -> &'static LevelTemplate {
    let index = clamped(level).get().saturating_sub(1) as usize;
    &LEVELS[index]
}

// Habitat quadrants carve the 25x25 grid through integer halving, so the
// right and bottom quadrants absorb the odd remainder.
const TOP_LEFT: CellRect =
    CellRect::from_origin_and_size(CellCoord::new(0, 0), CellRectSize::new(12, 12));
const TOP_RIGHT: CellRect =
    CellRect::from_origin_and_size(CellCoord::new(12, 0), CellRectSize::new(13, 12));
const BOTTOM_LEFT: CellRect =
    CellRect::from_origin_and_size(CellCoord::new(0, 12), CellRectSize::new(12, 13));
const BOTTOM_RIGHT: CellRect =
    CellRect::from_origin_and_size(CellCoord::new(12, 12), CellRectSize::new(13, 13));

const GREEN: EnemyColor = EnemyColor::from_rgb(0x00, 0xff, 0x00);
const BLUE: EnemyColor = EnemyColor::from_rgb(0x00, 0x00, 0xff);
const RED: EnemyColor = EnemyColor::from_rgb(0xff, 0x00, 0x00);
const MAGENTA: EnemyColor = EnemyColor::from_rgb(0xff, 0x00, 0xff);
const CYAN: EnemyColor = EnemyColor::from_rgb(0x00, 0xff, 0xff);
const WHITE: EnemyColor = EnemyColor::from_rgb(0xff, 0xff, 0xff);

static LEVELS: [LevelTemplate; 4] = [
    LevelTemplate {
        walls: &LEVEL_ONE_WALLS,
        enemies: &[
            EnemyTemplate {
                start: CellCoord::new(1, 23),
                velocity: Velocity::new(1, 0),
                color: GREEN,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(23, 23),
                velocity: Velocity::new(0, -1),
                color: BLUE,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 1,
            },
            EnemyTemplate {
                start: CellCoord::new(12, 1),
                velocity: Velocity::new(1, 0),
                color: RED,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 0,
            },
        ],
    },
    LevelTemplate {
        walls: &LEVEL_TWO_WALLS,
        enemies: &[
            EnemyTemplate {
                start: CellCoord::new(10, 2),
                velocity: Velocity::new(1, 0),
                color: RED,
                behavior: EnemyBehavior::Pursuit { habitat: TOP_LEFT },
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(23, 23),
                velocity: Velocity::new(0, -1),
                color: BLUE,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(1, 23),
                velocity: Velocity::new(1, 0),
                color: GREEN,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 0,
            },
        ],
    },
    LevelTemplate {
        walls: &LEVEL_THREE_WALLS,
        enemies: &[
            EnemyTemplate {
                start: CellCoord::new(10, 2),
                velocity: Velocity::new(1, 0),
                color: RED,
                behavior: EnemyBehavior::Pursuit { habitat: TOP_LEFT },
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(23, 1),
                velocity: Velocity::new(-1, 0),
                color: MAGENTA,
                behavior: EnemyBehavior::Pursuit { habitat: TOP_RIGHT },
                move_interval: 1,
                cooldown: 1,
            },
            EnemyTemplate {
                start: CellCoord::new(1, 23),
                velocity: Velocity::new(1, 0),
                color: GREEN,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(23, 23),
                velocity: Velocity::new(0, -1),
                color: BLUE,
                behavior: EnemyBehavior::Reactive,
                move_interval: 1,
                cooldown: 1,
            },
        ],
    },
    LevelTemplate {
        walls: &LEVEL_FOUR_WALLS,
        enemies: &[
            EnemyTemplate {
                start: CellCoord::new(10, 2),
                velocity: Velocity::new(1, 0),
                color: CYAN,
                behavior: EnemyBehavior::Pursuit { habitat: TOP_LEFT },
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(22, 22),
                velocity: Velocity::new(-1, 0),
                color: GREEN,
                behavior: EnemyBehavior::Pursuit {
                    habitat: BOTTOM_RIGHT,
                },
                move_interval: 1,
                cooldown: 0,
            },
            EnemyTemplate {
                start: CellCoord::new(2, 22),
                velocity: Velocity::new(1, 0),
                color: WHITE,
                behavior: EnemyBehavior::Pursuit {
                    habitat: BOTTOM_LEFT,
                },
                move_interval: 1,
                cooldown: 0,
            },
        ],
    },
];

static LEVEL_ONE_WALLS: [(u32, u32); 175] = [
    (2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (3, 2),
    (4, 2), (5, 2), (6, 2), (7, 2), (6, 3), (3, 6),
    (2, 7), (6, 4), (4, 6), (22, 2), (21, 2), (20, 2),
    (19, 2), (18, 2), (17, 2), (22, 3), (22, 4), (22, 5),
    (22, 6), (22, 7), (18, 3), (18, 4), (20, 6), (21, 6),
    (2, 22), (2, 21), (2, 20), (2, 19), (2, 18), (2, 17),
    (3, 22), (4, 22), (5, 22), (6, 22), (7, 22), (3, 18),
    (4, 18), (6, 21), (6, 20), (22, 17), (22, 18), (22, 19),
    (22, 20), (22, 21), (22, 22), (21, 22), (20, 22), (19, 22),
    (18, 22), (17, 22), (18, 21), (18, 20), (21, 18), (20, 18),
    (4, 20), (20, 20), (20, 4), (4, 4), (6, 6), (6, 7),
    (6, 8), (6, 9), (6, 10), (6, 18), (6, 17), (6, 16),
    (6, 15), (6, 14), (18, 18), (18, 17), (18, 16), (18, 15),
    (18, 14), (18, 6), (18, 7), (18, 8), (18, 9), (18, 10),
    (9, 2), (10, 2), (11, 2), (13, 2), (14, 2), (15, 2),
    (9, 22), (10, 22), (11, 22), (13, 22), (14, 22), (15, 22),
    (4, 8), (4, 9), (4, 10), (4, 14), (4, 15), (4, 16),
    (20, 8), (20, 9), (20, 10), (20, 14), (20, 15), (20, 16),
    (21, 12), (22, 12), (2, 12), (3, 12), (22, 9), (22, 10),
    (22, 11), (2, 9), (2, 10), (2, 11), (22, 13), (22, 14),
    (22, 15), (2, 13), (2, 14), (2, 15), (9, 4), (10, 5),
    (11, 6), (12, 7), (13, 8), (14, 9), (15, 10), (15, 4),
    (14, 5), (13, 6), (11, 8), (10, 9), (9, 10), (9, 20),
    (10, 19), (11, 18), (12, 17), (13, 16), (14, 15), (15, 14),
    (11, 16), (10, 15), (9, 14), (13, 18), (14, 19), (15, 20),
    (16, 6), (16, 7), (16, 8), (8, 6), (8, 7), (8, 8),
    (8, 16), (8, 17), (8, 18), (16, 16), (16, 17), (16, 18),
    (12, 10), (12, 11), (12, 12), (12, 13), (12, 14), (5, 12),
    (6, 12), (8, 12), (9, 12), (15, 12), (16, 12), (18, 12),
    (19, 12),
];

static LEVEL_TWO_WALLS: [(u32, u32); 190] = [
    (5, 2), (5, 3), (5, 4), (5, 5), (4, 5), (2, 2),
    (2, 3), (3, 2), (3, 3), (3, 5), (3, 6), (3, 7),
    (2, 9), (3, 9), (3, 10), (3, 11), (3, 12), (2, 12),
    (16, 10), (15, 9), (14, 8), (13, 8), (12, 9), (11, 10),
    (16, 14), (15, 15), (11, 14), (12, 15), (13, 16), (14, 16),
    (16, 11), (16, 13), (11, 11), (11, 13), (17, 11), (18, 11),
    (17, 13), (18, 13), (5, 11), (6, 11), (7, 11), (9, 8),
    (9, 9), (9, 10), (9, 11), (8, 11), (5, 9), (6, 9),
    (7, 9), (7, 6), (7, 7), (6, 7), (6, 5), (7, 5),
    (8, 3), (8, 2), (10, 2), (9, 2), (11, 2), (12, 2),
    (13, 2), (11, 3), (11, 4), (10, 4), (10, 5), (10, 6),
    (14, 5), (15, 5), (15, 4), (15, 3), (16, 3), (17, 3),
    (17, 2), (18, 2), (19, 2), (19, 3), (19, 4), (19, 5),
    (18, 5), (17, 5), (19, 11), (20, 11), (19, 13), (20, 13),
    (22, 2), (22, 3), (21, 3), (21, 4), (21, 5), (22, 5),
    (22, 6), (22, 7), (21, 7), (20, 7), (18, 7), (19, 7),
    (22, 9), (22, 10), (20, 9), (21, 9), (19, 9), (22, 13),
    (22, 14), (22, 15), (22, 16), (21, 16), (20, 16), (19, 16),
    (18, 16), (18, 18), (18, 15), (19, 15), (6, 14), (5, 15),
    (4, 16), (3, 17), (2, 18), (9, 14), (8, 15), (7, 16),
    (6, 17), (5, 18), (4, 19), (4, 20), (4, 21), (6, 12),
    (1, 18), (2, 14), (2, 13), (2, 15), (14, 12), (13, 12),
    (13, 11), (14, 11), (14, 13), (13, 13), (8, 19), (7, 19),
    (7, 20), (14, 22), (15, 22), (16, 22), (16, 20), (16, 21),
    (16, 19), (20, 18), (20, 19), (20, 20), (19, 20), (18, 20),
    (18, 21), (18, 22), (19, 22), (20, 22), (21, 22), (22, 22),
    (22, 18), (22, 19), (22, 20), (10, 19), (9, 19), (11, 21),
    (11, 19), (11, 20), (11, 18), (11, 17), (10, 17), (11, 22),
    (12, 20), (12, 19), (12, 21), (2, 21), (3, 21), (2, 22),
    (3, 22), (4, 22), (7, 21), (7, 22), (8, 22), (9, 22),
    (9, 21), (16, 17), (17, 17), (18, 17), (16, 18), (15, 19),
    (14, 19), (13, 5), (13, 6), (14, 6),
];

static LEVEL_THREE_WALLS: [(u32, u32); 183] = [
    (5, 2), (5, 3), (5, 4), (5, 5), (5, 6), (19, 2),
    (19, 3), (19, 4), (19, 5), (19, 6), (7, 2), (8, 2),
    (9, 2), (10, 2), (17, 2), (16, 2), (15, 2), (14, 2),
    (2, 2), (3, 2), (3, 3), (2, 3), (2, 5), (3, 5),
    (3, 6), (2, 6), (21, 2), (22, 2), (22, 3), (21, 3),
    (21, 5), (22, 5), (22, 6), (21, 6), (2, 21), (2, 22),
    (3, 22), (3, 21), (5, 22), (5, 21), (5, 20), (5, 19),
    (5, 18), (2, 18), (3, 18), (3, 19), (2, 19), (22, 22),
    (21, 22), (21, 21), (22, 21), (21, 19), (21, 18), (22, 18),
    (22, 19), (19, 18), (19, 19), (19, 20), (19, 21), (19, 22),
    (7, 22), (8, 22), (9, 22), (10, 22), (14, 22), (15, 22),
    (16, 22), (17, 22), (7, 4), (8, 4), (7, 5), (16, 4),
    (17, 4), (17, 5), (7, 19), (7, 20), (8, 20), (17, 19),
    (17, 20), (16, 20), (4, 8), (4, 9), (4, 10), (4, 14),
    (4, 15), (4, 16), (2, 12), (3, 12), (4, 12), (5, 12),
    (6, 12), (20, 8), (20, 9), (20, 10), (20, 12), (19, 12),
    (21, 12), (22, 12), (18, 12), (20, 14), (20, 15), (20, 16),
    (12, 2), (12, 3), (12, 4), (12, 5), (12, 6), (12, 7),
    (12, 8), (12, 16), (12, 17), (12, 18), (12, 19), (12, 20),
    (12, 21), (12, 22), (2, 9), (22, 9), (22, 15), (2, 15),
    (8, 11), (8, 10), (8, 9), (8, 8), (8, 13), (8, 14),
    (8, 15), (8, 16), (9, 6), (10, 6), (10, 7), (10, 8),
    (9, 18), (10, 18), (10, 17), (10, 16), (10, 10), (10, 11),
    (10, 12), (10, 13), (10, 14), (5, 8), (6, 9), (7, 10),
    (5, 16), (6, 15), (7, 14), (14, 6), (15, 6), (14, 7),
    (14, 8), (14, 16), (14, 17), (14, 18), (15, 18), (14, 10),
    (14, 11), (14, 12), (14, 13), (16, 8), (16, 9), (16, 10),
    (16, 11), (16, 13), (16, 14), (16, 15), (16, 16), (17, 14),
    (18, 15), (19, 16), (17, 10), (18, 9), (19, 8), (9, 4),
    (15, 4), (9, 20), (15, 20), (11, 10), (13, 10), (11, 14),
    (14, 14), (13, 14), (12, 12),
];

static LEVEL_FOUR_WALLS: [(u32, u32); 181] = [
    (1, 2), (2, 2), (3, 2), (3, 3), (3, 4), (2, 4),
    (6, 2), (6, 3), (6, 4), (7, 4), (8, 4), (8, 3),
    (10, 10), (11, 10), (12, 10), (13, 10), (15, 10), (14, 10),
    (15, 11), (15, 12), (13, 13), (14, 13), (15, 13), (10, 13),
    (9, 13), (8, 13), (8, 12), (8, 11), (8, 10), (9, 10),
    (10, 3), (11, 3), (11, 4), (11, 5), (11, 6), (10, 6),
    (9, 6), (16, 2), (15, 2), (15, 3), (15, 4), (15, 5),
    (16, 5), (17, 5), (18, 5), (18, 4), (18, 3), (19, 3),
    (20, 3), (20, 4), (13, 4), (13, 5), (13, 6), (13, 7),
    (14, 7), (15, 7), (16, 7), (17, 7), (18, 7), (20, 6),
    (20, 7), (22, 3), (23, 3), (22, 4), (22, 5), (1, 6),
    (2, 6), (3, 6), (3, 7), (3, 9), (3, 10), (2, 10),
    (1, 10), (5, 8), (5, 9), (5, 10), (5, 11), (6, 11),
    (6, 12), (6, 13), (5, 13), (4, 13), (2, 13), (3, 13),
    (2, 12), (7, 8), (7, 7), (7, 6), (6, 6), (5, 6),
    (17, 13), (18, 13), (19, 13), (20, 13), (20, 12), (20, 11),
    (23, 12), (20, 10), (21, 10), (22, 10), (9, 8), (10, 8),
    (11, 8), (1, 15), (2, 15), (3, 15), (4, 15), (4, 16),
    (4, 17), (4, 18), (5, 18), (6, 18), (2, 18), (2, 17),
    (2, 19), (2, 20), (3, 20), (4, 20), (4, 21), (7, 18),
    (7, 19), (6, 22), (6, 21), (7, 21), (8, 21), (9, 21),
    (9, 16), (9, 17), (9, 18), (9, 15), (7, 15), (8, 15),
    (4, 22), (14, 8), (11, 15), (12, 15), (13, 15), (14, 15),
    (14, 16), (14, 17), (13, 17), (12, 17), (12, 18), (12, 19),
    (11, 19), (17, 14), (17, 15), (17, 16), (17, 17), (16, 17),
    (16, 18), (16, 19), (15, 19), (15, 20), (17, 12), (17, 11),
    (17, 10), (15, 21), (14, 21), (13, 21), (19, 17), (19, 18),
    (19, 19), (18, 19), (19, 16), (20, 16), (21, 16), (22, 16),
    (22, 17), (20, 21), (21, 21), (19, 21), (21, 18), (22, 18),
    (21, 19), (21, 20), (18, 21), (18, 22), (22, 12), (22, 13),
    (22, 14),
];
