#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Chase engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new directive batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Period between simulation ticks scheduled by real-time adapters.
pub const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Number of lives granted when a fresh run begins.
pub const STARTING_LIVES: Lives = Lives::new(3);

/// Discrete phases of the play session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Menu state awaiting a level choice; ticking is suspended.
    LevelSelect,
    /// Active simulation accepting tick commands.
    Playing,
    /// All pellets consumed; awaiting advance or return to the menu.
    Won,
    /// All lives exhausted; awaiting retry or return to the menu.
    Lost,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Begins a fresh run on the requested level.
    StartGame {
        /// Level to load; out-of-range values clamp to the first level.
        level: LevelNumber,
        /// Name recorded against leaderboard entries for this run.
        player_name: String,
    },
    /// Suspends the session and returns to level select from any phase.
    StopGame,
    /// Advances the simulation by one discrete step while playing.
    Tick,
    /// Buffers the player's directional intent for subsequent ticks.
    SetDesiredDirection {
        /// Direction the player wishes to travel.
        direction: Direction,
    },
    /// Clears the player's directional intent.
    ClearDesiredDirection,
    /// Continues a won run on the next level, preserving lives and score.
    AdvanceLevel,
    /// Restarts the current level after a loss as a fresh run.
    RetryLevel,
    /// Returns to level select from a terminal phase.
    ReturnToLevelSelect,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a level was loaded and play began.
    SessionStarted {
        /// Level now being played.
        level: LevelNumber,
    },
    /// Announces that the session entered a new phase.
    PhaseChanged {
        /// Phase that became active after processing commands.
        phase: SessionPhase,
    },
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: CellCoord,
        /// Cell the player occupies after the move.
        to: CellCoord,
        /// Direction of travel for the completed step.
        direction: Direction,
    },
    /// Confirms that a pellet was consumed and points were awarded.
    PelletEaten {
        /// Cell the pellet occupied.
        cell: CellCoord,
        /// Score total after the award.
        score: Score,
    },
    /// Confirms that an enemy advanced between two cells.
    EnemyMoved {
        /// Identifier of the enemy that advanced.
        enemy: EnemyId,
        /// Cell the enemy occupied before moving.
        from: CellCoord,
        /// Cell the enemy occupies after the move.
        to: CellCoord,
    },
    /// Reports that enemy contact cost the player a life.
    LifeLost {
        /// Lives remaining after the loss.
        lives: Lives,
    },
    /// Announces that every pellet on the level was consumed.
    LevelCleared {
        /// Level that was cleared.
        level: LevelNumber,
        /// Score at the moment of clearing.
        score: Score,
    },
    /// Announces that the final life was lost and the run ended.
    GameOver {
        /// Score at the moment the run ended.
        score: Score,
    },
    /// Announces that the final defined level was cleared.
    GameCompleted,
}

/// Cardinal movement directions available to the player and enemies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Unit velocity corresponding to the direction.
    #[must_use]
    pub const fn velocity(self) -> Velocity {
        match self {
            Self::North => Velocity::new(0, -1),
            Self::East => Velocity::new(1, 0),
            Self::South => Velocity::new(0, 1),
            Self::West => Velocity::new(-1, 0),
        }
    }
}

/// Per-tick displacement applied to an agent, one cell per axis at most.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Velocity {
    dx: i32,
    dy: i32,
}

impl Velocity {
    /// Creates a new velocity from per-axis components.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Horizontal component of the velocity.
    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    /// Vertical component of the velocity.
    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.dy
    }

    /// Returns the velocity with the horizontal component negated.
    #[must_use]
    pub const fn reversed_x(self) -> Self {
        Self::new(-self.dx, self.dy)
    }

    /// Returns the velocity with the vertical component negated.
    #[must_use]
    pub const fn reversed_y(self) -> Self {
        Self::new(self.dx, -self.dy)
    }
}

/// Unique identifier assigned to an enemy within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Visual appearance applied to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemyColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl EnemyColor {
    /// Creates a new enemy color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Motion policy evaluated for an enemy once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyBehavior {
    /// Straight-line motion that reverses every nonzero axis on wall contact.
    Reactive,
    /// Pathfinding pursuit while the player is inside the habitat rectangle,
    /// falling back to straight-line motion with single-axis reversal.
    Pursuit {
        /// Region within which the enemy actively pathfinds toward the player.
        habitat: CellRect,
    },
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Cell reached by applying the velocity, if it stays in coordinate range.
    #[must_use]
    pub fn offset_by(self, velocity: Velocity) -> Option<CellCoord> {
        let column = self.column.checked_add_signed(velocity.dx())?;
        let row = self.row.checked_add_signed(velocity.dy())?;
        Some(Self::new(column, row))
    }

    /// Cell one step away in the provided direction, if representable.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        self.offset_by(direction.velocity())
    }
}

/// Step delta between two adjacent cells expressed as a velocity.
#[must_use]
pub fn velocity_between(from: CellCoord, to: CellCoord) -> Velocity {
    let dx = i64::from(to.column()) - i64::from(from.column());
    let dy = i64::from(to.row()) - i64::from(from.row());
    Velocity::new(dx as i32, dy as i32)
}

/// Axis-aligned rectangle expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    origin: CellCoord,
    size: CellRectSize,
}

impl CellRect {
    /// Constructs a rectangle from an origin cell and size.
    #[must_use]
    pub const fn from_origin_and_size(origin: CellCoord, size: CellRectSize) -> Self {
        Self { origin, size }
    }

    /// Upper-left cell that anchors the rectangle.
    #[must_use]
    pub const fn origin(&self) -> CellCoord {
        self.origin
    }

    /// Dimensions of the rectangle measured in whole cells.
    #[must_use]
    pub const fn size(&self) -> CellRectSize {
        self.size
    }

    /// Reports whether the provided cell lies within the rectangle.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        let column_end = self.origin.column().saturating_add(self.size.width());
        let row_end = self.origin.row().saturating_add(self.size.height());
        cell.column() >= self.origin.column()
            && cell.column() < column_end
            && cell.row() >= self.origin.row()
            && cell.row() < row_end
    }
}

/// Size of a [`CellRect`] measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRectSize {
    width: u32,
    height: u32,
}

impl CellRectSize {
    /// Creates a new size descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width of the rectangle in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rectangle in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// One-based index identifying a hand-authored level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelNumber(u32);

impl LevelNumber {
    /// Creates a new level number wrapper.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the underlying one-based index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Level number that follows this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Accumulated points earned by consuming pellets.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Score(u32);

impl Score {
    /// Score value at the start of a run.
    pub const ZERO: Score = Score(0);

    /// Creates a new score wrapper with the provided value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric score value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the score increased by the provided number of points.
    #[must_use]
    pub const fn awarded(self, points: u32) -> Self {
        Self(self.0.saturating_add(points))
    }
}

/// Remaining chances before a run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lives(u32);

impl Lives {
    /// Creates a new lives wrapper with the provided value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric lives value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the lives reduced by one, floored at zero.
    #[must_use]
    pub const fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Reports whether no lives remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        velocity_between, CellCoord, CellRect, CellRectSize, Direction, LevelNumber, Lives, Score,
        SessionPhase, Velocity,
    };
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = CellCoord::new(1, 1);
        let destination = CellCoord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn step_applies_cardinal_offsets() {
        let origin = CellCoord::new(3, 3);
        assert_eq!(origin.step(Direction::North), Some(CellCoord::new(3, 2)));
        assert_eq!(origin.step(Direction::East), Some(CellCoord::new(4, 3)));
        assert_eq!(origin.step(Direction::South), Some(CellCoord::new(3, 4)));
        assert_eq!(origin.step(Direction::West), Some(CellCoord::new(2, 3)));
    }

    #[test]
    fn step_rejects_moves_below_coordinate_range() {
        let corner = CellCoord::new(0, 0);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
    }

    #[test]
    fn velocity_between_recovers_step_delta() {
        let from = CellCoord::new(5, 5);
        assert_eq!(
            velocity_between(from, CellCoord::new(6, 5)),
            Velocity::new(1, 0)
        );
        assert_eq!(
            velocity_between(from, CellCoord::new(5, 4)),
            Velocity::new(0, -1)
        );
    }

    #[test]
    fn rect_contains_interior_but_not_boundary_beyond_size() {
        let rect =
            CellRect::from_origin_and_size(CellCoord::new(12, 0), CellRectSize::new(13, 12));
        assert!(rect.contains(CellCoord::new(12, 0)));
        assert!(rect.contains(CellCoord::new(24, 11)));
        assert!(!rect.contains(CellCoord::new(11, 0)));
        assert!(!rect.contains(CellCoord::new(12, 12)));
        assert!(!rect.contains(CellCoord::new(25, 5)));
    }

    #[test]
    fn lives_floor_at_zero() {
        let lives = Lives::new(1);
        let spent = lives.decremented();
        assert!(spent.is_exhausted());
        assert_eq!(spent.decremented(), spent);
    }

    #[test]
    fn score_awards_accumulate() {
        let score = Score::ZERO.awarded(10).awarded(10);
        assert_eq!(score, Score::new(20));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn level_number_round_trips_through_bincode() {
        assert_round_trip(&LevelNumber::new(4));
    }

    #[test]
    fn score_round_trips_through_bincode() {
        assert_round_trip(&Score::new(120));
    }

    #[test]
    fn session_phase_round_trips_through_bincode() {
        assert_round_trip(&SessionPhase::Playing);
    }

    #[test]
    fn cell_rect_round_trips_through_bincode() {
        let rect = CellRect::from_origin_and_size(CellCoord::new(5, 7), CellRectSize::new(2, 3));
        assert_round_trip(&rect);
    }
}
