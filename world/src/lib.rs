#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Maze Chase.
//!
//! The world owns the only mutable simulation state set: the wall grid, the
//! pellet set, the player, the enemy roster, and the run's lives and score.
//! Adapters mutate it exclusively through [`apply`], which executes a
//! [`Command`] and broadcasts [`Event`] values describing what changed. The
//! pathfinder and collision resolution are pure functions over borrowed state
//! and retain nothing between ticks.

mod grid;
mod levels;
mod pathfinding;

use grid::{Grid, PelletSet};
use levels::{EnemyTemplate, PLAYER_START};
use maze_chase_core::{
    velocity_between, CellCoord, Command, Direction, EnemyBehavior, EnemyColor, EnemyId, Event,
    LevelNumber, Lives, Score, SessionPhase, Velocity, STARTING_LIVES,
};

const PELLET_POINTS: u32 = 10;
const DEFAULT_PLAYER_NAME: &str = "Player";

/// Represents the authoritative Maze Chase session state.
#[derive(Debug)]
pub struct World {
    phase: SessionPhase,
    current_level: LevelNumber,
    grid: Grid,
    pellets: PelletSet,
    player: Player,
    player_start: CellCoord,
    roster_template: Vec<EnemyTemplate>,
    enemies: Vec<Enemy>,
    lives: Lives,
    score: Score,
    player_name: String,
}

impl World {
    /// Creates a new world waiting in level select with the first level's
    /// board loaded for presentation behind the menu.
    #[must_use]
    pub fn new() -> Self {
        let opening = LevelNumber::new(1);
        let mut world = Self {
            phase: SessionPhase::LevelSelect,
            current_level: opening,
            grid: Grid::from_walls(levels::GRID_COLUMNS, levels::GRID_ROWS, &[]),
            pellets: PelletSet::seed(
                &Grid::from_walls(levels::GRID_COLUMNS, levels::GRID_ROWS, &[]),
                PLAYER_START,
            ),
            player: Player {
                cell: PLAYER_START,
                desired: None,
            },
            player_start: PLAYER_START,
            roster_template: Vec::new(),
            enemies: Vec::new(),
            lives: STARTING_LIVES,
            score: Score::ZERO,
            player_name: String::from(DEFAULT_PLAYER_NAME),
        };
        world.load_level(opening);
        world
    }

    fn begin_run(&mut self, level: LevelNumber, player_name: &str, out: &mut Vec<Event>) {
        let level = levels::clamped(level);
        let trimmed = player_name.trim();
        self.player_name = if trimmed.is_empty() {
            String::from(DEFAULT_PLAYER_NAME)
        } else {
            String::from(trimmed)
        };
        self.lives = STARTING_LIVES;
        self.score = Score::ZERO;
        self.load_level(level);
        out.push(Event::SessionStarted { level });
        self.enter_phase(SessionPhase::Playing, out);
    }

    fn load_level(&mut self, level: LevelNumber) {
        let template = levels::template(level);
        self.current_level = level;
        self.grid = Grid::from_walls(levels::GRID_COLUMNS, levels::GRID_ROWS, template.walls);
        self.player_start = PLAYER_START;
        self.pellets = PelletSet::seed(&self.grid, self.player_start);
        self.player = Player {
            cell: self.player_start,
            desired: None,
        };
        self.roster_template = template.enemies.to_vec();
        self.reset_enemies();
    }

    fn reset_enemies(&mut self) {
        self.enemies = self
            .roster_template
            .iter()
            .enumerate()
            .map(|(index, template)| Enemy::from_template(EnemyId::new(index as u32), template))
            .collect();
    }

    fn enter_phase(&mut self, phase: SessionPhase, out: &mut Vec<Event>) {
        if self.phase != phase {
            self.phase = phase;
            out.push(Event::PhaseChanged { phase });
        }
    }

    fn run_tick(&mut self, out: &mut Vec<Event>) {
        if let Some(direction) = self.player.desired {
            if let Some(target) = self.player.cell.step(direction) {
                if self.grid.is_walkable(target) {
                    let from = self.player.cell;
                    self.player.cell = target;
                    out.push(Event::PlayerMoved {
                        from,
                        to: target,
                        direction,
                    });
                }
            }
        }

        self.resolve_collisions(out);
        if !self.lives.is_exhausted() {
            self.advance_enemies(out);
            self.resolve_collisions(out);
        }

        if self.pellets.is_empty() {
            out.push(Event::LevelCleared {
                level: self.current_level,
                score: self.score,
            });
            self.enter_phase(SessionPhase::Won, out);
        } else if self.lives.is_exhausted() {
            out.push(Event::GameOver { score: self.score });
            self.enter_phase(SessionPhase::Lost, out);
        }
    }

    fn resolve_collisions(&mut self, out: &mut Vec<Event>) {
        let cell = self.player.cell;
        if self.pellets.consume(cell) {
            self.score = self.score.awarded(PELLET_POINTS);
            out.push(Event::PelletEaten {
                cell,
                score: self.score,
            });
        }

        // The first enemy in roster order resolves the contact; the reset
        // rebuilds the roster, so further matches this check are moot.
        if self.enemies.iter().any(|enemy| enemy.cell == cell) {
            self.player.cell = self.player_start;
            self.reset_enemies();
            self.lives = self.lives.decremented();
            out.push(Event::LifeLost { lives: self.lives });
        }
    }

    fn advance_enemies(&mut self, out: &mut Vec<Event>) {
        let player_cell = self.player.cell;
        let grid = &self.grid;

        for enemy in self.enemies.iter_mut() {
            if enemy.cooldown > 0 {
                enemy.cooldown -= 1;
                continue;
            }
            enemy.cooldown = enemy.move_interval;

            if let EnemyBehavior::Pursuit { habitat } = enemy.behavior {
                if habitat.contains(player_cell) {
                    if let Some(next) =
                        pathfinding::next_step_toward(grid, enemy.cell, player_cell)
                    {
                        let from = enemy.cell;
                        enemy.velocity = velocity_between(from, next);
                        enemy.cell = next;
                        out.push(Event::EnemyMoved {
                            enemy: enemy.id,
                            from,
                            to: next,
                        });
                        continue;
                    }
                }
            }

            let target = enemy
                .cell
                .offset_by(enemy.velocity)
                .filter(|cell| grid.is_walkable(*cell));
            match target {
                Some(next) => {
                    let from = enemy.cell;
                    enemy.cell = next;
                    out.push(Event::EnemyMoved {
                        enemy: enemy.id,
                        from,
                        to: next,
                    });
                }
                None => match enemy.behavior {
                    EnemyBehavior::Reactive => {
                        if enemy.velocity.dx() != 0 {
                            enemy.velocity = enemy.velocity.reversed_x();
                        }
                        if enemy.velocity.dy() != 0 {
                            enemy.velocity = enemy.velocity.reversed_y();
                        }
                    }
                    EnemyBehavior::Pursuit { .. } => {
                        if enemy.velocity.dx() != 0 {
                            enemy.velocity = enemy.velocity.reversed_x();
                        } else if enemy.velocity.dy() != 0 {
                            enemy.velocity = enemy.velocity.reversed_y();
                        }
                    }
                },
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Player {
    cell: CellCoord,
    desired: Option<Direction>,
}

#[derive(Clone, Debug)]
struct Enemy {
    id: EnemyId,
    cell: CellCoord,
    velocity: Velocity,
    color: EnemyColor,
    behavior: EnemyBehavior,
    move_interval: u32,
    cooldown: u32,
}

impl Enemy {
    fn from_template(id: EnemyId, template: &EnemyTemplate) -> Self {
        Self {
            id,
            cell: template.start,
            velocity: template.velocity,
            color: template.color,
            behavior: template.behavior,
            move_interval: template.move_interval,
            cooldown: template.cooldown,
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartGame { level, player_name } => {
            world.begin_run(level, &player_name, out_events);
        }
        Command::StopGame => {
            world.enter_phase(SessionPhase::LevelSelect, out_events);
        }
        Command::Tick => {
            if world.phase == SessionPhase::Playing {
                world.run_tick(out_events);
            }
        }
        Command::SetDesiredDirection { direction } => {
            world.player.desired = Some(direction);
        }
        Command::ClearDesiredDirection => {
            world.player.desired = None;
        }
        Command::AdvanceLevel => {
            if world.phase != SessionPhase::Won {
                return;
            }
            let next = world.current_level.next();
            if next.get() > levels::level_count() {
                out_events.push(Event::GameCompleted);
                world.enter_phase(SessionPhase::LevelSelect, out_events);
            } else {
                world.load_level(next);
                out_events.push(Event::SessionStarted { level: next });
                world.enter_phase(SessionPhase::Playing, out_events);
            }
        }
        Command::RetryLevel => {
            if world.phase != SessionPhase::Lost {
                return;
            }
            let level = world.current_level;
            let name = world.player_name.clone();
            world.begin_run(level, &name, out_events);
        }
        Command::ReturnToLevelSelect => {
            if matches!(world.phase, SessionPhase::Won | SessionPhase::Lost) {
                world.enter_phase(SessionPhase::LevelSelect, out_events);
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{levels, World};
    use maze_chase_core::{
        CellCoord, Direction, EnemyColor, EnemyId, LevelNumber, Lives, Score, SessionPhase,
    };

    /// Phase the session state machine currently occupies.
    #[must_use]
    pub fn phase(world: &World) -> SessionPhase {
        world.phase
    }

    /// Level currently loaded into the world.
    #[must_use]
    pub fn current_level(world: &World) -> LevelNumber {
        world.current_level
    }

    /// Score accumulated by the active run.
    #[must_use]
    pub fn score(world: &World) -> Score {
        world.score
    }

    /// Lives remaining in the active run.
    #[must_use]
    pub fn lives(world: &World) -> Lives {
        world.lives
    }

    /// Name recorded against leaderboard entries for the active run.
    #[must_use]
    pub fn player_name(world: &World) -> &str {
        &world.player_name
    }

    /// Enumerates the defined level numbers in play order.
    #[must_use]
    pub fn level_numbers() -> Vec<LevelNumber> {
        (1..=levels::level_count()).map(LevelNumber::new).collect()
    }

    /// Dimensions of the loaded grid as `(columns, rows)`.
    #[must_use]
    pub fn grid_dimensions(world: &World) -> (u32, u32) {
        (world.grid.columns(), world.grid.rows())
    }

    /// Reports whether the cell is in-bounds and free of walls.
    #[must_use]
    pub fn is_walkable(world: &World, cell: CellCoord) -> bool {
        world.grid.is_walkable(cell)
    }

    /// Enumerates every wall cell of the loaded grid in row-major order.
    #[must_use]
    pub fn wall_cells(world: &World) -> Vec<CellCoord> {
        let mut cells = Vec::new();
        for row in 0..world.grid.rows() {
            for column in 0..world.grid.columns() {
                let cell = CellCoord::new(column, row);
                if world.grid.is_wall(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Enumerates the remaining pellet cells in row-major order.
    #[must_use]
    pub fn pellet_cells(world: &World) -> Vec<CellCoord> {
        world.pellets.cells().collect()
    }

    /// Number of pellets that have not yet been consumed.
    #[must_use]
    pub fn pellets_remaining(world: &World) -> usize {
        world.pellets.remaining()
    }

    /// Captures a read-only snapshot of the player.
    #[must_use]
    pub fn player_view(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: world.player.cell,
            facing: world.player.desired,
        }
    }

    /// Captures a read-only view of the enemies inhabiting the maze.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        let mut snapshots: Vec<EnemySnapshot> = world
            .enemies
            .iter()
            .map(|enemy| EnemySnapshot {
                id: enemy.id,
                cell: enemy.cell,
                color: enemy.color,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        EnemyView { snapshots }
    }

    /// Immutable representation of the player's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PlayerSnapshot {
        /// Grid cell currently occupied by the player.
        pub cell: CellCoord,
        /// Direction the player is facing, if any intent is buffered.
        pub facing: Option<Direction>,
    }

    /// Read-only snapshot describing all enemies within the maze.
    #[derive(Clone, Debug, Default)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured enemy snapshots in deterministic order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single enemy's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EnemySnapshot {
        /// Unique identifier assigned to the enemy.
        pub id: EnemyId,
        /// Grid cell currently occupied by the enemy.
        pub cell: CellCoord,
        /// Appearance assigned to the enemy.
        pub color: EnemyColor,
    }
}
