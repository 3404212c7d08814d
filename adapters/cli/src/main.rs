#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Maze Chase engine.
//!
//! The binary maps terminal invocations onto engine commands: listing levels,
//! running a deterministic scripted session, showing the leaderboard, and
//! exporting level layouts. All simulation state lives in the world crate;
//! this adapter only feeds it commands and presents the results.

mod present;
mod score_file;

use std::path::PathBuf;
use std::thread;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use maze_chase_core::{
    Command as WorldCommand, Direction, Event, LevelNumber, SessionPhase, TICK_INTERVAL,
};
use maze_chase_rendering::build_scene;
use maze_chase_system_audio::AudioDirector;
use maze_chase_system_scoreboard::{top_entries, ScoreStore, Scoreboard};
use maze_chase_world::{self as world, query, World};

use score_file::FileScoreStore;

#[derive(Debug, Parser)]
#[command(name = "maze-chase", about = "Tile-based maze-chase arcade engine")]
struct Cli {
    /// Path of the leaderboard file.
    #[arg(long, default_value = "leaderboard.txt")]
    leaderboard: PathBuf,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List the defined levels.
    Levels,
    /// Run a scripted session and print the final frame.
    Play {
        /// Level to start on; out-of-range values clamp to the first level.
        #[arg(long, default_value_t = 1)]
        level: u32,
        /// Name recorded against leaderboard entries.
        #[arg(long, default_value = "Player")]
        name: String,
        /// Per-tick steering script: N, E, S, W steer, `.` releases. The last
        /// input holds once the script runs out.
        #[arg(long, default_value = "")]
        moves: String,
        /// Maximum ticks to simulate before giving up.
        #[arg(long, default_value_t = 600)]
        max_ticks: u32,
        /// Pace ticks at the canonical 120ms interval instead of flat out.
        #[arg(long)]
        realtime: bool,
    },
    /// Show the top leaderboard entries.
    Leaderboard,
    /// Print a level layout as JSON.
    ExportLevel {
        /// Level to export; out-of-range values clamp to the first level.
        level: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut store = FileScoreStore::new(&cli.leaderboard);

    match cli.command {
        CliCommand::Levels => run_levels(),
        CliCommand::Play {
            level,
            name,
            moves,
            max_ticks,
            realtime,
        } => run_play(&mut store, level, name, &moves, max_ticks, realtime),
        CliCommand::Leaderboard => run_leaderboard(&mut store),
        CliCommand::ExportLevel { level } => run_export(level),
    }
}

fn run_levels() -> Result<()> {
    for number in query::level_numbers() {
        println!("Level {}", number.get());
    }
    Ok(())
}

fn run_play(
    store: &mut FileScoreStore,
    level: u32,
    name: String,
    moves: &str,
    max_ticks: u32,
    realtime: bool,
) -> Result<()> {
    let script = parse_moves(moves).context("invalid --moves script")?;

    let mut world = World::new();
    let mut director = AudioDirector::new();
    let scoreboard = Scoreboard::new();
    let mut events = Vec::new();

    world::apply(
        &mut world,
        WorldCommand::StartGame {
            level: LevelNumber::new(level),
            player_name: name,
        },
        &mut events,
    );
    dispatch(&mut director, &scoreboard, store, &world, &events)?;
    info!(
        "session started on level {} with {} pellets",
        query::current_level(&world).get(),
        query::pellets_remaining(&world)
    );

    for index in 0..max_ticks {
        if query::phase(&world) != SessionPhase::Playing {
            break;
        }

        if let Some(&input) = script.get(index as usize) {
            let command = match input {
                Some(direction) => WorldCommand::SetDesiredDirection { direction },
                None => WorldCommand::ClearDesiredDirection,
            };
            events.clear();
            world::apply(&mut world, command, &mut events);
        }

        events.clear();
        world::apply(&mut world, WorldCommand::Tick, &mut events);
        dispatch(&mut director, &scoreboard, store, &world, &events)?;

        if realtime {
            thread::sleep(TICK_INTERVAL);
        }
    }

    print!("{}", present::render_text(&build_scene(&world)));
    println!(
        "status: {:?}  score: {}  lives: {}  pellets left: {}",
        query::phase(&world),
        query::score(&world).get(),
        query::lives(&world).get(),
        query::pellets_remaining(&world)
    );
    Ok(())
}

fn run_leaderboard(store: &mut FileScoreStore) -> Result<()> {
    let entries = store.load().context("failed to load the leaderboard")?;
    if entries.is_empty() {
        println!("No scores yet.");
        return Ok(());
    }
    for (position, entry) in top_entries(&entries).iter().enumerate() {
        println!("{}. {} - {}", position + 1, entry.name, entry.score.get());
    }
    Ok(())
}

fn run_export(level: u32) -> Result<()> {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        WorldCommand::StartGame {
            level: LevelNumber::new(level),
            player_name: String::new(),
        },
        &mut events,
    );

    let (columns, rows) = query::grid_dimensions(&world);
    let start = query::player_view(&world).cell;
    let layout = LevelLayout {
        level: query::current_level(&world).get(),
        columns,
        rows,
        player_start: (start.column(), start.row()),
        walls: query::wall_cells(&world)
            .into_iter()
            .map(|cell| (cell.column(), cell.row()))
            .collect(),
    };

    let encoded =
        serde_json::to_string_pretty(&layout).context("failed to encode the level layout")?;
    println!("{encoded}");
    Ok(())
}

fn dispatch(
    director: &mut AudioDirector,
    scoreboard: &Scoreboard,
    store: &mut FileScoreStore,
    world: &World,
    events: &[Event],
) -> Result<()> {
    for event in events {
        match event {
            Event::LifeLost { lives } => info!("life lost, {} remaining", lives.get()),
            Event::LevelCleared { level, score } => {
                info!("level {} cleared with {} points", level.get(), score.get());
            }
            Event::GameOver { score } => info!("game over with {} points", score.get()),
            Event::GameCompleted => info!("all levels cleared"),
            _ => {}
        }
    }

    let mut signals = Vec::new();
    director.handle(events, &mut signals);
    for signal in signals {
        debug!("audio: {signal:?}");
    }

    scoreboard
        .handle(events, query::player_name(world), store)
        .context("failed to persist the score")
}

fn parse_moves(moves: &str) -> Result<Vec<Option<Direction>>> {
    moves
        .chars()
        .map(|glyph| match glyph.to_ascii_uppercase() {
            'N' => Ok(Some(Direction::North)),
            'E' => Ok(Some(Direction::East)),
            'S' => Ok(Some(Direction::South)),
            'W' => Ok(Some(Direction::West)),
            '.' => Ok(None),
            other => bail!("unsupported move '{other}' (expected N, E, S, W or .)"),
        })
        .collect()
}

/// Serialised description of a level's grid for external tooling.
#[derive(Debug, serde::Serialize)]
struct LevelLayout {
    level: u32,
    columns: u32,
    rows: u32,
    player_start: (u32, u32),
    walls: Vec<(u32, u32)>,
}
