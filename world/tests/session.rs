use maze_chase_core::{
    CellCoord, Command, Direction, Event, LevelNumber, Lives, Score, SessionPhase,
};
use maze_chase_world::{self as world, query, World};

fn start(world: &mut World, level: u32, name: &str) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(
        world,
        Command::StartGame {
            level: LevelNumber::new(level),
            player_name: String::from(name),
        },
        &mut events,
    );
    events
}

fn tick(world: &mut World) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, Command::Tick, &mut events);
    events
}

#[test]
fn starting_a_session_loads_the_requested_level() {
    let mut world = World::new();
    let events = start(&mut world, 2, "Ada");

    assert!(events.contains(&Event::SessionStarted {
        level: LevelNumber::new(2)
    }));
    assert_eq!(query::phase(&world), SessionPhase::Playing);
    assert_eq!(query::current_level(&world), LevelNumber::new(2));
    assert_eq!(query::player_name(&world), "Ada");
    assert_eq!(query::lives(&world), Lives::new(3));
    assert_eq!(query::score(&world), Score::ZERO);
    assert!(query::pellets_remaining(&world) > 0);
    assert_eq!(query::enemy_view(&world).into_vec().len(), 3);
}

#[test]
fn invalid_level_indices_clamp_to_the_first_level() {
    let mut world = World::new();
    let events = start(&mut world, 7, "Ada");
    assert!(events.contains(&Event::SessionStarted {
        level: LevelNumber::new(1)
    }));
}

#[test]
fn level_listing_covers_the_authored_set() {
    let numbers = query::level_numbers();
    assert_eq!(
        numbers,
        vec![
            LevelNumber::new(1),
            LevelNumber::new(2),
            LevelNumber::new(3),
            LevelNumber::new(4),
        ]
    );
}

#[test]
fn every_level_keeps_the_border_ring_walled() {
    let mut world = World::new();
    for level in 1..=4 {
        let _ = start(&mut world, level, "Ada");
        let (columns, rows) = query::grid_dimensions(&world);
        assert_eq!((columns, rows), (25, 25));

        for column in 0..columns {
            assert!(!query::is_walkable(&world, CellCoord::new(column, 0)));
            assert!(!query::is_walkable(&world, CellCoord::new(column, rows - 1)));
        }
        for row in 0..rows {
            assert!(!query::is_walkable(&world, CellCoord::new(0, row)));
            assert!(!query::is_walkable(&world, CellCoord::new(columns - 1, row)));
        }
        assert!(!query::is_walkable(&world, CellCoord::new(columns, 3)));
        assert!(!query::is_walkable(&world, CellCoord::new(3, rows)));
    }
}

#[test]
fn buffered_direction_moves_the_player_until_cleared() {
    let mut world = World::new();
    let _ = start(&mut world, 1, "Ada");

    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::SetDesiredDirection {
            direction: Direction::East,
        },
        &mut events,
    );
    let events = tick(&mut world);
    assert!(events.contains(&Event::PlayerMoved {
        from: CellCoord::new(1, 1),
        to: CellCoord::new(2, 1),
        direction: Direction::East,
    }));
    assert_eq!(query::score(&world), Score::new(10));

    let mut events = Vec::new();
    world::apply(&mut world, Command::ClearDesiredDirection, &mut events);
    let events = tick(&mut world);
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::PlayerMoved { .. })));
}

#[test]
fn sessions_replay_deterministically() {
    let mut first = World::new();
    let mut second = World::new();

    for world in [&mut first, &mut second] {
        let _ = start(world, 3, "Ada");
        let mut events = Vec::new();
        world::apply(
            world,
            Command::SetDesiredDirection {
                direction: Direction::East,
            },
            &mut events,
        );
    }

    for _ in 0..32 {
        assert_eq!(tick(&mut first), tick(&mut second));
    }
    assert_eq!(
        query::enemy_view(&first).into_vec(),
        query::enemy_view(&second).into_vec()
    );
    assert_eq!(query::score(&first), query::score(&second));
}

#[test]
fn an_idle_player_eventually_loses_and_may_retry() {
    let mut world = World::new();
    let _ = start(&mut world, 1, "Ada");

    let mut observed_game_over = false;
    for _ in 0..3000 {
        let events = tick(&mut world);
        if events
            .iter()
            .any(|event| matches!(event, Event::GameOver { .. }))
        {
            observed_game_over = true;
            break;
        }
    }

    assert!(observed_game_over, "patrolling enemy never reached the player");
    assert_eq!(query::phase(&world), SessionPhase::Lost);
    assert!(query::lives(&world).is_exhausted());

    let mut events = Vec::new();
    world::apply(&mut world, Command::RetryLevel, &mut events);
    assert!(events.contains(&Event::SessionStarted {
        level: LevelNumber::new(1)
    }));
    assert_eq!(query::phase(&world), SessionPhase::Playing);
    assert_eq!(query::lives(&world), Lives::new(3));
    assert_eq!(query::score(&world), Score::ZERO);
}

#[test]
fn life_loss_restores_the_template_roster() {
    let mut world = World::new();
    let _ = start(&mut world, 1, "Ada");
    let template_roster = query::enemy_view(&world).into_vec();

    let mut lost_life = false;
    for _ in 0..3000 {
        let events = tick(&mut world);
        if events
            .iter()
            .any(|event| matches!(event, Event::LifeLost { .. }))
        {
            lost_life = true;
            break;
        }
    }

    assert!(lost_life, "patrolling enemy never reached the player");
    assert_eq!(query::enemy_view(&world).into_vec(), template_roster);
    assert_eq!(query::player_view(&world).cell, CellCoord::new(1, 1));
}

#[test]
fn stopping_suspends_the_session_into_level_select() {
    let mut world = World::new();
    let _ = start(&mut world, 1, "Ada");

    let mut events = Vec::new();
    world::apply(&mut world, Command::StopGame, &mut events);
    assert_eq!(query::phase(&world), SessionPhase::LevelSelect);
    assert!(tick(&mut world).is_empty());

    events.clear();
    world::apply(&mut world, Command::StopGame, &mut events);
    assert!(events.is_empty());
}
