//! Grid-constrained shortest-step search used by pursuit enemies.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_chase_core::{CellCoord, Velocity};

use crate::grid::Grid;

/// Candidate neighbor offsets expanded in a fixed order so equal-cost
/// frontiers resolve identically on every invocation.
const NEIGHBOR_OFFSETS: [Velocity; 4] = [
    Velocity::new(1, 0),
    Velocity::new(-1, 0),
    Velocity::new(0, 1),
    Velocity::new(0, -1),
];

/// Returns the cell adjacent to `from` that begins a shortest 4-directional
/// path to `to` over walkable cells.
///
/// Search is A* with unit step cost and a Manhattan-distance heuristic; ties
/// prefer lower cumulative cost, then insertion order. The first step is
/// recovered by walking the predecessor chain backward from the goal until
/// reaching the node whose predecessor is the start. `from == to` and
/// unreachable goals both yield `None`. The search runs fresh per invocation
/// and keeps no state across ticks.
pub(crate) fn next_step_toward(grid: &Grid, from: CellCoord, to: CellCoord) -> Option<CellCoord> {
    if from == to {
        return None;
    }

    let mut frontier: BinaryHeap<Reverse<(u32, u32, u64)>> = BinaryHeap::new();
    let mut frontier_cells: Vec<CellCoord> = Vec::new();
    let mut best_cost: HashMap<CellCoord, u32> = HashMap::new();
    let mut came_from: HashMap<CellCoord, CellCoord> = HashMap::new();
    let mut settled: HashSet<CellCoord> = HashSet::new();

    let _ = best_cost.insert(from, 0);
    frontier_cells.push(from);
    frontier.push(Reverse((from.manhattan_distance(to), 0, 0)));

    while let Some(Reverse((_, cost, sequence))) = frontier.pop() {
        let Some(&current) = usize::try_from(sequence)
            .ok()
            .and_then(|index| frontier_cells.get(index))
        else {
            continue;
        };
        if !settled.insert(current) {
            continue;
        }

        if current == to {
            return first_step(from, to, &came_from);
        }

        for offset in NEIGHBOR_OFFSETS {
            let Some(neighbor) = current.offset_by(offset) else {
                continue;
            };
            if !grid.is_walkable(neighbor) || settled.contains(&neighbor) {
                continue;
            }

            let tentative = cost.saturating_add(1);
            let known = best_cost.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative >= known {
                continue;
            }

            let _ = best_cost.insert(neighbor, tentative);
            let _ = came_from.insert(neighbor, current);
            let sequence = frontier_cells.len() as u64;
            frontier_cells.push(neighbor);
            frontier.push(Reverse((
                tentative.saturating_add(neighbor.manhattan_distance(to)),
                tentative,
                sequence,
            )));
        }
    }

    None
}

fn first_step(
    start: CellCoord,
    goal: CellCoord,
    came_from: &HashMap<CellCoord, CellCoord>,
) -> Option<CellCoord> {
    let mut step = goal;
    while let Some(&previous) = came_from.get(&step) {
        if previous == start {
            return Some(step);
        }
        step = previous;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor_grid() -> Grid {
        // 7x5 interior corridor bent around a central wall block.
        Grid::from_walls(7, 5, &[(2, 2), (3, 2), (4, 2)])
    }

    #[test]
    fn identical_endpoints_yield_no_step() {
        let grid = corridor_grid();
        let cell = CellCoord::new(1, 1);
        assert_eq!(next_step_toward(&grid, cell, cell), None);
    }

    #[test]
    fn adjacent_goal_is_the_first_step() {
        let grid = corridor_grid();
        let from = CellCoord::new(1, 1);
        let to = CellCoord::new(2, 1);
        assert_eq!(next_step_toward(&grid, from, to), Some(to));
    }

    #[test]
    fn unique_shortest_path_is_traced_hop_by_hop() {
        // 5x5 with the interior column at x=2 walled except the top row,
        // leaving exactly one route from (1,3) to (3,3).
        let grid = Grid::from_walls(5, 5, &[(2, 2), (2, 3)]);
        let goal = CellCoord::new(3, 3);

        let mut cell = CellCoord::new(1, 3);
        let mut hops = 0;
        while cell != goal {
            let step = next_step_toward(&grid, cell, goal).expect("path exists");
            assert_eq!(cell.manhattan_distance(step), 1);
            assert!(grid.is_walkable(step));
            cell = step;
            hops += 1;
            assert!(hops <= 16, "search failed to converge");
        }

        // Unique shortest path: up, across, down in six steps.
        assert_eq!(hops, 6);
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        // Goal cell (3,3) sealed behind its own wall ring inside a 7x7 grid.
        let walls = [(2, 2), (3, 2), (4, 2), (2, 3), (4, 3), (2, 4), (3, 4), (4, 4)];
        let grid = Grid::from_walls(7, 7, &walls);
        assert_eq!(
            next_step_toward(&grid, CellCoord::new(1, 1), CellCoord::new(3, 3)),
            None
        );
    }

    #[test]
    fn repeated_invocations_agree_on_the_same_inputs() {
        let grid = corridor_grid();
        let from = CellCoord::new(1, 3);
        let to = CellCoord::new(5, 1);
        let first = next_step_toward(&grid, from, to);
        for _ in 0..8 {
            assert_eq!(next_step_toward(&grid, from, to), first);
        }
    }
}
