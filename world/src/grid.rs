//! Dense wall grid and pellet storage backing a loaded level.

use maze_chase_core::CellCoord;

/// Static per-level wall grid with bounds-checked walkability queries.
///
/// Cells are stored row-major. The outer ring is always stamped as wall, and
/// wall coordinates supplied outside the grid bounds are ignored rather than
/// rejected, so hand-authored layouts never fail to load.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    columns: u32,
    rows: u32,
    walls: Vec<bool>,
}

impl Grid {
    pub(crate) fn from_walls(columns: u32, rows: u32, walls: &[(u32, u32)]) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        let mut grid = Self {
            columns,
            rows,
            walls: vec![false; capacity],
        };

        for column in 0..columns {
            grid.stamp(CellCoord::new(column, 0));
            grid.stamp(CellCoord::new(column, rows.saturating_sub(1)));
        }
        for row in 0..rows {
            grid.stamp(CellCoord::new(0, row));
            grid.stamp(CellCoord::new(columns.saturating_sub(1), row));
        }

        for &(column, row) in walls {
            grid.stamp(CellCoord::new(column, row));
        }

        grid
    }

    pub(crate) fn is_walkable(&self, cell: CellCoord) -> bool {
        self.index(cell)
            .map_or(false, |index| !self.walls[index])
    }

    pub(crate) fn is_wall(&self, cell: CellCoord) -> bool {
        self.index(cell).map_or(false, |index| self.walls[index])
    }

    pub(crate) fn columns(&self) -> u32 {
        self.columns
    }

    pub(crate) fn rows(&self) -> u32 {
        self.rows
    }

    fn stamp(&mut self, cell: CellCoord) {
        if let Some(index) = self.index(cell) {
            self.walls[index] = true;
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Mutable set of collectible pellet cells over the open cells of a grid.
///
/// Storage mirrors the grid's row-major layout so consumption is O(1) and
/// iteration order is deterministic.
#[derive(Clone, Debug)]
pub(crate) struct PelletSet {
    columns: u32,
    rows: u32,
    present: Vec<bool>,
    remaining: usize,
}

impl PelletSet {
    /// Seeds one pellet per open cell, excluding the player start cell.
    pub(crate) fn seed(grid: &Grid, excluded: CellCoord) -> Self {
        let columns = grid.columns();
        let rows = grid.rows();
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        let mut set = Self {
            columns,
            rows,
            present: vec![false; capacity],
            remaining: 0,
        };

        for row in 0..rows {
            for column in 0..columns {
                let cell = CellCoord::new(column, row);
                if cell == excluded || !grid.is_walkable(cell) {
                    continue;
                }
                if let Some(index) = set.index(cell) {
                    set.present[index] = true;
                    set.remaining += 1;
                }
            }
        }

        set
    }

    /// Removes the pellet at the cell, reporting whether one was present.
    pub(crate) fn consume(&mut self, cell: CellCoord) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        if !self.present[index] {
            return false;
        }
        self.present[index] = false;
        self.remaining = self.remaining.saturating_sub(1);
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    /// Iterates the remaining pellet cells in row-major order.
    pub(crate) fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.columns;
        self.present
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(move |(index, _)| {
                let index = index as u64;
                let column = (index % u64::from(columns)) as u32;
                let row = (index / u64::from(columns)) as u32;
                CellCoord::new(column, row)
            })
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
