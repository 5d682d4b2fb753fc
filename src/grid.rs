use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Visual and logical state of a single grid cell.
///
/// `Start`, `End`, `Obstacle` and `Empty` are painted by the user. `Open`,
/// `Closed` and `Path` are written only by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Start,
    End,
    Obstacle,
    Open,
    Closed,
    Path,
}

impl CellState {
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }

    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Obstacle => '#',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }
}

/// Reasons a grid mutation was refused. The grid is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds(Position),
    Occupied { pos: Position, state: CellState },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds(pos) => write!(f, "position {} is outside the grid", pos),
            GridError::Occupied { pos, state } => {
                write!(f, "position {} is already taken by {:?}", pos, state)
            }
        }
    }
}

impl Error for GridError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<CellState>>,
    start: Option<Position>,
    end: Option<Position>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![vec![CellState::Empty; size]; size],
            start: None,
            end: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// State at `pos`, or `None` when it lies outside the grid.
    pub fn state(&self, pos: Position) -> Option<CellState> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.state(pos) == Some(CellState::Obstacle)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position { row, col }))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    fn check(&self, pos: Position) -> Result<CellState, GridError> {
        self.state(pos).ok_or(GridError::OutOfBounds(pos))
    }

    /// Designates `pos` as the start. A previous start cell becomes empty.
    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        let state = self.check(pos)?;
        if state == CellState::End {
            return Err(GridError::Occupied { pos, state });
        }
        if let Some(old) = self.start.take() {
            self.cells[old.row][old.col] = CellState::Empty;
        }
        self.cells[pos.row][pos.col] = CellState::Start;
        self.start = Some(pos);
        Ok(())
    }

    /// Designates `pos` as the end. A previous end cell becomes empty.
    pub fn set_end(&mut self, pos: Position) -> Result<(), GridError> {
        let state = self.check(pos)?;
        if state == CellState::Start {
            return Err(GridError::Occupied { pos, state });
        }
        if let Some(old) = self.end.take() {
            self.cells[old.row][old.col] = CellState::Empty;
        }
        self.cells[pos.row][pos.col] = CellState::End;
        self.end = Some(pos);
        Ok(())
    }

    /// Flips `pos` between obstacle and empty.
    pub fn toggle_obstacle(&mut self, pos: Position) -> Result<(), GridError> {
        let state = self.check(pos)?;
        self.cells[pos.row][pos.col] = match state {
            CellState::Start | CellState::End => return Err(GridError::Occupied { pos, state }),
            CellState::Obstacle => CellState::Empty,
            _ => CellState::Obstacle,
        };
        Ok(())
    }

    /// Makes `pos` an obstacle regardless of its current search mark.
    pub fn place_obstacle(&mut self, pos: Position) -> Result<(), GridError> {
        match self.check(pos)? {
            CellState::Obstacle => Ok(()),
            _ => self.toggle_obstacle(pos),
        }
    }

    /// Left-click painting: start first, then end, then obstacles.
    pub fn paint(&mut self, pos: Position) -> Result<(), GridError> {
        let state = self.check(pos)?;
        if self.start.is_none() && state != CellState::End {
            self.set_start(pos)
        } else if self.end.is_none() && state != CellState::Start {
            self.set_end(pos)
        } else if matches!(state, CellState::Start | CellState::End) {
            Err(GridError::Occupied { pos, state })
        } else {
            self.place_obstacle(pos)
        }
    }

    /// Empties `pos`, dropping the start or end designation if it held one.
    pub fn clear(&mut self, pos: Position) -> Result<(), GridError> {
        match self.check(pos)? {
            CellState::Start => self.start = None,
            CellState::End => self.end = None,
            _ => {}
        }
        self.cells[pos.row][pos.col] = CellState::Empty;
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = CellState::Empty;
        }
        self.start = None;
        self.end = None;
    }

    /// Wipes Open/Closed/Path marks left by a previous search.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_search_mark() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Engine-side write of a search mark. Start and end keep their state.
    pub(crate) fn mark(&mut self, pos: Position, state: CellState) {
        debug_assert!(state.is_search_mark());
        let cell = &mut self.cells[pos.row][pos.col];
        if !matches!(*cell, CellState::Start | CellState::End | CellState::Obstacle) {
            *cell = state;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Legend: S=Start, E=End, #=Obstacle, o=Open, x=Closed, *=Path, .=Empty"
        )?;

        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:2}", col % 10)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", row)?;
            for cell in cells {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
