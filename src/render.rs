use crate::grid::{CellState, Grid, Position};
use colored::Colorize;
use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

/// Receives a read-only view of the grid after every node expansion and once
/// after the path has been marked. Returning `Break` aborts the search.
pub trait RenderPort {
    fn render_frame(&mut self, grid: &Grid) -> ControlFlow<()>;
}

impl<F> RenderPort for F
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    fn render_frame(&mut self, grid: &Grid) -> ControlFlow<()> {
        self(grid)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl RenderPort for NoopRenderer {
    fn render_frame(&mut self, _grid: &Grid) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Counts frames and optionally stops the search after a fixed number.
#[derive(Debug, Default, Clone)]
pub struct FrameCounter {
    pub frames: usize,
    pub abort_after: Option<usize>,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort_after(frames: usize) -> Self {
        FrameCounter {
            frames: 0,
            abort_after: Some(frames),
        }
    }
}

impl RenderPort for FrameCounter {
    fn render_frame(&mut self, _grid: &Grid) -> ControlFlow<()> {
        self.frames += 1;
        match self.abort_after {
            Some(limit) if self.frames >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

/// RGB color of a cell state.
pub fn state_color(state: CellState) -> (u8, u8, u8) {
    match state {
        CellState::Empty => (255, 255, 255),
        CellState::Start => (0, 125, 255),
        CellState::End => (0, 255, 0),
        CellState::Obstacle => (255, 0, 0),
        CellState::Open => (255, 125, 0),
        CellState::Closed => (128, 128, 128),
        CellState::Path => (0, 0, 255),
    }
}

/// Draws each frame to the terminal and sleeps between frames.
pub struct TerminalRenderer {
    title: String,
    delay: Duration,
    use_color: bool,
    max_frames: Option<usize>,
    frames: usize,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>, delay_ms: u64, use_color: bool) -> Self {
        TerminalRenderer {
            title: title.into(),
            delay: Duration::from_millis(delay_ms),
            use_color,
            max_frames: None,
            frames: 0,
        }
    }

    pub fn with_max_frames(mut self, max_frames: Option<usize>) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn draw(&self, grid: &Grid) {
        if !self.use_color {
            print!("{}", grid);
            return;
        }
        let mut out = String::new();
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let state = grid
                    .state(Position::new(row, col))
                    .unwrap_or(CellState::Empty);
                let (r, g, b) = state_color(state);
                out.push_str(&"  ".on_truecolor(r, g, b).to_string());
            }
            out.push('\n');
        }
        print!("{}", out);
    }
}

impl RenderPort for TerminalRenderer {
    fn render_frame(&mut self, grid: &Grid) -> ControlFlow<()> {
        self.frames += 1;
        self.clear_screen();
        println!("=== {} ===", self.title);
        println!(
            "Frame: {} | Open: {} | Closed: {} | Path: {}",
            self.frames,
            grid.count(CellState::Open),
            grid.count(CellState::Closed),
            grid.count(CellState::Path)
        );
        self.draw(grid);
        thread::sleep(self.delay);

        match self.max_frames {
            Some(limit) if self.frames >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counter_breaks_at_limit() {
        let grid = Grid::new(1);
        let mut counter = FrameCounter::abort_after(2);
        assert!(counter.render_frame(&grid).is_continue());
        assert!(counter.render_frame(&grid).is_break());
        assert_eq!(counter.frames, 2);
    }

    #[test]
    fn closures_are_render_ports() {
        let grid = Grid::new(2);
        let mut seen = 0;
        let mut port = |g: &Grid| {
            seen += g.size();
            ControlFlow::Continue(())
        };
        assert!(port.render_frame(&grid).is_continue());
        assert_eq!(seen, 2);
    }

    #[test]
    fn search_marks_have_distinct_colors() {
        let marks = [CellState::Open, CellState::Closed, CellState::Path];
        for (i, a) in marks.iter().enumerate() {
            for b in &marks[i + 1..] {
                assert_ne!(state_color(*a), state_color(*b));
            }
        }
    }
}
