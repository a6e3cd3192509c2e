use std::io::Write;

use crate::{cell, Cell, World};

pub const ALIVE: char = '#';
pub const DEAD: char = '.';
pub const CURSOR: char = '@';
pub const CURSOR_ON_ALIVE: char = '%';

/// A fixed size grid of characters, one per visible cell, with a status line below.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    status: String,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = (0..height).map(|_| vec![DEAD; width]).collect();
        Self {
            height,
            lines,
            width,
            status: String::new(),
        }
    }

    /// overlays every cell for which `f` returns a char, `f` receives canvas-local positions.
    pub fn layer(&mut self, f: impl Fn(Cell) -> Option<char>) {
        for (y, line) in self.lines.iter_mut().enumerate() {
            for (x, slot) in line.iter_mut().enumerate() {
                if let Some(char) = f(cell!(x as i64, y as i64)) {
                    *slot = char;
                }
            }
        }
    }

    /// draws the alive cells of `world` falling inside the window starting at `origin`.
    ///
    /// Only the population is walked, so the cost does not depend on where
    /// the rest of the pattern drifted to.
    pub fn draw_world<W: World>(&mut self, world: &W, origin: Cell) {
        for alive in world.cells() {
            let local = alive - origin;
            if (0..self.width as i64).contains(&local.x) && (0..self.height as i64).contains(&local.y) {
                self.lines[local.y as usize][local.x as usize] = ALIVE;
            }
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn render(&self) -> String {
        let mut result = String::with_capacity((self.width + 1) * (self.height + 1));
        for line in &self.lines {
            result.extend(line.iter());
            result.push('\n');
        }
        result.push_str(&self.status);
        result
    }

    pub fn display(&self, out: &mut impl Write) -> std::io::Result<()> {
        let clear = termion::clear::All;
        write!(out, "{clear}")?;
        for (index, line) in self.render().lines().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        out.flush()
    }
}
