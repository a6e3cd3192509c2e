use std::{
    io::{stdin, stdout, Write},
    sync::mpsc::{self, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};
use tracing::{debug, info, warn};

use crate::{
    cell,
    config::{ViewportSize, INTERVAL_RANGE_MS},
    Cell, SimHandle, Snapshot, ViewError, World,
};

pub use canvas::Canvas;
mod canvas;

const PAN_STEP: i64 = 4;
const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

pub struct View {
    thread: JoinHandle<Result<(), ViewError>>,
}

impl View {
    pub fn spawn<W>(handle: SimHandle<W>, size: ViewportSize) -> Self
    where
        W: World,
    {
        let thread = thread::spawn(move || view_loop(handle, size));
        Self { thread }
    }

    pub fn join(self) -> Result<(), ViewError> {
        self.thread.join().map_err(|_| ViewError::Panicked)?
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn offset(self) -> Cell {
        match self {
            Dir::Up => cell!(0, -1),
            Dir::Down => cell!(0, 1),
            Dir::Left => cell!(-1, 0),
            Dir::Right => cell!(1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    Pan(Dir),
    MoveCursor(Dir),
    ToggleCell,
    ToggleAnimation,
    Step,
    Clear,
    Accelerate,
    Decelerate,
}

pub fn command_for_key(key: Key) -> Option<InputCmd> {
    let command = match key {
        Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputCmd::Exit,
        Key::Up => InputCmd::MoveCursor(Dir::Up),
        Key::Down => InputCmd::MoveCursor(Dir::Down),
        Key::Left => InputCmd::MoveCursor(Dir::Left),
        Key::Right => InputCmd::MoveCursor(Dir::Right),
        Key::Char('k' | 'w') => InputCmd::Pan(Dir::Up),
        Key::Char('j' | 's') => InputCmd::Pan(Dir::Down),
        Key::Char('h' | 'a') => InputCmd::Pan(Dir::Left),
        Key::Char('l' | 'd') => InputCmd::Pan(Dir::Right),
        Key::Char(' ' | '\n') => InputCmd::ToggleCell,
        Key::Char('p') => InputCmd::ToggleAnimation,
        Key::Char('n') => InputCmd::Step,
        Key::Char('c') => InputCmd::Clear,
        Key::Char('+' | '=') => InputCmd::Accelerate,
        Key::Char('-') => InputCmd::Decelerate,
        _ => return None,
    };
    Some(command)
}

/// The visible window over the plane and the cursor standing in for the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Cell,
    pub cursor: Cell,
    pub size: ViewportSize,
}

impl Viewport {
    /// a window with its top-left corner at `origin` and the cursor in its middle.
    pub fn new(origin: Cell, size: ViewportSize) -> Self {
        let cursor = origin + cell!(size.width as i64 / 2, size.height as i64 / 2);
        Self {
            origin,
            cursor,
            size,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let local = cell - self.origin;
        (0..self.size.width as i64).contains(&local.x) && (0..self.size.height as i64).contains(&local.y)
    }

    /// moves the window, the cursor keeps its place on screen.
    pub fn pan(&mut self, dir: Dir) {
        let Cell { x, y } = dir.offset();
        let delta = cell!(x * PAN_STEP, y * PAN_STEP);
        self.origin = self.origin + delta;
        self.cursor = self.cursor + delta;
    }

    /// moves the cursor by one cell, dragging the window along at its edges.
    pub fn move_cursor(&mut self, dir: Dir) {
        self.cursor = self.cursor + dir.offset();
        if !self.contains(self.cursor) {
            self.origin = self.origin + dir.offset();
        }
    }
}

fn scaled_interval(interval: Duration, cmd: InputCmd) -> Duration {
    let millis = interval.as_millis() as u64;
    let millis = match cmd {
        InputCmd::Accelerate => millis / 2,
        InputCmd::Decelerate => millis.saturating_mul(2),
        _ => millis,
    };
    Duration::from_millis(millis.clamp(*INTERVAL_RANGE_MS.start(), *INTERVAL_RANGE_MS.end()))
}

/// forwards a command to the simulation, returns false once the user asked to quit.
pub fn handle_input<W>(
    cmd: InputCmd,
    viewport: &mut Viewport,
    handle: &SimHandle<W>,
    interval: Duration,
) -> Result<bool, ViewError>
where
    W: World,
{
    debug!(?cmd, "input");
    match cmd {
        InputCmd::Exit => return Ok(false),
        InputCmd::Pan(dir) => viewport.pan(dir),
        InputCmd::MoveCursor(dir) => viewport.move_cursor(dir),
        InputCmd::ToggleCell => handle.toggle(viewport.cursor)?,
        InputCmd::ToggleAnimation => handle.toggle_running()?,
        InputCmd::Step => handle.step()?,
        InputCmd::Clear => handle.clear()?,
        InputCmd::Accelerate | InputCmd::Decelerate => {
            handle.set_interval(scaled_interval(interval, cmd))?
        }
    }
    Ok(true)
}

pub fn draw<W>(snapshot: &Snapshot<W>, viewport: &Viewport) -> Canvas
where
    W: World,
{
    let ViewportSize { width, height } = viewport.size;
    let mut canvas = Canvas::new(width as usize, height as usize);
    canvas.draw_world(&snapshot.world, viewport.origin);

    let cursor = viewport.cursor - viewport.origin;
    let cursor_char = if snapshot.world.contains(viewport.cursor) {
        canvas::CURSOR_ON_ALIVE
    } else {
        canvas::CURSOR
    };
    canvas.layer(|pos| (pos == cursor).then_some(cursor_char));

    let state = if snapshot.running { "running" } else { "stopped" };
    canvas.set_status(format!(
        "gen {} | pop {} | {state} {}ms | ({}, {}) | space:toggle p:start/stop n:step c:clear +/-:speed q:quit",
        snapshot.generation,
        snapshot.world.len(),
        snapshot.interval.as_millis(),
        viewport.cursor.x,
        viewport.cursor.y,
    ));
    canvas
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let key = match key {
            Ok(key) => key,
            Err(error) => {
                warn!(%error, "failed to read key");
                break;
            }
        };
        let Some(command) = command_for_key(key) else {
            continue;
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

fn view_loop<W>(handle: SimHandle<W>, size: ViewportSize) -> Result<(), ViewError>
where
    W: World,
{
    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    let mut stdout = stdout().into_raw_mode()?;
    write!(stdout, "{}", termion::cursor::Hide)?;

    let mut viewport = Viewport::new(cell!(0, 0), size);
    let mut snapshot = handle.snapshot()?;
    'outer: loop {
        draw(&snapshot, &viewport).display(&mut stdout)?;

        let mut next = receiver.recv_timeout(VIEW_REFRESH_INTERVAL);
        while let Ok(cmd) = next {
            if !handle_input(cmd, &mut viewport, &handle, snapshot.interval)? {
                break 'outer;
            }
            next = receiver.try_recv().map_err(|_| RecvTimeoutError::Timeout);
        }
        if let Err(RecvTimeoutError::Disconnected) = next {
            break;
        }
        snapshot = handle.snapshot()?;
    }

    info!("leaving view");
    handle.shutdown()?;
    write!(
        stdout,
        "{}{}{}",
        termion::clear::All,
        termion::cursor::Goto(1, 1),
        termion::cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}
