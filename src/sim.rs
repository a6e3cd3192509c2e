use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use tracing::{debug, info, warn};

use crate::{engine, Cell, SimError, World};

/// The one authoritative board, owned by the simulation thread.
#[derive(Debug)]
pub struct State<W>
where
    W: World,
{
    world: W,
    generation: u64,
    running: bool,
    interval: Duration,
    last_update: Instant,
}

impl<W> State<W>
where
    W: World,
{
    pub fn new(world: W, interval: Duration, running: bool) -> Self {
        Self {
            world,
            generation: 0,
            running,
            interval,
            last_update: Instant::now(),
        }
    }

    pub fn advance(&mut self) {
        self.world = engine::advance(&self.world);
        self.generation += 1;
        self.last_update = Instant::now();
        debug!(
            generation = self.generation,
            population = self.world.len(),
            "advanced"
        );
    }

    fn set_running(&mut self, running: bool) {
        if running && !self.running {
            self.last_update = Instant::now();
        }
        self.running = running;
        info!(running, "animation toggled");
    }

    pub fn snapshot(&self) -> Snapshot<W> {
        Snapshot {
            world: self.world.clone(),
            generation: self.generation,
            running: self.running,
            interval: self.interval,
        }
    }

    /// applies a command, returns false when the loop should stop.
    fn apply(&mut self, cmd: SimCmd<W>) -> bool {
        match cmd {
            SimCmd::Toggle(cell) => self.world.toggle(cell),
            SimCmd::Clear => {
                self.world.clear();
                self.generation = 0;
            }
            SimCmd::Step => self.advance(),
            SimCmd::SetRunning(running) => self.set_running(running),
            SimCmd::ToggleRunning => self.set_running(!self.running),
            SimCmd::SetInterval(interval) => {
                debug!(interval_ms = interval.as_millis() as u64, "interval changed");
                self.interval = interval;
            }
            SimCmd::Snapshot(sender) => {
                if sender.send(self.snapshot()).is_err() {
                    warn!("snapshot requester went away");
                }
            }
            SimCmd::Shutdown => return false,
        }
        true
    }
}

/// A copy of the board and the animation settings at one instant.
#[derive(Debug, Clone)]
pub struct Snapshot<W> {
    pub world: W,
    pub generation: u64,
    pub running: bool,
    pub interval: Duration,
}

pub enum SimCmd<W>
where
    W: World,
{
    Toggle(Cell),
    Clear,
    Step,
    SetRunning(bool),
    ToggleRunning,
    SetInterval(Duration),
    Snapshot(mpsc::Sender<Snapshot<W>>),
    Shutdown,
}

/// Queue into the simulation thread. Commands are applied in the order they are sent.
pub struct SimHandle<W>
where
    W: World,
{
    sender: mpsc::Sender<SimCmd<W>>,
}

impl<W> Clone for SimHandle<W>
where
    W: World,
{
    fn clone(&self) -> Self {
        let sender = self.sender.clone();
        Self { sender }
    }
}

impl<W> SimHandle<W>
where
    W: World,
{
    fn send(&self, cmd: SimCmd<W>) -> Result<(), SimError> {
        self.sender.send(cmd).map_err(|_| SimError::Disconnected)
    }

    pub fn toggle(&self, cell: Cell) -> Result<(), SimError> {
        self.send(SimCmd::Toggle(cell))
    }

    pub fn clear(&self) -> Result<(), SimError> {
        self.send(SimCmd::Clear)
    }

    pub fn step(&self) -> Result<(), SimError> {
        self.send(SimCmd::Step)
    }

    pub fn set_running(&self, running: bool) -> Result<(), SimError> {
        self.send(SimCmd::SetRunning(running))
    }

    pub fn toggle_running(&self) -> Result<(), SimError> {
        self.send(SimCmd::ToggleRunning)
    }

    pub fn set_interval(&self, interval: Duration) -> Result<(), SimError> {
        self.send(SimCmd::SetInterval(interval))
    }

    pub fn shutdown(&self) -> Result<(), SimError> {
        self.send(SimCmd::Shutdown)
    }

    pub fn snapshot(&self) -> Result<Snapshot<W>, SimError> {
        let (sender, receiver) = mpsc::channel();
        self.send(SimCmd::Snapshot(sender))?;
        receiver.recv().map_err(|_| SimError::Disconnected)
    }
}

#[derive(Debug)]
pub struct Sim<W>
where
    W: World,
{
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd<W>>,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn spawn(actives: impl IntoIterator<Item = Cell>, interval: Duration, running: bool) -> Self {
        let mut world = W::default();
        for active in actives {
            world.add(active);
        }
        info!(population = world.len(), running, "starting simulation");
        let state = State::new(world, interval, running);

        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, state));

        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle<W> {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    /// waits for the loop to stop, either through a shutdown command or once every handle is dropped.
    pub fn join(self) -> Result<(), SimError> {
        let Self { thread, sender } = self;
        drop(sender);
        thread.join().map_err(|_| SimError::Panicked)
    }
}

fn sim_loop<W>(receiver: mpsc::Receiver<SimCmd<W>>, state: State<W>)
where
    W: World,
{
    let mut current_state = state;

    loop {
        let cmd = if current_state.running {
            let next_update = current_state.last_update + current_state.interval;
            match receiver.recv_timeout(next_update.saturating_duration_since(Instant::now())) {
                Ok(cmd) => Some(cmd),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match receiver.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            }
        };

        match cmd {
            Some(cmd) => {
                if !current_state.apply(cmd) {
                    break;
                }
            }
            None => current_state.advance(),
        }
    }
    info!(generation = current_state.generation, "simulation stopped");
}
