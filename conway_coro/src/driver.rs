// driver.rs - Simulation task: ticks the shared grid on a tokio interval and obeys UI commands

use std::time::Duration;

use conway::SharedGrid;
use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Interval, MissedTickBehavior};

use crate::history::CycleHistory;
use crate::patterns;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Pause,
    ToggleRunning,
    Step,                 // One generation, only while paused
    Clear,
    ApplyPattern(usize),  // Index into patterns::PATTERNS
    Randomize(u64),
    SetDelay(Duration),
    Shutdown,
}

/// What the UI needs to show about the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub running: bool,
    pub cycle_detected: bool,
}

/// UI side of the driver.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<Command>,
    status:   watch::Receiver<Status>,
}

impl DriverHandle {
    pub fn send(&self, command: Command) {
        if let Err(err) = self.commands.send(command) {
            warn!("simulation driver has stopped, dropped {:?}", err.0);
        }
    }

    pub fn status(&self) -> Status {
        *self.status.borrow()
    }
}

/// Owns the tick loop. Only the driver advances the grid; the UI may still
/// toggle cells through its own `SharedGrid` clone at any time.
pub struct Driver {
    grid:     SharedGrid,
    commands: mpsc::UnboundedReceiver<Command>,
    status:   watch::Sender<Status>,
    state:    Status,
    history:  CycleHistory,
    delay:    Duration,
}

// Shortest tick the driver will run at; `time::interval` rejects a zero period.
const MIN_DELAY: Duration = Duration::from_millis(1);

fn ticker(delay: Duration) -> Interval {
    let mut interval = time::interval(delay.max(MIN_DELAY));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

impl Driver {
    pub fn new(grid: SharedGrid, delay: Duration) -> (Self, DriverHandle) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(Status::default());

        let mut driver = Self {
            grid,
            commands: command_rx,
            status:   status_tx,
            state:    Status::default(),
            history:  CycleHistory::new(),
            delay,
        };
        driver.reset();

        let handle = DriverHandle { commands: command_tx, status: status_rx };
        (driver, handle)
    }

    pub async fn run(mut self) {
        info!("simulation driver started, {:?} per generation", self.delay);
        let mut interval = ticker(self.delay);

        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    None | Some(Command::Shutdown) => break,
                    Some(Command::SetDelay(delay)) => {
                        debug!("frame delay {:?} -> {:?}", self.delay, delay);
                        self.delay = delay;
                        interval = ticker(delay);
                    }
                    Some(command) => self.handle(command),
                },
                _ = interval.tick(), if self.state.running => self.advance(),
            }
        }

        info!("simulation driver stopped at generation {}", self.state.generation);
    }

    fn handle(&mut self, command: Command) {
        debug!("driver command {command:?}");
        match command {
            Command::Start => {
                self.state.running = true;
                self.state.cycle_detected = false;
            }
            Command::Pause => self.state.running = false,
            Command::ToggleRunning => {
                self.state.running = !self.state.running;
                self.state.cycle_detected = false;
            }
            Command::Step => {
                if !self.state.running {
                    self.advance();
                }
            }
            Command::Clear => {
                self.grid.write(|grid| grid.clear());
                self.reset();
            }
            Command::ApplyPattern(index) => {
                let Some(pattern) = patterns::PATTERNS.get(index) else {
                    warn!("no pattern at index {index}");
                    return;
                };
                match self.grid.write(|grid| patterns::apply_pattern(grid, pattern)) {
                    Ok(placed) => info!("seeded {} ({placed} cells)", pattern.name),
                    Err(err)   => warn!("could not seed {}: {err}", pattern.name),
                }
                self.reset();
            }
            Command::Randomize(seed) => {
                match self.grid.write(|grid| patterns::apply_random_pattern(grid, seed)) {
                    Ok(placed) => info!("random fill with seed {seed} ({placed} cells)"),
                    Err(err)   => warn!("random fill failed: {err}"),
                }
                self.reset();
            }
            Command::SetDelay(_) | Command::Shutdown => {}
        }
        self.publish();
    }

    // New board: stop, rewind the counter and start the history from here.
    fn reset(&mut self) {
        self.state = Status::default();
        self.history.clear();
        self.grid.read(|grid| self.history.check(grid));
        self.publish();
    }

    fn advance(&mut self) {
        let cycled = self.grid.write(|grid| {
            grid.advance();
            self.history.check(grid)
        });
        self.state.generation += 1;

        if cycled {
            info!("cycle detected at generation {}, pausing", self.state.generation);
            self.state.running = false;
            self.state.cycle_detected = true;
        }
        self.publish();
    }

    fn publish(&self) {
        self.status.send_replace(self.state);
    }
}
