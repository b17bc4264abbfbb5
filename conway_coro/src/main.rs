// main.rs - Conway's Game of Life: egui front end with the simulation on a tokio task

use std::time::Duration;

use anyhow::{Context, anyhow};
use conway::{Grid, SharedGrid};
use eframe::egui;
use egui::Color32;
use log::info;

mod board;
mod driver;
mod history;
mod patterns;
mod settings;
mod ui;

use driver::{Command, Driver, DriverHandle};
use settings::Settings;

// Room for the toolbar rows above the board and the statistics below it.
const CHROME: [f32; 2] = [40.0, 240.0];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_args(std::env::args().skip(1)).context("bad command line")?;

    if let Some(generations) = settings.headless {
        let mut grid = Grid::new(settings.rows, settings.cols)?;
        let dump = run_headless(&mut grid, &settings, generations)?;
        print!("{dump}");
        return Ok(());
    }

    let grid = SharedGrid::with_dimensions(settings.rows, settings.cols)?;
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let (driver, handle) = Driver::new(grid.clone(), settings.frame_delay);
    runtime.spawn(driver.run());

    let app = GameOfLife::new(settings.clone(), grid, handle);
    if let Some(index) = patterns::index_of(&settings.pattern) {
        app.driver.send(Command::ApplyPattern(index));
    }

    let board = settings.board_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.caption.clone())
            .with_inner_size([
                settings.window_size[0].max(board.x + CHROME[0]),
                settings.window_size[1].max(board.y + CHROME[1]),
            ]),
        ..Default::default()
    };

    let caption = settings.caption.clone();
    eframe::run_native(
        &caption,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))?;

    runtime.shutdown_timeout(Duration::from_millis(200));
    info!("bye");
    Ok(())
}

/// Seed the configured pattern, then dump the grid after each generation.
fn run_headless(grid: &mut Grid, settings: &Settings, generations: u64) -> anyhow::Result<String> {
    let pattern = patterns::find(&settings.pattern)
        .with_context(|| format!("unknown pattern {:?}", settings.pattern))?;
    patterns::apply_pattern(grid, pattern)?;
    info!("running {} for {generations} generations on {}x{}", pattern.name, grid.rows(), grid.cols());

    let mut out = String::new();
    for _ in 0..generations {
        grid.advance();
        out.push_str(&grid.dump());
    }
    Ok(out)
}

/// Presentation state. The grid itself is shared with the driver task.
pub struct GameOfLife {
    pub settings: Settings,
    pub grid: SharedGrid,
    pub driver: DriverHandle,
    pub delay: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub random_seed: u64,
}

impl GameOfLife {
    pub fn new(settings: Settings, grid: SharedGrid, driver: DriverHandle) -> Self {
        let selected_pattern = patterns::index_of(&settings.pattern).unwrap_or(0);
        Self {
            delay: settings.frame_delay,
            live_color: settings.live_color,
            dead_color: settings.dead_color,
            random_seed: settings.seed,
            selected_pattern,
            settings,
            grid,
            driver,
        }
    }

    pub fn randomize(&mut self) {
        self.driver.send(Command::Randomize(self.random_seed));
        self.random_seed = self.random_seed.wrapping_add(1);
    }
}

impl Drop for GameOfLife {
    fn drop(&mut self) {
        self.driver.send(Command::Shutdown);
    }
}
