// settings.rs - Immutable front-end configuration built from defaults and command-line flags

use std::time::Duration;

use egui::Color32;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
}

/// Everything the window and the driver need. Never mutated after startup;
/// the engine itself only sees `rows` and `cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub spacing: f32,
    pub window_size: [f32; 2],
    pub caption: String,
    pub bg_color: Color32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub frame_delay: Duration,
    pub pattern: String,
    pub seed: u64,
    pub headless: Option<u64>,   // Generations to print instead of opening a window
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            cell_size: 15.0,
            spacing: 0.5,
            window_size: [1200.0, 800.0],
            caption: "Conway's Game of Life".to_owned(),
            bg_color: Color32::from_rgb(242, 179, 255),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            frame_delay: Duration::from_millis(200),
            pattern: "Glider".to_owned(),
            seed: 0x5EED_1234_ABCD_EF01,
            headless: None,
        }
    }
}

impl Settings {
    /// Parse flags (without the program name) on top of the defaults.
    pub fn from_args<I, S>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut settings = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| SettingsError::MissingValue(flag.clone()));
            match flag.as_str() {
                "--rows"     => settings.rows = parse(&flag, value()?)?,
                "--cols"     => settings.cols = parse(&flag, value()?)?,
                "--size"     => {
                    let n = parse(&flag, value()?)?;
                    settings.rows = n;
                    settings.cols = n;
                }
                "--delay-ms" => {
                    let raw = value()?;
                    let ms: u64 = parse(&flag, raw.clone())?;
                    if ms == 0 {
                        return Err(SettingsError::InvalidValue { flag: flag.clone(), value: raw });
                    }
                    settings.frame_delay = Duration::from_millis(ms);
                }
                "--pattern"  => settings.pattern = value()?,
                "--seed"     => settings.seed = parse(&flag, value()?)?,
                "--headless" => settings.headless = Some(parse(&flag, value()?)?),
                _            => return Err(SettingsError::UnknownFlag(flag.clone())),
            }
        }
        Ok(settings)
    }

    /// Width and height of the drawn board in points.
    pub fn board_size(&self) -> egui::Vec2 {
        let pitch = self.cell_size + self.spacing;
        egui::vec2(
            pitch * self.cols as f32 - self.spacing,
            pitch * self.rows as f32 - self.spacing,
        )
    }
}

fn parse<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidValue { flag: flag.to_owned(), value })
}
