//! Settings for the `assistant` binary.
//!
//! Layered, lowest to highest precedence:
//! 1. built-in defaults
//! 2. `assistant.toml` in the working directory, or the file given with `--config`
//! 3. environment variables prefixed with `ASSISTANT_` (e.g., `ASSISTANT_TIMEZONE`)

use anyhow::{Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use day_planner::day::{DEFAULT_MEALS, DEFAULT_MEAL_MINUTES};
use day_planner::scheduler::DEFAULT_GAP_MINUTES;
use day_planner::{parse_time, parse_timezone, Anchor, DayWindow};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One meal anchor as configured: `{ name = "Lunch", time = "13:00", duration_minutes = 30 }`.
#[derive(Debug, Clone, Deserialize)]
pub struct MealSetting {
    pub name: String,
    pub time: String,
    #[serde(default = "default_meal_minutes")]
    pub duration_minutes: u32,
}

fn default_meal_minutes() -> u32 {
    DEFAULT_MEAL_MINUTES
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timezone: String,
    pub calendar_path: PathBuf,
    pub reminders_path: PathBuf,
    pub notes_path: PathBuf,
    pub meal_gap_minutes: u32,
    pub meals: Vec<MealSetting>,
    pub weather_api_key: Option<String>,
    pub news_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: "Asia/Kolkata".to_string(),
            calendar_path: PathBuf::from("calendar.json"),
            reminders_path: PathBuf::from("reminders.json"),
            notes_path: PathBuf::from("notes.txt"),
            meal_gap_minutes: DEFAULT_GAP_MINUTES,
            meals: DEFAULT_MEALS
                .iter()
                .map(|&(name, hour, minute)| MealSetting {
                    name: name.to_string(),
                    time: format!("{:02}:{:02}", hour, minute),
                    duration_minutes: DEFAULT_MEAL_MINUTES,
                })
                .collect(),
            weather_api_key: None,
            news_api_key: None,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("assistant").required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("ASSISTANT"))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(
            timezone = %settings.timezone,
            calendar = %settings.calendar_path.display(),
            meals = settings.meals.len(),
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone).context("Invalid `timezone` setting")
    }

    /// The configured meals as anchors on `window`'s day.
    pub fn anchors(&self, window: &DayWindow) -> Result<Vec<Anchor>> {
        self.meals
            .iter()
            .map(|meal| {
                let time = parse_time(&meal.time)
                    .with_context(|| format!("Invalid time for meal '{}'", meal.name))?;
                window
                    .anchor(&meal.name, time, meal.duration_minutes)
                    .with_context(|| format!("Invalid meal '{}'", meal.name))
            })
            .collect()
    }
}
