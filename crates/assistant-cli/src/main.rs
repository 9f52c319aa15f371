//! `assistant` CLI — meal-aware day plans plus the small personal-assistant tools.
//!
//! ## Usage
//!
//! ```sh
//! # Today's plan: meals pushed past conflicting events, then the numbered event list
//! assistant plan
//!
//! # Plan for another day
//! assistant plan --date 2026-03-02
//!
//! # Add, list and delete calendar events
//! assistant events add --title "Dentist" --date 2026-03-02 --time 10:30 --duration 45
//! assistant events list --date 2026-03-02
//! assistant events delete 2 --date 2026-03-02
//!
//! # Reminders and notes
//! assistant reminders add "Pay rent" --due "1st"
//! assistant notes save -i journal.txt
//!
//! # Render saved service responses
//! assistant weather --city Pune -i weather.json
//! assistant news --country in -i headlines.json
//!
//! # Compose an email (plain template unless a polished body is supplied)
//! assistant email --to sam@example.com --subject "Lunch" --note "moved to 2pm"
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod settings;

use anyhow::{Context, Result};
use assistant_kit::{compose, news, weather, EmailDraft, KitError, NewsResponse, NotesStore, Reminder, ReminderStore, TextPolisher, WeatherResponse};
use clap::{Parser, Subcommand};
use day_planner::calendar::DEFAULT_EVENT_MINUTES;
use day_planner::{parse_date, parse_time, CalendarStore, DayWindow, JsonCalendar, NewEvent, PlanningSession, Scheduler};
use settings::Settings;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "assistant",
    version,
    about = "Personal assistant: meal-aware day plans, events, reminders and notes"
)]
struct Cli {
    /// Settings file (defaults to ./assistant.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the day's plan with meals rescheduled around events
    Plan {
        /// Day to plan, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Add, list or delete calendar events
    Events {
        #[command(subcommand)]
        action: EventAction,
    },
    /// Manage the reminder / to-do list
    Reminders {
        #[command(subcommand)]
        action: ReminderAction,
    },
    /// Show or replace the notes journal
    Notes {
        #[command(subcommand)]
        action: NoteAction,
    },
    /// Render a current-weather response
    Weather {
        /// City the report is for
        #[arg(long)]
        city: String,
        /// Response JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the request URL instead of rendering a response
        #[arg(long)]
        show_request: bool,
    },
    /// Render a top-headlines response
    News {
        /// Two-letter country code
        #[arg(long, default_value = "in")]
        country: String,
        /// Response JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the request URL instead of rendering a response
        #[arg(long)]
        show_request: bool,
    },
    /// Compose an email from a subject and a short note
    Email {
        #[arg(long)]
        to: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        note: String,
        /// File holding a polished body produced by a text-generation service
        #[arg(long)]
        polished: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// List the day's events, numbered
    List {
        #[arg(long)]
        date: Option<String>,
    },
    /// Add a single event
    Add {
        #[arg(long)]
        title: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM, 24-hour
        #[arg(long)]
        time: String,
        /// Length in minutes
        #[arg(long, default_value_t = DEFAULT_EVENT_MINUTES)]
        duration: u32,
    },
    /// Delete an event by its number in the day's listing
    Delete {
        number: usize,
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum ReminderAction {
    /// List reminders, numbered
    List,
    /// Add a reminder
    Add {
        text: String,
        /// Free-form due date/time
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a reminder by its number
    Delete { number: usize },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Print the journal
    Show,
    /// Replace the journal
    Save {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Plan { date } => {
            let window = day_window(&settings, date.as_deref())?;
            let calendar = JsonCalendar::new(&settings.calendar_path);
            let session = PlanningSession::open(&calendar, window)
                .context("Failed to load calendar events")?;
            print_plan(&settings, &session)?;
        }
        Commands::Events { action } => run_events(&settings, action)?,
        Commands::Reminders { action } => run_reminders(&settings, action)?,
        Commands::Notes { action } => {
            let store = NotesStore::new(&settings.notes_path);
            match action {
                NoteAction::Show => print!("{}", store.load().context("Could not load notes")?),
                NoteAction::Save { input } => {
                    let text = read_input(input.as_deref())?;
                    store.save(&text).context("Could not save notes")?;
                    println!("Notes saved!");
                }
            }
        }
        Commands::Weather {
            city,
            input,
            show_request,
        } => {
            if show_request {
                let key = api_key(settings.weather_api_key.as_deref(), "weather_api_key")?;
                println!("{}", weather::request_url(&city, key)?);
            } else {
                let json = read_input(input.as_deref())?;
                let response = WeatherResponse::parse(&json)
                    .context("Failed to parse weather response")?
                    .into_success()?;
                println!("{}", response.report(&city));
            }
        }
        Commands::News {
            country,
            input,
            show_request,
        } => {
            if show_request {
                let key = api_key(settings.news_api_key.as_deref(), "news_api_key")?;
                println!("{}", news::request_url(&country, key)?);
            } else {
                let json = read_input(input.as_deref())?;
                let response = NewsResponse::parse(&json)
                    .context("Failed to parse news response")?
                    .into_success()?;
                for line in response.digest(&country) {
                    println!("{}", line);
                }
            }
        }
        Commands::Email {
            to,
            subject,
            note,
            polished,
        } => {
            let draft = EmailDraft::new(&to, &subject, &note)?;
            let email = compose(&draft, &PolishedFile(polished));
            println!("{}", email);
        }
    }

    Ok(())
}

fn run_events(settings: &Settings, action: EventAction) -> Result<()> {
    let calendar = JsonCalendar::new(&settings.calendar_path);

    match action {
        EventAction::List { date } => {
            let window = day_window(settings, date.as_deref())?;
            let session = PlanningSession::open(&calendar, window)
                .context("Failed to list events")?;
            println!("{}", session.render_listing());
        }
        EventAction::Add {
            title,
            date,
            time,
            duration,
        } => {
            let event = NewEvent {
                title,
                date: parse_date(&date)?,
                time: parse_time(&time)?,
                duration_minutes: duration,
                tz: settings.tz()?,
            };
            let id = calendar.add(&event).context("Failed to add event")?;
            println!("Event added: {}", id);
        }
        EventAction::Delete { number, date } => {
            let window = day_window(settings, date.as_deref())?;
            let session = PlanningSession::open(&calendar, window)
                .context("Failed to list events")?;
            let refreshed = session
                .delete(number, &calendar)
                .context("Failed to delete event")?;
            println!("Event deleted successfully.\n");
            print_plan(settings, &refreshed)?;
        }
    }
    Ok(())
}

fn run_reminders(settings: &Settings, action: ReminderAction) -> Result<()> {
    let store = ReminderStore::new(&settings.reminders_path);

    match action {
        ReminderAction::List => {
            let reminders = store.list().context("Could not load reminders")?;
            if reminders.is_empty() {
                println!("No reminders.");
            }
            for (i, reminder) in reminders.iter().enumerate() {
                println!("{}. {}", i + 1, reminder);
            }
        }
        ReminderAction::Add { text, due } => {
            store
                .add(Reminder::new(text, due)?)
                .context("Could not save reminders")?;
            println!("Reminder added.");
        }
        ReminderAction::Delete { number } => {
            let removed = store.remove(number)?;
            println!("Deleted: {}", removed);
        }
    }
    Ok(())
}

/// Plan heading and lines, a blank line, then the numbered listing.
fn print_plan(settings: &Settings, session: &PlanningSession) -> Result<()> {
    let anchors = settings.anchors(session.window())?;
    let plan = session.plan(&anchors, &Scheduler::new(settings.meal_gap_minutes));
    println!("{}\n\n{}", plan.render(session.date()), session.render_listing());
    Ok(())
}

fn day_window(settings: &Settings, date: Option<&str>) -> Result<DayWindow> {
    let tz = settings.tz()?;
    let window = match date {
        Some(date) => DayWindow::new(parse_date(date)?, tz)?,
        None => DayWindow::today(tz)?,
    };
    Ok(window)
}

fn api_key<'a>(key: Option<&'a str>, setting: &str) -> Result<&'a str> {
    key.filter(|k| !k.trim().is_empty())
        .ok_or_else(|| KitError::MissingConfig(setting.to_string()).into())
}

/// Polished body read from a file; without one, composition falls back to the plain template.
struct PolishedFile(Option<PathBuf>);

impl TextPolisher for PolishedFile {
    fn polish(&self, _prompt: &str) -> assistant_kit::error::Result<String> {
        match &self.0 {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Err(KitError::MissingConfig(
                "no text generation service configured".to_string(),
            )),
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
