// Calendar Navigator
// Main entry point: drives a navigator from commands read on stdin

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;

use calendar_navigator::services::normalizer;
use calendar_navigator::services::settings;
use calendar_navigator::{CalendarNavigator, DateInput, Effect, NavigatorConfig};

/// One line of the input script.
enum Command {
    Click(NaiveDateTime),
    Select(NaiveDateTime),
    DrillDown(NaiveDateTime),
    Up,
    Goto(NaiveDateTime),
    Next,
    Prev,
    Next2,
    Prev2,
    Hover(NaiveDateTime),
    Leave,
    State,
    Weeks,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or_else(|| anyhow!("empty command"))?;
    let rest = parts.collect::<Vec<_>>().join(" ");

    let date = || -> Result<NaiveDateTime> {
        if rest.is_empty() {
            return Err(anyhow!("'{}' needs a date", name));
        }
        Ok(normalizer::coerce(&DateInput::Text(rest.clone()))?)
    };

    let command = match name {
        "click" => Command::Click(date()?),
        "select" => Command::Select(date()?),
        "drill-down" => Command::DrillDown(date()?),
        "up" => Command::Up,
        "goto" => Command::Goto(date()?),
        "next" => Command::Next,
        "prev" => Command::Prev,
        "next2" => Command::Next2,
        "prev2" => Command::Prev2,
        "hover" => Command::Hover(date()?),
        "leave" => Command::Leave,
        "state" => Command::State,
        "weeks" => Command::Weeks,
        other => return Err(anyhow!("unknown command '{}'", other)),
    };
    Ok(command)
}

fn load_config() -> Result<NavigatorConfig> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(settings::default_config_path);

    match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            settings::load_config(&path)
        }
        None => Ok(NavigatorConfig::default()),
    }
}

fn run(navigator: &mut CalendarNavigator, command: Command, out: &mut impl Write) -> Result<()> {
    let effects: Vec<Effect> = match command {
        Command::Click(date) => navigator.click(date),
        Command::Select(date) => navigator.select(date),
        Command::DrillDown(date) => navigator.drill_down(date),
        Command::Up => navigator.drill_up(),
        Command::Goto(date) => navigator.set_active_start_date(date),
        Command::Next => navigator.next_page(),
        Command::Prev => navigator.previous_page(),
        Command::Next2 => navigator.next_page2(),
        Command::Prev2 => navigator.previous_page2(),
        Command::Hover(date) => {
            navigator.hover_over(date);
            Vec::new()
        }
        Command::Leave => {
            navigator.leave();
            Vec::new()
        }
        Command::State => Vec::new(),
        Command::Weeks => {
            writeln!(out, "{}", serde_json::to_string(&navigator.week_rows())?)?;
            return Ok(());
        }
    };

    for effect in &effects {
        writeln!(out, "{}", effect)?;
    }
    writeln!(out, "{}", serde_json::to_string(&navigator.render_state())?)?;
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Navigator");

    let config = load_config()?;
    let mut navigator =
        CalendarNavigator::new(&config).context("failed to build navigator from configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_command(trimmed) {
            Ok(command) => run(&mut navigator, command, &mut out)?,
            Err(err) => log::warn!("Skipping '{}': {:#}", trimmed, err),
        }
    }

    Ok(())
}
