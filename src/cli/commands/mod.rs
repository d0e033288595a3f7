//! Command implementations for chronowavel.
//!
//! Every handler returns the text to print. Handlers take the calendar
//! through the [`EventStore`] seam so they can run against any store.

mod add;
mod chat;
mod completions;

pub use add::{quick_add, read_transcript, voice};
pub use chat::chat;
pub use completions::completions;

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use colored::Colorize;

use crate::calendar::{CalendarManager, CalendarView, EventUpdate, ImportRecord, ViewMode};
use crate::cli::args::{EditArgs, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::{parse_clock, parse_iso_date, parse_year_month};
use crate::error::ChronoError;
use crate::output::{
    format_event, format_events, format_month, format_notification, format_stats, to_json,
    DisplayOptions,
};
use crate::features::notify::Notification;
use crate::storage::{EventStore, JsonFileStore};

/// Everything a command needs besides the calendar itself.
#[derive(Debug, Clone)]
pub struct Context {
    /// Where config and data live.
    pub paths: Paths,
    /// Loaded settings.
    pub config: Config,
    /// Output format for this invocation.
    pub format: OutputFormat,
    /// Reference time for parsing and relative views.
    pub now: NaiveDateTime,
}

impl Context {
    /// Build a context for the local wall clock.
    #[must_use]
    pub fn new(paths: Paths, config: Config, format: OutputFormat) -> Self {
        Self {
            paths,
            config,
            format,
            now: Local::now().naive_local(),
        }
    }

    /// Pin the reference time.
    #[must_use]
    pub const fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Display preferences from the calendar settings.
    #[must_use]
    pub fn display(&self) -> DisplayOptions {
        DisplayOptions::from(&self.config.calendar)
    }

    /// Open the calendar stored under the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the event file exists but cannot be read.
    pub fn open_calendar(&self) -> Result<CalendarManager<JsonFileStore>, ChronoError> {
        CalendarManager::load(JsonFileStore::open_at(&self.paths.events_file))
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list<S: EventStore>(
    manager: &CalendarManager<S>,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let mut events: Vec<_> = manager.events().iter().collect();
    events.sort_by_key(|e| e.starts_at());
    format_events(&events, "All events", ctx.format, &ctx.display())
}

/// Execute today command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn today<S: EventStore>(
    manager: &CalendarManager<S>,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let events = manager.events_on(ctx.now.date());
    format_events(&events, "Today", ctx.format, &ctx.display())
}

/// Execute agenda command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn agenda<S: EventStore>(
    manager: &CalendarManager<S>,
    days: Option<u32>,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let days = days.unwrap_or(ctx.config.calendar.agenda_days);
    let events = manager.agenda(ctx.now.date(), days);
    let title = format!("Next {days} days");
    format_events(&events, &title, ctx.format, &ctx.display())
}

/// Execute upcoming command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn upcoming<S: EventStore>(
    manager: &CalendarManager<S>,
    limit: usize,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let events = manager.upcoming(ctx.now, limit);
    format_events(&events, "Upcoming", ctx.format, &ctx.display())
}

/// Execute search command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn search<S: EventStore>(
    manager: &CalendarManager<S>,
    query: &str,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let events = manager.search(query.trim());
    let title = format!("Matching '{}'", query.trim());
    format_events(&events, &title, ctx.format, &ctx.display())
}

/// Execute export command
///
/// Without a file the JSON array itself is the output.
///
/// # Errors
///
/// Returns a storage error if the file cannot be written.
pub fn export<S: EventStore>(
    manager: &CalendarManager<S>,
    file: Option<&Path>,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let json = manager.export_json()?;
    let Some(file) = file else {
        return Ok(json);
    };

    std::fs::write(file, json).map_err(|e| {
        ChronoError::Storage(format!("Failed to write {}: {e}", file.display()))
    })?;
    tracing::info!(path = %file.display(), "exported events");
    let note = Notification::success(format!(
        "Exported {} events to {}",
        manager.events().len(),
        file.display()
    ));
    format_notification(&note, ctx.format)
}

/// Execute import command
///
/// # Errors
///
/// Returns a storage error if the file cannot be read,
/// `ChronoError::InvalidInput` if it is not a JSON array of events,
/// `ChronoError::InvalidEvent` if an entry is invalid, or a storage error
/// if saving fails.
pub fn import<S: EventStore>(
    manager: &mut CalendarManager<S>,
    file: &Path,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        ChronoError::Storage(format!("Failed to read {}: {e}", file.display()))
    })?;
    let records: Vec<ImportRecord> = serde_json::from_str(&contents).map_err(|e| {
        ChronoError::InvalidInput(format!("Invalid import file {}: {e}", file.display()))
    })?;

    let imported = manager.import_events(records, ctx.now)?;
    let note = Notification::success(format!("Imported {} events", imported.len()));
    format_notification(&note, ctx.format)
}

/// Execute month command
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` if `month` is not `YYYY-MM`.
pub fn month<S: EventStore>(
    manager: &CalendarManager<S>,
    month: Option<&str>,
    offset: i32,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let today = ctx.now.date();
    let mut view = CalendarView::new(today, ctx.config.calendar.default_view);
    if let Some(month) = month {
        view.select(parse_year_month(month)?);
    }
    view.shift(offset);

    let days = manager.month_grid(
        view.current_month(),
        today,
        ctx.config.calendar.first_day_of_week,
    );
    format_month(&view.month_name(), &days, ctx.format, &ctx.display())
}

/// Execute view command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn view<S: EventStore>(
    manager: &CalendarManager<S>,
    mode: Option<ViewMode>,
    ctx: &Context,
) -> Result<String, ChronoError> {
    match mode.unwrap_or(ctx.config.calendar.default_view) {
        ViewMode::Month => month(manager, None, 0, ctx),
        ViewMode::Agenda => agenda(manager, None, ctx),
    }
}

/// Execute show command
///
/// # Errors
///
/// Returns `ChronoError::NotFound` if no event matches `id`.
pub fn show<S: EventStore>(
    manager: &CalendarManager<S>,
    id: &str,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let id = manager.resolve_id(id)?;
    let event = manager
        .event(&id)
        .ok_or_else(|| ChronoError::NotFound(id.clone()))?;
    format_event(event, ctx.format, &ctx.display())
}

/// Execute edit command
///
/// # Errors
///
/// Returns an error if the event is unknown, a field value is invalid, no
/// field was given, or saving fails.
pub fn edit<S: EventStore>(
    manager: &mut CalendarManager<S>,
    args: EditArgs,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let id = manager.resolve_id(&args.id)?;

    let update = EventUpdate {
        title: args.title,
        description: args.description,
        date: args.date.as_deref().map(parse_iso_date).transpose()?,
        time: args.time.as_deref().map(parse_clock).transpose()?,
        duration: args.duration,
        color: args.color,
        category: args.category,
        reminders: args.reminders,
        location: args.location,
        attendees: args.attendees,
        priority: args.priority,
        notes: args.notes,
    };
    if update.is_empty() {
        return Err(ChronoError::InvalidInput(
            "Nothing to change; pass at least one field flag".to_string(),
        ));
    }

    let event = manager.update_event(&id, update, ctx.now)?;
    match ctx.format {
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Updated:".green().bold(),
            crate::output::format_event_pretty(&event, &ctx.display())
        )),
        OutputFormat::Json => to_json(&event),
    }
}

/// Execute delete command
///
/// # Errors
///
/// Returns `ChronoError::NotFound` if no event matches `id`, or a storage
/// error if saving fails.
pub fn delete<S: EventStore>(
    manager: &mut CalendarManager<S>,
    id: &str,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let id = manager.resolve_id(id)?;
    let removed = manager.delete_event(&id)?;
    let note = Notification::success(format!("Deleted: {}", removed.title));
    format_notification(&note, ctx.format)
}

/// Execute stats command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn stats<S: EventStore>(
    manager: &CalendarManager<S>,
    ctx: &Context,
) -> Result<String, ChronoError> {
    format_stats(&manager.stats(ctx.now), ctx.format)
}

/// Execute clear command
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` without `--yes`, or a storage error
/// if the store cannot be cleared.
pub fn clear<S: EventStore>(
    manager: &mut CalendarManager<S>,
    yes: bool,
    ctx: &Context,
) -> Result<String, ChronoError> {
    if !yes {
        return Err(ChronoError::InvalidInput(
            "Refusing to delete every event without --yes".to_string(),
        ));
    }

    let count = manager.clear()?;
    let note = Notification::success(format!("Removed {count} events"));
    format_notification(&note, ctx.format)
}

/// Execute config command
///
/// # Errors
///
/// Returns an error if the config file cannot be written or serialized.
pub fn config(init: bool, ctx: &Context) -> Result<String, ChronoError> {
    if init {
        if ctx.paths.config_file.exists() {
            let note = Notification::warning(format!(
                "Config already exists at {}",
                ctx.paths.config_file.display()
            ));
            return format_notification(&note, ctx.format);
        }
        Config::default().save(&ctx.paths)?;
        let note = Notification::success(format!(
            "Wrote {}",
            ctx.paths.config_file.display()
        ));
        return format_notification(&note, ctx.format);
    }

    match ctx.format {
        OutputFormat::Pretty => Ok(format!(
            "{} {}\n{}",
            "#".dimmed(),
            ctx.paths.config_file.display().to_string().dimmed(),
            ctx.config.to_yaml()?
        )),
        OutputFormat::Json => to_json(&ctx.config),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::Context;
    use crate::cli::args::OutputFormat;
    use crate::config::{Config, DateFormat, Paths, TimeFormat};

    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    pub fn context(format: OutputFormat) -> Context {
        let mut config = Config::default();
        config.calendar.time_format = TimeFormat::TwentyFour;
        config.calendar.date_format = DateFormat::Ymd;
        Context::new(Paths::with_root("/nonexistent/chronowavel".into()), config, format).at(now())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{context, now};
    use super::*;
    use crate::calendar::{test_manager, EventDetails};
    use crate::core::{Category, EventColor};
    use crate::features::nlp::parse_natural_language;

    fn seeded() -> CalendarManager<crate::storage::MockEventStore> {
        let mut manager = test_manager();
        for text in ["Team meeting tomorrow at 3pm", "Yoga today 7pm", "Gym session Friday 6am"] {
            manager
                .add_event(parse_natural_language(text, now()), EventDetails::default(), now())
                .unwrap();
        }
        manager
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_today_json_lists_only_today() {
        let manager = seeded();
        let out = today(&manager, &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["title"], "Yoga");
    }

    #[test]
    fn test_list_sorted_by_start() {
        let manager = seeded();
        let out = list(&manager, &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let titles: Vec<_> = value["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, ["Yoga", "Team meeting tomorrow", "Gym sessi"]);
    }

    #[test]
    fn test_agenda_window() {
        let manager = seeded();
        let out = agenda(&manager, Some(2), &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["list"], "Next 2 days");
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn test_month_with_offset() {
        plain();
        let manager = seeded();
        let out = month(&manager, Some("2026-12"), -1, &context(OutputFormat::Pretty)).unwrap();
        assert!(out.starts_with("November 2026"));

        let out = month(&manager, None, 0, &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["month"], "October 2026");
        assert_eq!(value["days"].as_array().unwrap().len(), 42);
    }

    #[test]
    fn test_view_follows_config() {
        let manager = seeded();
        let mut ctx = context(OutputFormat::Json);

        let out = view(&manager, None, &ctx).unwrap();
        assert!(out.contains("\"month\": \"October 2026\""));

        ctx.config.calendar.default_view = ViewMode::Agenda;
        let out = view(&manager, None, &ctx).unwrap();
        assert!(out.contains("\"list\": \"Next 7 days\""));

        let out = view(&manager, Some(ViewMode::Month), &ctx).unwrap();
        assert!(out.contains("October 2026"));
    }

    #[test]
    fn test_month_rejects_bad_input() {
        let manager = seeded();
        let err = month(&manager, Some("October"), 0, &context(OutputFormat::Json)).unwrap_err();
        assert!(matches!(err, ChronoError::InvalidInput(_)));
    }

    #[test]
    fn test_edit_changes_fields() {
        let mut manager = seeded();
        let id = manager.events()[0].id.clone();
        let args = EditArgs {
            id: id.clone(),
            title: None,
            description: None,
            date: Some("2026-10-21".to_string()),
            time: Some("16:30".to_string()),
            duration: None,
            color: Some(EventColor::Red),
            category: Some(Category::Personal),
            location: None,
            notes: None,
            priority: None,
            attendees: None,
            reminders: None,
        };

        edit(&mut manager, args, &context(OutputFormat::Json)).unwrap();
        let event = manager.event(&id).unwrap();
        assert_eq!(event.date.to_string(), "2026-10-21");
        assert_eq!(event.time.format("%H:%M").to_string(), "16:30");
        assert_eq!(event.color, EventColor::Red);
        assert_eq!(event.updated_at, Some(now()));
    }

    #[test]
    fn test_edit_requires_a_field() {
        let mut manager = seeded();
        let id = manager.events()[0].id.clone();
        let args = EditArgs {
            id,
            title: None,
            description: None,
            date: None,
            time: None,
            duration: None,
            color: None,
            category: None,
            location: None,
            notes: None,
            priority: None,
            attendees: None,
            reminders: None,
        };
        let err = edit(&mut manager, args, &context(OutputFormat::Json)).unwrap_err();
        assert!(matches!(err, ChronoError::InvalidInput(_)));
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut manager = seeded();
        let err = delete(&mut manager, "evt_missing", &context(OutputFormat::Json)).unwrap_err();
        assert!(matches!(err, ChronoError::NotFound(_)));
        assert_eq!(manager.events().len(), 3);
    }

    #[test]
    fn test_show_by_id() {
        plain();
        let manager = seeded();
        let id = manager.events()[1].id.clone();
        let out = show(&manager, &id, &context(OutputFormat::Pretty)).unwrap();
        assert!(out.contains("Yoga"));
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let mut manager = seeded();
        assert!(clear(&mut manager, false, &context(OutputFormat::Json)).is_err());
        assert_eq!(manager.events().len(), 3);

        let out = clear(&mut manager, true, &context(OutputFormat::Json)).unwrap();
        assert!(out.contains("Removed 3 events"));
        assert!(manager.events().is_empty());
    }

    #[test]
    fn test_stats_json() {
        let manager = seeded();
        let out = stats(&manager, &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["upcoming"], 3);
    }

    #[test]
    fn test_config_json() {
        let out = config(false, &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["calendar"]["time_format"], "24");
        assert_eq!(value["calendar"]["agenda_days"], 7);
    }

    #[test]
    fn test_upcoming_json() {
        let manager = seeded();
        let out = upcoming(&manager, 2, &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["list"], "Upcoming");
        assert_eq!(value["count"], 2);
        assert_eq!(value["items"][0]["title"], "Yoga");
        assert_eq!(value["items"][1]["title"], "Team meeting tomorrow");
    }

    #[test]
    fn test_search_json() {
        let manager = seeded();
        let out = search(&manager, " GYM ", &context(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["list"], "Matching 'GYM'");
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["title"], "Gym sessi");
    }

    #[test]
    fn test_search_no_match_pretty() {
        plain();
        let manager = seeded();
        let out = search(&manager, "swim", &context(OutputFormat::Pretty)).unwrap();
        assert!(out.contains("No events"));
    }

    #[test]
    fn test_export_to_stdout_is_the_collection() {
        let manager = seeded();
        let out = export(&manager, None, &context(OutputFormat::Pretty)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["title"], "Team meeting tomorrow");
    }

    #[test]
    fn test_export_then_import_file() {
        plain();
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("backup.json");

        let source = seeded();
        let out = export(&source, Some(&file), &context(OutputFormat::Pretty)).unwrap();
        assert!(out.contains("Exported 3 events"));

        let mut target = test_manager();
        let out = import(&mut target, &file, &context(OutputFormat::Pretty)).unwrap();
        assert!(out.contains("Imported 3 events"));
        assert_eq!(target.events().len(), 3);
        assert_eq!(target.events()[1].title, "Yoga");
    }

    #[test]
    fn test_import_rejects_bad_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut manager = test_manager();
        let ctx = context(OutputFormat::Json);

        let missing = dir.path().join("missing.json");
        let err = import(&mut manager, &missing, &ctx).unwrap_err();
        assert!(matches!(err, ChronoError::Storage(_)));

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "{\"not\": \"a list\"}").unwrap();
        let err = import(&mut manager, &garbage, &ctx).unwrap_err();
        assert!(matches!(err, ChronoError::InvalidInput(_)));

        assert!(manager.events().is_empty());
    }
}
