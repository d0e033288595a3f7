use std::fmt::Write;

use chrono::{Datelike, Weekday};
use colored::{ColoredString, Colorize};

use super::DisplayOptions;
use crate::calendar::{CalendarDay, Event, EventStats, Priority};
use crate::core::EventColor;
use crate::features::nlp::ParseReport;
use crate::features::notify::{Notification, NotificationKind};

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn swatch(color: EventColor) -> ColoredString {
    let (r, g, b) = color.rgb();
    "●".truecolor(r, g, b)
}

fn priority_marker(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "!".red().bold(),
        Priority::Medium | Priority::Low => " ".normal(),
    }
}

/// Format a list of events as a pretty table
pub fn format_events_pretty(events: &[&Event], title: &str, display: &DisplayOptions) -> String {
    if events.is_empty() {
        return format!("{title} (0 events)\n  No events");
    }

    let mut output = format!("{} ({} events)\n", title, events.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for event in events {
        let _ = writeln!(
            output,
            "{}{} {}  {:>8}  {}  {}  {}",
            priority_marker(event.priority),
            swatch(event.color),
            display.date_format.render(event.date).dimmed(),
            display.time_format.render(event.time).yellow(),
            event.title.bold(),
            format!("{}m", event.duration).dimmed(),
            event.id.dimmed()
        );
    }

    output
}

/// Format a single event as pretty output
pub fn format_event_pretty(event: &Event, display: &DisplayOptions) -> String {
    let mut output = format!("{} {}\n", swatch(event.color), event.title.bold());
    let _ = writeln!(output, "  {}: {}", "ID".dimmed(), event.id);
    let _ = writeln!(
        output,
        "  {}: {} at {}",
        "When".dimmed(),
        display.date_format.render(event.date),
        display.time_format.render(event.time)
    );
    let _ = writeln!(output, "  {}: {} minutes", "Duration".dimmed(), event.duration);
    let _ = writeln!(output, "  {}: {}", "Category".dimmed(), event.category.label());
    let _ = writeln!(output, "  {}: {}", "Color".dimmed(), event.color.name());
    let _ = writeln!(output, "  {}: {}", "Priority".dimmed(), event.priority);

    if !event.description.is_empty() {
        let _ = writeln!(output, "  {}: {}", "Description".dimmed(), event.description);
    }

    if !event.location.is_empty() {
        let _ = writeln!(output, "  {}: {}", "Location".dimmed(), event.location);
    }

    if !event.attendees.is_empty() {
        let _ = writeln!(
            output,
            "  {}: {}",
            "Attendees".dimmed(),
            event.attendees.join(", ")
        );
    }

    if !event.reminders.is_empty() {
        let reminders = event
            .reminders
            .iter()
            .map(|m| format!("{m}m before"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(output, "  {}: {}", "Reminders".dimmed(), reminders);
    }

    if !event.notes.is_empty() {
        let _ = writeln!(output, "  {}: {}", "Notes".dimmed(), event.notes);
    }

    let _ = writeln!(
        output,
        "  {}: {}",
        "Created".dimmed(),
        event.created_at.format("%Y-%m-%d %H:%M")
    );

    if let Some(updated) = &event.updated_at {
        let _ = writeln!(
            output,
            "  {}: {}",
            "Updated".dimmed(),
            updated.format("%Y-%m-%d %H:%M")
        );
    }

    output
}

/// Format a month grid with event markers, followed by the month's events
pub fn format_month_pretty(heading: &str, days: &[CalendarDay], display: &DisplayOptions) -> String {
    let mut output = format!("{}\n", heading.bold());

    let first = usize::from(display.first_day_of_week % 7);
    let header = (0..7)
        .map(|i| WEEKDAY_HEADERS[(first + i) % 7])
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(output, "{}", header.dimmed());

    for week in days.chunks(7) {
        let line = week
            .iter()
            .map(|day| {
                let number = format!("{:>2}", day.date.day());
                let number = if day.is_today {
                    number.reversed().bold()
                } else if !day.is_current_month {
                    number.dimmed()
                } else if day.is_weekend {
                    number.cyan()
                } else {
                    number.normal()
                };
                let marker = day
                    .events
                    .first()
                    .map_or_else(|| " ".normal(), |e| swatch(e.color));
                format!("{number}{marker}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(output, "{line}");
    }

    let events: Vec<&Event> = days
        .iter()
        .filter(|d| d.is_current_month)
        .flat_map(|d| d.events.iter())
        .collect();

    if !events.is_empty() {
        output.push('\n');
        for event in events {
            let weekday = short_weekday(event.date.weekday());
            let _ = writeln!(
                output,
                "{} {} {:>2}  {:>8}  {}",
                swatch(event.color),
                weekday.dimmed(),
                event.date.day(),
                display.time_format.render(event.time).yellow(),
                event.title
            );
        }
    }

    output
}

fn short_weekday(weekday: Weekday) -> &'static str {
    WEEKDAY_HEADERS[weekday.num_days_from_sunday() as usize]
}

/// Format event statistics
pub fn format_stats_pretty(stats: &EventStats) -> String {
    let mut output = format!("{}\n", "Calendar".bold());
    output.push_str(&"─".repeat(30));
    output.push('\n');
    let _ = writeln!(output, "  {:<12}{}", "Total", stats.total.to_string().bold());
    let _ = writeln!(output, "  {:<12}{}", "Upcoming", stats.upcoming.to_string().green());
    let _ = writeln!(output, "  {:<12}{}", "This week", stats.this_week.to_string().yellow());
    output
}

/// Format what the parser made of some text
pub fn format_parse_report_pretty(report: &ParseReport, display: &DisplayOptions) -> String {
    let request = &report.request;
    let mark = |hit: bool| if hit { "✓".green() } else { "·".dimmed() };

    let mut output = format!("{} {}\n", "Parsed:".cyan().bold(), request.title.bold());
    let _ = writeln!(
        output,
        "  {} {}: {}",
        mark(report.cues.has_date()),
        "Date".dimmed(),
        display.date_format.render(request.date)
    );
    let _ = writeln!(
        output,
        "  {} {}: {}",
        mark(report.cues.time),
        "Time".dimmed(),
        display.time_format.render(request.time)
    );
    let _ = writeln!(
        output,
        "  {} {}: {} minutes",
        mark(report.cues.duration),
        "Duration".dimmed(),
        request.duration
    );
    let _ = writeln!(
        output,
        "  {} {}: {}",
        mark(report.cues.category),
        "Category".dimmed(),
        request.category.label()
    );
    let _ = writeln!(
        output,
        "  {} {}: {} {}",
        mark(report.cues.color),
        "Color".dimmed(),
        swatch(request.color),
        request.color.name()
    );

    if report.is_fallback() {
        let _ = writeln!(
            output,
            "{}",
            "Nothing besides the title was recognized; defaults were used.".yellow()
        );
    }

    output
}

/// Format a notification as a single colored line
pub fn format_notification_pretty(notification: &Notification) -> String {
    let icon = notification.kind.icon();
    let icon = match notification.kind {
        NotificationKind::Success => icon.green().bold(),
        NotificationKind::Error => icon.red().bold(),
        NotificationKind::Warning => icon.yellow().bold(),
        NotificationKind::Info => icon.blue().bold(),
    };
    format!("{icon} {}", notification.message)
}
