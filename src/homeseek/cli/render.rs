//! # Rendering
//!
//! Turns command results into terminal text. Every function here returns a
//! `String` (printing happens in `commands.rs`), which keeps output testable.
//!
//! Layout math (width, truncation, padding) is unicode-aware; colors come
//! from `colored` and switch off automatically when stdout is not a terminal.

use chrono::{Local, NaiveDate};
use colored::*;
use homeseek::api::{CmdMessage, DetailOutcome, MessageLevel};
use homeseek::model::{PropertyId, PropertyRecord};
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TIME_WIDTH: usize = 14;
pub const FAVORITE_MARKER: &str = "★";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// One line per record: marker, id, summary, postcode and age.
pub fn render_listing(
    records: &[PropertyRecord],
    favorites: &HashSet<PropertyId>,
    line_width: usize,
) -> String {
    if records.is_empty() {
        return "No properties found.\n".to_string();
    }

    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len() + 2)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        let marker = if favorites.contains(&record.id) {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };
        let id = format!("{:<width$}", format!("#{}", record.id), width = id_width);

        let mut summary = format!(
            "{} · {} · {} bed",
            format_price(record.price),
            record.property_type,
            record.bedrooms
        );
        if !record.postcode.is_empty() {
            summary.push_str(&format!(" · {}", record.postcode));
        }
        if !record.location.is_empty() {
            summary.push_str(&format!(" · {}", record.location));
        }

        let fixed = marker.width() + id.width() + TIME_WIDTH;
        let available = line_width.saturating_sub(fixed);
        let summary = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary.width());
        let age = format_added(record.added, Local::now().date_naive());

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            marker.yellow(),
            id.bold(),
            summary,
            " ".repeat(padding),
            age.dimmed()
        ));
    }
    out
}

pub fn render_detail(outcome: &DetailOutcome) -> String {
    match outcome {
        DetailOutcome::NotFound { raw_id } => {
            format!("{} {}\n", "No property with id".red(), raw_id)
        }
        DetailOutcome::Found {
            record,
            is_favorite,
        } => {
            let mut out = String::new();
            let star = if *is_favorite {
                format!(" {}", FAVORITE_MARKER.yellow())
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{} {}{}\n",
                format!("#{}", record.id).yellow(),
                format!("{} · {}", record.property_type, format_price(record.price)).bold(),
                star
            ));
            out.push_str("--------------------------------\n");
            push_field(&mut out, "Bedrooms", &record.bedrooms.to_string());
            push_field(&mut out, "Location", &record.location);
            push_field(&mut out, "Postcode", &record.postcode);
            push_field(&mut out, "Tenure", &record.tenure);
            push_field(
                &mut out,
                "Added",
                &record.added.format("%-d %B %Y").to_string(),
            );
            push_field(&mut out, "Link", &record.url);
            if !record.images.is_empty() {
                push_field(&mut out, "Images", &record.images.len().to_string());
            }
            if !record.description.is_empty() {
                out.push('\n');
                out.push_str(record.description.trim());
                out.push('\n');
            }
            out
        }
    }
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let label = format!("{:<10}", format!("{}:", label));
    out.push_str(&format!("{}{}\n", label.dimmed(), value));
}

pub fn render_types(types: &[&str]) -> String {
    if types.is_empty() {
        return "No property types found.\n".to_string();
    }
    let mut out = String::new();
    for t in types {
        out.push_str(t);
        out.push('\n');
    }
    out
}

/// Formats a whole-unit price with thousands separators: `£1,250,000`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("£{}", grouped)
}

fn format_added(added: NaiveDate, today: NaiveDate) -> String {
    let elapsed = today.signed_duration_since(added);
    let formatter = timeago::Formatter::new();
    let text = formatter.convert(elapsed.to_std().unwrap_or_default());
    format!("{:>width$}", text, width = TIME_WIDTH)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn record(id: u32, price: u64) -> PropertyRecord {
        PropertyRecord::new(
            id,
            "House",
            3,
            price,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_postcode("SW1")
        .with_location("Westminster, London")
    }

    #[test]
    fn formats_prices_with_separators() {
        assert_eq!(format_price(0), "£0");
        assert_eq!(format_price(950), "£950");
        assert_eq!(format_price(1_000), "£1,000");
        assert_eq!(format_price(500_000), "£500,000");
        assert_eq!(format_price(1_250_000), "£1,250,000");
    }

    #[test]
    fn truncates_on_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn listing_marks_favorites() {
        no_color();
        let records = vec![record(1, 500_000), record(12, 300_000)];
        let favorites = HashSet::from([PropertyId(12)]);

        let out = render_listing(&records, &favorites, 100);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  #1 "));
        assert!(lines[1].starts_with("★ #12"));
        assert!(lines[0].contains("£500,000 · House · 3 bed · SW1"));
    }

    #[test]
    fn listing_respects_line_width() {
        no_color();
        let out = render_listing(&[record(1, 500_000)], &HashSet::new(), 50);
        assert!(out.lines().next().unwrap().width() <= 50);
    }

    #[test]
    fn empty_listing_has_message() {
        assert_eq!(
            render_listing(&[], &HashSet::new(), 100),
            "No properties found.\n"
        );
    }

    #[test]
    fn detail_renders_found_and_not_found() {
        no_color();
        let found = render_detail(&DetailOutcome::Found {
            record: record(1, 500_000),
            is_favorite: true,
        });
        assert!(found.starts_with("#1 House · £500,000 ★"));
        assert!(found.contains("Added:    1 January 2024"));

        let missing = render_detail(&DetailOutcome::NotFound {
            raw_id: "99".into(),
        });
        assert_eq!(missing, "No property with id 99\n");
    }

    #[test]
    fn added_age_is_right_aligned() {
        let added = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let text = format_added(added, added);
        assert_eq!(text.len(), TIME_WIDTH);
        assert!(!text.trim().is_empty());
    }
}
