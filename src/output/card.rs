//! The streak card: a fixed 420×120 SVG.

use chrono::NaiveDate;

use crate::streak::StreakResult;

use super::svg::{Color, FontWeight, Group, Rect, SvgBuilder, Text, format_days};

const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 120.0;
const CORNER_RADIUS: f64 = 12.0;

const TITLE: &str = "GitHub Streak";
const FONT_FAMILY: &str = "Inter,Segoe UI,Arial";

const BACKGROUND: &str = "#0d1117";
const BORDER: &str = "#30363d";
const FOREGROUND: &str = "#e6edf3";
const CURRENT_ACCENT: &str = "#58a6ff";
const LONGEST_ACCENT: &str = "#a5d6ff";
const MUTED: &str = "#8b949e";

/// Render the card for `result`, stamped with `as_of` as `YYYY-MM-DD`.
#[must_use]
pub fn render_card(result: &StreakResult, as_of: NaiveDate) -> String {
    let background = Rect::new(0.0, 0.0, WIDTH, HEIGHT)
        .with_corner_radius(CORNER_RADIUS)
        .with_fill(Color::hex(BACKGROUND))
        .with_stroke(Color::hex(BORDER));

    let title = Text::new(20.0, 36.0, TITLE)
        .with_font_size(20.0)
        .with_font_weight(FontWeight::SemiBold);
    let current = Text::new(20.0, 66.0, format!("Current: {}", format_days(result.current)))
        .with_font_size(16.0)
        .with_fill(Color::hex(CURRENT_ACCENT));
    let longest = Text::new(220.0, 66.0, format!("Longest: {}", format_days(result.longest)))
        .with_font_size(16.0)
        .with_fill(Color::hex(LONGEST_ACCENT));
    let updated = Text::new(20.0, 94.0, format!("Updated: {}", as_of.format("%Y-%m-%d")))
        .with_font_size(12.0)
        .with_fill(Color::hex(MUTED));

    let body = Group::new()
        .with_font_family(FONT_FAMILY)
        .with_fill(Color::hex(FOREGROUND))
        .push_element(&title)
        .push_element(&current)
        .push_element(&longest)
        .push_element(&updated);

    SvgBuilder::new(WIDTH, HEIGHT)
        .with_xml_declaration()
        .with_label(TITLE)
        .push_element(&background)
        .push_element(&body)
        .build()
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
