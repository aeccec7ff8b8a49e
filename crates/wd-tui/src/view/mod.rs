//! Rendering. Passive consumers of the app snapshots; intents never
//! originate here.

mod filters;
mod grid;
mod header;
mod overlay;
mod search;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::theme::Palette;

pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(&app.settings.general.theme);
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // title + stat cards
            Constraint::Length(3), // search bar
            Constraint::Length(1), // active filter chips
            Constraint::Min(5),    // filter panel | card grid
            Constraint::Length(1), // key hints
        ])
        .split(area);

    header::render(frame, rows[0], app, &palette);
    search::render(frame, rows[1], app, &palette);
    search::render_active_chips(frame, rows[2], app, &palette);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(rows[3]);
    filters::render(frame, main[0], app, &palette);
    grid::render(frame, main[1], app, &palette);

    overlay::render_hints(frame, rows[4], app, &palette);
    overlay::render_toasts(frame, area, app, &palette);
    if app.show_help {
        overlay::render_help(frame, area, &palette);
    }
}

/// Clip a string to the given display width, appending an ellipsis when
/// anything was cut. A string that fits exactly is kept intact.
pub(crate) fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Reserve one cell for the ellipsis.
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// A centered sub-rectangle, for modal overlays.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_short_text_intact() {
        assert_eq!(truncate_to_width("Inception", 20), "Inception");
    }

    #[test]
    fn truncation_keeps_exact_fit_text_intact() {
        assert_eq!(truncate_to_width("Inception", 9), "Inception");
        assert_eq!(truncate_to_width("Breaking Bad", 12), "Breaking Bad");
    }

    #[test]
    fn truncation_marks_clipped_text() {
        let clipped = truncate_to_width("Game of Thrones", 8);
        assert!(clipped.ends_with('…'));
        assert!(clipped.chars().count() <= 8);
    }

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
    }
}
