//! Search bar.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let searching = app.input_mode == InputMode::Search;

    let content = if app.criteria.query.is_empty() && !searching {
        Line::from(Span::styled(
            "Search movies and TV shows...",
            Style::default().fg(palette.muted),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.criteria.query.clone(),
            Style::default().fg(palette.text),
        )];
        if searching {
            spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        }
        Line::from(spans)
    };

    let border = if searching {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let bar = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Search "),
    );
    frame.render_widget(bar, area);
}

/// Row of the currently selected category chips plus the watched-only
/// marker; blank when no criterion is active.
pub fn render_active_chips(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if !app.criteria.is_active() {
        return;
    }

    let mut spans = vec![Span::styled("  ", Style::default())];
    for label in &app.criteria.selected_categories {
        spans.push(Span::styled(
            format!("[{label} ✕]"),
            Style::default().fg(palette.accent),
        ));
        spans.push(Span::raw(" "));
    }
    if app.criteria.watched_only {
        spans.push(Span::styled(
            "[Watched only]",
            Style::default().fg(palette.watched),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
