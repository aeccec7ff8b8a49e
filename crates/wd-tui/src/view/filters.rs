//! Filter panel: category checkboxes, the watched-only row, active chips.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let focused = app.focus == Focus::Filters;

    let mut items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|label| {
            let selected = app.criteria.is_selected(label);
            let marker = if selected { "[x]" } else { "[ ]" };
            let style = if selected {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker} {label}"),
                style,
            )))
        })
        .collect();

    let watched_marker = if app.criteria.watched_only {
        "[x]"
    } else {
        "[ ]"
    };
    let watched_style = if app.criteria.watched_only {
        Style::default().fg(palette.watched)
    } else {
        Style::default().fg(palette.text)
    };
    items.push(ListItem::new(Line::from(Span::styled(
        format!("{watched_marker} Watched only"),
        watched_style,
    ))));

    let title = if app.criteria.selected_categories.is_empty() {
        " Filters ".to_string()
    } else {
        format!(" Filters ({}) ", app.criteria.selected_categories.len())
    };
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        );

    if focused {
        frame.render_stateful_widget(list, area, &mut app.filter_state);
    } else {
        frame.render_widget(list, area);
    }
}
