//! Card grid and the empty state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::models::EntryCard;
use crate::theme::Palette;

use super::truncate_to_width;

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let focused = app.focus == Focus::Grid;
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" Library ({}) ", app.cards.len()));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if app.cards.is_empty() {
        render_empty_state(frame, inner, palette);
        app.grid_columns = 1;
        return;
    }

    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    app.grid_columns = columns;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Keep the cursor's row in view.
    let cursor_row = app.grid_cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    for screen_row in 0..visible_rows {
        let row = first_row + screen_row;
        let row_area = Rect {
            x: inner.x,
            y: inner.y + (screen_row as u16) * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CARD_WIDTH); columns])
            .split(row_area);
        for column in 0..columns {
            let index = row * columns + column;
            if let Some(card) = app.cards.get(index) {
                let selected = focused && index == app.grid_cursor;
                render_card(frame, cells[column], card, selected, palette);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &EntryCard, selected: bool, palette: &Palette) {
    let border = if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };
    let watched_mark = if card.watched {
        Span::styled(" ✓ ", Style::default().fg(palette.watched))
    } else {
        Span::raw("   ")
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", card.badge), Style::default().fg(palette.muted)),
            watched_mark,
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width;
    let mut lines = vec![
        // Poster stand-in. The poster URL is never fetched; a glyph covers
        // both the no-network rule and the original's image-error fallback.
        Line::from(Span::styled("▶", Style::default().fg(palette.muted))).centered(),
        Line::from(Span::styled(
            truncate_to_width(&card.title, width),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(card.year.to_string(), Style::default().fg(palette.muted)),
            Span::raw("  "),
            Span::styled(
                format!("★ {}", card.rating),
                Style::default().fg(palette.accent),
            ),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&card.chips.join(" · "), width),
            Style::default().fg(palette.muted),
        )),
    ];
    if let Some(episodes) = &card.episodes {
        lines.push(Line::from(Span::styled(
            truncate_to_width(episodes, width),
            Style::default().fg(palette.muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_empty_state(frame: &mut Frame, area: Rect, palette: &Palette) {
    let message = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "No results found",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try adjusting your search or filters",
            Style::default().fg(palette.muted),
        )),
        Line::default(),
        Line::from(Span::styled(
            "x: clear all filters",
            Style::default().fg(palette.accent),
        )),
    ])
    .centered();
    frame.render_widget(message, area);
}
