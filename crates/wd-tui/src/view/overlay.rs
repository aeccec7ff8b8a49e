//! Key hints, toast overlay, help modal.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::theme::Palette;

use super::centered_rect;

pub fn render_hints(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints = match app.input_mode {
        InputMode::Search => "type to filter   Enter/Esc: done",
        InputMode::Normal => {
            if app.criteria.is_active() {
                "/: search  Tab: focus  Enter: toggle  w: watched only  x: clear  a: add  ?: help  q: quit"
            } else {
                "/: search  Tab: focus  Enter: toggle  w: watched only  a: add  ?: help  q: quit"
            }
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.muted),
        ))),
        area,
    );
}

pub fn render_toasts(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    const TOAST_WIDTH: u16 = 44;
    const TOAST_HEIGHT: u16 = 4;

    for (slot, toast) in app.toasts.iter().rev().take(3).enumerate() {
        let y_offset = 1 + (slot as u16) * TOAST_HEIGHT;
        if area.height < y_offset + TOAST_HEIGHT {
            break;
        }
        let rect = Rect {
            x: area.x + area.width.saturating_sub(TOAST_WIDTH + 2),
            y: area.y + area.height.saturating_sub(y_offset + TOAST_HEIGHT),
            width: TOAST_WIDTH.min(area.width),
            height: TOAST_HEIGHT,
        };
        frame.render_widget(Clear, rect);
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                toast.notification.title.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                toast.notification.description.clone(),
                Style::default().fg(palette.text),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
        frame.render_widget(body, rect);
    }
}

pub fn render_help(frame: &mut Frame, area: Rect, palette: &Palette) {
    let rect = centered_rect(46, 14, area);
    frame.render_widget(Clear, rect);

    let rows = [
        ("/", "search titles"),
        ("Tab", "switch between grid and filters"),
        ("↑↓←→ / hjkl", "move"),
        ("Enter / Space", "toggle watched or category"),
        ("w", "watched only on/off"),
        ("x", "clear all filters"),
        ("a", "add new (coming soon)"),
        ("q / Ctrl-C", "quit"),
    ];
    let mut lines = vec![Line::default()];
    lines.extend(rows.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(
                format!("  {key:<14}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*what, Style::default().fg(palette.text)),
        ])
    }));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(" Keys "),
    );
    frame.render_widget(help, rect);
}
