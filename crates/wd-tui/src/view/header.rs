//! Title banner and the three stat cards.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(4)])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "My Watchlist",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track your movies and TV shows, discover new favorites",
            Style::default().fg(palette.muted),
        )),
    ])
    .centered();
    frame.render_widget(banner, rows[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    stat_card(frame, cards[0], "Watched", app.stats.watched, palette);
    stat_card(frame, cards[1], "Movies", app.stats.movies, palette);
    stat_card(frame, cards[2], "TV Shows", app.stats.series, palette);
}

fn stat_card(frame: &mut Frame, area: Rect, label: &str, value: usize, palette: &Palette) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(palette.muted))),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(card, area);
}
