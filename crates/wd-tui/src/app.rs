//! TUI state machine.
//!
//! Holds the snapshots the views read, translates intents into use-case
//! calls, and re-derives everything after each one. All state changes run
//! to completion before the next key is handled.

use std::sync::mpsc::Receiver;

use ratatui::widgets::ListState;
use wd_app::UseCases;
use wd_core::ports::Notification;
use wd_core::settings::Settings;
use wd_core::{CatalogStats, EntryId, FilterCriteria};

use crate::models::EntryCard;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Filters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// One on-screen toast with its expiry deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at_ms: i64,
}

pub struct App {
    usecases: UseCases,
    toast_rx: Receiver<Notification>,
    pub settings: Settings,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub should_quit: bool,
    pub show_help: bool,
    /// Snapshot of the visible entries, refreshed after every intent
    pub cards: Vec<EntryCard>,
    pub categories: Vec<String>,
    pub criteria: FilterCriteria,
    pub stats: CatalogStats,
    pub grid_cursor: usize,
    /// Columns of the last rendered grid; row stride for cursor movement
    pub grid_columns: usize,
    /// Cursor over the filter panel: category rows, then the watched-only row
    pub filter_state: ListState,
    pub toasts: Vec<Toast>,
}

impl App {
    pub fn new(usecases: UseCases, settings: Settings, toast_rx: Receiver<Notification>) -> Self {
        let mut filter_state = ListState::default();
        filter_state.select(Some(0));

        let mut app = Self {
            usecases,
            toast_rx,
            settings,
            input_mode: InputMode::Normal,
            focus: Focus::Grid,
            should_quit: false,
            show_help: false,
            cards: Vec::new(),
            categories: Vec::new(),
            criteria: FilterCriteria::default(),
            stats: CatalogStats::default(),
            grid_cursor: 0,
            grid_columns: 1,
            filter_state,
            toasts: Vec::new(),
        };
        app.refresh();
        app
    }

    /// Re-derive everything the views read. Cheap linear scans, called
    /// after every intent.
    pub fn refresh(&mut self) {
        let chip_limit = self.settings.view.category_chips;
        self.cards = self
            .usecases
            .list_visible_entries()
            .execute()
            .iter()
            .map(|entry| EntryCard::project(entry, chip_limit))
            .collect();
        self.categories = self.usecases.list_categories().execute();
        self.criteria = self.usecases.get_criteria().execute();
        self.stats = self.usecases.get_stats().execute();

        if self.grid_cursor >= self.cards.len() {
            self.grid_cursor = self.cards.len().saturating_sub(1);
        }
        let filter_rows = self.filter_row_count();
        match self.filter_state.selected() {
            Some(selected) if selected < filter_rows => {}
            _ => self.filter_state.select(Some(filter_rows.saturating_sub(1))),
        }
    }

    /// Category rows plus the trailing watched-only row.
    pub fn filter_row_count(&self) -> usize {
        self.categories.len() + 1
    }

    pub fn selected_card(&self) -> Option<&EntryCard> {
        self.cards.get(self.grid_cursor)
    }

    // ----- intents -------------------------------------------------------

    pub fn toggle_selected_watched(&mut self) {
        if let Some(card) = self.cards.get(self.grid_cursor) {
            let id = EntryId::from(card.id.as_str());
            self.usecases.toggle_watched().execute(&id);
            self.refresh();
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.criteria.query.clone();
        query.push(c);
        self.usecases.set_query().execute(&query);
        self.refresh();
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.criteria.query.clone();
        query.pop();
        self.usecases.set_query().execute(&query);
        self.refresh();
    }

    pub fn toggle_watched_only(&mut self) {
        let watched_only = !self.criteria.watched_only;
        self.usecases.set_watched_only().execute(watched_only);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.usecases.clear_filters().execute();
        self.refresh();
    }

    pub fn request_add_entry(&mut self) {
        self.usecases.request_add_entry().execute();
    }

    /// Enter or Space on the filter panel: toggle the category under the
    /// cursor, or the watched-only flag on the trailing row.
    pub fn activate_filter_row(&mut self) {
        let Some(selected) = self.filter_state.selected() else {
            return;
        };
        if selected < self.categories.len() {
            let label = self.categories[selected].clone();
            self.usecases.toggle_category().execute(&label);
            self.refresh();
        } else {
            self.toggle_watched_only();
        }
    }

    // ----- navigation ----------------------------------------------------

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Grid => Focus::Filters,
            Focus::Filters => Focus::Grid,
        };
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Grid => {
                self.grid_cursor = self.grid_cursor.saturating_sub(self.grid_columns.max(1));
            }
            Focus::Filters => {
                let selected = self.filter_state.selected().unwrap_or(0);
                self.filter_state.select(Some(selected.saturating_sub(1)));
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Grid => {
                let next = self.grid_cursor + self.grid_columns.max(1);
                if next < self.cards.len() {
                    self.grid_cursor = next;
                }
            }
            Focus::Filters => {
                let selected = self.filter_state.selected().unwrap_or(0);
                let last = self.filter_row_count().saturating_sub(1);
                self.filter_state.select(Some((selected + 1).min(last)));
            }
        }
    }

    pub fn move_left(&mut self) {
        if self.focus == Focus::Grid {
            self.grid_cursor = self.grid_cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if self.focus == Focus::Grid && self.grid_cursor + 1 < self.cards.len() {
            self.grid_cursor += 1;
        }
    }

    // ----- toasts ---------------------------------------------------------

    /// Drain notifications that arrived since the last frame and drop
    /// expired toasts.
    pub fn tick(&mut self, now_ms: i64) {
        let ttl = self.settings.notifications.toast_duration_ms as i64;
        while let Ok(notification) = self.toast_rx.try_recv() {
            self.toasts.push(Toast {
                notification,
                expires_at_ms: now_ms + ttl,
            });
        }
        self.toasts.retain(|toast| toast.expires_at_ms > now_ms);
    }
}
