use chrono::NaiveDateTime;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::add_reminder::{option_index, step_index};
use crate::components::{button, header, ScreenLines};
use crate::countdown::{
    self, DateChoice, TimeChoice, DATE_OPTIONS, DEFAULT_DATE, DEFAULT_TIME, TIME_OPTIONS,
};
use crate::study::{Reminder, ReminderKind};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditField {
    Title,
    Date,
    Time,
    Kind,
    Enabled,
    Save,
    Cancel,
}

impl EditField {
    pub fn next(&self) -> Self {
        match self {
            EditField::Title => EditField::Date,
            EditField::Date => EditField::Time,
            EditField::Time => EditField::Kind,
            EditField::Kind => EditField::Enabled,
            EditField::Enabled => EditField::Save,
            EditField::Save => EditField::Cancel,
            EditField::Cancel => EditField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            EditField::Title => EditField::Cancel,
            EditField::Date => EditField::Title,
            EditField::Time => EditField::Date,
            EditField::Kind => EditField::Time,
            EditField::Enabled => EditField::Kind,
            EditField::Save => EditField::Enabled,
            EditField::Cancel => EditField::Save,
        }
    }
}

/// Edit form for one reminder. Date and time stay `None` until the user
/// picks a menu entry, so display strings outside the menus survive a save.
#[derive(Debug, Clone)]
pub struct EditReminderState {
    pub original: Reminder,
    pub title: String,
    pub date_index: Option<usize>,
    pub time_index: Option<usize>,
    pub kind: ReminderKind,
    pub enabled: bool,
    pub active_field: EditField,
}

impl EditReminderState {
    pub fn new(reminder: &Reminder) -> Self {
        Self {
            original: reminder.clone(),
            title: reminder.title.clone(),
            date_index: DATE_OPTIONS.iter().position(|d| *d == reminder.date),
            time_index: TIME_OPTIONS.iter().position(|t| *t == reminder.time),
            kind: reminder.kind,
            enabled: reminder.enabled,
            active_field: EditField::Title,
        }
    }

    pub fn date_label(&self) -> &str {
        self.date_index
            .map(|i| DATE_OPTIONS[i])
            .unwrap_or(self.original.date.as_str())
    }

    pub fn time_label(&self) -> &str {
        self.time_index
            .map(|i| TIME_OPTIONS[i])
            .unwrap_or(self.original.time.as_str())
    }

    pub fn is_typing(&self) -> bool {
        self.active_field == EditField::Title
    }

    pub fn input_char(&mut self, c: char) {
        if self.active_field == EditField::Title {
            self.title.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.active_field == EditField::Title {
            self.title.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Cycle the active field's value left (-1) or right (+1).
    pub fn cycle(&mut self, delta: isize) {
        match self.active_field {
            EditField::Date => {
                let start = option_index(&DATE_OPTIONS, &DEFAULT_DATE.label());
                self.date_index = Some(match self.date_index {
                    Some(i) => step_index(i, delta, DATE_OPTIONS.len()),
                    None => start,
                });
            }
            EditField::Time => {
                let start = option_index(&TIME_OPTIONS, &DEFAULT_TIME.label());
                self.time_index = Some(match self.time_index {
                    Some(i) => step_index(i, delta, TIME_OPTIONS.len()),
                    None => start,
                });
            }
            EditField::Kind => {
                self.kind = if delta < 0 { self.kind.prev() } else { self.kind.next() };
            }
            EditField::Enabled => self.enabled = !self.enabled,
            EditField::Title | EditField::Save | EditField::Cancel => {}
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// The edited reminder. Days left are recomputed only when the date or
    /// time changed, and never go below zero.
    pub fn build(&self, now: NaiveDateTime) -> Reminder {
        let date_changed = self.date_label() != self.original.date;
        let time_changed = self.time_label() != self.original.time;

        let days_left = if date_changed || time_changed {
            let date = DateChoice::parse(self.date_label()).unwrap_or(DEFAULT_DATE);
            let time = TimeChoice::parse(self.time_label()).unwrap_or(DEFAULT_TIME);
            Some(countdown::time_remaining(date, time, now).total_days.max(0.0))
        } else {
            self.original.days_left
        };

        Reminder {
            title: self.title.trim().to_string(),
            date: self.date_label().to_string(),
            time: self.time_label().to_string(),
            kind: self.kind,
            enabled: self.enabled,
            days_left,
            ..self.original.clone()
        }
    }
}

pub struct EditReminderView;

impl EditReminderView {
    pub fn render(frame: &mut Frame, area: Rect, state: &EditReminderState) {
        let t = theme::current();
        let mut out = ScreenLines::new();

        header(&mut out, "Edit Reminder", state.original.course_name.as_deref(), true);

        let active = state.active_field;
        let cursor = if active == EditField::Title { "_" } else { "" };
        out.push_item(
            field("Title", format!("{}{}", state.title, cursor), active == EditField::Title),
            active == EditField::Title,
        );
        out.push_item(
            field("Date", cycler(state.date_label()), active == EditField::Date),
            active == EditField::Date,
        );
        out.push_item(
            field("Time", cycler(state.time_label()), active == EditField::Time),
            active == EditField::Time,
        );
        out.push_item(
            field("Type", cycler(state.kind.detail_label()), active == EditField::Kind),
            active == EditField::Kind,
        );
        let toggle = if state.enabled { "[x] Enabled" } else { "[ ] Enabled" };
        out.push_item(
            field("", toggle.to_string(), active == EditField::Enabled),
            active == EditField::Enabled,
        );
        out.blank();

        if !state.is_valid() {
            out.push(Span::styled("Title cannot be empty", Style::default().fg(t.urgent)));
        }
        out.push_item(
            button("Save", active == EditField::Save, state.is_valid()),
            active == EditField::Save,
        );
        out.push_item(
            button("Cancel", active == EditField::Cancel, true),
            active == EditField::Cancel,
        );
        out.blank();
        out.push(Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", t.dim),
            Span::styled("\u{2190}\u{2192}", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Change", t.dim),
        ]));

        out.render(frame, area);
    }
}

fn cycler(value: &str) -> String {
    format!("\u{2039} {} \u{203a}", value)
}

fn field(label: &str, value: String, active: bool) -> Line<'static> {
    let t = theme::current();
    let label_w = if label.is_empty() { 0 } else { 6 };
    let style = if active {
        Style::default().fg(t.accent)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if !label.is_empty() {
        spans.push(Span::styled(
            format!("{:<width$}", label, width = label_w),
            t.dim,
        ));
    }
    spans.push(Span::styled(value, style));
    Line::from(spans)
}
