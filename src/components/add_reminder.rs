use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::{button, header, wrap_text, ScreenLines};
use crate::countdown::{
    self, DateChoice, TimeChoice, TimeRemaining, DATE_OPTIONS, DEFAULT_DATE, DEFAULT_TIME,
    TIME_OPTIONS,
};
use crate::study::ReminderKind;
use crate::theme;

/// Columns of the date and time pickers.
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddField {
    Date,
    Time,
    Submit,
}

impl AddField {
    pub fn next(&self) -> Self {
        match self {
            AddField::Date => AddField::Time,
            AddField::Time => AddField::Submit,
            AddField::Submit => AddField::Date,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            AddField::Date => AddField::Submit,
            AddField::Time => AddField::Date,
            AddField::Submit => AddField::Time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    DateTime,
    /// Confirmation shown until `return_at`.
    Added { return_at: Instant },
}

#[derive(Debug, Clone)]
pub struct AddReminderState {
    pub course: String,
    pub kind: ReminderKind,
    pub date_index: usize,
    pub time_index: usize,
    pub active_field: AddField,
    pub remaining: TimeRemaining,
    pub step: Step,
}

impl AddReminderState {
    pub fn new(course: String, kind: ReminderKind, now: NaiveDateTime) -> Self {
        let date_index = option_index(&DATE_OPTIONS, &DEFAULT_DATE.label());
        let time_index = option_index(&TIME_OPTIONS, &DEFAULT_TIME.label());
        Self {
            course,
            kind,
            date_index,
            time_index,
            active_field: AddField::Date,
            remaining: countdown::time_remaining(DEFAULT_DATE, DEFAULT_TIME, now),
            step: Step::DateTime,
        }
    }

    pub fn date_label(&self) -> &'static str {
        DATE_OPTIONS[self.date_index]
    }

    pub fn time_label(&self) -> &'static str {
        TIME_OPTIONS[self.time_index]
    }

    pub fn date(&self) -> DateChoice {
        DateChoice::parse(self.date_label()).unwrap_or(DEFAULT_DATE)
    }

    pub fn time(&self) -> TimeChoice {
        TimeChoice::parse(self.time_label()).unwrap_or(DEFAULT_TIME)
    }

    pub fn refresh(&mut self, now: NaiveDateTime) {
        self.remaining = countdown::time_remaining(self.date(), self.time(), now);
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Move the highlighted cell of the active picker by `delta` cells.
    pub fn move_selection(&mut self, delta: isize, now: NaiveDateTime) {
        match self.active_field {
            AddField::Date => self.date_index = step_index(self.date_index, delta, DATE_OPTIONS.len()),
            AddField::Time => self.time_index = step_index(self.time_index, delta, TIME_OPTIONS.len()),
            AddField::Submit => return,
        }
        self.refresh(now);
    }

    pub fn is_added(&self) -> bool {
        matches!(self.step, Step::Added { .. })
    }

    pub fn mark_added(&mut self, at: Instant, delay: Duration) {
        self.step = Step::Added {
            return_at: at + delay,
        };
    }

    /// True once the confirmation has been shown for its full delay.
    pub fn should_return(&self, now: Instant) -> bool {
        match self.step {
            Step::Added { return_at } => now >= return_at,
            Step::DateTime => false,
        }
    }
}

pub fn option_index(options: &[&str], label: &str) -> usize {
    options.iter().position(|o| *o == label).unwrap_or(0)
}

/// Clamp-move an index within `0..len`.
pub fn step_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = index as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

pub struct AddReminderView;

impl AddReminderView {
    pub fn render(frame: &mut Frame, area: Rect, state: &AddReminderState) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        if let Step::Added { .. } = state.step {
            header(&mut out, "Reminder Added!", None, false);
            out.push(Span::styled(
                "   \u{2714}  ",
                Style::default().fg(t.success).add_modifier(Modifier::BOLD),
            ));
            out.blank();
            out.push(Span::styled("Reminder Added Successfully", t.header));
            for line in wrap_text(&state.course, w) {
                out.push(Span::styled(line, t.dim));
            }
            let summary = format!(
                "{} \u{2022} {} at {}",
                state.kind.flow_label(),
                state.date_label(),
                state.time_label()
            );
            for line in wrap_text(&summary, w) {
                out.push(Span::styled(line, t.dim));
            }
            out.render(frame, area);
            return;
        }

        header(&mut out, "Set Date & Time", Some(&state.course), true);

        out.push(Span::styled("Reminder Type", t.dim));
        out.push(Line::from(state.kind.flow_label()));
        out.blank();

        out.push(Span::styled("Select Date", t.dim));
        push_grid(
            &mut out,
            &DATE_OPTIONS,
            state.date_index,
            state.active_field == AddField::Date,
        );
        out.blank();

        out.push(Span::styled("Select Time", t.dim));
        push_grid(
            &mut out,
            &TIME_OPTIONS,
            state.time_index,
            state.active_field == AddField::Time,
        );
        out.blank();

        let urgency = state.remaining.urgency();
        let style = t.urgency(urgency);
        out.push(Span::styled(
            format!("{} is in", state.kind.flow_label()),
            style,
        ));
        out.push(Span::styled(
            state.remaining.phrase(),
            style.add_modifier(Modifier::BOLD),
        ));
        out.blank();

        out.push_item(
            button("\u{2714} Add Reminder", state.active_field == AddField::Submit, true),
            state.active_field == AddField::Submit,
        );

        out.render(frame, area);
    }
}

fn push_grid(out: &mut ScreenLines, options: &[&str], selected: usize, active: bool) {
    let t = theme::current();
    for (row, chunk) in options.chunks(GRID_COLUMNS).enumerate() {
        let mut spans = Vec::new();
        let mut has_selected = false;
        for (col, option) in chunk.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let style = if index == selected && active {
                has_selected = true;
                t.selected
            } else if index == selected {
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("{:^10}", option), style));
            spans.push(Span::raw(" "));
        }
        out.push_item(Line::from(spans), has_selected);
    }
}
