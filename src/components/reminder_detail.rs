use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::{button, header, wrap_text, ScreenLines};
use crate::countdown;
use crate::study::Reminder;
use crate::theme;

pub struct ReminderDetail;

impl ReminderDetail {
    pub fn render(frame: &mut Frame, area: Rect, reminder: Option<&Reminder>, cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        header(&mut out, "Reminder Details", None, true);

        let Some(reminder) = reminder else {
            out.push(Span::styled("Reminder not found", t.dim));
            out.render(frame, area);
            return;
        };

        let urgency = reminder.urgency();
        if urgency.is_urgent() {
            out.push(Span::styled(" \u{26a0} Urgent ", t.badge(urgency)));
        }
        for line in wrap_text(&reminder.title, w) {
            out.push(Span::styled(line, t.header));
        }
        if let Some(ref course) = reminder.course_name {
            for line in wrap_text(course, w) {
                out.push(Span::styled(line, t.dim));
            }
        }
        out.blank();

        out.push(row("Type", reminder.kind.detail_label(), Style::default().fg(reminder.kind.color())));
        out.push(row("Date", &reminder.date, Style::default()));
        out.push(row("Time", &reminder.time, Style::default()));
        out.blank();

        if let Some(days_left) = reminder.days_left {
            let r = countdown::rounded(days_left);
            let color = t.urgency_color(urgency);
            out.push(Span::styled(
                format!("  {}", r.value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            out.push(Span::styled(
                format!("  {} remaining", r.unit.word(r.value)),
                Style::default().fg(color),
            ));
            out.blank();
        }

        let toggle = if reminder.enabled { "[x] Enabled" } else { "[ ] Enabled" };
        out.push_item(button(toggle, cursor == 0, true), cursor == 0);
        out.push_item(button("Edit Reminder", cursor == 1, true), cursor == 1);
        out.push_item(button("Delete Reminder", cursor == 2, false), cursor == 2);

        out.render(frame, area);
    }
}

fn row(label: &str, value: &str, style: Style) -> Line<'static> {
    let t = theme::current();
    Line::from(vec![
        Span::styled(format!("{:<6}", label), t.dim),
        Span::styled(value.to_string(), style),
    ])
}
