use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::{button, header, truncate, ScreenLines};
use crate::countdown;
use crate::study::Reminder;
use crate::theme;

pub struct ReminderList;

impl ReminderList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        reminders: &[Reminder],
        active: usize,
        cursor: usize,
    ) {
        let t = theme::current();
        let inner_w = area.width as usize;
        let mut out = ScreenLines::new();

        header(&mut out, "HCI Reminders", Some(&format!("{} active", active)), true);

        if reminders.is_empty() {
            out.push(Span::styled("No reminders", t.dim));
            out.blank();
        }

        for (i, reminder) in reminders.iter().enumerate() {
            let is_selected = i == cursor;
            let urgency = reminder.urgency();

            let title_style = if is_selected {
                t.selected
            } else if reminder.enabled {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
            };

            // Urgency dot, then the title.
            out.push_item(
                Line::from(vec![
                    Span::styled(
                        if is_selected { "\u{203a}" } else { " " },
                        Style::default().fg(t.accent),
                    ),
                    Span::styled("\u{25cf} ", Style::default().fg(t.urgency_color(urgency))),
                    Span::styled(truncate(&reminder.title, inner_w.saturating_sub(3)), title_style),
                ]),
                is_selected,
            );

            if let Some(ref course) = reminder.course_name {
                out.push(Span::styled(
                    format!("   {}", truncate(course, inner_w.saturating_sub(3))),
                    t.dim,
                ));
            }
            out.push(Span::styled(
                format!("   {}", reminder.kind.list_label()),
                Style::default().fg(reminder.kind.color()),
            ));

            // "date • time" on the left, countdown pill on the right if it fits.
            let when = format!("   {}", reminder.when());
            let mut spans = vec![Span::styled(when.clone(), t.dim)];
            if let Some(days_left) = reminder.days_left {
                let pill = format!(" {} ", countdown::left_label(days_left));
                let used = when.chars().count() + pill.chars().count();
                if used < inner_w {
                    spans.push(Span::raw(" ".repeat(inner_w - used)));
                }
                spans.push(Span::styled(pill, t.badge(urgency)));
            }
            out.push(Line::from(spans));
            out.blank();
        }

        let add_selected = cursor == reminders.len();
        out.push_item(button("+ Add Reminder", add_selected, true), add_selected);

        out.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;
    use crate::study::Store;

    #[test]
    fn lists_reminders_with_countdowns() {
        let store = Store::new();
        let text = render_to_string(36, 40, |frame| {
            ReminderList::render(frame, frame.area(), store.reminders(), store.active_count(), 0)
        });
        assert!(text.contains("HCI Reminders"));
        assert!(text.contains("5 active"));
        assert!(text.contains("Midterm Exam"));
        assert!(text.contains("18 hours left"));
        assert!(text.contains("Lab"));
        assert!(text.contains("Dec 18 \u{2022} 11:59 PM"));
    }

    #[test]
    fn selecting_past_the_rows_reaches_add_button() {
        let store = Store::new();
        let text = render_to_string(36, 12, |frame| {
            ReminderList::render(frame, frame.area(), store.reminders(), 5, 5)
        });
        assert!(text.contains("Add Reminder"));
    }

    #[test]
    fn empty_list_still_offers_add() {
        let text = render_to_string(36, 12, |frame| ReminderList::render(frame, frame.area(), &[], 0, 0));
        assert!(text.contains("No reminders"));
        assert!(text.contains("0 active"));
        assert!(text.contains("Add Reminder"));
    }
}
