use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::{button, header, wrap_text, ScreenLines};
use crate::countdown;
use crate::study::{Exam, Priority};
use crate::theme;

pub struct ExamDetail;

impl ExamDetail {
    pub fn render(frame: &mut Frame, area: Rect, exam: Option<&Exam>, cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        header(&mut out, "Exam Details", None, true);

        let Some(exam) = exam else {
            out.push(Span::styled("Exam not found", t.dim));
            out.render(frame, area);
            return;
        };

        let urgency = exam.urgency();
        let color = t.urgency_color(urgency);
        if urgency.is_urgent() {
            out.push(Span::styled(" \u{26a0} Urgent Exam ", t.badge(urgency)));
        }
        for line in wrap_text(&exam.title, w) {
            out.push(Span::styled(line, t.header));
        }
        out.push(Span::styled(exam.course_line(), t.dim));
        out.blank();

        let priority_style = match exam.priority {
            Priority::High => Style::default().fg(t.urgent),
            Priority::Medium => Style::default().fg(t.accent),
            Priority::Low => t.dim,
        };
        out.push(Line::from(vec![
            Span::styled("Priority ", t.dim),
            Span::styled(exam.priority.label(), priority_style.add_modifier(Modifier::BOLD)),
        ]));
        out.push(Line::from(vec![
            Span::styled("Date     ", t.dim),
            Span::raw(exam.date.clone()),
        ]));
        out.push(Line::from(vec![
            Span::styled("Time     ", t.dim),
            Span::raw(exam.time.clone()),
        ]));
        out.blank();

        let r = countdown::rounded(exam.days_left);
        out.push(Span::styled(
            format!("  {}", r.value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        out.push(Span::styled(
            format!("  {} remaining", r.unit.word(r.value)),
            Style::default().fg(color),
        ));
        out.blank();

        out.push_item(button("Set Study Reminder", cursor == 0, true), cursor == 0);
        out.push_item(button("View Study Plan", cursor == 1, false), cursor == 1);

        out.render(frame, area);
    }
}
