use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::{card_title, header, truncate, wrap_text, ScreenLines};
use crate::countdown;
use crate::study::Exam;
use crate::theme;

pub struct ExamList;

impl ExamList {
    pub fn render(frame: &mut Frame, area: Rect, exams: &[Exam], cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        header(&mut out, "HCI Exams", Some(&format!("{} scheduled", exams.len())), true);

        for (i, exam) in exams.iter().enumerate() {
            let selected = i == cursor;
            let urgency = exam.urgency();
            let color = t.urgency_color(urgency);

            // Title left, short countdown badge right.
            let badge = format!(" {} ", countdown::short_label(exam.days_left));
            let title_w = w.saturating_sub(badge.chars().count() + 3);
            let mut spans = card_title(
                &truncate(&exam.title, title_w),
                selected,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
            .spans;
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let gap = w.saturating_sub(used + badge.chars().count());
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(badge, t.badge(urgency)));
            out.push_item(Line::from(spans), selected);

            out.push(Span::styled(format!("  {}", exam.course_line()), t.dim));
            out.push(Span::raw(format!("  {}", exam.date)));
            out.push(Span::styled(format!("  {}", exam.time), Style::default().fg(color)));
            out.blank();
        }

        let info = "Tap any exam to view details and set reminders. \
                    Red cards indicate urgent exams (\u{2264} 1 day).";
        for line in wrap_text(info, w) {
            out.push(Span::styled(line, t.dim));
        }

        out.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;
    use crate::study::Store;

    #[test]
    fn lists_exams_with_short_countdowns() {
        let store = Store::new();
        let text = render_to_string(36, 30, |frame| ExamList::render(frame, frame.area(), store.exams(), 0));
        assert!(text.contains("HCI Exams"));
        assert!(text.contains("4 scheduled"));
        assert!(text.contains("HCI Midterm Exam"));
        assert!(text.contains(" 18h "));
        assert!(text.contains(" 3d "));
        assert!(text.contains(" 16d "));
        assert!(text.contains("HCI Course"));
        assert!(text.contains("Monday, Dec 16"));
    }

    #[test]
    fn info_card_follows_the_last_exam() {
        let store = Store::new();
        let text = render_to_string(36, 12, |frame| ExamList::render(frame, frame.area(), store.exams(), 3));
        assert!(text.contains("HCI Final Exam"));
    }
}
