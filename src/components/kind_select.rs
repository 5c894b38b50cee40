use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::components::{card_title, header, wrap_text, ScreenLines};
use crate::study::ReminderKind;
use crate::theme;

pub struct KindSelect;

impl KindSelect {
    pub fn render(frame: &mut Frame, area: Rect, course: &str, cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        let subtitle = (!course.is_empty()).then_some(course);
        header(&mut out, "Add Reminder", subtitle, true);

        for (i, kind) in ReminderKind::ALL.iter().enumerate() {
            let selected = i == cursor;
            let title = card_title(kind.menu_label(), selected, Style::default().add_modifier(Modifier::BOLD));
            let mut spans = vec![Span::styled("\u{25cf}", Style::default().fg(kind.color()))];
            spans.extend(title.spans);
            out.push_item(Line::from(spans), selected);
        }
        out.blank();

        for line in wrap_text("Choose a reminder type, then pick a date and time.", w) {
            out.push(Span::styled(line, t.dim));
        }

        out.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;

    #[test]
    fn shows_course_and_kinds_in_menu_order() {
        let text = render_to_string(36, 16, |frame| {
            KindSelect::render(frame, frame.area(), "User Research", 0)
        });
        assert!(text.contains("User Research"));
        let exam = text.find("Add Exam Reminder").unwrap();
        let study = text.find("Add Study Reminder").unwrap();
        let lab = text.find("Add Lab Reminder").unwrap();
        assert!(exam < study && study < lab);
    }
}
