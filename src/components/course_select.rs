use ratatui::{layout::Rect, style::Style, text::Span, Frame};

use crate::components::{card_title, header, truncate, wrap_text, ScreenLines};
use crate::study::COURSES;
use crate::theme;

pub struct CourseSelect;

impl CourseSelect {
    pub fn render(frame: &mut Frame, area: Rect, cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        header(&mut out, "Select Course", Some("Umm Al-Qura University"), true);

        for (i, course) in COURSES.iter().enumerate() {
            let selected = i == cursor;
            out.push_item(
                card_title(&truncate(course, w.saturating_sub(2)), selected, Style::default()),
                selected,
            );
        }
        out.blank();

        for line in wrap_text("Select an HCI course to add a reminder for it.", w) {
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
    fn lists_every_course() {
        let text = render_to_string(40, 20, |frame| CourseSelect::render(frame, frame.area(), 0));
        assert!(text.contains("Select Course"));
        assert!(text.contains("Umm Al-Qura University"));
        assert!(text.contains("Human Factors in Design"));
        assert!(text.contains("Prototyping Methods"));
    }

    #[test]
    fn long_names_are_truncated() {
        let text = render_to_string(20, 20, |frame| CourseSelect::render(frame, frame.area(), 0));
        assert!(text.contains("Fundamentals of..."));
    }
}
