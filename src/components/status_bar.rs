use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Screen;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    /// Screen name on the left; the status message, or key hints that fit
    /// the width, on the right.
    pub fn render(frame: &mut Frame, area: Rect, screen: Screen, message: Option<&str>) {
        let w = area.width as usize;
        let style = theme::current().status;

        let left = format!(" {} ", screen_name(screen));
        let right = match message {
            Some(msg) => format!(" {} ", msg),
            None => hints(screen, w).to_string(),
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::RemindersList => "Reminders",
        Screen::ReminderDetail => "Reminder",
        Screen::AiAssistant => "Assistant",
        Screen::UpcomingExams => "Exams",
        Screen::AddReminder => "Add",
        Screen::ExamDetail => "Exam",
        Screen::CourseSelection => "Course",
        Screen::ReminderTypeSelection => "Type",
        Screen::EditReminder => "Edit",
    }
}

fn hints(screen: Screen, w: usize) -> &'static str {
    match screen {
        Screen::AddReminder if w >= 70 => {
            " \u{2190}\u{2191}\u{2192}\u{2193}:Pick  Tab:Field  Enter:Add  Esc:Back  ?:Help  q:Quit "
        }
        Screen::EditReminder if w >= 70 => {
            " Tab:Field  \u{2190}\u{2192}:Change  Enter:Select  Esc:Cancel  ?:Help "
        }
        Screen::AddReminder | Screen::EditReminder if w >= 40 => " Tab:Field Esc:Back ?:Help ",
        Screen::Home if w >= 60 => " \u{2191}\u{2193}:Move  Enter:Open  ?:Help  q:Quit ",
        _ if w >= 60 => " \u{2191}\u{2193}:Move  Enter:Select  Esc:Back  ?:Help  q:Quit ",
        _ if w >= 40 => " jk:Move Enter Esc:Back q:Quit ",
        _ => " ?:Help ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;

    #[test]
    fn shows_hints_for_width() {
        let wide = render_to_string(80, 1, |frame| StatusBar::render(frame, frame.area(), Screen::Home, None));
        assert!(wide.contains("Home"));
        assert!(wide.contains("Enter:Open"));

        let narrow = render_to_string(30, 1, |frame| {
            StatusBar::render(frame, frame.area(), Screen::UpcomingExams, None)
        });
        assert!(narrow.contains("Exams"));
        assert!(narrow.contains("?:Help"));
        assert!(!narrow.contains("Enter"));
    }

    #[test]
    fn edit_hints_do_not_promise_save_on_enter() {
        let text = render_to_string(80, 1, |frame| {
            StatusBar::render(frame, frame.area(), Screen::EditReminder, None)
        });
        assert!(text.contains("Enter:Select"));
        assert!(!text.contains("Enter:Save"));
    }

    #[test]
    fn message_replaces_hints() {
        let text = render_to_string(60, 1, |frame| {
            StatusBar::render(frame, frame.area(), Screen::ReminderDetail, Some("Delete is not available"))
        });
        assert!(text.contains("Delete is not available"));
        assert!(!text.contains("q:Quit"));
    }
}
