pub mod add_reminder;
pub mod assistant;
pub mod course_select;
pub mod edit_reminder;
pub mod exam_detail;
pub mod exam_list;
pub mod home;
pub mod kind_select;
pub mod reminder_detail;
pub mod reminder_list;
pub mod status_bar;
pub mod watch;

pub use add_reminder::AddReminderView;
pub use assistant::AssistantView;
pub use course_select::CourseSelect;
pub use edit_reminder::EditReminderView;
pub use exam_detail::ExamDetail;
pub use exam_list::ExamList;
pub use home::HomeView;
pub use kind_select::KindSelect;
pub use reminder_detail::ReminderDetail;
pub use reminder_list::ReminderList;
pub use status_bar::StatusBar;
pub use watch::Watch;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

/// Lines of a screen plus the line that holds the keyboard focus.
#[derive(Default)]
pub struct ScreenLines {
    pub lines: Vec<Line<'static>>,
    pub focus: Option<usize>,
}

impl ScreenLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Push a line and mark it as focused.
    pub fn push_focused(&mut self, line: impl Into<Line<'static>>) {
        self.focus = Some(self.lines.len());
        self.lines.push(line.into());
    }

    /// Push a selectable row, focused when `selected`.
    pub fn push_item(&mut self, line: Line<'static>, selected: bool) {
        if selected {
            self.push_focused(line);
        } else {
            self.push(line);
        }
    }

    /// Render, scrolled so the focused line stays in view.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let height = area.height as usize;
        let offset = match self.focus {
            Some(f) if height > 0 && f + 2 > height => (f + 2 - height).min(self.lines.len()),
            _ => 0,
        };
        let para = Paragraph::new(self.lines).scroll((offset as u16, 0));
        frame.render_widget(para, area);
    }
}

/// Title block shared by every screen: optional back chevron, title, subtitle.
pub fn header(out: &mut ScreenLines, title: &str, subtitle: Option<&str>, back: bool) {
    let t = theme::current();
    if back {
        out.push(Span::styled(
            "\u{2039} Back",
            Style::default().fg(t.accent),
        ));
    }
    out.push(Span::styled(title.to_string(), t.header));
    if let Some(sub) = subtitle {
        out.push(Span::styled(sub.to_string(), t.dim));
    }
    out.blank();
}

/// A button row: "› label" when selected.
pub fn button(label: &str, selected: bool, enabled: bool) -> Line<'static> {
    let t = theme::current();
    let marker = if selected { "\u{203a} " } else { "  " };
    let style = if !enabled {
        t.disabled
    } else if selected {
        t.selected
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(t.accent)),
        Span::styled(format!(" {} ", label), style),
    ])
}

/// First line of a card: title with the selection marker.
pub fn card_title(title: &str, selected: bool, style: Style) -> Line<'static> {
    let t = theme::current();
    let marker = if selected { "\u{203a} " } else { "  " };
    let style = if selected { t.selected } else { style };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(t.accent)),
        Span::styled(title.to_string(), style),
    ])
}

/// Word-wrap `s` to `width` columns, breaking overlong words.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Best time to study HCI today is 7 PM", 12);
        assert_eq!(lines, vec!["Best time to", "study HCI", "today is 7", "PM"]);
    }

    #[test]
    fn wraps_overlong_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate("Usability Evaluation", 10), "Usabili...");
        assert_eq!(truncate("Lab", 10), "Lab");
    }

    #[test]
    fn focused_line_scrolls_into_view() {
        let mut screen = ScreenLines::new();
        for i in 0..20 {
            screen.push_item(Line::from(format!("row {}", i)), i == 15);
        }
        let text = test_util::render_to_string(10, 5, |frame| screen.render(frame, frame.area()));
        assert!(text.contains("row 15"));
        assert!(!text.contains("row 0 "));
    }
}
