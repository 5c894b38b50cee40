use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};

use crate::components::{button, header, wrap_text, ScreenLines};
use crate::study::RECENT_SUGGESTIONS;
use crate::theme;

pub struct AssistantView;

impl AssistantView {
    /// Without a suggestion the screen offers "Ask AI". With one it shows
    /// the suggestion and its three follow-up actions.
    pub fn render(frame: &mut Frame, area: Rect, suggestion: Option<&str>, cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let accent = Style::default().fg(t.assistant);
        let mut out = ScreenLines::new();

        header(&mut out, "AI Assistant", Some("HCI Study Helper"), true);

        match suggestion {
            None => {
                out.push(Span::styled(
                    "\u{2726} HCI Study Assistant",
                    accent.add_modifier(Modifier::BOLD),
                ));
                for line in wrap_text("Get smart suggestions for your HCI course schedule", w) {
                    out.push(Span::styled(line, t.dim));
                }
                out.blank();

                out.push(Span::styled("Recent Suggestions", t.header));
                for s in RECENT_SUGGESTIONS {
                    for (i, line) in wrap_text(s, w.saturating_sub(2)).into_iter().enumerate() {
                        let bullet = if i == 0 { "\u{2022} " } else { "  " };
                        out.push(Span::raw(format!("{}{}", bullet, line)));
                    }
                }
                out.blank();

                out.push_item(button("\u{2726} Ask AI", cursor == 0, true), cursor == 0);
            }
            Some(text) => {
                out.push(Span::styled(
                    "\u{2726} AI Suggestion",
                    accent.add_modifier(Modifier::BOLD),
                ));
                for line in wrap_text(text, w) {
                    out.push(Span::raw(line));
                }
                out.blank();

                out.push_item(button("Add Reminder", cursor == 0, true), cursor == 0);
                out.push_item(button("View Schedule", cursor == 1, false), cursor == 1);
                out.push_item(button("Dismiss", cursor == 2, true), cursor == 2);
            }
        }

        out.render(frame, area);
    }
}
