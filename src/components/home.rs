use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::HomeItem;
use crate::components::{button, card_title, header, wrap_text, ScreenLines};
use crate::countdown::{self, Urgency};
use crate::study::{Store, RECENT_SUGGESTIONS};
use crate::theme;

pub struct HomeView;

impl HomeView {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, items: &[HomeItem], cursor: usize) {
        let t = theme::current();
        let w = area.width as usize;
        let mut out = ScreenLines::new();

        header(&mut out, "Study Buddy", Some("HCI Course \u{2022} UQU"), false);

        for (i, item) in items.iter().enumerate() {
            let selected = i == cursor;
            match item {
                HomeItem::NextExam => {
                    let Some(exam) = store.next_exam() else {
                        continue;
                    };
                    let color = t.urgency_color(exam.urgency());
                    let label = Line::from(vec![
                        Span::styled(
                            "Next HCI Exam",
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!(" {} ", countdown::duration_label(exam.days_left)),
                            t.badge(exam.urgency()),
                        ),
                    ]);
                    out.push_item(label, selected);
                    out.push(card_title(&exam.title, selected, t.header));
                    out.push(Span::styled(
                        format!("  {} \u{2022} {}", exam.date, exam.time),
                        Style::default().fg(color),
                    ));
                }
                HomeItem::Reminder(id) => {
                    let Some(r) = store.reminder(id) else {
                        continue;
                    };
                    let when = match r.days_left {
                        Some(d) if r.urgency() == Urgency::Normal => {
                            format!("{} \u{2022} {}", countdown::duration_label(d), r.time)
                        }
                        _ => r.when(),
                    };
                    let dot = Span::styled(
                        "\u{25cf} ",
                        Style::default().fg(r.kind.color()),
                    );
                    let title = card_title(&r.title, selected, Style::default());
                    let mut spans = vec![dot];
                    spans.extend(title.spans);
                    out.push_item(Line::from(spans), selected);
                    out.push(Span::styled(format!("    {}", when), t.dim));
                }
                HomeItem::Suggestion => {
                    out.push_item(
                        card_title("\u{2726} AI Suggestion", selected, Style::default().fg(t.assistant)),
                        selected,
                    );
                    for line in wrap_text(RECENT_SUGGESTIONS[0], w.saturating_sub(2)) {
                        out.push(Span::raw(format!("  {}", line)));
                    }
                }
                HomeItem::Reminders => {
                    out.blank();
                    out.push_item(button("HCI Reminders", selected, true), selected);
                }
                HomeItem::Exams => out.push_item(button("HCI Exams", selected, true), selected),
                HomeItem::AddReminder => {
                    out.push_item(button("+ Add Reminder", selected, true), selected)
                }
            }
            if !matches!(item, HomeItem::Reminders | HomeItem::Exams) {
                out.blank();
            }
        }

        out.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::components::test_util::render_to_string;
    use chrono::NaiveDate;
    use std::time::Duration;

    #[test]
    fn shows_next_exam_and_home_cards() {
        let now = NaiveDate::from_ymd_opt(2025, 12, 14)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        let app = App::new(now, Duration::from_millis(1500));
        let items = app.home_items();
        let text = render_to_string(36, 40, |frame| {
            HomeView::render(frame, frame.area(), &app.store, &items, 0)
        });
        assert!(text.contains("Study Buddy"));
        assert!(text.contains("Next HCI Exam"));
        assert!(text.contains("18 hours"));
        assert!(text.contains("HCI Midterm Exam"));
        assert!(text.contains("Tomorrow \u{2022} 9:00 AM"));
        assert!(text.contains("Today \u{2022} 7:00 PM"));
        assert!(text.contains("3 days \u{2022} 2:00 PM"));
        assert!(text.contains("Add Reminder"));
    }
}
