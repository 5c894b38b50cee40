use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use crate::theme;

/// Screen size of the simulated watch, in cells. Roughly the 368x448 case.
pub const WATCH_WIDTH: u16 = 40;
pub const WATCH_HEIGHT: u16 = 24;

/// The device bezel: a rounded case with a clock in the top border and the
/// digital crown and side button drawn on the right edge.
pub struct Watch;

impl Watch {
    /// Draw the case centered in `area` and return the screen area inside it.
    pub fn render(frame: &mut Frame, area: Rect, now: NaiveDateTime) -> Rect {
        let t = theme::current();
        let case = centered(area, WATCH_WIDTH, WATCH_HEIGHT);

        let clock = Line::from(Span::styled(
            format!(" {} ", now.format("%H:%M")),
            t.header,
        ));
        let block = Block::default()
            .title(clock)
            .title_alignment(Alignment::Right)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.bezel)
            .padding(Padding::horizontal(1));

        let screen = block.inner(case);
        frame.render_widget(block, case);

        // Crown at a quarter of the height, side button below it.
        let side_x = case.x + case.width;
        if side_x < area.x + area.width && case.height >= 8 {
            let crown_y = case.y + case.height / 4;
            let button_y = case.y + case.height * 45 / 100 + 1;
            let crown = Rect::new(side_x, crown_y, 1, 3.min(case.height));
            let button = Rect::new(side_x, button_y, 1, 2);
            frame.render_widget(
                Paragraph::new(vec![Line::from("\u{2590}"); 3]).style(t.bezel),
                crown,
            );
            frame.render_widget(
                Paragraph::new(vec![Line::from("\u{258c}"); 2]).style(t.bezel),
                button,
            );
        }

        screen
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn centers_and_shrinks() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered(area, 40, 24), Rect::new(30, 3, 40, 24));
        let small = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(small, 40, 24), Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn draws_clock_in_the_case() {
        let now = NaiveDate::from_ymd_opt(2025, 12, 14)
            .unwrap()
            .and_hms_opt(9, 41, 0)
            .unwrap();
        let mut inner = Rect::default();
        let text = render_to_string(60, 30, |frame| {
            inner = Watch::render(frame, frame.area(), now);
        });
        assert!(text.contains("09:41"));
        assert_eq!(inner.width, WATCH_WIDTH - 4);
        assert_eq!(inner.height, WATCH_HEIGHT - 2);
    }
}
