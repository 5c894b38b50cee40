mod app;
mod components;
mod config;
mod countdown;
mod event;
mod logging;
mod study;
mod theme;
mod tui;

use std::time::Instant;

use app::{App, Screen};
use chrono::Local;
use color_eyre::Result;
use config::Config;
use event::Action;
use ratatui::layout::{Constraint, Layout, Rect};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = logging::init()?;

    let config = Config::load();
    theme::init(config.theme.clone().into_theme());
    tracing::info!(
        theme = %theme::current().name,
        tick_rate_ms = config.tick_rate_ms,
        "starting study buddy"
    );

    let mut app = App::new(Local::now().naive_local(), config.confirm_delay());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app, &config);
    tui::restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exited with error");
    } else {
        tracing::info!("exited");
    }
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App, config: &Config) -> Result<()> {
    while app.running {
        app.tick(Local::now().naive_local(), Instant::now());

        terminal.draw(|frame| {
            let area = frame.area();

            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            let screen_area = components::Watch::render(frame, layout[0], app.now);
            render_screen(frame, screen_area, app);

            if app.show_help {
                render_help(frame, area);
            }

            components::StatusBar::render(
                frame,
                layout[1],
                app.screen,
                app.status_message.as_deref(),
            );
        })?;

        if let Some(key) = event::next_key_event(config.tick_rate())? {
            // Clear status message on any key
            app.status_message = None;

            // Help overlay takes priority
            if app.show_help {
                if matches!(
                    event::action_for(key, false),
                    Some(Action::Back | Action::Help)
                ) {
                    app.show_help = false;
                }
                continue;
            }

            if let Some(action) = event::action_for(key, app.is_typing()) {
                handle_action(app, action);
            }
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.running = false,
        Action::Up => app.move_up(),
        Action::Down => app.move_down(),
        Action::Left => app.move_left(),
        Action::Right => app.move_right(),
        Action::NextField => app.next_field(),
        Action::PrevField => app.prev_field(),
        Action::Activate => app.activate(),
        Action::Back => app.back(),
        Action::Help => app.show_help = true,
        Action::Input(c) => app.input_char(c),
        Action::Backspace => app.backspace(),
    }
}

fn render_screen(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let cursor = app.cursor;
    match app.screen {
        Screen::Home => {
            let items = app.home_items();
            components::HomeView::render(frame, area, &app.store, &items, cursor);
        }
        Screen::RemindersList => components::ReminderList::render(
            frame,
            area,
            app.store.reminders(),
            app.store.active_count(),
            cursor,
        ),
        Screen::ReminderDetail => {
            let reminder = app
                .selected_reminder
                .as_deref()
                .and_then(|id| app.store.reminder(id));
            components::ReminderDetail::render(frame, area, reminder, cursor);
        }
        Screen::AiAssistant => components::AssistantView::render(frame, area, app.suggestion, cursor),
        Screen::UpcomingExams => components::ExamList::render(frame, area, app.store.exams(), cursor),
        Screen::ExamDetail => {
            let exam = app.selected_exam.as_deref().and_then(|id| app.store.exam(id));
            components::ExamDetail::render(frame, area, exam, cursor);
        }
        Screen::CourseSelection => components::CourseSelect::render(frame, area, cursor),
        Screen::ReminderTypeSelection => {
            components::KindSelect::render(frame, area, &app.selected_course, cursor)
        }
        Screen::AddReminder => {
            if let Some(ref form) = app.add_form {
                components::AddReminderView::render(frame, area, form);
            }
        }
        Screen::EditReminder => {
            if let Some(ref form) = app.edit_form {
                components::EditReminderView::render(frame, area, form);
            }
        }
    }
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

    let t = theme::current();

    let popup_w = area.width.clamp(30, 46);
    let popup_h = area.height.clamp(12, 20);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(t.accent).add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), key_style),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Navigation", section_style)),
        entry("\u{2191}\u{2193} / j k", "Move selection"),
        entry("\u{2190}\u{2192} / h l", "Change value"),
        entry("Tab", "Next field"),
        entry("Shift-Tab", "Previous field"),
        Line::from(""),
        Line::from(Span::styled("Actions", section_style)),
        entry("Enter/Space", "Open or select"),
        entry("Esc/Bksp", "Back"),
        entry("?", "Toggle this help"),
        entry("q / Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Red means a day or less is left.",
            t.dim,
        )),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
