use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;

use crate::components::add_reminder::{AddField, AddReminderState, GRID_COLUMNS};
use crate::components::edit_reminder::{EditField, EditReminderState};
use crate::study::{ReminderKind, Store, COURSES, SUGGESTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    RemindersList,
    ReminderDetail,
    AiAssistant,
    UpcomingExams,
    AddReminder,
    ExamDetail,
    CourseSelection,
    ReminderTypeSelection,
    EditReminder,
}

/// Selectable cards on the home screen, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeItem {
    NextExam,
    Reminder(String),
    Suggestion,
    Reminders,
    Exams,
    AddReminder,
}

pub const REMINDER_DETAIL_ACTIONS: usize = 3;
pub const EXAM_DETAIL_ACTIONS: usize = 2;

pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub previous_screen: Screen,
    pub now: NaiveDateTime,
    pub store: Store,
    /// Highlighted row on list-like screens. Reset on every screen change.
    pub cursor: usize,
    pub selected_reminder: Option<String>,
    pub selected_exam: Option<String>,
    pub selected_course: String,
    pub selected_kind: Option<ReminderKind>,
    pub suggestion: Option<&'static str>,
    pub add_form: Option<AddReminderState>,
    pub edit_form: Option<EditReminderState>,
    pub status_message: Option<String>,
    pub show_help: bool,
    confirm_delay: Duration,
}

impl App {
    pub fn new(now: NaiveDateTime, confirm_delay: Duration) -> Self {
        Self {
            running: true,
            screen: Screen::Home,
            previous_screen: Screen::Home,
            now,
            store: Store::new(),
            cursor: 0,
            selected_reminder: None,
            selected_exam: None,
            selected_course: String::new(),
            selected_kind: None,
            suggestion: None,
            add_form: None,
            edit_form: None,
            status_message: None,
            show_help: false,
            confirm_delay,
        }
    }

    pub fn home_items(&self) -> Vec<HomeItem> {
        let mut items = Vec::new();
        if self.store.next_exam().is_some() {
            items.push(HomeItem::NextExam);
        }
        for r in self.store.home_reminders() {
            items.push(HomeItem::Reminder(r.id.clone()));
        }
        items.extend([
            HomeItem::Suggestion,
            HomeItem::Reminders,
            HomeItem::Exams,
            HomeItem::AddReminder,
        ]);
        items
    }

    // ── navigation ──

    /// Go to `screen`, remembering where we came from.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.previous_screen = self.screen;
        self.switch_to(screen);
    }

    /// Go to `screen` without touching the previous screen.
    pub fn switch_to(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "switch screen");
        if screen != Screen::AddReminder {
            // Leaving the add flow also cancels a pending return.
            self.add_form = None;
        }
        if screen != Screen::EditReminder {
            self.edit_form = None;
        }
        if screen != Screen::AiAssistant {
            self.suggestion = None;
        }
        self.screen = screen;
        self.cursor = 0;
    }

    pub fn back(&mut self) {
        let target = match self.screen {
            Screen::Home => return,
            Screen::RemindersList
            | Screen::AiAssistant
            | Screen::UpcomingExams
            | Screen::CourseSelection => Screen::Home,
            Screen::ReminderDetail => self.previous_screen,
            Screen::ExamDetail => Screen::UpcomingExams,
            Screen::ReminderTypeSelection => Screen::CourseSelection,
            Screen::AddReminder => {
                if self.add_form.as_ref().is_some_and(|f| f.is_added()) {
                    return;
                }
                Screen::ReminderTypeSelection
            }
            Screen::EditReminder => Screen::RemindersList,
        };
        self.switch_to(target);
        if target == Screen::ReminderTypeSelection {
            self.cursor = self.kind_cursor();
        }
    }

    /// Type-selection row of the last picked category.
    fn kind_cursor(&self) -> usize {
        self.selected_kind
            .and_then(|k| ReminderKind::ALL.iter().position(|x| *x == k))
            .unwrap_or(0)
    }

    /// Number of selectable rows on the current list-like screen.
    pub fn item_count(&self) -> usize {
        match self.screen {
            Screen::Home => self.home_items().len(),
            Screen::RemindersList => self.store.reminders().len() + 1,
            Screen::ReminderDetail => REMINDER_DETAIL_ACTIONS,
            Screen::AiAssistant => {
                if self.suggestion.is_some() {
                    3
                } else {
                    1
                }
            }
            Screen::UpcomingExams => self.store.exams().len(),
            Screen::ExamDetail => EXAM_DETAIL_ACTIONS,
            Screen::CourseSelection => COURSES.len(),
            Screen::ReminderTypeSelection => ReminderKind::ALL.len(),
            Screen::AddReminder | Screen::EditReminder => 0,
        }
    }

    // ── input ──

    pub fn move_up(&mut self) {
        match self.screen {
            Screen::AddReminder => self.move_in_add_form(-(GRID_COLUMNS as isize)),
            Screen::EditReminder => {
                if let Some(f) = self.edit_form.as_mut() {
                    f.prev_field();
                }
            }
            _ => self.cursor = self.cursor.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self) {
        match self.screen {
            Screen::AddReminder => self.move_in_add_form(GRID_COLUMNS as isize),
            Screen::EditReminder => {
                if let Some(f) = self.edit_form.as_mut() {
                    f.next_field();
                }
            }
            _ => {
                let count = self.item_count();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
        }
    }

    pub fn move_left(&mut self) {
        match self.screen {
            Screen::AddReminder => self.move_in_add_form(-1),
            Screen::EditReminder => {
                if let Some(f) = self.edit_form.as_mut() {
                    f.cycle(-1);
                }
            }
            _ => {}
        }
    }

    pub fn move_right(&mut self) {
        match self.screen {
            Screen::AddReminder => self.move_in_add_form(1),
            Screen::EditReminder => {
                if let Some(f) = self.edit_form.as_mut() {
                    f.cycle(1);
                }
            }
            _ => {}
        }
    }

    fn move_in_add_form(&mut self, delta: isize) {
        let now = self.now;
        if let Some(f) = self.add_form.as_mut().filter(|f| !f.is_added()) {
            f.move_selection(delta, now);
        }
    }

    pub fn next_field(&mut self) {
        match self.screen {
            Screen::AddReminder => {
                if let Some(f) = self.add_form.as_mut() {
                    f.next_field();
                }
            }
            Screen::EditReminder => {
                if let Some(f) = self.edit_form.as_mut() {
                    f.next_field();
                }
            }
            _ => self.move_down(),
        }
    }

    pub fn prev_field(&mut self) {
        match self.screen {
            Screen::AddReminder => {
                if let Some(f) = self.add_form.as_mut() {
                    f.prev_field();
                }
            }
            Screen::EditReminder => {
                if let Some(f) = self.edit_form.as_mut() {
                    f.prev_field();
                }
            }
            _ => self.move_up(),
        }
    }

    /// True when keystrokes should go into a text field.
    pub fn is_typing(&self) -> bool {
        self.screen == Screen::EditReminder
            && self.edit_form.as_ref().is_some_and(|f| f.is_typing())
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(f) = self.edit_form.as_mut() {
            f.input_char(c);
        }
    }

    /// Deletes in the edit form, where it never leaves the screen.
    /// Everywhere else it goes back.
    pub fn backspace(&mut self) {
        match self.edit_form.as_mut() {
            Some(f) if self.screen == Screen::EditReminder => f.backspace(),
            _ => self.back(),
        }
    }

    /// Enter/Space on the highlighted row or field.
    pub fn activate(&mut self) {
        match self.screen {
            Screen::Home => self.activate_home(),
            Screen::RemindersList => {
                let reminder = self.store.reminders().get(self.cursor).map(|r| r.id.clone());
                match reminder {
                    Some(id) => self.open_reminder(id),
                    None => self.navigate_to(Screen::CourseSelection),
                }
            }
            Screen::ReminderDetail => match self.cursor {
                0 => self.toggle_selected_reminder(),
                1 => self.open_edit_form(),
                _ => self.status_message = Some("Delete is not available".to_string()),
            },
            Screen::AiAssistant => self.activate_assistant(),
            Screen::UpcomingExams => {
                if let Some(id) = self.store.exams().get(self.cursor).map(|e| e.id.clone()) {
                    self.selected_exam = Some(id);
                    self.navigate_to(Screen::ExamDetail);
                }
            }
            Screen::ExamDetail => match self.cursor {
                0 => self.start_study_reminder(),
                _ => self.status_message = Some("Study plans are not available".to_string()),
            },
            Screen::CourseSelection => {
                if let Some(course) = COURSES.get(self.cursor) {
                    self.select_course(course);
                }
            }
            Screen::ReminderTypeSelection => {
                if let Some(kind) = ReminderKind::ALL.get(self.cursor).copied() {
                    self.select_kind(kind);
                }
            }
            Screen::AddReminder => self.activate_add_form(),
            Screen::EditReminder => self.activate_edit_form(),
        }
    }

    fn activate_home(&mut self) {
        let Some(item) = self.home_items().into_iter().nth(self.cursor) else {
            return;
        };
        match item {
            HomeItem::NextExam | HomeItem::Exams => self.navigate_to(Screen::UpcomingExams),
            HomeItem::Reminder(id) => self.open_reminder(id),
            HomeItem::Suggestion => self.navigate_to(Screen::AiAssistant),
            HomeItem::Reminders => self.navigate_to(Screen::RemindersList),
            HomeItem::AddReminder => self.navigate_to(Screen::CourseSelection),
        }
    }

    fn activate_assistant(&mut self) {
        if self.suggestion.is_none() {
            self.ask_assistant();
            return;
        }
        match self.cursor {
            0 => self.navigate_to(Screen::CourseSelection),
            1 => self.status_message = Some("Schedule is not available".to_string()),
            _ => self.dismiss_suggestion(),
        }
    }

    pub fn ask_assistant(&mut self) {
        self.suggestion = SUGGESTIONS.choose(&mut rand::thread_rng()).copied();
        self.cursor = 0;
        tracing::debug!(suggestion = ?self.suggestion, "assistant suggestion");
    }

    pub fn dismiss_suggestion(&mut self) {
        self.suggestion = None;
        self.cursor = 0;
    }

    pub fn open_reminder(&mut self, id: String) {
        self.selected_reminder = Some(id);
        self.navigate_to(Screen::ReminderDetail);
    }

    pub fn toggle_selected_reminder(&mut self) {
        let Some(id) = self.selected_reminder.clone() else {
            return;
        };
        let Some(enabled) = self.store.reminder(&id).map(|r| r.enabled) else {
            return;
        };
        self.store.set_enabled(&id, !enabled);
        tracing::info!(reminder = %id, enabled = !enabled, "toggled reminder");
    }

    pub fn open_edit_form(&mut self) {
        let Some(reminder) = self
            .selected_reminder
            .as_deref()
            .and_then(|id| self.store.reminder(id))
        else {
            return;
        };
        let form = EditReminderState::new(reminder);
        self.switch_to(Screen::EditReminder);
        self.edit_form = Some(form);
    }

    fn activate_edit_form(&mut self) {
        let Some(field) = self.edit_form.as_ref().map(|f| f.active_field) else {
            return;
        };
        match field {
            EditField::Save => self.save_edit_form(),
            EditField::Cancel => self.back(),
            EditField::Title => self.next_field(),
            _ => self.move_right(),
        }
    }

    pub fn save_edit_form(&mut self) {
        let Some(form) = self.edit_form.as_ref() else {
            return;
        };
        if !form.is_valid() {
            self.status_message = Some("Title cannot be empty".to_string());
            return;
        }
        let updated = form.build(self.now);
        let id = updated.id.clone();
        if self.store.update_reminder(updated) {
            tracing::info!(reminder = %id, "saved reminder");
            self.selected_reminder = Some(id);
            self.status_message = Some("Reminder saved".to_string());
        }
        self.switch_to(Screen::ReminderDetail);
    }

    pub fn select_course(&mut self, course: &str) {
        self.selected_course = course.to_string();
        self.switch_to(Screen::ReminderTypeSelection);
    }

    pub fn select_kind(&mut self, kind: ReminderKind) {
        self.selected_kind = Some(kind);
        let form = AddReminderState::new(self.selected_course.clone(), kind, self.now);
        self.switch_to(Screen::AddReminder);
        self.add_form = Some(form);
    }

    /// "Set Study Reminder" from an exam: add flow for that course.
    fn start_study_reminder(&mut self) {
        let Some(exam) = self
            .selected_exam
            .as_deref()
            .and_then(|id| self.store.exam(id))
        else {
            return;
        };
        self.selected_course = exam.course_line();
        self.selected_kind = Some(ReminderKind::Study);
        let form = AddReminderState::new(self.selected_course.clone(), ReminderKind::Study, self.now);
        self.navigate_to(Screen::AddReminder);
        self.add_form = Some(form);
    }

    fn activate_add_form(&mut self) {
        let Some(field) = self.add_form.as_ref().map(|f| f.active_field) else {
            return;
        };
        match field {
            AddField::Submit => self.submit_add_form(Instant::now()),
            _ => self.next_field(),
        }
    }

    /// Add the reminder and start the confirmation timer.
    pub fn submit_add_form(&mut self, at: Instant) {
        let Some(form) = self.add_form.as_mut() else {
            return;
        };
        if form.is_added() {
            return;
        }
        form.refresh(self.now);
        let id = self.store.add_reminder(
            form.kind.flow_label().to_string(),
            form.kind,
            form.course.clone(),
            form.date_label().to_string(),
            form.time_label().to_string(),
            form.remaining.total_days,
        );
        form.mark_added(at, self.confirm_delay);
        tracing::info!(
            reminder = %id,
            kind = form.kind.key(),
            date = form.date_label(),
            time = form.time_label(),
            "added reminder"
        );
    }

    /// Advance the clock. Fires the pending confirmation return once.
    pub fn tick(&mut self, now: NaiveDateTime, instant: Instant) {
        self.now = now;
        let due = self
            .add_form
            .as_ref()
            .is_some_and(|f| f.should_return(instant));
        if due {
            self.switch_to(Screen::ReminderTypeSelection);
            self.cursor = self.kind_cursor();
        } else if let Some(form) = self.add_form.as_mut().filter(|f| !f.is_added()) {
            form.refresh(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 14)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn app() -> App {
        App::new(now(), Duration::from_millis(1500))
    }

    fn select(app: &mut App, index: usize) {
        app.cursor = index;
        app.activate();
    }

    #[test]
    fn home_cards_lead_to_their_screens() {
        let mut app = app();
        let items = app.home_items();
        assert_eq!(items.len(), 7);

        select(&mut app, 0);
        assert_eq!(app.screen, Screen::UpcomingExams);
        app.back();
        assert_eq!(app.screen, Screen::Home);

        select(&mut app, 1);
        assert_eq!(app.screen, Screen::ReminderDetail);
        assert_eq!(app.selected_reminder.as_deref(), Some("home-1"));
        app.back();
        assert_eq!(app.screen, Screen::Home);

        select(&mut app, 3);
        assert_eq!(app.screen, Screen::AiAssistant);
        app.back();
        select(&mut app, 4);
        assert_eq!(app.screen, Screen::RemindersList);
        app.back();
        select(&mut app, 6);
        assert_eq!(app.screen, Screen::CourseSelection);
    }

    #[test]
    fn reminder_detail_goes_back_to_where_it_came_from() {
        let mut app = app();
        app.navigate_to(Screen::RemindersList);
        select(&mut app, 2);
        assert_eq!(app.screen, Screen::ReminderDetail);
        assert_eq!(app.previous_screen, Screen::RemindersList);
        app.back();
        assert_eq!(app.screen, Screen::RemindersList);
    }

    #[test]
    fn back_targets() {
        let mut app = app();
        app.navigate_to(Screen::UpcomingExams);
        app.activate();
        assert_eq!(app.screen, Screen::ExamDetail);
        app.back();
        assert_eq!(app.screen, Screen::UpcomingExams);

        app.navigate_to(Screen::CourseSelection);
        app.select_course("User Research");
        assert_eq!(app.screen, Screen::ReminderTypeSelection);
        app.back();
        assert_eq!(app.screen, Screen::CourseSelection);

        app.select_course("User Research");
        app.select_kind(ReminderKind::Meeting);
        assert_eq!(app.screen, Screen::AddReminder);
        app.back();
        assert_eq!(app.screen, Screen::ReminderTypeSelection);
        assert!(app.add_form.is_none());
        // Meeting is the fourth entry of the type menu.
        assert_eq!(app.cursor, 3);
        assert_eq!(ReminderKind::ALL[app.cursor], ReminderKind::Meeting);
    }

    #[test]
    fn backspace_on_edit_screen_never_leaves_it() {
        let mut app = app();
        app.open_reminder("4".to_string());
        app.open_edit_form();
        app.input_char('!');
        app.next_field();
        assert!(!app.is_typing());
        app.backspace();
        assert_eq!(app.screen, Screen::EditReminder);
        assert_eq!(app.edit_form.as_ref().unwrap().title, "Project Deadline!");

        // Elsewhere it still goes back.
        app.switch_to(Screen::UpcomingExams);
        app.backspace();
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        app.navigate_to(Screen::UpcomingExams);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.cursor, 3);
        for _ in 0..10 {
            app.move_up();
        }
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn toggle_updates_active_count() {
        let mut app = app();
        app.navigate_to(Screen::RemindersList);
        select(&mut app, 0);
        select(&mut app, 0);
        assert_eq!(app.store.active_count(), 4);
        select(&mut app, 0);
        assert_eq!(app.store.active_count(), 5);
    }

    #[test]
    fn add_flow_adds_and_returns_once() {
        let mut app = app();
        app.navigate_to(Screen::CourseSelection);
        select(&mut app, 4);
        assert_eq!(app.screen, Screen::ReminderTypeSelection);
        assert_eq!(app.selected_course, "User Research");
        select(&mut app, 1);
        assert_eq!(app.screen, Screen::AddReminder);
        assert_eq!(app.selected_kind, Some(ReminderKind::Study));

        let start = Instant::now();
        app.submit_add_form(start);
        assert_eq!(app.store.reminders().len(), 6);
        // Submitting twice does not add twice.
        app.submit_add_form(start);
        assert_eq!(app.store.reminders().len(), 6);
        let added = app.store.reminders().last().unwrap();
        assert_eq!(added.title, "Study Session");
        assert_eq!(added.date, "Tomorrow");

        // Back is ignored while the confirmation shows.
        app.back();
        assert_eq!(app.screen, Screen::AddReminder);

        app.tick(now(), start + Duration::from_millis(1000));
        assert_eq!(app.screen, Screen::AddReminder);
        app.tick(now(), start + Duration::from_millis(1500));
        assert_eq!(app.screen, Screen::ReminderTypeSelection);
        assert_eq!(app.cursor, 1);
        assert!(app.add_form.is_none());
        app.tick(now(), start + Duration::from_millis(3000));
        assert_eq!(app.screen, Screen::ReminderTypeSelection);
    }

    #[test]
    fn leaving_the_add_screen_cancels_the_return() {
        let mut app = app();
        app.select_course("Inclusive Design");
        app.select_kind(ReminderKind::Exam);
        app.submit_add_form(Instant::now());
        app.switch_to(Screen::Home);
        app.tick(now(), Instant::now() + Duration::from_secs(10));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn add_form_arrows_move_the_pickers() {
        let mut app = app();
        app.select_course("Inclusive Design");
        app.select_kind(ReminderKind::Project);
        app.move_right();
        app.move_down();
        let form = app.add_form.as_ref().unwrap();
        assert_eq!(form.date_label(), "Dec 18");
        app.next_field();
        app.move_left();
        assert_eq!(app.add_form.as_ref().unwrap().time_label(), "8:00 AM");
    }

    #[test]
    fn edit_and_save_returns_to_detail() {
        let mut app = app();
        app.navigate_to(Screen::RemindersList);
        select(&mut app, 4);
        assert_eq!(app.selected_reminder.as_deref(), Some("5"));
        select(&mut app, 1);
        assert_eq!(app.screen, Screen::EditReminder);
        assert!(app.is_typing());

        app.input_char('!');
        app.edit_form.as_mut().unwrap().active_field = EditField::Save;
        app.activate();
        assert_eq!(app.screen, Screen::ReminderDetail);
        assert_eq!(app.store.reminder("5").unwrap().title, "Team Meeting!");
        // Editing does not overwrite where detail goes back to.
        app.back();
        assert_eq!(app.screen, Screen::RemindersList);
    }

    #[test]
    fn edit_cancel_goes_to_list() {
        let mut app = app();
        app.open_reminder("home-2".to_string());
        app.open_edit_form();
        app.back();
        assert_eq!(app.screen, Screen::RemindersList);
        assert!(app.edit_form.is_none());
    }

    #[test]
    fn assistant_suggests_and_dismisses() {
        let mut app = app();
        app.navigate_to(Screen::AiAssistant);
        assert_eq!(app.item_count(), 1);
        app.activate();
        assert!(app.suggestion.is_some_and(|s| SUGGESTIONS.contains(&s)));
        assert_eq!(app.item_count(), 3);
        select(&mut app, 2);
        assert!(app.suggestion.is_none());
        app.activate();
        select(&mut app, 0);
        assert_eq!(app.screen, Screen::CourseSelection);
    }

    #[test]
    fn exam_detail_starts_a_study_reminder() {
        let mut app = app();
        app.navigate_to(Screen::UpcomingExams);
        select(&mut app, 3);
        assert_eq!(app.screen, Screen::ExamDetail);
        select(&mut app, 0);
        assert_eq!(app.screen, Screen::AddReminder);
        let form = app.add_form.as_ref().unwrap();
        assert_eq!(form.course, "HCI Course");
        assert_eq!(form.kind, ReminderKind::Study);
    }

    #[test]
    fn disabled_actions_only_set_a_message() {
        let mut app = app();
        app.open_reminder("1".to_string());
        select(&mut app, 2);
        assert_eq!(app.screen, Screen::ReminderDetail);
        assert!(app.status_message.is_some());
        assert_eq!(app.store.reminders().len(), 5);
    }
}
