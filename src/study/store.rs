use super::exam::{Exam, Priority};
use super::reminder::{Reminder, ReminderKind};

/// In-memory study data. Seeded with the mock course data and never written
/// to disk.
#[derive(Debug, Clone)]
pub struct Store {
    home: Vec<Reminder>,
    reminders: Vec<Reminder>,
    exams: Vec<Exam>,
    added: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            home: home_reminders(),
            reminders: list_reminders(),
            exams: exams(),
            added: 0,
        }
    }

    /// Reminders pinned to the home screen cards.
    pub fn home_reminders(&self) -> &[Reminder] {
        &self.home
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn active_count(&self) -> usize {
        self.reminders.iter().filter(|r| r.enabled).count()
    }

    /// The exam with the least time left.
    pub fn next_exam(&self) -> Option<&Exam> {
        self.exams
            .iter()
            .min_by(|a, b| a.days_left.total_cmp(&b.days_left))
    }

    pub fn reminder(&self, id: &str) -> Option<&Reminder> {
        self.home
            .iter()
            .chain(self.reminders.iter())
            .find(|r| r.id == id)
    }

    pub fn exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    fn reminder_mut(&mut self, id: &str) -> Option<&mut Reminder> {
        self.home
            .iter_mut()
            .chain(self.reminders.iter_mut())
            .find(|r| r.id == id)
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.reminder_mut(id) {
            Some(r) => {
                r.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Replace the reminder with the same id. Returns false if there is none.
    pub fn update_reminder(&mut self, updated: Reminder) -> bool {
        match self.reminder_mut(&updated.id) {
            Some(r) => {
                *r = updated;
                true
            }
            None => false,
        }
    }

    /// Append a reminder created in the add flow and return its id.
    pub fn add_reminder(
        &mut self,
        title: String,
        kind: ReminderKind,
        course_name: String,
        date: String,
        time: String,
        days_left: f64,
    ) -> String {
        self.added += 1;
        let id = format!("added-{}", self.added);
        self.reminders.push(Reminder {
            id: id.clone(),
            title,
            time,
            date,
            kind,
            enabled: true,
            course_name: Some(course_name),
            days_left: Some(days_left.max(0.0)),
        });
        id
    }
}

fn reminder(
    id: &str,
    title: &str,
    time: &str,
    date: &str,
    kind: ReminderKind,
    course: &str,
    days_left: f64,
) -> Reminder {
    Reminder {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        date: date.to_string(),
        kind,
        enabled: true,
        course_name: Some(course.to_string()),
        days_left: Some(days_left),
    }
}

fn home_reminders() -> Vec<Reminder> {
    vec![
        reminder(
            "home-1",
            "Review HCI Slides",
            "7:00 PM",
            "Today",
            ReminderKind::Study,
            "Fundamentals of HCI",
            0.5,
        ),
        reminder(
            "home-2",
            "HCI Project Meeting",
            "2:00 PM",
            "Dec 17",
            ReminderKind::Meeting,
            "User Interface Design 1",
            3.0,
        ),
    ]
}

fn list_reminders() -> Vec<Reminder> {
    vec![
        reminder("1", "Midterm Exam", "9:00 AM", "Tomorrow", ReminderKind::Exam, "User Interface Design 1", 0.75),
        reminder("2", "Lab Session", "10:00 AM", "Tomorrow", ReminderKind::Class, "User Research", 0.8),
        reminder("3", "Study Session", "7:00 PM", "Today", ReminderKind::Study, "Fundamentals of HCI", 0.3),
        reminder("4", "Project Deadline", "11:59 PM", "Dec 18", ReminderKind::Project, "User Interface Design 2", 5.0),
        reminder("5", "Team Meeting", "2:00 PM", "Dec 16", ReminderKind::Meeting, "Usability Evaluation", 3.0),
    ]
}

fn exam(id: &str, title: &str, date: &str, time: &str, days_left: f64, priority: Priority) -> Exam {
    Exam {
        id: id.to_string(),
        course: "HCI".to_string(),
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        days_left,
        priority,
    }
}

fn exams() -> Vec<Exam> {
    vec![
        exam("1", "HCI Midterm Exam", "Tomorrow", "9:00 AM", 0.75, Priority::High),
        exam("2", "HCI Lab Test", "Monday, Dec 16", "10:00 AM", 3.0, Priority::Medium),
        exam("3", "HCI Final Project Review", "Friday, Dec 20", "2:00 PM", 7.0, Priority::Medium),
        exam("4", "HCI Final Exam", "Sunday, Dec 29", "1:00 PM", 16.0, Priority::High),
    ]
}
