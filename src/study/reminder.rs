use ratatui::style::Color;

use crate::countdown::Urgency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Study,
    Exam,
    Project,
    Class,
    Meeting,
}

impl ReminderKind {
    /// Order of the "Add Reminder" type menu.
    pub const ALL: [ReminderKind; 5] = [
        ReminderKind::Exam,
        ReminderKind::Study,
        ReminderKind::Project,
        ReminderKind::Meeting,
        ReminderKind::Class,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReminderKind::Study => "study",
            ReminderKind::Exam => "exam",
            ReminderKind::Project => "project",
            ReminderKind::Class => "class",
            ReminderKind::Meeting => "meeting",
        }
    }

    /// Short label used on list rows.
    pub fn list_label(&self) -> &'static str {
        match self {
            ReminderKind::Study => "Study",
            ReminderKind::Exam => "Exam",
            ReminderKind::Project => "Project",
            ReminderKind::Class => "Lab",
            ReminderKind::Meeting => "Meeting",
        }
    }

    pub fn detail_label(&self) -> &'static str {
        match self {
            ReminderKind::Class => "Lab Session",
            other => other.list_label(),
        }
    }

    /// Label shown while adding a reminder ("Study Session is in ...").
    pub fn flow_label(&self) -> &'static str {
        match self {
            ReminderKind::Study => "Study Session",
            ReminderKind::Exam => "Exam",
            ReminderKind::Project => "Project Deadline",
            ReminderKind::Class => "Lab Session",
            ReminderKind::Meeting => "Meeting",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            ReminderKind::Study => "Add Study Reminder",
            ReminderKind::Exam => "Add Exam Reminder",
            ReminderKind::Project => "Add Project Reminder",
            ReminderKind::Class => "Add Lab Reminder",
            ReminderKind::Meeting => "Add Meeting Reminder",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ReminderKind::Study => Color::Blue,
            ReminderKind::Exam => Color::Red,
            ReminderKind::Project => Color::Magenta,
            ReminderKind::Class => Color::Rgb(249, 115, 22), // orange
            ReminderKind::Meeting => Color::Green,
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub time: String,
    pub date: String,
    pub kind: ReminderKind,
    pub enabled: bool,
    pub course_name: Option<String>,
    /// Fractional days until the reminder fires.
    pub days_left: Option<f64>,
}

impl Reminder {
    pub fn urgency(&self) -> Urgency {
        Urgency::classify(self.days_left)
    }

    /// "Tomorrow • 9:00 AM"
    pub fn when(&self) -> String {
        format!("{} \u{2022} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_tables_differ_per_call_site() {
        assert_eq!(ReminderKind::Class.list_label(), "Lab");
        assert_eq!(ReminderKind::Class.detail_label(), "Lab Session");
        assert_eq!(ReminderKind::Study.detail_label(), "Study");
        assert_eq!(ReminderKind::Study.flow_label(), "Study Session");
        assert_eq!(ReminderKind::Project.flow_label(), "Project Deadline");
        assert_eq!(ReminderKind::Meeting.menu_label(), "Add Meeting Reminder");
    }

    #[test]
    fn kind_cycles_through_menu_order() {
        let mut kind = ReminderKind::Exam;
        for _ in 0..ReminderKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, ReminderKind::Exam);
        assert_eq!(ReminderKind::Exam.prev(), ReminderKind::Class);
        assert_eq!(ReminderKind::Exam.next(), ReminderKind::Study);
    }

    #[test]
    fn missing_days_left_is_not_urgent() {
        let reminder = Reminder {
            id: "x".into(),
            title: "Read chapter 4".into(),
            time: "9:00 AM".into(),
            date: "Dec 20".into(),
            kind: ReminderKind::Study,
            enabled: true,
            course_name: None,
            days_left: None,
        };
        assert_eq!(reminder.urgency(), Urgency::Normal);
        assert_eq!(reminder.when(), "Dec 20 \u{2022} 9:00 AM");
    }
}
