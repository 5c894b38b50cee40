pub mod exam;
pub mod reminder;
pub mod store;

pub use exam::{Exam, Priority};
pub use reminder::{Reminder, ReminderKind};
pub use store::Store;

pub const COURSES: [&str; 9] = [
    "Fundamentals of Human-Computer Interaction",
    "Human Factors in Design",
    "User Interface Design 1",
    "User Interface Design 2",
    "User Research",
    "Usability Evaluation",
    "Information Architecture",
    "Inclusive Design",
    "Prototyping Methods",
];

pub const SUGGESTIONS: [&str; 5] = [
    "You have an HCI exam in 18 hours. Want to add another reminder?",
    "Best time to study HCI today is 7 PM based on your schedule.",
    "You haven't reviewed HCI slides this week. Want to add it to your plan?",
    "HCI project report due in 5 days. Start working on it today?",
    "HCI lab session tomorrow at 10 AM. Review the materials tonight.",
];

pub const RECENT_SUGGESTIONS: [&str; 2] = [
    "You have an HCI exam in 18 hours. Best time to study is 7 PM.",
    "HCI lab session tomorrow. Review materials tonight.",
];
