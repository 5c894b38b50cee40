use crate::countdown::Urgency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    #[allow(dead_code)]
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exam {
    pub id: String,
    pub course: String,
    pub title: String,
    pub date: String,
    pub time: String,
    /// Can be fractional, 0.75 is 18 hours.
    pub days_left: f64,
    pub priority: Priority,
}

impl Exam {
    pub fn urgency(&self) -> Urgency {
        Urgency::classify(Some(self.days_left))
    }

    pub fn course_line(&self) -> String {
        format!("{} Course", self.course)
    }
}
