use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const DATE_OPTIONS: [&str; 13] = [
    "Today", "Tomorrow", "Dec 15", "Dec 16", "Dec 17", "Dec 18", "Dec 19", "Dec 20", "Dec 21",
    "Dec 22", "Dec 23", "Dec 24", "Dec 25",
];

pub const TIME_OPTIONS: [&str; 17] = [
    "6:00 AM", "7:00 AM", "8:00 AM", "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM",
    "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM", "9:00 PM",
    "10:00 PM",
];

pub const DEFAULT_DATE: DateChoice = DateChoice::Tomorrow;
pub const DEFAULT_TIME: TimeChoice = TimeChoice { hour: 9, minute: 0 };

/// A day picked from the date menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateChoice {
    Today,
    Tomorrow,
    /// Day of December in the current year.
    December(u32),
}

impl DateChoice {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Today" => Some(Self::Today),
            "Tomorrow" => Some(Self::Tomorrow),
            other => {
                let day: u32 = other.strip_prefix("Dec ")?.trim().parse().ok()?;
                (1..=31).contains(&day).then_some(Self::December(day))
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Today => "Today".to_string(),
            Self::Tomorrow => "Tomorrow".to_string(),
            Self::December(day) => format!("Dec {}", day),
        }
    }

    /// Calendar day this choice points at, relative to `today`.
    ///
    /// December is hardcoded and never rolls into the next year.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::Tomorrow => today.succ_opt().unwrap_or(today),
            Self::December(day) => {
                NaiveDate::from_ymd_opt(today.year(), 12, (*day).clamp(1, 31)).unwrap_or(today)
            }
        }
    }
}

/// A time of day from the time menu or a stored label, on the 24-hour clock.
/// Menu entries are whole hours; stored labels such as "11:59 PM" keep
/// their minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeChoice {
    hour: u32,
    minute: u32,
}

impl TimeChoice {
    /// Parse a "9:00 AM" style label. 12 PM stays 12, 12 AM becomes 0.
    pub fn parse(label: &str) -> Option<Self> {
        let (clock, period) = label.trim().split_once(' ')?;
        let (hour, minute) = clock.split_once(':')?;
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        if !(1..=12).contains(&hour) || minute >= 60 {
            return None;
        }

        let hour = match (period.trim(), hour) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            _ => return None,
        };
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn label(&self) -> String {
        let (h, period) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", h, self.minute, period)
    }

    fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Time left until a date/time selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRemaining {
    /// Whole days, floored.
    pub days: i64,
    /// Remainder hours in `0..24`.
    pub hours: i64,
    /// Raw difference in days. Negative once the target has passed.
    pub total_days: f64,
}

impl TimeRemaining {
    pub fn is_past(&self) -> bool {
        self.total_days < 0.0
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::classify(Some(self.total_days))
    }

    /// "2 days and 3 hours", "5 hours", "Less than 1 hour".
    pub fn phrase(&self) -> String {
        if self.is_past() {
            return "Already passed".to_string();
        }

        let mut out = String::new();
        if self.days > 0 {
            out.push_str(&plural(self.days, "day"));
        }
        if self.days > 0 && self.hours > 0 {
            out.push_str(" and ");
        }
        if self.hours > 0 {
            out.push_str(&plural(self.hours, "hour"));
        }
        if out.is_empty() {
            out.push_str("Less than 1 hour");
        }
        out
    }
}

/// Compute the time left from `now` until `date` at `time`, seconds zeroed.
/// Nothing guards against targets in the past.
pub fn time_remaining(date: DateChoice, time: TimeChoice, now: NaiveDateTime) -> TimeRemaining {
    let target = date.resolve(now.date()).and_time(time.as_time());
    let delta: Duration = target - now;

    let total_hours = delta.num_milliseconds() as f64 / 3_600_000.0;
    let total_days = total_hours / 24.0;

    TimeRemaining {
        days: total_days.floor() as i64,
        hours: (total_hours.floor() as i64).rem_euclid(24),
        total_days,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Hours,
    Days,
}

impl Unit {
    pub fn word(&self, value: i64) -> &'static str {
        match (self, value) {
            (Unit::Hours, 1) => "hour",
            (Unit::Hours, _) => "hours",
            (Unit::Days, 1) => "day",
            (Unit::Days, _) => "days",
        }
    }
}

/// A fractional day count rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounded {
    pub value: i64,
    pub unit: Unit,
}

/// Round a days-remaining value: under a day it becomes hours, otherwise days.
pub fn rounded(days_left: f64) -> Rounded {
    let days_left = days_left.max(0.0);
    if days_left < 1.0 {
        let hours = (days_left * 24.0).round() as i64;
        if hours < 24 {
            return Rounded { value: hours, unit: Unit::Hours };
        }
    }
    Rounded {
        value: days_left.round() as i64,
        unit: Unit::Days,
    }
}

/// "18 hours", "3 days".
pub fn duration_label(days_left: f64) -> String {
    let r = rounded(days_left);
    format!("{} {}", r.value, r.unit.word(r.value))
}

/// "18 hours left", "1 day left".
pub fn left_label(days_left: f64) -> String {
    format!("{} left", duration_label(days_left))
}

/// "18h", "3d".
pub fn short_label(days_left: f64) -> String {
    let r = rounded(days_left);
    match r.unit {
        Unit::Hours => format!("{}h", r.value),
        Unit::Days => format!("{}d", r.value),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Urgent,
    Normal,
}

impl Urgency {
    /// A day or less left is urgent. No value at all is not.
    pub fn classify(days_left: Option<f64>) -> Self {
        match days_left {
            Some(d) if d <= 1.0 => Urgency::Urgent,
            _ => Urgency::Normal,
        }
    }

    pub fn is_urgent(&self) -> bool {
        *self == Urgency::Urgent
    }
}

fn plural(n: i64, word: &str) -> String {
    format!("{} {}{}", n, word, if n == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn time(label: &str) -> TimeChoice {
        TimeChoice::parse(label).unwrap()
    }

    #[test]
    fn parses_every_menu_option() {
        for label in DATE_OPTIONS {
            let choice = DateChoice::parse(label).unwrap();
            assert_eq!(choice.label(), label);
        }
        for label in TIME_OPTIONS {
            let choice = TimeChoice::parse(label).unwrap();
            assert_eq!(choice.label(), label);
        }
    }

    #[test]
    fn rejects_labels_outside_the_menus() {
        assert_eq!(DateChoice::parse("Yesterday"), None);
        assert_eq!(DateChoice::parse("Dec 32"), None);
        assert_eq!(DateChoice::parse("Monday, Dec 16"), None);
        assert_eq!(TimeChoice::parse("13:00 PM"), None);
        assert_eq!(TimeChoice::parse("9:00"), None);
        assert_eq!(TimeChoice::parse("9:00 XM"), None);
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(time("12:00 PM").hour(), 12);
        assert_eq!(time("12:00 AM").hour(), 0);
        assert_eq!(time("1:00 PM").hour(), 13);
        assert_eq!(time("11:59 PM").hour(), 23);
        assert_eq!(time("12:00 AM").label(), "12:00 AM");
    }

    #[test]
    fn off_menu_minutes_are_kept() {
        let late = time("11:59 PM");
        assert_eq!(late.minute(), 59);
        assert_eq!(late.label(), "11:59 PM");

        let r = time_remaining(DateChoice::December(18), late, at(2025, 12, 18, 22, 59));
        assert_eq!((r.days, r.hours), (0, 1));
        assert_eq!(r.total_days, 1.0 / 24.0);
    }

    #[test]
    fn tomorrow_morning_matches_calendar_arithmetic() {
        // 14:30 today to 09:00 tomorrow is 18h30m.
        let now = at(2025, 12, 14, 14, 30);
        let r = time_remaining(DateChoice::Tomorrow, time("9:00 AM"), now);
        assert_eq!(r.days, 0);
        assert_eq!(r.hours, 18);
        assert!((r.total_days - 18.5 / 24.0).abs() < 1e-9);
        assert_eq!(r.phrase(), "18 hours");
    }

    #[test]
    fn december_date_spans_days_and_hours() {
        let now = at(2025, 12, 10, 8, 0);
        let r = time_remaining(DateChoice::December(15), time("9:00 AM"), now);
        assert_eq!((r.days, r.hours), (5, 1));
        assert_eq!(r.phrase(), "5 days and 1 hour");
        assert_eq!(r.urgency(), Urgency::Normal);
    }

    #[test]
    fn tomorrow_rolls_into_next_month() {
        let now = at(2025, 11, 30, 21, 0);
        let r = time_remaining(DateChoice::Tomorrow, time("9:00 AM"), now);
        assert_eq!((r.days, r.hours), (0, 12));
    }

    #[test]
    fn december_never_rolls_the_year() {
        let now = at(2026, 1, 5, 12, 0);
        let target = DateChoice::December(20).resolve(now.date());
        assert_eq!(target, NaiveDate::from_ymd_opt(2026, 12, 20).unwrap());
    }

    #[test]
    fn same_day_target_already_past_is_negative() {
        let now = at(2025, 12, 14, 20, 30);
        let r = time_remaining(DateChoice::Today, time("7:00 PM"), now);
        assert!(r.total_days < 0.0);
        assert!(r.is_past());
        assert_eq!(r.days, -1);
        assert!((0..24).contains(&r.hours));
        assert_eq!(r.phrase(), "Already passed");
        assert!(r.urgency().is_urgent());
    }

    #[test]
    fn less_than_an_hour() {
        let now = at(2025, 12, 14, 18, 15);
        let r = time_remaining(DateChoice::Today, time("7:00 PM"), now);
        assert_eq!((r.days, r.hours), (0, 0));
        assert_eq!(r.phrase(), "Less than 1 hour");
    }

    #[test]
    fn rounding_helper() {
        assert_eq!(rounded(18.0 / 24.0), Rounded { value: 18, unit: Unit::Hours });
        assert_eq!(rounded(3.0), Rounded { value: 3, unit: Unit::Days });
        assert_eq!(rounded(0.99), Rounded { value: 1, unit: Unit::Days });
        assert_eq!(rounded(-0.5), Rounded { value: 0, unit: Unit::Hours });
        assert_eq!(left_label(18.0 / 24.0), "18 hours left");
        assert_eq!(left_label(0.99), "1 day left");
        assert_eq!(left_label(3.0), "3 days left");
        assert_eq!(duration_label(0.5), "12 hours");
        assert_eq!(duration_label(1.0), "1 day");
        assert_eq!(short_label(0.75), "18h");
        assert_eq!(short_label(16.0), "16d");
    }

    #[test]
    fn floor_and_rounding_helpers_disagree_near_a_day() {
        // 0.99 days ahead is 23h45m36s.
        let now = at(2025, 12, 14, 9, 14) + Duration::seconds(24);
        let r = time_remaining(DateChoice::Tomorrow, time("9:00 AM"), now);
        assert_eq!(r.days, 0);
        assert_eq!(r.hours, 23);
        assert_eq!(rounded(r.total_days), Rounded { value: 1, unit: Unit::Days });
    }

    #[test]
    fn urgency_threshold() {
        assert_eq!(Urgency::classify(Some(1.0)), Urgency::Urgent);
        assert_eq!(Urgency::classify(Some(0.3)), Urgency::Urgent);
        assert_eq!(Urgency::classify(Some(1.0001)), Urgency::Normal);
        assert_eq!(Urgency::classify(Some(16.0)), Urgency::Normal);
        assert_eq!(Urgency::classify(None), Urgency::Normal);
    }
}
