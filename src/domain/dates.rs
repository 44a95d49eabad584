use chrono::{Local, NaiveDate, Timelike};

/// Where a deadline stands relative to a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    None,
    Overdue,
    Today,
    Upcoming,
}

/// Classify a deadline against the current local date
pub fn deadline_status(deadline: Option<NaiveDate>) -> DeadlineStatus {
    deadline_status_on(deadline, Local::now().date_naive())
}

fn deadline_status_on(deadline: Option<NaiveDate>, today: NaiveDate) -> DeadlineStatus {
    match deadline {
        None => DeadlineStatus::None,
        Some(date) if date < today => DeadlineStatus::Overdue,
        Some(date) if date == today => DeadlineStatus::Today,
        Some(_) => DeadlineStatus::Upcoming,
    }
}

/// Format a deadline for display, e.g. "15 Sep 2026"
pub fn format_date(deadline: Option<NaiveDate>) -> String {
    match deadline {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "No date".to_string(),
    }
}

/// Time-of-day greeting for the header banner
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub fn greeting_line() -> String {
    let greeting = greeting_for_hour(Local::now().hour());
    format!("{}! What would you like to work on today?", greeting)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deadline_status_classification() {
        let today = day(2026, 8, 30);
        assert_eq!(deadline_status_on(None, today), DeadlineStatus::None);
        assert_eq!(
            deadline_status_on(Some(day(2026, 8, 29)), today),
            DeadlineStatus::Overdue
        );
        assert_eq!(
            deadline_status_on(Some(day(2026, 8, 30)), today),
            DeadlineStatus::Today
        );
        assert_eq!(
            deadline_status_on(Some(day(2026, 8, 31)), today),
            DeadlineStatus::Upcoming
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(day(2026, 9, 15))), "15 Sep 2026");
        assert_eq!(format_date(Some(day(2026, 1, 2))), "02 Jan 2026");
        assert_eq!(format_date(None), "No date");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }
}
