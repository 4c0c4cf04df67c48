use chrono::NaiveDate;
use js_sys::Date;
use shared::{parse_calendar_date, reference_date};

/// The user's local calendar date
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .and_then(|date| date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
        .map(reference_date)
        .unwrap_or_else(|| reference_date(chrono::Local::now().naive_local()))
}

/// Format a schedule date for display (e.g., "October 19, 2026").
/// Unparseable input is shown as-is.
pub fn format_date_for_display(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "No date".to_string();
    }
    match parse_calendar_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Short label relative to `today` ("Today", "In 3 days", "2 days ago")
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n if n > 1 => format!("In {} days", n),
        n => format!("{} days ago", -n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2026-03-05"), "March 5, 2026");
        assert_eq!(format_date_for_display("2026-10-19T08:30:00Z"), "October 19, 2026");
        assert_eq!(format_date_for_display("TBD"), "TBD");
        assert_eq!(format_date_for_display("  "), "No date");
    }

    #[wasm_bindgen_test]
    fn test_relative_day_label() {
        let today = day(2026, 10, 19);
        assert_eq!(relative_day_label(today, today), "Today");
        assert_eq!(relative_day_label(day(2026, 10, 20), today), "Tomorrow");
        assert_eq!(relative_day_label(day(2026, 10, 18), today), "Yesterday");
        assert_eq!(relative_day_label(day(2026, 10, 25), today), "In 6 days");
        assert_eq!(relative_day_label(day(2026, 10, 13), today), "6 days ago");
    }
}
