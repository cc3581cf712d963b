//! Date helpers for the forms.

use chrono::NaiveDate;

/// Today's date from the browser clock (local time). Captured once per form
/// seed so the pure validators stay deterministic.
pub fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date"))
}

/// Milliseconds since the epoch, used for generated job ids.
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2000-01-20"), "20.01.2000");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
