/// Utilities for date formatting
///
/// Provides consistent date formatting across the registration views

use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a001_user_entry::local_date;

/// Format a stored date of birth as DD/MM/YYYY in the browser's time zone
/// Example (IST): 1995-04-01T18:30:00.000Z -> "02/04/1995"
pub fn format_date_dmy(value: &DateTime<Utc>) -> String {
    local_date(value).format("%d/%m/%Y").to_string()
}

/// Optional date of birth for a table cell; empty when absent
pub fn format_optional_date(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_date_dmy).unwrap_or_default()
}

/// Value for `<input type="date">` (yyyy-mm-dd, empty when unset)
pub fn to_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
