//! Formatação de datas para exibição

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// 05/03/2024
    Date,
    /// 14:30
    Time,
}

/// Data ausente vira "-"
pub fn format_date(value: Option<&DateTime<Utc>>, format: DateFormat) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    match format {
        DateFormat::Date => value.format("%d/%m/%Y").to_string(),
        DateFormat::Time => value.format("%H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_and_time() {
        let value: DateTime<Utc> = "2024-03-05T14:30:00Z".parse().unwrap();
        assert_eq!(format_date(Some(&value), DateFormat::Date), "05/03/2024");
        assert_eq!(format_date(Some(&value), DateFormat::Time), "14:30");
        assert_eq!(format_date(None, DateFormat::Date), "-");
    }
}
