use chrono::NaiveDate;

use crate::error::RenderError;

/// Convert a `YYYY-MM-DD` date to `Month DD, YYYY`.
pub fn format_date(value: &str) -> Result<String, RenderError> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        RenderError::InvalidDate {
            value: value.to_owned(),
            source,
        }
    })?;
    Ok(date.format("%B %d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-10-28").unwrap(), "October 28, 2025");
        assert_eq!(format_date("2024-03-05").unwrap(), "March 05, 2024");
    }

    #[test]
    fn test_format_date_invalid() {
        let err = format_date("28/10/2025").unwrap_err();
        assert!(matches!(err, RenderError::InvalidDate { ref value, .. } if value == "28/10/2025"));
        assert!(format_date("2025-02-30").is_err());
    }
}
