use chrono::NaiveDateTime;
use thiserror::Error;

/// The only accepted textual format of an `appointment`
pub const APPOINTMENT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Error, Debug, Clone, PartialEq)]
#[error("`{value}` does not match the format `{format}`")]
pub struct InvalidDateTimeError {
    pub value: String,
    pub format: String,
}

pub fn parse_datetime(value: &str, format: &str) -> Result<NaiveDateTime, InvalidDateTimeError> {
    NaiveDateTime::parse_from_str(value, format).map_err(|_| InvalidDateTimeError {
        value: value.to_string(),
        format: format.to_string(),
    })
}

/// Parses an ISO 8601 datetime without offset, with optional fractional seconds.
/// For example: 2024-03-01T09:00:00 or 2024-03-01T09:00:00.250
pub fn parse_iso_datetime(value: &str) -> Result<NaiveDateTime, InvalidDateTimeError> {
    value
        .parse::<NaiveDateTime>()
        .map_err(|_| InvalidDateTimeError {
            value: value.to_string(),
            format: "%Y-%m-%dT%H:%M:%S%.f".into(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_datetimes() {
        let valid_datetimes = vec![
            "2024-03-01T09:00:00",
            "2020-02-29T23:59:59",
            "1999-12-31T00:00:00",
        ];

        for datetime in &valid_datetimes {
            let parsed = parse_datetime(datetime, APPOINTMENT_FORMAT).unwrap();
            assert_eq!(parsed.format(APPOINTMENT_FORMAT).to_string(), *datetime);
        }
    }

    #[test]
    fn it_rejects_invalid_datetimes() {
        let invalid_datetimes = vec![
            "2024/01/01",
            "2024-01-01",
            "2021-02-29T10:00:00",
            "2024-13-01T10:00:00",
            "2024-01-01T25:00:00",
            "tomorrow",
        ];

        for datetime in &invalid_datetimes {
            let err = parse_datetime(datetime, APPOINTMENT_FORMAT).unwrap_err();
            assert_eq!(err.value, *datetime);
            assert_eq!(err.format, APPOINTMENT_FORMAT);
        }
    }

    #[test]
    fn iso_datetimes_can_have_fractional_seconds() {
        assert!(parse_iso_datetime("2024-03-01T09:00:00").is_ok());
        assert!(parse_iso_datetime("2024-03-01T09:00:00.123456").is_ok());
        assert!(parse_iso_datetime("01.03.2024").is_err());
    }
}
