use chrono::NaiveDateTime;
use reminder_service_sdk::{APIError, StatusCode, APPOINTMENT_FORMAT};

pub fn parse_datetime(datetime: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(datetime, APPOINTMENT_FORMAT).expect("Valid datetime")
}

pub fn assert_status(err: &APIError, status: StatusCode) {
    assert_eq!(err.status(), Some(status), "Unexpected error: {:?}", err);
}
