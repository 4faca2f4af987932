mod date;
mod reminder;
mod shared;

pub use date::{parse_datetime, parse_iso_datetime, InvalidDateTimeError, APPOINTMENT_FORMAT};
pub use reminder::{
    parse_appointment, FieldValue, NewReminder, Reminder, ReminderField, ReminderPatch,
    NAME_MAX_LEN,
};
pub use shared::entity::{Entity, ID};
