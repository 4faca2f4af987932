use chrono::NaiveDateTime;
use reminder_service_domain::{
    parse_appointment, parse_iso_datetime, ReminderField, ID, NAME_MAX_LEN,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Diagnostic message per invalid field, keyed by the field name
pub type FieldErrors = BTreeMap<String, String>;

/// A request body as it was sent
pub type JsonObject = serde_json::Map<String, Value>;

/// Validates and coerces the fields of a request body. Every invalid
/// field is recorded so that all of them can be reported at once.
/// Fields the parser is not asked for are ignored.
#[derive(Debug, Default)]
pub struct ArgParser {
    body: JsonObject,
    errors: FieldErrors,
}

impl ArgParser {
    pub fn new(body: JsonObject) -> Self {
        Self {
            body,
            errors: Default::default(),
        }
    }

    fn add_error(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_string(), message);
    }

    /// Absent and `null` fields are `None`
    fn take<T: DeserializeOwned>(&mut self, field: &str) -> Option<T> {
        match self.body.remove(field) {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value(value) {
                Ok(value) => Some(value),
                Err(e) => {
                    self.add_error(field, format!("Invalid value: {}", e));
                    None
                }
            },
        }
    }

    fn check_len(&mut self, field: &str, value: &str, max_len: usize) -> bool {
        if value.chars().count() > max_len {
            self.add_error(field, format!("Must be at most {} characters long", max_len));
            return false;
        }
        true
    }

    /// The `name` of a `Reminder`. An empty string is returned when it
    /// is invalid, in which case `finish` will fail.
    pub fn name(&mut self) -> String {
        match self.take::<String>("name") {
            Some(name) if !name.trim().is_empty() => {
                if self.check_len("name", &name, NAME_MAX_LEN) {
                    name
                } else {
                    String::new()
                }
            }
            _ => {
                self.add_error("name", "Name required".into());
                String::new()
            }
        }
    }

    pub fn id(&mut self) -> Option<ID> {
        self.take("id")
    }

    pub fn text(&mut self, field: ReminderField) -> Option<String> {
        let value = self.take::<String>(field.name())?;
        match field.max_len() {
            Some(max_len) if !self.check_len(field.name(), &value, max_len) => None,
            _ => Some(value),
        }
    }

    pub fn appointment(&mut self) -> Option<NaiveDateTime> {
        let field = ReminderField::Appointment.name();
        let value = self.take::<String>(field)?;
        match parse_appointment(&value) {
            Ok(appointment) => Some(appointment),
            Err(e) => {
                self.add_error(field, format!("Invalid datetime: {}", e));
                None
            }
        }
    }

    pub fn creation_date(&mut self) -> Option<NaiveDateTime> {
        let field = ReminderField::CreationDate.name();
        let value = self.take::<String>(field)?;
        match parse_iso_datetime(&value) {
            Ok(creation_date) => Some(creation_date),
            Err(e) => {
                self.add_error(field, format!("Invalid datetime: {}", e));
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            warn!("Rejected request fields: {:?}", self.errors);
            Err(self.errors)
        }
    }
}

/// Unwraps a `json!` object literal
#[cfg(test)]
pub fn json_object(value: Value) -> JsonObject {
    match value {
        Value::Object(body) => body,
        other => panic!("Expected a json object, got: {}", other),
    }
}
