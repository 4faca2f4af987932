use crate::date::{self, InvalidDateTimeError};
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDateTime;

/// Maximum number of characters a `Reminder` name can have
pub const NAME_MAX_LEN: usize = 50;

/// A `Reminder` is an appointment together with some descriptive metadata.
/// It is addressed by its unique `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Assigned by the store on insert. Never changes afterwards.
    pub id: ID,
    /// Unique across all `Reminder`s and immutable after creation
    pub name: String,
    pub appointment_type: Option<String>,
    pub appointment: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub people_concerned: Option<String>,
    pub creation_date: NaiveDateTime,
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id
    }
}

/// A `Reminder` that has not been stored yet. The store assigns `id`
/// and `creation_date` when they are not given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewReminder {
    pub id: Option<ID>,
    pub name: String,
    pub appointment_type: Option<String>,
    pub appointment: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub people_concerned: Option<String>,
    pub creation_date: Option<NaiveDateTime>,
}

impl NewReminder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn into_reminder(self, id: ID, now: NaiveDateTime) -> Reminder {
        Reminder {
            id: self.id.unwrap_or(id),
            name: self.name,
            appointment_type: self.appointment_type,
            appointment: self.appointment,
            address: self.address,
            description: self.description,
            people_concerned: self.people_concerned,
            creation_date: self.creation_date.unwrap_or(now),
        }
    }
}

/// The attributes of a `Reminder` that can be changed after creation.
/// `id` and `name` intentionally have no descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReminderField {
    AppointmentType,
    Appointment,
    Address,
    Description,
    PeopleConcerned,
    CreationDate,
}

impl ReminderField {
    pub const UPDATABLE: [ReminderField; 6] = [
        ReminderField::AppointmentType,
        ReminderField::Appointment,
        ReminderField::Address,
        ReminderField::Description,
        ReminderField::PeopleConcerned,
        ReminderField::CreationDate,
    ];

    /// Name of the field on the wire and in the store
    pub fn name(&self) -> &'static str {
        match self {
            Self::AppointmentType => "appointment_type",
            Self::Appointment => "appointment",
            Self::Address => "address",
            Self::Description => "description",
            Self::PeopleConcerned => "people_concerned",
            Self::CreationDate => "creation_date",
        }
    }

    /// Maximum number of characters for text fields
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Self::AppointmentType => Some(10),
            Self::Address => Some(100),
            Self::Description => Some(150),
            Self::PeopleConcerned => Some(100),
            Self::Appointment | Self::CreationDate => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Timestamp(NaiveDateTime),
}

/// A set of new values for some of the `ReminderField::UPDATABLE` fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReminderPatch {
    pub appointment_type: Option<String>,
    pub appointment: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub people_concerned: Option<String>,
    pub creation_date: Option<NaiveDateTime>,
}

impl ReminderPatch {
    pub fn value(&self, field: ReminderField) -> Option<FieldValue> {
        match field {
            ReminderField::AppointmentType => self.appointment_type.clone().map(FieldValue::Text),
            ReminderField::Appointment => self.appointment.map(FieldValue::Timestamp),
            ReminderField::Address => self.address.clone().map(FieldValue::Text),
            ReminderField::Description => self.description.clone().map(FieldValue::Text),
            ReminderField::PeopleConcerned => self.people_concerned.clone().map(FieldValue::Text),
            ReminderField::CreationDate => self.creation_date.map(FieldValue::Timestamp),
        }
    }

    pub fn is_empty(&self) -> bool {
        ReminderField::UPDATABLE
            .iter()
            .all(|field| self.value(*field).is_none())
    }
}

impl Reminder {
    /// Sets a single field. Returns false and leaves the `Reminder` untouched
    /// if the value kind does not match the field.
    pub fn set_field(&mut self, field: ReminderField, value: FieldValue) -> bool {
        match (field, value) {
            (ReminderField::AppointmentType, FieldValue::Text(v)) => {
                self.appointment_type = Some(v)
            }
            (ReminderField::Appointment, FieldValue::Timestamp(v)) => self.appointment = Some(v),
            (ReminderField::Address, FieldValue::Text(v)) => self.address = Some(v),
            (ReminderField::Description, FieldValue::Text(v)) => self.description = Some(v),
            (ReminderField::PeopleConcerned, FieldValue::Text(v)) => {
                self.people_concerned = Some(v)
            }
            (ReminderField::CreationDate, FieldValue::Timestamp(v)) => self.creation_date = v,
            _ => return false,
        }
        true
    }

    /// Overwrites every updatable field the patch has a value for and
    /// returns the fields that were changed
    pub fn apply(&mut self, patch: &ReminderPatch) -> Vec<ReminderField> {
        let mut changed = Vec::new();
        for field in ReminderField::UPDATABLE.iter() {
            if let Some(value) = patch.value(*field) {
                if self.set_field(*field, value) {
                    changed.push(*field);
                }
            }
        }
        changed
    }
}

/// Parses an `appointment` given in the fixed `YYYY-MM-DDTHH:MM:SS` format
pub fn parse_appointment(value: &str) -> Result<NaiveDateTime, InvalidDateTimeError> {
    date::parse_datetime(value, date::APPOINTMENT_FORMAT)
}
