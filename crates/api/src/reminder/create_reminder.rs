use crate::{
    error::ApiError,
    shared::{
        args::{ArgParser, FieldErrors, JsonObject},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use reminder_service_api_structs::create_reminder::*;
use reminder_service_domain::{NewReminder, Reminder, ReminderField};
use reminder_service_infra::{ReminderContext, RepoError};

pub async fn create_reminder_controller(
    body: web::Json<JsonObject>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = parse_request(body.0).map_err(ApiError::InvalidFields)?;

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

fn parse_request(body: JsonObject) -> Result<CreateReminderUseCase, FieldErrors> {
    let mut parser = ArgParser::new(body);
    let reminder = NewReminder {
        id: parser.id(),
        name: parser.name(),
        appointment_type: parser.text(ReminderField::AppointmentType),
        appointment: parser.appointment(),
        address: parser.text(ReminderField::Address),
        description: parser.text(ReminderField::Description),
        people_concerned: parser.text(ReminderField::PeopleConcerned),
        creation_date: parser.creation_date(),
    };
    parser.finish()?;

    Ok(CreateReminderUseCase { reminder })
}

#[derive(Debug)]
struct CreateReminderUseCase {
    pub reminder: NewReminder,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NameTaken(String),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NameTaken(msg) => Self::Conflict(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.insert(&self.reminder).await {
            Ok(reminder) => Ok(reminder),
            Err(RepoError::UniqueViolation(msg)) => Err(UseCaseError::NameTaken(msg)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
