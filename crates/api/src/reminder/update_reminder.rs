use crate::{
    error::ApiError,
    shared::{
        args::{ArgParser, FieldErrors, JsonObject},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use reminder_service_api_structs::update_reminder::*;
use reminder_service_domain::{Reminder, ReminderField, ReminderPatch};
use reminder_service_infra::{ReminderContext, RepoError};
use tracing::info;

pub async fn update_reminder_controller(
    body: web::Json<JsonObject>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = parse_request(body.0).map_err(ApiError::InvalidFields)?;

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

fn parse_request(body: JsonObject) -> Result<UpdateReminderUseCase, FieldErrors> {
    let mut parser = ArgParser::new(body);
    let name = parser.name();
    // `creation_date` is not updatable through the api
    let patch = ReminderPatch {
        appointment_type: parser.text(ReminderField::AppointmentType),
        appointment: parser.appointment(),
        address: parser.text(ReminderField::Address),
        description: parser.text(ReminderField::Description),
        people_concerned: parser.text(ReminderField::PeopleConcerned),
        creation_date: None,
    };
    parser.finish()?;

    Ok(UpdateReminderUseCase { name, patch })
}

#[derive(Debug)]
struct UpdateReminderUseCase {
    pub name: String,
    pub patch: ReminderPatch,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(String),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(name) => Self::NotFound(format!(
                "The reminder with name: {}, was not found.",
                name
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find_by_name(&self.name).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound(self.name.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if self.patch.is_empty() {
            info!("Nothing to update for reminder: {}", reminder.id);
            return Ok(reminder);
        }

        let changed = reminder.apply(&self.patch);
        info!(
            "Updating fields: {:?} of reminder: {}",
            changed
                .iter()
                .map(|field| field.name())
                .collect::<Vec<_>>(),
            reminder.id
        );

        match ctx.repos.reminders.save(&reminder).await {
            Ok(_) => Ok(reminder),
            Err(RepoError::Missing) => Err(UseCaseError::NotFound(self.name.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
