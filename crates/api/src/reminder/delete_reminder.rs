use crate::{
    error::ApiError,
    shared::{
        args::{ArgParser, FieldErrors, JsonObject},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use reminder_service_api_structs::delete_reminder::*;
use reminder_service_domain::Reminder;
use reminder_service_infra::ReminderContext;

pub async fn delete_reminder_controller(
    body: web::Json<JsonObject>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = parse_request(body.0).map_err(ApiError::InvalidFields)?;

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(ApiError::from)
}

fn parse_request(body: JsonObject) -> Result<DeleteReminderUseCase, FieldErrors> {
    let mut parser = ArgParser::new(body);
    let name = parser.name();
    parser.finish()?;

    Ok(DeleteReminderUseCase { name })
}

#[derive(Debug)]
struct DeleteReminderUseCase {
    name: String,
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
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder = match ctx.repos.reminders.find_by_name(&self.name).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound(self.name.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        // The last known values are returned even though the row is gone
        match ctx.repos.reminders.delete(reminder.id).await {
            Ok(Some(_)) => Ok(reminder),
            Ok(None) => Err(UseCaseError::NotFound(self.name.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
