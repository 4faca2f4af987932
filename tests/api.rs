mod helpers;

use chrono::Utc;
use helpers::setup::spawn_app;
use helpers::utils::{assert_status, parse_datetime};
use reminder_service_sdk::{CreateReminderInput, StatusCode, UpdateReminderInput};
use serde_json::{json, Value};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_list_is_empty_at_start() {
    let (sdk, _) = spawn_app().await;
    let reminders = sdk.reminder.list().await.expect("Expected to list reminders");
    assert!(reminders.is_empty());
}

#[actix_web::main]
#[test]
async fn test_crud_reminder() {
    let (sdk, _) = spawn_app().await;

    let created = sdk
        .reminder
        .create(CreateReminderInput {
            name: "dentist".into(),
            appointment: Some("2024-03-01T09:00:00".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to create reminder");
    assert_eq!(created.name, "dentist");
    assert_eq!(created.appointment, Some(parse_datetime("2024-03-01T09:00:00")));
    assert!(created.address.is_none());
    let age = Utc::now().naive_utc() - created.creation_date;
    assert!(age.num_seconds().abs() < 60);

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            name: "dentist".into(),
            address: Some("Main St".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.address.as_deref(), Some("Main St"));
    assert_eq!(updated.appointment, created.appointment);
    assert_eq!(updated.creation_date, created.creation_date);

    let deleted = sdk
        .reminder
        .delete("dentist".into())
        .await
        .expect("Expected to delete reminder");
    assert_eq!(deleted, updated);

    // Get after deleted should not contain it anymore
    let reminders = sdk.reminder.list().await.unwrap();
    assert!(reminders.iter().all(|r| r.name != "dentist"));
}

#[actix_web::main]
#[test]
async fn test_create_then_list_renders_supplied_fields() {
    let (sdk, _) = spawn_app().await;

    let input = CreateReminderInput {
        id: Some(40),
        name: "barber".into(),
        appointment_type: Some("haircut".into()),
        appointment: Some("2024-05-10T14:30:00".into()),
        address: Some("High St 1".into()),
        description: Some("Short on the sides".into()),
        people_concerned: Some("Sam".into()),
        creation_date: Some("2024-01-01T08:00:00".into()),
    };
    sdk.reminder
        .create(input)
        .await
        .expect("Expected to create reminder");

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders.len(), 1);
    let reminder = &reminders[0];
    assert_eq!(reminder.id, 40);
    assert_eq!(reminder.name, "barber");
    assert_eq!(reminder.appointment_type.as_deref(), Some("haircut"));
    assert_eq!(
        reminder.appointment,
        Some(parse_datetime("2024-05-10T14:30:00"))
    );
    assert_eq!(reminder.address.as_deref(), Some("High St 1"));
    assert_eq!(reminder.description.as_deref(), Some("Short on the sides"));
    assert_eq!(reminder.people_concerned.as_deref(), Some("Sam"));
    assert_eq!(reminder.creation_date, parse_datetime("2024-01-01T08:00:00"));
}

#[actix_web::main]
#[test]
async fn test_duplicate_names_are_rejected() {
    let (sdk, _) = spawn_app().await;

    let input = CreateReminderInput {
        name: "dentist".into(),
        ..Default::default()
    };
    sdk.reminder.create(input.clone()).await.unwrap();

    let mut duplicate = input;
    duplicate.description = Some("Second".into());
    let err = sdk.reminder.create(duplicate).await.unwrap_err();
    assert_status(&err, StatusCode::BAD_REQUEST);
    assert_eq!(
        err.message,
        "duplicate key value violates unique constraint \"reminders_name_key\". Key (name)=(dentist) already exists."
    );

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert!(reminders[0].description.is_none());
}

#[actix_web::main]
#[test]
async fn test_validation_failures() {
    let (sdk, _) = spawn_app().await;

    // Missing name
    let err = sdk
        .reminder
        .create(CreateReminderInput::default())
        .await
        .unwrap_err();
    assert_status(&err, StatusCode::BAD_REQUEST);
    assert!(err.message.contains("Name required"));

    // Bad appointment format
    let err = sdk
        .reminder
        .create(CreateReminderInput {
            name: "dentist".into(),
            appointment: Some("2024/01/01".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_status(&err, StatusCode::BAD_REQUEST);
    assert!(err.message.contains("appointment"));

    // Nothing was stored
    assert!(sdk.reminder.list().await.unwrap().is_empty());

    let err = sdk
        .reminder
        .update(UpdateReminderInput::default())
        .await
        .unwrap_err();
    assert_status(&err, StatusCode::BAD_REQUEST);

    let err = sdk.reminder.delete("".into()).await.unwrap_err();
    assert_status(&err, StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_unknown_names_are_not_found() {
    let (sdk, _) = spawn_app().await;
    sdk.reminder
        .create(CreateReminderInput {
            name: "dentist".into(),
            address: Some("Old St".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let before = sdk.reminder.list().await.unwrap();

    for name in &["barber", "%", "dent_st"] {
        let err = sdk
            .reminder
            .update(UpdateReminderInput {
                name: name.to_string(),
                address: Some("Main St".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_status(&err, StatusCode::NOT_FOUND);

        let err = sdk.reminder.delete(name.to_string()).await.unwrap_err();
        assert_status(&err, StatusCode::NOT_FOUND);
    }

    assert_eq!(sdk.reminder.list().await.unwrap(), before);
}

#[actix_web::main]
#[test]
async fn test_update_with_bad_appointment_leaves_reminder_untouched() {
    let (sdk, _) = spawn_app().await;
    let created = sdk
        .reminder
        .create(CreateReminderInput {
            name: "dentist".into(),
            appointment: Some("2024-03-01T09:00:00".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = sdk
        .reminder
        .update(UpdateReminderInput {
            name: "dentist".into(),
            appointment: Some("01.03.2024 10:00".into()),
            address: Some("Main St".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_status(&err, StatusCode::BAD_REQUEST);

    assert_eq!(sdk.reminder.list().await.unwrap(), vec![created]);
}

#[actix_web::main]
#[test]
async fn test_wrongly_typed_fields_are_reported_per_field() {
    let (sdk, address) = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/reminder", address);

    let res = client
        .post(&url)
        .json(&json!({ "name": "dentist", "id": "abc" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"]["id"].is_string());
    assert!(body["message"].get("name").is_none());

    let res = client
        .post(&url)
        .json(&json!({ "name": 123 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"]["name"], "Name required");

    sdk.reminder
        .create(CreateReminderInput {
            name: "dentist".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let before = sdk.reminder.list().await.unwrap();

    let res = client
        .put(&url)
        .json(&json!({ "name": "dentist", "address": 5, "appointment": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"]["address"].is_string());
    assert!(body["message"]["appointment"].is_string());

    assert_eq!(sdk.reminder.list().await.unwrap(), before);
}

#[actix_web::main]
#[test]
async fn test_bodies_that_are_not_json_objects_are_rejected() {
    let (sdk, address) = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/reminder", address);

    let res = client
        .post(&url)
        .header("content-type", "application/json")
        .body("name=dentist")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let message = res.text().await.unwrap();
    assert!(message.contains("Invalid data provided"));

    let res = client
        .delete(&url)
        .json(&json!(["dentist"]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(sdk.reminder.list().await.unwrap().is_empty());
}

#[actix_web::main]
#[test]
async fn test_reminders_can_be_created_after_the_largest_id() {
    let (sdk, _) = spawn_app().await;

    let largest = sdk
        .reminder
        .create(CreateReminderInput {
            id: Some(i64::MAX),
            name: "largest".into(),
            ..Default::default()
        })
        .await
        .expect("Expected to create reminder");
    assert_eq!(largest.id, i64::MAX);

    let next = sdk
        .reminder
        .create(CreateReminderInput {
            name: "dentist".into(),
            ..Default::default()
        })
        .await
        .expect("Expected to create reminder");
    assert_ne!(next.id, largest.id);

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders, vec![next, largest]);
}
