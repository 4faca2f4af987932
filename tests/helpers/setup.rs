use reminder_service_api::Application;
use reminder_service_infra::ReminderContext;
use reminder_service_sdk::ReminderSDK;

// Launch the application as a background task
pub async fn spawn_app() -> (ReminderSDK, String) {
    let mut ctx = ReminderContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = ReminderSDK::new(address.clone());
    (sdk, address)
}
