use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use recovery_api::app::{configure_routes, create_cors};
use recovery_api::notification::DiscardingNotificationChannel;
use recovery_api::routes::recovery::AppState;
use recovery_core::repositories::{InMemoryOtpLedger, MockAccountDirectory};
use recovery_core::services::recovery::{
    BcryptPasswordHasher, RecoveryService, RecoveryServiceConfig,
};
use recovery_core::services::verification::VerificationService;
use recovery_shared::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting credential recovery API server");

    let config = ServerConfig::from_env();
    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Single-instance wiring: in-memory ledger and directory, no mail
    // provider. A production deployment implements AccountDirectory
    // against the identity store, NotificationChannel against a mail
    // provider, and an OtpLedger against a TTL-capable keyed store for
    // multi-instance setups.
    let ledger = Arc::new(InMemoryOtpLedger::new());
    let directory = Arc::new(MockAccountDirectory::new());
    let notifier = Arc::new(DiscardingNotificationChannel);
    let hasher = Arc::new(BcryptPasswordHasher::default());

    let recovery_service = Arc::new(RecoveryService::new(
        ledger.clone(),
        directory,
        notifier,
        hasher,
        RecoveryServiceConfig::default(),
    ));
    let verification_service = Arc::new(VerificationService::new(ledger));

    let app_state = web::Data::new(AppState {
        recovery_service,
        verification_service,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(create_cors())
            .configure(
                configure_routes::<
                    InMemoryOtpLedger,
                    MockAccountDirectory,
                    DiscardingNotificationChannel,
                    BcryptPasswordHasher,
                >,
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
