// src/main.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use avx_backend::config::AppConfig;
use avx_backend::email::{Mailer, NoopMailer, RelayMailer};
use avx_backend::rate_limit::{FixedWindow, RateLimit};
use avx_backend::razorpay::{PaymentGateway, RazorpayClient};
use avx_backend::store::{MongoStore, Store};
use avx_backend::{api, auth, docs, AppState};

async fn index() -> impl Responder {
    HttpResponse::Ok().body("AVX backend ready!")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env().expect("valid configuration");

    let mongo = MongoStore::connect(&config.mongo_uri, &config.mongo_db)
        .await
        .expect("Failed to connect to MongoDB");
    mongo.init().await.expect("Failed to create indexes");
    let store: Arc<dyn Store> = Arc::new(mongo);

    let mailer: Arc<dyn Mailer> = if config.email_enabled {
        Arc::new(RelayMailer::new(
            config.email_api_key.clone(),
            config.email_from.clone(),
            config.email_api_url.clone(),
        ))
    } else {
        tracing::warn!("EMAIL_ENABLED=false, outbound email is off");
        Arc::new(NoopMailer)
    };

    let gateway: Arc<dyn PaymentGateway> = Arc::new(RazorpayClient::new(
        config.razorpay_key.clone(),
        config.razorpay_secret.clone(),
    ));

    let config = Arc::new(config);
    let state = web::Data::new(AppState {
        store,
        mailer,
        gateway,
        config: config.clone(),
    });

    // Shared across workers so the ceiling is process-wide.
    let limiter = Arc::new(FixedWindow::new(
        Duration::from_secs(config.rate_limit_window_secs),
        config.rate_limit_max,
    ));

    let bind_host = config.host.clone();
    let bind_port = config.port;
    tracing::info!("🚀 AVX Server Running → http://{bind_host}:{bind_port}");

    HttpServer::new(move || {
        let cors = match state.config.cors_origin.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials(),
            // Same-origin only.
            None => Cors::default(),
        };

        App::new()
            .app_data(state.clone())
            .wrap(RateLimit::new(limiter.clone()))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .route("/", web::get().to(index))
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
            )
            // Public routes
            .service(api::contact::contact)
            .service(api::contact::demo_request)
            .service(api::payments::create_order)
            .service(api::payments::verify_payment)
            .service(api::popup::live_popup)
            .service(api::auth::login)
            .service(api::auth::create_admin)
            // Admin routes behind the token cookie
            .service(
                web::scope("/admin")
                    .wrap(auth::AdminAuth)
                    .service(api::admin::list_orders)
                    .service(api::admin::list_leads)
                    .service(api::admin::list_demo_requests)
                    .service(api::admin::delete_lead)
                    .service(api::admin::test_email)
                    .service(api::auth::logout),
            )
    })
    .bind((bind_host.as_str(), bind_port))?
    .run()
    .await
}
