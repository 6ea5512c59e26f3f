use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::contact::contact,
        crate::api::contact::demo_request,
        crate::api::payments::create_order,
        crate::api::payments::verify_payment,
        crate::api::popup::live_popup,
        crate::api::auth::login,
        crate::api::auth::create_admin
    ),
    components(
        schemas(
            crate::api::contact::ContactRequest,
            crate::api::contact::DemoRequestPayload,
            crate::api::payments::CreateOrderRequest,
            crate::api::payments::VerifyPaymentRequest,
            crate::api::auth::LoginRequest,
            crate::models::Order,
            crate::models::Lead,
            crate::models::DemoRequest,
            crate::models::PaymentStatus
        )
    ),
    tags(
        (name = "intake", description = "Order and demo-request intake"),
        (name = "payments", description = "Razorpay order creation and verification"),
        (name = "auth", description = "Admin authentication"),
        (name = "public", description = "Landing-page data")
    )
)]
pub struct ApiDoc;
