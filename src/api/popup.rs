// src/api/popup.rs

use actix_web::{get, web, HttpResponse};

use crate::store::{self, Store};
use crate::AppState;

/// Social-proof ticker for the landing page: the latest three of each
/// collection as ready-to-render lines. Degrades to an empty list when
/// storage is down; the popup is not worth an error page.
#[utoipa::path(
    get,
    path = "/live-popup",
    tag = "public",
    responses(
        (status = 200, description = "Display strings, newest first per block", body = [String]),
        (status = 500, description = "Storage unavailable, empty list")
    )
)]
#[get("/live-popup")]
pub async fn live_popup(state: web::Data<AppState>) -> HttpResponse {
    match popup_lines(state.store.as_ref()).await {
        Ok(lines) => HttpResponse::Ok().json(lines),
        Err(e) => {
            tracing::error!("live popup storage error: {e}");
            HttpResponse::InternalServerError().json(Vec::<String>::new())
        }
    }
}

async fn popup_lines(store: &dyn Store) -> store::Result<Vec<String>> {
    let orders = store.list_orders(Some(3)).await?;
    let leads = store.list_leads(Some(3)).await?;
    let demos = store.list_demo_requests(Some(3)).await?;

    let mut lines = Vec::with_capacity(orders.len() + leads.len() + demos.len());
    lines.extend(orders.iter().map(|o| format!("✅ {} ordered {}", o.name, o.plan)));
    lines.extend(leads.iter().map(|l| format!("📩 {} sent an inquiry for {}", l.name, l.plan)));
    lines.extend(demos.iter().map(|d| format!("🎁 {} requested a Free Demo", d.name)));
    Ok(lines)
}
