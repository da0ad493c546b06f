//! HTTP front for a single Reply.io call: contact lookup by email.

pub mod config;
pub mod logger;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reply_core::{ReplyClient, Transport};
use serde_json::json;
use tokio::net::TcpListener;

pub use config::ServerConfig;

pub fn app<T>(client: Arc<ReplyClient<T>>) -> Router
where
    T: Transport + 'static,
{
    Router::new()
        .route("/getContactByEmail/{email}", get(contact_by_email::<T>))
        .with_state(client)
}

pub async fn run<T>(listener: TcpListener, client: ReplyClient<T>) -> Result<(), std::io::Error>
where
    T: Transport + 'static,
{
    axum::serve(listener, app(Arc::new(client))).await
}

async fn contact_by_email<T>(
    State(client): State<Arc<ReplyClient<T>>>,
    Path(email): Path<String>,
) -> Response
where
    T: Transport + 'static,
{
    match client.people().get_contact_by_email(&email).await {
        Ok(data) => {
            tracing::info!(%email, "contact lookup succeeded");
            (
                StatusCode::OK,
                Json(json!({
                    "message": format!("Contact by email {email}:"),
                    "data": data,
                })),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(%email, error = %err, "contact lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal Server Error",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
