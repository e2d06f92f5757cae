//! Axum HTTP surface for the destination service

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::core::{Destination, DestinationRepository, DestinationService};
use crate::utils::error::{ApiError, Result};

/// Shared handler state
pub type AppState<R> = Arc<DestinationService<R>>;

/// Build the destinations router around a service instance
pub fn router<R>(service: AppState<R>) -> Router
where
    R: DestinationRepository + 'static,
{
    Router::new()
        .route(
            "/destinations/",
            get(list_destinations::<R>).post(create_destination::<R>),
        )
        .route(
            "/destinations",
            get(list_destinations::<R>).post(create_destination::<R>),
        )
        .route(
            "/destinations/{destination_id}",
            get(get_destination::<R>)
                .put(update_destination::<R>)
                .delete(delete_destination::<R>),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the router until Ctrl-C or SIGTERM
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

/// Serve the router until `signal` resolves, then drain in-flight requests
pub async fn serve_with_shutdown<F>(listener: TcpListener, app: Router, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

fn path_id(path: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::ValidationError {
            message: rejection.body_text(),
        })
}

fn json_body(
    body: std::result::Result<Json<Destination>, JsonRejection>,
) -> Result<Destination> {
    body.map(|Json(destination)| destination)
        .map_err(|rejection| ApiError::ValidationError {
            message: rejection.body_text(),
        })
}

async fn list_destinations<R: DestinationRepository>(
    State(service): State<AppState<R>>,
) -> Result<Json<Vec<Destination>>> {
    Ok(Json(service.list().await?))
}

async fn get_destination<R: DestinationRepository>(
    State(service): State<AppState<R>>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Destination>> {
    let id = path_id(path)?;
    Ok(Json(service.get(id).await?))
}

async fn create_destination<R: DestinationRepository>(
    State(service): State<AppState<R>>,
    body: std::result::Result<Json<Destination>, JsonRejection>,
) -> Result<Json<Destination>> {
    let destination = json_body(body)?;
    Ok(Json(service.create(destination).await?))
}

async fn update_destination<R: DestinationRepository>(
    State(service): State<AppState<R>>,
    path: std::result::Result<Path<i64>, PathRejection>,
    body: std::result::Result<Json<Destination>, JsonRejection>,
) -> Result<Json<Destination>> {
    let id = path_id(path)?;
    let destination = json_body(body)?;
    Ok(Json(service.update(id, destination).await?))
}

async fn delete_destination<R: DestinationRepository>(
    State(service): State<AppState<R>>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Destination>> {
    let id = path_id(path)?;
    Ok(Json(service.delete(id).await?))
}

async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(serde_json::json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = ApiError::NotFound { id: 3 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Conflict { id: 3 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"detail": "Destination with this ID already exists."})
        );
    }

    #[test]
    fn test_path_id_unwraps_extracted_value() {
        assert_eq!(path_id(Ok(Path(12))).unwrap(), 12);
    }
}
