use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::playlist::PlaylistGenerator;

#[derive(Deserialize)]
pub struct GeneratePlaylistBody {
    #[serde(rename = "moodText")]
    pub mood_text: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

async fn generate_playlist(
    State(generator): State<PlaylistGenerator>,
    body: Result<Json<GeneratePlaylistBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log::warn!("rejected request body: {rejection}");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match generator.generate(&body.mood_text).await {
        Ok(playlist) => Json(playlist).into_response(),
        Err(err) => {
            log::error!("failed to generate playlist: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub fn make_app(generator: PlaylistGenerator) -> Router {
    Router::new()
        .route("/generate-playlist", post(generate_playlist))
        .with_state(generator)
}

pub async fn run_server(generator: PlaylistGenerator, addr: &str) -> Result<()> {
    let app = make_app(generator);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server running on http://{}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
