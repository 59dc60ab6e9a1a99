use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{GameRecord, GameSummary, RankedGameWithGenres};
use crate::rawg::RawgApi;
use crate::ranking::{TOP_GAMES_LIMIT, top_by_playtime};
use crate::steam::SteamApi;

/// Upstream clients shared by every request. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub steam: SteamApi,
    pub rawg: RawgApi,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", get(login).post(login))
        .route("/logout", get(logout).post(logout))
        .route("/games/{steam_id}", get(owned_games))
        .route("/games/{steam_id}/playdata", get(game_play_data))
        .route("/games/{steam_id}/top", get(top_games))
        .route("/games/{steam_id}/top/genres", get(top_genres))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

async fn login() -> Json<MessageBody> {
    Json(MessageBody {
        message: "User login",
    })
}

async fn logout() -> Json<MessageBody> {
    Json(MessageBody {
        message: "User logout",
    })
}

async fn owned_games(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    let games = fetch_owned_games(&state, &steam_id).await?;
    Ok(Json(games))
}

async fn game_play_data(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let games = fetch_owned_games(&state, &steam_id).await?;
    Ok(Json(games.iter().map(GameSummary::from).collect()))
}

async fn top_games(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Json<Vec<GameRecord>> {
    // A failed fetch ranks as an empty library rather than an error.
    let games = fetch_owned_games(&state, &steam_id)
        .await
        .unwrap_or_default();
    Json(top_by_playtime(games, TOP_GAMES_LIMIT))
}

async fn top_genres(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Result<Json<Vec<RankedGameWithGenres>>, ApiError> {
    let games = fetch_owned_games(&state, &steam_id).await?;
    let top = top_by_playtime(games, TOP_GAMES_LIMIT);
    // An empty library has nothing to enrich, so it is reported as an
    // error instead of an empty list.
    if top.is_empty() {
        tracing::warn!(steam_id = %steam_id, "no games to rank");
        return Err(ApiError::TopGamesNotFound);
    }

    let mut out = Vec::with_capacity(top.len());
    for game in top {
        let genres = state.rawg.fetch_genres(&game.name).await.map_err(|err| {
            tracing::warn!(
                steam_id = %steam_id,
                game = %game.name,
                code = err.code(),
                error = %err,
                "genre lookup failed"
            );
            ApiError::GenresNotFound
        })?;

        out.push(RankedGameWithGenres {
            name: game.name,
            genres,
        });
    }

    Ok(Json(out))
}

async fn fetch_owned_games(state: &AppState, steam_id: &str) -> Result<Vec<GameRecord>, ApiError> {
    state.steam.get_owned_games(steam_id).await.map_err(|err| {
        tracing::warn!(steam_id, code = err.code(), error = %err, "owned games fetch failed");
        ApiError::GamesNotFound
    })
}
