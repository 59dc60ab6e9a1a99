#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use steam_library::handlers::{AppState, router};
use steam_library::rawg::RawgApi;
use steam_library::steam::SteamApi;

pub const STEAM_KEY: &str = "test-steam-key";
pub const RAWG_KEY: &str = "test-rawg-key";

/// Slugs the stand-in RAWG saw, in request order.
pub type RawgHits = Arc<Mutex<Vec<String>>>;

fn game(appid: i64, name: &str, playtime: i64) -> Value {
    json!({
        "appid": appid,
        "name": name,
        "playtime_forever": playtime,
        "img_icon_url": "deadbeef",
        "has_community_visible_stats": true
    })
}

async fn owned_games(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("key").map(String::as_str) != Some(STEAM_KEY) {
        return (StatusCode::FORBIDDEN, "<html>Forbidden</html>").into_response();
    }
    if params.get("include_appinfo").map(String::as_str) != Some("1") {
        return (StatusCode::BAD_REQUEST, "include_appinfo expected").into_response();
    }

    let games = match params.get("steamid").map(String::as_str) {
        Some("three") => vec![
            game(10, "Counter-Strike", 10),
            game(400, "Portal", 500),
            game(220, "Half-Life 2", 200),
        ],
        Some("many") => vec![
            game(1, "Alpha", 30),
            game(2, "Bravo", 4000),
            game(3, "Charlie", 1500),
            game(4, "Delta", 0),
            game(5, "Echo", 1439),
            game(6, "Foxtrot", 9000),
            game(7, "Golf", 2880),
        ],
        Some("genres") => vec![
            game(400, "Portal", 100),
            game(380, "Half-Life 2: Episode One", 900),
        ],
        Some("second-fails") => vec![
            game(400, "Portal", 900),
            game(99, "Broken Game", 100),
        ],
        Some("first-fails") => vec![
            game(99, "Broken Game", 900),
            game(400, "Portal", 100),
        ],
        Some("unknown-to-rawg") => vec![game(123, "Obscure Thing", 60)],
        Some("empty") => Vec::new(),
        Some("down") => {
            return (StatusCode::SERVICE_UNAVAILABLE, "try later").into_response();
        }
        _ => return Json(json!({ "response": {} })).into_response(),
    };

    let game_count = games.len();
    Json(json!({ "response": { "game_count": game_count, "games": games } })).into_response()
}

async fn rawg_game(
    State(hits): State<RawgHits>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.lock().unwrap().push(slug.clone());

    if params.get("key").map(String::as_str) != Some(RAWG_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "The key parameter is not provided" })),
        )
            .into_response();
    }

    match slug.as_str() {
        "portal" => Json(json!({
            "id": 4200,
            "slug": "portal",
            "genres": [{ "id": 4, "name": "Action", "slug": "action" }, { "id": 7, "name": "Puzzle", "slug": "puzzle" }]
        }))
        .into_response(),
        "half-life-2-episode-one" => Json(json!({
            "id": 13537,
            "slug": "half-life-2-episode-one",
            "genres": [{ "id": 2, "name": "Shooter", "slug": "shooter" }]
        }))
        .into_response(),
        "broken-game" => (StatusCode::BAD_GATEWAY, "<html>upstream exploded</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response(),
    }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts stand-in Steam and RAWG servers and returns their base URLs.
pub async fn spawn_upstreams() -> (String, String, RawgHits) {
    let steam = Router::new().route("/IPlayerService/GetOwnedGames/v1/", get(owned_games));

    let hits = RawgHits::default();
    let rawg = Router::new()
        .route("/api/games/{slug}", get(rawg_game))
        .with_state(hits.clone());

    let steam_url = spawn(steam).await;
    let rawg_url = spawn(rawg).await;
    (steam_url, format!("{rawg_url}/api"), hits)
}

/// Builds the real router, pointed at the given upstreams.
pub fn build_app(
    steam_url: &str,
    rawg_url: &str,
    steam_key: Option<&str>,
    rawg_key: Option<&str>,
) -> Router {
    let client = reqwest::Client::new();
    let steam = SteamApi::new(client.clone(), steam_url, steam_key.map(str::to_string)).unwrap();
    let rawg = RawgApi::new(client, rawg_url, rawg_key.map(str::to_string)).unwrap();
    router(AppState { steam, rawg })
}

/// Router with both keys set, plus the RAWG hit log.
pub async fn build_test_app() -> (Router, RawgHits) {
    let (steam_url, rawg_url, hits) = spawn_upstreams().await;
    let app = build_app(&steam_url, &rawg_url, Some(STEAM_KEY), Some(RAWG_KEY));
    (app, hits)
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_uri(app: Router, uri: &str) -> Response {
    send(app, "GET", uri).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
