use serde_json::Value;
use url::Url;

use crate::error::AppError;
use crate::models::GameRecord;

pub const DEFAULT_STEAM_API_URL: &str = "https://api.steampowered.com";

/// Client for the Steam Web API ownership endpoint.
#[derive(Debug, Clone)]
pub struct SteamApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SteamApi {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: Option<String>,
    ) -> Result<Self, AppError> {
        Url::parse(base_url)
            .map_err(|e| AppError::Internal(format!("invalid Steam API url '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn get_owned_games(&self, steamid: &str) -> Result<Vec<GameRecord>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingConfig("STEAM_API_KEY is not set".to_string()))?;

        let mut url = Url::parse(&format!(
            "{}/IPlayerService/GetOwnedGames/v1/",
            self.base_url
        ))
        .map_err(|e| AppError::Internal(e.to_string()))?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("key", api_key);
            qp.append_pair("steamid", steamid);
            qp.append_pair("include_appinfo", "1");
            qp.append_pair("format", "json");
        }

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let games = parse_owned_games(&body)?;
        tracing::debug!(steamid, count = games.len(), "fetched owned games");
        Ok(games)
    }
}

/// Reads `response.games` out of a `GetOwnedGames` body.
///
/// Steam answers a private or unknown profile with an empty `response`
/// object, so a missing array is an error while an empty one is not.
pub fn parse_owned_games(raw_json: &str) -> Result<Vec<GameRecord>, AppError> {
    let json: Value = serde_json::from_str(raw_json)?;
    let games = json
        .get("response")
        .and_then(|r| r.get("games"))
        .and_then(|v| v.as_array())
        .ok_or_else(|| AppError::UpstreamSchema("owned games array missing".to_string()))?;

    let out = games
        .iter()
        .map(|g| {
            let appid = g.get("appid").and_then(|v| v.as_i64()).unwrap_or_default();
            let name = g
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            // as_u64 rejects negatives, which clamps them to zero.
            let playtime = g
                .get("playtime_forever")
                .and_then(|v| v.as_u64())
                .unwrap_or_default();
            GameRecord::new(appid, name, playtime)
        })
        .collect();

    Ok(out)
}
