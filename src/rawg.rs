use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::error::AppError;
use crate::models::GenreRecord;

pub const DEFAULT_RAWG_API_URL: &str = "https://api.rawg.io/api";

static SLUG_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_-]").expect("slug pattern is valid"));

#[derive(Debug, Deserialize)]
struct RawgGame {
    #[serde(default)]
    genres: Option<Vec<GenreRecord>>,
}

/// Client for the RAWG game details endpoint.
#[derive(Debug, Clone)]
pub struct RawgApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RawgApi {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: Option<String>,
    ) -> Result<Self, AppError> {
        Url::parse(base_url)
            .map_err(|e| AppError::Internal(format!("invalid RAWG API url '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Looks up the genres RAWG lists for `game_name`.
    ///
    /// The status code is not inspected: RAWG's "not found" body has no
    /// `genres` field and yields an empty list. Only transport failures
    /// and bodies that are not JSON come back as errors.
    pub async fn fetch_genres(&self, game_name: &str) -> Result<Vec<GenreRecord>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingConfig("RAWG_API_KEY is not set".to_string()))?;

        let slug = genre_slug(game_name);
        let mut url = Url::parse(&format!("{}/games/{slug}", self.base_url))
            .map_err(|e| AppError::Internal(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", api_key);

        let game: RawgGame = self.client.get(url).send().await?.json().await?;
        let genres = game.genres.unwrap_or_default();
        tracing::debug!(game = game_name, slug = %slug, count = genres.len(), "fetched genres");
        Ok(genres)
    }
}

/// Turns a store title into the slug RAWG keys its games by.
///
/// Lower-cases, swaps each space for a hyphen, then drops everything
/// except ASCII letters, digits, `_` and `-`.
pub fn genre_slug(game_name: &str) -> String {
    let hyphenated = game_name.replace(' ', "-").to_lowercase();
    SLUG_STRIP_RE.replace_all(&hyphenated, "").into_owned()
}
