use serde::{Deserialize, Serialize};

const STEAM_CDN_URL: &str = "https://cdn.akamai.steamstatic.com/steam/apps";
const MINUTES_PER_DAY: u64 = 1440;

pub fn header_image_url(appid: i64) -> String {
    format!("{STEAM_CDN_URL}/{appid}/header.jpg")
}

/// One entry of a user's owned library, with the derived header image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub appid: i64,
    pub name: String,
    pub playtime_forever: u64,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
}

impl GameRecord {
    pub fn new(appid: i64, name: impl Into<String>, playtime_forever: u64) -> Self {
        Self {
            appid,
            name: name.into(),
            playtime_forever,
            image_url: header_image_url(appid),
        }
    }

    /// Whole days played, rounding down.
    pub fn days_played(&self) -> u64 {
        self.playtime_forever / MINUTES_PER_DAY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRecord {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub name: String,
    #[serde(rename = "ImageUrl")]
    pub image_url: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl From<&GameRecord> for GameSummary {
    fn from(game: &GameRecord) -> Self {
        let days = game.days_played();
        let message = if game.playtime_forever > 0 && days > 0 {
            format!("You have played {} for a total of {days} days", game.name)
        } else {
            String::new()
        };

        Self {
            name: game.name.clone(),
            image_url: game.image_url.clone(),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedGameWithGenres {
    pub name: String,
    #[serde(rename = "Genre")]
    pub genres: Vec<GenreRecord>,
}
