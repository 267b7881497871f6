use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::error::PlaylistError;
use crate::upstream::{TokenProvider, TrackCatalog};

pub const SEARCH_LIMIT: u32 = 10;

#[derive(Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpotifyTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<SpotifyTrack>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

pub struct SpotifyClient {
    client: Client,
    client_id: String,
    client_secret: String,
    accounts_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            client_id: config.spotify_client_id.clone(),
            client_secret: config.spotify_client_secret.clone(),
            accounts_url: config.spotify_accounts_url.clone(),
            api_url: config.spotify_api_url.clone(),
        }
    }
}

#[async_trait]
impl TokenProvider for SpotifyClient {
    async fn fetch_token(&self) -> Result<String, PlaylistError> {
        // client credentials grant, basic auth with id:secret
        let response = self.client
            .post(format!("{}/api/token", self.accounts_url))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let stringified_response_body = response.text().await?;

        if !status.is_success() {
            return Err(PlaylistError::Authentication {
                status: status.as_u16(),
                body: stringified_response_body,
            });
        }

        parse_token(&stringified_response_body)
    }
}

#[async_trait]
impl TrackCatalog for SpotifyClient {
    async fn search_tracks(&self, query: &str, token: &str) -> Result<Vec<SpotifyTrack>, PlaylistError> {
        let limit = SEARCH_LIMIT.to_string();
        let response = self.client
            .get(format!("{}/v1/search", self.api_url))
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        let stringified_response_body = response.text().await?;
        log::debug!("stringified_response_body = {stringified_response_body}");

        if !status.is_success() {
            return Err(PlaylistError::Catalog {
                status: status.as_u16(),
                body: stringified_response_body,
            });
        }

        parse_tracks(&stringified_response_body)
    }
}

pub fn parse_token(body: &str) -> Result<String, PlaylistError> {
    let token: TokenResponse = serde_json::from_str(body)
        .map_err(|err| PlaylistError::shape("token exchange", err.to_string()))?;
    Ok(token.access_token)
}

pub fn parse_tracks(body: &str) -> Result<Vec<SpotifyTrack>, PlaylistError> {
    let search: SearchResponse = serde_json::from_str(body)
        .map_err(|err| PlaylistError::shape("track search", err.to_string()))?;
    Ok(search.tracks.items)
}
