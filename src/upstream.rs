use async_trait::async_trait;

use crate::error::PlaylistError;
use crate::mood::Mood;
use crate::spotify::SpotifyTrack;

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Mood, PlaylistError>;
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Fresh bearer token for the catalog. Never cached.
    async fn fetch_token(&self) -> Result<String, PlaylistError>;
}

#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn search_tracks(&self, query: &str, token: &str) -> Result<Vec<SpotifyTrack>, PlaylistError>;
}
