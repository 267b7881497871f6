use std::sync::Arc;

use serde::Serialize;

use crate::error::PlaylistError;
use crate::mood::Mood;
use crate::spotify::SpotifyTrack;
use crate::upstream::{SentimentClassifier, TokenProvider, TrackCatalog};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub name: String,
    pub artist: String,
    pub preview_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlaylistResponse {
    pub mood: Mood,
    pub playlist: Vec<PlaylistEntry>,
}

impl TryFrom<SpotifyTrack> for PlaylistEntry {
    type Error = PlaylistError;

    fn try_from(track: SpotifyTrack) -> Result<Self, Self::Error> {
        let artist = track
            .artists
            .into_iter()
            .next()
            .ok_or_else(|| PlaylistError::shape("track search", format!("track '{}' has no artists", track.name)))?;
        Ok(PlaylistEntry {
            name: track.name,
            artist: artist.name,
            preview_url: track.preview_url,
        })
    }
}

pub fn simplify(tracks: Vec<SpotifyTrack>) -> Result<Vec<PlaylistEntry>, PlaylistError> {
    tracks.into_iter().map(PlaylistEntry::try_from).collect()
}

/// Runs classify, authenticate, search and transform, one after the other.
#[derive(Clone)]
pub struct PlaylistGenerator {
    classifier: Arc<dyn SentimentClassifier>,
    tokens: Arc<dyn TokenProvider>,
    catalog: Arc<dyn TrackCatalog>,
}

impl PlaylistGenerator {
    pub fn new(
        classifier: Arc<dyn SentimentClassifier>,
        tokens: Arc<dyn TokenProvider>,
        catalog: Arc<dyn TrackCatalog>,
    ) -> Self {
        PlaylistGenerator {
            classifier,
            tokens,
            catalog,
        }
    }

    pub async fn generate(&self, mood_text: &str) -> Result<PlaylistResponse, PlaylistError> {
        let mood = self.classifier.classify(mood_text).await?;
        let token = self.tokens.fetch_token().await?;

        let query = mood.search_query();
        log::debug!("mood = {} query = {query}", mood.as_str());
        let tracks = self.catalog.search_tracks(query, &token).await?;

        let playlist = simplify(tracks)?;
        log::info!("generated playlist mood = {} tracks = {}", mood.as_str(), playlist.len());
        Ok(PlaylistResponse { mood, playlist })
    }
}
