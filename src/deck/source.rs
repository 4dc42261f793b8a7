use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::card::{Deck, parse_deck};

/// Errors that can occur while loading a deck.
/// All of them are shown to the user as a plain status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-2xx status.
    Http { status: u16 },
    /// Local file could not be read.
    Io(String),
    /// The document is not a JSON array.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
            LoadError::Http { status } => write!(f, "HTTP {status}"),
            LoadError::Io(msg) => write!(f, "could not read deck: {msg}"),
            LoadError::Parse(msg) => write!(f, "malformed deck: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Somewhere a deck document can be fetched from.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// Human-readable location, used in logs and the title bar.
    fn describe(&self) -> String;

    /// Retrieves the raw document text.
    async fn fetch(&self) -> Result<String, LoadError>;
}

/// Deck served over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            reqwest::Client::new()
        });
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl DeckSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        debug!("Deck response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Deck request to {} failed: HTTP {}", self.url, status);
            return Err(LoadError::Http { status });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}

/// Deck stored on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DeckSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

/// Picks a source for an identifier: `http://` and `https://` go over the
/// network, anything else is treated as a file path.
pub fn resolve_source(identifier: &str, timeout: Option<Duration>) -> Arc<dyn DeckSource> {
    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        Arc::new(HttpSource::new(identifier, timeout))
    } else {
        let path = identifier.strip_prefix("file://").unwrap_or(identifier);
        Arc::new(FileSource::new(path))
    }
}

/// Joins a base location and a file name with exactly one `/` between them.
pub fn build_url(base: &str, file_name: &str) -> String {
    let file = file_name.strip_prefix('/').unwrap_or(file_name);
    if base.ends_with('/') {
        format!("{base}{file}")
    } else {
        format!("{base}/{file}")
    }
}

/// Fetches and validates a deck in one step.
pub async fn load_deck(source: &dyn DeckSource) -> Result<Deck, LoadError> {
    info!("Loading deck from {}", source.describe());
    let text = source.fetch().await?;
    let deck = parse_deck(&text)?;
    info!("Loaded {} cards from {}", deck.len(), source.describe());
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_adds_missing_slash() {
        assert_eq!(build_url("https://example.com/decks", "ncp200.json"), "https://example.com/decks/ncp200.json");
    }

    #[test]
    fn test_build_url_strips_leading_slash() {
        assert_eq!(build_url("https://example.com/", "/ncp200.json"), "https://example.com/ncp200.json");
    }

    #[test]
    fn test_build_url_relative_dir() {
        assert_eq!(build_url(".", "ncp207.json"), "./ncp207.json");
    }

    #[test]
    fn test_resolve_source_http() {
        let source = resolve_source("https://example.com/a.json", None);
        assert_eq!(source.describe(), "https://example.com/a.json");
    }

    #[test]
    fn test_resolve_source_file_scheme() {
        let source = resolve_source("file:///tmp/deck.json", None);
        assert_eq!(source.describe(), "/tmp/deck.json");
    }

    #[test]
    fn test_http_error_message_matches_status() {
        assert_eq!(LoadError::Http { status: 404 }.to_string(), "HTTP 404");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here/deck.json");
        let result = tokio_test::block_on(load_deck(&source));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
