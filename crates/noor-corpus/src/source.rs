use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::path::{Path, PathBuf};

use noor_core::config::resolve_with_base;
use noor_core::traits::CorpusSource;
use noor_core::{Error, Record, Result};

use crate::document::parse_document;

/// A JSON document on the local filesystem.
pub struct FileSource {
    path: PathBuf,
    collection: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, collection: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl CorpusSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::unavailable(self.location(), e))?;
        parse_document(&bytes, &self.collection).map_err(|e| Error::unavailable(self.location(), e))
    }
}

/// A JSON document served over http(s). Non-2xx responses count as failures.
pub struct HttpSource {
    url: String,
    collection: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(
        url: impl Into<String>,
        collection: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            url: url.into(),
            collection: collection.into(),
            client,
        }
    }
}

#[async_trait]
impl CorpusSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        let response = self.client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::unavailable(self.location(), e))?;
        let bytes = response.bytes().await.map_err(|e| Error::unavailable(self.location(), e))?;
        parse_document(&bytes, &self.collection).map_err(|e| Error::unavailable(self.location(), e))
    }
}

/// Records handed over directly by the embedding application, e.g. data
/// bundled with the page. Takes the place a global data slot would.
pub struct InlineSource {
    label: String,
    records: Vec<Record>,
}

impl InlineSource {
    pub fn new(label: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            label: label.into(),
            records,
        }
    }
}

#[async_trait]
impl CorpusSource for InlineSource {
    fn location(&self) -> String {
        format!("inline:{}", self.label)
    }

    async fn fetch(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// Build a source from a configured location: `http://` and `https://` become
/// [`HttpSource`], anything else a [`FileSource`] resolved against `base`.
pub fn source_for(
    location: &str,
    base: &Path,
    collection: &str,
    client: &reqwest::Client,
) -> Box<dyn CorpusSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location, collection, client.clone()))
    } else {
        Box::new(FileSource::new(resolve_with_base(base, location), collection))
    }
}
