//! Corpus document format.
//!
//! A document is a JSON array of records:
//!
//! ```json
//! [{ "number": 1, "ref": "Bukhari 1", "ar": "...", "ur": "...", "en": "...", "note": "..." }]
//! ```
//!
//! `id`, `collection` (alias `book`), `ref`, `tags` (alias `topic`) and
//! `note` are optional. A missing id becomes `"<collection>-<number>"`, and a
//! missing collection takes the loader's configured key.

use serde::Deserialize;

use noor_core::{Error, Record, Result, TextFields};

#[derive(Debug, Deserialize)]
pub struct RecordDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "book")]
    pub collection: Option<String>,
    pub number: u32,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    #[serde(flatten)]
    pub fields: TextFields,
    #[serde(default, alias = "topic")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl RecordDocument {
    pub fn into_record(self, default_collection: &str) -> Result<Record> {
        let collection = self
            .collection
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_collection.to_string());
        let id = self
            .id
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| format!("{}-{}", collection, self.number));
        let mut record =
            Record::new(id, collection, self.number, self.fields)?.with_tags(self.tags);
        if let Some(reference) = self.reference {
            record = record.with_reference(reference);
        }
        if let Some(note) = self.note {
            record = record.with_note(note);
        }
        Ok(record)
    }
}

/// Parse a whole document. Anything other than an array of valid records is
/// rejected; a single bad record rejects the document.
pub fn parse_document(bytes: &[u8], default_collection: &str) -> Result<Vec<Record>> {
    let docs: Vec<RecordDocument> = serde_json::from_slice(bytes)
        .map_err(|e| Error::InvalidRecord(format!("not a record array: {e}")))?;
    docs
        .into_iter()
        .map(|d| d.into_record(default_collection))
        .collect()
}
