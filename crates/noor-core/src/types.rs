//! Domain types used by the matcher, the browse engine and the corpus loader.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::text::{self, TokenSet};

pub type RecordId = String;

/// Script/language of a text field. Arabic is the primary script; Urdu and
/// English are translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Urdu,
    English,
}

impl Script {
    /// Order in which fields are concatenated into the matcher's text bundle.
    pub const BUNDLE_ORDER: [Script; 3] = [Script::English, Script::Urdu, Script::Arabic];

    pub fn code(self) -> &'static str {
        match self {
            Script::Arabic => "ar",
            Script::Urdu => "ur",
            Script::English => "en",
        }
    }

    /// Case folding is not meaningful for the primary script, so it is matched verbatim.
    pub fn is_primary(self) -> bool {
        matches!(self, Script::Arabic)
    }
}

/// The named text fields of a record, keyed the way corpus documents key them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFields {
    #[serde(rename = "ar", default, skip_serializing_if = "Option::is_none")]
    pub arabic: Option<String>,
    #[serde(rename = "ur", default, skip_serializing_if = "Option::is_none")]
    pub urdu: Option<String>,
    #[serde(rename = "en", default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
}

impl TextFields {
    pub fn new(arabic: &str, urdu: &str, english: &str) -> Self {
        let keep = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            arabic: keep(arabic),
            urdu: keep(urdu),
            english: keep(english),
        }
    }

    /// Non-empty text for `script`, if any.
    pub fn get(&self, script: Script) -> Option<&str> {
        let value = match script {
            Script::Arabic => self.arabic.as_deref(),
            Script::Urdu => self.urdu.as_deref(),
            Script::English => self.english.as_deref(),
        };
        value.filter(|s| !s.is_empty())
    }

    /// Non-empty fields in bundle order.
    pub fn iter(&self) -> impl Iterator<Item = (Script, &str)> + '_ {
        Script::BUNDLE_ORDER
            .into_iter()
            .filter_map(move |s| self.get(s).map(|t| (s, t)))
    }

    pub fn has_text(&self) -> bool {
        self.iter().next().is_some()
    }

    /// All non-empty fields joined by a single space, English first.
    pub fn bundle(&self) -> String {
        self.iter().map(|(_, t)| t).collect::<Vec<_>>().join(" ")
    }
}

/// One short multilingual text entry.
///
/// Records are built once when a corpus is loaded and never mutated; every
/// field is read through an accessor so `id` cannot change after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: RecordId,
    collection: String,
    number: u32,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(flatten)]
    fields: TextFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl Record {
    /// Fails with [`Error::InvalidRecord`] when `id` is blank or every text field is empty.
    pub fn new(
        id: impl Into<RecordId>,
        collection: impl Into<String>,
        number: u32,
        fields: TextFields,
    ) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("record #{number} has an empty id")));
        }
        if !fields.has_text() {
            return Err(Error::InvalidRecord(format!("record '{id}' has no text in any field")));
        }
        Ok(Self {
            id,
            collection: collection.into(),
            number,
            reference: None,
            fields,
            tags: Vec::new(),
            note: None,
        })
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        let reference: String = reference.into();
        self.reference = (!reference.is_empty()).then_some(reference);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .collect();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note: String = note.into();
        self.note = (!note.is_empty()).then_some(note);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn fields(&self) -> &TextFields {
        &self.fields
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The explicit reference, or `"<collection> <number>"` when none was given.
    pub fn display_reference(&self) -> Cow<'_, str> {
        match &self.reference {
            Some(r) => Cow::Borrowed(r.as_str()),
            None => Cow::Owned(format!("{} {}", self.collection, self.number)),
        }
    }
}

/// A named group of records. `expected_count` is the size of the full
/// collection, which may be larger than what is held in memory.
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub key: String,
    pub title: String,
    pub expected_count: usize,
    pub records: Vec<Record>,
}

impl Collection {
    pub fn new(key: impl Into<String>, title: impl Into<String>, expected_count: usize) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            expected_count,
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// True when fewer records are held than the collection is known to contain.
    pub fn is_partial(&self) -> bool {
        self.records.len() < self.expected_count
    }

    pub fn missing(&self) -> usize {
        self.expected_count.saturating_sub(self.records.len())
    }
}

/// Matcher output: a borrowed record and its relevance in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredRecord<'a> {
    pub record: &'a Record,
    pub score: f32,
}

impl ScoredRecord<'_> {
    /// Relevance as a whole percentage, for display.
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// A caller's free-text query. The raw string is kept for substring search
/// and display; tokens are derived once for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    tokens: TokenSet,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = text::tokenize(&raw);
        Self { raw, tokens }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn folded(&self) -> String {
        text::fold(&self.raw)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One page of a filtered sequence plus pagination metadata.
///
/// `page_index` is 1-based and always within `1..=total_pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
}

impl<T> PageView<T> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> TextFields {
        TextFields::new("لاَ تَغْضَبْ", "غصہ نہ کرو۔", "Do not become angry.")
    }

    #[test]
    fn record_requires_text_and_id() {
        assert!(Record::new("muslim-2622", "sahih-muslim", 2622, fields()).is_ok());
        assert!(matches!(
            Record::new("x", "c", 1, TextFields::default()),
            Err(Error::InvalidRecord(_))
        ));
        assert!(matches!(Record::new("  ", "c", 1, fields()), Err(Error::InvalidRecord(_))));
    }

    #[test]
    fn bundle_is_english_urdu_arabic() {
        assert_eq!(fields().bundle(), "Do not become angry. غصہ نہ کرو۔ لاَ تَغْضَبْ");
        let only_en = TextFields {
            english: Some("hello".into()),
            urdu: Some(String::new()),
            arabic: None,
        };
        assert_eq!(only_en.bundle(), "hello");
        assert_eq!(only_en.iter().count(), 1);
    }

    #[test]
    fn display_reference_falls_back_to_collection_and_number() {
        let r = Record::new("b-7", "Bukhari", 7, fields()).unwrap();
        assert_eq!(r.display_reference(), "Bukhari 7");
        let r = r.with_reference("Bukhari 7: Faith");
        assert_eq!(r.display_reference(), "Bukhari 7: Faith");
    }

    #[test]
    fn blank_tags_and_notes_are_dropped() {
        let r = Record::new("x", "c", 1, fields())
            .unwrap()
            .with_tags(["anger", ""])
            .with_note("");
        assert_eq!(r.tags(), ["anger".to_string()]);
        assert_eq!(r.note(), None);
    }

    #[test]
    fn collection_partial_load() {
        let r = Record::new("x", "c", 1, fields()).unwrap();
        let c = Collection::new("c", "C", 3).with_records(vec![r]);
        assert!(c.is_partial());
        assert_eq!(c.missing(), 2);
        assert!(!Collection::new("c", "C", 0).is_partial());
    }

    #[test]
    fn percent_rounds_and_clamps() {
        let r = Record::new("x", "c", 1, fields()).unwrap();
        let scored = |score| ScoredRecord { record: &r, score };
        assert_eq!(scored(0.333).percent(), 33);
        assert_eq!(scored(0.5).percent(), 50);
        assert_eq!(scored(1.0).percent(), 100);
    }

    #[test]
    fn query_keeps_raw_text() {
        let q = Query::new("  I am Angry! ");
        assert_eq!(q.raw(), "  I am Angry! ");
        assert_eq!(q.tokens().len(), 3);
        assert!(!q.is_blank());
        assert!(Query::new(" \t").is_blank());
    }
}
