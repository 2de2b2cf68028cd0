//! Corpus loading.
//!
//! Provides a standard way to load text documents from a directory or
//! use a small built-in corpus for demos and tests.

use std::path::Path;

use lexorbit_core::error::Result;

/// A corpus of documents to mine.
pub struct Corpus {
    pub documents: Vec<CorpusDocument>,
    pub name: String,
}

/// A single document in a corpus.
#[derive(Debug, Clone)]
pub struct CorpusDocument {
    pub id: String,
    pub content: String,
}

impl Corpus {
    /// An empty corpus.
    pub fn new(name: impl Into<String>) -> Self {
        Corpus {
            documents: Vec::new(),
            name: name.into(),
        }
    }

    /// Append a document.
    pub fn add_document(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.documents.push(CorpusDocument {
            id: id.into(),
            content: content.into(),
        });
    }

    /// Load all .txt files from a directory.
    ///
    /// Files load in filename order; the document id is the file stem.
    pub fn from_directory(path: &Path) -> Result<Self> {
        let mut entries: Vec<_> = std::fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "txt"))
            .collect();
        entries.sort_by_key(|e| e.file_name());

        let mut documents = Vec::new();
        for entry in &entries {
            let content = std::fs::read_to_string(entry.path())?;
            let filename = entry.file_name().to_string_lossy().to_string();
            let id = filename.trim_end_matches(".txt").to_string();
            documents.push(CorpusDocument { id, content });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "corpus".to_string());

        Ok(Corpus { documents, name })
    }

    /// Built-in 8-document corpus across 2 topics.
    ///
    /// Short wire-style documents with heavily recurring phrasing, so
    /// low-threshold mining runs find patterns in it.
    pub fn from_embedded() -> Self {
        let docs: &[(&str, &str)] = &[
            (
                "markets_01",
                "The market rallied sharply on Monday. Traders expected the market to stall. \
                 The rally surprised analysts across the board.",
            ),
            (
                "markets_02",
                "The market rallied again on Tuesday. Analysts warned the rally might fade. \
                 Traders booked profits before the close.",
            ),
            (
                "markets_03",
                "The market fell sharply on Wednesday. Traders blamed the fall on weak earnings. \
                 Analysts cut their forecasts across the board.",
            ),
            (
                "markets_04",
                "The market fell again on Thursday. The fall erased the weekly gains. \
                 Traders braced for more losses.",
            ),
            (
                "weather_01",
                "Heavy rain flooded the valley on Friday. The river burst its banks overnight. \
                 Farmers counted the cost of the flood.",
            ),
            (
                "weather_02",
                "Heavy rain returned over the weekend. The river rose above the flood mark. \
                 Farmers moved livestock to higher ground.",
            ),
            (
                "weather_03",
                "The storm brought heavy rain and strong wind. The river flooded the lower fields. \
                 Farmers repaired fences after the storm.",
            ),
            (
                "weather_04",
                "The storm passed by Sunday evening. The river fell below the flood mark. \
                 Farmers returned to the lower fields.",
            ),
        ];

        let mut corpus = Corpus::new("embedded-8");
        for (id, content) in docs {
            corpus.add_document(*id, *content);
        }
        corpus
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate documents in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, CorpusDocument> {
        self.documents.iter()
    }
}
