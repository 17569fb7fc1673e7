use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::tokenizer::tokens;

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","after","all","also","an","and","any","are","as","at",
            "be","because","been","but","by",
            "can","co","corp","could",
            "for","from",
            "had","has","have","he","her","his",
            "if","in","inc","into","is","it","its",
            "last","more","most","mr","mrs","ms","mz",
            "no","not","of","on","one","only","or","other","out","over",
            "s","says","she","so","some","such",
            "than","that","the","their","there","they","this","to",
            "up","was","we","were","when","which","who","will","with","would",
        ];
        words.iter().copied().collect()
    };
}

/// Words excluded from indexing. Loaded once before any document is indexed.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Built-in list of common English function words.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// Read a whitespace-delimited noise-word file. Entries are kept verbatim.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| SearchError::not_found(path, e))?;
        let noise = Self::from_words(tokens(&String::from_utf8_lossy(&bytes)));
        tracing::debug!(path = %path.display(), count = noise.len(), "loaded noise words");
        Ok(noise)
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
