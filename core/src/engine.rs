use std::path::{Path, PathBuf};

use crate::document::{index_document, read_document_list, LocalDocumentMap};
use crate::error::{Result, SearchError};
use crate::index::KeywordIndex;
use crate::noise::NoiseWords;
use crate::search::top5_search;
use crate::tokenizer::normalize;

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Directory that document paths from the list are opened relative to.
    /// The identifier reported in results is always the path as listed.
    pub base_dir: Option<PathBuf>,
}

/// One indexing session: the noise words and the keyword index built with them.
///
/// Indexing runs to completion before queries are answered; once built the
/// session is only read.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    noise_words: NoiseWords,
    index: KeywordIndex,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn index(&self) -> &KeywordIndex { &self.index }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise_words }

    pub fn set_noise_words(&mut self, noise_words: NoiseWords) {
        self.noise_words = noise_words;
    }

    pub fn load_noise_words<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.noise_words = NoiseWords::load(path)?;
        Ok(())
    }

    /// Keyword form of `word` under this session's noise words.
    pub fn get_keyword(&self, word: &str) -> Option<String> {
        normalize(word, &self.noise_words)
    }

    fn resolve(&self, doc_file: &str) -> PathBuf {
        match &self.config.base_dir {
            Some(dir) => dir.join(doc_file),
            None => PathBuf::from(doc_file),
        }
    }

    /// Count the keywords of one document.
    pub fn load_keywords(&self, doc_file: &str) -> Result<LocalDocumentMap> {
        if doc_file.is_empty() {
            return Err(SearchError::MissingPath);
        }
        index_document(&self.resolve(doc_file), doc_file, &self.noise_words)
    }

    pub fn merge_keywords(&mut self, kws: LocalDocumentMap) {
        self.index.merge(kws);
    }

    /// Load the noise words, then index every document named in `docs_file`
    /// in list order.
    ///
    /// Fails with [`SearchError::ResourceNotFound`] if either file or any
    /// listed document cannot be read; the index is left as it was.
    pub fn make_index<P, Q>(&mut self, docs_file: P, noise_words_file: Q) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let noise_words = NoiseWords::load(noise_words_file)?;
        let docs = read_document_list(docs_file.as_ref())?;
        let previous = std::mem::replace(&mut self.noise_words, noise_words);
        if let Err(e) = self.index_documents(&docs) {
            self.noise_words = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Index `docs` in order with the current noise words. Every document is
    /// read before any is merged, so a failure leaves the index untouched.
    pub fn index_documents<I, S>(&mut self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locals = docs
            .into_iter()
            .map(|doc| self.load_keywords(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let num_docs = locals.len();
        for kws in locals {
            self.merge_keywords(kws);
        }
        tracing::info!(num_docs, num_keywords = self.index.len(), "index build complete");
        Ok(())
    }

    pub fn top5_search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        top5_search(&self.index, kw1, kw2)
    }
}
