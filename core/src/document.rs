use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::index::Occurrence;
use crate::noise::NoiseWords;
use crate::tokenizer::{normalize, tokens};

/// Keyword counts for a single document, discarded once merged.
pub type LocalDocumentMap = HashMap<String, Occurrence>;

/// Count keyword occurrences in `text`, attributing them to `document`.
pub fn index_text(document: &str, text: &str, noise: &NoiseWords) -> LocalDocumentMap {
    let mut map = LocalDocumentMap::new();
    for token in tokens(text) {
        let Some(keyword) = normalize(token, noise) else { continue };
        map.entry(keyword)
            .and_modify(|o| o.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    map
}

/// Read the file at `path` and count its keywords under the identifier `document`.
pub fn index_document(path: &Path, document: &str, noise: &NoiseWords) -> Result<LocalDocumentMap> {
    let bytes = fs::read(path).map_err(|e| SearchError::not_found(path, e))?;
    let map = index_text(document, &String::from_utf8_lossy(&bytes), noise);
    tracing::debug!(document, keywords = map.len(), "indexed document");
    Ok(map)
}

/// Read a whitespace-delimited list of document paths.
pub fn read_document_list(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| SearchError::not_found(path, e))?;
    Ok(tokens(&String::from_utf8_lossy(&bytes)).map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_keywords() {
        let map = index_text("A", "apple Apple, apple. banana", &NoiseWords::new());
        assert_eq!(map.len(), 2);
        assert_eq!(map["apple"], Occurrence::new("A", 3));
        assert_eq!(map["banana"], Occurrence::new("A", 1));
    }

    #[test]
    fn skips_rejected_tokens() {
        let noise = NoiseWords::from_words(["the"]);
        let map = index_text("A", "the don't 42 -- The cat", &noise);
        assert_eq!(map.len(), 1);
        assert_eq!(map["cat"].frequency, 1);
    }

    #[test]
    fn missing_document_fails() {
        let err = index_document(Path::new("/no/such/doc.txt"), "doc.txt", &NoiseWords::new()).unwrap_err();
        assert!(matches!(err, SearchError::ResourceNotFound { .. }));
    }

    #[test]
    fn reads_list_across_lines_and_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("docs.txt");
        fs::write(&list, "a.txt\nb.txt c.txt\n\n").unwrap();
        assert_eq!(read_document_list(&list).unwrap(), ["a.txt", "b.txt", "c.txt"]);
    }
}
