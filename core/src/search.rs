use std::collections::HashMap;

use crate::index::{KeywordIndex, Occurrence};

/// Upper bound on the number of documents a search returns.
pub const MAX_RESULTS: usize = 5;

/// Documents containing `kw1` or `kw2`, ranked by the larger of the two
/// frequencies and capped at [`MAX_RESULTS`].
///
/// Equal frequencies keep candidate order: `kw1`'s documents first in index
/// order, then documents only reached through `kw2`. A keyword that is not in
/// the index contributes nothing. An empty result means no matches.
pub fn top5_search(index: &KeywordIndex, kw1: &str, kw2: &str) -> Vec<String> {
    let first = index.get(kw1).unwrap_or_default();
    let second = index.get(kw2).unwrap_or_default();

    let mut best: HashMap<&str, u32> = HashMap::with_capacity(first.len() + second.len());
    let mut primary: Vec<&Occurrence> = Vec::with_capacity(first.len());
    for occ in first {
        best.insert(&occ.document, occ.frequency);
        primary.push(occ);
    }

    let mut secondary: Vec<&Occurrence> = Vec::new();
    for occ in second {
        match best.get(occ.document.as_str()).copied() {
            Some(freq) if freq >= occ.frequency => continue,
            Some(_) => primary.retain(|o| o.document != occ.document),
            None => {}
        }
        best.insert(&occ.document, occ.frequency);
        secondary.push(occ);
    }

    let mut ranked: Vec<&Occurrence> = Vec::with_capacity(primary.len() + secondary.len());
    for candidate in primary.into_iter().chain(secondary) {
        let at = ranked
            .iter()
            .position(|o| o.frequency < candidate.frequency)
            .unwrap_or(ranked.len());
        ranked.insert(at, candidate);
    }

    ranked.truncate(MAX_RESULTS);
    tracing::debug!(kw1, kw2, hits = ranked.len(), "search");
    ranked.into_iter().map(|o| o.document.clone()).collect()
}
