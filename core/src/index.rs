use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::document::LocalDocumentMap;

/// A document containing the owning keyword `frequency` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Keyword -> occurrences, each list kept in non-increasing frequency order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
}

impl KeywordIndex {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Keyword-sorted view for stable output.
    pub fn to_sorted_map(&self) -> BTreeMap<&str, &[Occurrence]> {
        self.iter().collect()
    }

    /// Fold one document's keyword counts into the index.
    pub fn merge(&mut self, local: LocalDocumentMap) {
        for (keyword, occurrence) in local {
            match self.keywords.get_mut(&keyword) {
                Some(occs) => {
                    occs.push(occurrence);
                    insert_last_occurrence(occs);
                }
                None => {
                    self.keywords.insert(keyword, vec![occurrence]);
                }
            }
        }
    }
}

/// Move the last element of `occs` into place, given that `occs[..n-1]` is
/// already sorted by descending frequency.
///
/// The slot is found by binary search over the sorted prefix. The search stops
/// at the first midpoint with an equal frequency, and the new occurrence is
/// placed at that midpoint, ahead of the incumbent. Returns the midpoints
/// visited, or `None` when there is nothing to order.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() < 2 {
        return None;
    }
    let target = occs[occs.len() - 1].frequency;
    let mut mids = Vec::new();
    let mut low = 0usize;
    let mut high = occs.len() - 2;
    while low <= high {
        let mid = (low + high) / 2;
        mids.push(mid);
        let freq = occs[mid].frequency;
        if freq > target {
            low = mid + 1;
        } else if freq < target {
            match mid.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            }
        } else {
            break;
        }
    }

    let last = occs.pop()?;
    let m = *mids.last()?;
    let at = if last.frequency >= occs[m].frequency { m } else { m + 1 };
    occs.insert(at, last);
    Some(mids)
}
