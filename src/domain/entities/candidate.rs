//! Cover candidates returned by the lookup API.

use serde::{Deserialize, Serialize};

use super::ItemId;

/// One ranked download option for an item's cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Direct URL of the image file.
    pub url: String,
    /// Relevance score, higher is better.
    pub score: f64,
}

impl Candidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(url: impl Into<String>, score: f64) -> Self {
        Self {
            url: url.into(),
            score,
        }
    }
}

/// All candidates for one item, best score first.
///
/// The order is fixed at construction; there is no way to reorder or
/// extend a set afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    item_id: ItemId,
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Builds a set sorted by score descending. Equal scores keep their
    /// original relative order.
    #[must_use]
    pub fn ranked(item_id: ItemId, mut candidates: Vec<Candidate>) -> Self {
        // `sort_by` is stable, which is what keeps ties in API order.
        candidates.sort_by(|a, b| rank_key(b.score).total_cmp(&rank_key(a.score)));
        Self {
            item_id,
            candidates,
        }
    }

    /// Returns the item these candidates belong to.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Returns the candidates in download order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if the lookup found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Sort key for a score. `-0.0` and `0.0` compare equal.
fn rank_key(score: f64) -> f64 {
    score + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_sorts_descending() {
        let set = CandidateSet::ranked(
            ItemId::new(1),
            vec![
                Candidate::new("a", 1.0),
                Candidate::new("b", 10.0),
                Candidate::new("c", 5.0),
            ],
        );

        let urls: Vec<_> = set.candidates().iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, ["b", "c", "a"]);
    }

    #[test]
    fn test_ranked_keeps_ties_in_original_order() {
        let set = CandidateSet::ranked(
            ItemId::new(1),
            vec![
                Candidate::new("first", 3.0),
                Candidate::new("top", 7.0),
                Candidate::new("second", 3.0),
                Candidate::new("third", 3.0),
            ],
        );

        let urls: Vec<_> = set.candidates().iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, ["top", "first", "second", "third"]);
    }

    #[test]
    fn test_signed_zero_scores_are_ties() {
        let set = CandidateSet::ranked(
            ItemId::new(1),
            vec![
                Candidate::new("first", -0.0),
                Candidate::new("second", 0.0),
                Candidate::new("third", -0.0),
            ],
        );

        let urls: Vec<_> = set.candidates().iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_set() {
        let set = CandidateSet::ranked(ItemId::new(300), Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.item_id(), ItemId::new(300));
    }
}
