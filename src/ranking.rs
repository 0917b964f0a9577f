use crate::document::DocId;
use std::collections::HashMap;

/// Ranked search result
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub doc_id: DocId,
    pub score: f64,
}

impl ScoredDocument {
    pub fn new(doc_id: DocId, score: f64) -> Self {
        Self { doc_id, score }
    }
}

/// Order a score map for presentation.
///
/// Score descending, doc id ascending on equal scores, so repeated reads of
/// an unchanged index produce identical output.
pub fn rank(scores: HashMap<DocId, f64>) -> Vec<ScoredDocument> {
    let mut ranked: Vec<ScoredDocument> = scores
        .into_iter()
        .map(|(doc_id, score)| ScoredDocument::new(doc_id, score))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_sorts_by_score_descending() {
        let scores = HashMap::from([(1, 0.2), (2, 0.9), (3, 0.5)]);
        let ranked = rank(scores);

        let ids: Vec<DocId> = ranked.iter().map(|s| s.doc_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_breaks_ties_by_doc_id() {
        let scores = HashMap::from([(9, 0.5), (2, 0.5), (5, 0.5)]);
        let ranked = rank(scores);

        let ids: Vec<DocId> = ranked.iter().map(|s| s.doc_id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(HashMap::new()).is_empty());
    }
}
