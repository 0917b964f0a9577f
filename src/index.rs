use crate::document::DocId;
use std::collections::HashMap;

/// Term-frequency index with TF-IDF scoring.
///
/// Tracks, per term, how often it occurs in each document, plus per-document
/// token totals and the number of documents added.
#[derive(Debug, Clone, Default)]
pub struct RelevanceIndex {
    term_frequency: HashMap<String, HashMap<DocId, usize>>,
    document_length: HashMap<DocId, usize>,
    document_count: usize,
}

impl RelevanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tokenized document to the index.
    ///
    /// Caller contract on id reuse: term counts accumulate across calls
    /// naming the same id, while the recorded length is reassigned to this
    /// call's token count and the document total increments every call.
    /// Re-adding an id therefore scores accumulated counts against the
    /// latest length.
    pub fn add_document(&mut self, doc_id: DocId, tokens: &[&str]) {
        for &token in tokens {
            *self
                .term_frequency
                .entry(token.to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0) += 1;
        }

        self.document_length.insert(doc_id, tokens.len());
        self.document_count += 1;

        tracing::debug!(doc_id, tokens = tokens.len(), "indexed document");
    }

    /// Number of distinct documents containing `word`.
    pub fn doc_frequency(&self, word: &str) -> usize {
        self.term_frequency.get(word).map(|m| m.len()).unwrap_or(0)
    }

    /// Total number of documents added.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.term_frequency.len()
    }

    /// TF-IDF score of a single term for every document containing it.
    ///
    /// `idf = ln(total documents / documents containing the term)`, so a term
    /// present in every document scores zero everywhere; `tf` is the term's
    /// occurrence count over the document's token total.
    pub fn score_term(&self, word: &str) -> HashMap<DocId, f64> {
        let postings = match self.term_frequency.get(word) {
            Some(postings) => postings,
            None => return HashMap::new(),
        };

        let idf = (self.document_count as f64 / postings.len() as f64).ln();

        postings
            .iter()
            .map(|(&doc_id, &count)| {
                let length = self.document_length.get(&doc_id).copied().unwrap_or(0);
                let tf = count as f64 / length as f64;
                (doc_id, tf * idf)
            })
            .collect()
    }

    /// Phrase score: documents containing every token, scored by summing the
    /// per-token TF-IDF contributions.
    ///
    /// Tokens only need to co-occur somewhere in the document; adjacency and
    /// order are not checked.
    pub fn score_phrase(&self, tokens: &[&str]) -> HashMap<DocId, f64> {
        let mut combined: Option<HashMap<DocId, f64>> = None;

        for &token in tokens {
            let scores = self.score_term(token);
            combined = Some(match combined {
                None => scores,
                Some(mut acc) => {
                    acc.retain(|doc_id, _| scores.contains_key(doc_id));
                    for (doc_id, total) in acc.iter_mut() {
                        *total += scores[doc_id];
                    }
                    acc
                }
            });
        }

        combined.unwrap_or_default()
    }

    /// Free-text score: union across tokens, summing each token's
    /// contribution into the per-document total.
    pub fn score_query(&self, tokens: &[&str]) -> HashMap<DocId, f64> {
        let mut results: HashMap<DocId, f64> = HashMap::new();

        for &token in tokens {
            for (doc_id, score) in self.score_term(token) {
                *results.entry(doc_id).or_insert(0.0) += score;
            }
        }

        results
    }
}
