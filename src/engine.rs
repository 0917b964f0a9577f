use crate::document::{DocId, DocumentStore};
use crate::index::RelevanceIndex;
use crate::ranking::rank;
use crate::tokenizer::Tokenizer;
use crate::trie::PrefixIndex;
use serde::Serialize;
use std::collections::HashMap;

/// A ranked search result with its document text.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    pub text: String,
}

/// Index statistics
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub documents: usize,
    pub distinct_terms: usize,
    pub indexed_words: usize,
}

/// Main search engine.
///
/// Owns one prefix index, one relevance index, and the raw document store,
/// kept consistent by feeding all three from a single tokenization pass per
/// ingested document. Single-threaded: ingestion takes `&mut self`, queries
/// take `&self`, and nothing suspends or retries.
pub struct SearchEngine {
    trie: PrefixIndex,
    relevance: RelevanceIndex,
    store: DocumentStore,
    tokenizer: Tokenizer,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            trie: PrefixIndex::new(),
            relevance: RelevanceIndex::new(),
            store: DocumentStore::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Ingest a document.
    ///
    /// Tokenizes `text` once, indexes every token for autocomplete and
    /// relevance, and stores the raw text under `id`, overwriting any
    /// previous text for that id. Re-adding an id accumulates its term
    /// counts (see [`RelevanceIndex::add_document`]).
    pub fn add_document(&mut self, id: DocId, text: &str) {
        let tokens = self.tokenizer.tokenize(text);

        for token in &tokens {
            self.trie.insert(token, id);
        }
        self.relevance.add_document(id, &tokens);
        self.store.insert(id, text.to_string());

        tracing::debug!(id, tokens = tokens.len(), "document added");
    }

    /// Free-text search: every query token contributes to a document's
    /// score. Results are ordered by score descending, doc id ascending on
    /// ties; an empty vec means no document matched any token.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let tokens = self.tokenizer.tokenize(query);
        let scores = self.relevance.score_query(&tokens);
        tracing::debug!(query, hits = scores.len(), "search");
        self.hydrate(scores)
    }

    /// Phrase search: only documents containing every phrase token match,
    /// scored by summing per-token contributions. Tokens must co-occur, not
    /// be adjacent.
    pub fn search_phrase(&self, phrase: &str) -> Vec<SearchHit> {
        let tokens = self.tokenizer.tokenize(phrase);
        let scores = self.relevance.score_phrase(&tokens);
        tracing::debug!(phrase, hits = scores.len(), "phrase search");
        self.hydrate(scores)
    }

    /// Every indexed word starting with `prefix`, in unspecified order.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.trie.expand(prefix)
    }

    /// Get a document's raw text by id.
    pub fn get_document(&self, id: DocId) -> Option<&str> {
        self.store.get(id)
    }

    /// Index statistics.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            documents: self.store.len(),
            distinct_terms: self.relevance.term_count(),
            indexed_words: self.trie.word_count(),
        }
    }

    fn hydrate(&self, scores: HashMap<DocId, f64>) -> Vec<SearchHit> {
        rank(scores)
            .into_iter()
            .map(|scored| SearchHit {
                doc_id: scored.doc_id,
                score: scored.score,
                text: self
                    .store
                    .get(scored.doc_id)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_engine() -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine.add_document(1, "Hello world, this is a simple search engine.");
        engine.add_document(2, "Hello again, this search engine indexes documents.");
        engine.add_document(3, "The world is full of data, and this engine searches through it.");
        engine
    }

    #[test]
    fn test_search_matches_literal_tokens() {
        let engine = sample_engine();

        // Document 1 contains "engine." (trailing period), a different token.
        let hits = engine.search("engine");
        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids, vec![2, 3]);

        // Document 2 is shorter, so its tf is larger.
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_search_ranks_by_score() {
        let engine = sample_engine();

        let hits = engine.search("Hello");
        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        // "Hello" occurs once in documents 1 (8 tokens) and 2 (7 tokens).
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(hits[0].text, "Hello again, this search engine indexes documents.");
    }

    #[test]
    fn test_search_no_results() {
        let engine = sample_engine();
        assert!(engine.search("quantum").is_empty());
    }

    #[test]
    fn test_phrase_requires_every_token() {
        let engine = sample_engine();

        // Only document 2 carries both literal tokens "search" and "engine";
        // document 1 has "engine." and document 3 has "searches".
        let hits = engine.search_phrase("search engine");
        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_phrase_vs_query_semantics() {
        let mut engine = SearchEngine::new();
        engine.add_document(1, "cat dog");
        engine.add_document(2, "cat");
        engine.add_document(3, "dog");

        assert_eq!(engine.search("cat dog").len(), 3);
        assert_eq!(engine.search_phrase("cat dog").len(), 1);
    }

    #[test]
    fn test_equal_scores_order_by_doc_id() {
        let mut engine = SearchEngine::new();
        engine.add_document(1, "cat dog");
        engine.add_document(2, "cat");
        engine.add_document(3, "dog");

        // All three documents score ln(3/2) for "cat dog": the tie-break is
        // doc id ascending.
        let hits = engine.search("cat dog");
        let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_autocomplete() {
        let engine = sample_engine();

        let mut suggestions = engine.autocomplete("sear");
        suggestions.sort();
        assert_eq!(suggestions, vec!["search", "searches"]);

        assert!(engine.autocomplete("zzz").is_empty());
    }

    #[test]
    fn test_autocomplete_keeps_punctuation_tokens() {
        let engine = sample_engine();

        // "world," (document 1) and "world" (document 3) are distinct words.
        let mut suggestions = engine.autocomplete("wor");
        suggestions.sort();
        assert_eq!(suggestions, vec!["world", "world,"]);
    }

    #[test]
    fn test_get_document() {
        let engine = sample_engine();
        assert_eq!(
            engine.get_document(3),
            Some("The world is full of data, and this engine searches through it.")
        );
        assert_eq!(engine.get_document(99), None);
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let engine = sample_engine();

        let first = engine.search("Hello world");
        let second = engine.search("Hello world");

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.doc_id, b.doc_id);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_stats() {
        let engine = sample_engine();
        let stats = engine.stats();

        assert_eq!(stats.documents, 3);
        assert!(stats.distinct_terms > 0);
        assert_eq!(stats.distinct_terms, stats.indexed_words);
    }
}
