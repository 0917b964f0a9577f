// Re-export main components
pub mod document;
pub mod engine;
pub mod index;
pub mod ranking;
pub mod tokenizer;
pub mod trie;

// Re-export commonly used types
pub use document::{DocId, DocumentStore};
pub use engine::{EngineStats, SearchEngine, SearchHit};
pub use index::RelevanceIndex;
pub use ranking::ScoredDocument;
pub use tokenizer::Tokenizer;
pub use trie::PrefixIndex;

// Re-export error types
pub use anyhow::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let mut engine = SearchEngine::new();

        engine.add_document(1, "Rust is a fast systems language");
        engine.add_document(2, "Search engines rank documents by relevance");

        let results = engine.search("Rust");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_id, 1);

        let suggestions = engine.autocomplete("ra");
        assert!(suggestions.contains(&"rank".to_string()));
    }
}
