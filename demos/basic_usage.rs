use textsift::SearchEngine;

fn main() -> anyhow::Result<()> {
    println!("=== textsift Basic Usage Example ===\n");

    let mut engine = SearchEngine::new();

    // Insert some documents
    println!("Inserting documents...");
    engine.add_document(1, "Rust is a systems programming language that runs blazingly fast.");
    engine.add_document(2, "Go is a programming language that makes it easy to build software.");
    engine.add_document(3, "Python lets you work quickly and integrate systems effectively.");
    println!("✓ Inserted 3 documents\n");

    // Example 1: Free-text search
    println!("--- Example 1: Search for 'programming language' ---");
    let results = engine.search("programming language");
    println!("Found {} documents", results.len());
    for (i, hit) in results.iter().enumerate() {
        println!("\n{}. [Score: {:.4}] Document {}", i + 1, hit.score, hit.doc_id);
        println!("   {}", hit.text);
    }

    // Example 2: Phrase search (co-occurrence of every token)
    println!("\n\n--- Example 2: Phrase search for 'systems language' ---");
    let results = engine.search_phrase("systems language");
    println!("Found {} documents containing every token", results.len());
    for hit in &results {
        println!("  Document {} [Score: {:.4}]", hit.doc_id, hit.score);
    }

    // Example 3: Autocomplete
    println!("\n\n--- Example 3: Autocomplete 'pro' ---");
    let suggestions = engine.autocomplete("pro");
    for word in &suggestions {
        println!("  {}", word);
    }

    // Example 4: Fetch a document by id
    println!("\n\n--- Example 4: Fetch document 2 ---");
    match engine.get_document(2) {
        Some(text) => println!("Document 2: {}", text),
        None => println!("Document 2 not found"),
    }

    // Example 5: Statistics
    println!("\n\n--- Example 5: Index Statistics ---");
    let stats = engine.stats();
    println!("Total documents: {}", stats.documents);
    println!("Distinct terms: {}", stats.distinct_terms);
    println!("Words in prefix tree: {}", stats.indexed_words);

    println!("\n=== Example Complete ===");

    Ok(())
}
