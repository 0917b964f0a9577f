use clap::Parser;
use textsift::{Result, SearchEngine, SearchHit};

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "In-process text search demo", long_about = None)]
struct Args {
    /// Free-text query (any token may match)
    #[arg(short, long, default_value = "Hello world")]
    query: String,

    /// Phrase query (every token must occur in a matching document)
    #[arg(short, long, default_value = "search engine")]
    phrase: String,

    /// Prefix to expand into autocomplete suggestions
    #[arg(long, default_value = "sear")]
    prefix: String,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

// Sample corpus
fn sample_engine() -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.add_document(1, "Hello world, this is a simple search engine.");
    engine.add_document(2, "Hello again, this search engine indexes documents.");
    engine.add_document(3, "The world is full of data, and this engine searches through it.");
    engine
}

fn print_hits(label: &str, input: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No results found for \"{}\".", input);
        return;
    }

    println!("{} results for \"{}\":", label, input);
    for hit in hits {
        println!("  Document {} (score: {:.4}): {}", hit.doc_id, hit.score, hit.text);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let engine = sample_engine();

    let hits = engine.search(&args.query);
    let phrase_hits = engine.search_phrase(&args.phrase);
    let suggestions = engine.autocomplete(&args.prefix);

    if args.json {
        let out = serde_json::json!({
            "query": { "input": args.query, "hits": hits },
            "phrase": { "input": args.phrase, "hits": phrase_hits },
            "autocomplete": { "input": args.prefix, "suggestions": suggestions },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_hits("Search", &args.query, &hits);
    println!();
    print_hits("Phrase", &args.phrase, &phrase_hits);
    println!();

    if suggestions.is_empty() {
        println!("No autocomplete suggestions for \"{}\".", args.prefix);
    } else {
        println!("Autocomplete suggestions for \"{}\":", args.prefix);
        for word in &suggestions {
            println!("  {}", word);
        }
    }

    let stats = engine.stats();
    println!();
    println!(
        "Indexed {} documents, {} distinct terms, {} words in the prefix tree",
        stats.documents, stats.distinct_terms, stats.indexed_words
    );

    Ok(())
}
