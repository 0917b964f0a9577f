/// Whitespace tokenizer.
///
/// Tokens are the raw whitespace-delimited substrings of the input, compared
/// byte-for-byte. No case folding, no punctuation stripping: `engine` and
/// `engine.` are distinct tokens.
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split text into tokens.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
