//! Tokenization — turning raw text into sentence-bounded label streams.
//!
//! Sentences are the adjacency boundary: word graph edges never cross
//! them. Callers with a real part-of-speech pipeline implement
//! [`Tokenize`] themselves; the two built-in tokenizers cover plain text
//! and pre-tagged corpora.

use std::collections::HashSet;

/// A token with an optional part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: Option<String>,
}

impl TaggedToken {
    /// An untagged token.
    pub fn plain(word: impl Into<String>) -> Self {
        TaggedToken {
            word: word.into(),
            tag: None,
        }
    }

    /// A token with a part-of-speech tag.
    pub fn tagged(word: impl Into<String>, tag: impl Into<String>) -> Self {
        TaggedToken {
            word: word.into(),
            tag: Some(tag.into()),
        }
    }

    /// The node label for this token.
    ///
    /// The word is lowercased; tagged tokens append `_TAG` with the tag
    /// kept verbatim, so `Likely`/`JJ` becomes `likely_JJ`.
    pub fn label(&self) -> String {
        let word = self.word.to_lowercase();
        match &self.tag {
            Some(tag) => format!("{}_{}", word, tag),
            None => word,
        }
    }
}

/// Splits raw text into sentences of tagged tokens.
pub trait Tokenize {
    /// Split `text` into sentences of (word, tag) tokens.
    fn tag_and_tokenize(&self, text: &str) -> Vec<Vec<TaggedToken>>;

    /// Sentence-bounded node labels for `text`.
    fn labels(&self, text: &str) -> Vec<Vec<String>> {
        self.tag_and_tokenize(text)
            .into_iter()
            .map(|sentence| sentence.iter().map(TaggedToken::label).collect())
            .collect()
    }
}

/// Whitespace-and-punctuation tokenizer with naive sentence splitting.
///
/// Sentences end at `.`, `!` or `?`; the terminator stays in the token
/// stream. Tokens are maximal alphanumeric runs (apostrophes and
/// underscores included) or single punctuation marks. Produces no tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTokenizer;

impl Tokenize for PlainTokenizer {
    fn tag_and_tokenize(&self, text: &str) -> Vec<Vec<TaggedToken>> {
        let mut sentences = Vec::new();
        let mut sentence: Vec<TaggedToken> = Vec::new();
        let mut word = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch == '\'' {
                word.push(ch);
                continue;
            }
            if !word.is_empty() {
                sentence.push(TaggedToken::plain(std::mem::take(&mut word)));
            }
            if ch.is_whitespace() {
                continue;
            }
            sentence.push(TaggedToken::plain(ch.to_string()));
            if matches!(ch, '.' | '!' | '?') {
                sentences.push(std::mem::take(&mut sentence));
            }
        }
        if !word.is_empty() {
            sentence.push(TaggedToken::plain(word));
        }
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        sentences
    }
}

/// Tokenizer for corpora tagged offline.
///
/// Expects one sentence per line of whitespace-separated `word_TAG`
/// tokens, the format a part-of-speech pre-pass writes out. The tag is
/// everything after the last underscore; tokens without one pass through
/// untagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedLineTokenizer;

impl Tokenize for TaggedLineTokenizer {
    fn tag_and_tokenize(&self, text: &str) -> Vec<Vec<TaggedToken>> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| match token.rsplit_once('_') {
                        Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                            TaggedToken::tagged(word, tag)
                        }
                        _ => TaggedToken::plain(token),
                    })
                    .collect()
            })
            .collect()
    }
}

/// The default English stopword list, punctuation marks included.
///
/// Punctuation entries keep sentence terminators out of the content
/// vocabulary when the plain tokenizer is in use.
pub fn english_stopwords() -> HashSet<String> {
    [
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did", "will", "would", "shall",
        "should", "may", "might", "must", "can", "could", "of", "in", "to",
        "for", "with", "on", "at", "from", "by", "about", "as", "into",
        "through", "during", "before", "after", "above", "below", "between",
        "out", "off", "over", "under", "again", "further", "then", "once",
        "here", "there", "when", "where", "why", "how", "all", "each",
        "every", "both", "few", "more", "most", "other", "some", "such",
        "no", "nor", "not", "only", "own", "same", "so", "than", "too",
        "very", "just", "because", "but", "and", "or", "if", "while",
        "that", "this", "these", "those", "it", "its", "they", "them",
        "their", "we", "our", "you", "your", "he", "she", "his", "her",
        "which", "what", "who", "whom",
        ".", ",", ";", ":", "-", "\"", "'", "!", "?", "(", ")",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokenizer_splits_sentences_at_terminators() {
        let sentences = PlainTokenizer.tag_and_tokenize("The quick fox. It ran!");
        assert_eq!(sentences.len(), 2);
        let words: Vec<&str> = sentences[0].iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["The", "quick", "fox", "."]);
        let words: Vec<&str> = sentences[1].iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["It", "ran", "!"]);
    }

    #[test]
    fn plain_tokenizer_keeps_trailing_sentence_without_terminator() {
        let sentences = PlainTokenizer.tag_and_tokenize("no terminator here");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].len(), 3);
    }

    #[test]
    fn plain_tokenizer_emits_punctuation_as_tokens() {
        let sentences = PlainTokenizer.tag_and_tokenize("wait, what?");
        let words: Vec<&str> = sentences[0].iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["wait", ",", "what", "?"]);
    }

    #[test]
    fn plain_tokenizer_handles_empty_input() {
        assert!(PlainTokenizer.tag_and_tokenize("").is_empty());
        assert!(PlainTokenizer.tag_and_tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn labels_are_lowercased() {
        let labels = PlainTokenizer.labels("The Fox");
        assert_eq!(labels, vec![vec!["the".to_string(), "fox".to_string()]]);
    }

    #[test]
    fn tagged_label_appends_tag() {
        let token = TaggedToken::tagged("Likely", "JJ");
        assert_eq!(token.label(), "likely_JJ");
    }

    #[test]
    fn tagged_line_tokenizer_parses_word_tag_pairs() {
        let text = "The_DT market_NN rallied_VBD\nPrices_NNS fell_VBD";
        let sentences = TaggedLineTokenizer.tag_and_tokenize(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0][1], TaggedToken::tagged("market", "NN"));
        assert_eq!(sentences[1][0].label(), "prices_NNS");
    }

    #[test]
    fn tagged_line_tokenizer_splits_at_last_underscore() {
        let sentences = TaggedLineTokenizer.tag_and_tokenize("vice_president_NN");
        assert_eq!(sentences[0][0], TaggedToken::tagged("vice_president", "NN"));
    }

    #[test]
    fn tagged_line_tokenizer_passes_bare_tokens_through() {
        let sentences = TaggedLineTokenizer.tag_and_tokenize("plain token_");
        assert_eq!(sentences[0][0], TaggedToken::plain("plain"));
        assert_eq!(sentences[0][1], TaggedToken::plain("token_"));
    }

    #[test]
    fn stopword_list_covers_function_words_and_punctuation() {
        let stops = english_stopwords();
        assert!(stops.contains("the"));
        assert!(stops.contains("of"));
        assert!(stops.contains("."));
        assert!(!stops.contains("market"));
    }
}
