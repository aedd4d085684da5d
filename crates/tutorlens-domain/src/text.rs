//! Tokenizer and phrase matching
//!
//! Coarse, dependency-free text handling shared by every scorer. Phrases are
//! matched case-insensitively; ASCII phrases respect word boundaries while
//! phrases containing other scripts match as plain substrings, since those
//! scripts are not space-delimited.

/// Characters that end a sentence
pub const SENTENCE_TERMINATORS: &[char] = &['.', '。', '!', '！', '?', '？'];

/// Characters that mark a question
pub const QUESTION_MARKERS: &[char] = &['?', '？'];

const CJK_PUNCTUATION: &[char] = &[
    '、', '。', '，', '．', '！', '？', '：', '；', '「', '」', '『', '』', '（', '）', '・', '…',
    '〜', '～', '【', '】', '　',
];

/// Whether `c` separates tokens
pub fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || CJK_PUNCTUATION.contains(&c)
}

/// Split text into word-like units at whitespace and punctuation
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_token_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lower-cased tokens
pub fn tokenize_lowercase(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(str::to_lowercase).collect()
}

/// Number of characters (not bytes)
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Runs of consecutive sentence terminators; `"a... b."` has two
pub fn terminator_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        let is_terminator = SENTENCE_TERMINATORS.contains(&c);
        if is_terminator && !in_run {
            runs += 1;
        }
        in_run = is_terminator;
    }
    runs
}

/// Whether the text contains a question marker anywhere
pub fn has_question_marker(text: &str) -> bool {
    text.contains(QUESTION_MARKERS)
}

/// Whether the text ends in a question marker, ignoring trailing whitespace
pub fn ends_with_question(text: &str) -> bool {
    text.trim_end()
        .chars()
        .last()
        .is_some_and(|c| QUESTION_MARKERS.contains(&c))
}

/// A text prepared for repeated phrase lookups
///
/// Lower-cases once so each lookup is a plain scan.
#[derive(Debug, Clone)]
pub struct Normalized {
    lowered: String,
}

impl Normalized {
    /// Prepare `text`
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    /// The lower-cased text
    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Whether `phrase` occurs
    pub fn contains(&self, phrase: &str) -> bool {
        self.count(phrase) > 0
    }

    /// Non-overlapping occurrences of `phrase`
    pub fn count(&self, phrase: &str) -> usize {
        let phrase = phrase.to_lowercase();
        if phrase.is_empty() {
            return 0;
        }
        if !phrase.is_ascii() {
            return self.lowered.matches(phrase.as_str()).count();
        }

        let hay = self.lowered.as_str();
        let needs_left = phrase.chars().next().is_some_and(char::is_alphanumeric);
        let needs_right = phrase.chars().last().is_some_and(char::is_alphanumeric);
        let mut count = 0;
        let mut from = 0;
        while let Some(offset) = hay[from..].find(phrase.as_str()) {
            let start = from + offset;
            let end = start + phrase.len();
            let left_ok = !needs_left || !hay[..start].chars().next_back().is_some_and(char::is_alphanumeric);
            let right_ok = !needs_right || !hay[end..].chars().next().is_some_and(char::is_alphanumeric);
            if left_ok && right_ok {
                count += 1;
                from = end;
            } else {
                from = start + hay[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
        count
    }

    /// First phrase of `phrases` (in list order) that occurs
    pub fn first_match<'a>(&self, phrases: &[&'a str]) -> Option<&'a str> {
        phrases.iter().copied().find(|phrase| self.contains(phrase))
    }

    /// Whether any of `phrases` occurs
    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        self.first_match(phrases).is_some()
    }

    /// Sum of occurrences of every phrase
    pub fn count_all(&self, phrases: &[&str]) -> usize {
        phrases.iter().map(|phrase| self.count(phrase)).sum()
    }

    /// Number of distinct phrases that occur
    pub fn presences(&self, phrases: &[&str]) -> usize {
        phrases.iter().filter(|phrase| self.contains(phrase)).count()
    }
}
