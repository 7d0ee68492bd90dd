//! Post-processing of raw provider text. Every function here is pure and
//! never re-invokes the provider.

use std::sync::LazyLock;

use regex::Regex;

// Attribute-tolerant so `<SCRIPT type="text/javascript">` is caught too.
static SCRIPT_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script element pattern compiles")
});
static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script[^>]*>").expect("script tag pattern compiles"));

/// Removes `<script>...</script>` elements, any stray unpaired script
/// tags, and surrounding whitespace. Chat replies are rendered as
/// Markdown by the website, so reflected script markup must not survive.
pub fn strip_script_tags(text: &str) -> String {
    let without_elements = SCRIPT_ELEMENT.replace_all(text, "");
    SCRIPT_TAG.replace_all(&without_elements, "").trim().to_string()
}

/// Removes double quotes and newlines. Subject lines, tone feedback and
/// intent labels have a single-line output contract.
pub fn strip_quotes_and_newlines(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '"' | '\n' | '\r'))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive 🙂",
            Sentiment::Negative => "Negative 🙁",
            Sentiment::Neutral => "Neutral 😐",
        }
    }
}

/// Maps whatever the model said onto the closed three-label set. Positive
/// is checked before negative; anything unrecognized is Neutral.
pub fn normalize_sentiment(raw: &str) -> Sentiment {
    let text = raw.to_lowercase();
    if text.contains("positive") {
        Sentiment::Positive
    } else if text.contains("negative") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
