use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Maps one casual token to its professional replacement.
struct ToneRule {
    find: Regex,
    casual: &'static str,
    formal: &'static str,
}

/// Casual vocabulary and chat shorthand, replaced whole-word and
/// case-insensitively. No formal replacement re-matches any casual pattern,
/// so the rewrite is idempotent.
const VOCABULARY: &[(&str, &str)] = &[
    ("kinda", "somewhat"),
    ("sorta", "somewhat"),
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "need to"),
    ("dunno", "do not know"),
    ("lemme", "let me"),
    ("gimme", "give me"),
    ("stuff", "material"),
    ("yeah", "yes"),
    ("yep", "yes"),
    ("nope", "no"),
    ("cuz", "because"),
    ("coz", "because"),
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("btw", "by the way"),
    ("fyi", "for your information"),
    ("idk", "I do not know"),
    ("imo", "in my opinion"),
    ("asap", "as soon as possible"),
    ("awesome", "excellent"),
    ("super", "very"),
];

static RULES: Lazy<Vec<ToneRule>> = Lazy::new(|| {
    VOCABULARY
        .iter()
        .map(|&(casual, formal)| ToneRule {
            find: Regex::new(&format!(r"(?i)\b{}\b", casual)).expect("static tone pattern"),
            casual,
            formal,
        })
        .collect()
});

/// Replace casual phrasing with professional vocabulary. Formal text passes
/// through untouched.
pub fn rewrite(text: &str) -> (String, Vec<String>) {
    let mut result = text.to_string();
    let mut changes: Vec<String> = Vec::new();

    for rule in RULES.iter() {
        if rule.find.is_match(&result) {
            result = rule.find.replace_all(&result, rule.formal).into_owned();
            changes.push(format!(
                "Replaced casual '{}' with '{}'",
                rule.casual, rule.formal
            ));
        }
    }

    if !changes.is_empty() {
        debug!("Tone pass rewrote {} casual terms", changes.len());
    }

    (result, changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casual_terms_replaced() {
        let (result, changes) = rewrite("I kinda wanna write stuff");
        assert_eq!(result, "I somewhat want to write material");
        assert_eq!(changes.len(), 3);
    }

    #[test]
    fn test_idempotent_on_formal_text() {
        let (first, _) = rewrite("gonna need this asap");
        let (second, changes) = rewrite(&first);
        assert_eq!(first, second);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_whole_word_matching() {
        // "superb" and "yeahs"-like embeddings must not be rewritten
        let (result, changes) = rewrite("A superb result");
        assert_eq!(result, "A superb result");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_formal_text_untouched() {
        let input = "Please draft a concise project summary";
        let (result, changes) = rewrite(input);
        assert_eq!(result, input);
        assert!(changes.is_empty());
    }
}
