use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// An ordered grammar fix. Rules in the same category share one change-log
/// entry; only the first match per category is logged.
struct GrammarRule {
    find: Regex,
    replace: &'static str,
    category: &'static str,
    description: &'static str,
}

const CONTRACTIONS: &str = "contractions";
const AGREEMENT: &str = "agreement";
const ARTICLES: &str = "articles";

const CONTRACTION_DESC: &str = "Added missing apostrophes to contractions";
const AGREEMENT_DESC: &str = "Fixed subject-verb agreement";
const ARTICLE_DESC: &str = "Fixed article usage (a/an)";

fn rule(pattern: &str, replace: &'static str, category: &'static str, description: &'static str) -> GrammarRule {
    GrammarRule {
        find: Regex::new(pattern).expect("static grammar pattern"),
        replace,
        category,
        description,
    }
}

/// Contractions restore apostrophes before the doubled-word scan, so a
/// repeated contraction ("dont dont") survives as "don't don't" rather than
/// collapsing.
static CONTRACTION_RULES: Lazy<Vec<GrammarRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\bdont\b", "don't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bcant\b", "can't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bwont\b", "won't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bisnt\b", "isn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\barent\b", "aren't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bwasnt\b", "wasn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bwerent\b", "weren't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bdoesnt\b", "doesn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bdidnt\b", "didn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bcouldnt\b", "couldn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bshouldnt\b", "shouldn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bwouldnt\b", "wouldn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bhasnt\b", "hasn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bhavent\b", "haven't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bhadnt\b", "hadn't", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bim\b", "I'm", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bive\b", "I've", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\byoure\b", "you're", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\btheyre\b", "they're", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bweve\b", "we've", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bwhats\b", "what's", CONTRACTIONS, CONTRACTION_DESC),
        rule(r"(?i)\bthats\b", "that's", CONTRACTIONS, CONTRACTION_DESC),
    ]
});

/// Agreement and article fixes run after the doubled-word scan; the agreement
/// rules rely on the apostrophes restored above.
static SYNTAX_RULES: Lazy<Vec<GrammarRule>> = Lazy::new(|| {
    vec![
        rule(r"\b([Hh]e|[Ss]he|[Ii]t) don't\b", "${1} doesn't", AGREEMENT, AGREEMENT_DESC),
        rule(r"\b([Hh]e|[Ss]he|[Ii]t) have\b", "${1} has", AGREEMENT, AGREEMENT_DESC),
        rule(r"\b([Tt]hey|[Ww]e|[Yy]ou) was\b", "${1} were", AGREEMENT, AGREEMENT_DESC),
        rule(r"\b([Aa]) ([aeiouAEIOU])", "${1}n ${2}", ARTICLES, ARTICLE_DESC),
        rule(
            r"\b([Aa])n ([b-df-hj-np-tv-zB-DF-HJ-NP-TV-Z])",
            "${1} ${2}",
            ARTICLES,
            ARTICLE_DESC,
        ),
    ]
});

/// Standalone lowercase "i" as a pronoun. Case-sensitive on purpose.
static PRONOUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bi\b").expect("static pronoun pattern"));

/// Apply the ordered grammar rules (contractions, doubled-word removal,
/// agreement, articles), then a final tidy pass: whitespace collapse,
/// sentence-initial capitalization and terminal punctuation. Returns the
/// fixed text and the change-log entries.
pub fn apply(text: &str) -> (String, Vec<String>) {
    let mut changes: Vec<String> = Vec::new();
    let mut logged: Vec<&'static str> = Vec::new();
    let mut result = text.to_string();

    apply_rules(&CONTRACTION_RULES, &mut result, &mut logged, &mut changes);

    let (stripped, doubled) = strip_doubled_words(&result);
    if doubled {
        result = stripped;
        changes.push("Removed doubled words".to_string());
    }

    apply_rules(&SYNTAX_RULES, &mut result, &mut logged, &mut changes);

    if PRONOUN.is_match(&result) {
        result = PRONOUN.replace_all(&result, "I").into_owned();
        changes.push("Capitalized the pronoun 'I'".to_string());
    }

    let collapsed = result.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed != result {
        changes.push("Normalized whitespace".to_string());
        result = collapsed;
    }

    let capitalized = capitalize_sentences(&result);
    if capitalized != result {
        changes.push("Capitalized sentence beginnings".to_string());
        result = capitalized;
    }

    if !result.is_empty() && !result.ends_with(['.', '!', '?', ':']) {
        result.push('.');
        changes.push("Added ending punctuation".to_string());
    }

    if !changes.is_empty() {
        debug!("Grammar pass made {} kinds of changes", changes.len());
    }

    (result, changes)
}

fn apply_rules(
    rules: &[GrammarRule],
    result: &mut String,
    logged: &mut Vec<&'static str>,
    changes: &mut Vec<String>,
) {
    for rule in rules {
        if rule.find.is_match(result) {
            *result = rule.find.replace_all(result, rule.replace).into_owned();
            if !logged.contains(&rule.category) {
                logged.push(rule.category);
                changes.push(rule.description.to_string());
            }
        }
    }
}

/// Drop the second of two identical consecutive words ("the the" → "the").
/// Only plain whitespace-separated word tokens count; "the, the" is left alone.
fn strip_doubled_words(text: &str) -> (String, bool) {
    let mut kept: Vec<&str> = Vec::new();
    let mut dropped = false;

    for word in text.split_whitespace() {
        let is_doubled = kept
            .last()
            .map(|prev| is_plain_word(prev) && is_plain_word(word) && prev.eq_ignore_ascii_case(word))
            .unwrap_or(false);
        if is_doubled {
            dropped = true;
        } else {
            kept.push(word);
        }
    }

    if dropped {
        (kept.join(" "), true)
    } else {
        (text.to_string(), false)
    }
}

fn is_plain_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphanumeric())
}

/// Uppercase the first letter of the text and of every sentence after a
/// terminal punctuation mark. Other characters are left untouched.
fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for ch in text.chars() {
        if capitalize_next && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(ch);
            if matches!(ch, '.' | '!' | '?') {
                capitalize_next = true;
            }
        }
    }

    out
}
