use tracing::debug;

use super::intent;

/// Long unstructured text gets bulleted above this length.
const BULLET_MIN_CHARS: usize = 50;
/// Short prompts below this length get a clarifying sentence appended.
const CLARIFY_MAX_CHARS: usize = 30;

/// Appended to short prompts. Mentions "specific" and "detailed" so a second
/// pass never appends it again.
const CLARIFIER: &str = "Please include specific requirements and detailed context.";

/// Two independent rewrites, mutually exclusive through their length guards:
/// long multi-sentence text with no existing structure becomes a bulleted
/// list, and very short text gets a fixed clarifying sentence appended.
pub fn optimize(text: &str) -> (String, Vec<String>) {
    let length = text.chars().count();

    if length > BULLET_MIN_CHARS && !text.contains(':') && !text.contains('-') {
        let sentences: Vec<&str> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if sentences.len() > 2 {
            debug!("Restructuring {} sentences into bullets", sentences.len());
            let bullets = sentences
                .iter()
                .map(|s| format!("• {}", capitalize_first(s)))
                .collect::<Vec<_>>()
                .join("\n");
            let change = format!("Restructured into {} bullet points", sentences.len());
            return (bullets, vec![change]);
        }
    }

    if length < CLARIFY_MAX_CHARS && !intent::mentions_detail(text) {
        debug!("Prompt is short, appending clarifying guidance");
        let expanded = format!("{} {}", text, CLARIFIER);
        return (
            expanded,
            vec!["Added guidance asking for specifics".to_string()],
        );
    }

    (text.to_string(), Vec::new())
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
