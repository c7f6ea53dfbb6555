use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// What the user is asking the model to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Create,
    Analyze,
    Summarize,
    Explain,
    Translate,
    Plan,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Create => "create",
            Intent::Analyze => "analyze",
            Intent::Summarize => "summarize",
            Intent::Explain => "explain",
            Intent::Translate => "translate",
            Intent::Plan => "plan",
        }
    }
}

/// Subject area the prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Technology,
    Business,
    Marketing,
    Education,
    Health,
    Creative,
    General,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Technology => "technology",
            Domain::Business => "business",
            Domain::Marketing => "marketing",
            Domain::Education => "education",
            Domain::Health => "health",
            Domain::Creative => "creative",
            Domain::General => "general",
        }
    }
}

/// Requested writing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Professional,
    Casual,
    Technical,
    Academic,
    Persuasive,
    Playful,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Casual => "casual",
            Style::Technical => "technical",
            Style::Academic => "academic",
            Style::Persuasive => "persuasive",
            Style::Playful => "playful",
        }
    }
}

/// Independent keyword-derived booleans about the request context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContextFlags {
    pub time_sensitive: bool,
    pub team_request: bool,
    pub wants_examples: bool,
    pub has_audience: bool,
}

/// Result of classifying a prompt: bucket labels plus a heuristic confidence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Classification {
    pub intent: Intent,
    pub domain: Domain,
    pub style: Style,
    pub confidence: f32,
    pub context: ContextFlags,
}

fn pattern(alternation: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("static intent pattern")
}

/// First matching pattern in declaration order wins.
static INTENT_PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    vec![
        (Intent::Create, pattern("create|write|generate|make|build|draft|compose|design")),
        (Intent::Analyze, pattern("analyze|analyse|review|evaluate|assess|examine|compare")),
        (Intent::Summarize, pattern("summarize|summarise|summary|condense|recap")),
        (Intent::Explain, pattern("explain|describe|clarify|teach|define")),
        (Intent::Translate, pattern("translate|convert|rewrite|rephrase|transform")),
        (Intent::Plan, pattern("plan|organize|schedule|outline|roadmap")),
    ]
});

static DOMAIN_PATTERNS: Lazy<Vec<(Domain, Regex)>> = Lazy::new(|| {
    vec![
        (Domain::Technology, pattern("code|software|api|database|programming|server|algorithm")),
        (Domain::Business, pattern("business|sales|revenue|strategy|market|customer|startup")),
        (Domain::Marketing, pattern("marketing|brand|campaign|seo|advertising|newsletter")),
        (Domain::Education, pattern("course|lesson|student|curriculum|study|homework")),
        (Domain::Health, pattern("health|fitness|medical|diet|exercise|wellness")),
        (Domain::Creative, pattern("story|poem|art|music|novel|character")),
    ]
});

static STYLE_PATTERNS: Lazy<Vec<(Style, Regex)>> = Lazy::new(|| {
    vec![
        (Style::Professional, pattern("professional|formal|corporate|polished")),
        (Style::Casual, pattern("casual|informal|friendly|relaxed|conversational")),
        (Style::Technical, pattern("technical|precise|rigorous|exact")),
        (Style::Academic, pattern("academic|scholarly|research|scientific")),
        (Style::Persuasive, pattern("persuasive|convincing|compelling|pitch")),
        (Style::Playful, pattern("funny|humorous|witty|playful")),
    ]
});

static DETAIL_HINT: Lazy<Regex> = Lazy::new(|| pattern("specific|detailed"));
static TIME_SENSITIVE: Lazy<Regex> =
    Lazy::new(|| pattern("urgent|asap|as soon as possible|deadline|today|immediately|quickly"));
static TEAM_REQUEST: Lazy<Regex> = Lazy::new(|| pattern("we|our team|us|together|colleagues"));
static WANTS_EXAMPLES: Lazy<Regex> = Lazy::new(|| pattern("example|examples|sample|for instance"));
static HAS_AUDIENCE: Lazy<Regex> = Lazy::new(|| pattern("audience|readers|customers|users|clients"));

/// Confidence model: start at 0.5 and add fixed bonuses. Deliberately not
/// clamped, so the score can exceed 1.0 when every bonus fires.
const BASE_CONFIDENCE: f32 = 0.5;
const LENGTH_BONUS: f32 = 0.2;
const DETAIL_BONUS: f32 = 0.2;
const MATCH_BONUS: f32 = 0.2;
const LENGTH_BONUS_THRESHOLD: usize = 50;

/// Whether the text already asks for a specific or detailed answer.
pub(crate) fn mentions_detail(text: &str) -> bool {
    DETAIL_HINT.is_match(text)
}

/// Bucket free text into intent, domain and style, with a heuristic
/// confidence score and context flags.
pub fn classify(text: &str) -> Classification {
    let intent = INTENT_PATTERNS.iter().find(|(_, re)| re.is_match(text)).map(|(i, _)| *i);
    let domain = DOMAIN_PATTERNS.iter().find(|(_, re)| re.is_match(text)).map(|(d, _)| *d);
    let style = STYLE_PATTERNS.iter().find(|(_, re)| re.is_match(text)).map(|(s, _)| *s);

    let mut confidence = BASE_CONFIDENCE;
    if text.chars().count() > LENGTH_BONUS_THRESHOLD {
        confidence += LENGTH_BONUS;
    }
    if mentions_detail(text) {
        confidence += DETAIL_BONUS;
    }
    if intent.is_some() || domain.is_some() {
        confidence += MATCH_BONUS;
    }

    let classification = Classification {
        intent: intent.unwrap_or(Intent::Create),
        domain: domain.unwrap_or(Domain::General),
        style: style.unwrap_or(Style::Professional),
        confidence,
        context: ContextFlags {
            time_sensitive: TIME_SENSITIVE.is_match(text),
            team_request: TEAM_REQUEST.is_match(text),
            wants_examples: WANTS_EXAMPLES.is_match(text),
            has_audience: HAS_AUDIENCE.is_match(text),
        },
    };

    debug!(
        "Classified prompt as {}/{}/{} (confidence {:.2})",
        classification.intent.as_str(),
        classification.domain.as_str(),
        classification.style.as_str(),
        classification.confidence
    );

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_matches() {
        let c = classify("xyzzy frobnicate");
        assert_eq!(c.intent, Intent::Create);
        assert_eq!(c.domain, Domain::General);
        assert_eq!(c.style, Style::Professional);
        assert!((c.confidence - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_first_match_wins() {
        // "write" (create) appears before "summarize" in declaration order
        let c = classify("write a summary of this text");
        assert_eq!(c.intent, Intent::Create);
    }

    #[test]
    fn test_domain_and_style_detection() {
        let c = classify("review this api code in a technical tone");
        assert_eq!(c.intent, Intent::Analyze);
        assert_eq!(c.domain, Domain::Technology);
        assert_eq!(c.style, Style::Technical);
    }

    #[test]
    fn test_confidence_bonuses() {
        let c = classify("hi");
        assert!((c.confidence - 0.5).abs() < 1e-4);

        let c = classify("write a poem");
        assert!((c.confidence - 0.7).abs() < 1e-4);

        let c = classify("write a detailed business plan covering revenue and customers");
        // base + length + detail + match
        assert!((c.confidence - 1.1).abs() < 1e-4);
        assert!(c.confidence > 1.0);
    }

    #[test]
    fn test_context_flags() {
        let c = classify("we need examples for our clients today");
        assert!(c.context.time_sensitive);
        assert!(c.context.team_request);
        assert!(c.context.wants_examples);
        assert!(c.context.has_audience);

        let c = classify("compose a sonnet");
        assert_eq!(c.context, ContextFlags::default());
    }
}
