use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// A single spelling correction, matched whole-word and case-insensitively.
struct LexicalRule {
    find: Regex,
    wrong: &'static str,
    correct: &'static str,
}

/// Common misspellings, applied in declaration order. A later rule may operate
/// on the output of an earlier one; overlaps are not coordinated.
const MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("adn", "and"),
    ("taht", "that"),
    ("thier", "their"),
    ("recieve", "receive"),
    ("reciept", "receipt"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("definatly", "definitely"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("occassion", "occasion"),
    ("necesary", "necessary"),
    ("neccessary", "necessary"),
    ("acommodate", "accommodate"),
    ("accomodate", "accommodate"),
    ("absense", "absence"),
    ("acceptible", "acceptable"),
    ("accidentaly", "accidentally"),
    ("accross", "across"),
    ("acheive", "achieve"),
    ("acquaintence", "acquaintance"),
    ("adress", "address"),
    ("agressive", "aggressive"),
    ("allready", "already"),
    ("allthough", "although"),
    ("alot", "a lot"),
    ("amature", "amateur"),
    ("apparant", "apparent"),
    ("appearence", "appearance"),
    ("arguement", "argument"),
    ("aswell", "as well"),
    ("basicly", "basically"),
    ("becuase", "because"),
    ("becomeing", "becoming"),
    ("begginer", "beginner"),
    ("begining", "beginning"),
    ("beleive", "believe"),
    ("belive", "believe"),
    ("benifit", "benefit"),
    ("beutiful", "beautiful"),
    ("bizzare", "bizarre"),
    ("buisness", "business"),
    ("calender", "calendar"),
    ("camoflage", "camouflage"),
    ("catagory", "category"),
    ("cemetary", "cemetery"),
    ("changable", "changeable"),
    ("cheif", "chief"),
    ("collegue", "colleague"),
    ("comming", "coming"),
    ("commitee", "committee"),
    ("completly", "completely"),
    ("concious", "conscious"),
    ("consciencious", "conscientious"),
    ("convinient", "convenient"),
    ("curiousity", "curiosity"),
    ("decieve", "deceive"),
    ("desparate", "desperate"),
    ("diffrent", "different"),
    ("dissapear", "disappear"),
    ("dissapoint", "disappoint"),
    ("ecstacy", "ecstasy"),
    ("embarass", "embarrass"),
    ("enviroment", "environment"),
    ("equiptment", "equipment"),
    ("excercise", "exercise"),
    ("existance", "existence"),
    ("experiance", "experience"),
    ("familar", "familiar"),
    ("finaly", "finally"),
    ("florescent", "fluorescent"),
    ("foriegn", "foreign"),
    ("fourty", "forty"),
    ("foward", "forward"),
    ("freind", "friend"),
    ("futher", "further"),
    ("gaurd", "guard"),
    ("glamourous", "glamorous"),
    ("goverment", "government"),
    ("gratefull", "grateful"),
    ("guage", "gauge"),
    ("happend", "happened"),
    ("harrass", "harass"),
    ("heigth", "height"),
    ("hierachy", "hierarchy"),
    ("hygene", "hygiene"),
    ("hipocrit", "hypocrite"),
    ("immediatly", "immediately"),
    ("independant", "independent"),
    ("interupt", "interrupt"),
    ("irresistable", "irresistible"),
    ("knowlege", "knowledge"),
    ("liason", "liaison"),
    ("libary", "library"),
    ("lisence", "license"),
    ("maintainance", "maintenance"),
    ("managment", "management"),
    ("marshmellow", "marshmallow"),
    ("medeval", "medieval"),
    ("miniture", "miniature"),
    ("mischevous", "mischievous"),
    ("mispell", "misspell"),
    ("neice", "niece"),
    ("noticable", "noticeable"),
    ("occupaton", "occupation"),
    ("oppurtunity", "opportunity"),
    ("outragous", "outrageous"),
    ("parliment", "parliament"),
    ("pasttime", "pastime"),
    ("peice", "piece"),
    ("persistant", "persistent"),
    ("pharoah", "pharaoh"),
    ("playright", "playwright"),
    ("posession", "possession"),
    ("potatoe", "potato"),
    ("prefered", "preferred"),
    ("probaly", "probably"),
    ("probally", "probably"),
    ("proffesional", "professional"),
    ("pronounciation", "pronunciation"),
    ("publically", "publicly"),
    ("quater", "quarter"),
    ("questionaire", "questionnaire"),
    ("readible", "readable"),
    ("realy", "really"),
    ("recomend", "recommend"),
    ("refered", "referred"),
    ("relevent", "relevant"),
    ("religous", "religious"),
    ("remeber", "remember"),
    ("repitition", "repetition"),
    ("restarant", "restaurant"),
    ("rythm", "rhythm"),
    ("secratary", "secretary"),
    ("sieze", "seize"),
    ("similiar", "similar"),
    ("sincerly", "sincerely"),
    ("speach", "speech"),
    ("succesful", "successful"),
    ("successfull", "successful"),
    ("supercede", "supersede"),
    ("suprise", "surprise"),
    ("temperment", "temperament"),
    ("threshhold", "threshold"),
    ("tommorow", "tomorrow"),
    ("tomorow", "tomorrow"),
    ("tounge", "tongue"),
    ("truely", "truly"),
    ("unforseen", "unforeseen"),
    ("unfortunatly", "unfortunately"),
    ("untill", "until"),
    ("usefull", "useful"),
    ("vaccum", "vacuum"),
    ("vegatarian", "vegetarian"),
    ("vehical", "vehicle"),
    ("visable", "visible"),
    ("wellcome", "welcome"),
    ("wether", "whether"),
    ("whereever", "wherever"),
    ("wich", "which"),
    ("wierd", "weird"),
    ("writting", "writing"),
    ("yeild", "yield"),
];

static RULES: Lazy<Vec<LexicalRule>> = Lazy::new(|| {
    MISSPELLINGS
        .iter()
        .map(|&(wrong, correct)| LexicalRule {
            find: Regex::new(&format!(r"(?i)\b{}\b", wrong))
                .expect("static misspelling pattern"),
            wrong,
            correct,
        })
        .collect()
});

/// How many individual corrections are spelled out in the change log before
/// the rest collapse into a count.
const SHOWN_CORRECTIONS: usize = 3;

/// Replace every whole-word occurrence of a known misspelling with its
/// correction. Returns the corrected text and the change-log entries.
pub fn correct(text: &str) -> (String, Vec<String>) {
    let mut result = text.to_string();
    let mut fixes: Vec<String> = Vec::new();

    for rule in RULES.iter() {
        if rule.find.is_match(&result) {
            result = rule.find.replace_all(&result, rule.correct).into_owned();
            fixes.push(format!("{} → {}", rule.wrong, rule.correct));
        }
    }

    if !fixes.is_empty() {
        debug!("Applied {} spelling corrections", fixes.len());
    }

    let mut changes: Vec<String> = fixes
        .iter()
        .take(SHOWN_CORRECTIONS)
        .map(|fix| format!("Corrected spelling: {}", fix))
        .collect();
    if fixes.len() > SHOWN_CORRECTIONS {
        changes.push(format!(
            "...and {} more spelling corrections",
            fixes.len() - SHOWN_CORRECTIONS
        ));
    }

    (result, changes)
}
