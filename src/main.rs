use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use tracing::{error, info};

use prompt_polish::config::Config;
use prompt_polish::enhance::{self, HttpBackend};
use prompt_polish::normalize::{Pipeline, PipelineOptions};

// Global state
static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    *CONFIG.write().unwrap() = Config::load();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (enhance_requested, text_args) = split_flags(args);

    let raw = if text_args.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        text_args.join(" ")
    };

    if raw.trim().is_empty() {
        return Err("No prompt text provided".into());
    }

    let config = CONFIG.read().unwrap().clone();
    let pipeline = Pipeline::new(PipelineOptions {
        lexical: config.lexical,
        grammar: config.grammar,
        tone: config.tone,
        structure: config.structure,
    });

    let result = pipeline.run(&raw);

    println!("✅ Polished prompt:\n{}", result.corrected_text);
    println!("Changes applied:");
    for change in &result.applied_changes {
        println!("  • {}", change);
    }
    if let Some(ref classification) = result.classification {
        info!(
            "Detected intent: {} (domain: {}, style: {}, confidence: {:.2})",
            classification.intent.as_str(),
            classification.domain.as_str(),
            classification.style.as_str(),
            classification.confidence
        );
    }

    if enhance_requested {
        let backend = HttpBackend::new(&config.endpoint, &config.model);
        match enhance::enhance(&backend, &result).await {
            Ok(enhanced) => println!("✨ Enhanced prompt:\n{}", enhanced),
            Err(e) => {
                error!("Enhancement failed: {}", e);
                log_error(&format!("Enhancement failed: {}", e));
            }
        }
    }

    Ok(())
}

/// Pull the `--enhance` flag out of the argument list; the rest is prompt text.
fn split_flags(args: Vec<String>) -> (bool, Vec<String>) {
    let mut enhance_requested = false;
    let mut text_args = Vec::new();

    for arg in args {
        if arg == "--enhance" {
            enhance_requested = true;
        } else {
            text_args.push(arg);
        }
    }

    (enhance_requested, text_args)
}

fn log_error(message: &str) {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
    let log_path = PathBuf::from(&home).join(".local/state/prompt-polish/error.log");

    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    if let Ok(mut file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_flags_extracts_enhance() {
        let args = vec![
            "--enhance".to_string(),
            "write".to_string(),
            "a".to_string(),
            "haiku".to_string(),
        ];
        let (enhance_requested, text_args) = split_flags(args);
        assert!(enhance_requested);
        assert_eq!(text_args.join(" "), "write a haiku");
    }

    #[test]
    fn test_split_flags_without_enhance() {
        let args = vec!["fix".to_string(), "this".to_string()];
        let (enhance_requested, text_args) = split_flags(args);
        assert!(!enhance_requested);
        assert_eq!(text_args.len(), 2);
    }
}
