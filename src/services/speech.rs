use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechKind {
    Summary,
    Translation,
}

/// What the browser should speak, and in which voice language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub lang: &'static str,
}

/// Compose the read-aloud text for one side of a summary card. Returns
/// `None` when there is nothing to read.
pub fn compose_utterance(
    kind: SpeechKind,
    summary: &str,
    translated: &str,
    language: &str,
) -> Option<Utterance> {
    match kind {
        SpeechKind::Summary => {
            let summary = summary.trim();
            (!summary.is_empty()).then(|| Utterance {
                text: format!("Here is your English summary: {}", summary),
                lang: "en-US",
            })
        }
        SpeechKind::Translation => {
            let translated = translated.trim();
            (!translated.is_empty()).then(|| Utterance {
                text: format!("{} translation: {}", language, translated),
                lang: voice_lang(language),
            })
        }
    }
}

fn voice_lang(language: &str) -> &'static str {
    if language.to_lowercase().contains("urdu") {
        "ur-PK"
    } else {
        "en-US"
    }
}
