//! Enum-keyed phrase tables for the two display languages.
//!
//! Every user-facing string lives here, indexed by `(Language, TextKey)`
//! so a missing translation is a compile error rather than a silent
//! dictionary-key typo. Switching language only ever changes the text
//! returned by this module; scoring never consults it.

use super::domain::{Dosha, Language, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Title,
    Intro,
    Yes,
    No,
    ShowResult,
    ResultHeading,
    ChartHeading,
    ReferencesHeading,
    OutcomePrefix,
    DiagnosisFailed,
    QuestionnaireLoadFailed,
    AnswerHint,
    SingleChoiceHint,
    ShowResultPrompt,
}

pub const fn text(language: Language, key: TextKey) -> &'static str {
    match (language, key) {
        (Language::Japanese, TextKey::Title) => "体質診断質問票（簡易版2024）",
        (Language::Japanese, TextKey::Intro) => {
            "各質問内容を見て、最も自分に当てはまる「状況・状態」に「はい」を押してください。"
        }
        (Language::Japanese, TextKey::Yes) => "はい",
        (Language::Japanese, TextKey::No) => "いいえ",
        (Language::Japanese, TextKey::ShowResult) => "診断結果を表示",
        (Language::Japanese, TextKey::ResultHeading) => "診断結果",
        (Language::Japanese, TextKey::ChartHeading) => "体質バランス",
        (Language::Japanese, TextKey::ReferencesHeading) => "参考リンク",
        (Language::Japanese, TextKey::OutcomePrefix) => "あなたの体質は: ",
        (Language::Japanese, TextKey::DiagnosisFailed) => "診断に失敗しました。",
        (Language::Japanese, TextKey::QuestionnaireLoadFailed) => {
            "質問票データの読み込みに失敗しました。"
        }
        (Language::Japanese, TextKey::AnswerHint) => "（y = はい / Enter = いいえ）",
        (Language::Japanese, TextKey::SingleChoiceHint) => "番号で1つ選んでください (1-3)",
        (Language::Japanese, TextKey::ShowResultPrompt) => "Enterキーで診断結果を表示します。",
        (Language::English, TextKey::Title) => {
            "Constitution Assessment Questionnaire (Simplified 2024)"
        }
        (Language::English, TextKey::Intro) => {
            "For each question, answer \"yes\" to every statement that describes you best."
        }
        (Language::English, TextKey::Yes) => "Yes",
        (Language::English, TextKey::No) => "No",
        (Language::English, TextKey::ShowResult) => "Show my result",
        (Language::English, TextKey::ResultHeading) => "Assessment result",
        (Language::English, TextKey::ChartHeading) => "Constitution balance",
        (Language::English, TextKey::ReferencesHeading) => "Further reading",
        (Language::English, TextKey::OutcomePrefix) => "Your constitution is: ",
        (Language::English, TextKey::DiagnosisFailed) => {
            "The assessment could not determine a result."
        }
        (Language::English, TextKey::QuestionnaireLoadFailed) => {
            "Failed to load the questionnaire data."
        }
        (Language::English, TextKey::AnswerHint) => "(y = yes / Enter = no)",
        (Language::English, TextKey::SingleChoiceHint) => "Choose one option by number (1-3)",
        (Language::English, TextKey::ShowResultPrompt) => "Press Enter to show your result.",
    }
}

pub const fn dosha_description(language: Language, dosha: Dosha) -> &'static str {
    match (language, dosha) {
        (Language::Japanese, Dosha::Vata) => {
            "ヴァータ体質は風のエネルギーが優勢で、軽快さと変化を好む傾向があります。"
        }
        (Language::Japanese, Dosha::Pitta) => {
            "ピッタ体質は火のエネルギーが優勢で、情熱的で集中力が高い傾向があります。"
        }
        (Language::Japanese, Dosha::Kapha) => {
            "カパ体質は水と土のエネルギーが優勢で、穏やかで安定した傾向があります。"
        }
        (Language::English, Dosha::Vata) => {
            "A Vata constitution is governed by the energy of air and favors lightness, movement, and change."
        }
        (Language::English, Dosha::Pitta) => {
            "A Pitta constitution is governed by the energy of fire and tends toward intensity and sharp focus."
        }
        (Language::English, Dosha::Kapha) => {
            "A Kapha constitution is governed by the energies of water and earth and tends toward calm and stability."
        }
    }
}

pub const fn tri_dosha_description(language: Language) -> &'static str {
    match language {
        Language::Japanese => "三つのドーシャが調和しており、バランスの取れた体質です。",
        Language::English => {
            "All three doshas are in harmony, indicating a well-balanced constitution."
        }
    }
}

/// Static reference link shown for each dosha in a non-balanced outcome.
pub const fn dosha_reference(language: Language, dosha: Dosha) -> &'static str {
    match (language, dosha) {
        (Language::Japanese, Dosha::Vata) => "https://ja.wikipedia.org/wiki/ドーシャ#ヴァータ",
        (Language::Japanese, Dosha::Pitta) => "https://ja.wikipedia.org/wiki/ドーシャ#ピッタ",
        (Language::Japanese, Dosha::Kapha) => "https://ja.wikipedia.org/wiki/ドーシャ#カパ",
        (Language::English, Dosha::Vata) => "https://en.wikipedia.org/wiki/Dosha#Vata",
        (Language::English, Dosha::Pitta) => "https://en.wikipedia.org/wiki/Dosha#Pitta",
        (Language::English, Dosha::Kapha) => "https://en.wikipedia.org/wiki/Dosha#Kapha",
    }
}

/// The localized sentence announcing an outcome. Dosha names themselves stay
/// romanized in both languages, as in the source questionnaire.
pub fn outcome_statement(language: Language, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Undetermined => text(language, TextKey::DiagnosisFailed).to_string(),
        other => format!("{}{}", text(language, TextKey::OutcomePrefix), other.label()),
    }
}

pub fn outcome_descriptions(language: Language, outcome: &Outcome) -> Vec<&'static str> {
    match outcome {
        Outcome::Dominant(doshas) => doshas
            .iter()
            .map(|dosha| dosha_description(language, *dosha))
            .collect(),
        Outcome::TriDosha => vec![tri_dosha_description(language)],
        Outcome::Undetermined => Vec::new(),
    }
}
