use crate::infra::parse_language;
use chrono::Local;
use clap::Args;
use prakriti::assessment::answers::AnswerSheetImporter;
use prakriti::assessment::domain::{Dosha, Language};
use prakriti::assessment::locale::{self, TextKey};
use prakriti::assessment::questionnaire::{Questionnaire, QuestionnaireSet};
use prakriti::assessment::report::views::AssessmentSummary;
use prakriti::assessment::{AssessmentReport, ResponseSheet};
use prakriti::config::AppConfig;
use prakriti::error::AppError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const BAR_WIDTH: usize = 40;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Display language (ja or en, defaults to ja)
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    /// Pick exactly one option per question instead of yes/no per dosha
    #[arg(long)]
    pub(crate) single: bool,
    /// Score a pre-filled answer sheet (CSV with yes/no columns per dosha)
    /// instead of asking interactively
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let language = args.lang.unwrap_or_default();

    let questionnaires = match QuestionnaireSet::load(&config.questionnaire) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("{}", locale::text(language, TextKey::QuestionnaireLoadFailed));
            return Err(err.into());
        }
    };
    let questionnaire = questionnaires.for_language(language);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let sheet = match args.answers {
        Some(ref path) => AnswerSheetImporter::from_path(path, questionnaire.len())?,
        None => collect_responses(
            questionnaire,
            language,
            args.single,
            &mut input,
            &mut output,
        )?,
    };

    // The result is only computed on an explicit request, as in the form UI.
    if args.answers.is_none() {
        prompt(
            &mut output,
            &format!("\n{}", locale::text(language, TextKey::ShowResultPrompt)),
        )?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }

    let report = AssessmentReport::new(&sheet);
    let summary = report.summary(language, Local::now().date_naive());
    render_summary(&mut output, &summary)?;

    Ok(())
}

fn collect_responses<R: BufRead, W: Write>(
    questionnaire: &Questionnaire,
    language: Language,
    single_choice: bool,
    input: &mut R,
    output: &mut W,
) -> Result<ResponseSheet, AppError> {
    let mut sheet = ResponseSheet::for_questionnaire(questionnaire);

    writeln!(output, "{}", locale::text(language, TextKey::Title))?;
    writeln!(output, "{}\n", locale::text(language, TextKey::Intro))?;

    for (index, question) in questionnaire.questions().iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, question.prompt())?;

        if single_choice {
            for (position, dosha) in Dosha::ordered().into_iter().enumerate() {
                writeln!(output, "  {}) {}", position + 1, question.option(dosha))?;
            }
            let dosha = read_choice(language, input, output)?;
            sheet.choose(index, dosha)?;
        } else {
            for dosha in Dosha::ordered() {
                let answer = read_yes_no(
                    &format!(
                        "  {} {} ",
                        question.option(dosha),
                        locale::text(language, TextKey::AnswerHint)
                    ),
                    input,
                    output,
                )?;
                sheet.mark(index, dosha, answer)?;
            }
        }
    }

    Ok(sheet)
}

/// Single-choice variant: re-asks until one of the three options is picked.
fn read_choice<R: BufRead, W: Write>(
    language: Language,
    input: &mut R,
    output: &mut W,
) -> Result<Dosha, AppError> {
    loop {
        prompt(
            output,
            &format!("  {}: ", locale::text(language, TextKey::SingleChoiceHint)),
        )?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Input exhausted; fall back to the first option rather than spin.
            return Ok(Dosha::Vata);
        }

        let choice = match line.trim() {
            "1" => Some(Dosha::Vata),
            "2" => Some(Dosha::Pitta),
            "3" => Some(Dosha::Kapha),
            other => Dosha::from_code(other),
        };
        if let Some(dosha) = choice {
            return Ok(dosha);
        }
    }
}

/// Yes/no variant: anything but an affirmative counts as "no".
fn read_yes_no<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    prompt(output, question)?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(is_affirmative(&line))
}

fn is_affirmative(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "1" | "はい"
    )
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), AppError> {
    write!(output, "{text}")?;
    output.flush()?;
    Ok(())
}

fn render_summary<W: Write>(output: &mut W, summary: &AssessmentSummary) -> Result<(), AppError> {
    let language = summary.language;

    writeln!(
        output,
        "\n{} ({})",
        locale::text(language, TextKey::ResultHeading),
        summary.generated_on
    )?;
    for entry in &summary.shares {
        writeln!(output, "- {}: {}", entry.dosha_label, entry.percentage_label)?;
    }

    if !summary.chart.is_empty() {
        writeln!(output, "\n{}", locale::text(language, TextKey::ChartHeading))?;
        for segment in &summary.chart {
            writeln!(output, "{:<5} {}", segment.dosha_label, bar(segment.end - segment.start))?;
        }
    }

    writeln!(output, "\n{}", summary.outcome.statement)?;
    for description in &summary.outcome.descriptions {
        writeln!(output, "{description}")?;
    }

    if !summary.outcome.references.is_empty() {
        writeln!(
            output,
            "\n{}",
            locale::text(language, TextKey::ReferencesHeading)
        )?;
        for reference in &summary.outcome.references {
            writeln!(output, "- {}: {}", reference.dosha_label, reference.url)?;
        }
    }

    Ok(())
}

/// Proportional bar for one share, out of `BAR_WIDTH` columns total.
fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}
