use super::views::{
    AssessmentSummary, ChartSegment, OutcomeView, ReferenceLink, ShareEntry,
};
use crate::assessment::domain::{Dosha, Language, Outcome};
use crate::assessment::locale;
use crate::assessment::scoring::{DoshaShares, DoshaTally};
use crate::assessment::session::ResponseSheet;
use chrono::NaiveDate;

/// Finalized result of one session: the sheet is read at construction and
/// never consulted again, so later summaries are pure presentation.
#[derive(Debug)]
pub struct AssessmentReport {
    question_count: usize,
    tally: DoshaTally,
    shares: DoshaShares,
    outcome: Outcome,
}

impl AssessmentReport {
    pub fn new(sheet: &ResponseSheet) -> Self {
        let tally = sheet.tally();
        let shares = tally.shares();
        let outcome = shares.classify();

        Self {
            question_count: sheet.question_count(),
            tally,
            shares,
            outcome,
        }
    }

    pub fn tally(&self) -> &DoshaTally {
        &self.tally
    }

    pub fn shares(&self) -> &DoshaShares {
        &self.shares
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Renders the report for one display language. Only text differs
    /// between languages; shares and outcome are computed once above.
    pub fn summary(&self, language: Language, today: NaiveDate) -> AssessmentSummary {
        let shares = Dosha::ordered()
            .into_iter()
            .map(|dosha| {
                let percentage = self.shares.share(dosha);
                ShareEntry {
                    dosha,
                    dosha_label: dosha.label(),
                    count: self.tally.count(dosha),
                    percentage,
                    percentage_label: format_percentage(percentage),
                }
            })
            .collect();

        AssessmentSummary {
            language,
            generated_on: today,
            question_count: self.question_count,
            total_affirmative: self.tally.total(),
            shares,
            chart: chart_segments(&self.shares),
            outcome: outcome_view(language, &self.outcome),
        }
    }
}

fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn chart_segments(shares: &DoshaShares) -> Vec<ChartSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0.0;

    for dosha in Dosha::ordered() {
        let share = shares.share(dosha);
        if share <= 0.0 {
            continue;
        }
        segments.push(ChartSegment {
            dosha,
            dosha_label: dosha.label(),
            start: cursor,
            end: cursor + share,
        });
        cursor += share;
    }

    segments
}

fn outcome_view(language: Language, outcome: &Outcome) -> OutcomeView {
    let references = outcome
        .doshas()
        .iter()
        .map(|dosha| ReferenceLink {
            dosha_label: dosha.label(),
            url: locale::dosha_reference(language, *dosha),
        })
        .collect();

    OutcomeView {
        key: outcome.key(),
        label: outcome.label(),
        statement: locale::outcome_statement(language, outcome),
        descriptions: locale::outcome_descriptions(language, outcome),
        references,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    fn sheet_with(counts: [usize; 3]) -> ResponseSheet {
        let questions = counts.iter().copied().max().unwrap_or(0);
        let mut sheet = ResponseSheet::new(questions);
        for (slot, dosha) in Dosha::ordered().into_iter().enumerate() {
            for question in 0..counts[slot] {
                sheet.mark(question, dosha, true).expect("in range");
            }
        }
        sheet
    }

    #[test]
    fn percentages_render_at_two_decimals() {
        let report = AssessmentReport::new(&sheet_with([1, 1, 1]));
        let summary = report.summary(Language::Japanese, sample_date());
        assert_eq!(summary.shares[0].percentage_label, "33.33%");
        assert_eq!(summary.total_affirmative, 3);
    }

    #[test]
    fn all_vata_round_trip_is_fully_dominant() {
        let report = AssessmentReport::new(&sheet_with([5, 0, 0]));
        assert_eq!(report.outcome(), &Outcome::Dominant(vec![Dosha::Vata]));

        let summary = report.summary(Language::English, sample_date());
        assert_eq!(summary.shares[0].percentage_label, "100.00%");
        assert_eq!(summary.shares[1].percentage_label, "0.00%");
        assert_eq!(summary.shares[2].percentage_label, "0.00%");
        assert_eq!(summary.outcome.key, "vata");
        assert_eq!(summary.outcome.references.len(), 1);
    }

    #[test]
    fn chart_segments_are_contiguous_and_skip_zero_shares() {
        let report = AssessmentReport::new(&sheet_with([3, 1, 0]));
        let summary = report.summary(Language::Japanese, sample_date());

        assert_eq!(summary.chart.len(), 2);
        assert_eq!(summary.chart[0].start, 0.0);
        assert_eq!(summary.chart[0].end, 75.0);
        assert_eq!(summary.chart[1].start, 75.0);
        assert!((summary.chart[1].end - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_sheet_reports_undetermined_without_chart() {
        let report = AssessmentReport::new(&ResponseSheet::new(4));
        let summary = report.summary(Language::Japanese, sample_date());

        assert_eq!(summary.outcome.key, "undetermined");
        assert_eq!(summary.outcome.statement, "診断に失敗しました。");
        assert!(summary.chart.is_empty());
        assert!(summary.outcome.references.is_empty());
    }

    #[test]
    fn language_switch_changes_text_only() {
        let report = AssessmentReport::new(&sheet_with([4, 2, 1]));
        let japanese = report.summary(Language::Japanese, sample_date());
        let english = report.summary(Language::English, sample_date());

        for (ja, en) in japanese.shares.iter().zip(english.shares.iter()) {
            assert_eq!(ja.percentage, en.percentage);
            assert_eq!(ja.dosha_label, en.dosha_label);
        }
        assert_eq!(japanese.outcome.key, english.outcome.key);
        assert_eq!(japanese.outcome.label, english.outcome.label);
        assert_ne!(japanese.outcome.statement, english.outcome.statement);
    }

    #[test]
    fn tri_dosha_outcome_carries_no_reference_links() {
        let report = AssessmentReport::new(&sheet_with([3, 3, 3]));
        assert_eq!(report.outcome(), &Outcome::TriDosha);

        let summary = report.summary(Language::English, sample_date());
        assert!(summary.outcome.references.is_empty());
        assert_eq!(summary.outcome.descriptions.len(), 1);
    }
}
