use chrono::NaiveDate;
use prakriti::assessment::domain::{Dosha, Language, Outcome};
use prakriti::assessment::questionnaire::Questionnaire;
use prakriti::assessment::{AssessmentReport, DoshaShares, DoshaTally, ResponseSheet};
use std::io::Cursor;

const SAMPLE: &str = "id,prompt,vata,pitta,kapha\n\
1,Build,Thin and light,Medium and athletic,Solid and sturdy\n\
2,Appetite,Irregular,Strong and sharp,Steady but mild\n\
3,Sleep,Light and broken,Short but sound,Deep and long\n\
4,Weather,Dislikes cold and wind,Dislikes heat,Dislikes damp cold\n\
5,Temperament,Quick and changeable,Driven and exacting,Calm and patient\n";

fn sample_questionnaire() -> Questionnaire {
    Questionnaire::from_reader(Cursor::new(SAMPLE)).expect("sample parses")
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

#[test]
fn shares_sum_to_one_hundred_whenever_anything_was_answered() {
    for counts in [[1, 0, 0], [2, 3, 4], [5, 5, 5], [0, 0, 7]] {
        let tally = DoshaTally::from_counts(counts);
        let shares = tally.shares();
        let sum: f64 = Dosha::ordered().iter().map(|d| shares.share(*d)).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum {sum} for counts {counts:?}");
    }
}

#[test]
fn untouched_sheet_degrades_to_undetermined_without_panicking() {
    let questionnaire = sample_questionnaire();
    let sheet = ResponseSheet::for_questionnaire(&questionnaire);
    let report = AssessmentReport::new(&sheet);

    let shares = report.shares();
    for dosha in Dosha::ordered() {
        assert_eq!(shares.share(dosha), 0.0);
    }
    assert_eq!(report.outcome(), &Outcome::Undetermined);

    let summary = report.summary(Language::Japanese, report_date());
    assert_eq!(summary.outcome.statement, "診断に失敗しました。");
}

#[test]
fn balance_band_beats_the_unique_maximum() {
    let shares = DoshaShares::from_values([38.0, 28.0, 34.0]);
    assert_eq!(shares.classify(), Outcome::TriDosha);
}

#[test]
fn all_vata_answers_round_trip_to_a_pure_vata_result() {
    let questionnaire = sample_questionnaire();
    let mut sheet = ResponseSheet::for_questionnaire(&questionnaire);
    for question in 0..questionnaire.len() {
        sheet.mark(question, Dosha::Vata, true).expect("in range");
    }

    let report = AssessmentReport::new(&sheet);
    assert_eq!(report.shares().share(Dosha::Vata), 100.0);
    assert_eq!(report.shares().share(Dosha::Pitta), 0.0);
    assert_eq!(report.shares().share(Dosha::Kapha), 0.0);
    assert_eq!(report.outcome(), &Outcome::Dominant(vec![Dosha::Vata]));

    let summary = report.summary(Language::English, report_date());
    assert_eq!(summary.shares[0].percentage_label, "100.00%");
    assert_eq!(summary.outcome.statement, "Your constitution is: Vata");
    assert_eq!(summary.outcome.references.len(), 1);
    assert!(summary.outcome.references[0].url.contains("Vata"));
}

#[test]
fn tied_maximum_surfaces_both_doshas() {
    let mut sheet = ResponseSheet::new(5);
    for question in 0..2 {
        sheet.mark(question, Dosha::Vata, true).expect("in range");
        sheet.mark(question, Dosha::Pitta, true).expect("in range");
    }
    sheet.mark(2, Dosha::Kapha, true).expect("in range");

    let report = AssessmentReport::new(&sheet);
    assert_eq!(
        report.outcome(),
        &Outcome::Dominant(vec![Dosha::Vata, Dosha::Pitta])
    );

    let summary = report.summary(Language::English, report_date());
    assert_eq!(summary.outcome.label, "Vata & Pitta");
    assert_eq!(summary.outcome.descriptions.len(), 2);
    assert_eq!(summary.outcome.references.len(), 2);
}

#[test]
fn display_language_never_changes_the_scores() {
    let questionnaire = sample_questionnaire();
    let mut sheet = ResponseSheet::for_questionnaire(&questionnaire);
    sheet.mark(0, Dosha::Kapha, true).expect("in range");
    sheet.mark(1, Dosha::Kapha, true).expect("in range");
    sheet.mark(2, Dosha::Pitta, true).expect("in range");

    let report = AssessmentReport::new(&sheet);
    let japanese = report.summary(Language::Japanese, report_date());
    let english = report.summary(Language::English, report_date());

    for (ja, en) in japanese.shares.iter().zip(english.shares.iter()) {
        assert_eq!(ja.percentage, en.percentage);
        assert_eq!(ja.count, en.count);
        assert_eq!(ja.dosha_label, en.dosha_label, "chart labels stay fixed");
    }
    assert_eq!(japanese.outcome.key, english.outcome.key);
    assert_ne!(japanese.outcome.statement, english.outcome.statement);
}

#[test]
fn single_choice_variant_matches_equivalent_yes_no_answers() {
    let mut chosen = ResponseSheet::new(3);
    chosen.choose(0, Dosha::Pitta).expect("in range");
    chosen.choose(1, Dosha::Pitta).expect("in range");
    chosen.choose(2, Dosha::Vata).expect("in range");

    let mut marked = ResponseSheet::new(3);
    marked.mark(0, Dosha::Pitta, true).expect("in range");
    marked.mark(1, Dosha::Pitta, true).expect("in range");
    marked.mark(2, Dosha::Vata, true).expect("in range");

    assert_eq!(
        AssessmentReport::new(&chosen).outcome(),
        AssessmentReport::new(&marked).outcome()
    );
}
