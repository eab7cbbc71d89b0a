use super::domain::{AssessmentError, Dosha};
use super::questionnaire::Questionnaire;
use super::scoring::DoshaTally;

/// One user's answers for a whole questionnaire.
///
/// Every question starts as three "no" judgments, so a sheet is always
/// complete and a tally is always computable, however little was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSheet {
    answers: Vec<[bool; Dosha::COUNT]>,
}

impl ResponseSheet {
    pub fn new(question_count: usize) -> Self {
        Self {
            answers: vec![[false; Dosha::COUNT]; question_count],
        }
    }

    pub fn for_questionnaire(questionnaire: &Questionnaire) -> Self {
        Self::new(questionnaire.len())
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    /// Yes/no variant: one independent judgment per dosha per question.
    pub fn mark(
        &mut self,
        question: usize,
        dosha: Dosha,
        affirmative: bool,
    ) -> Result<(), AssessmentError> {
        let row = self.row_mut(question)?;
        row[dosha.index()] = affirmative;
        Ok(())
    }

    /// Single-choice variant: selecting one dosha clears the other two.
    pub fn choose(&mut self, question: usize, dosha: Dosha) -> Result<(), AssessmentError> {
        let row = self.row_mut(question)?;
        *row = [false; Dosha::COUNT];
        row[dosha.index()] = true;
        Ok(())
    }

    pub fn is_affirmative(&self, question: usize, dosha: Dosha) -> bool {
        self.answers
            .get(question)
            .map(|row| row[dosha.index()])
            .unwrap_or(false)
    }

    pub fn tally(&self) -> DoshaTally {
        let mut tally = DoshaTally::default();
        for row in &self.answers {
            for dosha in Dosha::ordered() {
                if row[dosha.index()] {
                    tally.record(dosha);
                }
            }
        }
        tally
    }

    fn row_mut(&mut self, question: usize) -> Result<&mut [bool; Dosha::COUNT], AssessmentError> {
        let count = self.answers.len();
        self.answers
            .get_mut(question)
            .ok_or(AssessmentError::QuestionOutOfRange {
                index: question,
                count,
            })
    }
}
