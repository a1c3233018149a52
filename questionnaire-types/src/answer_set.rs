use serde::Serialize;

use crate::{Answer, Questionnaire};

/// Answers collected during a session, one slot per question.
///
/// The set is created with every slot holding [`Answer::Unanswered`] and its
/// length never changes afterwards. Membership of a stored option in the
/// question's option set is enforced by the controller, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    /// Create an answer set with `len` unanswered slots.
    pub fn unanswered(len: usize) -> Self {
        Self {
            answers: vec![Answer::Unanswered; len],
        }
    }

    /// Get the answer for question `index`.
    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    /// Overwrite the answer for question `index`. Returns the previous answer.
    ///
    /// Returns `None` and leaves the set untouched if `index` is out of range.
    pub fn set(&mut self, index: usize, answer: impl Into<Answer>) -> Option<Answer> {
        let slot = self.answers.get_mut(index)?;
        Some(std::mem::replace(slot, answer.into()))
    }

    /// Get all answers as a slice, in question order.
    pub fn as_slice(&self) -> &[Answer] {
        &self.answers
    }

    /// Get an iterator over all answers, in question order.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    /// Get the number of slots (equal to the question count).
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of questions that have a selected option.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_selected()).count()
    }

    /// Check if every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Answer::is_selected)
    }

    /// Index of the first unanswered question, if any.
    pub fn first_unanswered(&self) -> Option<usize> {
        self.answers.iter().position(Answer::is_unanswered)
    }

    /// Selected options in question order, with `None` for unanswered slots.
    pub fn selections(&self) -> Vec<Option<&str>> {
        self.answers.iter().map(Answer::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

/// A single submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedAnswer {
    /// The question text.
    pub question: String,

    /// The selected option.
    pub answer: String,
}

/// A fully answered questionnaire, as handed to a submission handler.
///
/// Only constructible from an [`AnswerSet`] with no unanswered slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletedAnswers {
    entries: Vec<SubmittedAnswer>,
}

impl CompletedAnswers {
    /// Pair every answer with its question text.
    ///
    /// Returns the index of the first unanswered question if the set is incomplete.
    pub fn from_answers(
        questionnaire: &Questionnaire,
        answers: &AnswerSet,
    ) -> Result<Self, usize> {
        let entries = questionnaire
            .questions()
            .iter()
            .zip(answers.iter())
            .enumerate()
            .map(|(index, (question, answer))| match answer {
                Answer::Selected(option) => Ok(SubmittedAnswer {
                    question: question.text().to_string(),
                    answer: option.clone(),
                }),
                Answer::Unanswered => Err(index),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Get the entries in question order.
    pub fn entries(&self) -> &[SubmittedAnswer] {
        &self.entries
    }

    /// Selected options in question order.
    pub fn options(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.answer.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
