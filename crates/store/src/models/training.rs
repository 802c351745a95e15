//! Training modules and their quizzes.

use serde::{Deserialize, Serialize};

use ecosankalp_core::{ModuleId, ModuleType, QuestionId};

/// One module in the ordered training chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    /// Human duration, e.g. `15 min`.
    pub duration: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub is_completed: bool,
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quiz: Vec<QuizQuestion>,
}

/// A multiple-choice question attached to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

/// Outcome of grading a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    /// Every question answered correctly (vacuously true without questions).
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

impl TrainingModule {
    /// Grade answers given as option indices, in question order.
    ///
    /// Missing answers count as wrong; extra answers are ignored.
    #[must_use]
    pub fn grade_quiz(&self, answers: &[usize]) -> QuizScore {
        let correct = self
            .quiz
            .iter()
            .zip(answers)
            .filter(|(q, answer)| q.correct_answer == **answer)
            .count();
        QuizScore {
            correct,
            total: self.quiz.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module_with_quiz() -> TrainingModule {
        let question = |id: &str, correct_answer| QuizQuestion {
            id: QuestionId::new(id),
            question: format!("question {id}"),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer,
        };
        TrainingModule {
            id: ModuleId::new("1"),
            title: "Segregation".into(),
            description: String::new(),
            duration: "15 min".into(),
            module_type: ModuleType::Video,
            is_completed: false,
            is_locked: false,
            content: None,
            quiz: vec![question("q1", 0), question("q2", 2)],
        }
    }

    #[test]
    fn test_grade_quiz() {
        let module = module_with_quiz();
        assert_eq!(module.grade_quiz(&[0, 2]), QuizScore { correct: 2, total: 2 });
        assert!(module.grade_quiz(&[0, 2]).is_perfect());
        assert_eq!(module.grade_quiz(&[1, 2]).correct, 1);
        assert_eq!(module.grade_quiz(&[0]).correct, 1);
        assert!(!module.grade_quiz(&[]).is_perfect());
    }
}
