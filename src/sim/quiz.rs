//! Quiz gate between a crash and a continue
//!
//! Questions are fixed at startup and visited cyclically. A correct answer
//! moves to the next question; a wrong one sends the cycle back to the start.

use serde::{Deserialize, Serialize};

/// Answers offered per question
pub const ANSWER_COUNT: usize = 3;

/// Errors raised while loading a question bank
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Question bank parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Question bank is empty")]
    Empty,
    #[error("Question {question}: correct index {index} is out of range")]
    CorrectIndexOutOfRange { question: usize, index: usize },
    #[error("Question {question}: prompt is blank")]
    BlankPrompt { question: usize },
}

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answers: [String; ANSWER_COUNT],
    pub correct_index: usize,
}

impl Question {
    pub fn new(prompt: &str, answers: [&str; ANSWER_COUNT], correct_index: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            answers: answers.map(str::to_string),
            correct_index,
        }
    }
}

/// Result of answering the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Correct: bank the score and keep playing
    Continue,
    /// Wrong: lose the banked score and start the cycle over
    Reset,
}

/// The built-in question bank
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new("What is 2 + 2?", ["3", "4", "5"], 1),
        Question::new("What color is the sky?", ["Blue", "Red", "Green"], 0),
        Question::new("How many legs does a spider have?", ["6", "8", "10"], 1),
        Question::new("What is the capital of France?", ["London", "Paris", "Rome"], 1),
        Question::new("How many days in a week?", ["5", "6", "7"], 2),
    ]
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    current_index: usize,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            current_index: 0,
        }
    }
}

impl QuizEngine {
    /// Build an engine from a validated, non-empty bank
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        for (i, q) in questions.iter().enumerate() {
            if q.prompt.trim().is_empty() {
                return Err(QuizError::BlankPrompt { question: i });
            }
            if q.correct_index >= ANSWER_COUNT {
                return Err(QuizError::CorrectIndexOutOfRange {
                    question: i,
                    index: q.correct_index,
                });
            }
        }
        Ok(Self {
            questions,
            current_index: 0,
        })
    }

    /// Load a bank from a JSON array of questions
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.current_index % self.questions.len()]
    }

    /// Ever-increasing index; wraps onto the bank by modulo
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Judge an answer to the current question without changing state
    pub fn answer(&self, index: usize) -> QuizOutcome {
        if index == self.current().correct_index {
            QuizOutcome::Continue
        } else {
            QuizOutcome::Reset
        }
    }

    /// Move on after a correct answer
    pub fn advance(&mut self) {
        self.current_index += 1;
    }

    /// Back to the first question after a wrong answer
    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}
