use serde::{Deserialize, Serialize};

/// A single question/answer pair on the board.
///
/// The reveal state is private: it only moves forward through
/// [`Clue::reveal`](crate::Clue::reveal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub(crate) reveal_state: RevealState,
}

impl Clue {
    /// A fresh, hidden clue.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// Text the view should currently show, `None` while hidden.
    pub fn visible_text(&self) -> Option<&str> {
        match self.reveal_state {
            RevealState::Hidden => None,
            RevealState::QuestionShown => Some(&self.question),
            RevealState::AnswerShown => Some(&self.answer),
        }
    }
}

/// How much of a clue has been disclosed.
///
/// - `Hidden`: nothing shown yet (initial)
/// - `QuestionShown`: the question is on screen
/// - `AnswerShown`: the answer is on screen (terminal)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Hidden,
    QuestionShown,
    AnswerShown,
}

impl RevealState {
    /// The state a click moves to. `AnswerShown` maps to itself.
    pub fn next(self) -> Self {
        match self {
            Self::Hidden => Self::QuestionShown,
            Self::QuestionShown | Self::AnswerShown => Self::AnswerShown,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::AnswerShown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::QuestionShown => "question_shown",
            Self::AnswerShown => "answer_shown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hidden" => Some(Self::Hidden),
            "question_shown" => Some(Self::QuestionShown),
            "answer_shown" => Some(Self::AnswerShown),
            _ => None,
        }
    }
}
