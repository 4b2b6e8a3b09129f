use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Question layout used by the front end to pick a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum QuestionType {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::C1,
        QuestionType::C2,
        QuestionType::C3,
        QuestionType::C4,
        QuestionType::C5,
        QuestionType::C6,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::C1 => "C1",
            QuestionType::C2 => "C2",
            QuestionType::C3 => "C3",
            QuestionType::C4 => "C4",
            QuestionType::C5 => "C5",
            QuestionType::C6 => "C6",
        }
    }
}

/// Answer slot. `esay` marks the free-text answer of an essay question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnswerCode {
    A,
    B,
    C,
    D,
    Esay,
}

impl AnswerCode {
    pub const ALL: [AnswerCode; 5] = [
        AnswerCode::A,
        AnswerCode::B,
        AnswerCode::C,
        AnswerCode::D,
        AnswerCode::Esay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerCode::A => "a",
            AnswerCode::B => "b",
            AnswerCode::C => "c",
            AnswerCode::D => "d",
            AnswerCode::Esay => "esay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for QuestionType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl FromStr for AnswerCode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnswerCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AnswerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
