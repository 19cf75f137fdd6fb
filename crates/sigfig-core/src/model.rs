//! Core data model types for sigfig.
//!
//! A [`Problem`] is produced once per practice round by the generator and
//! carries everything the checker needs: the question text, the expected
//! [`Answer`] (whose variant fixes how input is parsed), and an optional hint.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::ScientificValue;

/// Which synthesis rule the generator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    ToScientific,
    FromScientific,
    CountSigFigs,
    MultiplyScientific,
    DivideScientific,
    RoundSigFigs,
    MultiplySigFigs,
    AddSigFigs,
    CompareScientific,
    OrderMagnitude,
    SciNotationAdd,
    Mixed,
}

impl Category {
    /// Every category, `Mixed` last.
    pub const ALL: [Category; 12] = [
        Category::ToScientific,
        Category::FromScientific,
        Category::CountSigFigs,
        Category::MultiplyScientific,
        Category::DivideScientific,
        Category::RoundSigFigs,
        Category::MultiplySigFigs,
        Category::AddSigFigs,
        Category::CompareScientific,
        Category::OrderMagnitude,
        Category::SciNotationAdd,
        Category::Mixed,
    ];

    /// The categories with their own synthesis rule (everything but `Mixed`).
    pub const CONCRETE: [Category; 11] = [
        Category::ToScientific,
        Category::FromScientific,
        Category::CountSigFigs,
        Category::MultiplyScientific,
        Category::DivideScientific,
        Category::RoundSigFigs,
        Category::MultiplySigFigs,
        Category::AddSigFigs,
        Category::CompareScientific,
        Category::OrderMagnitude,
        Category::SciNotationAdd,
    ];

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ToScientific => "To scientific",
            Category::FromScientific => "From scientific",
            Category::CountSigFigs => "Count sig figs",
            Category::MultiplyScientific => "Multiply",
            Category::DivideScientific => "Divide",
            Category::RoundSigFigs => "Round to sig figs",
            Category::MultiplySigFigs => "Multiply w/ sig figs",
            Category::AddSigFigs => "Add w/ sig figs",
            Category::CompareScientific => "Compare",
            Category::OrderMagnitude => "Order of magnitude",
            Category::SciNotationAdd => "Add",
            Category::Mixed => "Mixed practice",
        }
    }

    /// The answer type problems of this category use, if fixed.
    pub fn answer_type(&self) -> Option<AnswerType> {
        match self {
            Category::ToScientific
            | Category::MultiplyScientific
            | Category::DivideScientific
            | Category::SciNotationAdd => Some(AnswerType::Scientific),
            Category::FromScientific => Some(AnswerType::Standard),
            Category::CountSigFigs => Some(AnswerType::SigFigs),
            Category::RoundSigFigs => Some(AnswerType::Rounded),
            Category::MultiplySigFigs | Category::AddSigFigs => Some(AnswerType::Number),
            Category::CompareScientific => Some(AnswerType::Compare),
            Category::OrderMagnitude => Some(AnswerType::Magnitude),
            Category::Mixed => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Category::ToScientific => "toScientific",
            Category::FromScientific => "fromScientific",
            Category::CountSigFigs => "countSigFigs",
            Category::MultiplyScientific => "multiplyScientific",
            Category::DivideScientific => "divideScientific",
            Category::RoundSigFigs => "roundSigFigs",
            Category::MultiplySigFigs => "multiplySigFigs",
            Category::AddSigFigs => "addSigFigs",
            Category::CompareScientific => "compareScientific",
            Category::OrderMagnitude => "orderMagnitude",
            Category::SciNotationAdd => "sciNotationAdd",
            Category::Mixed => "mixed",
        };
        f.write_str(tag)
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the camelCase tag, case-insensitively, with `-`/`_` ignored
    /// (`to-scientific`, `TO_SCIENTIFIC` and `toScientific` are equivalent).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Category::ALL
            .into_iter()
            .find(|c| c.to_string().to_lowercase() == key)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// How the checker parses and compares a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    /// `<coefficient> x 10^<exponent>`.
    Scientific,
    /// A number in standard form, 0.1% relative tolerance.
    Standard,
    /// A whole count of significant figures, exact.
    SigFigs,
    /// A rounded number, 1% relative or 0.01 absolute tolerance.
    Rounded,
    /// An arithmetic result, same tolerance as `Rounded`.
    Number,
    /// One of `>`, `<`, `=`.
    Compare,
    /// A power of ten within the problem's tolerance.
    Magnitude,
}

impl AnswerType {
    /// Example input shown before the user types.
    pub fn placeholder(&self) -> &'static str {
        match self {
            AnswerType::Scientific => "e.g., 3.2 x 10^4",
            AnswerType::Standard => "e.g., 32000",
            AnswerType::SigFigs => "Enter a number",
            AnswerType::Rounded | AnswerType::Number => "Enter your answer",
            AnswerType::Compare => "Enter >, <, or =",
            AnswerType::Magnitude => "Enter exponent (e.g., 5 for 10^5)",
        }
    }

    /// Longer format guidance for the input.
    pub fn input_help(&self) -> &'static str {
        match self {
            AnswerType::Scientific => {
                "Format: coefficient x 10^exponent (e.g., 3.2 x 10^4 or 3.2 x 10^-3)"
            }
            AnswerType::Standard => "Enter the number in standard form",
            AnswerType::SigFigs => "Enter the count of significant figures",
            AnswerType::Rounded => "Round to the requested number of significant figures",
            AnswerType::Number => "Enter your calculated answer with correct sig figs",
            AnswerType::Compare => "Enter > (greater than), < (less than), or = (equal)",
            AnswerType::Magnitude => {
                "Enter just the exponent (e.g., 5 means 10^5, -3 means 10^-3)"
            }
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AnswerType::Scientific => "scientific",
            AnswerType::Standard => "standard",
            AnswerType::SigFigs => "sigfigs",
            AnswerType::Rounded => "rounded",
            AnswerType::Number => "number",
            AnswerType::Compare => "compare",
            AnswerType::Magnitude => "magnitude",
        };
        f.write_str(tag)
    }
}

/// The relation between two values in a comparison problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "=")]
    Equal,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::Equal => "=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Comparison {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            ">" | "greater" => Ok(Comparison::Greater),
            "<" | "less" => Ok(Comparison::Less),
            "=" | "equal" => Ok(Comparison::Equal),
            other => Err(format!("unknown comparison: {other}")),
        }
    }
}

/// The expected answer, tagged by answer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Answer {
    Scientific {
        value: ScientificValue,
    },
    Standard {
        value: f64,
    },
    SigFigs {
        count: u32,
    },
    Rounded {
        value: f64,
        target_sig_figs: u32,
    },
    Number {
        value: f64,
    },
    Compare {
        relation: Comparison,
    },
    Magnitude {
        exponent: i32,
        tolerance: i32,
    },
}

impl Answer {
    pub fn answer_type(&self) -> AnswerType {
        match self {
            Answer::Scientific { .. } => AnswerType::Scientific,
            Answer::Standard { .. } => AnswerType::Standard,
            Answer::SigFigs { .. } => AnswerType::SigFigs,
            Answer::Rounded { .. } => AnswerType::Rounded,
            Answer::Number { .. } => AnswerType::Number,
            Answer::Compare { .. } => AnswerType::Compare,
            Answer::Magnitude { .. } => AnswerType::Magnitude,
        }
    }

    /// Slack allowed on the answer, for order-of-magnitude problems only.
    pub fn tolerance(&self) -> Option<i32> {
        match self {
            Answer::Magnitude { tolerance, .. } => Some(*tolerance),
            _ => None,
        }
    }
}

/// One practice round's question and expected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// The concrete category this problem was synthesised for.
    pub category: Category,
    /// Text shown to the user.
    pub question: String,
    /// What the checker compares input against.
    pub answer: Answer,
    /// Shown after an incorrect submission.
    #[serde(default)]
    pub hint: Option<String>,
}

impl Problem {
    pub fn new(category: Category, question: impl Into<String>, answer: Answer) -> Self {
        Self {
            category,
            question: question.into(),
            answer,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn answer_type(&self) -> AnswerType {
        self.answer.answer_type()
    }

    pub fn tolerance(&self) -> Option<i32> {
        self.answer.tolerance()
    }

    /// Format guidance for this problem's input, naming the rounding target
    /// when there is one.
    pub fn input_help(&self) -> String {
        match self.answer {
            Answer::Rounded {
                target_sig_figs, ..
            } => format!("Round to exactly {target_sig_figs} significant figures"),
            _ => self.answer_type().input_help().to_string(),
        }
    }

    /// Load a problem previously written with [`save_json`](Self::save_json).
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read problem: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse problem: {}", path.display()))
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write problem: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse() {
        assert_eq!(Category::ToScientific.to_string(), "toScientific");
        assert_eq!(Category::SciNotationAdd.to_string(), "sciNotationAdd");
        assert_eq!(
            "toScientific".parse::<Category>().unwrap(),
            Category::ToScientific
        );
        assert_eq!(
            "count-sig-figs".parse::<Category>().unwrap(),
            Category::CountSigFigs
        );
        assert_eq!(
            "ORDER_MAGNITUDE".parse::<Category>().unwrap(),
            Category::OrderMagnitude
        );
        assert_eq!("mixed".parse::<Category>().unwrap(), Category::Mixed);
        assert!("logarithms".parse::<Category>().is_err());
    }

    #[test]
    fn concrete_excludes_mixed() {
        assert_eq!(Category::CONCRETE.len(), 11);
        assert!(!Category::CONCRETE.contains(&Category::Mixed));
        for c in Category::CONCRETE {
            assert!(c.answer_type().is_some(), "{c} has no answer type");
        }
        assert!(Category::Mixed.answer_type().is_none());
    }

    #[test]
    fn comparison_parse_accepts_words() {
        assert_eq!("greater".parse::<Comparison>().unwrap(), Comparison::Greater);
        assert_eq!(" LESS ".parse::<Comparison>().unwrap(), Comparison::Less);
        assert_eq!("=".parse::<Comparison>().unwrap(), Comparison::Equal);
        assert!("bigger".parse::<Comparison>().is_err());
    }

    #[test]
    fn answer_tolerance_only_for_magnitude() {
        let magnitude = Answer::Magnitude {
            exponent: -5,
            tolerance: 1,
        };
        assert_eq!(magnitude.tolerance(), Some(1));
        assert_eq!(magnitude.answer_type(), AnswerType::Magnitude);
        assert_eq!(Answer::Number { value: 2.0 }.tolerance(), None);
    }

    #[test]
    fn input_help_names_rounding_target() {
        let rounded = Problem::new(
            Category::RoundSigFigs,
            "Round 4567.89 to 3 significant figures",
            Answer::Rounded {
                value: 4570.0,
                target_sig_figs: 3,
            },
        );
        assert_eq!(
            rounded.input_help(),
            "Round to exactly 3 significant figures"
        );

        let compare = Problem::new(
            Category::CompareScientific,
            "Compare: 2 × 10^3  ___  3 × 10^3",
            Answer::Compare {
                relation: Comparison::Less,
            },
        );
        assert_eq!(compare.input_help(), AnswerType::Compare.input_help());
    }

    #[test]
    fn problem_serde_roundtrip() {
        let problem = Problem::new(
            Category::MultiplyScientific,
            "Multiply: (2 × 10^3) × (4 × 10^2)",
            Answer::Scientific {
                value: ScientificValue::new(8.0, 5),
            },
        )
        .with_hint("Multiply coefficients, add exponents, then adjust if needed");

        let json = serde_json::to_string(&problem).unwrap();
        assert!(json.contains("\"multiplyScientific\""));
        assert!(json.contains("\"type\":\"scientific\""));
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, problem);
    }

    #[test]
    fn comparison_serializes_as_symbol() {
        let answer = Answer::Compare {
            relation: Comparison::Less,
        };
        let json = serde_json::to_string(&answer).unwrap();
        assert_eq!(json, r#"{"type":"compare","relation":"<"}"#);
    }

    #[test]
    fn problem_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problem.json");
        let problem = Problem::new(
            Category::CountSigFigs,
            "How many significant figures are in: 40.0",
            Answer::SigFigs { count: 3 },
        );
        problem.save_json(&path).unwrap();
        assert_eq!(Problem::load_json(&path).unwrap(), problem);
        assert!(Problem::load_json(&dir.path().join("missing.json")).is_err());
    }
}
