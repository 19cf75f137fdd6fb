//! Reference text for the three rule sections.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One block of reference material.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    pub heading: &'static str,
    pub summary: &'static str,
    pub steps: &'static [&'static str],
    pub examples: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSection {
    Scientific,
    SigFigs,
    Operations,
}

impl RuleSection {
    pub const ALL: [RuleSection; 3] = [
        RuleSection::Scientific,
        RuleSection::SigFigs,
        RuleSection::Operations,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            RuleSection::Scientific => "Scientific Notation",
            RuleSection::SigFigs => "Significant Figures Rules",
            RuleSection::Operations => "Operations with Sig Figs",
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            RuleSection::Scientific => SCIENTIFIC,
            RuleSection::SigFigs => SIG_FIGS,
            RuleSection::Operations => OPERATIONS,
        }
    }

    /// Closing remark printed under the section, if any.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            RuleSection::Operations => Some(
                "Common mistake: don't confuse the two rules! Multiplication/division uses \
                 sig figs count, while addition/subtraction uses decimal places.",
            ),
            _ => None,
        }
    }
}

impl fmt::Display for RuleSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSection::Scientific => write!(f, "scientific"),
            RuleSection::SigFigs => write!(f, "sigfigs"),
            RuleSection::Operations => write!(f, "operations"),
        }
    }
}

impl FromStr for RuleSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "scientific" | "notation" => Ok(RuleSection::Scientific),
            "sigfigs" | "significant" => Ok(RuleSection::SigFigs),
            "operations" | "ops" => Ok(RuleSection::Operations),
            _ => Err(format!(
                "unknown rules section: {s} (expected scientific, sigfigs or operations)"
            )),
        }
    }
}

const SCIENTIFIC: &[Rule] = &[
    Rule {
        heading: "Format",
        summary: "a × 10^n where 1 ≤ |a| < 10",
        steps: &[],
        examples: &[],
    },
    Rule {
        heading: "Converting TO Scientific Notation",
        summary: "",
        steps: &[
            "Move the decimal point until you have a number between 1 and 10",
            "Count how many places you moved the decimal",
            "If you moved LEFT → positive exponent (large numbers)",
            "If you moved RIGHT → negative exponent (small numbers)",
        ],
        examples: &[
            "45,000 → 4.5 × 10^4 (moved 4 places left)",
            "0.0032 → 3.2 × 10^-3 (moved 3 places right)",
        ],
    },
    Rule {
        heading: "Converting FROM Scientific Notation",
        summary: "",
        steps: &[
            "Look at the exponent",
            "Positive exponent → move decimal RIGHT",
            "Negative exponent → move decimal LEFT",
            "Fill in zeros as needed",
        ],
        examples: &["2.7 × 10^5 → 270,000", "8.1 × 10^-4 → 0.00081"],
    },
];

const SIG_FIGS: &[Rule] = &[
    Rule {
        heading: "Rule 1",
        summary: "All non-zero digits are ALWAYS significant",
        steps: &[],
        examples: &["123 → 3 sig figs", "7.89 → 3 sig figs"],
    },
    Rule {
        heading: "Rule 2",
        summary: "Zeros BETWEEN non-zero digits are ALWAYS significant",
        steps: &[],
        examples: &["101 → 3 sig figs", "5.007 → 4 sig figs"],
    },
    Rule {
        heading: "Rule 3",
        summary: "Leading zeros are NEVER significant",
        steps: &[],
        examples: &["0.0025 → 2 sig figs", "0.00100 → 3 sig figs"],
    },
    Rule {
        heading: "Rule 4",
        summary: "Trailing zeros AFTER a decimal point ARE significant",
        steps: &[],
        examples: &["2.50 → 3 sig figs", "1.000 → 4 sig figs"],
    },
    Rule {
        heading: "Rule 5",
        summary: "Trailing zeros WITHOUT a decimal point are NOT significant (ambiguous)",
        steps: &[],
        examples: &[
            "1500 → 2 sig figs",
            "1500. → 4 sig figs (decimal makes it explicit)",
        ],
    },
];

const OPERATIONS: &[Rule] = &[
    Rule {
        heading: "Multiplication & Division",
        summary: "Answer has the same number of sig figs as the measurement with the FEWEST \
                  sig figs",
        steps: &[],
        examples: &[
            "2.5 × 3.42 = 8.55 → rounds to 8.6 (2 sig figs)",
            "2.5 has 2 sig figs, 3.42 has 3 → answer gets 2",
        ],
    },
    Rule {
        heading: "Addition & Subtraction",
        summary: "Answer has the same number of DECIMAL PLACES as the measurement with the \
                  fewest decimal places",
        steps: &[],
        examples: &[
            "12.52 + 1.7 = 14.22 → rounds to 14.2",
            "12.52 has 2 decimal places, 1.7 has 1 → answer gets 1",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{count_significant_figures, round_to_decimals, round_to_sig_figs};

    #[test]
    fn section_names_round_trip() {
        for section in RuleSection::ALL {
            assert_eq!(section.to_string().parse::<RuleSection>(), Ok(section));
        }
        assert_eq!("Sig-Figs".parse(), Ok(RuleSection::SigFigs));
        assert!("history".parse::<RuleSection>().is_err());
    }

    #[test]
    fn every_section_has_rules() {
        for section in RuleSection::ALL {
            assert!(!section.rules().is_empty(), "{section}");
            assert!(!section.title().is_empty());
        }
        assert!(RuleSection::Operations.note().is_some());
        assert!(RuleSection::Scientific.note().is_none());
    }

    #[test]
    fn sig_fig_examples_agree_with_counter() {
        for rule in RuleSection::SigFigs.rules() {
            for example in rule.examples {
                let (numeral, rest) = example.split_once(" → ").unwrap();
                let stated: usize = rest.split_whitespace().next().unwrap().parse().unwrap();
                assert_eq!(count_significant_figures(numeral), stated, "{example}");
            }
        }
    }

    #[test]
    fn operation_examples_agree_with_rounding() {
        assert_eq!(round_to_sig_figs(2.5 * 3.42, 2), 8.6);
        assert_eq!(round_to_decimals(12.52 + 1.7, 1), 14.2);
    }
}
