//! Practice problem synthesis.
//!
//! One rule per [`Category`]. All draws are uniform over closed intervals;
//! decimal draws are rounded to the stated number of places.

use rand::Rng;

use crate::format::{
    count_significant_figures, format_standard, round_to_decimals, round_to_sig_figs,
    to_scientific_notation, ScientificValue,
};
use crate::model::{Answer, Category, Comparison, Problem};

/// Decimal places kept on arithmetic results in scientific notation.
const RESULT_DECIMALS: i32 = 2;

/// Two values closer than this compare as equal.
const EQUALITY_EPSILON: f64 = 1e-7;

/// Slack, in powers of ten, granted on order-of-magnitude estimates.
pub const MAGNITUDE_TOLERANCE: i32 = 1;

/// A real-world quantity with a canonical order of magnitude.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub description: &'static str,
    pub unit: &'static str,
    pub exponent: i32,
}

pub const SCENARIOS: [Scenario; 12] = [
    Scenario { description: "diameter of a human hair", unit: "meters", exponent: -5 },
    Scenario { description: "height of Mount Everest", unit: "meters", exponent: 4 },
    Scenario { description: "distance from Earth to Moon", unit: "meters", exponent: 8 },
    Scenario { description: "width of a bacterium", unit: "meters", exponent: -6 },
    Scenario { description: "mass of a car", unit: "kilograms", exponent: 3 },
    Scenario { description: "mass of a paperclip", unit: "kilograms", exponent: -3 },
    Scenario { description: "population of Earth", unit: "people", exponent: 10 },
    Scenario { description: "seconds in a year", unit: "seconds", exponent: 7 },
    Scenario { description: "speed of light", unit: "m/s", exponent: 8 },
    Scenario { description: "diameter of Earth", unit: "meters", exponent: 7 },
    Scenario { description: "thickness of a credit card", unit: "meters", exponent: -3 },
    Scenario { description: "mass of an electron", unit: "kilograms", exponent: -30 },
];

/// Generate a problem using the thread-local random source.
pub fn generate(category: Category) -> Problem {
    generate_with(category, &mut rand::rng())
}

/// Generate a problem for `category`, drawing from `rng`.
///
/// `Mixed` picks one of the eleven concrete categories uniformly; the
/// returned problem always records the concrete category.
pub fn generate_with<R: Rng>(category: Category, rng: &mut R) -> Problem {
    let concrete = match category {
        Category::Mixed => {
            Category::CONCRETE[rng.random_range(0..Category::CONCRETE.len())]
        }
        other => other,
    };

    let problem = match concrete {
        Category::ToScientific => to_scientific(rng),
        Category::FromScientific => from_scientific(rng),
        Category::CountSigFigs => count_sig_figs(rng),
        Category::MultiplyScientific => multiply_scientific(rng),
        Category::DivideScientific => divide_scientific(rng),
        Category::RoundSigFigs => round_sig_figs(rng),
        Category::MultiplySigFigs => multiply_sig_figs(rng),
        Category::AddSigFigs => add_sig_figs(rng),
        Category::CompareScientific => compare_scientific(rng),
        Category::OrderMagnitude => order_magnitude(rng),
        Category::SciNotationAdd => sci_notation_add(rng),
        Category::Mixed => unreachable!("mixed is resolved to a concrete category above"),
    };

    tracing::debug!(
        requested = %category,
        category = %problem.category,
        answer_type = %problem.answer_type(),
        "generated problem"
    );
    problem
}

/// Compare `c1 × 10^e1` with `c2 × 10^e2`.
pub fn compare_values(c1: f64, e1: i32, c2: f64, e2: i32) -> Comparison {
    let left = c1 * 10f64.powi(e1);
    let right = c2 * 10f64.powi(e2);
    if (left - right).abs() < EQUALITY_EPSILON {
        Comparison::Equal
    } else if left > right {
        Comparison::Greater
    } else {
        Comparison::Less
    }
}

/// Uniform integer in `[min, max]`.
fn int<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Uniform over the values in `[min, max]` with `decimals` places; every
/// representable step, endpoints included, is equally likely.
fn decimal<R: Rng>(rng: &mut R, min: f64, max: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let low = (min * scale).round() as i64;
    let high = (max * scale).round() as i64;
    rng.random_range(low..=high) as f64 / scale
}

fn digit<R: Rng>(rng: &mut R, min: i32) -> i32 {
    int(rng, min, 9)
}

fn to_scientific<R: Rng>(rng: &mut R) -> Problem {
    let magnitude = int(rng, -5, 8);
    let base = decimal(rng, 1.0, 9.99, 2);
    let number = base * 10f64.powi(magnitude);

    Problem::new(
        Category::ToScientific,
        format!(
            "Convert to scientific notation: {}",
            format_standard(number)
        ),
        Answer::Scientific {
            value: to_scientific_notation(number),
        },
    )
}

fn from_scientific<R: Rng>(rng: &mut R) -> Problem {
    let coefficient = decimal(rng, 1.0, 9.99, 2);
    let exponent = int(rng, -5, 6);

    Problem::new(
        Category::FromScientific,
        format!("Convert to standard notation: {coefficient} × 10^{exponent}"),
        Answer::Standard {
            value: coefficient * 10f64.powi(exponent),
        },
    )
}

/// The ten numeral shapes used for counting questions.
fn sig_fig_numeral<R: Rng>(rng: &mut R, pattern: usize) -> String {
    match pattern {
        0 => format!("0.00{}{}0", digit(rng, 1), digit(rng, 0)),
        1 => format!("{}{}.{}0", digit(rng, 1), digit(rng, 0), digit(rng, 0)),
        2 => format!("{}000", digit(rng, 1)),
        3 => format!(
            "{}.{}{}{}",
            digit(rng, 1),
            digit(rng, 0),
            digit(rng, 0),
            digit(rng, 0)
        ),
        4 => format!("0.{}{}", digit(rng, 1), digit(rng, 0)),
        5 => format!("{}.00", int(rng, 10, 99)),
        6 => format!("0.000{}{}", digit(rng, 1), digit(rng, 0)),
        7 => format!("{}0{}0", digit(rng, 1), digit(rng, 1)),
        8 => format!("{}.0{}0", digit(rng, 1), digit(rng, 1)),
        _ => format!("{}00", int(rng, 100, 999)),
    }
}

const SIG_FIG_PATTERNS: usize = 10;

fn count_sig_figs<R: Rng>(rng: &mut R) -> Problem {
    let pattern = rng.random_range(0..SIG_FIG_PATTERNS);
    let numeral = sig_fig_numeral(rng, pattern);
    let count = count_significant_figures(&numeral) as u32;

    Problem::new(
        Category::CountSigFigs,
        format!("How many significant figures are in: {numeral}"),
        Answer::SigFigs { count },
    )
}

fn multiply_scientific<R: Rng>(rng: &mut R) -> Problem {
    let c1 = decimal(rng, 1.0, 9.0, 1);
    let e1 = int(rng, -3, 4);
    let c2 = decimal(rng, 1.0, 9.0, 1);
    let e2 = int(rng, -3, 4);

    // A product of two coefficients in [1, 10) lands in [1, 100): at most one
    // shift is needed.
    let value = ScientificValue::new(c1 * c2, e1 + e2).normalized(RESULT_DECIMALS);

    Problem::new(
        Category::MultiplyScientific,
        format!("Multiply: ({c1} × 10^{e1}) × ({c2} × 10^{e2})"),
        Answer::Scientific { value },
    )
    .with_hint("Multiply coefficients, add exponents, then adjust if needed")
}

fn divide_scientific<R: Rng>(rng: &mut R) -> Problem {
    let c1 = decimal(rng, 2.0, 9.0, 1);
    let e1 = int(rng, -2, 5);
    let c2 = decimal(rng, 1.0, 5.0, 1);
    let e2 = int(rng, -2, 3);

    let value = ScientificValue::new(c1 / c2, e1 - e2).normalized(RESULT_DECIMALS);

    Problem::new(
        Category::DivideScientific,
        format!("Divide: ({c1} × 10^{e1}) ÷ ({c2} × 10^{e2})"),
        Answer::Scientific { value },
    )
    .with_hint("Divide coefficients, subtract exponents, then adjust if needed")
}

fn round_sig_figs<R: Rng>(rng: &mut R) -> Problem {
    let target = int(rng, 2, 4) as u32;
    let precision = int(rng, 1, 4);
    let number = decimal(rng, 10.0, 99_999.0, precision);

    Problem::new(
        Category::RoundSigFigs,
        format!("Round {number} to {target} significant figures"),
        Answer::Rounded {
            value: round_to_sig_figs(number, target),
            target_sig_figs: target,
        },
    )
}

/// A one-digit integer part plus `sig_figs - 1` random decimal digits,
/// written with exactly `sig_figs` significant figures.
fn measured_factor<R: Rng>(rng: &mut R, sig_figs: u32) -> (f64, String) {
    let decimals = sig_figs as usize - 1;
    let scale = 10i32.pow(decimals as u32);
    let raw = int(rng, 1, 9) as f64 + int(rng, 0, scale - 1) as f64 / scale as f64;
    let value = round_to_decimals(raw, decimals as i32);
    (value, format!("{value:.decimals$}"))
}

fn multiply_sig_figs<R: Rng>(rng: &mut R) -> Problem {
    let sf1 = int(rng, 2, 4) as u32;
    let sf2 = int(rng, 2, 4) as u32;
    let (n1, n1_text) = measured_factor(rng, sf1);
    let (n2, n2_text) = measured_factor(rng, sf2);
    let min_sig_figs = sf1.min(sf2);

    Problem::new(
        Category::MultiplySigFigs,
        format!("Multiply with correct sig figs: {n1_text} × {n2_text}"),
        Answer::Number {
            value: round_to_sig_figs(n1 * n2, min_sig_figs),
        },
    )
    .with_hint(format!(
        "{n1_text} has {sf1} sig figs, {n2_text} has {sf2} sig figs → answer needs {min_sig_figs}"
    ))
}

fn add_sig_figs<R: Rng>(rng: &mut R) -> Problem {
    let d1 = int(rng, 1, 3);
    let d2 = int(rng, 1, 3);
    let n1 = decimal(rng, 10.0, 99.0, d1);
    let n2 = decimal(rng, 1.0, 20.0, d2);
    let min_decimals = d1.min(d2);

    let n1_text = format!("{:.*}", d1 as usize, n1);
    let n2_text = format!("{:.*}", d2 as usize, n2);

    Problem::new(
        Category::AddSigFigs,
        format!("Add with correct sig figs: {n1_text} + {n2_text}"),
        Answer::Number {
            value: round_to_decimals(n1 + n2, min_decimals),
        },
    )
    .with_hint(format!(
        "{n1_text} has {d1} decimal places, {n2_text} has {d2} → answer needs {min_decimals}"
    ))
}

fn compare_scientific<R: Rng>(rng: &mut R) -> Problem {
    let c1 = decimal(rng, 1.0, 9.0, 1);
    let e1 = int(rng, -3, 5);
    let c2 = decimal(rng, 1.0, 9.0, 1);
    let e2 = e1 + int(rng, -2, 2);

    Problem::new(
        Category::CompareScientific,
        format!("Compare: {c1} × 10^{e1}  ___  {c2} × 10^{e2}"),
        Answer::Compare {
            relation: compare_values(c1, e1, c2, e2),
        },
    )
}

fn order_magnitude<R: Rng>(rng: &mut R) -> Problem {
    let scenario = SCENARIOS[rng.random_range(0..SCENARIOS.len())];

    Problem::new(
        Category::OrderMagnitude,
        format!(
            "Estimate the order of magnitude (power of 10) for the {} in {}",
            scenario.description, scenario.unit
        ),
        Answer::Magnitude {
            exponent: scenario.exponent,
            tolerance: MAGNITUDE_TOLERANCE,
        },
    )
}

fn sci_notation_add<R: Rng>(rng: &mut R) -> Problem {
    let exponent = int(rng, 2, 6);
    let c1 = decimal(rng, 1.0, 5.0, 1);
    let c2 = decimal(rng, 1.0, 4.0, 1);

    let value = ScientificValue::new(c1 + c2, exponent).normalized(RESULT_DECIMALS);

    Problem::new(
        Category::SciNotationAdd,
        format!("Add: ({c1} × 10^{exponent}) + ({c2} × 10^{exponent})"),
        Answer::Scientific { value },
    )
    .with_hint("When exponents are the same, add the coefficients")
}
