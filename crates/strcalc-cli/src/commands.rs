//! Subcommand handlers

use serde::Serialize;
use strcalc_core::{CalcError, CalcResult, Calculator, Variant};

/// Inputs of the demo run, one per variant
pub(crate) const DEMO_INPUTS: [(Variant, &str); 5] = [
    (Variant::V1, "1,2"),
    (Variant::V2, "1,2,3"),
    (Variant::V3, "1\n2,3"),
    (Variant::V4, "//;\n1;2;3"),
    (Variant::V5, "//;\n1;2;-3"),
];

/// Machine-readable outcome of one `add` call
#[derive(Debug, Serialize)]
pub(crate) struct AddReport<'a> {
    variant: Variant,
    input: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
    invocations: u64,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: &'static str,
    message: String,
}

impl<'a> AddReport<'a> {
    pub(crate) fn new(
        variant: Variant,
        input: Option<&'a str>,
        outcome: &CalcResult<f64>,
        invocations: u64,
    ) -> Self {
        let (result, error) = match outcome {
            Ok(total) => (Some(*total), None),
            Err(e) => (None, Some(ErrorReport::from(e))),
        };
        Self {
            variant,
            input,
            result,
            error,
            invocations,
        }
    }
}

impl From<&CalcError> for ErrorReport {
    fn from(e: &CalcError) -> Self {
        Self {
            kind: e.kind().as_str(),
            message: e.to_string(),
        }
    }
}

/// Run one variant and print its outcome; `false` when the call failed
pub(crate) fn run_add(
    calc: &Calculator,
    variant: Variant,
    input: Option<&str>,
    json: bool,
) -> anyhow::Result<bool> {
    let outcome = calc.add(variant, input);

    if json {
        let report = AddReport::new(variant, input, &outcome, calc.invocation_count());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &outcome {
            Ok(total) => println!("{total}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    Ok(outcome.is_ok())
}

/// Text lines of the demo run
pub(crate) fn demo_lines(calc: &Calculator) -> Vec<String> {
    let mut lines: Vec<String> = DEMO_INPUTS
        .iter()
        .map(|(variant, input)| {
            let label = format!("Add{}", variant.as_str().to_uppercase());
            match calc.add(*variant, Some(*input)) {
                Ok(total) => format!("{label}: {total}"),
                Err(e) => format!("{label}: Error: {e}"),
            }
        })
        .collect();
    lines.push(format!("Invocations: {}", calc.invocation_count()));
    lines
}
