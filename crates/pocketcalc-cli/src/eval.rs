//! Scripted evaluation: run a key script and report what the display shows

use pocketcalc::config::CalculatorConfig;
use pocketcalc::core::Outcome;
use pocketcalc::display::RecordingSink;
use pocketcalc::driver::Driver;
use pocketcalc::input::KeyScript;
use serde::Serialize;
use tracing::info;

/// One dispatched key and the screen after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key label
    pub key: String,
    /// `refreshed`, `ignored` or `faulted`
    pub outcome: &'static str,
    /// Expression line after the key
    pub expression: String,
    /// Display after the key
    pub display: String,
}

/// Result of running a key script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Final expression line
    pub expression: String,
    /// Final display text (truncated to the display width)
    pub display: String,
    /// Final buffer text (untruncated)
    pub buffer: String,
    /// Number of keys dispatched
    pub events: u64,
    /// Number of divisions by zero
    pub faults: u64,
    /// Keys that did not map to anything
    pub skipped: Vec<String>,
    /// Per-key trace, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl EvalReport {
    /// Renders the report as plain text
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(steps) = &self.steps {
            let width = steps.iter().map(|s| s.key.len()).max().unwrap_or(1);
            for step in steps {
                out.push_str(&format!(
                    "{:<width$}  {:<9}  {} | {}\n",
                    step.key, step.outcome, step.expression, step.display
                ));
            }
            out.push('\n');
        }
        out.push_str(&self.expression);
        out.push('\n');
        out.push_str(&self.display);
        out.push('\n');
        out
    }
}

const fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Refreshed => "refreshed",
        Outcome::Ignored => "ignored",
        Outcome::Faulted(_) => "faulted",
    }
}

/// Runs `script` against a fresh calculator
#[must_use]
pub fn evaluate(script: &str, config: CalculatorConfig, trace: bool) -> EvalReport {
    let parsed = KeyScript::parse(script);
    let mut driver = Driver::with_config(config, RecordingSink::new());
    let mut steps = trace.then(Vec::new);

    for event in parsed.events {
        let outcome = driver.dispatch(event);
        if let Some(steps) = steps.as_mut() {
            let sink = driver.sink();
            steps.push(Step {
                key: event.label(),
                outcome: outcome_name(outcome),
                expression: sink.expression().to_string(),
                display: sink.display().to_string(),
            });
        }
    }

    info!(
        events = driver.event_count(),
        faults = driver.fault_count(),
        skipped = parsed.skipped.len(),
        "script evaluated"
    );

    let calc = driver.calculator();
    EvalReport {
        expression: driver.sink().expression().to_string(),
        display: driver.sink().display().to_string(),
        buffer: calc.buffer().to_string(),
        events: driver.event_count(),
        faults: driver.fault_count(),
        skipped: parsed.skipped,
        steps,
    }
}
