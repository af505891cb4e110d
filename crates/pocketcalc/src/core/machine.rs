//! Keypad calculator state machine
//!
//! A [`Calculator`] interprets one event at a time: digits build up the
//! buffer, operators collapse any pending operation left to right, equals
//! evaluates, clear resets and delete trims the buffer. There is no
//! precedence; `2 + 3 × 4 =` is `(2 + 3) × 4`.
//!
//! ```rust
//! use pocketcalc::core::{Calculator, Operator};
//! use pocketcalc::core::machine::DigitKey;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(DigitKey::digit(5).unwrap());
//! calc.choose_operator(Operator::Add);
//! calc.input_digit(DigitKey::digit(3).unwrap());
//! calc.compute();
//!
//! assert_eq!(calc.expression(), "5 + 3 =");
//! assert_eq!(calc.buffer(), "8");
//! ```

use crate::config::CalculatorConfig;
use crate::core::format::{parse_number, stringify, trim_for_expr};
use crate::core::{CalcError, Operator};
use crate::display::Frame;
use thiserror::Error;

/// Character that is not a digit key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a digit key: {0:?}")]
pub struct InvalidDigit(pub char);

/// One of `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitKey(char);

impl DigitKey {
    /// The decimal point key
    pub const POINT: Self = Self('.');

    /// Creates a digit key from a character
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self(c)),
            _ => None,
        }
    }

    /// Creates a digit key from a value `0..=9`
    #[must_use]
    pub const fn digit(n: u8) -> Option<Self> {
        if n <= 9 {
            Some(Self((b'0' + n) as char))
        } else {
            None
        }
    }

    /// Returns the key character
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// True for the decimal point
    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for DigitKey {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(InvalidDigit(c))
    }
}

impl std::fmt::Display for DigitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a handler did to the outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; the frame should be re-rendered
    Refreshed,
    /// Event rejected; nothing changed and nothing should be rendered
    Ignored,
    /// Arithmetic failed; the error token should be shown and the machine
    /// has already been reset
    Faulted(CalcError),
}

impl Outcome {
    /// True when the display needs redrawing
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Coarse position in the entry cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing staged, buffer shows `0`
    Idle,
    /// Typing the first operand
    EnteringFirst,
    /// Operator chosen, waiting for the second operand
    OperatorPending,
    /// Typing the second operand
    EnteringSecond,
    /// Showing the result of `=`
    ResultShown,
}

/// Calculator state machine
///
/// Equality compares operands bit for bit, so a state holding a NaN
/// operand equals an unchanged copy of itself.
#[derive(Debug, Clone)]
pub struct Calculator {
    a: Option<f64>,
    b: Option<f64>,
    op: Option<Operator>,
    overwrite: bool,
    buffer: String,
    expr: String,
    just_computed: bool,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Calculator {
    fn eq(&self, other: &Self) -> bool {
        fn same(x: Option<f64>, y: Option<f64>) -> bool {
            x.map(f64::to_bits) == y.map(f64::to_bits)
        }

        same(self.a, other.a)
            && same(self.b, other.b)
            && self.op == other.op
            && self.overwrite == other.overwrite
            && self.buffer == other.buffer
            && self.expr == other.expr
            && self.just_computed == other.just_computed
            && self.config == other.config
    }
}

impl Calculator {
    /// Creates a cleared calculator with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a cleared calculator with custom limits
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            a: None,
            b: None,
            op: None,
            overwrite: true,
            buffer: "0".to_string(),
            expr: String::new(),
            just_computed: false,
            config,
        }
    }

    // ===== Accessors =====

    /// Text of the number being entered or shown (untruncated)
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Expression preview line
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expr
    }

    /// Accumulated left operand
    #[must_use]
    pub const fn operand(&self) -> Option<f64> {
        self.a
    }

    /// Right operand staged by an operator chain, reused by the next `=`
    #[must_use]
    pub const fn staged_operand(&self) -> Option<f64> {
        self.b
    }

    /// Pending operator
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.op
    }

    /// True when the next digit replaces the buffer
    #[must_use]
    pub const fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    /// True right after `=` until the next digit, operator or clear
    #[must_use]
    pub const fn just_computed(&self) -> bool {
        self.just_computed
    }

    /// Active limits
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Current position in the entry cycle
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.just_computed {
            return Phase::ResultShown;
        }
        match (self.op, self.overwrite) {
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::EnteringSecond,
            (None, false) => Phase::EnteringFirst,
            (None, true) => {
                if self.a.is_none() {
                    Phase::Idle
                } else {
                    Phase::ResultShown
                }
            }
        }
    }

    /// Snapshot of both output lines
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.expr.clone(), self.buffer.clone())
    }

    // ===== Handlers =====

    /// Handles a digit or decimal point key
    pub fn input_digit(&mut self, key: DigitKey) -> Outcome {
        if self.just_computed {
            self.a = None;
            self.expr.clear();
            self.buffer = "0".to_string();
            self.just_computed = false;
        }

        if self.overwrite {
            self.buffer = if key.is_point() {
                "0.".to_string()
            } else {
                key.as_char().to_string()
            };
            self.overwrite = false;
        } else if key.is_point() && self.buffer.contains('.') {
            return Outcome::Ignored;
        } else if self.buffer == "0" && !key.is_point() {
            self.buffer = key.as_char().to_string();
        } else {
            self.buffer.push(key.as_char());
        }

        Outcome::Refreshed
    }

    /// Handles an operator key
    ///
    /// A pending operation with a freshly typed right operand is evaluated
    /// first; otherwise the buffer becomes the left operand, or the existing
    /// left operand is kept and only the operator changes.
    ///
    /// The typed right operand stays staged, so a later `=` applies the new
    /// operator to it again unless another operator replaces it.
    pub fn choose_operator(&mut self, next: Operator) -> Outcome {
        let current = parse_number(&self.buffer);

        let left = match (self.a, self.op) {
            (Some(a), Some(op)) if !self.overwrite => {
                self.b = Some(current);
                match op.apply(a, current) {
                    Ok(result) => {
                        self.buffer = stringify(result);
                        result
                    }
                    Err(err) => return self.fault(err),
                }
            }
            (Some(a), _) => a,
            (None, _) => current,
        };

        self.a = Some(left);
        self.expr = format!("{} {} ", self.trim(left), next.display_symbol());
        self.op = Some(next);
        self.overwrite = true;
        self.just_computed = false;
        Outcome::Refreshed
    }

    /// Handles `=`
    ///
    /// Ignored unless both a left operand and an operator are pending.
    pub fn compute(&mut self) -> Outcome {
        let (Some(a), Some(op)) = (self.a, self.op) else {
            return Outcome::Ignored;
        };
        let b = match self.b {
            Some(b) => b,
            None => parse_number(&self.buffer),
        };
        self.b = Some(b);

        let result = match op.apply(a, b) {
            Ok(result) => result,
            Err(err) => return self.fault(err),
        };

        self.expr = format!(
            "{} {} {} =",
            self.trim(a),
            op.display_symbol(),
            self.trim(b)
        );
        self.buffer = stringify(result);

        self.a = if result.is_finite() { Some(result) } else { None };
        self.b = None;
        self.op = None;
        self.overwrite = true;
        self.just_computed = true;
        Outcome::Refreshed
    }

    /// Handles clear: back to the initial state
    pub fn clear(&mut self) -> Outcome {
        self.reset();
        Outcome::Refreshed
    }

    /// Handles delete: removes the last typed character
    ///
    /// Ignored while the buffer is not being typed into.
    pub fn delete_last(&mut self) -> Outcome {
        if self.overwrite {
            return Outcome::Ignored;
        }

        let len = self.buffer.chars().count();
        if len <= 1 || (len == 2 && self.buffer.starts_with('-')) {
            self.buffer = "0".to_string();
            self.overwrite = true;
        } else {
            self.buffer.pop();
        }
        Outcome::Refreshed
    }

    fn reset(&mut self) {
        self.a = None;
        self.b = None;
        self.op = None;
        self.overwrite = true;
        self.buffer = "0".to_string();
        self.expr.clear();
        self.just_computed = false;
    }

    fn fault(&mut self, err: CalcError) -> Outcome {
        self.reset();
        Outcome::Faulted(err)
    }

    fn trim(&self, n: f64) -> String {
        trim_for_expr(n, self.config.expr_max_len, self.config.expr_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(c: char) -> DigitKey {
        DigitKey::new(c).unwrap()
    }

    fn type_str(calc: &mut Calculator, s: &str) {
        for c in s.chars() {
            calc.input_digit(d(c));
        }
    }

    // ===== DigitKey tests =====

    #[test]
    fn test_digit_key_accepts_digits_and_point() {
        for c in "0123456789.".chars() {
            assert_eq!(DigitKey::new(c).map(DigitKey::as_char), Some(c));
        }
    }

    #[test]
    fn test_digit_key_rejects_others() {
        for c in ['a', '+', ',', ' ', '٣'] {
            assert_eq!(DigitKey::try_from(c), Err(InvalidDigit(c)));
        }
    }

    #[test]
    fn test_digit_key_from_value() {
        assert_eq!(DigitKey::digit(7).map(DigitKey::as_char), Some('7'));
        assert_eq!(DigitKey::digit(10), None);
        assert!(DigitKey::POINT.is_point());
    }

    #[test]
    fn test_invalid_digit_display() {
        assert_eq!(InvalidDigit('x').to_string(), "not a digit key: 'x'");
    }

    // ===== Initial state tests =====

    #[test]
    fn test_new_is_cleared() {
        let calc = Calculator::new();
        assert_eq!(calc.buffer(), "0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.operand(), None);
        assert_eq!(calc.pending_operator(), None);
        assert!(calc.is_overwrite());
        assert!(!calc.just_computed());
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn test_default_equals_new() {
        assert_eq!(Calculator::default(), Calculator::new());
    }

    // ===== input_digit tests =====

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "123");
        assert_eq!(calc.buffer(), "123");
        assert!(!calc.is_overwrite());
        assert_eq!(calc.phase(), Phase::EnteringFirst);
    }

    #[test]
    fn test_leading_zero_collapses() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "007");
        assert_eq!(calc.buffer(), "7");
    }

    #[test]
    fn test_point_first_gives_zero_point() {
        let mut calc = Calculator::new();
        assert_eq!(calc.input_digit(DigitKey::POINT), Outcome::Refreshed);
        assert_eq!(calc.buffer(), "0.");
        type_str(&mut calc, "5");
        assert_eq!(calc.buffer(), "0.5");
    }

    #[test]
    fn test_zero_then_point() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "0.0");
        assert_eq!(calc.buffer(), "0.0");
    }

    #[test]
    fn test_second_point_ignored() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1.2");
        let before = calc.clone();
        assert_eq!(calc.input_digit(DigitKey::POINT), Outcome::Ignored);
        assert_eq!(calc, before);
    }

    #[test]
    fn test_digit_after_equals_starts_over() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        calc.compute();
        type_str(&mut calc, "7");
        assert_eq!(calc.buffer(), "7");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.operand(), None);
        assert!(!calc.just_computed());
    }

    #[test]
    fn test_point_after_equals() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "1");
        calc.compute();
        calc.input_digit(DigitKey::POINT);
        assert_eq!(calc.buffer(), "0.");
        assert_eq!(calc.expression(), "");
    }

    // ===== choose_operator tests =====

    #[test]
    fn test_operator_stages_operand() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "12");
        assert_eq!(calc.choose_operator(Operator::Multiply), Outcome::Refreshed);
        assert_eq!(calc.operand(), Some(12.0));
        assert_eq!(calc.pending_operator(), Some(Operator::Multiply));
        assert_eq!(calc.expression(), "12 × ");
        assert_eq!(calc.buffer(), "12");
        assert!(calc.is_overwrite());
        assert_eq!(calc.phase(), Phase::OperatorPending);
    }

    #[test]
    fn test_operator_on_idle_uses_zero() {
        let mut calc = Calculator::new();
        calc.choose_operator(Operator::Subtract);
        assert_eq!(calc.operand(), Some(0.0));
        assert_eq!(calc.expression(), "0 - ");
    }

    #[test]
    fn test_operator_switch() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        calc.choose_operator(Operator::Subtract);
        assert_eq!(calc.expression(), "4 - ");
        assert_eq!(calc.pending_operator(), Some(Operator::Subtract));
        assert_eq!(calc.operand(), Some(4.0));
    }

    #[test]
    fn test_operator_chains_left_to_right() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "2");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Multiply);
        assert_eq!(calc.buffer(), "5");
        assert_eq!(calc.operand(), Some(5.0));
        assert_eq!(calc.expression(), "5 × ");
        assert_eq!(calc.staged_operand(), Some(3.0));
        type_str(&mut calc, "4");
        calc.compute();
        assert_eq!(calc.buffer(), "15");
        assert_eq!(calc.expression(), "5 × 3 =");
        assert_eq!(calc.staged_operand(), None);
    }

    #[test]
    fn test_staged_operand_reused_without_new_digits() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "2");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Multiply);
        assert_eq!(calc.compute(), Outcome::Refreshed);
        assert_eq!(calc.expression(), "5 × 3 =");
        assert_eq!(calc.buffer(), "15");
    }

    #[test]
    fn test_next_chain_step_replaces_staged_operand() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "2");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Multiply);
        type_str(&mut calc, "4");
        calc.choose_operator(Operator::Subtract);
        assert_eq!(calc.operand(), Some(20.0));
        assert_eq!(calc.staged_operand(), Some(4.0));
        calc.compute();
        assert_eq!(calc.expression(), "20 - 4 =");
        assert_eq!(calc.buffer(), "16");
    }

    #[test]
    fn test_clear_drops_staged_operand() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "2");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Add);
        calc.clear();
        assert_eq!(calc.staged_operand(), None);
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_operator_after_equals_continues() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        calc.compute();
        calc.choose_operator(Operator::Divide);
        assert_eq!(calc.expression(), "8 ÷ ");
        assert_eq!(calc.operand(), Some(8.0));
        assert!(!calc.just_computed());
    }

    #[test]
    fn test_operator_chain_division_by_zero_faults() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "6");
        calc.choose_operator(Operator::Divide);
        type_str(&mut calc, "0");
        assert_eq!(
            calc.choose_operator(Operator::Add),
            Outcome::Faulted(CalcError::DivisionByZero)
        );
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_operator_long_operand_trimmed() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1");
        calc.choose_operator(Operator::Divide);
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.buffer(), "0.3333333333333333");
        assert_eq!(calc.expression(), "0.3333333333 + ");
    }

    // ===== compute tests =====

    #[test]
    fn test_compute_five_plus_three() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "3");
        assert_eq!(calc.compute(), Outcome::Refreshed);
        assert_eq!(calc.expression(), "5 + 3 =");
        assert_eq!(calc.buffer(), "8");
        assert_eq!(calc.operand(), Some(8.0));
        assert_eq!(calc.pending_operator(), None);
        assert!(calc.just_computed());
        assert!(calc.is_overwrite());
        assert_eq!(calc.phase(), Phase::ResultShown);
    }

    #[test]
    fn test_compute_without_operator_ignored() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "9");
        let before = calc.clone();
        assert_eq!(calc.compute(), Outcome::Ignored);
        assert_eq!(calc, before);
    }

    #[test]
    fn test_compute_twice_ignored() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "2");
        calc.choose_operator(Operator::Multiply);
        type_str(&mut calc, "3");
        calc.compute();
        assert_eq!(calc.compute(), Outcome::Ignored);
        assert_eq!(calc.buffer(), "6");
    }

    #[test]
    fn test_compute_right_operand_defaults_to_left() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "7");
        calc.choose_operator(Operator::Multiply);
        calc.compute();
        assert_eq!(calc.expression(), "7 × 7 =");
        assert_eq!(calc.buffer(), "49");
    }

    #[test]
    fn test_compute_division_by_zero_resets() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "6");
        calc.choose_operator(Operator::Divide);
        type_str(&mut calc, "0");
        assert_eq!(
            calc.compute(),
            Outcome::Faulted(CalcError::DivisionByZero)
        );
        assert_eq!(calc.buffer(), "0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_compute_modulo_by_zero_is_nan() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Modulo);
        type_str(&mut calc, "0");
        assert_eq!(calc.compute(), Outcome::Refreshed);
        assert_eq!(calc.buffer(), "NaN");
        assert_eq!(calc.expression(), "5 % 0 =");
        assert_eq!(calc.operand(), None);
    }

    #[test]
    fn test_nan_operand_state_equals_its_clone() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Modulo);
        type_str(&mut calc, "0");
        calc.choose_operator(Operator::Add);
        assert!(calc.operand().unwrap().is_nan());
        assert_eq!(calc.clone(), calc);
    }

    #[test]
    fn test_operator_after_nan_result_reads_buffer() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Modulo);
        type_str(&mut calc, "0");
        calc.compute();
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.expression(), "NaN + ");
        assert!(calc.operand().unwrap().is_nan());
    }

    #[test]
    fn test_compute_float_sum_display_and_expr() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "0.1");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "0.2");
        calc.compute();
        assert_eq!(calc.buffer(), "0.30000000000000004");
        assert_eq!(calc.frame().buffer_text(16), "0.30000000000000");
        assert_eq!(calc.expression(), "0.1 + 0.2 =");
    }

    #[test]
    fn test_compute_negative_result() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Subtract);
        type_str(&mut calc, "8");
        calc.compute();
        assert_eq!(calc.buffer(), "-5");
    }

    // ===== clear tests =====

    #[test]
    fn test_clear_from_any_state() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "42");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "1");
        assert_eq!(calc.clear(), Outcome::Refreshed);
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_clear_keeps_config() {
        let config = CalculatorConfig::new().with_display_width(8);
        let mut calc = Calculator::with_config(config.clone());
        type_str(&mut calc, "9");
        calc.clear();
        assert_eq!(calc.config(), &config);
    }

    // ===== delete_last tests =====

    #[test]
    fn test_delete_last_removes_char() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "12");
        assert_eq!(calc.delete_last(), Outcome::Refreshed);
        assert_eq!(calc.buffer(), "1");
        assert!(!calc.is_overwrite());
    }

    #[test]
    fn test_delete_last_single_char_resets_to_zero() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1");
        calc.delete_last();
        assert_eq!(calc.buffer(), "0");
        assert!(calc.is_overwrite());
    }

    #[test]
    fn test_delete_last_negative_single_digit() {
        let mut calc = Calculator::new();
        calc.buffer = "-5".to_string();
        calc.overwrite = false;
        calc.delete_last();
        assert_eq!(calc.buffer(), "0");
        assert!(calc.is_overwrite());
    }

    #[test]
    fn test_delete_last_ignored_while_overwrite() {
        let mut calc = Calculator::new();
        assert_eq!(calc.delete_last(), Outcome::Ignored);
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.delete_last(), Outcome::Ignored);
        assert_eq!(calc.buffer(), "5");
    }

    #[test]
    fn test_delete_last_trailing_point() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "3.");
        calc.delete_last();
        assert_eq!(calc.buffer(), "3");
        calc.input_digit(DigitKey::POINT);
        assert_eq!(calc.buffer(), "3.");
    }

    // ===== Outcome / Phase tests =====

    #[test]
    fn test_outcome_needs_render() {
        assert!(Outcome::Refreshed.needs_render());
        assert!(Outcome::Faulted(CalcError::DivisionByZero).needs_render());
        assert!(!Outcome::Ignored.needs_render());
    }

    #[test]
    fn test_phase_entering_second() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "2");
        assert_eq!(calc.phase(), Phase::EnteringSecond);
    }

    #[test]
    fn test_custom_expr_limits() {
        let config = CalculatorConfig::new()
            .with_expr_max_len(4)
            .with_expr_precision(3);
        let mut calc = Calculator::with_config(config);
        type_str(&mut calc, "12345");
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.expression(), "1.23e+4 + ");
    }
}
