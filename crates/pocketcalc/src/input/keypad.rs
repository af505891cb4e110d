//! On-screen keypad: button layout and click dispatch
//!
//! Each button carries a data binding in the same shape as the markup
//! attributes it is rendered with: `data-num` for digits and the point,
//! `data-op` for operators, `data-action` for `equals`, `clear` and `del`.
//!
//! Layout:
//! ```text
//! [ AC ] [ DEL ] [ % ] [ ÷ ]
//! [ 7  ] [ 8   ] [ 9 ] [ × ]
//! [ 4  ] [ 5   ] [ 6 ] [ - ]
//! [ 1  ] [ 2   ] [ 3 ] [ + ]
//! [ 0          ] [ . ] [ = ]
//! ```

use super::CalcEvent;
use crate::core::{DigitKey, Operator};

/// Value of a `data-action` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// `equals`
    Equals,
    /// `clear`
    Clear,
    /// `del`
    Delete,
}

impl ButtonAction {
    /// Parses a `data-action` value
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "del" => Some(Self::Delete),
            _ => None,
        }
    }

    /// The `data-action` value
    #[must_use]
    pub const fn attr(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Delete => "del",
        }
    }
}

/// What a button is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonBinding {
    /// `data-num`
    Num(DigitKey),
    /// `data-op`
    Op(Operator),
    /// `data-action`
    Action(ButtonAction),
}

impl ButtonBinding {
    /// Resolves a clicked element's data attributes
    ///
    /// `data-num` wins over `data-op`, which wins over `data-action`.
    /// An empty attribute counts as absent. A present attribute whose value
    /// is not understood resolves to nothing.
    #[must_use]
    pub fn from_attributes(
        num: Option<&str>,
        op: Option<&str>,
        action: Option<&str>,
    ) -> Option<Self> {
        fn present(attr: Option<&str>) -> Option<&str> {
            attr.filter(|v| !v.is_empty())
        }

        if let Some(num) = present(num) {
            return single_char(num).and_then(DigitKey::new).map(Self::Num);
        }
        if let Some(op) = present(op) {
            return single_char(op).and_then(Operator::from_symbol).map(Self::Op);
        }
        present(action)
            .and_then(ButtonAction::from_attr)
            .map(Self::Action)
    }

    /// Resolves a single `data-*` attribute
    #[must_use]
    pub fn from_attribute(name: &str, value: &str) -> Option<Self> {
        match name {
            "data-num" => Self::from_attributes(Some(value), None, None),
            "data-op" => Self::from_attributes(None, Some(value), None),
            "data-action" => Self::from_attributes(None, None, Some(value)),
            _ => None,
        }
    }

    /// Attribute name and value the button is rendered with
    #[must_use]
    pub fn attribute(&self) -> (&'static str, String) {
        match self {
            Self::Num(key) => ("data-num", key.to_string()),
            Self::Op(op) => ("data-op", op.symbol().to_string()),
            Self::Action(action) => ("data-action", action.attr().to_string()),
        }
    }

    /// Event produced by clicking the button
    #[must_use]
    pub const fn event(&self) -> CalcEvent {
        match self {
            Self::Num(key) => CalcEvent::Digit(*key),
            Self::Op(op) => CalcEvent::Operator(*op),
            Self::Action(ButtonAction::Equals) => CalcEvent::Equals,
            Self::Action(ButtonAction::Clear) => CalcEvent::Clear,
            Self::Action(ButtonAction::Delete) => CalcEvent::DeleteLast,
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Element ID
    pub id: String,
    /// Text on the button face
    pub label: &'static str,
    /// Data binding
    pub binding: ButtonBinding,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns spanned
    pub span: usize,
}

impl KeypadButton {
    fn new(binding: ButtonBinding, label: &'static str, row: usize, col: usize) -> Self {
        let id = match binding {
            ButtonBinding::Num(key) if key.is_point() => "btn-point".to_string(),
            ButtonBinding::Num(key) => format!("btn-{key}"),
            ButtonBinding::Op(op) => format!("btn-{}", op_name(op)),
            ButtonBinding::Action(action) => format!("btn-{}", action.attr()),
        };
        Self {
            id,
            label,
            binding,
            row,
            col,
            span: 1,
        }
    }

    const fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// True when the button covers grid cell (`row`, `col`)
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::Modulo => "mod",
    }
}

/// Markup of the standard keypad: attribute, value, label, row, col, span
const LAYOUT: [(&str, &str, &str, usize, usize, usize); 19] = [
    ("data-action", "clear", "AC", 0, 0, 1),
    ("data-action", "del", "DEL", 0, 1, 1),
    ("data-op", "%", "%", 0, 2, 1),
    ("data-op", "/", "÷", 0, 3, 1),
    ("data-num", "7", "7", 1, 0, 1),
    ("data-num", "8", "8", 1, 1, 1),
    ("data-num", "9", "9", 1, 2, 1),
    ("data-op", "*", "×", 1, 3, 1),
    ("data-num", "4", "4", 2, 0, 1),
    ("data-num", "5", "5", 2, 1, 1),
    ("data-num", "6", "6", 2, 2, 1),
    ("data-op", "-", "-", 2, 3, 1),
    ("data-num", "1", "1", 3, 0, 1),
    ("data-num", "2", "2", 3, 1, 1),
    ("data-num", "3", "3", 3, 2, 1),
    ("data-op", "+", "+", 3, 3, 1),
    ("data-num", "0", "0", 4, 0, 2),
    ("data-num", ".", ".", 4, 2, 1),
    ("data-action", "equals", "=", 4, 3, 1),
];

/// Keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = LAYOUT
            .iter()
            .filter_map(|&(attr, value, label, row, col, span)| {
                let binding = ButtonBinding::from_attribute(attr, value)?;
                Some(KeypadButton::new(binding, label, row, col).wide(span))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Buttons on one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Resolves a click on an element to an event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<CalcEvent> {
        self.find_by_id(element_id).map(|b| b.binding.event())
    }
}
