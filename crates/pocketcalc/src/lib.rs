//! pocketcalc - keypad calculator state machine
//!
//! A four-function (plus remainder) calculator that behaves like the
//! pocket kind: digits build a number, operators apply strictly left to
//! right, `=` shows the result, and dividing by zero flashes an error
//! before starting over.
//!
//! # Layers
//!
//! - [`core`]: arithmetic, number formatting and the [`Calculator`](core::Calculator) state machine
//! - [`input`]: keyboard keys and keypad buttons translated to [`CalcEvent`](input::CalcEvent)s
//! - [`display`]: the two output lines and the [`DisplaySink`](display::DisplaySink) they go to
//! - [`driver`]: glue that runs events and keeps a sink up to date
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut driver = Driver::new(RecordingSink::new());
//! for event in KeyScript::parse("12+7=").events {
//!     driver.dispatch(event);
//! }
//! assert_eq!(driver.sink().expression(), "12 + 7 =");
//! assert_eq!(driver.sink().display(), "19");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod display;
pub mod driver;
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, DigitKey, Operator, Outcome, Phase,
    };
    pub use crate::display::{DisplaySink, Frame, RecordingSink, SinkWrite};
    pub use crate::driver::Driver;
    pub use crate::input::{
        key_to_event, ButtonAction, ButtonBinding, CalcEvent, KeyScript, Keypad, KeypadButton,
    };
}
