//! Event driver: feeds events to a calculator and keeps a sink in sync
//!
//! The driver is the only place outputs are pushed. After every event it
//! looks at the handler's [`Outcome`]: refreshed state is rendered, ignored
//! events render nothing, and a fault shows the error token before the
//! reset state is rendered.
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut driver = Driver::new(RecordingSink::new());
//! for key in ["9", "/", "0", "Enter"] {
//!     driver.press_key(key);
//! }
//! assert_eq!(driver.sink().display_history(), vec!["0", "9", "9", "0", "Error", "0"]);
//! ```

use crate::config::CalculatorConfig;
use crate::core::format::truncate_display;
use crate::core::{Calculator, Outcome};
use crate::display::DisplaySink;
use crate::input::{key_to_event, CalcEvent, Keypad};
use tracing::{debug, warn};

/// Drives a [`Calculator`] and renders into a [`DisplaySink`]
#[derive(Debug)]
pub struct Driver<S> {
    calc: Calculator,
    sink: S,
    events: u64,
    faults: u64,
}

impl<S: DisplaySink> Driver<S> {
    /// Creates a driver with default limits and renders the initial state
    pub fn new(sink: S) -> Self {
        Self::with_config(CalculatorConfig::default(), sink)
    }

    /// Creates a driver with custom limits and renders the initial state
    pub fn with_config(config: CalculatorConfig, sink: S) -> Self {
        let mut driver = Self {
            calc: Calculator::with_config(config),
            sink,
            events: 0,
            faults: 0,
        };
        driver.refresh();
        driver
    }

    /// Runs one event and updates the sink
    pub fn dispatch(&mut self, event: CalcEvent) -> Outcome {
        self.events += 1;
        let outcome = event.apply(&mut self.calc);

        match outcome {
            Outcome::Refreshed => self.refresh(),
            Outcome::Ignored => {}
            Outcome::Faulted(err) => {
                self.faults += 1;
                warn!(event = %event.label(), error = %err, "calculation failed, resetting");
                let config = self.calc.config();
                let token = truncate_display(&config.error_token, config.display_width).to_string();
                self.sink.set_display(&token);
                self.refresh();
            }
        }

        debug!(
            event = %event.label(),
            ?outcome,
            buffer = %self.calc.buffer(),
            expr = %self.calc.expression(),
            "dispatched"
        );
        outcome
    }

    /// Runs events in order
    pub fn dispatch_all<I>(&mut self, events: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = CalcEvent>,
    {
        events.into_iter().map(|e| self.dispatch(e)).collect()
    }

    /// Translates and runs a keyboard key; unmapped keys do nothing
    pub fn press_key(&mut self, key: &str) -> Option<Outcome> {
        let Some(event) = key_to_event(key) else {
            debug!(key, "unmapped key");
            return None;
        };
        Some(self.dispatch(event))
    }

    /// Translates and runs a click on a keypad element
    pub fn click(&mut self, keypad: &Keypad, element_id: &str) -> Option<Outcome> {
        let Some(event) = keypad.handle_click(element_id) else {
            debug!(element_id, "click outside keypad buttons");
            return None;
        };
        Some(self.dispatch(event))
    }

    /// Pushes the current state to the sink
    pub fn refresh(&mut self) {
        let width = self.calc.config().display_width;
        let frame = self.calc.frame();
        self.sink.render(&frame, width);
    }

    /// The calculator being driven
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// The sink being rendered into
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the driver, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of events dispatched
    #[must_use]
    pub const fn event_count(&self) -> u64 {
        self.events
    }

    /// Number of events that ended in an arithmetic fault
    #[must_use]
    pub const fn fault_count(&self) -> u64 {
        self.faults
    }
}
