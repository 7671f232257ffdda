//! services/client/src/widgets/strength.rs
//!
//! The live strength indicator attached to a password field.

use athletic_spirit_core::strength::{self, StrengthReport};

#[derive(Debug, Clone, Default)]
pub struct StrengthIndicator {
    report: Option<StrengthReport>,
}

impl StrengthIndicator {
    /// Recomputes on every keystroke. An empty field clears the indicator.
    pub fn on_input(&mut self, password: &str) {
        self.report = strength::evaluate(password);
    }

    pub fn report(&self) -> Option<StrengthReport> {
        self.report
    }

    pub fn text(&self) -> Option<String> {
        self.report.map(|report| report.text())
    }

    pub fn color(&self) -> Option<&'static str> {
        self.report.map(|report| report.color())
    }
}
