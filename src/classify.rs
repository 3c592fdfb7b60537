use tracing::debug;

use crate::filename::DatedName;

/// Exclusive date window. Bounds are compared as strings, which orders
/// correctly only because both sides are fixed-width `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub after: String,
    pub before: String,
}

impl DateWindow {
    pub fn new(after: impl Into<String>, before: impl Into<String>) -> Self {
        Self {
            after: after.into(),
            before: before.into(),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.after.as_str() < date && date < self.before.as_str()
    }
}

/// Decides eligibility from the filename alone.
#[derive(Debug, Clone)]
pub struct Selector {
    pub window: DateWindow,
    pub marker: String,
}

impl Selector {
    pub fn new(window: DateWindow, marker: impl Into<String>) -> Self {
        Self {
            window,
            marker: marker.into(),
        }
    }

    pub fn accepts(&self, name: &DatedName) -> bool {
        if !self.window.contains(&name.date) {
            debug!(file = %name.file_name, date = %name.date, "outside date window");
            return false;
        }
        if !name.file_name.contains(self.marker.as_str()) {
            debug!(file = %name.file_name, marker = %self.marker, "series marker missing");
            return false;
        }
        true
    }

    /// The parsed name of an eligible file, `None` otherwise.
    ///
    /// Names too short to carry a date prefix are ineligible, not errors.
    pub fn classify(&self, file_name: &str, extension: &str) -> Option<DatedName> {
        let Some(name) = DatedName::parse(file_name, extension) else {
            debug!(file = %file_name, "no date prefix");
            return None;
        };
        self.accepts(&name).then_some(name)
    }
}
