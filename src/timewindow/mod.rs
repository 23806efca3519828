//! Optional pickup time window
//!
//! An item's event date may carry an optional start/end window. The
//! controller owns that state and keeps `start < end` true across every
//! edit: edits that would cross the endpoints are repaired, never rejected,
//! so the UI can always render a valid range.

use crate::constants::time::{INITIAL_WINDOW_MINUTES, MIN_WINDOW_GAP_MINUTES};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A start/end timestamp pair, valid while `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// State machine for an optional time window attached to an event date
///
/// Disabled means the window does not exist: start and end are absent, not
/// merely ignored. The event date is independent of the window and always
/// present.
#[derive(Debug, Clone)]
pub struct TimeRangeController {
    event_date: DateTime<Utc>,
    window: Option<TimeWindow>,
}

impl TimeRangeController {
    /// Create a controller with the event date defaulted to now
    pub fn new() -> Self {
        Self::with_event_date(Utc::now())
    }

    /// Create a controller for a specific event date
    pub fn with_event_date(event_date: DateTime<Utc>) -> Self {
        Self {
            event_date,
            window: None,
        }
    }

    /// Whether a time window currently exists
    pub fn is_enabled(&self) -> bool {
        self.window.is_some()
    }

    /// The current window, if enabled
    pub fn window(&self) -> Option<TimeWindow> {
        self.window
    }

    /// The event date (always present)
    pub fn event_date(&self) -> DateTime<Utc> {
        self.event_date
    }

    /// Change the event date; the window is unaffected
    pub fn set_event_date(&mut self, date: DateTime<Utc>) {
        self.event_date = date;
    }

    /// Turn the window on, defaulting to a one-hour range starting now
    ///
    /// No-op when already enabled.
    pub fn enable(&mut self) {
        self.enable_at(Utc::now());
    }

    /// `enable` with an explicit "now" for callers that control the clock
    pub fn enable_at(&mut self, now: DateTime<Utc>) {
        if self.window.is_none() {
            self.window = Some(TimeWindow {
                start: now,
                end: now + Duration::minutes(INITIAL_WINDOW_MINUTES),
            });
        }
    }

    /// Turn the window off, clearing both endpoints
    ///
    /// No-op when already disabled.
    pub fn disable(&mut self) {
        self.window = None;
    }

    /// Move the start of the window
    ///
    /// If the new start reaches or passes the end, the end is advanced to
    /// one minute after it so the range stays valid. No-op when disabled.
    pub fn set_start(&mut self, new_start: DateTime<Utc>) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        window.start = new_start;
        if new_start >= window.end {
            window.end = new_start + Duration::minutes(MIN_WINDOW_GAP_MINUTES);
        }
    }

    /// Move the end of the window
    ///
    /// An end at or before the start is clamped to one minute after the
    /// start; the requested value is discarded. No-op when disabled.
    pub fn set_end(&mut self, new_end: DateTime<Utc>) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        window.end = if new_end <= window.start {
            window.start + Duration::minutes(MIN_WINDOW_GAP_MINUTES)
        } else {
            new_end
        };
    }

    /// Return to the initial shape: window destroyed, event date back to now
    ///
    /// Called when the enclosing form resets or submits.
    pub fn reset(&mut self) {
        self.window = None;
        self.event_date = Utc::now();
    }
}

impl Default for TimeRangeController {
    fn default() -> Self {
        Self::new()
    }
}
