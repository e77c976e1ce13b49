use std::fmt;

use chrono::Duration;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub const CONTROL_CLASS: &str = "chart-control";
pub const ACTIVE_CLASS: &str = "active";

pub type PeriodChangeCallback = Box<dyn FnMut(&str, usize)>;

/// One rendered button with its CSS class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
    label: String,
    classes: Vec<String>,
}

impl ControlButton {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.has_class(ACTIVE_CLASS)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

/// Container the time-range buttons are appended to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlStrip {
    buttons: Vec<ControlButton>,
}

impl ControlStrip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn buttons(&self) -> &[ControlButton] {
        &self.buttons
    }

    pub fn push(&mut self, button: ControlButton) -> usize {
        self.buttons.push(button);
        self.buttons.len() - 1
    }

    #[must_use]
    pub fn active_labels(&self) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|button| button.has_class(CONTROL_CLASS) && button.is_active())
            .map(ControlButton::label)
            .collect()
    }
}

/// Selection state of one set of period buttons inside a [`ControlStrip`].
pub struct TimeControls {
    periods: Vec<String>,
    first_button: usize,
    active: usize,
    on_change: Option<PeriodChangeCallback>,
}

impl fmt::Debug for TimeControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeControls")
            .field("periods", &self.periods)
            .field("first_button", &self.first_button)
            .field("active", &self.active)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Appends one button per period to `strip`, the first one active.
///
/// A missing strip yields `Ok(None)`; an empty period list is rejected since
/// exactly one control must always be active.
pub fn create_time_controls<S: AsRef<str>>(
    strip: Option<&mut ControlStrip>,
    periods: &[S],
    on_change: Option<PeriodChangeCallback>,
) -> ChartResult<Option<TimeControls>> {
    let Some(strip) = strip else {
        return Ok(None);
    };
    if periods.is_empty() {
        return Err(ChartError::InvalidData(
            "time controls need at least one period".to_owned(),
        ));
    }

    let first_button = strip.buttons.len();
    for (index, period) in periods.iter().enumerate() {
        let mut button = ControlButton::new(period.as_ref());
        button.add_class(CONTROL_CLASS);
        if index == 0 {
            button.add_class(ACTIVE_CLASS);
        }
        strip.push(button);
    }

    Ok(Some(TimeControls {
        periods: periods.iter().map(|p| p.as_ref().to_owned()).collect(),
        first_button,
        active: 0,
        on_change,
    }))
}

impl TimeControls {
    #[must_use]
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_period(&self) -> &str {
        &self.periods[self.active]
    }

    /// Activates the control at `index` and notifies `on_change`.
    ///
    /// Every control in the strip is deactivated first. Returns `false`
    /// without side effects when `index` is out of range.
    pub fn click(&mut self, strip: &mut ControlStrip, index: usize) -> bool {
        let Some(period) = self.periods.get(index) else {
            return false;
        };
        let Some(target) = strip.buttons.get(self.first_button + index) else {
            return false;
        };
        if target.label() != period {
            return false;
        }

        for button in strip
            .buttons
            .iter_mut()
            .filter(|button| button.has_class(CONTROL_CLASS))
        {
            button.remove_class(ACTIVE_CLASS);
        }
        strip.buttons[self.first_button + index].add_class(ACTIVE_CLASS);
        self.active = index;
        debug!(period = %period, index, "time range selected");

        if let Some(callback) = self.on_change.as_mut() {
            callback(period.as_str(), index);
        }
        true
    }
}

/// Span covered by a period label such as `1H`, `1D`, `1W`, `1M` or `1Y`.
///
/// Months count as 30 days and years as 365. Labels without a fixed span
/// (`ALL`) or with an unknown unit return `None`.
#[must_use]
pub fn period_duration(label: &str) -> Option<Duration> {
    let label = label.trim();
    let unit = label.chars().last()?;
    let count: i64 = label[..label.len() - unit.len_utf8()].parse().ok()?;
    if count <= 0 {
        return None;
    }
    match unit.to_ascii_uppercase() {
        'H' => Duration::try_hours(count),
        'D' => Duration::try_days(count),
        'W' => Duration::try_weeks(count),
        'M' => Duration::try_days(count.checked_mul(30)?),
        'Y' => Duration::try_days(count.checked_mul(365)?),
        _ => None,
    }
}
