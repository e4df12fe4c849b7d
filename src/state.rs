//! Session state: what the user has picked and what was last copied

use crate::timestamp::{self, Epoch, TimeOfDay, TimestampFormat, ZoneSetting};
use chrono::NaiveDate;

/// The date and time-of-day currently picked.
///
/// Rendered markup is never stored here; [`SelectionState::rendered`] recomputes
/// it from the current fields on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    date: Option<NaiveDate>,
    time: TimeOfDay,
}

impl SelectionState {
    pub fn new(date: Option<NaiveDate>, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Today's date in `zone` at the given time
    pub fn starting_today(zone: ZoneSetting, time: TimeOfDay) -> Self {
        Self::new(Some(zone.today()), time)
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> &TimeOfDay {
        &self.time
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    pub fn set_time(&mut self, time: TimeOfDay) {
        self.time = time;
    }

    /// Nudge the time by `delta` minutes, wrapping within the day
    pub fn step_time(&mut self, delta: i64) {
        self.time = self.time.step_minutes(delta);
    }

    /// Epoch for the current selection, `None` when no date is picked
    #[must_use]
    pub fn epoch(&self, zone: ZoneSetting) -> Option<Epoch> {
        self.date.map(|date| timestamp::epoch_seconds(date, &self.time, zone))
    }

    /// Markup for one format; empty when no date is picked
    #[must_use]
    pub fn rendered(&self, format: TimestampFormat, zone: ZoneSetting) -> String {
        timestamp::generate(self.date, &self.time, format, zone)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::starting_today(ZoneSetting::default(), TimeOfDay::default())
    }
}

/// The most recently copied markup, or empty.
///
/// Each copy bumps a generation counter. A reset only clears the text when it
/// carries the current generation, so a reset scheduled for an older copy can
/// never wipe out a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopiedState {
    text: String,
    generation: u64,
}

impl CopiedState {
    /// Record a copy and return the generation its reset must carry
    pub fn copied(&mut self, text: String) -> u64 {
        self.text = text;
        self.generation += 1;
        self.generation
    }

    /// Clear the text if `generation` is still current; returns whether it did
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when `candidate` is the markup currently shown as copied
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        !self.text.is_empty() && self.text == candidate
    }
}
