//! Pacing settings and persistence seams.
//!
//! All fields carry documented valid ranges; out-of-range values are
//! clamped on every write path, never rejected. The actual stores live
//! outside the core, behind the [`SettingsStore`] / [`ProgressStore`]
//! traits.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::book::Position;

pub const BASE_WPM_RANGE: RangeInclusive<u16> = 100..=1500;
pub const SENTENCE_PAUSE_RANGE: RangeInclusive<u16> = 0..=2000;
pub const CLAUSE_PAUSE_RANGE: RangeInclusive<u16> = 0..=2000;
pub const PARAGRAPH_PAUSE_RANGE: RangeInclusive<u16> = 0..=3000;
pub const LONG_EXTRA_RANGE: RangeInclusive<u16> = 0..=1000;
pub const VERY_LONG_EXTRA_RANGE: RangeInclusive<u16> = 0..=1000;
pub const FRAGMENT_EXTRA_RANGE: RangeInclusive<u16> = 0..=1000;

fn clamped(value: u16, range: &RangeInclusive<u16>) -> u16 {
    value.clamp(*range.start(), *range.end())
}

/// User-tunable pacing configuration.
///
/// Fields are private so every mutation path clamps. `base_wpm` is
/// always positive by construction, which keeps the delay math free of
/// division by zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PacingSettings {
    base_wpm: u16,
    sentence_pause_ms: u16,
    clause_pause_ms: u16,
    paragraph_pause_ms: u16,
    long_extra_ms: u16,
    very_long_extra_ms: u16,
    fragment_extra_ms: u16,
}

/// One clamped settings mutation, dispatched through the reducer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingChange {
    BaseWpm(u16),
    SentencePauseMs(u16),
    ClausePauseMs(u16),
    ParagraphPauseMs(u16),
    LongExtraMs(u16),
    VeryLongExtraMs(u16),
    FragmentExtraMs(u16),
}

impl PacingSettings {
    /// Default preset: modest pauses at clause and sentence boundaries.
    pub fn natural() -> Self {
        Self {
            base_wpm: 300,
            sentence_pause_ms: 150,
            clause_pause_ms: 75,
            paragraph_pause_ms: 300,
            long_extra_ms: 40,
            very_long_extra_ms: 60,
            fragment_extra_ms: 30,
        }
    }

    /// Every token takes exactly the base delay.
    pub fn uniform() -> Self {
        Self {
            base_wpm: 300,
            sentence_pause_ms: 0,
            clause_pause_ms: 0,
            paragraph_pause_ms: 0,
            long_extra_ms: 0,
            very_long_extra_ms: 0,
            fragment_extra_ms: 0,
        }
    }

    /// Slower preset with generous pauses for difficult material.
    pub fn comprehension() -> Self {
        Self {
            base_wpm: 250,
            sentence_pause_ms: 250,
            clause_pause_ms: 120,
            paragraph_pause_ms: 500,
            long_extra_ms: 60,
            very_long_extra_ms: 90,
            fragment_extra_ms: 45,
        }
    }

    pub const fn base_wpm(&self) -> u16 {
        self.base_wpm
    }

    pub const fn sentence_pause_ms(&self) -> u16 {
        self.sentence_pause_ms
    }

    pub const fn clause_pause_ms(&self) -> u16 {
        self.clause_pause_ms
    }

    pub const fn paragraph_pause_ms(&self) -> u16 {
        self.paragraph_pause_ms
    }

    pub const fn long_extra_ms(&self) -> u16 {
        self.long_extra_ms
    }

    pub const fn very_long_extra_ms(&self) -> u16 {
        self.very_long_extra_ms
    }

    pub const fn fragment_extra_ms(&self) -> u16 {
        self.fragment_extra_ms
    }

    pub fn set_base_wpm(&mut self, value: u16) {
        self.base_wpm = clamped(value, &BASE_WPM_RANGE);
    }

    pub fn set_sentence_pause_ms(&mut self, value: u16) {
        self.sentence_pause_ms = clamped(value, &SENTENCE_PAUSE_RANGE);
    }

    pub fn set_clause_pause_ms(&mut self, value: u16) {
        self.clause_pause_ms = clamped(value, &CLAUSE_PAUSE_RANGE);
    }

    pub fn set_paragraph_pause_ms(&mut self, value: u16) {
        self.paragraph_pause_ms = clamped(value, &PARAGRAPH_PAUSE_RANGE);
    }

    pub fn set_long_extra_ms(&mut self, value: u16) {
        self.long_extra_ms = clamped(value, &LONG_EXTRA_RANGE);
    }

    pub fn set_very_long_extra_ms(&mut self, value: u16) {
        self.very_long_extra_ms = clamped(value, &VERY_LONG_EXTRA_RANGE);
    }

    pub fn set_fragment_extra_ms(&mut self, value: u16) {
        self.fragment_extra_ms = clamped(value, &FRAGMENT_EXTRA_RANGE);
    }

    pub fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::BaseWpm(value) => self.set_base_wpm(value),
            SettingChange::SentencePauseMs(value) => self.set_sentence_pause_ms(value),
            SettingChange::ClausePauseMs(value) => self.set_clause_pause_ms(value),
            SettingChange::ParagraphPauseMs(value) => self.set_paragraph_pause_ms(value),
            SettingChange::LongExtraMs(value) => self.set_long_extra_ms(value),
            SettingChange::VeryLongExtraMs(value) => self.set_very_long_extra_ms(value),
            SettingChange::FragmentExtraMs(value) => self.set_fragment_extra_ms(value),
        }
    }
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self::natural()
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<PacingSettings>, Self::Error>;
    fn save(&mut self, settings: &PacingSettings) -> Result<(), Self::Error>;
}

/// Abstract reading-progress persistence backend, keyed by book id.
pub trait ProgressStore {
    type Error;

    fn load(&mut self, book_id: &str) -> Result<Option<Position>, Self::Error>;
    fn save(&mut self, book_id: &str, position: Position) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_to_documented_ranges() {
        let mut settings = PacingSettings::natural();

        settings.set_base_wpm(10);
        assert_eq!(settings.base_wpm(), 100);
        settings.set_base_wpm(u16::MAX);
        assert_eq!(settings.base_wpm(), 1500);

        settings.set_sentence_pause_ms(u16::MAX);
        assert_eq!(settings.sentence_pause_ms(), 2000);
        settings.set_paragraph_pause_ms(u16::MAX);
        assert_eq!(settings.paragraph_pause_ms(), 3000);
        settings.set_fragment_extra_ms(u16::MAX);
        assert_eq!(settings.fragment_extra_ms(), 1000);
    }

    #[test]
    fn apply_routes_and_clamps() {
        let mut settings = PacingSettings::uniform();

        settings.apply(SettingChange::BaseWpm(5000));
        settings.apply(SettingChange::ClausePauseMs(90));
        settings.apply(SettingChange::VeryLongExtraMs(1200));

        assert_eq!(settings.base_wpm(), 1500);
        assert_eq!(settings.clause_pause_ms(), 90);
        assert_eq!(settings.very_long_extra_ms(), 1000);
    }

    #[test]
    fn uniform_preset_zeroes_every_extra() {
        let uniform = PacingSettings::uniform();
        assert_eq!(uniform.sentence_pause_ms(), 0);
        assert_eq!(uniform.clause_pause_ms(), 0);
        assert_eq!(uniform.paragraph_pause_ms(), 0);
        assert_eq!(uniform.long_extra_ms(), 0);
        assert_eq!(uniform.very_long_extra_ms(), 0);
        assert_eq!(uniform.fragment_extra_ms(), 0);
    }

    #[test]
    fn presets_sit_inside_their_ranges() {
        for preset in [
            PacingSettings::natural(),
            PacingSettings::uniform(),
            PacingSettings::comprehension(),
        ] {
            assert!(BASE_WPM_RANGE.contains(&preset.base_wpm()));
            assert!(SENTENCE_PAUSE_RANGE.contains(&preset.sentence_pause_ms()));
            assert!(CLAUSE_PAUSE_RANGE.contains(&preset.clause_pause_ms()));
            assert!(PARAGRAPH_PAUSE_RANGE.contains(&preset.paragraph_pause_ms()));
        }
    }
}
