//! Embedded source notes
//!
//! The notes are hand transcriptions of the printed system card. They use ad
//! hoc bridge shorthand with no stable grammar, so the transcription into
//! structured records is done by hand in [`crate::sections`],
//! [`crate::sequences`] and [`crate::definitions`]; the text travels along
//! as the record of what was transcribed.

/// 1 Club opening and the responses to it
pub const CLUB_OPENING: &str = include_str!("../notes/club_opening.txt");

/// Opener's rebids after 1c-1d
pub const OPENER_REBIDS: &str = include_str!("../notes/opener_rebids.txt");

/// Convention definitions
pub const DEFINITIONS: &str = include_str!("../notes/definitions.txt");

/// The three note blocks fed to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceNotes<'a> {
    /// Section notes
    pub club_opening: &'a str,
    /// Sequence notes
    pub opener_rebids: &'a str,
    /// Definition notes
    pub definitions: &'a str,
}

impl SourceNotes<'static> {
    /// Notes compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            club_opening: CLUB_OPENING,
            opener_rebids: OPENER_REBIDS,
            definitions: DEFINITIONS,
        }
    }
}

impl Default for SourceNotes<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}
