//! Response affordances attached to script states.
//!
//! An `OptionTag` tells the presentation layer which buttons to render for
//! a state. The engines carry it around but never branch on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed catalog of response affordances a state can present.
///
/// # Example
///
/// ```rust
/// use talkstate::core::OptionTag;
///
/// assert!(OptionTag::SelectableDistractor.is_selectable());
/// assert!(OptionTag::Close.closes());
/// assert!(!OptionTag::Next.closes());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionTag {
    /// Nothing to show; the conversation ends without a button.
    None,
    /// A single close button.
    #[default]
    Close,
    /// A single "next" button continuing the current state.
    Next,
    /// A list of talk topics.
    SelectableTalk,
    /// A list of answers, each leading somewhere else.
    SelectableDistractor,
    /// Answer list styled for beauty-salon npcs.
    SelectableBeauty,
    /// Accept / decline a quest.
    QuestAccept,
    /// Turn in a finished quest.
    QuestComplete,
    /// Report progress on an active quest.
    QuestProgress,
    ChangeJob,
    PenaltyResolve,
    TakeBoat,
    Roulette,
}

impl OptionTag {
    /// Every tag, in declaration order.
    pub const ALL: [OptionTag; 13] = [
        OptionTag::None,
        OptionTag::Close,
        OptionTag::Next,
        OptionTag::SelectableTalk,
        OptionTag::SelectableDistractor,
        OptionTag::SelectableBeauty,
        OptionTag::QuestAccept,
        OptionTag::QuestComplete,
        OptionTag::QuestProgress,
        OptionTag::ChangeJob,
        OptionTag::PenaltyResolve,
        OptionTag::TakeBoat,
        OptionTag::Roulette,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Close => "Close",
            Self::Next => "Next",
            Self::SelectableTalk => "SelectableTalk",
            Self::SelectableDistractor => "SelectableDistractor",
            Self::SelectableBeauty => "SelectableBeauty",
            Self::QuestAccept => "QuestAccept",
            Self::QuestComplete => "QuestComplete",
            Self::QuestProgress => "QuestProgress",
            Self::ChangeJob => "ChangeJob",
            Self::PenaltyResolve => "PenaltyResolve",
            Self::TakeBoat => "TakeBoat",
            Self::Roulette => "Roulette",
        }
    }

    /// True when the affordance asks the player for a pick.
    pub fn is_selectable(&self) -> bool {
        matches!(
            self,
            Self::SelectableTalk | Self::SelectableDistractor | Self::SelectableBeauty
        )
    }

    /// True when the affordance ends the conversation.
    pub fn closes(&self) -> bool {
        matches!(self, Self::None | Self::Close)
    }
}

impl fmt::Display for OptionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_close() {
        assert_eq!(OptionTag::default(), OptionTag::Close);
    }

    #[test]
    fn selectable_tags_are_exactly_three() {
        let selectable: Vec<_> = OptionTag::ALL
            .iter()
            .filter(|tag| tag.is_selectable())
            .collect();
        assert_eq!(selectable.len(), 3);
        assert!(!OptionTag::QuestAccept.is_selectable());
    }

    #[test]
    fn closing_tags() {
        assert!(OptionTag::None.closes());
        assert!(OptionTag::Close.closes());
        assert!(!OptionTag::TakeBoat.closes());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(OptionTag::QuestProgress.to_string(), "QuestProgress");
    }

    #[test]
    fn option_tag_serializes_correctly() {
        let json = serde_json::to_string(&OptionTag::SelectableBeauty).unwrap();
        assert_eq!(json, "\"SelectableBeauty\"");
        let back: OptionTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OptionTag::SelectableBeauty);
    }
}
