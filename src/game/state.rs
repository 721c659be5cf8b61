//! Game phase.

/// Game phase. Phases only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Players seated, cards not yet dealt.
    Setup,
    /// Each player in turn may swap cards between hand and face-up.
    Exchange,
    /// Players take turns playing onto the discard pile.
    Playing,
    /// At most one player still holds cards.
    GameOver,
}
