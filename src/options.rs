//! Game configuration options.

/// Who leads once every player has finished exchanging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum FirstTurn {
    /// The player holding the lowest face-up card after the deal.
    #[default]
    OpeningPlayer,
    /// The first seat at the table.
    FirstSeat,
}

/// Configuration options for a game of Threes.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use threes::{FirstTurn, GameOptions};
///
/// let options = GameOptions::default()
///     .with_zone_size(3)
///     .with_first_turn(FirstTurn::FirstSeat)
///     .with_allow_pass(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each zone, and the size hands are refilled to.
    pub zone_size: usize,
    /// Who leads after the exchange phase.
    pub first_turn: FirstTurn,
    /// Whether a player may pass without playing or picking up.
    pub allow_pass: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            zone_size: 3,
            first_turn: FirstTurn::OpeningPlayer,
            allow_pass: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards per zone.
    ///
    /// # Example
    ///
    /// ```
    /// use threes::GameOptions;
    ///
    /// let options = GameOptions::default().with_zone_size(4);
    /// assert_eq!(options.zone_size, 4);
    /// ```
    ///
    /// A zone size of zero is rejected when the cards are dealt.
    #[must_use]
    pub const fn with_zone_size(mut self, zone_size: usize) -> Self {
        self.zone_size = zone_size;
        self
    }

    /// Sets who leads after the exchange phase.
    ///
    /// # Example
    ///
    /// ```
    /// use threes::{FirstTurn, GameOptions};
    ///
    /// let options = GameOptions::default().with_first_turn(FirstTurn::FirstSeat);
    /// assert_eq!(options.first_turn, FirstTurn::FirstSeat);
    /// ```
    #[must_use]
    pub const fn with_first_turn(mut self, first_turn: FirstTurn) -> Self {
        self.first_turn = first_turn;
        self
    }

    /// Sets whether voluntary passing is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use threes::GameOptions;
    ///
    /// let options = GameOptions::default().with_allow_pass(true);
    /// assert!(options.allow_pass);
    /// ```
    #[must_use]
    pub const fn with_allow_pass(mut self, allowed: bool) -> Self {
        self.allow_pass = allowed;
        self
    }

    /// Cards needed to deal a full table of `players`.
    #[must_use]
    pub const fn cards_needed(&self, players: usize) -> usize {
        players * self.zone_size * 3
    }
}
