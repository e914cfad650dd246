//! Game configuration options.

/// Configuration options for a game.
///
/// The rules themselves are fixed (see [`crate::rules`]); options only
/// control how the deck is prepared.
///
/// ```
/// use goboom::GameOptions;
///
/// let options = GameOptions::default().with_shuffle(false);
/// assert!(!options.shuffle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether to shuffle the deck before dealing.
    ///
    /// With shuffling off, the game is dealt from the standard deck order.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { shuffle: true }
    }
}

impl GameOptions {
    /// Sets whether the deck is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use goboom::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert_eq!(options.shuffle, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
