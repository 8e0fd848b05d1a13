//! Pool entries and their selection history.

use super::bump::Bump;

/// Weights and selection history of one pool entry.
///
/// This is the value a [`Bump`] policy reads and rewrites after every round.
/// Rounds are numbered from 1; `None` means "never".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionState {
    default_weight: i64,
    current_weight: i64,
    previous_weight: i64,
    last_selected_round: Option<u64>,
    selected_round: Option<u64>,
    round: Option<u64>,
}

impl OptionState {
    /// Fresh state with both weights at `weight` (clamped to zero).
    pub fn new(weight: i64) -> Self {
        let weight = weight.max(0);
        Self {
            default_weight: weight,
            current_weight: weight,
            previous_weight: 0,
            last_selected_round: None,
            selected_round: None,
            round: None,
        }
    }

    /// The baseline weight policies restore to.
    pub fn default_weight(&self) -> i64 {
        self.default_weight
    }

    /// Set the baseline weight. Negative values are ignored.
    pub fn set_default_weight(&mut self, weight: i64) {
        if weight >= 0 {
            self.default_weight = weight;
        }
    }

    /// The weight consulted when the next sampling table is built.
    pub fn current_weight(&self) -> i64 {
        self.current_weight
    }

    /// Set the current weight. Negative values are ignored and the last
    /// valid weight is kept.
    pub fn set_current_weight(&mut self, weight: i64) {
        if weight >= 0 {
            self.previous_weight = self.current_weight;
            self.current_weight = weight;
        }
    }

    /// The value the current weight held before its last change.
    pub fn previous_weight(&self) -> i64 {
        self.previous_weight
    }

    /// The round of the selection before the most recent one.
    pub fn last_selected_round(&self) -> Option<u64> {
        self.last_selected_round
    }

    /// The round this entry was most recently selected in.
    pub fn selected_round(&self) -> Option<u64> {
        self.selected_round
    }

    /// The generator round this entry last observed.
    pub fn round(&self) -> Option<u64> {
        self.round
    }

    /// True if the entry was picked in the round it last observed.
    pub fn was_selected_this_round(&self) -> bool {
        self.round.is_some() && self.round == self.selected_round
    }

    /// True if the two most recent selections happened in back-to-back rounds.
    pub fn was_selected_consecutively(&self) -> bool {
        match (self.last_selected_round, self.selected_round) {
            (Some(last), Some(current)) => last + 1 == current,
            _ => false,
        }
    }

    /// Record a selection in `round`, shifting the previous one into history.
    pub fn mark_selected(&mut self, round: u64) {
        self.last_selected_round = self.selected_round;
        self.selected_round = Some(round);
    }

    /// Record that the generator finished `round`.
    pub fn observe_round(&mut self, round: u64) {
        self.round = Some(round);
    }

    /// Lower the baseline weight by one, stopping at zero.
    pub fn decay(&mut self) {
        self.default_weight = (self.default_weight - 1).max(0);
    }
}

/// One selectable entry of a [`Generator`](super::Generator) pool.
#[derive(Debug, Clone)]
pub struct GeneratorOption<T> {
    state: OptionState,
    configured_weight: i64,
    payload: T,
    bump: Option<Bump>,
}

impl<T> GeneratorOption<T> {
    pub(crate) fn new(weight: i64, payload: T, bump: Option<Bump>) -> Self {
        Self {
            state: OptionState::new(weight),
            configured_weight: weight.max(0),
            payload,
            bump,
        }
    }

    /// The value handed back when this entry is drawn.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The feedback policy run after every round, if any.
    pub fn bump(&self) -> Option<&Bump> {
        self.bump.as_ref()
    }

    /// Weights and history as a policy sees them.
    pub fn state(&self) -> &OptionState {
        &self.state
    }

    /// The weight given at construction; [`reset`](Self::reset) restores it.
    pub fn configured_weight(&self) -> i64 {
        self.configured_weight
    }

    /// See [`OptionState::default_weight`].
    pub fn default_weight(&self) -> i64 {
        self.state.default_weight()
    }

    /// See [`OptionState::current_weight`].
    pub fn current_weight(&self) -> i64 {
        self.state.current_weight()
    }

    /// See [`OptionState::set_current_weight`].
    pub fn set_current_weight(&mut self, weight: i64) {
        self.state.set_current_weight(weight);
    }

    /// See [`OptionState::previous_weight`].
    pub fn previous_weight(&self) -> i64 {
        self.state.previous_weight()
    }

    /// See [`OptionState::was_selected_this_round`].
    pub fn was_selected_this_round(&self) -> bool {
        self.state.was_selected_this_round()
    }

    /// See [`OptionState::was_selected_consecutively`].
    pub fn was_selected_consecutively(&self) -> bool {
        self.state.was_selected_consecutively()
    }

    /// Record that the generator picked this entry in `round`.
    pub fn mark_selected(&mut self, round: u64) {
        self.state.mark_selected(round);
    }

    /// Observe the end of `round` and run the feedback policy.
    ///
    /// Called once per round for every entry, picked or not.
    pub fn advance_round(&mut self, round: u64) {
        self.state.observe_round(round);
        if let Some(bump) = &self.bump {
            self.state = bump.apply(self.state);
        }
    }

    /// Restore the configured weight and forget all history.
    pub fn reset(&mut self) {
        self.state = OptionState::new(self.configured_weight);
    }
}
