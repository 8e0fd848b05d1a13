//! Feedback policies that reshape an option's weight after each round.
//!
//! Every policy is a pure function from one [`OptionState`] to the next, so it
//! can be exercised without a generator:
//!
//! ```
//! use tb_core::{Bump, OptionState};
//!
//! let mut state = OptionState::new(5);
//! state.mark_selected(1);
//! state.observe_round(1);
//! let state = Bump::TempDrop { drop: 1 }.apply(state);
//! assert_eq!(state.current_weight(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::option::OptionState;

/// A weight feedback policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bump {
    /// Each selection lowers both the baseline and current weight by one.
    Decay,
    /// A selection drops the weight to `drop` for the next round only.
    TempDrop {
        /// Weight used for the round after a selection.
        drop: i64,
    },
    /// Like `TempDrop`, but only after two selections in a row.
    TempDoubleDrop {
        /// Weight used for the round after a back-to-back selection.
        drop: i64,
    },
    /// `Decay` combined with `TempDoubleDrop`.
    DecayDoubleDrop {
        /// Weight used for the round after a back-to-back selection.
        drop: i64,
    },
    /// A caller-supplied policy.
    #[serde(skip)]
    Custom(fn(OptionState) -> OptionState),
}

impl Bump {
    /// Compute the state for the next round.
    pub fn apply(&self, state: OptionState) -> OptionState {
        let mut next = state;
        let selected = state.was_selected_this_round();
        match *self {
            Self::Decay => {
                if selected {
                    next.decay();
                    next.set_current_weight(state.current_weight() - 1);
                }
            }
            Self::TempDrop { drop } => {
                if selected {
                    next.set_current_weight(drop);
                } else {
                    next.set_current_weight(next.default_weight());
                }
            }
            Self::TempDoubleDrop { drop } => {
                if selected && state.was_selected_consecutively() {
                    next.set_current_weight(drop);
                } else {
                    next.set_current_weight(next.default_weight());
                }
            }
            Self::DecayDoubleDrop { drop } => {
                if selected {
                    next.decay();
                }
                if selected && state.was_selected_consecutively() {
                    next.set_current_weight(drop);
                } else {
                    next.set_current_weight(next.default_weight());
                }
            }
            Self::Custom(policy) => next = policy(state),
        }
        next
    }

    /// Short name used in listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decay => "decay",
            Self::TempDrop { .. } => "temp_drop",
            Self::TempDoubleDrop { .. } => "temp_double_drop",
            Self::DecayDoubleDrop { .. } => "decay_double_drop",
            Self::Custom(_) => "custom",
        }
    }
}

impl std::fmt::Display for Bump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TempDrop { drop }
            | Self::TempDoubleDrop { drop }
            | Self::DecayDoubleDrop { drop } => write!(f, "{}({drop})", self.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one round on `state`, selecting it if `picked`.
    fn round(bump: Bump, mut state: OptionState, index: u64, picked: bool) -> OptionState {
        if picked {
            state.mark_selected(index);
        }
        state.observe_round(index);
        bump.apply(state)
    }

    #[test]
    fn decay_lowers_both_weights_on_pick() {
        let state = round(Bump::Decay, OptionState::new(3), 1, true);
        assert_eq!(state.default_weight(), 2);
        assert_eq!(state.current_weight(), 2);

        let state = round(Bump::Decay, state, 2, false);
        assert_eq!(state.current_weight(), 2);
    }

    #[test]
    fn decay_never_goes_negative() {
        let mut state = OptionState::new(1);
        for r in 1..=4 {
            state = round(Bump::Decay, state, r, true);
        }
        assert_eq!(state.default_weight(), 0);
        assert_eq!(state.current_weight(), 0);
    }

    #[test]
    fn temp_drop_restores_next_round() {
        let bump = Bump::TempDrop { drop: 1 };
        let state = round(bump, OptionState::new(6), 1, true);
        assert_eq!(state.current_weight(), 1);
        assert_eq!(state.previous_weight(), 6);

        let state = round(bump, state, 2, false);
        assert_eq!(state.current_weight(), 6);
    }

    #[test]
    fn temp_double_drop_needs_consecutive_picks() {
        let bump = Bump::TempDoubleDrop { drop: 0 };
        let state = round(bump, OptionState::new(4), 1, true);
        assert_eq!(state.current_weight(), 4);

        let state = round(bump, state, 2, true);
        assert_eq!(state.current_weight(), 0);

        let state = round(bump, state, 3, false);
        assert_eq!(state.current_weight(), 4);

        // a pick after a gap restores the default
        let state = round(bump, state, 4, false);
        let state = round(bump, state, 5, true);
        assert_eq!(state.current_weight(), 4);
    }

    #[test]
    fn decay_double_drop_compounds() {
        let bump = Bump::DecayDoubleDrop { drop: 1 };
        let state = round(bump, OptionState::new(5), 1, true);
        assert_eq!(state.default_weight(), 4);
        assert_eq!(state.current_weight(), 4);

        let state = round(bump, state, 2, true);
        assert_eq!(state.default_weight(), 3);
        assert_eq!(state.current_weight(), 1);

        let state = round(bump, state, 3, false);
        assert_eq!(state.default_weight(), 3);
        assert_eq!(state.current_weight(), 3);
    }

    #[test]
    fn custom_policy_runs() {
        fn double(mut state: OptionState) -> OptionState {
            state.set_current_weight(state.current_weight() * 2);
            state
        }
        let state = round(Bump::Custom(double), OptionState::new(3), 1, false);
        assert_eq!(state.current_weight(), 6);
    }

    #[test]
    fn serde_forms() {
        let bump: Bump = serde_json::from_str(r#"{"kind":"temp_drop","drop":2}"#).unwrap();
        assert!(matches!(bump, Bump::TempDrop { drop: 2 }));
        let bump: Bump = serde_json::from_str(r#"{"kind":"decay"}"#).unwrap();
        assert!(matches!(bump, Bump::Decay));
        assert!(serde_json::from_str::<Bump>(r#"{"kind":"custom"}"#).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Bump::Decay.to_string(), "decay");
        assert_eq!(Bump::DecayDoubleDrop { drop: 2 }.to_string(), "decay_double_drop(2)");
    }
}
