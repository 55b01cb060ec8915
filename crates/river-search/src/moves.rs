//! Boat moves, successor generation and the safety rule.
//!
//! The boat carries one or two actors from the bank it is moored at to the
//! other bank. A successor is only generated when the source bank holds
//! enough actors for the load; whether the result is safe is checked
//! separately by [`is_valid`].

use std::rc::Rc;

use serde::Serialize;
use smallvec::SmallVec;

use crate::state::State;

/// Successors of a single state. There are never more than five.
pub type Successors = SmallVec<[State; 5]>;

/// One boat load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    OneCannibal,
    OneMissionary,
    TwoCannibals,
    TwoMissionaries,
    CannibalAndMissionary,
}

impl Move {
    /// Every load, in the order successors are generated
    pub const ALL: [Move; 5] = [
        Move::OneCannibal,
        Move::OneMissionary,
        Move::TwoCannibals,
        Move::TwoMissionaries,
        Move::CannibalAndMissionary,
    ];

    /// Cannibals carried by this load
    pub fn cannibals(self) -> u32 {
        match self {
            Move::OneCannibal | Move::CannibalAndMissionary => 1,
            Move::TwoCannibals => 2,
            Move::OneMissionary | Move::TwoMissionaries => 0,
        }
    }

    /// Missionaries carried by this load
    pub fn missionaries(self) -> u32 {
        match self {
            Move::OneMissionary | Move::CannibalAndMissionary => 1,
            Move::TwoMissionaries => 2,
            Move::OneCannibal | Move::TwoCannibals => 0,
        }
    }
}

/// Move the boat across with `load`, starting from `state`.
///
/// Returns `None` if the bank the boat leaves from lacks the actors.
pub fn apply(state: &Rc<State>, load: Move) -> Option<State> {
    let (cannibals, missionaries) = (load.cannibals(), load.missionaries());
    let (available_cannibals, available_missionaries) = state.boat_bank();
    if available_cannibals < cannibals || available_missionaries < missionaries {
        return None;
    }

    let parent = Some(Rc::clone(state));
    let next = if state.boat_on_left {
        State::new(
            state.cannibals_left - cannibals,
            state.cannibals_right + cannibals,
            state.missionaries_left - missionaries,
            state.missionaries_right + missionaries,
            false,
            parent,
        )
    } else {
        State::new(
            state.cannibals_left + cannibals,
            state.cannibals_right - cannibals,
            state.missionaries_left + missionaries,
            state.missionaries_right - missionaries,
            true,
            parent,
        )
    };
    Some(next)
}

/// All states reachable from `state` in one boat move, valid or not.
pub fn expand(state: &Rc<State>) -> Successors {
    Move::ALL
        .iter()
        .filter_map(|&load| apply(state, load))
        .collect()
}

/// Cannibals may never outnumber missionaries on a bank that has any
/// missionaries. Both banks are checked wherever the boat is.
pub fn is_valid(state: &State) -> bool {
    bank_is_safe(state.cannibals_left, state.missionaries_left)
        && bank_is_safe(state.cannibals_right, state.missionaries_right)
}

fn bank_is_safe(cannibals: u32, missionaries: u32) -> bool {
    missionaries == 0 || cannibals <= missionaries
}

/// Identify the load that turns `from` into `to`.
///
/// Returns `None` when the boat does not switch banks, the totals differ, or
/// the difference is not one of the five loads taken from the boat's bank.
pub fn move_between(from: &State, to: &State) -> Option<Move> {
    if from.boat_on_left == to.boat_on_left
        || from.total_cannibals() != to.total_cannibals()
        || from.total_missionaries() != to.total_missionaries()
    {
        return None;
    }

    // Actors leave the bank the boat started on.
    let (cannibals, missionaries) = if from.boat_on_left {
        (
            from.cannibals_left.checked_sub(to.cannibals_left)?,
            from.missionaries_left.checked_sub(to.missionaries_left)?,
        )
    } else {
        (
            from.cannibals_right.checked_sub(to.cannibals_right)?,
            from.missionaries_right.checked_sub(to.missionaries_right)?,
        )
    };

    Move::ALL
        .iter()
        .copied()
        .find(|load| load.cannibals() == cannibals && load.missionaries() == missionaries)
}
