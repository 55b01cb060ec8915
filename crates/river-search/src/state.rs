//! World configuration for the missionaries and cannibals puzzle.
//!
//! A [`State`] is an immutable snapshot of both river banks plus the boat.
//! Each state produced by expansion keeps a shared handle to the state it was
//! generated from, so a path can be rebuilt once the goal is reached. The
//! parent never takes part in equality or hashing: two states reached through
//! different move sequences are the same state.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use serde::Serialize;

/// One configuration of the puzzle
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub cannibals_left: u32,
    pub cannibals_right: u32,
    pub missionaries_left: u32,
    pub missionaries_right: u32,
    pub boat_on_left: bool,
    #[serde(skip)]
    parent: Option<Rc<State>>,
}

impl State {
    /// Create a state. No validity check is performed here; see
    /// [`crate::moves::is_valid`].
    pub fn new(
        cannibals_left: u32,
        cannibals_right: u32,
        missionaries_left: u32,
        missionaries_right: u32,
        boat_on_left: bool,
        parent: Option<Rc<State>>,
    ) -> Self {
        Self {
            cannibals_left,
            cannibals_right,
            missionaries_left,
            missionaries_right,
            boat_on_left,
            parent,
        }
    }

    /// Everyone and the boat on the left bank
    pub fn root(cannibals: u32, missionaries: u32) -> Self {
        Self::new(cannibals, 0, missionaries, 0, true, None)
    }

    /// Everyone and the boat on the right bank
    pub fn goal(cannibals: u32, missionaries: u32) -> Self {
        Self::new(0, cannibals, 0, missionaries, false, None)
    }

    pub fn parent(&self) -> Option<&State> {
        self.parent.as_deref()
    }

    /// Number of boat moves between the root and this state
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Walk from this state back to the root, this state first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// The chain of states from the root to this state.
    ///
    /// The returned path has one more entry than the number of moves made.
    pub fn reconstruct_path(&self) -> Vec<State> {
        let mut path: Vec<State> = self.ancestors().cloned().collect();
        path.reverse();
        path
    }

    /// Counts on the bank the boat is currently moored at, as
    /// `(cannibals, missionaries)`.
    pub fn boat_bank(&self) -> (u32, u32) {
        if self.boat_on_left {
            (self.cannibals_left, self.missionaries_left)
        } else {
            (self.cannibals_right, self.missionaries_right)
        }
    }

    pub fn total_cannibals(&self) -> u32 {
        self.cannibals_left + self.cannibals_right
    }

    pub fn total_missionaries(&self) -> u32 {
        self.missionaries_left + self.missionaries_right
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cannibals_left == other.cannibals_left
            && self.cannibals_right == other.cannibals_right
            && self.missionaries_left == other.missionaries_left
            && self.missionaries_right == other.missionaries_right
            && self.boat_on_left == other.boat_on_left
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cannibals_left.hash(state);
        self.cannibals_right.hash(state);
        self.missionaries_left.hash(state);
        self.missionaries_right.hash(state);
        self.boat_on_left.hash(state);
    }
}

// Unlinks the parent chain one state at a time. The derived drop would recurse
// once per ancestor and overflow the stack on long solutions.
impl Drop for State {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(rc) = parent {
            match Rc::try_unwrap(rc) {
                Ok(mut state) => parent = state.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("cannibals_left", &self.cannibals_left)
            .field("cannibals_right", &self.cannibals_right)
            .field("missionaries_left", &self.missionaries_left)
            .field("missionaries_right", &self.missionaries_right)
            .field("boat_on_left", &self.boat_on_left)
            .field("depth", &self.depth())
            .finish()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left_boat, right_boat) = if self.boat_on_left {
            ("[boat]", "      ")
        } else {
            ("      ", "[boat]")
        };
        write!(
            f,
            "left: {}C {}M {} ~~ {} right: {}C {}M",
            self.cannibals_left,
            self.missionaries_left,
            left_boat,
            right_boat,
            self.cannibals_right,
            self.missionaries_right
        )
    }
}

/// Iterator over a state and its parents, produced by [`State::ancestors`]
pub struct Ancestors<'a> {
    next: Option<&'a State>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a State;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn chain() -> State {
        let root = Rc::new(State::root(2, 2));
        let mid = Rc::new(State::new(1, 1, 1, 1, false, Some(Rc::clone(&root))));
        State::new(2, 0, 1, 1, true, Some(mid))
    }

    #[test]
    fn test_equality_ignores_parent() {
        let orphan = State::new(2, 0, 1, 1, true, None);
        let child = chain();
        assert_eq!(orphan, child);

        let mut seen = HashSet::new();
        seen.insert(orphan);
        assert!(seen.contains(&child));
    }

    #[test]
    fn test_equality_checks_every_field() {
        let base = State::new(1, 2, 3, 4, true, None);
        assert_ne!(base, State::new(0, 2, 3, 4, true, None));
        assert_ne!(base, State::new(1, 1, 3, 4, true, None));
        assert_ne!(base, State::new(1, 2, 2, 4, true, None));
        assert_ne!(base, State::new(1, 2, 3, 3, true, None));
        assert_ne!(base, State::new(1, 2, 3, 4, false, None));
    }

    #[test]
    fn test_reconstruct_path_is_root_first() {
        let end = chain();
        let path = end.reconstruct_path();

        assert_eq!(path.len(), 3);
        assert_eq!(path[0], State::root(2, 2));
        assert_eq!(path[1], State::new(1, 1, 1, 1, false, None));
        assert_eq!(path[2], end);
        assert!(path[0].parent().is_none());
    }

    #[test]
    fn test_ancestors_are_goal_first() {
        let end = chain();
        let order: Vec<&State> = end.ancestors().collect();
        assert_eq!(order.len(), 3);
        assert_eq!(*order[0], end);
        assert_eq!(*order[2], State::root(2, 2));
        assert_eq!(end.depth(), 2);
    }

    #[test]
    fn test_root_path_has_single_entry() {
        let root = State::root(3, 3);
        assert_eq!(root.reconstruct_path(), vec![State::root(3, 3)]);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_goal_layout() {
        let goal = State::goal(3, 2);
        assert_eq!(goal.cannibals_left, 0);
        assert_eq!(goal.missionaries_left, 0);
        assert_eq!(goal.cannibals_right, 3);
        assert_eq!(goal.missionaries_right, 2);
        assert!(!goal.boat_on_left);
        assert_eq!(goal.boat_bank(), (3, 2));
    }

    fn long_chain(length: u32) -> State {
        let mut current = Rc::new(State::root(length, 0));
        for step in 1..length {
            let next = State::new(length - step, step, 0, 0, step % 2 == 0, Some(current));
            current = Rc::new(next);
        }
        State::new(0, length, 0, 0, false, Some(current))
    }

    #[test]
    fn test_dropping_long_chain() {
        let end = long_chain(1_000_000);
        assert_eq!(end.depth(), 1_000_000);
        drop(end);
    }

    #[test]
    fn test_drop_keeps_shared_ancestors() {
        let root = Rc::new(State::root(1, 1));
        let child = State::new(0, 1, 1, 0, false, Some(Rc::clone(&root)));
        drop(child);
        assert_eq!(Rc::strong_count(&root), 1);
        assert_eq!(*root, State::root(1, 1));
    }

    #[test]
    fn test_debug_omits_parent_chain() {
        let end = long_chain(1_000_000);
        let text = format!("{:?}", end);
        assert!(text.contains("depth: 1000000"));
        assert!(!text.contains("parent"));
    }

    #[test]
    fn test_serialize_skips_parent() {
        let json = serde_json::to_value(chain()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cannibalsLeft": 2,
                "cannibalsRight": 0,
                "missionariesLeft": 1,
                "missionariesRight": 1,
                "boatOnLeft": true,
            })
        );
    }
}
