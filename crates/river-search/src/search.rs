//! Uninformed search over puzzle states.
//!
//! The frontier is a single deque. New states are always pushed on the back;
//! breadth-first search takes from the front and depth-first search takes from
//! the back. A state is recorded as visited as soon as it leaves the frontier,
//! and candidates are only checked against those visited states, so the same
//! configuration may sit in the frontier more than once.

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::time::Instant;

use log::{debug, info, trace};
use serde::Serialize;

use crate::error::SearchError;
use crate::moves::{expand, is_valid};
use crate::state::State;

/// Which end of the frontier the next state is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// FIFO: shortest path in number of moves
    BreadthFirst,
    /// LIFO: no optimality guarantee
    DepthFirst,
}

impl SelectionMode {
    pub fn from_breadth_first(breadth_first: bool) -> Self {
        if breadth_first {
            SelectionMode::BreadthFirst
        } else {
            SelectionMode::DepthFirst
        }
    }
}

/// Parameters of a search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub cannibals: u32,
    pub missionaries: u32,
    pub mode: SelectionMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cannibals: 3,
            missionaries: 3,
            mode: SelectionMode::BreadthFirst,
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatistics {
    /// States taken off the frontier
    pub states_selected: usize,
    /// Successors produced by expansion, before filtering
    pub candidates_generated: usize,
    /// Successors dropped by the safety rule
    pub rejected_invalid: usize,
    /// Successors dropped because they were already visited
    pub rejected_visited: usize,
    /// Largest frontier length seen
    pub peak_frontier: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// A single search run over one puzzle size
pub struct Search {
    frontier: VecDeque<Rc<State>>,
    visited: HashSet<Rc<State>>,
    goal: State,
    mode: SelectionMode,
    cannibals: u32,
    missionaries: u32,
    stats: SearchStatistics,
}

impl Search {
    /// Start a search with every actor and the boat on the left bank.
    pub fn new(cannibals: u32, missionaries: u32, breadth_first: bool) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(Rc::new(State::root(cannibals, missionaries)));

        Self {
            frontier,
            visited: HashSet::new(),
            goal: State::goal(cannibals, missionaries),
            mode: SelectionMode::from_breadth_first(breadth_first),
            cannibals,
            missionaries,
            stats: SearchStatistics {
                peak_frontier: 1,
                ..Default::default()
            },
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            config.cannibals,
            config.missionaries,
            config.mode == SelectionMode::BreadthFirst,
        )
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Counters for the run so far
    pub fn statistics(&self) -> &SearchStatistics {
        &self.stats
    }

    /// Search until the goal is selected or the frontier is exhausted.
    ///
    /// The returned state carries its parents, so the solution is available
    /// through [`State::reconstruct_path`].
    ///
    /// Calling `run` again resumes from the frontier and visited set left by
    /// the previous call; a fresh `Search` is needed to repeat a run.
    pub fn run(&mut self) -> Result<State, SearchError> {
        let start_time = Instant::now();
        debug!(
            "searching {} cannibals, {} missionaries ({:?})",
            self.cannibals, self.missionaries, self.mode
        );

        let result = self.search_loop();
        self.stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

        match &result {
            Ok(goal) => info!(
                "solved in {} moves: {} states selected, {} visited, peak frontier {}",
                goal.depth(),
                self.stats.states_selected,
                self.visited.len(),
                self.stats.peak_frontier
            ),
            Err(_) => info!(
                "frontier exhausted after {} states selected, {} visited",
                self.stats.states_selected,
                self.visited.len()
            ),
        }
        result
    }

    fn search_loop(&mut self) -> Result<State, SearchError> {
        loop {
            let state = self.select_state().ok_or(SearchError::Unsolvable {
                cannibals: self.cannibals,
                missionaries: self.missionaries,
            })?;
            trace!("selected {}", state);

            if *state == self.goal {
                return Ok((*state).clone());
            }

            self.push_successors(&state);
        }
    }

    /// Append every safe, unvisited successor of `state` to the back of the
    /// frontier, in move order.
    fn push_successors(&mut self, state: &Rc<State>) {
        let candidates = expand(state);
        self.stats.candidates_generated += candidates.len();

        for candidate in candidates {
            if !is_valid(&candidate) {
                self.stats.rejected_invalid += 1;
            } else if self.visited.contains(&candidate) {
                self.stats.rejected_visited += 1;
            } else {
                self.frontier.push_back(Rc::new(candidate));
            }
        }
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    /// Take the next state off the frontier and mark it visited.
    fn select_state(&mut self) -> Option<Rc<State>> {
        let state = match self.mode {
            SelectionMode::BreadthFirst => self.frontier.pop_front(),
            SelectionMode::DepthFirst => self.frontier.pop_back(),
        }?;
        self.visited.insert(Rc::clone(&state));
        self.stats.states_selected += 1;
        Some(state)
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}
