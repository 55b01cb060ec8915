/// Errors returned by a search run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The frontier ran dry before the goal was reached.
    #[error("The problem has no solution")]
    Unsolvable { cannibals: u32, missionaries: u32 },
}
