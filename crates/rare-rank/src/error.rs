/// Errors produced when configuring a ranking.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("k must be a positive integer (got {0})")]
    InvalidCapacity(usize),
}
