/// Aggregated view of test progress, useful for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    /// 1-based index of the card being shown.
    pub position: usize,
    /// Cards whose answer has not been revealed yet.
    pub remaining: usize,
    pub revealed: bool,
}
