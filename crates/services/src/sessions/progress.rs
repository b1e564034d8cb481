/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub current: u32,
    pub max: u32,
    pub answered: usize,
    pub correct: usize,
    pub remaining: u32,
    pub is_complete: bool,
}
