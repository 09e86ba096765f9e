use crate::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub mode: Mode,
    pub distinct_items: usize,
    pub total_items: u64,
    pub completed_cycles: u64,
}
