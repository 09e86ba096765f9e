use crate::view_model::SessionView;
use crate::FrequencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    AwaitingChoice,
    AwaitingItem,
    Exited,
}

/// Menu session over an immutable frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    table: FrequencyTable,
    mode: Mode,
    completed_cycles: u64,
}

impl Session {
    pub fn new(table: FrequencyTable) -> Self {
        Self {
            table,
            mode: Mode::AwaitingChoice,
            completed_cycles: 0,
        }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            mode: self.mode,
            distinct_items: self.table.len(),
            total_items: self.table.total(),
            completed_cycles: self.completed_cycles,
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn complete_cycle(&mut self) {
        self.completed_cycles += 1;
    }
}
