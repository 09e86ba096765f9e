//! Grocer core: frequency table and the pure menu state machine.
mod choice;
mod effect;
mod msg;
mod state;
mod table;
mod update;
mod view_model;

pub use choice::{parse_choice, ChoiceError, MenuChoice};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{Mode, Session};
pub use table::FrequencyTable;
pub use update::update;
pub use view_model::SessionView;
