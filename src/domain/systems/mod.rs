// Frame-level rules that operate on several actors at once.

pub mod collision;
pub mod combat;
pub mod terminal;

pub use terminal::{DeathCause, TerminalEvent};
