pub mod competition;
pub mod edition;
pub mod entry;
pub mod matches;
pub mod scoreboard;
pub mod stage;
