pub mod competition;
pub mod edition;
pub mod entry;
pub mod highlight;
pub mod match_event;
pub mod matches;
pub mod stage;
pub mod theme;

pub use competition::Competition;
pub use edition::{Edition, EditionFormat, EditionStatus};
pub use entry::{Entry, EntryStatus};
pub use highlight::Highlight;
pub use match_event::{MatchEvent, MatchEventType};
pub use matches::{Match, MatchStatus};
pub use stage::{Group, Stage, StageKind};
pub use theme::ThemeConfig;
