pub mod match_view;
pub mod rotation;
pub mod schedule;
pub mod scorers;
pub mod standings;
