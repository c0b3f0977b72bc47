pub mod calendar;
pub mod gate;
pub mod sentiment;
pub mod stats;
