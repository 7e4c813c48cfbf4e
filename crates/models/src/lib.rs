pub mod chart;
pub mod coerce;
pub mod directory;
pub mod form;
pub mod input;
pub mod statistics;
pub mod student;
