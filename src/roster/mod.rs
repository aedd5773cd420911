//! Roster module - the in-memory employee dataset

pub mod catalog;
pub mod employee;

pub use catalog::Roster;
pub use employee::EmployeeRecord;
