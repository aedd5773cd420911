//! Casey - Absence Management Dashboard

pub mod activity;
pub mod core;
pub mod query;
pub mod roster;
pub mod ui;
