pub mod config;
pub mod error;
pub mod types;

pub use config::CaseyConfig;
pub use error::{CaseyError, Result};
pub use types::{Department, EmployeeId, RiskLevel};
