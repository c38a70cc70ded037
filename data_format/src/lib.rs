//! Descriptive statistics over one column of a comma separated text file.
mod calculator;
mod error;
mod finite_f64;
mod summary;
mod table;

pub use calculator::{StatisticCalculator, ID_COLUMN, NAME_COLUMN};
pub use error::StatsError;
pub use finite_f64::FiniteF64;
pub use summary::{Identity, Summary};
pub use table::{Table, DELIMITER};
