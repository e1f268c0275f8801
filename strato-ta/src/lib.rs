//! Relative Moving Average and Relative Strength Index over indexed series.
//!
//! Every function here is pure. Inputs are borrowed and a fresh [`Series`] is
//! returned, so calls can run concurrently on any thread without locking.

pub mod error;
pub mod ta;
pub mod vars;

pub use error::{Result, TaError};
pub use ta::ewm::EwmOptions;
pub use ta::rma::{rma, rma_by_name, rma_with, RmaConfig, Strategy};
pub use ta::rsi::{rsi, rsi_with, RsiConfig};
pub use vars::series::Series;
