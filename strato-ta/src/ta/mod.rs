pub mod ewm;
pub mod rma;
pub mod rsi;
pub mod sma;
