//! Request validation, memoization and the parallel calculation driver.
mod budget;
mod calculator;
mod memo;
mod odds;
mod request;
mod situation;

pub use budget::*;
pub use calculator::*;
pub use memo::*;
pub use odds::*;
pub use request::*;
pub use situation::*;
