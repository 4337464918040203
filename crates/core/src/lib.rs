//! Domain types and validation rules shared by the Daywise crates.
//!
//! Nothing in here touches the database or HTTP; the rules are pure
//! functions returning [`error::CoreError`].

pub mod category;
pub mod error;
pub mod task;
pub mod types;
