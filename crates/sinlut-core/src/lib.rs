pub mod error;
pub mod validate;

pub mod quantize;
pub mod table;

pub use crate::table::{LutRequest, LutSample};
