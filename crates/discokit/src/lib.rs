#![doc = include_str!("../README.md")]

mod embed;
mod error;
mod mention;
#[cfg(feature = "serde")]
mod serde;
mod snowflake;
mod time;

pub use crate::embed::*;
pub use crate::error::*;
pub use crate::mention::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::snowflake::*;
pub use crate::time::*;
