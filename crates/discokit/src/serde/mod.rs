mod mention;
mod snowflake;

pub use snowflake::*;
