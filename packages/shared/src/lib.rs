//! Utilities shared by the Spark relay server and client.

pub mod logger;
pub mod time;
