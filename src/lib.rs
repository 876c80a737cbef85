extern crate csv;
extern crate getopts;
extern crate pad;
extern crate rand;
extern crate serde;
extern crate time;

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod generators;
pub mod logger;
pub mod output;
pub mod schema;
pub mod zipcodes;

pub use error::Error;
