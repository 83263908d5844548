// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate prettytable;

pub mod config;
pub mod data;
pub mod formatter;
pub mod layout;
pub mod puzzle;
pub mod search;
pub mod solver;
pub mod state;
pub mod warehouse;

mod fs;
mod heuristic;
mod parser;
mod reach;
mod taboo;
mod validator;
mod vec2d;

pub use crate::parser::ParserErr;

use std::error::Error;

use crate::warehouse::Warehouse;

pub trait LoadWarehouse {
    fn load_warehouse(&self) -> Result<Warehouse, Box<dyn Error>>;
}
