pub mod config;
pub mod generate;
pub mod harness;
pub mod input;
