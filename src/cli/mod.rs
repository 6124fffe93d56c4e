//! Command line parsing for the terminal driver

pub mod args;
