//! Main module for tinymarkup library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod inference;
pub mod lexing;
pub mod parsing;
pub mod samples;
