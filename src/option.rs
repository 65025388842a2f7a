//! Main module for the option lexer functionality

pub mod formatting;
pub mod lexing;
pub mod testing;
pub mod token;
