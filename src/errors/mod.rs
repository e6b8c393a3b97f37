//! Error types and error handling for the scanner.
//!
//! This module defines the error types used during lexing. It includes:
//!
//! - Error structures with source span information
//! - Specific error variants for the ways a scan can fail
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
