//! Command implementations for the OPFL scorer CLI

pub mod common;
pub mod score_week;

#[cfg(test)]
mod tests;
