//! osctrader — oscillator-driven trading strategy backtester.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`]. The [`cli`] module wires them
//! together for the binary.

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
