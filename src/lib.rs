//! Technical indicator and signal engine for OHLCV price series.
//!
//! The core consumes an already-materialized candle series plus a parameter
//! configuration and produces derived indicator series, structural
//! support/resistance levels, a discrete signal summary, and a position-size
//! recommendation. Fetching quotes and news lives behind the provider traits
//! in [`services`]; nothing in the core performs I/O.

pub mod analysis;
pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod risk;
pub mod screener;
pub mod services;
pub mod signals;
