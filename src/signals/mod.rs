pub mod engine;

pub use engine::SignalEngine;
