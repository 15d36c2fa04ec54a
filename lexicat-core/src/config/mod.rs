//! Configuration for the classification engine.
//! TOML-based; every knob is optional with an `effective_*` accessor.

pub mod engine_config;

pub use engine_config::EngineConfig;
