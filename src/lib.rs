//! # Closures and Private State
//!
//! Runnable patterns for hiding state behind a factory: the factory call
//! creates the state, and only the functions it hands back can reach it.
//!
//! ## Patterns Covered
//!
//! 1. **Counter factory** - a single closure over one integer
//! 2. **Registry factory** - a set of accessors over one ordered record list
//!
//! Each pattern comes in two shapes: the literal closure form
//! ([`counter::create_counter`], [`registry::manage_animals`]) and the struct
//! form with private fields ([`counter::Counter`], [`registry::Registry`]).
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin closure_demo
//! cargo run --bin closure_demo -- --config demo.toml --log-level debug
//! ```

pub mod config;
pub mod counter;
pub mod demo;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::{DemoConfig, VerseUpdate};
pub use counter::{create_counter, Counter};
pub use error::{ConfigError, DemoError, RegistryError};
pub use registry::{manage_animals, Animal, AnimalKeeper, Registry};
