//! Core types and logic for riderseed.
//!
//! This crate generates synthetic rider documents and writes them to a
//! MongoDB collection in fixed-size batches. The `riderseed` binary is a thin
//! CLI around it.
//!
//! # Architecture
//! - [`generator`]: random rider construction
//! - [`seeder`]: the sequential generate-and-batch loop
//! - [`sink`]: the [`DocumentSink`] seam plus an in-memory implementation
//! - [`mongo`]: the MongoDB-backed sink
//!
//! # Example
//! ```rust
//! use riderseed_core::{MemorySink, RiderGenerator, Seeder};
//!
//! # tokio_test_block(async {
//! let mut sink = MemorySink::counting();
//! let mut seeder = Seeder::new(RiderGenerator::from_seed(Some(1)), 100).unwrap();
//! let report = seeder.run(&mut sink, 250).await.unwrap();
//!
//! assert_eq!(report.inserted, 250);
//! assert_eq!(sink.batch_sizes(), &[100, 100, 50]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod mongo;
pub mod seeder;
pub mod sink;

// Re-export commonly used types
pub use config::SeedConfig;
pub use error::{Result, SeedError};
pub use generator::RiderGenerator;
pub use logging::init_logging;
pub use models::{Coordinates, Location, Ride, Rider};
pub use mongo::MongoSink;
pub use seeder::{SeedReport, Seeder};
pub use sink::{DocumentSink, MemorySink};
