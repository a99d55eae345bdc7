//! The generate-and-insert loop.
//!
//! Documents are generated one at a time and buffered; a full buffer is
//! handed to the sink and the remainder is flushed at the end. There is no
//! concurrency, no retry and no resume: the first sink error ends the run.

use crate::Result;
use crate::error::SeedError;
use crate::generator::RiderGenerator;
use crate::sink::DocumentSink;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a completed seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Documents requested
    pub requested: u64,
    /// Documents the sink reported as inserted
    pub inserted: u64,
    /// Insert calls made
    pub batches: u64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl SeedReport {
    /// Documents inserted per second, or 0 for an instantaneous run.
    pub fn docs_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            #[allow(clippy::cast_precision_loss)]
            let inserted = self.inserted as f64;
            inserted / secs
        } else {
            0.0
        }
    }
}

/// Drives a [`RiderGenerator`] into a [`DocumentSink`] in fixed-size batches.
#[derive(Debug)]
pub struct Seeder<R> {
    generator: RiderGenerator<R>,
    batch_size: usize,
}

impl<R: Rng + Send> Seeder<R> {
    /// Creates a seeder.
    ///
    /// # Errors
    /// Returns a configuration error when `batch_size` is 0
    pub fn new(generator: RiderGenerator<R>, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(SeedError::configuration(
                "batch size must be greater than 0",
            ));
        }
        Ok(Self {
            generator,
            batch_size,
        })
    }

    /// Generates `documents` riders and writes them to `sink`.
    ///
    /// Every batch holds exactly `batch_size` documents except possibly the
    /// last; an empty batch is never sent, so `documents == 0` performs no
    /// insert at all.
    ///
    /// # Errors
    /// Returns the first sink error unchanged.
    pub async fn run<S>(&mut self, sink: &mut S, documents: u64) -> Result<SeedReport>
    where
        S: DocumentSink + ?Sized,
    {
        let started = Instant::now();
        let target = sink.describe();
        info!("Seeding {} documents into {}", documents, target);

        let mut batch = Vec::with_capacity(self.initial_capacity(documents));
        let mut inserted: u64 = 0;
        let mut batches: u64 = 0;

        for _ in 0..documents {
            batch.push(self.generator.generate_rider());
            if batch.len() >= self.batch_size {
                let full = std::mem::replace(&mut batch, Vec::with_capacity(self.batch_size));
                inserted = inserted.saturating_add(sink.insert_batch(full).await?);
                batches = batches.saturating_add(1);
                debug!(
                    "Batch {} written ({}/{} documents)",
                    batches, inserted, documents
                );
            }
        }

        if !batch.is_empty() {
            inserted = inserted.saturating_add(sink.insert_batch(batch).await?);
            batches = batches.saturating_add(1);
            debug!(
                "Final batch {} written ({}/{} documents)",
                batches, inserted, documents
            );
        }

        Ok(SeedReport {
            requested: documents,
            inserted,
            batches,
            elapsed: started.elapsed(),
        })
    }

    fn initial_capacity(&self, documents: u64) -> usize {
        usize::try_from(documents).map_or(self.batch_size, |d| d.min(self.batch_size))
    }
}
