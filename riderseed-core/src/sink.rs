//! Batch destinations for generated riders.
//!
//! The seeding loop only knows about [`DocumentSink`]; the MongoDB
//! implementation lives in [`crate::mongo`], and [`MemorySink`] backs dry
//! runs and tests.

use crate::Result;
use crate::models::Rider;
use async_trait::async_trait;

/// Destination for batches of generated riders.
///
/// # Object Safety
/// This trait is object-safe, so callers can pick a sink at runtime and pass
/// `&mut dyn DocumentSink` to the seeder.
#[async_trait]
pub trait DocumentSink: Send {
    /// Writes one batch and returns how many documents were accepted.
    ///
    /// The seeder never passes an empty batch.
    ///
    /// # Errors
    /// Any error is fatal to the run; implementations must not retry.
    async fn insert_batch(&mut self, batch: Vec<Rider>) -> Result<u64>;

    /// Short human-readable description of the destination for log lines.
    fn describe(&self) -> String;
}

/// In-memory sink that records batch sizes and optionally keeps documents.
#[derive(Debug, Default)]
pub struct MemorySink {
    retain: bool,
    batch_sizes: Vec<usize>,
    documents: Vec<Rider>,
}

impl MemorySink {
    /// Creates a sink that keeps every inserted document.
    pub fn new() -> Self {
        Self {
            retain: true,
            ..Self::default()
        }
    }

    /// Creates a sink that only counts, dropping documents after each batch.
    pub fn counting() -> Self {
        Self::default()
    }

    /// Sizes of every batch received, in order.
    pub fn batch_sizes(&self) -> &[usize] {
        &self.batch_sizes
    }

    /// Documents kept so far (empty for a counting sink).
    pub fn documents(&self) -> &[Rider] {
        &self.documents
    }

    /// Total number of documents received.
    pub fn total(&self) -> usize {
        self.batch_sizes.iter().sum()
    }
}

#[async_trait]
impl DocumentSink for MemorySink {
    async fn insert_batch(&mut self, batch: Vec<Rider>) -> Result<u64> {
        let len = batch.len();
        self.batch_sizes.push(len);
        if self.retain {
            self.documents.extend(batch);
        }
        Ok(u64::try_from(len).unwrap_or(u64::MAX))
    }

    fn describe(&self) -> String {
        "memory (dry run)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RiderGenerator;

    #[tokio::test]
    async fn test_memory_sink_retains_documents() {
        let mut sink = MemorySink::new();
        let batch: Vec<Rider> = RiderGenerator::from_seed(Some(5)).take(3).collect();

        let accepted = sink.insert_batch(batch.clone()).await.unwrap();

        assert_eq!(accepted, 3);
        assert_eq!(sink.batch_sizes(), &[3]);
        assert_eq!(sink.documents(), batch.as_slice());
    }

    #[tokio::test]
    async fn test_counting_sink_drops_documents() {
        let mut sink = MemorySink::counting();
        let mut generator = RiderGenerator::from_seed(Some(5));

        sink.insert_batch(generator.by_ref().take(4).collect())
            .await
            .unwrap();
        sink.insert_batch(generator.take(2).collect()).await.unwrap();

        assert_eq!(sink.batch_sizes(), &[4, 2]);
        assert_eq!(sink.total(), 6);
        assert!(sink.documents().is_empty());
    }
}
