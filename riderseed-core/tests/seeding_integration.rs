//! End-to-end seeding tests against the in-memory sink.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use mongodb::bson;
use proptest::prelude::*;
use riderseed_core::{MemorySink, RiderGenerator, SeedConfig, Seeder};

#[tokio::test]
async fn test_integration_requested_equals_inserted() {
    let config = SeedConfig::default()
        .with_documents(1_234)
        .with_batch_size(100)
        .with_seed(2024);
    config.validate().expect("config should be valid");

    let mut sink = MemorySink::new();
    let mut seeder = Seeder::new(RiderGenerator::from_seed(config.seed), config.batch_size)
        .expect("Failed to build seeder");
    let report = seeder
        .run(&mut sink, config.documents)
        .await
        .expect("Seeding failed");

    assert_eq!(report.requested, 1_234);
    assert_eq!(report.inserted, 1_234);
    assert_eq!(report.batches, config.batch_count());
    assert_eq!(sink.documents().len(), 1_234);
    assert_eq!(sink.batch_sizes().last(), Some(&34));
}

#[tokio::test]
async fn test_integration_documents_match_stored_shape() {
    let mut sink = MemorySink::new();
    let mut seeder = Seeder::new(RiderGenerator::from_seed(Some(77)), 16).unwrap();
    seeder.run(&mut sink, 64).await.unwrap();

    for rider in sink.documents() {
        let doc = bson::to_document(rider).expect("rider should serialize to BSON");

        assert!(doc.get_object_id("_id").is_ok());
        assert!(doc.get_str("name").is_ok());
        assert!(doc.get_str("email").is_ok());
        assert!(doc.get_str("avatarURL").is_ok());
        assert_eq!(doc.get_str("password").unwrap().chars().count(), 64);
        assert!(doc.get_str("rideNotes").is_ok());

        let current = doc
            .get_document("location")
            .and_then(|l| l.get_document("current"))
            .expect("location.current missing");
        assert!(current.get_f64("lat").is_ok());
        assert!(current.get_f64("lng").is_ok());

        let rides = doc.get_array("rides").unwrap();
        assert!(rides.len() < 10);
        for ride in rides {
            let ride = ride.as_document().expect("ride should be a document");
            assert!(ride.get_object_id("_id").is_ok());
            assert!(ride.get_object_id("driverID").is_ok());
            assert!(ride.get_datetime("date").is_ok());
            assert!(ride.get_document("from").unwrap().get_f64("lat").is_ok());
            assert!(ride.get_document("to").unwrap().get_f64("lng").is_ok());
        }
    }
}

fn run_counting(documents: u64, batch_size: usize) -> Vec<usize> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let mut sink = MemorySink::counting();
    let mut seeder = Seeder::new(RiderGenerator::from_seed(Some(1)), batch_size).unwrap();
    runtime
        .block_on(seeder.run(&mut sink, documents))
        .unwrap();
    sink.batch_sizes().to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_batches_cover_every_document(documents in 0u64..300, batch_size in 1usize..64) {
        let sizes = run_counting(documents, batch_size);

        prop_assert_eq!(sizes.iter().sum::<usize>() as u64, documents);
        prop_assert_eq!(sizes.len() as u64, documents.div_ceil(batch_size as u64));
        prop_assert!(sizes.iter().all(|&s| s > 0 && s <= batch_size));
        if let Some((_, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&s| s == batch_size));
        }
    }
}
