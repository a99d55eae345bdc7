//! Random rider generation.
//!
//! Names, email addresses and note text come from the `fake` crate; numeric
//! ranges, coordinates and passwords are drawn directly from the generator's
//! random source so a seeded run reproduces the same content.

use crate::models::{Coordinates, Location, Ride, Rider};
use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use mongodb::bson::{DateTime, oid::ObjectId};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Number of rides per rider, upper bound exclusive.
pub const RIDES_PER_RIDER: Range<usize> = 0..10;

/// Sentences in a rider's notes paragraph, upper bound exclusive.
pub const NOTE_SENTENCES: Range<usize> = 1..5;

/// Words per notes sentence, upper bound exclusive.
pub const NOTE_WORDS: Range<usize> = 3..15;

/// Length of generated passwords.
pub const PASSWORD_LENGTH: usize = 64;

/// Avatar width and height in pixels.
pub const AVATAR_SIZE: u32 = 60;

/// Earliest ride date: 1900-01-01T00:00:00Z in milliseconds.
pub const EARLIEST_RIDE_MILLIS: i64 = -2_208_988_800_000;

const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*+-_=?:;,.|(){}<>[] ";

/// Produces synthetic riders from an owned random source.
#[derive(Debug)]
pub struct RiderGenerator<R = StdRng> {
    rng: R,
    latest_ride_millis: i64,
}

impl RiderGenerator<StdRng> {
    /// Creates a generator seeded from `seed`, or from OS entropy when absent.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> RiderGenerator<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            latest_ride_millis: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Caps ride dates at `millis` instead of the construction time.
    pub fn with_latest_ride_date(mut self, millis: i64) -> Self {
        self.latest_ride_millis = millis.max(EARLIEST_RIDE_MILLIS);
        self
    }

    /// Generates one complete rider with 0 to 9 rides.
    pub fn generate_rider(&mut self) -> Rider {
        let ride_count = self.rng.random_range(RIDES_PER_RIDER);
        let rides = (0..ride_count).map(|_| self.generate_ride()).collect();

        let first: String = Name().fake_with_rng(&mut self.rng);
        let second: String = Name().fake_with_rng(&mut self.rng);
        let email_prefix: String = Name().fake_with_rng(&mut self.rng);
        let email: String = FreeEmail().fake_with_rng(&mut self.rng);

        Rider {
            id: ObjectId::new(),
            name: format!("{} {}", first, second),
            email: format!("{}{}", email_prefix, email),
            avatar_url: format!("https://picsum.photos/{}/{}", AVATAR_SIZE, AVATAR_SIZE),
            password: self.generate_password(),
            rides,
            location: Location {
                current: self.generate_coordinates(),
            },
            ride_notes: self.generate_notes(),
        }
    }

    /// Generates a ride with fresh ids, a date since 1900 and two endpoints.
    pub fn generate_ride(&mut self) -> Ride {
        let millis = self
            .rng
            .random_range(EARLIEST_RIDE_MILLIS..=self.latest_ride_millis);

        Ride {
            id: ObjectId::new(),
            date: DateTime::from_millis(millis),
            driver_id: Some(ObjectId::new()),
            from: self.generate_coordinates(),
            to: self.generate_coordinates(),
        }
    }

    /// Generates a uniformly distributed point on the globe's lat/lng grid.
    pub fn generate_coordinates(&mut self) -> Coordinates {
        Coordinates {
            lat: self.rng.random_range(Coordinates::LAT_RANGE),
            lng: self.rng.random_range(Coordinates::LNG_RANGE),
        }
    }

    fn generate_password(&mut self) -> String {
        (0..PASSWORD_LENGTH)
            .filter_map(|_| PASSWORD_CHARSET.choose(&mut self.rng))
            .map(|&b| char::from(b))
            .collect()
    }

    fn generate_notes(&mut self) -> String {
        let sentences = self.rng.random_range(NOTE_SENTENCES);
        let words = self.rng.random_range(NOTE_WORDS);
        (0..sentences)
            .map(|_| {
                Sentence(words..words.saturating_add(1)).fake_with_rng::<String, _>(&mut self.rng)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<R: Rng> Iterator for RiderGenerator<R> {
    type Item = Rider;

    fn next(&mut self) -> Option<Rider> {
        Some(self.generate_rider())
    }
}
