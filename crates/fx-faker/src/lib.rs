//! # fx-faker
//!
//! Fake strings from a hierarchical template dataset.
//!
//! - [`Dataset`]: an immutable JSON tree of templates, bundled or loaded
//!   from `FX_FAKER_DATA`.
//! - [`Resolver`]: expands `#{subject.method}` placeholders recursively and
//!   reports failures as [`FakerError`].
//! - [`pattern`]: `#` to digits and `?` to letters.
//! - [`Faker`]: the facade over a [`Domain`] catalog. It never fails: a
//!   lookup that cannot be served falls back to a short random string and
//!   is logged through `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use fx_faker::{Domain, Faker, Internet, SeededRng};
//!
//! let faker = Faker::global();
//! let mut rng = SeededRng::new(42);
//!
//! let email = faker.fake(&Domain::Internet(Internet::Email), &mut rng);
//! let street: Domain = "address.street_address".parse().unwrap();
//! let streets = faker.fake_many(&street, 3, &mut rng);
//! # let _ = (email, streets);
//! ```
//!
//! Every value is a pure function of the dataset and the generator state,
//! so replaying a seed replays the values.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod faker;
pub mod pattern;
pub mod resolver;

pub use config::FakerConfig;
pub use dataset::{Dataset, Node};
pub use domain::{
    Address, Bank, Car, Company, CreditCard, Domain, DomainParseError, Internet, Name, Phone,
    Text, Vehicle,
};
pub use error::{DatasetError, FakerError, ScanError};
pub use faker::Faker;
pub use resolver::Resolver;

pub use fx_rng::SeededRng;
