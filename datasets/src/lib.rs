//! `segmentation-datasets` provides synthetic customer populations ready to be clustered in
//! tests, benchmarks and demos.
//!
//! ## The Big Picture
//!
//! `segmentation-datasets` is a crate in the `segmentation` workspace. It stands in for a
//! real mall-customer survey: every customer is drawn from one of five latent spending
//! segments, so a good clustering should recover roughly five groups in the
//! (annual income, spending score) plane.
//!
//! ## Using a dataset
//!
//! All generators take the random number generator explicitly, so a seeded generator yields
//! the same population every time:
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use segmentation_datasets::generate;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let customers = generate::customers(generate::DEFAULT_POPULATION, &mut rng);
//! assert_eq!(customers.len(), 200);
//! assert_eq!(customers[0].customer_id(), 1);
//! ```

pub mod generate;

pub use generate::Segment;
