//! Utility functions for randomly generating customer populations

use rand::Rng;
use segmentation::{Customer, Gender};
use std::fmt;
use std::ops::Range;

/// Size of the population a session starts with
pub const DEFAULT_POPULATION: usize = 200;

/// Latent behavioural segment a synthetic customer is drawn from.
///
/// Each segment is picked with probability 0.2 and defines uniform ranges for income (in
/// thousands), spending score and age:
///
/// | Segment        | Income      | Spending    | Age        |
/// |----------------|-------------|-------------|------------|
/// | `Luxury`       | `70..120`   | `70..100`   | `25..60`   |
/// | `Conservative` | `70..120`   | `10..40`    | `35..65`   |
/// | `Ambitious`    | `15..50`    | `70..100`   | `18..43`   |
/// | `Budget`       | `15..50`    | `10..40`    | `25..65`   |
/// | `Average`      | `40..80`    | `40..80`    | `25..60`   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// High income, high spending
    Luxury,
    /// High income, low spending
    Conservative,
    /// Low income, high spending
    Ambitious,
    /// Low income, low spending
    Budget,
    /// Middle income, middle spending
    Average,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::Luxury,
        Segment::Conservative,
        Segment::Ambitious,
        Segment::Budget,
        Segment::Average,
    ];

    /// Maps a uniform draw in `[0, 1)` onto a segment using the cumulative thresholds
    /// 0.2, 0.4, 0.6, 0.8 and 1.0.
    pub fn from_draw(draw: f64) -> Self {
        if draw < 0.2 {
            Segment::Luxury
        } else if draw < 0.4 {
            Segment::Conservative
        } else if draw < 0.6 {
            Segment::Ambitious
        } else if draw < 0.8 {
            Segment::Budget
        } else {
            Segment::Average
        }
    }

    pub fn income_range(&self) -> Range<f64> {
        match self {
            Segment::Luxury | Segment::Conservative => 70.0..120.0,
            Segment::Ambitious | Segment::Budget => 15.0..50.0,
            Segment::Average => 40.0..80.0,
        }
    }

    pub fn spending_range(&self) -> Range<f64> {
        match self {
            Segment::Luxury | Segment::Ambitious => 70.0..100.0,
            Segment::Conservative | Segment::Budget => 10.0..40.0,
            Segment::Average => 40.0..80.0,
        }
    }

    pub fn age_range(&self) -> Range<f64> {
        match self {
            Segment::Luxury | Segment::Average => 25.0..60.0,
            Segment::Conservative => 35.0..65.0,
            Segment::Ambitious => 18.0..43.0,
            Segment::Budget => 25.0..65.0,
        }
    }

    /// Draw one customer of this segment. Income, spending and age are drawn in that order and
    /// rounded to the nearest integer, then the gender is picked uniformly.
    pub fn sample(&self, customer_id: u32, rng: &mut impl Rng) -> Customer {
        let income = rng.gen_range(self.income_range()).round();
        let spending = rng.gen_range(self.spending_range()).round();
        let age = rng.gen_range(self.age_range()).round() as u32;
        let gender = Gender::ALL[rng.gen_range(0..Gender::ALL.len())];

        Customer::new(customer_id, gender, age, income, spending)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Luxury => "luxury",
            Segment::Conservative => "conservative",
            Segment::Ambitious => "ambitious",
            Segment::Budget => "budget",
            Segment::Average => "average",
        };
        write!(f, "{}", name)
    }
}

/// Generate `n_customers` customers together with the latent segment each was drawn from.
///
/// Customer ids are assigned sequentially starting at 1.
pub fn customers_with_segments(n_customers: usize, rng: &mut impl Rng) -> Vec<(Customer, Segment)> {
    (1..)
        .take(n_customers)
        .map(|customer_id| {
            let segment = Segment::from_draw(rng.gen());
            (segment.sample(customer_id, rng), segment)
        })
        .collect()
}

/// Generate a synthetic population of `n_customers` customers.
///
/// `customers` can be used to quickly assemble a dataset with five well separated groups to
/// test or benchmark the clustering on a realistic input.
pub fn customers(n_customers: usize, rng: &mut impl Rng) -> Vec<Customer> {
    customers_with_segments(n_customers, rng)
        .into_iter()
        .map(|(customer, _)| customer)
        .collect()
}
