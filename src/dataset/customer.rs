use ndarray::Array2;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::fmt;

/// Gender label attached to a customer
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Every label, in the order the generator draws them
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// A position in the (annual income, spending score) plane.
///
/// Customers are clustered on these two dimensions only, and the mean position of a cluster
/// is reported with the same shape, see [`Centroid`].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub annual_income: f64,
    pub spending_score: f64,
}

/// Representative point of a cluster, the mean position of its members
pub type Centroid = Point;

impl Point {
    pub fn new(annual_income: f64, spending_score: f64) -> Self {
        Point {
            annual_income,
            spending_score,
        }
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    /// Squared euclidean distance between two points
    pub fn sq_distance(&self, other: &Point) -> f64 {
        let dx = self.annual_income - other.annual_income;
        let dy = self.spending_score - other.spending_score;
        dx * dx + dy * dy
    }
}

/// A retail customer
///
/// Annual income is expressed in thousands of currency units, the spending score
/// conventionally lies in `0..=100`. Records are immutable once built.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    #[cfg_attr(feature = "serde", serde(rename = "customerID"))]
    customer_id: u32,
    gender: Gender,
    age: u32,
    annual_income: f64,
    spending_score: f64,
}

impl Customer {
    pub fn new(
        customer_id: u32,
        gender: Gender,
        age: u32,
        annual_income: f64,
        spending_score: f64,
    ) -> Self {
        Customer {
            customer_id,
            gender,
            age,
            annual_income,
            spending_score,
        }
    }

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn annual_income(&self) -> f64 {
        self.annual_income
    }

    pub fn spending_score(&self) -> f64 {
        self.spending_score
    }

    /// Projection onto the (income, spending) plane
    pub fn point(&self) -> Point {
        Point::new(self.annual_income, self.spending_score)
    }
}

/// Stack the (income, spending) projection of every customer into a matrix with shape
/// `(n_customers, 2)`. Row `i` belongs to `customers[i]`.
pub fn records(customers: &[Customer]) -> Array2<f64> {
    Array2::from_shape_fn((customers.len(), 2), |(i, j)| match j {
        0 => customers[i].annual_income,
        _ => customers[i].spending_score,
    })
}
