//! Datasets
//!
//! This module defines the customer record, its projection onto the plane the clustering works
//! in, and the floating point bound shared by the generic algorithm code.
use ndarray::ScalarOperand;

use num_traits::{AsPrimitive, FromPrimitive, NumAssignOps, NumCast, Signed};
use rand::distributions::uniform::SampleUniform;

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

mod customer;

pub use customer::{records, Centroid, Customer, Gender, Point};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Observations and centroids of the
/// clustering models are stored with this element type.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + AsPrimitive<usize>
    + for<'a> AddAssign<&'a Self>
    + SampleUniform
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}
