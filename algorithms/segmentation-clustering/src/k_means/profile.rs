use crate::ClusterResult;
use segmentation::error::{Error, Result};
use segmentation::{Customer, Gender};
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Business reading of a cluster, derived from where its centroid sits.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentLabel {
    /// Income and spending both above 70
    HighValue,
    /// Income above 70, spending below 40
    Conservative,
    /// Income below 40, spending above 70
    Ambitious,
    /// Income and spending both below 40
    BudgetConscious,
    /// Anything else
    Moderate,
}

impl SegmentLabel {
    /// Label for a centroid with the given rounded mean income and spending. The first
    /// matching rule wins.
    pub fn classify(avg_income: f64, avg_spending: f64) -> Self {
        if avg_income > 70. && avg_spending > 70. {
            SegmentLabel::HighValue
        } else if avg_income > 70. && avg_spending < 40. {
            SegmentLabel::Conservative
        } else if avg_income < 40. && avg_spending > 70. {
            SegmentLabel::Ambitious
        } else if avg_income < 40. && avg_spending < 40. {
            SegmentLabel::BudgetConscious
        } else {
            SegmentLabel::Moderate
        }
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SegmentLabel::HighValue => "High Value",
            SegmentLabel::Conservative => "Conservative",
            SegmentLabel::Ambitious => "Ambitious",
            SegmentLabel::BudgetConscious => "Budget Conscious",
            SegmentLabel::Moderate => "Moderate",
        };
        write!(f, "{}", label)
    }
}

/// Summary of the customers assigned to one cluster
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterProfile {
    pub index: usize,
    pub count: usize,
    /// Share of the whole population, in percent
    pub percentage: f64,
    /// Centroid income, rounded
    pub avg_income: f64,
    /// Centroid spending score, rounded
    pub avg_spending: f64,
    /// Mean member age, rounded. `None` when the cluster has no member.
    pub avg_age: Option<f64>,
    pub male_count: usize,
    pub female_count: usize,
    pub label: SegmentLabel,
}

impl ClusterResult {
    /// Describe every cluster of this result, in cluster order.
    ///
    /// `customers` must be the population the result was computed on.
    pub fn profiles(&self, customers: &[Customer]) -> Result<Vec<ClusterProfile>> {
        if customers.len() != self.n_customers() {
            return Err(Error::MismatchedLength {
                expected: self.n_customers(),
                found: customers.len(),
            });
        }

        let profiles = self
            .centroids()
            .iter()
            .enumerate()
            .map(|(index, centroid)| {
                let members: Vec<&Customer> = customers
                    .iter()
                    .zip(self.assignments())
                    .filter(|(_, &cluster)| cluster == index)
                    .map(|(customer, _)| customer)
                    .collect();
                let count = members.len();
                let avg_age = if count == 0 {
                    None
                } else {
                    let total: f64 = members.iter().map(|c| f64::from(c.age())).sum();
                    Some((total / count as f64).round())
                };
                let male_count = members
                    .iter()
                    .filter(|c| c.gender() == Gender::Male)
                    .count();
                let avg_income = centroid.annual_income.round();
                let avg_spending = centroid.spending_score.round();

                ClusterProfile {
                    index,
                    count,
                    percentage: count as f64 / customers.len() as f64 * 100.,
                    avg_income,
                    avg_spending,
                    avg_age,
                    male_count,
                    female_count: count - male_count,
                    label: SegmentLabel::classify(avg_income, avg_spending),
                }
            })
            .collect();
        Ok(profiles)
    }
}
