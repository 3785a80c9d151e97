use rand::Rng;

use super::WaterlineError;
use crate::domain::{HEADING_BUCKETS, Heading, WeightMap};

/// Cumulative view of a [`WeightMap`] for repeated draws
///
/// Zero-weight headings are left out and can never be drawn.
#[derive(Debug, Clone)]
pub struct WeightedDirectionSampler {
    headings: Vec<Heading>,
    cumulative: Vec<u64>,
}

impl WeightedDirectionSampler {
    pub fn new(weights: &WeightMap) -> Result<Self, WaterlineError> {
        let mut headings = Vec::with_capacity(HEADING_BUCKETS);
        let mut cumulative = Vec::with_capacity(HEADING_BUCKETS);
        let mut total: u64 = 0;

        for (heading, weight) in weights.iter() {
            if weight == 0 {
                continue;
            }
            total += u64::from(weight);
            cumulative.push(total);
            headings.push(heading);
        }

        if total == 0 {
            return Err(WaterlineError::InvalidWeightMap);
        }

        Ok(Self {
            headings,
            cumulative,
        })
    }

    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Draw one heading with probability proportional to its weight
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        let roll = rng.gen_range(0..self.total());
        let index = self.cumulative.partition_point(|&upper| upper <= roll);
        self.headings[index]
    }
}
