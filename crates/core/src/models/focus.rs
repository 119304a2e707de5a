use serde::{Deserialize, Serialize};

use super::bucket::BucketKind;

/// Percentage split of new income across the four buckets. Sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSplit {
    pub vault: u8,
    pub banks: u8,
    pub metals: u8,
    pub investments: u8,
}

impl FocusSplit {
    pub fn percent_for(&self, bucket: BucketKind) -> u8 {
        match bucket {
            BucketKind::Vault => self.vault,
            BucketKind::Banks => self.banks,
            BucketKind::Metals => self.metals,
            BucketKind::Investments => self.investments,
        }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.vault)
            + u32::from(self.banks)
            + u32::from(self.metals)
            + u32::from(self.investments)
    }
}

/// Monetary amounts produced by applying a `FocusSplit` to an income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub vault: f64,
    pub banks: f64,
    pub metals: f64,
    pub investments: f64,
}

impl Allocation {
    pub fn amount_for(&self, bucket: BucketKind) -> f64 {
        match bucket {
            BucketKind::Vault => self.vault,
            BucketKind::Banks => self.banks,
            BucketKind::Metals => self.metals,
            BucketKind::Investments => self.investments,
        }
    }

    pub fn total(&self) -> f64 {
        self.vault + self.banks + self.metals + self.investments
    }
}
