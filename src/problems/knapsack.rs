//! 0/1 knapsack: maximize total value under a weight capacity.
//!
//! Bit `i` of a genotype includes item `i`. Overweight selections are not
//! repaired: they score 0.

use crate::ga::{BinaryProblem, BitCodec};
use std::convert::Infallible;

/// An immutable `(weight, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub const fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }
}

/// The ten-item reference instance, used with [`REFERENCE_CAPACITY`].
pub const REFERENCE_ITEMS: [Item; 10] = [
    Item::new(2.0, 10.0),
    Item::new(4.0, 30.0),
    Item::new(6.0, 300.0),
    Item::new(8.0, 10.0),
    Item::new(8.0, 30.0),
    Item::new(8.0, 300.0),
    Item::new(12.0, 50.0),
    Item::new(25.0, 75.0),
    Item::new(50.0, 100.0),
    Item::new(100.0, 400.0),
];

pub const REFERENCE_CAPACITY: f64 = 100.0;

/// A 0/1 knapsack instance.
///
/// Fitness is the total value of the selected items when their total weight
/// is within capacity, and 0 otherwise. Pair it with
/// [`Direction::Maximize`](crate::ga::Direction), e.g. through the
/// [`GaConfig::knapsack`](crate::ga::GaConfig::knapsack) preset.
///
/// # Examples
///
/// ```
/// use u_bitga::problems::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(vec![Item::new(3.0, 5.0), Item::new(4.0, 6.0)], 5.0);
/// assert_eq!(problem.score(&[true, false]), 5.0);
/// assert_eq!(problem.score(&[true, true]), 0.0); // 7 > 5: penalized
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
    codec: BitCodec,
}

impl KnapsackProblem {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        let codec = BitCodec::new(items.len());
        Self {
            items,
            capacity,
            codec,
        }
    }

    /// [`REFERENCE_ITEMS`] with [`REFERENCE_CAPACITY`].
    pub fn reference() -> Self {
        Self::new(REFERENCE_ITEMS.to_vec(), REFERENCE_CAPACITY)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of the weights of the selected items.
    pub fn total_weight(&self, selection: &[bool]) -> f64 {
        self.selected(selection).map(|item| item.weight).sum()
    }

    /// Sum of the values of the selected items, ignoring capacity.
    pub fn total_value(&self, selection: &[bool]) -> f64 {
        self.selected(selection).map(|item| item.value).sum()
    }

    pub fn is_feasible(&self, selection: &[bool]) -> bool {
        self.total_weight(selection) <= self.capacity
    }

    /// Penalized value: `total_value` if feasible, else 0.
    pub fn score(&self, selection: &[bool]) -> f64 {
        if self.is_feasible(selection) {
            self.total_value(selection)
        } else {
            0.0
        }
    }

    fn selected<'a>(&'a self, selection: &'a [bool]) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .zip(selection)
            .filter_map(|(item, &included)| included.then_some(item))
    }
}

impl BinaryProblem for KnapsackProblem {
    type Codec = BitCodec;
    type Error = Infallible;

    fn codec(&self) -> &BitCodec {
        &self.codec
    }

    fn evaluate(&self, selection: &Vec<bool>) -> Result<f64, Infallible> {
        Ok(self.score(selection))
    }
}
