//! Ready-made problems for the binary GA.
//!
//! - [`FunctionProblem`]: real function over a bounded interval, decoded
//!   through a [`RealCodec`](crate::ga::RealCodec)
//! - [`KnapsackProblem`]: 0/1 knapsack with a hard weight penalty, decoded
//!   through a [`BitCodec`](crate::ga::BitCodec)

mod function;
mod knapsack;

pub use function::{cubic_objective, FunctionProblem};
pub use knapsack::{Item, KnapsackProblem, REFERENCE_CAPACITY, REFERENCE_ITEMS};
