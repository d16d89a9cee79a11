//! Column statistics and class partitioning over ndarray matrices.
//!
//! Both modules work on borrowed views so scoring never copies the input.
pub mod moments;
pub mod partition;

pub use moments::{moments, Moments};
pub use partition::{split, ClassSizes};
