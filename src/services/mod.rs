// Service exports
pub mod dataset;

pub use dataset::{DatasetError, DatasetProvider};
