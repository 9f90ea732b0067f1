//! Post-processing helpers.

pub mod topk;

pub use topk::{Topk, TopkResult};
