pub mod arrow;
pub mod dispatch;
pub mod tracker;

pub use arrow::Arrow;
pub use dispatch::{dispatch, shuffled, DispatchError};
pub use tracker::{Tracking, Viewpoint};
