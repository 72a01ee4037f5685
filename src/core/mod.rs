pub mod calculator;
pub mod report;

pub use crate::domain::model::{AnyShape, AreaRecord, Circle, Rectangle, Triangle};
pub use crate::domain::ports::{Reporter, Shape};
pub use crate::utils::error::Result;
