use crate::domain::model::AreaRecord;
use crate::utils::error::Result;

/// Anything with a computable area.
pub trait Shape {
    /// Lowercase name used when reporting, e.g. `"circle"`.
    fn name(&self) -> &'static str;

    /// Pure and deterministic; never fails.
    fn area(&self) -> f64;
}

pub trait Reporter {
    fn report(&mut self, record: &AreaRecord) -> Result<()>;
}
