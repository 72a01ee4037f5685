use crate::core::{AreaRecord, Reporter, Shape};
use crate::utils::error::Result;

/// Computes the area of one shape per call and hands the result to its reporter.
pub struct ShapeCalculator<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> ShapeCalculator<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn calculate_area<S: Shape + ?Sized>(&mut self, shape: &S) -> Result<f64> {
        let record = AreaRecord::of(shape);
        tracing::debug!("Calculated {} area: {}", record.shape, record.area);

        self.reporter.report(&record)?;
        Ok(record.area)
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
