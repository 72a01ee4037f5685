// Application layer: the fixed sequences the binary drives the calculator through.

use crate::core::calculator::ShapeCalculator;
use crate::core::{AnyShape, Circle, Rectangle, Reporter, Triangle};
use crate::utils::error::Result;

/// Rectangle 20×30, triangle base 10 height 20, circle radius 20, in that order.
pub fn run_builtin_shapes<R: Reporter>(calculator: &mut ShapeCalculator<R>) -> Result<()> {
    let rectangle = Rectangle::new(20.0, 30.0);
    let triangle = Triangle::new(10.0, 20.0);
    let circle = Circle::new(20.0);

    calculator.calculate_area(&rectangle)?;
    calculator.calculate_area(&triangle)?;
    calculator.calculate_area(&circle)?;
    Ok(())
}

/// Calculates `shapes` in order, stopping at the first reporting failure.
pub fn run_shape_list<R: Reporter>(
    calculator: &mut ShapeCalculator<R>,
    shapes: &[AnyShape],
) -> Result<()> {
    tracing::debug!("Calculating {} configured shapes", shapes.len());
    for shape in shapes {
        calculator.calculate_area(shape)?;
    }
    Ok(())
}
