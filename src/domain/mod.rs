// Domain layer: shape values and the ports the calculator talks through.

pub mod model;
pub mod ports;
