use crate::domain::ports::Shape;
use crate::utils::error::Result;
use crate::utils::validation::{validate_dimension, Validate};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn try_new(length: f64, width: f64) -> Result<Self> {
        let rectangle = Self::new(length, width);
        rectangle.validate()?;
        Ok(rectangle)
    }

    pub(crate) fn validate_fields(&self, prefix: &str) -> Result<()> {
        validate_dimension(&format!("{}.length", prefix), self.length)?;
        validate_dimension(&format!("{}.width", prefix), self.width)
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.length * self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }

    pub fn try_new(base: f64, height: f64) -> Result<Self> {
        let triangle = Self::new(base, height);
        triangle.validate()?;
        Ok(triangle)
    }

    pub(crate) fn validate_fields(&self, prefix: &str) -> Result<()> {
        validate_dimension(&format!("{}.base", prefix), self.base)?;
        validate_dimension(&format!("{}.height", prefix), self.height)
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn area(&self) -> f64 {
        (self.base * self.height) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn try_new(radius: f64) -> Result<Self> {
        let circle = Self::new(radius);
        circle.validate()?;
        Ok(circle)
    }

    pub(crate) fn validate_fields(&self, prefix: &str) -> Result<()> {
        validate_dimension(&format!("{}.radius", prefix), self.radius)
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

impl Validate for Rectangle {
    fn validate(&self) -> Result<()> {
        self.validate_fields("rectangle")
    }
}

impl Validate for Triangle {
    fn validate(&self) -> Result<()> {
        self.validate_fields("triangle")
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        self.validate_fields("circle")
    }
}

/// One of the supported shapes, tagged by `kind` when (de)serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyShape {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Circle(Circle),
}

impl AnyShape {
    pub(crate) fn validate_fields(&self, prefix: &str) -> Result<()> {
        match self {
            AnyShape::Rectangle(r) => r.validate_fields(prefix),
            AnyShape::Triangle(t) => t.validate_fields(prefix),
            AnyShape::Circle(c) => c.validate_fields(prefix),
        }
    }
}

impl Shape for AnyShape {
    fn name(&self) -> &'static str {
        match self {
            AnyShape::Rectangle(r) => r.name(),
            AnyShape::Triangle(t) => t.name(),
            AnyShape::Circle(c) => c.name(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.area(),
            AnyShape::Triangle(t) => t.area(),
            AnyShape::Circle(c) => c.area(),
        }
    }
}

impl Validate for AnyShape {
    fn validate(&self) -> Result<()> {
        self.validate_fields(self.name())
    }
}

impl From<Rectangle> for AnyShape {
    fn from(shape: Rectangle) -> Self {
        AnyShape::Rectangle(shape)
    }
}

impl From<Triangle> for AnyShape {
    fn from(shape: Triangle) -> Self {
        AnyShape::Triangle(shape)
    }
}

impl From<Circle> for AnyShape {
    fn from(shape: Circle) -> Self {
        AnyShape::Circle(shape)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRecord {
    pub shape: &'static str,
    pub area: f64,
}

impl AreaRecord {
    pub fn of<S: Shape + ?Sized>(shape: &S) -> Self {
        Self {
            shape: shape.name(),
            area: shape.area(),
        }
    }
}
