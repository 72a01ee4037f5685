use crate::core::report::OutputFormat;
use crate::core::AnyShape;
use crate::utils::error::{Result, ShapeError};
use crate::utils::validation::{validate_non_empty, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeFileConfig {
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub shapes: Vec<AnyShape>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl ShapeFileConfig {
    /// Load a shape list from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ShapeError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShapeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn shapes(&self) -> &[AnyShape] {
        &self.shapes
    }
}

impl Validate for ShapeFileConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("shapes", &self.shapes)?;

        for (index, shape) in self.shapes.iter().enumerate() {
            shape.validate_fields(&format!("shapes[{}]", index))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Circle, Rectangle, Shape, Triangle};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_shape_list() {
        let toml_content = r#"
[output]
format = "json"

[[shapes]]
kind = "rectangle"
length = 20
width = 30

[[shapes]]
kind = "triangle"
base = 10.0
height = 20.0

[[shapes]]
kind = "circle"
radius = 20
"#;

        let config = ShapeFileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(
            config.shapes(),
            &[
                AnyShape::Rectangle(Rectangle::new(20.0, 30.0)),
                AnyShape::Triangle(Triangle::new(10.0, 20.0)),
                AnyShape::Circle(Circle::new(20.0)),
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_section_is_optional() {
        let config = ShapeFileConfig::from_toml_str(
            r#"
[[shapes]]
kind = "circle"
radius = 1.5
"#,
        )
        .unwrap();

        assert_eq!(config.output_format(), None);
        assert_eq!(config.shapes()[0].name(), "circle");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHAPE_AREA_TEST_RADIUS", "4.0");

        let config = ShapeFileConfig::from_toml_str(
            r#"
[[shapes]]
kind = "circle"
radius = ${SHAPE_AREA_TEST_RADIUS}
"#,
        )
        .unwrap();
        assert_eq!(config.shapes()[0], AnyShape::Circle(Circle::new(4.0)));

        std::env::remove_var("SHAPE_AREA_TEST_RADIUS");
    }

    #[test]
    fn test_validation_names_offending_shape() {
        let config = ShapeFileConfig::from_toml_str(
            r#"
[[shapes]]
kind = "circle"
radius = 2

[[shapes]]
kind = "triangle"
base = 10
height = -5
"#,
        )
        .unwrap();

        match config.validate() {
            Err(ShapeError::InvalidDimension { field, value }) => {
                assert_eq!(field, "shapes[1].height");
                assert_eq!(value, -5.0);
            }
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_shape_list_is_rejected() {
        let config = ShapeFileConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ShapeError::ConfigError { .. })));
    }

    #[test]
    fn test_unknown_kind_is_a_config_error() {
        let result = ShapeFileConfig::from_toml_str(
            r#"
[[shapes]]
kind = "hexagon"
side = 3
"#,
        );
        assert!(matches!(result, Err(ShapeError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[shapes]]\nkind = \"rectangle\"\nlength = 2\nwidth = 3\n")
            .unwrap();

        let config = ShapeFileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.shapes()[0].area(), 6.0);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = ShapeFileConfig::from_file("/nonexistent/shapes.toml");
        assert!(matches!(result, Err(ShapeError::ConfigError { .. })));
    }
}
