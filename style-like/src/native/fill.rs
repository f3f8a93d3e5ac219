use crate::color::validate_color;
use crate::error::StyleError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillOptions {
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    color: Option<String>,
}

impl Fill {
    pub fn new(options: FillOptions) -> Result<Fill, StyleError> {
        Ok(Fill { color: validate_color(options.color)? })
    }

    pub fn with_color(color: impl Into<String>) -> Result<Fill, StyleError> {
        Fill::new(FillOptions { color: Some(color.into()) })
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: Option<String>) -> Result<(), StyleError> {
        self.color = validate_color(color)?;
        Ok(())
    }
}
