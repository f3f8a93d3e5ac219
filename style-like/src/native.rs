pub mod fill;
pub mod stroke;
pub mod text;
pub mod image;
pub mod style;

pub use fill::{Fill, FillOptions};
pub use stroke::{Stroke, StrokeOptions};
pub use text::{Text, TextOptions};
pub use image::{Icon, IconOptions, RegularShape, RegularShapeOptions, CircleStyle, CircleOptions, ImageStyle};
pub use style::{Style, StyleOptions};

use crate::error::StyleError;

#[derive(Clone, Debug, PartialEq)]
pub enum StyleObject {
    Fill(Fill),
    Stroke(Stroke),
    Text(Text),
    Image(ImageStyle),
    Style(Style),
}

impl StyleObject {
    pub fn kind(&self) -> &'static str {
        match self {
            StyleObject::Fill(_) => "Fill",
            StyleObject::Stroke(_) => "Stroke",
            StyleObject::Text(_) => "Text",
            StyleObject::Image(image) => image.kind().as_str(),
            StyleObject::Style(_) => "Style",
        }
    }

    pub fn as_fill(&self) -> Option<&Fill> {
        match self { StyleObject::Fill(f) => Some(f), _ => None }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self { StyleObject::Stroke(s) => Some(s), _ => None }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self { StyleObject::Text(t) => Some(t), _ => None }
    }

    pub fn as_image(&self) -> Option<&ImageStyle> {
        match self { StyleObject::Image(i) => Some(i), _ => None }
    }

    pub fn as_icon(&self) -> Option<&Icon> {
        self.as_image().and_then(ImageStyle::as_icon)
    }

    pub fn as_regular_shape(&self) -> Option<&RegularShape> {
        self.as_image().and_then(ImageStyle::as_regular_shape)
    }

    pub fn as_circle_style(&self) -> Option<&CircleStyle> {
        self.as_image().and_then(ImageStyle::as_circle_style)
    }

    pub fn as_style(&self) -> Option<&Style> {
        match self { StyleObject::Style(s) => Some(s), _ => None }
    }
}

impl From<Fill> for StyleObject {
    fn from(f: Fill) -> Self { StyleObject::Fill(f) }
}

impl From<Stroke> for StyleObject {
    fn from(s: Stroke) -> Self { StyleObject::Stroke(s) }
}

impl From<Text> for StyleObject {
    fn from(t: Text) -> Self { StyleObject::Text(t) }
}

impl From<ImageStyle> for StyleObject {
    fn from(i: ImageStyle) -> Self { StyleObject::Image(i) }
}

impl From<Icon> for StyleObject {
    fn from(i: Icon) -> Self { StyleObject::Image(ImageStyle::Icon(i)) }
}

impl From<RegularShape> for StyleObject {
    fn from(r: RegularShape) -> Self { StyleObject::Image(ImageStyle::RegularShape(r)) }
}

impl From<CircleStyle> for StyleObject {
    fn from(c: CircleStyle) -> Self { StyleObject::Image(ImageStyle::Circle(c)) }
}

impl From<Style> for StyleObject {
    fn from(s: Style) -> Self { StyleObject::Style(s) }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, StyleError> {
    if value.is_finite() { Ok(value) } else { Err(StyleError::number(field, value)) }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, StyleError> {
    if value.is_finite() && value >= 0.0 { Ok(value) } else { Err(StyleError::number(field, value)) }
}

pub(crate) fn finite_pair(field: &'static str, pair: [f64; 2]) -> Result<[f64; 2], StyleError> {
    for v in pair {
        finite(field, v)?;
    }
    Ok(pair)
}

pub(crate) fn opt<T>(value: Option<T>, check: impl Fn(T) -> Result<T, StyleError>) -> Result<Option<T>, StyleError> {
    value.map(check).transpose()
}
