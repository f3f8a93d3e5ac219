use crate::error::StyleError;
use crate::native::{Fill, ImageStyle, Stroke, Text};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOptions {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub text: Option<Text>,
    pub image: Option<ImageStyle>,
    pub z_index: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    fill: Option<Fill>,
    stroke: Option<Stroke>,
    text: Option<Text>,
    image: Option<ImageStyle>,
    z_index: Option<i32>,
}

impl Style {
    pub fn new(options: StyleOptions) -> Result<Style, StyleError> {
        Ok(Style {
            fill: options.fill,
            stroke: options.stroke,
            text: options.text,
            image: options.image,
            z_index: options.z_index,
        })
    }

    pub fn fill(&self) -> Option<&Fill> { self.fill.as_ref() }
    pub fn stroke(&self) -> Option<&Stroke> { self.stroke.as_ref() }
    pub fn text(&self) -> Option<&Text> { self.text.as_ref() }
    pub fn image(&self) -> Option<&ImageStyle> { self.image.as_ref() }
    pub fn z_index(&self) -> Option<i32> { self.z_index }

    pub fn set_fill(&mut self, fill: Option<Fill>) { self.fill = fill; }
    pub fn set_stroke(&mut self, stroke: Option<Stroke>) { self.stroke = stroke; }
    pub fn set_text(&mut self, text: Option<Text>) { self.text = text; }
    pub fn set_image(&mut self, image: Option<ImageStyle>) { self.image = image; }
    pub fn set_z_index(&mut self, z_index: Option<i32>) { self.z_index = z_index; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_has_nothing() {
        let style = Style::new(StyleOptions::default()).unwrap();
        assert_eq!(style, Style::default());
        assert!(style.fill().is_none());
        assert!(style.image().is_none());
    }

    #[test]
    fn setters_replace_members() {
        let mut style = Style::default();
        style.set_fill(Some(Fill::with_color("#000").unwrap()));
        style.set_z_index(Some(3));
        assert_eq!(style.fill().and_then(Fill::color), Some("#000"));
        assert_eq!(style.z_index(), Some(3));
        style.set_fill(None);
        assert!(style.fill().is_none());
    }
}
