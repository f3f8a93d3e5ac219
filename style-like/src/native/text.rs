use std::f64::consts::FRAC_PI_4;
use crate::error::StyleError;
use crate::native::{finite, non_negative, Fill, Stroke};
use crate::types::{parse_opt, TextAlign, TextBaseline, TextJustify, TextPlacement};

pub const DEFAULT_TEXT_FILL_COLOR: &str = "#333";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextOptions {
    pub font: Option<String>,
    pub max_angle: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub overflow: Option<bool>,
    pub placement: Option<String>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub rotate_with_view: Option<bool>,
    pub text: Option<String>,
    pub text_align: Option<String>,
    pub text_baseline: Option<String>,
    pub justify: Option<String>,
    pub padding: Option<[f64; 4]>,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub background_fill: Option<Fill>,
    pub background_stroke: Option<Stroke>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    font: Option<String>,
    max_angle: f64,
    offset_x: f64,
    offset_y: f64,
    overflow: bool,
    placement: TextPlacement,
    scale: f64,
    rotation: f64,
    rotate_with_view: bool,
    text: Option<String>,
    text_align: Option<TextAlign>,
    text_baseline: Option<TextBaseline>,
    justify: Option<TextJustify>,
    padding: Option<[f64; 4]>,
    fill: Option<Fill>,
    stroke: Option<Stroke>,
    background_fill: Option<Fill>,
    background_stroke: Option<Stroke>,
}

impl Text {
    pub fn new(options: TextOptions) -> Result<Text, StyleError> {
        let padding = match options.padding {
            Some(p) => {
                for v in p {
                    non_negative("padding", v)?;
                }
                Some(p)
            }
            None => None,
        };
        let fill = match options.fill {
            Some(fill) => fill,
            None => Fill::with_color(DEFAULT_TEXT_FILL_COLOR)?,
        };

        Ok(Text {
            font: options.font,
            max_angle: finite("maxAngle", options.max_angle.unwrap_or(FRAC_PI_4))?,
            offset_x: finite("offsetX", options.offset_x.unwrap_or(0.0))?,
            offset_y: finite("offsetY", options.offset_y.unwrap_or(0.0))?,
            overflow: options.overflow.unwrap_or(false),
            placement: parse_opt(options.placement.as_deref())?.unwrap_or(TextPlacement::Point),
            scale: finite("scale", options.scale.unwrap_or(1.0))?,
            rotation: finite("rotation", options.rotation.unwrap_or(0.0))?,
            rotate_with_view: options.rotate_with_view.unwrap_or(false),
            text: options.text,
            text_align: parse_opt(options.text_align.as_deref())?,
            text_baseline: parse_opt(options.text_baseline.as_deref())?,
            justify: parse_opt(options.justify.as_deref())?,
            padding,
            fill: Some(fill),
            stroke: options.stroke,
            background_fill: options.background_fill,
            background_stroke: options.background_stroke,
        })
    }

    pub fn font(&self) -> Option<&str> { self.font.as_deref() }
    pub fn max_angle(&self) -> f64 { self.max_angle }
    pub fn offset_x(&self) -> f64 { self.offset_x }
    pub fn offset_y(&self) -> f64 { self.offset_y }
    pub fn overflow(&self) -> bool { self.overflow }
    pub fn placement(&self) -> TextPlacement { self.placement }
    pub fn scale(&self) -> f64 { self.scale }
    pub fn rotation(&self) -> f64 { self.rotation }
    pub fn rotate_with_view(&self) -> bool { self.rotate_with_view }
    pub fn text(&self) -> Option<&str> { self.text.as_deref() }
    pub fn text_align(&self) -> Option<TextAlign> { self.text_align }
    pub fn text_baseline(&self) -> Option<TextBaseline> { self.text_baseline }
    pub fn justify(&self) -> Option<TextJustify> { self.justify }
    pub fn padding(&self) -> Option<[f64; 4]> { self.padding }
    pub fn fill(&self) -> Option<&Fill> { self.fill.as_ref() }
    pub fn stroke(&self) -> Option<&Stroke> { self.stroke.as_ref() }
    pub fn background_fill(&self) -> Option<&Fill> { self.background_fill.as_ref() }
    pub fn background_stroke(&self) -> Option<&Stroke> { self.background_stroke.as_ref() }
}
