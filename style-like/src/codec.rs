mod image;

pub use image::{
    serialize_icon, construct_icon, serial_regular_shape, construct_regular_shape,
    serial_circle_shape, construct_circle_style, serialize_image, construct_image,
    construct_image_with,
};

use serde_json::Value;
use crate::config::CodecConfig;
use crate::helpers::{trim_value, try_construct};
use crate::like::{FillLike, StrokeLike, TextLike, StyleLike};
use crate::native::{Fill, FillOptions, Stroke, StrokeOptions, Text, TextOptions, Style, StyleOptions, StyleObject};

pub fn serialize_fill(fill: Option<&Fill>) -> Option<FillLike> {
    let color = fill?.color().filter(|c| !c.is_empty())?;
    Some(FillLike { color: Some(color.to_string()) })
}

pub fn construct_fill(like: Option<&FillLike>) -> Option<Fill> {
    let color = like?.color.as_ref().filter(|c| !c.is_empty())?;
    try_construct(Fill::new, Some(FillOptions { color: Some(color.clone()) }))
}

pub fn serialize_stroke(stroke: Option<&Stroke>) -> Option<StrokeLike> {
    let stroke = stroke?;
    Some(StrokeLike {
        color: stroke.color().map(str::to_string),
        line_cap: stroke.line_cap().map(|c| c.as_str().to_string()),
        line_join: stroke.line_join().map(|j| j.as_str().to_string()),
        line_dash: stroke.line_dash().map(<[f64]>::to_vec),
        line_dash_offset: stroke.line_dash_offset(),
        miter_limit: stroke.miter_limit(),
        width: stroke.width(),
    })
}

pub fn construct_stroke(like: Option<&StrokeLike>) -> Option<Stroke> {
    let like = like?;
    try_construct(Stroke::new, Some(StrokeOptions {
        color: like.color.clone(),
        line_cap: like.line_cap.clone(),
        line_join: like.line_join.clone(),
        line_dash: like.line_dash.clone(),
        line_dash_offset: like.line_dash_offset,
        miter_limit: like.miter_limit,
        width: like.width,
    }))
}

pub fn serialize_text(text: Option<&Text>) -> Option<TextLike> {
    let text = text?;
    Some(TextLike {
        background_fill: serialize_fill(text.background_fill()),
        background_stroke: serialize_stroke(text.background_stroke()),
        fill: serialize_fill(text.fill()),
        stroke: serialize_stroke(text.stroke()),
        font: text.font().map(str::to_string),
        max_angle: Some(text.max_angle()),
        offset_x: Some(text.offset_x()),
        offset_y: Some(text.offset_y()),
        overflow: Some(text.overflow()),
        placement: Some(text.placement().as_str().to_string()),
        scale: Some(text.scale()),
        rotation: Some(text.rotation()),
        rotate_with_view: Some(text.rotate_with_view()),
        text: text.text().map(str::to_string),
        text_align: text.text_align().map(|a| a.as_str().to_string()),
        text_baseline: text.text_baseline().map(|b| b.as_str().to_string()),
        justify: text.justify().map(|j| j.as_str().to_string()),
        padding: text.padding(),
    })
}

pub fn construct_text(like: Option<&TextLike>) -> Option<Text> {
    let like = like?;
    try_construct(Text::new, Some(TextOptions {
        font: like.font.clone(),
        max_angle: like.max_angle,
        offset_x: like.offset_x,
        offset_y: like.offset_y,
        overflow: like.overflow,
        placement: like.placement.clone(),
        scale: like.scale,
        rotation: like.rotation,
        rotate_with_view: like.rotate_with_view,
        text: like.text.clone(),
        text_align: like.text_align.clone(),
        text_baseline: like.text_baseline.clone(),
        justify: like.justify.clone(),
        padding: like.padding,
        fill: construct_fill(like.fill.as_ref()),
        stroke: construct_stroke(like.stroke.as_ref()),
        background_fill: construct_fill(like.background_fill.as_ref()),
        background_stroke: construct_stroke(like.background_stroke.as_ref()),
    }))
}

pub fn serialize_style(style: Option<&Style>) -> Option<StyleLike> {
    let style = style?;
    Some(StyleLike {
        image: serialize_image(style.image()),
        fill: serialize_fill(style.fill()),
        stroke: serialize_stroke(style.stroke()),
        text: serialize_text(style.text()),
        z_index: style.z_index(),
    })
}

pub fn construct_style(like: Option<&StyleLike>) -> Option<Style> {
    construct_style_with(like, &CodecConfig::default())
}

// Each member is rebuilt on its own, so one bad member leaves the rest intact.
pub fn construct_style_with(like: Option<&StyleLike>, config: &CodecConfig) -> Option<Style> {
    let like = like?;
    try_construct(Style::new, Some(StyleOptions {
        fill: construct_fill(like.fill.as_ref()),
        stroke: construct_stroke(like.stroke.as_ref()),
        text: construct_text(like.text.as_ref()),
        image: construct_image_with(like.image.as_ref(), config),
        z_index: like.z_index,
    }))
}

pub fn serialize_object(object: &StyleObject) -> Option<Value> {
    let value = match object {
        StyleObject::Fill(f) => serde_json::to_value(serialize_fill(Some(f))?),
        StyleObject::Stroke(s) => serde_json::to_value(serialize_stroke(Some(s))?),
        StyleObject::Text(t) => serde_json::to_value(serialize_text(Some(t))?),
        StyleObject::Image(i) => serde_json::to_value(serialize_image(Some(i))?),
        StyleObject::Style(s) => serde_json::to_value(serialize_style(Some(s))?),
    };
    value.ok().map(trim_value)
}
