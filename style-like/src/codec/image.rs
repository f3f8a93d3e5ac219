use crate::config::{CodecConfig, UnknownImageTag};
use crate::helpers::try_construct;
use crate::like::{CircleStyleLike, IconLike, ImageLike, RegularShapeLike};
use crate::native::{
    CircleOptions, CircleStyle, Icon, IconOptions, ImageStyle, RegularShape, RegularShapeOptions,
};
use super::{construct_fill, construct_stroke, serialize_fill, serialize_stroke};

pub fn serialize_icon(icon: Option<&Icon>) -> Option<IconLike> {
    let icon = icon?;
    if icon.src().is_empty() {
        return None;
    }
    Some(IconLike {
        anchor: Some(icon.anchor()),
        color: icon.color().map(str::to_string),
        displacement: Some(icon.displacement()),
        opacity: Some(icon.opacity()),
        scale: Some(icon.scale()),
        rotation: Some(icon.rotation()),
        rotate_with_view: Some(icon.rotate_with_view()),
        size: icon.size(),
        src: Some(icon.src().to_string()),
        declutter_mode: icon.declutter_mode().map(|m| m.as_str().to_string()),
        ..Default::default()
    })
}

pub fn construct_icon(like: Option<&IconLike>) -> Option<Icon> {
    let like = like?;
    like.src.as_ref().filter(|s| !s.is_empty())?;
    try_construct(Icon::new, Some(IconOptions {
        anchor: like.anchor,
        color: like.color.clone(),
        displacement: like.displacement,
        opacity: like.opacity,
        scale: like.scale,
        rotation: like.rotation,
        rotate_with_view: like.rotate_with_view,
        size: like.size,
        src: like.src.clone(),
        declutter_mode: like.declutter_mode.clone(),
    }))
}

pub fn serial_regular_shape(shape: Option<&RegularShape>) -> Option<RegularShapeLike> {
    let shape = shape?;
    Some(RegularShapeLike {
        fill: serialize_fill(shape.fill()),
        stroke: serialize_stroke(shape.stroke()),
        // Circles report infinite points, which has no JSON form.
        points: Some(shape.points()).filter(|p| p.is_finite()),
        radius: Some(shape.radius()),
        radius2: shape.radius2(),
        angle: Some(shape.angle()),
        displacement: Some(shape.displacement()),
        rotation: Some(shape.rotation()),
        rotate_with_view: Some(shape.rotate_with_view()),
        scale: Some(shape.scale()),
        declutter_mode: shape.declutter_mode().map(|m| m.as_str().to_string()),
        ..Default::default()
    })
}

pub fn construct_regular_shape(like: Option<&RegularShapeLike>) -> Option<RegularShape> {
    let like = like?;
    try_construct(RegularShape::new, Some(RegularShapeOptions {
        fill: construct_fill(like.fill.as_ref()),
        stroke: construct_stroke(like.stroke.as_ref()),
        points: like.points,
        radius: like.radius,
        radius2: like.radius2,
        angle: like.angle,
        displacement: like.displacement,
        rotation: like.rotation,
        rotate_with_view: like.rotate_with_view,
        scale: like.scale,
        declutter_mode: like.declutter_mode.clone(),
    }))
}

pub fn serial_circle_shape(circle: Option<&CircleStyle>) -> Option<CircleStyleLike> {
    let circle = circle?;
    Some(CircleStyleLike {
        fill: serialize_fill(circle.fill()),
        stroke: serialize_stroke(circle.stroke()),
        radius: Some(circle.radius()),
        displacement: Some(circle.displacement()),
        scale: Some(circle.scale()),
        rotation: Some(circle.rotation()),
        rotate_with_view: Some(circle.rotate_with_view()),
        declutter_mode: circle.declutter_mode().map(|m| m.as_str().to_string()),
        ..Default::default()
    })
}

pub fn construct_circle_style(like: Option<&CircleStyleLike>) -> Option<CircleStyle> {
    let like = like?;
    try_construct(CircleStyle::new, Some(CircleOptions {
        fill: construct_fill(like.fill.as_ref()),
        stroke: construct_stroke(like.stroke.as_ref()),
        radius: like.radius,
        displacement: like.displacement,
        scale: like.scale,
        rotation: like.rotation,
        rotate_with_view: like.rotate_with_view,
        declutter_mode: like.declutter_mode.clone(),
    }))
}

// Circles are checked before regular shapes: a circle is also a regular
// shape and must keep its own tag.
pub fn serialize_image(image: Option<&ImageStyle>) -> Option<ImageLike> {
    let image = image?;
    if let Some(icon) = image.as_icon() {
        return serialize_icon(Some(icon)).map(ImageLike::Icon);
    }
    if let Some(circle) = image.as_circle_style() {
        return serial_circle_shape(Some(circle)).map(ImageLike::CircleStyle);
    }
    if let Some(shape) = image.as_regular_shape() {
        return serial_regular_shape(Some(shape)).map(ImageLike::RegularShape);
    }
    None
}

pub fn construct_image(like: Option<&ImageLike>) -> Option<ImageStyle> {
    construct_image_with(like, &CodecConfig::default())
}

pub fn construct_image_with(like: Option<&ImageLike>, config: &CodecConfig) -> Option<ImageStyle> {
    match like? {
        ImageLike::Icon(icon) => construct_icon(Some(icon)).map(ImageStyle::Icon),
        ImageLike::CircleStyle(circle) => construct_circle_style(Some(circle)).map(ImageStyle::Circle),
        ImageLike::RegularShape(shape) => construct_regular_shape(Some(shape)).map(ImageStyle::RegularShape),
        ImageLike::Unknown { tag, fields } => match config.unknown_image_tag {
            UnknownImageTag::Fallback => {
                tracing::warn!(tag = ?tag, "image without a known _type, reading it as an icon");
                let icon = ImageLike::unknown_as_icon(fields)?;
                construct_icon(Some(&icon)).map(ImageStyle::Icon)
            }
            UnknownImageTag::Reject => {
                tracing::debug!(tag = ?tag, "dropping image without a known _type");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::native::Fill;
    use crate::types::{DeclutterMode, ImageType};

    fn image_like(value: serde_json::Value) -> ImageLike {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn icon_requires_source() {
        let anchored = IconLike { anchor: Some([0.5, 0.5]), ..Default::default() };
        assert!(construct_icon(Some(&anchored)).is_none());

        let sourced = IconLike { src: Some("a.png".into()), ..Default::default() };
        let icon = construct_icon(Some(&sourced)).unwrap();
        assert_eq!(icon.src(), "a.png");
        assert!(construct_icon(None).is_none());
    }

    #[test]
    fn icon_round_trip() {
        let like = image_like(json!({
            "_type": "Icon",
            "src": "marker.png",
            "anchor": [0.5, 1],
            "color": "#FF0000",
            "opacity": 0.8,
            "scale": 2,
            "size": [32, 48],
            "declutterMode": "obstacle"
        }));
        let image = construct_image(Some(&like)).unwrap();
        let icon = image.as_icon().unwrap();
        assert_eq!(icon.declutter_mode(), Some(DeclutterMode::Obstacle));

        let ImageLike::Icon(out) = serialize_image(Some(&image)).unwrap() else { panic!("not an icon") };
        assert_eq!(out.src.as_deref(), Some("marker.png"));
        assert_eq!(out.anchor, Some([0.5, 1.0]));
        assert_eq!(out.color.as_deref(), Some("#FF0000"));
        assert_eq!(out.opacity, Some(0.8));
        assert_eq!(out.scale, Some(2.0));
        assert_eq!(out.size, Some([32.0, 48.0]));
        assert_eq!(out.declutter_mode.as_deref(), Some("obstacle"));
    }

    #[test]
    fn circle_keeps_its_tag() {
        let like = image_like(json!({
            "_type": "CircleStyle",
            "radius": 7,
            "fill": { "color": "#3399CC" },
            "stroke": { "color": "#fff", "width": 1.25 }
        }));
        let image = construct_image(Some(&like)).unwrap();
        assert!(image.as_regular_shape().is_some());

        let out = serialize_image(Some(&image)).unwrap();
        assert_eq!(out.image_type(), Some(ImageType::CircleStyle));
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["_type"], "CircleStyle");
        assert_eq!(value["radius"], 7.0);
        assert_eq!(value["fill"]["color"], "#3399CC");
        assert_eq!(value["stroke"]["width"], 1.25);
        assert!(value.get("points").is_none());
    }

    #[test]
    fn regular_shape_round_trip() {
        let like = image_like(json!({
            "_type": "RegularShape",
            "points": 5,
            "radius": 10,
            "radius2": 4,
            "angle": 0.5,
            "fill": { "color": "red" }
        }));
        let image = construct_image(Some(&like)).unwrap();
        assert!(image.as_circle_style().is_none());

        let ImageLike::RegularShape(out) = serialize_image(Some(&image)).unwrap() else { panic!("not a shape") };
        assert_eq!(out.points, Some(5.0));
        assert_eq!(out.radius, Some(10.0));
        assert_eq!(out.radius2, Some(4.0));
        assert_eq!(out.angle, Some(0.5));
        assert_eq!(out.fill.and_then(|f| f.color).as_deref(), Some("red"));
    }

    #[test]
    fn shape_without_points_is_dropped() {
        let like = image_like(json!({ "_type": "RegularShape", "radius": 3 }));
        assert!(construct_image(Some(&like)).is_none());
    }

    #[test]
    fn untagged_falls_back_to_icon() {
        let like = image_like(json!({ "src": "a.png", "scale": 0.5 }));
        let image = construct_image(Some(&like)).unwrap();
        assert_eq!(image.as_icon().map(Icon::scale), Some(0.5));

        let unknown = image_like(json!({ "_type": "Sprite", "src": "a.png" }));
        assert!(construct_image(Some(&unknown)).unwrap().as_icon().is_some());
    }

    #[test]
    fn untagged_shape_payload_without_src_is_dropped() {
        let like = image_like(json!({ "points": 4, "radius": 8 }));
        assert!(construct_image(Some(&like)).is_none());
    }

    #[test]
    fn strict_config_rejects_untagged() {
        let like = image_like(json!({ "src": "a.png" }));
        assert!(construct_image_with(Some(&like), &CodecConfig::strict()).is_none());
    }

    #[test]
    fn nested_fill_survives_on_shapes() {
        let circle = CircleStyle::new(CircleOptions {
            radius: Some(2.0),
            fill: Some(Fill::with_color("#000").unwrap()),
            ..Default::default()
        })
        .unwrap();
        let out = serial_circle_shape(Some(&circle)).unwrap();
        assert_eq!(out.fill.and_then(|f| f.color).as_deref(), Some("#000"));
        assert_eq!(out.stroke, None);
    }
}
