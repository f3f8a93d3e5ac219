use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use crate::helpers::trim_empty_properties;
use crate::types::ImageType;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FillLike {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokeLike {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_join: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_dash: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_dash_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miter_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextLike {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_fill: Option<FillLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_stroke: Option<StrokeLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_with_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_baseline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f64; 4]>,
}

macro_rules! image_tag {
    ($name:ident, $variant:ident) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(ImageType::$variant.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use serde::de::{Error, Unexpected};

                let tag = String::deserialize(deserializer)?;
                if tag == ImageType::$variant.as_str() {
                    Ok($name)
                } else {
                    Err(D::Error::invalid_value(Unexpected::Str(&tag), &ImageType::$variant.as_str()))
                }
            }
        }
    };
}

image_tag!(IconTag, Icon);
image_tag!(RegularShapeTag, RegularShape);
image_tag!(CircleStyleTag, CircleStyle);

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IconLike {
    #[serde(rename = "_type", default)]
    pub tag: IconTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_with_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declutter_mode: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegularShapeLike {
    #[serde(rename = "_type", default)]
    pub tag: RegularShapeTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_with_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declutter_mode: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyleLike {
    #[serde(rename = "_type", default)]
    pub tag: CircleStyleTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_with_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declutter_mode: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageLike {
    Icon(IconLike),
    RegularShape(RegularShapeLike),
    CircleStyle(CircleStyleLike),
    Unknown { tag: Option<Value>, fields: Map<String, Value> },
}

impl ImageLike {
    pub fn image_type(&self) -> Option<ImageType> {
        match self {
            ImageLike::Icon(_) => Some(ImageType::Icon),
            ImageLike::RegularShape(_) => Some(ImageType::RegularShape),
            ImageLike::CircleStyle(_) => Some(ImageType::CircleStyle),
            ImageLike::Unknown { .. } => None,
        }
    }

    pub fn unknown_as_icon(fields: &Map<String, Value>) -> Option<IconLike> {
        serde_json::from_value(Value::Object(trim_empty_properties(fields))).ok()
    }
}

impl From<IconLike> for ImageLike {
    fn from(icon: IconLike) -> Self { ImageLike::Icon(icon) }
}

impl From<RegularShapeLike> for ImageLike {
    fn from(shape: RegularShapeLike) -> Self { ImageLike::RegularShape(shape) }
}

impl From<CircleStyleLike> for ImageLike {
    fn from(circle: CircleStyleLike) -> Self { ImageLike::CircleStyle(circle) }
}

impl Serialize for ImageLike {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ImageLike::Icon(icon) => icon.serialize(serializer),
            ImageLike::RegularShape(shape) => shape.serialize(serializer),
            ImageLike::CircleStyle(circle) => circle.serialize(serializer),
            ImageLike::Unknown { tag, fields } => {
                let mut map = fields.clone();
                if let Some(tag) = tag {
                    map.insert(ImageType::TAG_FIELD.to_string(), tag.clone());
                }
                map.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for ImageLike {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let mut fields: Map<String, Value> = Map::deserialize(deserializer)?;
        let tag = fields.remove(ImageType::TAG_FIELD);
        let known = tag.as_ref().and_then(Value::as_str).and_then(ImageType::from_tag);

        Ok(match known {
            Some(ImageType::Icon) => ImageLike::Icon(from_fields(fields).map_err(D::Error::custom)?),
            Some(ImageType::RegularShape) => ImageLike::RegularShape(from_fields(fields).map_err(D::Error::custom)?),
            Some(ImageType::CircleStyle) => ImageLike::CircleStyle(from_fields(fields).map_err(D::Error::custom)?),
            None => ImageLike::Unknown { tag, fields },
        })
    }
}

fn from_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(fields))
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleLike {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextLike>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_not_written() {
        let stroke = StrokeLike { color: Some("#333".into()), width: Some(0.0), ..Default::default() };
        assert_eq!(serde_json::to_value(&stroke).unwrap(), json!({ "color": "#333", "width": 0.0 }));
    }

    #[test]
    fn nulls_read_as_absent() {
        let stroke: StrokeLike = serde_json::from_value(json!({ "color": null, "lineJoin": "round" })).unwrap();
        assert_eq!(stroke.color, None);
        assert_eq!(stroke.line_join.as_deref(), Some("round"));
    }

    #[test]
    fn image_tag_selects_variant() {
        let image: ImageLike = serde_json::from_value(json!({
            "_type": "CircleStyle",
            "radius": 5,
            "fill": { "color": "red" }
        }))
        .unwrap();
        let ImageLike::CircleStyle(circle) = &image else { panic!("expected circle, got {:?}", image) };
        assert_eq!(circle.radius, Some(5.0));
        assert_eq!(image.image_type(), Some(ImageType::CircleStyle));

        let out = serde_json::to_value(&image).unwrap();
        assert_eq!(out["_type"], "CircleStyle");
        assert_eq!(out["fill"]["color"], "red");
    }

    #[test]
    fn variants_carry_their_own_tag() {
        let icon = IconLike { src: Some("a.png".into()), ..Default::default() };
        assert_eq!(serde_json::to_value(&icon).unwrap(), json!({ "_type": "Icon", "src": "a.png" }));

        let wrong: Result<RegularShapeLike, _> = serde_json::from_value(json!({ "_type": "Icon" }));
        assert!(wrong.is_err());
        let untagged: RegularShapeLike = serde_json::from_value(json!({ "points": 3 })).unwrap();
        assert_eq!(untagged.points, Some(3.0));
    }

    #[test]
    fn unknown_tag_is_preserved_verbatim() {
        let input = json!({ "_type": "Sprite", "src": "a.png", "frame": 3 });
        let image: ImageLike = serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(image, ImageLike::Unknown { .. }));
        assert_eq!(serde_json::to_value(&image).unwrap(), input);

        let untagged = json!({ "src": "b.png" });
        let image: ImageLike = serde_json::from_value(untagged.clone()).unwrap();
        assert_eq!(serde_json::to_value(&image).unwrap(), untagged);
    }

    #[test]
    fn unknown_reads_as_icon() {
        let mut fields = Map::new();
        fields.insert("src".into(), json!("a.png"));
        fields.insert("scale".into(), Value::Null);
        let icon = ImageLike::unknown_as_icon(&fields).unwrap();
        assert_eq!(icon.src.as_deref(), Some("a.png"));
        assert_eq!(icon.scale, None);
    }

    #[test]
    fn style_uses_camel_case() {
        let style: StyleLike = serde_json::from_value(json!({
            "zIndex": 2,
            "text": { "textAlign": "left", "offsetX": 4, "rotateWithView": true }
        }))
        .unwrap();
        assert_eq!(style.z_index, Some(2));
        let text = style.text.unwrap();
        assert_eq!(text.text_align.as_deref(), Some("left"));
        assert_eq!(text.offset_x, Some(4.0));
        assert_eq!(text.rotate_with_view, Some(true));
    }
}
