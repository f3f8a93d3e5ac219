use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use crate::error::StyleError;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ImageType {
    Icon,
    RegularShape,
    CircleStyle,
}

impl ImageType {
    pub const TAG_FIELD: &'static str = "_type";

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Icon => "Icon",
            ImageType::RegularShape => "RegularShape",
            ImageType::CircleStyle => "CircleStyle",
        }
    }

    pub fn from_tag(tag: &str) -> Option<ImageType> {
        match tag {
            "Icon" => Some(ImageType::Icon),
            "RegularShape" => Some(ImageType::RegularShape),
            "CircleStyle" => Some(ImageType::CircleStyle),
            _ => None,
        }
    }
}

macro_rules! wire_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(StyleError::InvalidEnum { field: $field, value: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(LineCap, "lineCap", {
    Butt => "butt",
    Round => "round",
    Square => "square",
});

wire_enum!(LineJoin, "lineJoin", {
    Bevel => "bevel",
    Round => "round",
    Miter => "miter",
});

wire_enum!(TextPlacement, "placement", {
    Point => "point",
    Line => "line",
});

wire_enum!(DeclutterMode, "declutterMode", {
    Declutter => "declutter",
    Obstacle => "obstacle",
    None => "none",
});

// Canvas `textAlign` values.
wire_enum!(TextAlign, "textAlign", {
    Left => "left",
    Right => "right",
    Center => "center",
    End => "end",
    Start => "start",
});

wire_enum!(TextJustify, "justify", {
    Left => "left",
    Center => "center",
    Right => "right",
});

wire_enum!(TextBaseline, "textBaseline", {
    Bottom => "bottom",
    Top => "top",
    Middle => "middle",
    Alphabetic => "alphabetic",
    Hanging => "hanging",
    Ideographic => "ideographic",
});

pub(crate) fn parse_opt<T: FromStr<Err = StyleError>>(value: Option<&str>) -> Result<Option<T>, StyleError> {
    value.map(str::parse).transpose()
}
