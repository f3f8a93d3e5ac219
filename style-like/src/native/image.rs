use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use crate::color::validate_color;
use crate::error::StyleError;
use crate::native::{finite, finite_pair, non_negative, opt, Fill, Stroke};
use crate::types::{parse_opt, DeclutterMode, ImageType};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconOptions {
    pub anchor: Option<[f64; 2]>,
    pub color: Option<String>,
    pub displacement: Option<[f64; 2]>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub rotate_with_view: Option<bool>,
    pub size: Option<[f64; 2]>,
    pub src: Option<String>,
    pub declutter_mode: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    anchor: [f64; 2],
    color: Option<String>,
    displacement: [f64; 2],
    opacity: f64,
    scale: f64,
    rotation: f64,
    rotate_with_view: bool,
    size: Option<[f64; 2]>,
    src: String,
    declutter_mode: Option<DeclutterMode>,
}

impl Icon {
    pub fn new(options: IconOptions) -> Result<Icon, StyleError> {
        let src = match options.src {
            Some(src) if !src.is_empty() => check_source(src)?,
            _ => return Err(StyleError::MissingField("src")),
        };
        let opacity = options.opacity.unwrap_or(1.0);
        if !(0.0..=1.0).contains(&opacity) {
            return Err(StyleError::number("opacity", opacity));
        }
        let size = match options.size {
            Some([w, h]) => Some([non_negative("size", w)?, non_negative("size", h)?]),
            None => None,
        };

        Ok(Icon {
            anchor: finite_pair("anchor", options.anchor.unwrap_or([0.5, 0.5]))?,
            color: validate_color(options.color)?,
            displacement: finite_pair("displacement", options.displacement.unwrap_or([0.0, 0.0]))?,
            opacity,
            scale: finite("scale", options.scale.unwrap_or(1.0))?,
            rotation: finite("rotation", options.rotation.unwrap_or(0.0))?,
            rotate_with_view: options.rotate_with_view.unwrap_or(false),
            size,
            src,
            declutter_mode: parse_opt(options.declutter_mode.as_deref())?,
        })
    }

    pub fn anchor(&self) -> [f64; 2] { self.anchor }
    pub fn color(&self) -> Option<&str> { self.color.as_deref() }
    pub fn displacement(&self) -> [f64; 2] { self.displacement }
    pub fn opacity(&self) -> f64 { self.opacity }
    pub fn scale(&self) -> f64 { self.scale }
    pub fn rotation(&self) -> f64 { self.rotation }
    pub fn rotate_with_view(&self) -> bool { self.rotate_with_view }
    pub fn size(&self) -> Option<[f64; 2]> { self.size }
    pub fn src(&self) -> &str { &self.src }
    pub fn declutter_mode(&self) -> Option<DeclutterMode> { self.declutter_mode }
}

// Browsers take data URI payloads with or without `=` padding.
const DATA_URI: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// Inline `data:` URIs are decoded up front so a corrupt payload fails here
// instead of at image load.
fn check_source(src: String) -> Result<String, StyleError> {
    if let Some(rest) = src.strip_prefix("data:") {
        let Some((meta, payload)) = rest.split_once(',') else {
            return Err(StyleError::InvalidSource("data URI without payload".to_string()));
        };
        if meta.ends_with(";base64") && DATA_URI.decode(payload.trim()).is_err() {
            return Err(StyleError::InvalidSource("data URI payload is not base64".to_string()));
        }
    }
    Ok(src)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegularShapeOptions {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub points: Option<f64>,
    pub radius: Option<f64>,
    pub radius2: Option<f64>,
    pub angle: Option<f64>,
    pub displacement: Option<[f64; 2]>,
    pub rotation: Option<f64>,
    pub rotate_with_view: Option<bool>,
    pub scale: Option<f64>,
    pub declutter_mode: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegularShape {
    fill: Option<Fill>,
    stroke: Option<Stroke>,
    points: f64,
    radius: f64,
    radius2: Option<f64>,
    angle: f64,
    displacement: [f64; 2],
    rotation: f64,
    rotate_with_view: bool,
    scale: f64,
    declutter_mode: Option<DeclutterMode>,
}

impl RegularShape {
    pub fn new(options: RegularShapeOptions) -> Result<RegularShape, StyleError> {
        let points = options.points.ok_or(StyleError::MissingField("points"))?;
        if !points.is_finite() || points < 2.0 {
            return Err(StyleError::number("points", points));
        }
        RegularShape::build(points, options)
    }

    fn build(points: f64, options: RegularShapeOptions) -> Result<RegularShape, StyleError> {
        let radius = options.radius.ok_or(StyleError::MissingField("radius"))?;
        Ok(RegularShape {
            fill: options.fill,
            stroke: options.stroke,
            points,
            radius: non_negative("radius", radius)?,
            radius2: opt(options.radius2, |v| non_negative("radius2", v))?,
            angle: finite("angle", options.angle.unwrap_or(0.0))?,
            displacement: finite_pair("displacement", options.displacement.unwrap_or([0.0, 0.0]))?,
            rotation: finite("rotation", options.rotation.unwrap_or(0.0))?,
            rotate_with_view: options.rotate_with_view.unwrap_or(false),
            scale: finite("scale", options.scale.unwrap_or(1.0))?,
            declutter_mode: parse_opt(options.declutter_mode.as_deref())?,
        })
    }

    pub fn fill(&self) -> Option<&Fill> { self.fill.as_ref() }
    pub fn stroke(&self) -> Option<&Stroke> { self.stroke.as_ref() }
    // Infinite for circles.
    pub fn points(&self) -> f64 { self.points }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn radius2(&self) -> Option<f64> { self.radius2 }
    pub fn angle(&self) -> f64 { self.angle }
    pub fn displacement(&self) -> [f64; 2] { self.displacement }
    pub fn rotation(&self) -> f64 { self.rotation }
    pub fn rotate_with_view(&self) -> bool { self.rotate_with_view }
    pub fn scale(&self) -> f64 { self.scale }
    pub fn declutter_mode(&self) -> Option<DeclutterMode> { self.declutter_mode }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleOptions {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub radius: Option<f64>,
    pub displacement: Option<[f64; 2]>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub rotate_with_view: Option<bool>,
    pub declutter_mode: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleStyle {
    shape: RegularShape,
}

impl CircleStyle {
    pub fn new(options: CircleOptions) -> Result<CircleStyle, StyleError> {
        let shape = RegularShape::build(f64::INFINITY, RegularShapeOptions {
            fill: options.fill,
            stroke: options.stroke,
            points: None,
            radius: options.radius,
            radius2: None,
            angle: None,
            displacement: options.displacement,
            rotation: options.rotation,
            rotate_with_view: options.rotate_with_view,
            scale: options.scale,
            declutter_mode: options.declutter_mode,
        })?;
        Ok(CircleStyle { shape })
    }

    pub fn as_regular_shape(&self) -> &RegularShape { &self.shape }

    pub fn fill(&self) -> Option<&Fill> { self.shape.fill() }
    pub fn stroke(&self) -> Option<&Stroke> { self.shape.stroke() }
    pub fn radius(&self) -> f64 { self.shape.radius() }
    pub fn displacement(&self) -> [f64; 2] { self.shape.displacement() }
    pub fn scale(&self) -> f64 { self.shape.scale() }
    pub fn rotation(&self) -> f64 { self.shape.rotation() }
    pub fn rotate_with_view(&self) -> bool { self.shape.rotate_with_view() }
    pub fn declutter_mode(&self) -> Option<DeclutterMode> { self.shape.declutter_mode() }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageStyle {
    Icon(Icon),
    RegularShape(RegularShape),
    Circle(CircleStyle),
}

impl ImageStyle {
    pub fn kind(&self) -> ImageType {
        match self {
            ImageStyle::Icon(_) => ImageType::Icon,
            ImageStyle::RegularShape(_) => ImageType::RegularShape,
            ImageStyle::Circle(_) => ImageType::CircleStyle,
        }
    }

    pub fn as_icon(&self) -> Option<&Icon> {
        match self { ImageStyle::Icon(i) => Some(i), _ => None }
    }

    pub fn as_regular_shape(&self) -> Option<&RegularShape> {
        match self {
            ImageStyle::RegularShape(r) => Some(r),
            ImageStyle::Circle(c) => Some(c.as_regular_shape()),
            ImageStyle::Icon(_) => None,
        }
    }

    pub fn as_circle_style(&self) -> Option<&CircleStyle> {
        match self { ImageStyle::Circle(c) => Some(c), _ => None }
    }
}

impl From<Icon> for ImageStyle {
    fn from(i: Icon) -> Self { ImageStyle::Icon(i) }
}

impl From<RegularShape> for ImageStyle {
    fn from(r: RegularShape) -> Self { ImageStyle::RegularShape(r) }
}

impl From<CircleStyle> for ImageStyle {
    fn from(c: CircleStyle) -> Self { ImageStyle::Circle(c) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(src: &str) -> Result<Icon, StyleError> {
        Icon::new(IconOptions { src: Some(src.to_string()), ..Default::default() })
    }

    #[test]
    fn icon_requires_source() {
        assert!(matches!(Icon::new(IconOptions::default()), Err(StyleError::MissingField("src"))));
        assert!(icon("").is_err());

        let ok = icon("a.png").unwrap();
        assert_eq!(ok.src(), "a.png");
        assert_eq!(ok.anchor(), [0.5, 0.5]);
        assert_eq!(ok.opacity(), 1.0);
        assert_eq!(ok.size(), None);
    }

    #[test]
    fn icon_checks_data_uris() {
        assert!(icon("data:image/png;base64,iVBORw0KGgo=").is_ok());
        assert!(icon("data:image/png;base64,iVBORw0KGgo").is_ok());
        assert!(icon("data:image/svg+xml,<svg/>").is_ok());
        assert!(icon("data:image/png;base64,@@not base64@@").is_err());
        assert!(icon("data:image/png;base64").is_err());
    }

    #[test]
    fn icon_opacity_range() {
        let opts = IconOptions { src: Some("a.png".into()), opacity: Some(1.5), ..Default::default() };
        assert!(Icon::new(opts).is_err());
    }

    #[test]
    fn regular_shape_needs_points_and_radius() {
        let no_points = RegularShapeOptions { radius: Some(5.0), ..Default::default() };
        assert!(matches!(RegularShape::new(no_points), Err(StyleError::MissingField("points"))));

        let one_point = RegularShapeOptions { points: Some(1.0), radius: Some(5.0), ..Default::default() };
        assert!(RegularShape::new(one_point).is_err());

        let star = RegularShape::new(RegularShapeOptions {
            points: Some(5.0),
            radius: Some(10.0),
            radius2: Some(4.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(star.points(), 5.0);
        assert_eq!(star.radius2(), Some(4.0));
        assert_eq!(star.angle(), 0.0);
    }

    #[test]
    fn circle_wraps_infinite_point_shape() {
        let circle = CircleStyle::new(CircleOptions {
            radius: Some(6.0),
            fill: Some(Fill::with_color("red").unwrap()),
            declutter_mode: Some("obstacle".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(circle.as_regular_shape().points().is_infinite());
        assert_eq!(circle.radius(), 6.0);
        assert_eq!(circle.declutter_mode(), Some(DeclutterMode::Obstacle));

        let image = ImageStyle::from(circle);
        assert_eq!(image.kind(), ImageType::CircleStyle);
        assert!(image.as_regular_shape().is_some());
        assert!(image.as_circle_style().is_some());
    }

    #[test]
    fn circle_needs_radius() {
        assert!(CircleStyle::new(CircleOptions::default()).is_err());
    }
}
