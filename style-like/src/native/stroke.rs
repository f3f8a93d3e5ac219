use crate::color::validate_color;
use crate::error::StyleError;
use crate::native::{finite, non_negative, opt};
use crate::types::{parse_opt, LineCap, LineJoin};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeOptions {
    pub color: Option<String>,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
    pub line_dash: Option<Vec<f64>>,
    pub line_dash_offset: Option<f64>,
    pub miter_limit: Option<f64>,
    pub width: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    color: Option<String>,
    line_cap: Option<LineCap>,
    line_join: Option<LineJoin>,
    line_dash: Option<Vec<f64>>,
    line_dash_offset: Option<f64>,
    miter_limit: Option<f64>,
    width: Option<f64>,
}

impl Stroke {
    pub fn new(options: StrokeOptions) -> Result<Stroke, StyleError> {
        let line_dash = match options.line_dash {
            Some(dash) => {
                for &d in &dash {
                    non_negative("lineDash", d)?;
                }
                Some(dash)
            }
            None => None,
        };

        Ok(Stroke {
            color: validate_color(options.color)?,
            line_cap: parse_opt(options.line_cap.as_deref())?,
            line_join: parse_opt(options.line_join.as_deref())?,
            line_dash,
            line_dash_offset: opt(options.line_dash_offset, |v| finite("lineDashOffset", v))?,
            miter_limit: opt(options.miter_limit, |v| non_negative("miterLimit", v))?,
            width: opt(options.width, |v| non_negative("width", v))?,
        })
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn line_cap(&self) -> Option<LineCap> {
        self.line_cap
    }

    pub fn line_join(&self) -> Option<LineJoin> {
        self.line_join
    }

    pub fn line_dash(&self) -> Option<&[f64]> {
        self.line_dash.as_deref()
    }

    pub fn line_dash_offset(&self) -> Option<f64> {
        self.line_dash_offset
    }

    pub fn miter_limit(&self) -> Option<f64> {
        self.miter_limit
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_enumerated_options() {
        let stroke = Stroke::new(StrokeOptions {
            color: Some("#666CCC".into()),
            line_cap: Some("round".into()),
            line_join: Some("bevel".into()),
            line_dash: Some(vec![4.0, 2.0]),
            width: Some(2.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(stroke.line_cap(), Some(LineCap::Round));
        assert_eq!(stroke.line_join(), Some(LineJoin::Bevel));
        assert_eq!(stroke.line_dash(), Some(&[4.0, 2.0][..]));
        assert_eq!(stroke.width(), Some(2.0));
        assert_eq!(stroke.miter_limit(), None);
    }

    #[test]
    fn empty_options_build_an_empty_stroke() {
        let stroke = Stroke::new(StrokeOptions::default()).unwrap();
        assert_eq!(stroke.color(), None);
        assert_eq!(stroke.line_dash(), None);
    }

    #[test]
    fn rejects_bad_values() {
        let bad_join = StrokeOptions { line_join: Some("zigzag".into()), ..Default::default() };
        assert!(matches!(Stroke::new(bad_join), Err(StyleError::InvalidEnum { field: "lineJoin", .. })));

        let bad_width = StrokeOptions { width: Some(-1.0), ..Default::default() };
        assert!(Stroke::new(bad_width).is_err());

        let bad_dash = StrokeOptions { line_dash: Some(vec![1.0, f64::NAN]), ..Default::default() };
        assert!(Stroke::new(bad_dash).is_err());
    }
}
