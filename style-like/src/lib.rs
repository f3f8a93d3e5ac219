pub mod types;
pub mod error;
pub mod color;
pub mod helpers;
pub mod config;
pub mod native;
pub mod like;
pub mod codec;
pub mod json;
pub mod wasm;

pub use codec::*;
pub use config::{CodecConfig, UnknownImageTag};
pub use error::StyleError;
pub use helpers::{trim_empty_properties, trim_value, try_construct};
pub use json::{style_from_json, style_to_json};
pub use like::*;
pub use native::StyleObject;
pub use types::*;
