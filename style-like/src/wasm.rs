use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::codec::{construct_style_with, serialize_style};
use crate::config::CodecConfig;
use crate::error::StyleError;
use crate::json::style_to_json;
use crate::like::StyleLike;
use crate::native::Style;

#[wasm_bindgen]
pub struct StyleHandle {
    pub(crate) style: Style,
}

#[wasm_bindgen]
impl StyleHandle {
    #[wasm_bindgen(js_name = fromLike)]
    pub fn from_like(like: JsValue, strict: Option<bool>) -> Result<Option<StyleHandle>, JsValue> {
        console_error_panic_hook::set_once();

        let like: Option<StyleLike> = serde_wasm_bindgen::from_value(like)?;
        let config = if strict.unwrap_or(false) { CodecConfig::strict() } else { CodecConfig::default() };
        Ok(construct_style_with(like.as_ref(), &config).map(|style| StyleHandle { style }))
    }

    #[wasm_bindgen(js_name = toLike)]
    pub fn to_like(&self) -> Result<JsValue, JsValue> {
        to_js(&serialize_style(Some(&self.style)))
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        style_to_json(&self.style).map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = zIndex)]
    pub fn z_index(&self) -> Option<i32> {
        self.style.z_index()
    }
}

#[wasm_bindgen(js_name = normalizeStyle)]
pub fn normalize_style(like: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let like: Option<StyleLike> = serde_wasm_bindgen::from_value(like)?;
    let style = construct_style_with(like.as_ref(), &CodecConfig::default());
    to_js(&serialize_style(style.as_ref()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn js_error(err: StyleError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
