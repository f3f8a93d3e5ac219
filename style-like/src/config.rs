use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownImageTag {
    #[default]
    Fallback,
    Reject,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(default)]
pub struct CodecConfig {
    pub unknown_image_tag: UnknownImageTag,
}

impl CodecConfig {
    pub fn strict() -> Self {
        CodecConfig { unknown_image_tag: UnknownImageTag::Reject }
    }
}
