use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Embed 强调色 (RGB 三通道，各 8 位)
///
/// 序列化时输出整数 `(red << 16) | (green << 8) | blue`，而不是 RGB 字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// 计算平台使用的整数颜色值，红色为最高字节
    pub const fn to_int(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// 从整数颜色值还原，忽略 24 位以上的部分
    pub const fn from_int(value: u32) -> Self {
        Self {
            red: (value >> 16) as u8,
            green: (value >> 8) as u8,
            blue: value as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::new(red, green, blue)
    }
}

/// 解析 `#RRGGBB` 或 `RRGGBB` 形式的十六进制颜色
impl FromStr for Color {
    type Err = WebhookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WebhookError::Params(format!("Invalid hex color: {}", s)));
        }

        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| WebhookError::Params(format!("Invalid hex color {}: {}", s, e)))?;
        Ok(Color::from_int(value))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_int())
    }
}

/// Embed 作者信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed 页脚
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed 缩略图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embed 大图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embed 字段 (name / value / inline)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// SDK 错误类型
#[derive(Debug)]
pub enum WebhookError {
    /// 配置错误 (例如 Webhook URL 为空)
    Configuration(String),
    /// 传输错误 (连接、TLS、读写、非成功状态码)
    Transport(String),
    /// JSON 序列化错误
    Json(String),
    /// 参数错误
    Params(String),
}

impl std::fmt::Display for WebhookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebhookError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            WebhookError::Transport(msg) => write!(f, "Transport Error: {}", msg),
            WebhookError::Json(msg) => write!(f, "JSON Error: {}", msg),
            WebhookError::Params(msg) => write!(f, "Params Error: {}", msg),
        }
    }
}

impl std::error::Error for WebhookError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_encodes_red_as_most_significant_byte() {
        assert_eq!(Color::new(255, 0, 0).to_int(), 16711680);
        assert_eq!(Color::new(0, 255, 0).to_int(), 65280);
        assert_eq!(Color::new(0, 0, 255).to_int(), 255);
        assert_eq!(Color::new(255, 255, 255).to_int(), 16777215);
        assert_eq!(Color::new(0, 0, 0).to_int(), 0);
    }

    #[test]
    fn color_serializes_as_integer() {
        let value = serde_json::to_value(Color::new(0x12, 0x34, 0x56)).unwrap();
        assert_eq!(value, json!(0x123456));
    }

    #[test]
    fn color_from_int_drops_high_bits() {
        assert_eq!(Color::from_int(0xFF_AB_CD_EF), Color::new(0xAB, 0xCD, 0xEF));
        assert_eq!(Color::from_int(Color::new(1, 2, 3).to_int()), Color::new(1, 2, 3));
    }

    #[test]
    fn color_parses_hex() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
        assert_eq!("00FF00".parse::<Color>().unwrap(), Color::new(0, 255, 0));
        assert_eq!(Color::from((1, 2, 3)), Color::new(1, 2, 3));
    }

    #[test]
    fn color_rejects_bad_hex() {
        for input in ["", "#fff", "#gg0000", "+12345", "#1234567"] {
            let err = input.parse::<Color>().unwrap_err();
            assert!(matches!(err, WebhookError::Params(_)), "input {:?}", input);
        }
    }

    #[test]
    fn sub_objects_omit_unset_inner_fields() {
        let author = Author {
            name: Some("Ops".to_string()),
            url: None,
            icon_url: None,
        };
        assert_eq!(serde_json::to_value(&author).unwrap(), json!({"name": "Ops"}));

        let footer = Footer {
            text: None,
            icon_url: Some("https://cdn.example/icon.png".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&footer).unwrap(),
            json!({"icon_url": "https://cdn.example/icon.png"})
        );

        let image = Image { url: None };
        assert_eq!(serde_json::to_value(&image).unwrap(), json!({}));
    }

    #[test]
    fn field_keeps_inline_flag() {
        let field = Field {
            name: "HP".to_string(),
            value: "100".to_string(),
            inline: false,
        };
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({"name": "HP", "value": "100", "inline": false})
        );
    }

    #[test]
    fn error_display_names_kind() {
        let err = WebhookError::Configuration("Url is empty".to_string());
        assert_eq!(err.to_string(), "Configuration Error: Url is empty");
    }
}
