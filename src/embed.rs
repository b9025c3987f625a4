use serde::Serialize;
use crate::models::*;

/// 单个 Embed 富文本面板
///
/// 所有 setter 都会覆盖之前的值并返回自身以便链式调用；
/// `add_field` 只追加，不覆盖。未设置的字段在序列化时被省略，
/// 但 `fields` 始终输出 (为空时输出 `[]`)。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmbedPanel {
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<Footer>,
    fields: Vec<Field>,
}

impl EmbedPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn set_url(&mut self, url: &str) -> &mut Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// 设置页脚，整体替换之前的页脚
    pub fn set_footer(&mut self, text: Option<&str>, icon_url: Option<&str>) -> &mut Self {
        self.footer = Some(Footer {
            text: text.map(str::to_string),
            icon_url: icon_url.map(str::to_string),
        });
        self
    }

    pub fn set_thumbnail(&mut self, url: &str) -> &mut Self {
        self.thumbnail = Some(Thumbnail {
            url: Some(url.to_string()),
        });
        self
    }

    pub fn set_image(&mut self, url: &str) -> &mut Self {
        self.image = Some(Image {
            url: Some(url.to_string()),
        });
        self
    }

    /// 设置作者，整体替换之前的作者 (不做部分更新)
    pub fn set_author(
        &mut self,
        name: Option<&str>,
        url: Option<&str>,
        icon_url: Option<&str>,
    ) -> &mut Self {
        self.author = Some(Author {
            name: name.map(str::to_string),
            url: url.map(str::to_string),
            icon_url: icon_url.map(str::to_string),
        });
        self
    }

    /// 追加一个字段，允许重名
    pub fn add_field(&mut self, name: &str, value: &str, inline: bool) -> &mut Self {
        self.fields.push(Field {
            name: name.to_string(),
            value: value.to_string(),
            inline,
        });
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// 序列化为 JSON 对象
    pub fn to_json(&self) -> Result<serde_json::Value, WebhookError> {
        serde_json::to_value(self).map_err(|e| WebhookError::Json(e.to_string()))
    }
}
