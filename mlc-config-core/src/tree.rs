use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A declarative UI component descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Custom element tag name.
    pub tag: String,
    /// HTML attributes keyed by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    /// DOM properties keyed by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// Optional nested content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Descriptor fields not modelled above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Content nested inside a [`Component`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Component(Box<Component>),
    Components(Vec<Component>),
}

impl Component {
    /// Create a component with no attributes, properties, or content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: None,
            properties: None,
            content: None,
            extra: Map::new(),
        }
    }

    /// Set an attribute, creating the attribute map on first use.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the nested content.
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Return a property value by key.
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Direct child components, flattening the single and list content forms.
    pub fn children(&self) -> Vec<&Component> {
        match &self.content {
            Some(Content::Component(child)) => vec![child.as_ref()],
            Some(Content::Components(children)) => children.iter().collect(),
            Some(Content::Text(_)) | None => Vec::new(),
        }
    }
}
