//! Caller-supplied records naming a component for one render slot.

use crate::props::Props;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One slot of a content area.
///
/// `extra` collects every field besides `type` and `props`; those are the
/// middleware props handed to each middleware alongside the component props.
///
/// ```rust
/// use mosaic_core::ComponentDescriptor;
///
/// let descriptor: ComponentDescriptor = serde_json::from_str(
///     r#"{ "type": "testWithTitleProp", "props": { "title": "test" }, "skipRender": true }"#,
/// ).unwrap();
///
/// assert_eq!(descriptor.kind, "testWithTitleProp");
/// assert_eq!(descriptor.extra.get_bool("skipRender"), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// The registered type key.
    #[serde(rename = "type")]
    pub kind: String,
    /// Props for the component.
    #[serde(default)]
    pub props: Props,
    /// Extra fields, consumed by middleware.
    #[serde(flatten)]
    pub extra: Props,
}

impl ComponentDescriptor {
    /// Create a descriptor without extra fields.
    pub fn new(kind: impl Into<String>, props: Props) -> Self {
        Self {
            kind: kind.into(),
            props,
            extra: Props::new(),
        }
    }

    /// Attach an extra field for middleware.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// The middleware props of this descriptor.
    pub fn middleware_props(&self) -> &Props {
        &self.extra
    }
}
