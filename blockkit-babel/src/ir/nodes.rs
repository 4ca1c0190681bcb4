//! Core data structures for the node tree.

use crate::blocks::PostBuild;
use crate::ir::normalize::{normalize, ChildInput};
use serde_json::Value;

/// What a node renders into.
///
/// The meta-kinds decide the output shape directly; `Tag` names an inline
/// HTML-like element that is resolved through the tag table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Emit `attributes` as a JSON object, discarding children
    Object,
    /// Emit rendered children as a JSON array
    Array,
    /// Emit children joined as a plain string
    Text,
    /// Emit children converted to mrkdwn
    Markup,
    /// Emit children with entity escaping only
    EscapedText,
    /// Inline HTML-like element (`b`, `a`, `ul`, ...)
    Tag(String),
}

impl NodeKind {
    /// Tag name for `Tag` kinds.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            NodeKind::Tag(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        NodeKind::Tag(name.to_string())
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::Tag(name)
    }
}

/// A normalized child: either a node or a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Text(String),
}

/// Attribute value.
///
/// `Absent` marks an optional field that must not be emitted at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    #[default]
    Absent,
    Json(Value),
    Node(Box<Node>),
    List(Vec<AttrValue>),
}

impl AttrValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, AttrValue::Absent)
    }

    /// String content of a JSON string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Stringified form used when the value is serialized into an HTML attribute.
    ///
    /// Nodes and lists have no attribute form.
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            AttrValue::Json(Value::String(s)) => Some(s.clone()),
            AttrValue::Json(Value::Null) => None,
            AttrValue::Json(other) => Some(other.to_string()),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Json(Value::String(value.to_string()))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Json(Value::String(value))
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Json(Value::String(value.clone()))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Json(Value::Bool(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Json(Value::from(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Json(Value::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Json(Value::from(value))
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        AttrValue::Json(value)
    }
}

impl From<Node> for AttrValue {
    fn from(node: Node) -> Self {
        AttrValue::Node(Box::new(node))
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Absent, Into::into)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        AttrValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a value, replacing an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// String value of `key`, if it holds one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A node of the tree handed to the renderer.
///
/// Trees are immutable once built and rendering only borrows them, so the same
/// tree can be rendered any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub children: Vec<Child>,
    /// Check to run on this node's output once it is fully built.
    pub hook: Option<PostBuild>,
}

impl Node {
    pub fn new(kind: NodeKind, attributes: Attributes, children: impl Into<ChildInput>) -> Self {
        Self {
            kind,
            attributes,
            children: normalize(children),
            hook: None,
        }
    }

    /// Empty `Object` node; fill it with [`Node::attr`].
    pub fn object() -> Self {
        Self::new(NodeKind::Object, Attributes::new(), ChildInput::Empty)
    }

    pub fn array(children: impl Into<ChildInput>) -> Self {
        Self::new(NodeKind::Array, Attributes::new(), children)
    }

    pub fn text(children: impl Into<ChildInput>) -> Self {
        Self::new(NodeKind::Text, Attributes::new(), children)
    }

    pub fn markup(children: impl Into<ChildInput>) -> Self {
        Self::new(NodeKind::Markup, Attributes::new(), children)
    }

    pub fn escaped_text(children: impl Into<ChildInput>) -> Self {
        Self::new(NodeKind::EscapedText, Attributes::new(), children)
    }

    /// Inline element without attributes or children.
    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Tag(name.into()), Attributes::new(), ChildInput::Empty)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Append children, normalizing them first.
    pub fn child(mut self, children: impl Into<ChildInput>) -> Self {
        self.children.extend(normalize(children));
        self
    }

    pub fn with_hook(mut self, hook: PostBuild) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.kind.tag_name()
    }

    /// The `type` attribute of an `Object` node.
    pub fn object_type(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Object => self.attributes.get_str("type"),
            _ => None,
        }
    }
}

/// Create a node of the given kind; the counterpart of a JSX factory call.
///
/// Passing a string as `kind` creates an inline element.
pub fn h(
    kind: impl Into<NodeKind>,
    attributes: Attributes,
    children: impl Into<ChildInput>,
) -> Node {
    Node::new(kind.into(), attributes, children)
}
