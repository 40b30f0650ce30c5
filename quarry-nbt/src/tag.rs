use std::borrow::Cow;
use std::fmt;

use crate::TagId;

/// A named NBT tag: a name plus a [`Value`]. The root of every decoded
/// document is a `Tag`, and compound children are `Tag`s owned by their
/// parent. Dropping the root drops the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub(crate) name: Vec<u8>,
    pub(crate) value: Value,
}

/// An NBT payload. Compounds own their children and lists own their
/// elements; the enum variant is the single source of truth for the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    /// Raw string bytes, modified UTF-8 in practice. Never validated or
    /// altered; display paths convert lazily.
    String(Vec<u8>),
    List(List),
    Compound(Vec<Tag>),
    IntArray(Vec<i32>),
}

/// A homogeneous list of payloads. The element id is kept even when the list
/// is empty so it survives for typed access and re-inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub(crate) element: TagId,
    pub(crate) items: Vec<Value>,
}

impl List {
    pub fn new(element: TagId, items: Vec<Value>) -> Self {
        Self { element, items }
    }

    pub fn element(&self) -> TagId {
        self.element
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

/// Render stored string bytes for display. Tries Java's modified UTF-8
/// first, falling back to lossy UTF-8. The stored bytes are untouched.
pub(crate) fn display_str(bytes: &[u8]) -> Cow<str> {
    match cesu8::from_java_cesu8(bytes) {
        Ok(s) => s,
        Err(_) => String::from_utf8_lossy(bytes),
    }
}

impl Tag {
    pub fn new(name: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The tag's name, converted for display.
    pub fn name(&self) -> Cow<str> {
        display_str(&self.name)
    }

    /// The tag's name exactly as stored.
    pub fn name_bytes(&self) -> &[u8] {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> TagId {
        self.value.kind()
    }

    /// A borrowed view of this tag, the entry point to the navigator.
    pub fn view(&self) -> TagView<'_> {
        TagView {
            name: Some(&self.name),
            node: Node::Value(&self.value),
        }
    }

    /// Navigate by dotted path, see [`TagView::get`].
    pub fn get(&self, path: &str) -> Option<TagView<'_>> {
        self.view().get(path)
    }

    pub fn size(&self) -> usize {
        self.view().size()
    }

    /// Index into this tag's children, see [`TagView::item`].
    pub fn item(&self, i: usize) -> Option<TagView<'_>> {
        self.view().item(i)
    }

    pub fn as_int(&self) -> i64 {
        self.view().as_int()
    }

    pub fn as_float(&self) -> f64 {
        self.view().as_float()
    }

    pub fn as_string(&self) -> String {
        self.view().as_string()
    }
}

impl Value {
    pub fn kind(&self) -> TagId {
        match self {
            Value::Byte(_) => TagId::Byte,
            Value::Short(_) => TagId::Short,
            Value::Int(_) => TagId::Int,
            Value::Long(_) => TagId::Long,
            Value::Float(_) => TagId::Float,
            Value::Double(_) => TagId::Double,
            Value::ByteArray(_) => TagId::ByteArray,
            Value::String(_) => TagId::String,
            Value::List(_) => TagId::List,
            Value::Compound(_) => TagId::Compound,
            Value::IntArray(_) => TagId::IntArray,
        }
    }
}

/// A borrowed, non-owning view into a tag tree. Views are cheap to copy and
/// never allocate; elements of the scalar arrays are carried by value since
/// they have no backing `Value` to point at. Nothing obtained through a view
/// is ever freed by the caller.
#[derive(Debug, Clone, Copy)]
pub struct TagView<'a> {
    name: Option<&'a [u8]>,
    node: Node<'a>,
}

#[derive(Debug, Clone, Copy)]
enum Node<'a> {
    Value(&'a Value),
    Byte(i8),
    Int(i32),
}

impl<'a> TagView<'a> {
    /// The name of the viewed tag, if it is a named compound child or the
    /// document root. List and array elements are nameless.
    pub fn name(&self) -> Option<Cow<'a, str>> {
        self.name.map(display_str)
    }

    pub fn kind(&self) -> TagId {
        match self.node {
            Node::Value(v) => v.kind(),
            Node::Byte(_) => TagId::Byte,
            Node::Int(_) => TagId::Int,
        }
    }

    /// The underlying value, when the view points at one. Array elements
    /// return `None`; use the numeric accessors for those.
    pub fn value(&self) -> Option<&'a Value> {
        match self.node {
            Node::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Navigate by dot-separated path. Empty segments are skipped, so
    /// `"a..b."` resolves like `"a.b"` and `""` is the view itself. Each
    /// segment first tries a name match among compound children (in stored
    /// order), then falls back to being a decimal index into the current
    /// list, array or compound. A segment that resolves neither way is a
    /// miss, and misses are `None`, never errors.
    pub fn get(self, path: &str) -> Option<TagView<'a>> {
        let mut current = self;
        for segment in path.split('.') {
            if segment.is_empty() {
                continue;
            }
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn child(self, segment: &str) -> Option<TagView<'a>> {
        if let Node::Value(Value::Compound(children)) = self.node {
            if let Some(tag) = children
                .iter()
                .find(|tag| tag.name.as_slice() == segment.as_bytes())
            {
                return Some(tag.view());
            }
        }
        self.item(segment.parse().ok()?)
    }

    /// Bounds-checked indexed access into a list, array or compound.
    pub fn item(self, i: usize) -> Option<TagView<'a>> {
        match self.node {
            Node::Value(Value::List(list)) => list.items.get(i).map(|value| TagView {
                name: None,
                node: Node::Value(value),
            }),
            Node::Value(Value::Compound(children)) => children.get(i).map(Tag::view),
            Node::Value(Value::ByteArray(bytes)) => bytes.get(i).map(|b| TagView {
                name: None,
                node: Node::Byte(*b),
            }),
            Node::Value(Value::IntArray(ints)) => ints.get(i).map(|n| TagView {
                name: None,
                node: Node::Int(*n),
            }),
            _ => None,
        }
    }

    /// Child count for lists, arrays and compounds; 0 for everything else.
    pub fn size(&self) -> usize {
        match self.node {
            Node::Value(Value::List(list)) => list.items.len(),
            Node::Value(Value::Compound(children)) => children.len(),
            Node::Value(Value::ByteArray(bytes)) => bytes.len(),
            Node::Value(Value::IntArray(ints)) => ints.len(),
            _ => 0,
        }
    }

    /// The numeric value of any integer or float kind, as i64. Floats
    /// truncate. Non-numeric kinds are 0.
    pub fn as_int(&self) -> i64 {
        match self.node {
            Node::Byte(b) => b as i64,
            Node::Int(n) => n as i64,
            Node::Value(v) => match *v {
                Value::Byte(n) => n as i64,
                Value::Short(n) => n as i64,
                Value::Int(n) => n as i64,
                Value::Long(n) => n,
                Value::Float(n) => n as i64,
                Value::Double(n) => n as i64,
                _ => 0,
            },
        }
    }

    /// The numeric value of any integer or float kind, as f64. Non-numeric
    /// kinds are 0.0.
    pub fn as_float(&self) -> f64 {
        match self.node {
            Node::Byte(b) => b as f64,
            Node::Int(n) => n as f64,
            Node::Value(v) => match *v {
                Value::Byte(n) => n as f64,
                Value::Short(n) => n as f64,
                Value::Int(n) => n as f64,
                Value::Long(n) => n as f64,
                Value::Float(n) => n as f64,
                Value::Double(n) => n,
                _ => 0.0,
            },
        }
    }

    /// Renders the value: the content for strings, the decimal form for
    /// numbers, and a multi-line json-style tree for lists, arrays and
    /// compounds. Containers are truncated past their tenth entry once they
    /// hold more than fifteen.
    pub fn as_string(&self) -> String {
        match self.node {
            Node::Byte(b) => b.to_string(),
            Node::Int(n) => n.to_string(),
            Node::Value(v) => match v {
                Value::Byte(n) => n.to_string(),
                Value::Short(n) => n.to_string(),
                Value::Int(n) => n.to_string(),
                Value::Long(n) => n.to_string(),
                Value::Float(n) => n.to_string(),
                Value::Double(n) => n.to_string(),
                Value::String(s) => display_str(s).into_owned(),
                Value::ByteArray(_) | Value::IntArray(_) | Value::List(_) | Value::Compound(_) => {
                    self.container_string()
                }
            },
        }
    }

    fn container_string(&self) -> String {
        let size = self.size();
        let mut out = format!("{} entries\n{{\n", size);
        for i in 0..size {
            if i >= 10 && size > 15 {
                out.push_str(&format!("  ... and {} more\n", size - 10));
                break;
            }
            let item = match self.item(i) {
                Some(item) => item,
                None => continue,
            };
            // compound children print their own name, list and array
            // elements print their index
            let name = match item.name {
                Some(name) => display_str(name).into_owned(),
                None => i.to_string(),
            };
            let entry = format!(
                "  {}('{}'): {}",
                item.kind().type_name(),
                name,
                item.as_string()
            );
            out.push_str(&entry.replace('\n', "\n  "));
            out.push('\n');
        }
        out.push('}');
        out
    }

    /// The i-th element as an integer; 0 when out of bounds or non-numeric.
    pub fn item_as_int(&self, i: usize) -> i64 {
        self.item(i).map_or(0, |item| item.as_int())
    }

    /// The i-th element as a float; 0.0 when out of bounds or non-numeric.
    pub fn item_as_float(&self, i: usize) -> f64 {
        self.item(i).map_or(0.0, |item| item.as_float())
    }

    /// The i-th element rendered as a string; empty when out of bounds.
    pub fn item_as_string(&self, i: usize) -> String {
        self.item(i).map_or_else(String::new, |item| item.as_string())
    }
}

impl fmt::Display for TagView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.name {
            Some(name) => display_str(name).into_owned(),
            None => String::new(),
        };
        write!(
            f,
            "{}('{}'): {}",
            self.kind().type_name(),
            name,
            self.as_string()
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}
