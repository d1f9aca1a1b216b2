//! Decoded admin console replies.
//!
//! The console answers every action with an XML document whose root
//! `result` element carries a severity `level`, a status `code`, a
//! `timestamp`, and an optional `data` section of arbitrary shape. The
//! decoder turns the whole document into a generic ordered tree
//! ([`XmlValue`]) and [`Envelope`] layers typed accessors for the four
//! well-known fields on top.
//!
//! # Absent-field policy
//!
//! All four typed accessors return `Option` when the expected structure is
//! missing; [`Envelope::require`] is the loud alternative and fails with
//! `ClientError::MissingField`. The policy is the same for every accessor.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ClientError, Result};

/// Status code the console reports when a call succeeded.
pub const SUCCESS_CODE: &str = "NetConnection.Call.Success";

/// Upper bound on element nesting accepted from the server.
const MAX_DEPTH: usize = 64;

const RESULT: &str = "result";
const FIELD_LEVEL: &str = "level";
const FIELD_CODE: &str = "code";
const FIELD_TIMESTAMP: &str = "timestamp";
const FIELD_DATA: &str = "data";

/// One node of a decoded XML document.
///
/// Elements with children become `Map` (insertion-ordered), repeated
/// sibling elements collapse into a `List`, and leaf text becomes `Text`.
/// Element attributes are ignored; the console carries data in element
/// text only.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    /// Leaf text content. Empty elements decode as empty text.
    Text(String),
    /// Child elements, in document order.
    Map(Vec<(String, XmlValue)>),
    /// Repeated sibling elements, in document order.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// Look up a child element by name. Returns `None` on non-`Map` nodes.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Map(children) => children
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Leaf text of this node, if it is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Items of this node, if it is a repeated-element list.
    pub fn as_list(&self) -> Option<&[XmlValue]> {
        match self {
            XmlValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A decoded admin reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    tree: XmlValue,
}

impl Envelope {
    /// Decode a response body.
    ///
    /// An empty or blank body produces an empty envelope whose accessors
    /// are all absent. Anything else must be well-formed XML.
    pub fn decode(body: &str) -> Result<Envelope> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(Envelope {
                tree: XmlValue::Map(Vec::new()),
            });
        }
        Ok(Envelope {
            tree: parse_document(body)?,
        })
    }

    /// The full decoded tree.
    pub fn tree(&self) -> &XmlValue {
        &self.tree
    }

    /// Generic dotted-path lookup, e.g. `get("result.data.name")`.
    pub fn get(&self, path: &str) -> Option<&XmlValue> {
        let mut node = &self.tree;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        Some(node)
    }

    fn result_field(&self, field: &str) -> Option<&XmlValue> {
        self.tree.get(RESULT)?.get(field)
    }

    /// Severity level reported by the console.
    pub fn level(&self) -> Option<&str> {
        self.result_field(FIELD_LEVEL)?.as_text()
    }

    /// Status code reported by the console.
    pub fn code(&self) -> Option<&str> {
        self.result_field(FIELD_CODE)?.as_text()
    }

    /// Server timestamp of the reply.
    pub fn timestamp(&self) -> Option<&str> {
        self.result_field(FIELD_TIMESTAMP)?.as_text()
    }

    /// The optional data section, in its decoded tree form.
    pub fn data(&self) -> Option<&XmlValue> {
        self.result_field(FIELD_DATA)
    }

    /// Look up a `result` field, failing with `MissingField` when absent.
    pub fn require(&self, field: &str) -> Result<&XmlValue> {
        self.result_field(field)
            .ok_or_else(|| ClientError::MissingField {
                field: field.to_string(),
            })
    }

    /// Whether the reply's status code is the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code() == Some(SUCCESS_CODE)
    }
}

fn parse_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Parse(err.to_string())
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

/// Attach a child element, collapsing repeated siblings into a `List`.
fn push_child(children: &mut Vec<(String, XmlValue)>, name: String, value: XmlValue) {
    if let Some((_, existing)) = children.iter_mut().find(|(n, _)| *n == name) {
        if let XmlValue::List(items) = existing {
            items.push(value);
        } else {
            let first = std::mem::replace(existing, XmlValue::List(Vec::with_capacity(2)));
            if let XmlValue::List(items) = existing {
                items.push(first);
                items.push(value);
            }
        }
        return;
    }
    children.push((name, value));
}

fn parse_document(body: &str) -> Result<XmlValue> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut root: Vec<(String, XmlValue)> = Vec::new();
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(start) => {
                let name = element_name(&start);
                let value = parse_element(&mut reader, 1)?;
                push_child(&mut root, name, value);
            }
            Event::Empty(start) => {
                let name = element_name(&start);
                push_child(&mut root, name, XmlValue::Text(String::new()));
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(parse_error)?;
                if !text.trim().is_empty() {
                    return Err(parse_error("text outside of the root element"));
                }
            }
            Event::End(_) => return Err(parse_error("unexpected closing tag")),
            Event::Eof => break,
            _ => {}
        }
    }

    if root.is_empty() {
        return Err(parse_error("document has no root element"));
    }
    Ok(XmlValue::Map(root))
}

fn parse_element(reader: &mut Reader<&[u8]>, depth: usize) -> Result<XmlValue> {
    if depth > MAX_DEPTH {
        return Err(parse_error("element nesting too deep"));
    }

    let mut children: Vec<(String, XmlValue)> = Vec::new();
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(start) => {
                let name = element_name(&start);
                let value = parse_element(reader, depth + 1)?;
                push_child(&mut children, name, value);
            }
            Event::Empty(start) => {
                let name = element_name(&start);
                push_child(&mut children, name, XmlValue::Text(String::new()));
            }
            Event::Text(t) => text.push_str(&t.unescape().map_err(parse_error)?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::End(_) => break,
            Event::Eof => return Err(parse_error("unexpected end of document")),
            _ => {}
        }
    }

    if children.is_empty() {
        Ok(XmlValue::Text(text))
    } else {
        Ok(XmlValue::Map(children))
    }
}
