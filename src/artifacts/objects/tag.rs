//! Git annotated tag object
//!
//! ## Format
//!
//! Body:
//! ```text
//! object <sha>
//! type <kind>
//! tag <name>
//! tagger <name> <email> <timestamp> <timezone>
//!
//! <tag message>
//! ```

use crate::artifacts::codec::error::{CodecError, CodecResult};
use crate::artifacts::codec::text;
use crate::artifacts::objects::headers::{split_headers, write_header};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::artifacts::objects::person::PersonDate;
use bytes::Bytes;

/// Git annotated tag pointing at another object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    object: ObjectId,
    kind: ObjectKind,
    name: String,
    tagger: PersonDate,
    extra_headers: Vec<(String, String)>,
    message: String,
}

impl Tag {
    /// Create a new tag
    ///
    /// # Arguments
    ///
    /// * `object` - ID of the tagged object
    /// * `kind` - Kind of the tagged object
    /// * `name` - Tag name, without newlines
    /// * `tagger` - Who created the tag
    /// * `message` - Tag message
    pub fn new(
        object: ObjectId,
        kind: ObjectKind,
        name: impl Into<String>,
        tagger: PersonDate,
        message: impl Into<String>,
    ) -> Self {
        Tag {
            object,
            kind,
            name: name.into(),
            tagger,
            extra_headers: Vec::new(),
            message: message.into(),
        }
    }

    /// Append a header written after the tagger line
    pub fn with_extra_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    pub fn object(&self) -> &ObjectId {
        &self.object
    }

    /// Kind of the tagged object
    pub fn target_kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagger(&self) -> &PersonDate {
        &self.tagger
    }

    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.extra_headers
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn to_text(&self) -> String {
        let mut content = String::new();

        write_header(&mut content, "object", self.object.as_ref());
        write_header(&mut content, "type", self.kind.as_str());
        write_header(&mut content, "tag", &self.name);
        write_header(&mut content, "tagger", &self.tagger.encode());
        for (key, value) in &self.extra_headers {
            write_header(&mut content, key, value);
        }
        content.push('\n');
        content.push_str(&self.message);

        content
    }
}

fn single_line<'v>(field: &str, value: &'v str) -> CodecResult<&'v str> {
    if value.contains('\n') {
        return Err(CodecError::tag(field, "unexpected continuation line"));
    }
    Ok(value)
}

fn set_once<T>(slot: &mut Option<T>, field: &str, value: T) -> CodecResult<()> {
    if slot.replace(value).is_some() {
        return Err(CodecError::tag(field, "header appears more than once"));
    }
    Ok(())
}

impl Packable for Tag {
    fn serialize(&self) -> Bytes {
        Bytes::from(self.to_text())
    }
}

impl Unpackable for Tag {
    fn deserialize(body: &[u8]) -> CodecResult<Self> {
        let body = text::utf8(body).ok_or_else(|| CodecError::tag("body", "not valid UTF-8"))?;
        let (headers, message) = split_headers(body).map_err(|e| CodecError::tag("headers", e))?;

        let mut object = None;
        let mut kind = None;
        let mut name = None;
        let mut tagger = None;
        let mut extra_headers = Vec::new();

        for (key, value) in headers {
            match key.as_str() {
                "object" => {
                    let oid = ObjectId::try_parse_canonical(&value)
                        .map_err(|e| CodecError::tag("object", e))?;
                    set_once(&mut object, "object", oid)?
                }
                "type" => {
                    let target = ObjectKind::try_from(value.as_str())
                        .map_err(|e| CodecError::tag("type", e))?;
                    set_once(&mut kind, "type", target)?
                }
                "tag" => {
                    let tag_name = single_line("tag", &value)?.to_string();
                    set_once(&mut name, "tag", tag_name)?
                }
                "tagger" => {
                    let person = PersonDate::decode(single_line("tagger", &value)?)
                        .map_err(|e| CodecError::tag("tagger", e))?;
                    set_once(&mut tagger, "tagger", person)?
                }
                _ => extra_headers.push((key, value)),
            }
        }

        Ok(Tag {
            object: object.ok_or_else(|| CodecError::tag("object", "missing"))?,
            kind: kind.ok_or_else(|| CodecError::tag("type", "missing"))?,
            name: name.ok_or_else(|| CodecError::tag("tag", "missing"))?,
            tagger: tagger.ok_or_else(|| CodecError::tag("tagger", "missing"))?,
            extra_headers,
            message: message.to_string(),
        })
    }
}

impl Object for Tag {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Tag
    }

    fn display(&self) -> String {
        self.to_text()
    }
}
