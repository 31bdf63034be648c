//! PDF object serialization.
//!
//! Serializes PDF objects to their byte representation according to
//! PDF specification ISO 32000-1:2008 Section 7.3.

use super::EOL;
use crate::object::{Dictionary, Object, ObjectRef};
use std::io::Write;

/// Serializer for PDF objects.
///
/// Dictionaries and arrays are written on one line with single spaces
/// (`<< /Length 42 >>`, `[0 0 612 792]`); indirect objects and streams put
/// their keywords on separate CRLF-terminated lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    /// Create a new object serializer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize an object to bytes.
    pub fn serialize(&self, obj: &Object) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_object(&mut buf, obj);
        buf
    }

    /// Serialize an object to a string (for debugging).
    pub fn serialize_to_string(&self, obj: &Object) -> String {
        String::from_utf8_lossy(&self.serialize(obj)).to_string()
    }

    /// Serialize an indirect object definition.
    ///
    /// Format: `{id} 0 obj CRLF {object} CRLF endobj CRLF`
    pub fn serialize_indirect(&self, id: u32, obj: &Object) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(format!("{} 0 obj", id).as_bytes());
        buf.extend_from_slice(EOL);
        self.write_object(&mut buf, obj);
        buf.extend_from_slice(EOL);
        buf.extend_from_slice(b"endobj");
        buf.extend_from_slice(EOL);
        buf
    }

    /// Wrap a rendered content stream as a numbered indirect object.
    ///
    /// `/Length` is the byte length of `body` as written between the
    /// `stream` and `endstream` delimiter lines.
    pub fn serialize_stream(&self, id: u32, body: &[u8]) -> Vec<u8> {
        let stream = Object::Stream {
            dict: Dictionary::new(),
            data: bytes::Bytes::copy_from_slice(body),
        };
        log::trace!("stream object {}: /Length {}", id, body.len());
        self.serialize_indirect(id, &stream)
    }

    /// Write an object to a buffer.
    fn write_object(&self, w: &mut Vec<u8>, obj: &Object) {
        match obj {
            Object::Integer(i) => w.extend_from_slice(i.to_string().as_bytes()),
            Object::Real(r) => w.extend_from_slice(format_real(*r).as_bytes()),
            Object::Name(n) => self.write_name(w, n),
            Object::Array(arr) => self.write_array(w, arr),
            Object::Dictionary(dict) => self.write_dictionary(w, dict),
            Object::Stream { dict, data } => self.write_stream(w, dict, data),
            Object::Reference(r) => w.extend_from_slice(r.to_string().as_bytes()),
        }
    }

    /// Write a PDF name.
    ///
    /// Names start with `/` and escape special characters with `#xx`.
    fn write_name(&self, w: &mut Vec<u8>, name: &str) {
        w.push(b'/');
        for byte in name.bytes() {
            match byte {
                b'!'
                | b'"'
                | b'$'
                | b'&'
                | b'\''
                | b'*'..=b'.'
                | b'0'..=b'9'
                | b';'
                | b'?'
                | b'@'
                | b'A'..=b'Z'
                | b'^'..=b'z'
                | b'|'
                | b'~' => w.push(byte),
                // Delimiters, whitespace, '#' and anything outside printable ASCII
                _ => {
                    let _ = write!(w, "#{:02X}", byte);
                },
            }
        }
    }

    /// Write a PDF array.
    fn write_array(&self, w: &mut Vec<u8>, arr: &[Object]) {
        w.push(b'[');
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                w.push(b' ');
            }
            self.write_object(w, obj);
        }
        w.push(b']');
    }

    /// Write a PDF dictionary.
    fn write_dictionary(&self, w: &mut Vec<u8>, dict: &Dictionary) {
        w.extend_from_slice(b"<<");
        for (key, value) in dict {
            w.push(b' ');
            self.write_name(w, key);
            w.push(b' ');
            self.write_object(w, value);
        }
        w.extend_from_slice(b" >>");
    }

    /// Write a PDF stream.
    ///
    /// Any `/Length` already in the dictionary is replaced by the data length.
    fn write_stream(&self, w: &mut Vec<u8>, dict: &Dictionary, data: &[u8]) {
        let mut dict_with_length = Dictionary::with_capacity(dict.len() + 1);
        dict_with_length.insert("Length".to_string(), Object::Integer(data.len() as i64));
        for (key, value) in dict {
            if key != "Length" {
                dict_with_length.insert(key.clone(), value.clone());
            }
        }

        self.write_dictionary(w, &dict_with_length);
        w.extend_from_slice(EOL);
        w.extend_from_slice(b"stream");
        w.extend_from_slice(EOL);
        w.extend_from_slice(data);
        w.extend_from_slice(EOL);
        w.extend_from_slice(b"endstream");
    }
}

/// Helper functions for building PDF objects.
impl ObjectSerializer {
    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// Create an Integer object.
    pub fn integer(i: i64) -> Object {
        Object::Integer(i)
    }

    /// Create an Array object.
    pub fn array(items: Vec<Object>) -> Object {
        Object::Array(items)
    }

    /// Create a Dictionary object, keeping entry order.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        let map: Dictionary = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Object::Dictionary(map)
    }

    /// Create a Reference object.
    pub fn reference(id: u32) -> Object {
        Object::Reference(ObjectRef::new(id, 0))
    }

    /// Create a rectangle array `[llx lly urx ury]` from origin and size.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Object {
        Object::Array(vec![
            Object::Real(x),
            Object::Real(y),
            Object::Real(x + width),
            Object::Real(y + height),
        ])
    }
}

/// Format a real number for PDF output.
///
/// Whole values print as integers; others print with at most 5 fractional
/// digits, trailing zeros trimmed. Negative zero and non-finite values
/// print as `0`.
pub(crate) fn format_real(value: f64) -> String {
    if !value.is_finite() {
        log::warn!("non-finite number {} written as 0", value);
        return "0".to_string();
    }
    let formatted = format!("{:.5}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
