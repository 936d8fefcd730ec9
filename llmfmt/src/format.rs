//! Depth-bounded rendering of [`Value`] trees.

use std::fmt::Write;

use chrono::SecondsFormat;

use crate::duration::format_duration;
use crate::label::field_name_to_label;
use crate::value::{Field, Scalar, Special, Value};

/// Default maximum recursion depth.
pub const MAX_DEPTH: usize = 5;

/// Spaces of indentation per depth level.
const INDENT_SIZE: usize = 2;

/// Emitted in place of anything nested deeper than the maximum depth.
pub const TRUNCATION_MARKER: &str = "...";

/// Byte sequences longer than this are shown as a hex prefix plus length.
const BYTES_PREVIEW_LEN: usize = 32;

/// Renders values as compact, label-prefixed text.
///
/// Zero values are omitted, nested blocks are indented by two spaces per
/// level, and anything below `max_depth` is replaced by `...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    max_depth: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}

impl Formatter {
    /// Creates a formatter with the given maximum recursion depth.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the maximum recursion depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Renders a value. An empty string means there is nothing to show.
    pub fn format(&self, value: &Value) -> String {
        self.render(value, 0)
    }

    fn render(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::Absent => String::new(),
            Value::Special(special) => render_special(special),
            Value::Record(fields) => self.render_record(fields, depth),
            Value::Sequence(items) => self.render_sequence(items, depth),
            Value::Mapping(entries) => self.render_mapping(entries, depth),
            Value::Scalar(scalar) => render_scalar(scalar),
        }
    }

    fn render_record(&self, fields: &[Field], depth: usize) -> String {
        if depth > self.max_depth {
            return TRUNCATION_MARKER.to_string();
        }

        let mut out = String::new();
        for field in fields {
            if !field.is_public() || field.value.is_zero() {
                continue;
            }
            let rendered = self.render(&field.value, depth + 1);
            if rendered.is_empty() {
                continue;
            }
            write_entry(&mut out, depth, &field_name_to_label(&field.name), &rendered);
        }
        out
    }

    fn render_sequence(&self, items: &[Value], depth: usize) -> String {
        if items.is_empty() {
            return String::new();
        }
        if depth > self.max_depth {
            return TRUNCATION_MARKER.to_string();
        }

        // The first present element decides between the inline and indexed layouts.
        let complex = items
            .iter()
            .find(|item| !matches!(item, Value::Absent))
            .is_some_and(Value::is_complex);

        if !complex {
            let parts: Vec<String> = items
                .iter()
                .map(|item| self.render(item, depth))
                .filter(|s| !s.is_empty())
                .collect();
            return parts.join(" | ");
        }

        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            let rendered = self.render(item, depth + 1);
            if rendered.is_empty() {
                continue;
            }
            let _ = write!(out, "{}[{i}]\n{rendered}", indent(depth));
            if !rendered.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }

    fn render_mapping(&self, entries: &[(Value, Value)], depth: usize) -> String {
        if entries.is_empty() {
            return String::new();
        }
        if depth > self.max_depth {
            return TRUNCATION_MARKER.to_string();
        }

        let mut rendered: Vec<(String, String)> = entries
            .iter()
            .filter_map(|(key, value)| {
                let value = self.render(value, depth + 1);
                (!value.is_empty()).then(|| (self.render(key, depth), value))
            })
            .collect();
        rendered.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::new();
        for (key, value) in &rendered {
            write_entry(&mut out, depth, key, value);
        }
        out
    }
}

/// Renders a value with the given maximum recursion depth.
pub fn format(value: &Value, max_depth: usize) -> String {
    Formatter::new(max_depth).format(value)
}

fn write_entry(out: &mut String, depth: usize, label: &str, rendered: &str) {
    let indent = indent(depth);
    if rendered.contains('\n') {
        let _ = write!(out, "{indent}{label}:\n{rendered}");
    } else {
        let _ = writeln!(out, "{indent}{label}: {rendered}");
    }
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_SIZE)
}

fn render_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Text(s) => s.clone(),
        Scalar::Bool(true) => "true".to_string(),
        Scalar::Bool(false) => String::new(),
        Scalar::Int(0) | Scalar::Uint(0) => String::new(),
        Scalar::Int(n) => n.to_string(),
        Scalar::Uint(n) => n.to_string(),
        Scalar::Float(f) if *f == 0.0 => String::new(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Other(s) => s.clone(),
    }
}

fn render_special(special: &Special) -> String {
    match special {
        Special::Timestamp(None) => String::new(),
        Special::Timestamp(Some(t)) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
        Special::Duration(d) if d.is_zero() => String::new(),
        Special::Duration(d) => format_duration(*d),
        Special::Bytes(b) if b.len() > BYTES_PREVIEW_LEN => {
            format!("{}...({} bytes)", hex::encode(&b[..BYTES_PREVIEW_LEN]), b.len())
        }
        Special::Bytes(b) => hex::encode(b),
        Special::Failure(None) => String::new(),
        Special::Failure(Some(msg)) => msg.clone(),
    }
}
