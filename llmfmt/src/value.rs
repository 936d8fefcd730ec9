//! Renderable value tree.

use std::collections::{BTreeMap, HashMap};
use std::error::Error as StdError;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone};

/// A runtime view of arbitrary data, closed over the shapes the formatter
/// knows how to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A null reference.
    #[default]
    Absent,
    /// Text, boolean and numeric scalars.
    Scalar(Scalar),
    /// Kinds with bespoke rendering, checked before shape dispatch.
    Special(Special),
    /// Named fields in declaration order.
    Record(Vec<Field>),
    /// Ordered elements.
    Sequence(Vec<Value>),
    /// Key-value entries.
    Mapping(Vec<(Value, Value)>),
}

/// Scalar kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Unrecognized kind, carried as its generic textual representation.
    Other(String),
}

/// Kinds with bespoke rendering rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Special {
    /// `None` is the unset timestamp.
    Timestamp(Option<DateTime<FixedOffset>>),
    Duration(Duration),
    Bytes(Vec<u8>),
    /// `None` means no failure.
    Failure(Option<String>),
}

/// Field visibility. Only public fields are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A named member of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub visibility: Visibility,
    pub value: Value,
}

impl Field {
    /// Creates a public field.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            value: value.into(),
        }
    }

    /// Creates a private field, which never appears in rendered output.
    pub fn private(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
            value: value.into(),
        }
    }

    /// Returns true if the field participates in rendering.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

impl Value {
    /// Creates a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Text(s.into()))
    }

    /// Creates a timestamp value in any time zone.
    pub fn timestamp<Tz: TimeZone>(t: DateTime<Tz>) -> Self {
        Value::Special(Special::Timestamp(Some(t.fixed_offset())))
    }

    /// Creates the unset timestamp.
    pub fn unset_timestamp() -> Self {
        Value::Special(Special::Timestamp(None))
    }

    /// Creates a duration value.
    pub fn duration(d: Duration) -> Self {
        Value::Special(Special::Duration(d))
    }

    /// Creates a raw byte sequence value.
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Special(Special::Bytes(b.into()))
    }

    /// Creates a failure value from an optional error.
    pub fn failure(err: Option<&dyn StdError>) -> Self {
        Value::Special(Special::Failure(err.map(|e| e.to_string())))
    }

    /// Starts building a record.
    pub fn record() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Returns true if this is the zero/empty value for its shape.
    ///
    /// Records are never zero on their own; a record whose fields are all
    /// zero renders to an empty string and is omitted that way.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Scalar(s) => match s {
                Scalar::Text(t) => t.is_empty(),
                Scalar::Bool(b) => !b,
                Scalar::Int(i) => *i == 0,
                Scalar::Uint(u) => *u == 0,
                Scalar::Float(f) => *f == 0.0,
                Scalar::Other(_) => false,
            },
            Value::Special(s) => match s {
                Special::Timestamp(t) => t.is_none(),
                Special::Duration(d) => d.is_zero(),
                Special::Bytes(b) => b.is_empty(),
                Special::Failure(f) => f.is_none(),
            },
            Value::Record(_) => false,
            Value::Sequence(items) => items.is_empty(),
            Value::Mapping(entries) => entries.is_empty(),
        }
    }

    /// Returns true for records, sequences and mappings.
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Value::Record(_) | Value::Sequence(_) | Value::Mapping(_)
        )
    }
}

/// Builder for [`Value::Record`].
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: Vec<Field>,
}

impl RecordBuilder {
    /// Appends a public field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Appends a private field.
    pub fn private_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::private(name, value));
        self
    }

    pub fn build(self) -> Value {
        Value::Record(self.fields)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Special> for Value {
    fn from(s: Special) -> Self {
        Value::Special(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Scalar(Scalar::$variant(n as $target))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    /// Widens through the shortest `f32` decimal, so `0.1f32` stays `0.1`.
    fn from(f: f32) -> Self {
        let widened = f.to_string().parse().unwrap_or(f64::from(f));
        Value::Scalar(Scalar::Float(widened))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Scalar(Scalar::Float(f))
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::duration(d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        Value::timestamp(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(b: Box<T>) -> Self {
        (*b).into()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl FromIterator<Field> for Value {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Value::Record(iter.into_iter().collect())
    }
}
