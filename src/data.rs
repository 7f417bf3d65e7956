//! Nested socket data
//!
//! Socket values are trees of lists whose leaves are numbers or fields. Nodes
//! normalize them to a fixed depth with [`Data::ensure_nesting_level`] and
//! pair them up with [`zip_long_repeat`].

use std::sync::Arc;

use crate::error::DataError;
use crate::field::FieldRef;

/// Value carried by a socket
#[derive(Debug, Clone)]
pub enum Data {
    /// Scalar number
    Number(f32),
    /// Scalar field
    Field(FieldRef),
    /// Nested sequence
    List(Vec<Data>),
}

impl Data {
    /// Kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Data::Number(_) => "number",
            Data::Field(_) => "field",
            Data::List(_) => "list",
        }
    }

    /// Number of list layers above the first leaf
    ///
    /// Leaves have level 0 and an empty list has level 1. Only the first
    /// element of each list is inspected.
    pub fn nesting_level(&self) -> usize {
        match self {
            Data::Number(_) | Data::Field(_) => 0,
            Data::List(items) => 1 + items.first().map_or(0, Data::nesting_level),
        }
    }

    /// Wrap the data in lists until it reaches `target` levels
    pub fn ensure_nesting_level(self, target: usize) -> Result<Data, DataError> {
        let level = self.nesting_level();
        if level > target {
            return Err(DataError::NestingTooDeep { level, target });
        }
        let mut data = self;
        for _ in level..target {
            data = Data::List(vec![data]);
        }
        Ok(data)
    }

    /// Borrow the items of a list
    pub fn as_list(&self) -> Result<&[Data], DataError> {
        match self {
            Data::List(items) => Ok(items),
            other => Err(DataError::Type {
                expected: "list",
                found: other.kind(),
            }),
        }
    }

    /// Read a number
    pub fn as_number(&self) -> Result<f32, DataError> {
        match self {
            Data::Number(value) => Ok(*value),
            other => Err(DataError::Type {
                expected: "number",
                found: other.kind(),
            }),
        }
    }

    /// Borrow a field
    pub fn as_field(&self) -> Result<&FieldRef, DataError> {
        match self {
            Data::Field(field) => Ok(field),
            other => Err(DataError::Type {
                expected: "field",
                found: other.kind(),
            }),
        }
    }
}

impl PartialEq for Data {
    /// Numbers compare by value, fields by identity
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Data::Number(a), Data::Number(b)) => a == b,
            (Data::Field(a), Data::Field(b)) => Arc::ptr_eq(a, b),
            (Data::List(a), Data::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f32> for Data {
    fn from(value: f32) -> Self {
        Data::Number(value)
    }
}

impl From<FieldRef> for Data {
    fn from(field: FieldRef) -> Self {
        Data::Field(field)
    }
}

impl<T: Into<Data>> From<Vec<T>> for Data {
    fn from(items: Vec<T>) -> Self {
        Data::List(items.into_iter().map(Into::into).collect())
    }
}

/// Pair two sequences, repeating the last element of the shorter one
///
/// Yields `max(a.len(), b.len())` pairs, or nothing when either side is
/// empty.
pub fn zip_long_repeat<'a, A, B>(a: &'a [A], b: &'a [B]) -> ZipLongRepeat<'a, A, B> {
    let len = if a.is_empty() || b.is_empty() {
        0
    } else {
        a.len().max(b.len())
    };
    ZipLongRepeat { a, b, index: 0, len }
}

/// Iterator returned by [`zip_long_repeat`]
#[derive(Debug, Clone)]
pub struct ZipLongRepeat<'a, A, B> {
    a: &'a [A],
    b: &'a [B],
    index: usize,
    len: usize,
}

impl<'a, A, B> Iterator for ZipLongRepeat<'a, A, B> {
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let i = self.index;
        self.index += 1;
        let a = &self.a[i.min(self.a.len() - 1)];
        let b = &self.b[i.min(self.b.len() - 1)];
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<A, B> ExactSizeIterator for ZipLongRepeat<'_, A, B> {}
