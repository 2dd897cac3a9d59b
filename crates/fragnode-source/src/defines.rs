//! Ordered define and uniform tables.
//!
//! Both tables keep insertion order: the define block and the texture-unit/uniform
//! correspondence must come out the same on every call with the same inputs.

use std::fmt::Write as _;

use linked_hash_map::LinkedHashMap;

/// `#define` entries in emission order.
///
/// Setting a name that already exists replaces its value and moves it to the end, so the
/// emitted block never redefines a macro.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defines {
    entries: LinkedHashMap<String, String>,
}

impl Defines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
        let name = name.into();
        let prev = self.entries.remove(&name);
        self.entries.insert(name, value.to_string());
        prev
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One `#define NAME VALUE` line per entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            let _ = writeln!(out, "#define {name} {value}");
        }
        out
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Defines {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Defines::new();
        d.extend(iter);
        d
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Defines {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

/// A value destined for a `uniform float` / `uniform vecN`.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f64),
    Vector(Vec<f64>),
}

impl UniformValue {
    /// Components as `f32`, ready for upload.
    pub fn components(&self) -> Vec<f32> {
        match self {
            UniformValue::Float(v) => vec![*v as f32],
            UniformValue::Vector(v) => v.iter().map(|c| *c as f32).collect(),
        }
    }
}

impl From<f64> for UniformValue {
    fn from(v: f64) -> Self {
        UniformValue::Float(v)
    }
}

impl From<(f64, f64)> for UniformValue {
    fn from((x, y): (f64, f64)) -> Self {
        UniformValue::Vector(vec![x, y])
    }
}

/// Uniform name -> value, in the order inputs were loaded.
pub type Uniforms = LinkedHashMap<String, UniformValue>;
