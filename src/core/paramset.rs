use indexmap::map::IntoIter;
use indexmap::IndexMap;

use crate::core::value::Value;

/// The named parameters of one directive invocation, in insertion order.
/// Insertion order is also the wire order of the rendered parameter list.
/// Built by the caller (usually through [`params!`](crate::params)), consumed
/// once, never mutated by the encoding pipeline.
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
    entries: IndexMap<String, Value>,
}

impl ParamSet {
    pub fn new() -> Self {
        ParamSet {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.entries.insert(name.to_owned(), value.into());
    }

    /// Chaining form of [`ParamSet::insert`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn into_entries(self) -> IntoIter<String, Value> {
        self.entries.into_iter()
    }
}

/// Builds a [`ParamSet`] with keyword-argument syntax:
///
/// ```
/// use pbrt_writer::{params, rgb};
///
/// let ps = params! {
///     radius: 1.0,
///     Kd: rgb(0.1, 0.2, 0.3),
/// };
/// assert_eq!(ps.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::core::paramset::ParamSet::new() };
    ($($name:ident : $value:expr),+ $(,)?) => {{
        let mut ps = $crate::core::paramset::ParamSet::new();
        $( ps.insert(stringify!($name), $value); )+
        ps
    }};
}
