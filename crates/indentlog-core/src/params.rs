//! Ordered name/value parameters attached to a log line
//!
//! A pair whose name or value is absent stays in the list but is skipped
//! at render time. This lets callers attach conditional context without
//! branching around the log call.

use indentlog_core_types::schema::PARAM_TIME_MS;

use crate::errors::{IndentLogError, Result};

/// Conversion into an optional parameter name or value
pub trait IntoParam {
    fn into_param(self) -> Option<String>;
}

impl IntoParam for String {
    fn into_param(self) -> Option<String> {
        Some(self)
    }
}

impl IntoParam for &str {
    fn into_param(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoParam for &String {
    fn into_param(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoParam> IntoParam for Option<T> {
    fn into_param(self) -> Option<String> {
        self.and_then(IntoParam::into_param)
    }
}

macro_rules! impl_into_param_display {
    ($($t:ty),*) => {
        $(
            impl IntoParam for $t {
                fn into_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_into_param_display!(bool, char, i32, i64, u32, u64, usize, f64);

/// Ordered list of parameter pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(Option<String>, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding a single pair
    pub fn pair(name: impl IntoParam, value: impl IntoParam) -> Self {
        let mut params = Self::new();
        params.push(name, value);
        params
    }

    /// Build from the alternating form `[name, value, name, value, ...]`
    ///
    /// # Errors
    /// * `OddParameterCount` - If the input has a dangling name
    pub fn from_flat<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoParam,
    {
        let flat: Vec<Option<String>> = items.into_iter().map(IntoParam::into_param).collect();
        if flat.len() % 2 != 0 {
            return Err(IndentLogError::OddParameterCount { len: flat.len() });
        }

        let mut iter = flat.into_iter();
        let mut pairs = Vec::new();
        while let (Some(name), Some(value)) = (iter.next(), iter.next()) {
            pairs.push((name, value));
        }
        Ok(Self { pairs })
    }

    /// Append a pair
    pub fn push(&mut self, name: impl IntoParam, value: impl IntoParam) {
        self.pairs.push((name.into_param(), value.into_param()));
    }

    /// Builder form of `push`
    pub fn with(mut self, name: impl IntoParam, value: impl IntoParam) -> Self {
        self.push(name, value);
        self
    }

    /// Append every pair of `other`, keeping order
    pub fn extend(&mut self, other: Params) {
        self.pairs.extend(other.pairs);
    }

    /// Prepend the elapsed-time pair; an absent elapsed time drops out at render
    pub fn with_timing(self, elapsed_ms: Option<u64>) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        pairs.push((Some(PARAM_TIME_MS.to_string()), elapsed_ms.map(|ms| ms.to_string())));
        pairs.extend(self.pairs);
        Self { pairs }
    }

    /// Number of pairs, including incomplete ones
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs with both name and value present, in input order
    pub fn complete_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().filter_map(|(name, value)| match (name, value) {
            (Some(name), Some(value)) => Some((name.as_str(), value.as_str())),
            _ => None,
        })
    }
}

/// Build a [`Params`] list from `name => value` pairs
///
/// Values may be anything implementing [`IntoParam`], including `Option`s;
/// an absent value drops the pair from the rendered line.
///
/// ```
/// use indentlog_core::params;
///
/// let user: Option<&str> = None;
/// let params = params!["id" => "42", "user" => user];
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.complete_pairs().count(), 1);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::params::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::params::Params::new();
        $(params.push($name, $value);)+
        params
    }};
}
