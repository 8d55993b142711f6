//! `{placeholder}` substitution in path templates.
//!
//! Placeholders are non-nested `{identifier}` runs. Values that cannot be
//! substituted (missing keys, booleans, nulls) are never an error: the
//! placeholder text is kept as-is, percent-encoded when escaping is on.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::encode::encode_uri_component;
use crate::options::UrlOptions;

/// Value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    /// Not substitutable; kept for callers passing loosely typed maps.
    Bool(bool),
    /// Not substitutable.
    Null,
}

impl ParamValue {
    /// String form of a substitutable value, `None` for the other kinds.
    pub fn as_substitution(&self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Float(f) => Some(format_float(*f)),
            ParamValue::Bool(_) | ParamValue::Null => None,
        }
    }
}

/// Decimal spelling used by web runtimes for non-integer numbers.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        (if f > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if f == 0.0 {
        "0".to_string()
    } else {
        f.to_string()
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Str(v.clone())
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(v: $t) -> Self {
                ParamValue::Int(i64::from(v))
            }
        })*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(f64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

/// Placeholder name → value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(HashMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"))
}

/// Substitute placeholders in `template`, which is made absolute first.
///
/// `substitute("foo/{bar}", &Params::new().with("bar", "a b"), &UrlOptions::default())`
/// yields `/foo/a%20b`.
pub fn substitute(template: &str, params: &Params, options: &UrlOptions) -> String {
    let path = if template.starts_with('/') {
        template.to_string()
    } else {
        format!("/{template}")
    };

    placeholder_re()
        .replace_all(&path, |caps: &Captures| {
            let literal = &caps[0];
            let value = params.get(&caps[1]).and_then(ParamValue::as_substitution);
            match (value, options.escape) {
                (Some(v), true) => encode_uri_component(&v),
                (Some(v), false) => v,
                (None, true) => encode_uri_component(literal),
                (None, false) => literal.to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn escaped() -> UrlOptions {
        UrlOptions::default()
    }

    fn raw() -> UrlOptions {
        UrlOptions::default().with_escape(false)
    }

    #[test]
    fn prepends_leading_slash() {
        assert_eq!(substitute("foo", &Params::new(), &escaped()), "/foo");
        assert_eq!(substitute("/foo", &Params::new(), &escaped()), "/foo");
        assert_eq!(substitute("", &Params::new(), &escaped()), "/");
    }

    #[test]
    fn replaces_strings_and_numbers() {
        let params = Params::new().with("a", "x").with("b", 123).with("c", 1.5);
        assert_eq!(
            substitute("/{a}/{b}/{c}", &params, &escaped()),
            "/x/123/1.5"
        );
    }

    #[test]
    fn whole_floats_print_without_fraction() {
        let params = Params::new().with("n", 64.0).with("z", -0.0);
        assert_eq!(substitute("/{n}/{z}", &params, &escaped()), "/64/0");
    }

    #[test]
    fn escapes_values_by_default() {
        let params = Params::new().with("bar", "hello world/x");
        assert_eq!(
            substitute("/foo/{bar}", &params, &escaped()),
            "/foo/hello%20world%2Fx"
        );
        assert_eq!(
            substitute("/foo/{bar}", &params, &raw()),
            "/foo/hello world/x"
        );
    }

    #[test]
    fn invalid_values_are_kept_literally() {
        let params = Params::new().with("bar", true).with("nil", ParamValue::Null);
        assert_eq!(substitute("/foo/{bar}", &params, &escaped()), "/foo/%7Bbar%7D");
        assert_eq!(substitute("/foo/{bar}", &params, &raw()), "/foo/{bar}");
        assert_eq!(substitute("/{nil}", &params, &raw()), "/{nil}");
        assert_eq!(substitute("/{missing}", &params, &escaped()), "/%7Bmissing%7D");
    }

    #[test]
    fn literal_placeholder_text_is_encoded_as_a_whole() {
        assert_eq!(
            substitute("/{a b}", &Params::new(), &escaped()),
            "/%7Ba%20b%7D"
        );
    }

    #[test]
    fn nested_braces_only_match_innermost() {
        let params = Params::new().with("a", "x");
        assert_eq!(substitute("/{{a}}", &params, &raw()), "/{x}");
        assert_eq!(substitute("/{a", &params, &raw()), "/{a");
        assert_eq!(substitute("/a}", &params, &raw()), "/a}");
        assert_eq!(substitute("/{}", &params, &raw()), "/{}");
    }

    #[test]
    fn multiple_independent_placeholders() {
        let params = Params::new().with("user", "alice").with("size", 64);
        assert_eq!(
            substitute("/avatar/{user}/{size}/{user}", &params, &escaped()),
            "/avatar/alice/64/alice"
        );
    }

    #[test]
    fn decoding_recovers_reserved_characters() {
        for value in ["a b", "x/y", "q?r=s&t", "#frag", "100%", "{}", "ümlaut+plus", ":@$,;"] {
            let params = Params::new().with("v", value);
            let out = substitute("/{v}", &params, &escaped());
            let segment = &out[1..];
            assert!(!segment.contains('/'), "{out}");
            let decoded = percent_decode_str(segment).decode_utf8().unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn params_from_iterator() {
        let params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some(&ParamValue::Str("1".to_string())));
    }
}
