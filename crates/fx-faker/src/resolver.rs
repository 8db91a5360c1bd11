//! Template resolution over a [`Dataset`].
//!
//! A dataset string may reference other keys with placeholders:
//!
//! ```text
//! "#{Name.first_name} #{last_name}"
//!   ^^^^^ ^^^^^^^^^^   ^^^^^^^^^
//!   subject  method    method only: inherits the subject of the
//!                      key being resolved
//! ```
//!
//! Each match of the placeholder grammar is
//!
//! ```text
//! "("?  "#{"  (letters ".")?  method  "}"  trailing
//! ```
//!
//! where `method` is one or more characters other than `}` and `trailing`
//! is the run of characters after `}` up to the next `#` or the end of the
//! template. The expansion is the concatenation, in order, of each match's
//! optional `(`, the resolved value of `subject.method`, and its trailing
//! run. Text outside any match is not part of the expansion; a template
//! without placeholders is returned unchanged.

use rand::{Rng, RngCore};

use crate::dataset::{Dataset, Node};
use crate::error::{FakerError, ScanError};

/// Marker that opens a placeholder.
pub const PLACEHOLDER_OPEN: &str = "#{";

/// Deepest placeholder nesting followed before giving up.
const EXPANSION_DEPTH_MAX: usize = 32;

/// Resolves dotted keys and expands templates against a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'d> {
    dataset: &'d Dataset,
}

impl<'d> Resolver<'d> {
    #[must_use]
    pub fn new(dataset: &'d Dataset) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub fn dataset(&self) -> &'d Dataset {
        self.dataset
    }

    /// Resolve `key` to a string.
    ///
    /// A scalar is used as is; a list yields a uniformly picked element; a
    /// nested object is [`FakerError::IncompletePath`]. Placeholders in the
    /// result are expanded with the key's first segment as the subject.
    pub fn resolve<R: RngCore + ?Sized>(
        &self,
        key: &str,
        rng: &mut R,
    ) -> Result<String, FakerError> {
        self.resolve_at(key, rng, 0)
    }

    /// Expand every placeholder in `template`. Unqualified placeholders are
    /// looked up under `subject`.
    pub fn expand<R: RngCore + ?Sized>(
        &self,
        template: &str,
        subject: &str,
        rng: &mut R,
    ) -> Result<String, FakerError> {
        self.expand_at(template, subject, rng, 0)
    }

    fn resolve_at<R: RngCore + ?Sized>(
        &self,
        key: &str,
        rng: &mut R,
        depth: usize,
    ) -> Result<String, FakerError> {
        let raw = match self.dataset.node(key)? {
            Node::Scalar(value) => value,
            Node::List(items) => {
                if items.is_empty() {
                    return Err(FakerError::EmptyDataArray {
                        key: key.to_string(),
                    });
                }
                items[rng.gen_range(0..items.len())]
            }
            Node::Object(_) => {
                return Err(FakerError::IncompletePath {
                    key: key.to_string(),
                })
            }
        };

        let result = if raw.contains(PLACEHOLDER_OPEN) {
            self.expand_at(raw, subject_of(key), rng, depth + 1)?
        } else {
            raw.to_string()
        };

        if result.is_empty() {
            return Err(FakerError::EmptyValue {
                key: key.to_string(),
            });
        }
        Ok(result)
    }

    fn expand_at<R: RngCore + ?Sized>(
        &self,
        template: &str,
        subject: &str,
        rng: &mut R,
        depth: usize,
    ) -> Result<String, FakerError> {
        if depth > EXPANSION_DEPTH_MAX {
            return Err(ScanError::TooDeep {
                template: template.to_string(),
                depth_max: EXPANSION_DEPTH_MAX,
            }
            .into());
        }

        let placeholders = scan(template);
        if placeholders.is_empty() {
            return Ok(template.to_string());
        }

        let mut text = String::with_capacity(template.len());
        for placeholder in placeholders {
            text.push_str(placeholder.prefix);

            let qualifier = match placeholder.subject {
                Some(explicit) => explicit.to_lowercase(),
                None => format!("{}.", subject).to_lowercase(),
            };
            let key = qualifier + placeholder.method;
            text.push_str(&self.resolve_at(&key, rng, depth)?);

            text.push_str(placeholder.trailing);
        }
        Ok(text)
    }
}

/// First segment of a dotted key.
fn subject_of(key: &str) -> &str {
    key.split('.').next().unwrap_or(key)
}

/// One match of the placeholder grammar, borrowed from the template.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placeholder<'t> {
    /// `"("` or empty.
    prefix: &'t str,
    /// Explicit subject including its trailing dot, e.g. `"Name."`.
    subject: Option<&'t str>,
    method: &'t str,
    trailing: &'t str,
}

/// All non-overlapping placeholder matches, left to right.
fn scan(template: &str) -> Vec<Placeholder<'_>> {
    let mut placeholders = Vec::new();
    let mut position = 0;
    while position < template.len() {
        match match_at(template, position) {
            Some((placeholder, end)) => {
                placeholders.push(placeholder);
                position = end;
            }
            None => position += 1,
        }
    }
    placeholders
}

/// Try to match a placeholder starting exactly at byte `start`.
///
/// Only ASCII delimiters are ever used as slice bounds, so every slice
/// lands on a character boundary.
fn match_at(template: &str, start: usize) -> Option<(Placeholder<'_>, usize)> {
    let bytes = template.as_bytes();
    let open = PLACEHOLDER_OPEN.as_bytes();

    let prefix_len = if bytes[start] == b'(' && bytes[start + 1..].starts_with(open) {
        1
    } else if bytes[start..].starts_with(open) {
        0
    } else {
        return None;
    };

    let body_start = start + prefix_len + open.len();
    let body_len = bytes[body_start..].iter().position(|b| *b == b'}')?;
    if body_len == 0 {
        return None;
    }
    let body = &template[body_start..body_start + body_len];

    let letters_len = body.bytes().take_while(u8::is_ascii_alphabetic).count();
    let (subject, method) = if letters_len > 0
        && body.as_bytes().get(letters_len) == Some(&b'.')
        && body.len() > letters_len + 1
    {
        let (subject, method) = body.split_at(letters_len + 1);
        (Some(subject), method)
    } else {
        (None, body)
    };

    let trailing_start = body_start + body_len + 1;
    let trailing_len = bytes[trailing_start..]
        .iter()
        .position(|b| *b == b'#')
        .unwrap_or(bytes.len() - trailing_start);
    let end = trailing_start + trailing_len;

    let placeholder = Placeholder {
        prefix: &template[start..start + prefix_len],
        subject,
        method,
        trailing: &template[trailing_start..end],
    };
    Some((placeholder, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_rng::SeededRng;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        Dataset::from_value(value).unwrap()
    }

    #[test]
    fn test_scalar_pass_through() {
        let data = dataset(json!({ "faker": { "car": { "brand": "Volvo" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(resolver.resolve("car.brand", &mut rng).unwrap(), "Volvo");
    }

    #[test]
    fn test_recursive_expansion() {
        let data = dataset(json!({ "faker": { "a": { "b": "#{a.c}-x", "c": "Y" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(resolver.resolve("a.b", &mut rng).unwrap(), "Y-x");
    }

    #[test]
    fn test_subject_inheritance() {
        let data = dataset(json!({ "faker": { "name": { "first": "John" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(resolver.expand("#{first}", "name", &mut rng).unwrap(), "John");
    }

    #[test]
    fn test_inherited_subject_in_dataset() {
        let data = dataset(json!({ "faker": { "name": {
            "first": "Ada",
            "last": "Lovelace",
            "full": "#{first} #{last}"
        } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(resolver.resolve("name.full", &mut rng).unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_explicit_subject_is_lowercased() {
        let data = dataset(json!({ "faker": {
            "name": { "last": "Hopper" },
            "company": { "name": "#{Name.last} Inc" }
        } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(resolver.resolve("company.name", &mut rng).unwrap(), "Hopper Inc");
    }

    #[test]
    fn test_parenthesis_prefix_kept() {
        let data = dataset(json!({ "faker": { "x": { "code": "12" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.expand("(#{code}) 555", "x", &mut rng).unwrap(),
            "(12) 555"
        );
    }

    #[test]
    fn test_no_placeholder_returns_template() {
        let data = Dataset::empty();
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.expand("plain # text", "x", &mut rng).unwrap(),
            "plain # text"
        );
        assert_eq!(rng.draws_count(), 0);
    }

    #[test]
    fn test_text_outside_matches_is_dropped() {
        let data = dataset(json!({ "faker": { "x": { "a": "A", "b": "B" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.expand("lead #{a} #1 #{b}!", "x", &mut rng).unwrap(),
            "A B!"
        );
    }

    #[test]
    fn test_list_pick_is_deterministic() {
        let data = dataset(json!({ "faker": { "name": {
            "first": ["Ada", "Alan", "Grace", "Edsger"]
        } } }));
        let resolver = Resolver::new(&data);

        let mut rng1 = SeededRng::new(7);
        let mut rng2 = SeededRng::new(7);
        for _ in 0..20 {
            let a = resolver.resolve("name.first", &mut rng1).unwrap();
            let b = resolver.resolve("name.first", &mut rng2).unwrap();
            assert_eq!(a, b);
            assert!(["Ada", "Alan", "Grace", "Edsger"].contains(&a.as_str()));
        }
    }

    #[test]
    fn test_missing_path() {
        let data = dataset(json!({ "faker": { "name": { "first": "Ada" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.resolve("missing.key", &mut rng),
            Err(FakerError::AbsentPath {
                key: "missing.key".to_string()
            })
        );
    }

    #[test]
    fn test_empty_array() {
        let data = dataset(json!({ "faker": { "name": { "first": [] } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.resolve("name.first", &mut rng),
            Err(FakerError::EmptyDataArray {
                key: "name.first".to_string()
            })
        );
    }

    #[test]
    fn test_incomplete_path() {
        let data = dataset(json!({ "faker": { "name": { "title": { "job": "Chef" } } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.resolve("name.title", &mut rng),
            Err(FakerError::IncompletePath {
                key: "name.title".to_string()
            })
        );
    }

    #[test]
    fn test_empty_value() {
        let data = dataset(json!({ "faker": { "name": { "nothing": "" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.resolve("name.nothing", &mut rng),
            Err(FakerError::EmptyValue {
                key: "name.nothing".to_string()
            })
        );
    }

    #[test]
    fn test_absent_data() {
        let data = Dataset::empty();
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(resolver.resolve("name.first", &mut rng), Err(FakerError::AbsentData));
    }

    #[test]
    fn test_nested_failure_bubbles_unchanged() {
        let data = dataset(json!({ "faker": { "a": { "b": "#{missing}" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert_eq!(
            resolver.resolve("a.b", &mut rng),
            Err(FakerError::AbsentPath {
                key: "a.missing".to_string()
            })
        );
    }

    #[test]
    fn test_self_reference_is_scan_failure() {
        let data = dataset(json!({ "faker": { "a": { "b": "#{b}" } } }));
        let resolver = Resolver::new(&data);
        let mut rng = SeededRng::new(42);
        assert!(matches!(
            resolver.resolve("a.b", &mut rng),
            Err(FakerError::Other(ScanError::TooDeep { .. }))
        ));
    }

    #[test]
    fn test_scan_grammar() {
        let found = scan("(#{Name.first_name}) x#{last}");
        assert_eq!(
            found,
            vec![
                Placeholder {
                    prefix: "(",
                    subject: Some("Name."),
                    method: "first_name",
                    trailing: ") x",
                },
                Placeholder {
                    prefix: "",
                    subject: None,
                    method: "last",
                    trailing: "",
                },
            ]
        );
    }

    #[test]
    fn test_scan_subject_needs_method() {
        let found = scan("#{Name.}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subject, None);
        assert_eq!(found[0].method, "Name.");

        let dotted = scan("#{a.b.c}");
        assert_eq!(dotted[0].subject, Some("a."));
        assert_eq!(dotted[0].method, "b.c");
    }

    #[test]
    fn test_scan_rejects_malformed() {
        assert!(scan("#{}").is_empty());
        assert!(scan("#{unterminated").is_empty());
        assert!(scan("# {x}").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_multibyte_text() {
        let found = scan("ü#{straße}ö");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].method, "straße");
        assert_eq!(found[0].trailing, "ö");
    }
}
