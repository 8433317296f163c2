//! The CSS selector subset page helpers need.
//!
//! Backends either render a [`Selector`] to CSS (`Display`) or match it
//! structurally against their own tree.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrMatch {
    /// `[name]`
    Present(String),
    /// `[name="value"]`
    Equals(String, String),
    /// `:not([name])`
    Absent(String),
}

/// `[.ancestor ]tag[attr][attr="value"]:not([attr])...`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    pub ancestor_class: Option<String>,
    pub tag: Option<String>,
    pub attributes: Vec<AttrMatch>,
}

impl Selector {
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self { tag: Some(tag.to_ascii_lowercase()), ..Self::default() }
    }

    /// Any element carrying `name`.
    #[must_use]
    pub fn attribute(name: &str) -> Self {
        Self { attributes: vec![AttrMatch::Present(name.to_owned())], ..Self::default() }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str) -> Self {
        self.attributes.push(AttrMatch::Present(name.to_owned()));
        self
    }

    #[must_use]
    pub fn with_attribute_value(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(AttrMatch::Equals(name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn without_attribute(mut self, name: &str) -> Self {
        self.attributes.push(AttrMatch::Absent(name.to_owned()));
        self
    }

    /// Restrict matches to descendants of an element with `class`.
    #[must_use]
    pub fn within_class(mut self, class: &str) -> Self {
        self.ancestor_class = Some(class.to_owned());
        self
    }

    /// Match an element given its tag and an attribute lookup.
    ///
    /// The ancestor constraint is left to the caller since only it can walk
    /// the tree.
    pub fn matches_element<'a>(&self, tag: &str, attribute: impl Fn(&str) -> Option<&'a str>) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.attributes.iter().all(|m| match m {
            AttrMatch::Present(name) => attribute(name).is_some(),
            AttrMatch::Equals(name, value) => attribute(name) == Some(value.as_str()),
            AttrMatch::Absent(name) => attribute(name).is_none(),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(class) = &self.ancestor_class {
            write!(f, ".{class} ")?;
        }
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        for m in &self.attributes {
            match m {
                AttrMatch::Present(name) => write!(f, "[{name}]")?,
                AttrMatch::Equals(name, value) => write!(f, "[{name}=\"{value}\"]")?,
                AttrMatch::Absent(name) => write!(f, ":not([{name}])")?,
            }
        }
        if self.tag.is_none() && self.attributes.is_empty() {
            f.write_str("*")?;
        }
        Ok(())
    }
}
