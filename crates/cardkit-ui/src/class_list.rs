//! Ordered CSS class list builder
//!
//! Tokens keep insertion order so later tokens (such as a caller-supplied
//! class) stay last and can win on equal specificity.

use std::fmt;

/// An ordered list of CSS class tokens.
///
/// Empty tokens are dropped, duplicates are kept in place of first use.
///
/// # Example
///
/// ```rust
/// use cardkit_ui::ClassList;
///
/// let classes = ClassList::new("card__box")
///     .with_if(true, "card__box--link")
///     .with_opt(Some("promo"));
/// assert_eq!(classes.to_string(), "card__box card__box--link promo");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Start a list from a base token
    pub fn new(base: impl Into<String>) -> Self {
        Self::default().with(base)
    }

    /// Append a token
    pub fn with(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        if !token.is_empty() && !self.contains(token) {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Append a token only when `cond` holds
    pub fn with_if(self, cond: bool, token: impl Into<String>) -> Self {
        if cond {
            self.with(token)
        } else {
            self
        }
    }

    /// Append an optional token
    pub fn with_opt<S: Into<String>>(self, token: Option<S>) -> Self {
        match token {
            Some(token) => self.with(token),
            None => self,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
