//! Filter selection types

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::watchlist::Item;

/// Label of the "no constraint" entry in every single-choice filter
pub const ANY: &str = "Any";

/// One single-choice filter value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    /// No constraint
    #[default]
    Any,
    /// Match this exact value
    Value(String),
}

impl Choice {
    /// Build a choice, treating `Any` in any casing as no constraint
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ANY) {
            Self::Any
        } else {
            Self::Value(value.to_string())
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl FromStr for Choice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY),
            Self::Value(value) => f.write_str(value),
        }
    }
}

/// Current state of every filter control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub media_type: Choice,
    pub medium: Choice,
    pub watched: Choice,
    /// Selected tags; a row matches when it contains at least one
    pub tags: Vec<String>,
}

impl FilterSelection {
    /// Selection with every control at `Any` and no tags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn media_type(mut self, choice: Choice) -> Self {
        self.media_type = choice;
        self
    }

    #[must_use]
    pub fn medium(mut self, choice: Choice) -> Self {
        self.medium = choice;
        self
    }

    #[must_use]
    pub fn watched(mut self, choice: Choice) -> Self {
        self.watched = choice;
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// True when no control narrows the table
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.media_type.is_any() && self.medium.is_any() && self.watched.is_any() && self.tags.is_empty()
    }
}

/// Outcome of a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The randomly chosen row
    Picked(&'a Item),
    /// The filters excluded every row
    NoMatch,
}

impl<'a> Selection<'a> {
    #[must_use]
    pub const fn item(self) -> Option<&'a Item> {
        match self {
            Self::Picked(item) => Some(item),
            Self::NoMatch => None,
        }
    }

    #[must_use]
    pub const fn is_no_match(self) -> bool {
        matches!(self, Self::NoMatch)
    }
}
