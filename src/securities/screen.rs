//! Screening logic sent as the JSON body of the screen endpoint.

use serde::Serialize;
use std::fmt;

/// How the clauses and subgroups of a [`ScreenGroup`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LogicOperator {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Comparison applied by a [`ScreenClause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
}

/// A single `field operator value` condition, e.g. `marketcap gt 1000000000`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenClause {
    pub field: String,
    pub operator: ClauseOperator,
    /// Sent as a string; the service coerces it to the tag's type.
    pub value: String,
}

impl ScreenClause {
    pub fn new(field: impl Into<String>, operator: ClauseOperator, value: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.to_string(),
        }
    }
}

/// A boolean group of clauses and nested groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScreenGroup {
    pub operator: LogicOperator,
    pub clauses: Vec<ScreenClause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ScreenGroup>,
}

impl ScreenGroup {
    /// An empty group whose members must all hold.
    pub fn all() -> Self {
        Self::default()
    }

    /// An empty group where any member may hold.
    pub fn any() -> Self {
        Self {
            operator: LogicOperator::Or,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn clause(
        mut self,
        field: impl Into<String>,
        operator: ClauseOperator,
        value: impl fmt::Display,
    ) -> Self {
        self.clauses.push(ScreenClause::new(field, operator, value));
        self
    }

    #[must_use]
    pub fn group(mut self, group: ScreenGroup) -> Self {
        self.groups.push(group);
        self
    }
}
