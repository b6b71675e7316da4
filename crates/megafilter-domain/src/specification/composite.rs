//! Compound specifications combining child rules with boolean connectives.

use std::fmt;

use super::{BoxedSpecification, Specification};

/// Conjunction of child specifications.
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first child that is not satisfied. With no children the conjunction is
/// vacuously satisfied.
pub struct AndSpecification<T: ?Sized> {
    children: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> Default for AndSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> AndSpecification<T> {
    /// Create an empty conjunction, which matches every candidate
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Create from an ordered list of children
    pub fn from_specs(children: Vec<BoxedSpecification<T>>) -> Self {
        Self { children }
    }

    /// Append a child (builder pattern)
    pub fn with_spec(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.children.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Descriptions of each child, in evaluation order
    pub fn descriptions(&self) -> Vec<String> {
        self.children.iter().map(|c| c.description()).collect()
    }
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    fn is_satisfied(&self, candidate: &T) -> bool {
        self.children.iter().all(|c| c.is_satisfied(candidate))
    }

    fn description(&self) -> String {
        if self.children.is_empty() {
            "all(empty)".to_string()
        } else {
            format!("({})", self.descriptions().join(" AND "))
        }
    }
}

impl<T: ?Sized> fmt::Debug for AndSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndSpecification")
            .field("children", &self.descriptions())
            .finish()
    }
}

/// Disjunction of child specifications.
///
/// Children are evaluated in insertion order and evaluation stops at the
/// first satisfied child. With no children the disjunction is never
/// satisfied.
pub struct OrSpecification<T: ?Sized> {
    children: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> Default for OrSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> OrSpecification<T> {
    /// Create an empty disjunction, which matches no candidate
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Create from an ordered list of children
    pub fn from_specs(children: Vec<BoxedSpecification<T>>) -> Self {
        Self { children }
    }

    /// Append a child (builder pattern)
    pub fn with_spec(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.children.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Descriptions of each child, in evaluation order
    pub fn descriptions(&self) -> Vec<String> {
        self.children.iter().map(|c| c.description()).collect()
    }
}

impl<T: ?Sized> Specification<T> for OrSpecification<T> {
    fn is_satisfied(&self, candidate: &T) -> bool {
        self.children.iter().any(|c| c.is_satisfied(candidate))
    }

    fn description(&self) -> String {
        if self.children.is_empty() {
            "any(empty)".to_string()
        } else {
            format!("({})", self.descriptions().join(" OR "))
        }
    }
}

impl<T: ?Sized> fmt::Debug for OrSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrSpecification")
            .field("children", &self.descriptions())
            .finish()
    }
}

/// Negation of a single child specification
pub struct NotSpecification<T: ?Sized> {
    inner: BoxedSpecification<T>,
}

impl<T: ?Sized> NotSpecification<T> {
    pub fn new(inner: impl Specification<T> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<T: ?Sized> Specification<T> for NotSpecification<T> {
    fn is_satisfied(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied(candidate)
    }

    fn description(&self) -> String {
        format!("NOT {}", self.inner.description())
    }
}

impl<T: ?Sized> fmt::Debug for NotSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotSpecification")
            .field("inner", &self.inner.description())
            .finish()
    }
}
