//! Splitting normalized paths into components.

/// Ordered, non-empty path components of a home-relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSequence {
    components: Vec<String>,
}

impl ComponentSequence {
    /// Split a normalized path on `/`.
    ///
    /// Empty segments are dropped; `None` if no component remains.
    pub fn split(path: &str) -> Option<Self> {
        let components: Vec<String> = path
            .split('/')
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if components.is_empty() {
            None
        } else {
            Some(Self { components })
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false; a sequence holds at least one component.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Cumulative paths from the shallowest ancestor down to the leaf.
    ///
    /// `a/b/c` yields `a`, `a/b`, `a/b/c`.
    pub fn prefixes(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.components.len()).map(move |n| self.components[..n].join("/"))
    }
}
