//! Ranked alternatives.

use std::ops::Index;

/// A candidate target with its preference score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// 1-based position of the alternative's row in the decision matrix.
    pub index: usize,

    /// Closeness to the ideal solution.
    pub score: f64,
}

/// Alternatives ordered best first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RankedList(Vec<Alternative>);

impl RankedList {
    pub(crate) fn from_vec(alternatives: Vec<Alternative>) -> Self {
        Self(alternatives)
    }

    /// The top-ranked alternative, if any.
    pub fn best(&self) -> Option<&Alternative> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alternative> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Alternative] {
        &self.0
    }

    /// 1-based row indices in ranked order.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|a| a.index).collect()
    }

    pub fn into_vec(self) -> Vec<Alternative> {
        self.0
    }
}

impl Index<usize> for RankedList {
    type Output = Alternative;

    fn index(&self, position: usize) -> &Alternative {
        &self.0[position]
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a Alternative;
    type IntoIter = std::slice::Iter<'a, Alternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
