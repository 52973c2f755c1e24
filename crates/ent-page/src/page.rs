//! Ordered set of fragments written as one page.

use crate::fragments::{HEAD, TOP_HEADER};

/// A page made of constant fragments, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    fragments: &'static [&'static str],
}

const ENT_FRAGMENTS: &[&str] = &[HEAD, TOP_HEADER];

impl Page {
    /// The ENT login page: head, then banner.
    pub const fn ent() -> Self {
        Self {
            fragments: ENT_FRAGMENTS,
        }
    }

    /// Fragments in the order they are written.
    pub fn fragments(&self) -> &'static [&'static str] {
        self.fragments
    }

    /// Size of the written page in UTF-8 bytes.
    pub fn byte_len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum()
    }
}
