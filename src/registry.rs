//! Append only bookkeeping of spawned bodies, one chain per group of bodies
//! that get drawn the same way.

use std::slice;

/// Ordered handles of the bodies in one group.
///
/// Handles are owned by the chain, kept in insertion order and never
/// removed, so walking it every frame always sees the same sequence
/// (plus whatever was pushed since).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyChain<H> {
    handles: Vec<H>,
}

impl<H> BodyChain<H> {
    /// chain holding a single body
    pub fn new(first: H) -> Self {
        Self {
            handles: vec![first],
        }
    }

    /// new tail
    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    pub fn iter(&self) -> slice::Iter<'_, H> {
        self.handles.iter()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> Default for BodyChain<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
        }
    }
}

impl<'a, H> IntoIterator for &'a BodyChain<H> {
    type Item = &'a H;
    type IntoIter = slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<H> Extend<H> for BodyChain<H> {
    fn extend<I: IntoIterator<Item = H>>(&mut self, iter: I) {
        self.handles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chain_has_one_body() {
        let chain = BodyChain::new(7u32);
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut chain = BodyChain::default();
        assert!(chain.is_empty());
        for handle in [4u32, 1, 9, 9, 3] {
            chain.push(handle);
        }

        assert_eq!(chain.len(), 5);
        assert_eq!(
            chain.iter().copied().collect::<Vec<_>>(),
            vec![4, 1, 9, 9, 3]
        );
    }

    #[test]
    fn iteration_is_restartable() {
        let mut chain = BodyChain::new("ground-middle");
        chain.push("ground-left");
        chain.push("ground-right");

        let first: Vec<_> = chain.iter().collect();
        let second: Vec<_> = (&chain).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn push_after_walk_appends_to_tail() {
        let mut chain = BodyChain::new(1u8);
        assert_eq!(chain.iter().count(), 1);
        chain.extend([2, 3]);
        chain.push(4);
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
