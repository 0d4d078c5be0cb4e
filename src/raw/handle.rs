use core::num::NonZero;

#[cfg(test)]
type Raw = u16;
#[cfg(not(test))]
type Raw = u32;

/// Index of a node slot, stored off by one.
///
/// Stands in for a node pointer: children and parent links are all
/// `Option<Handle>`, which the niche keeps at the size of a bare `Handle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Raw>);

impl Handle {
    /// Number of distinct handles, and so of live nodes in one tree.
    pub(crate) const COUNT: usize = Raw::MAX as usize;

    /// Handle for slot `index`, or `None` once the handle space is used up.
    #[inline]
    pub(crate) const fn new(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((index + 1) as Raw) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Option<Handle>, Raw);

    #[test]
    fn handle_space_is_bounded() {
        assert!(Handle::new(Handle::COUNT - 1).is_some());
        assert_eq!(Handle::new(Handle::COUNT), None);
        assert_eq!(Handle::new(usize::MAX), None);
    }

    #[test]
    fn distinct_slots_get_distinct_handles() {
        assert_ne!(Handle::new(0), Handle::new(1));
        assert_eq!(Handle::new(0).map(Handle::index), Some(0));
    }

    proptest! {
        #[test]
        fn index_survives_the_offset(index in 0..Handle::COUNT) {
            prop_assert_eq!(Handle::new(index).map(Handle::index), Some(index));
        }
    }
}
