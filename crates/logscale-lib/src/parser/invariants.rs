//! Parser self-checks. Failing one is a grammar bug, not a query error.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Counts lookaheads since the last consumed token.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.debug_fuel.get();
        assert!(left != 0, "grammar loop peeked without consuming a token");
        self.debug_fuel.set(left - 1);
    }

    /// Grammar functions are only entered on their opening token.
    #[inline]
    pub(super) fn assert_current(&mut self, opener: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, opener,
            "entered a rule opened by {:?} at {:?}",
            opener, found
        );
    }
}
