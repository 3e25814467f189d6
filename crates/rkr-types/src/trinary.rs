//! Three-valued logic for structural queries.

/// The result of a query that may be definitely true, definitely false, or
/// undecidable for the given type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trinary {
    Yes,
    Maybe,
    No,
}

impl Trinary {
    pub fn yes(self) -> bool {
        matches!(self, Trinary::Yes)
    }

    pub fn maybe(self) -> bool {
        matches!(self, Trinary::Maybe)
    }

    pub fn no(self) -> bool {
        matches!(self, Trinary::No)
    }
}
