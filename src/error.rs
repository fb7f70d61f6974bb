//! Error kinds surfaced by this crate.
//!
//! Every operation here treats an out-of-range index, an empty-sequence
//! violation, or a broken internal invariant as a programmer fault: there
//! is no local recovery, and no `Result` threaded through the façade for
//! these. The library panics immediately with a message identifying the
//! violated bound, exactly like `Vec::insert`/`Vec::remove` do for the
//! same class of fault. [`ErrorKind`] exists to give those faults a name
//! in documentation and in the internal-invariant checker; it is not a
//! value callers are expected to match on.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index or offset fell outside the range the operation documents.
    Bounds,
    /// `Pop`, `GetFirst`, or `GetLast` was called on an empty sequence.
    EmptyOperation,
    /// A structural invariant (balance, cached size/depth, leaf fill)
    /// did not hold. Only ever raised by `checkInvariants`-style internal
    /// consistency checks in test builds; indicates a bug in this crate,
    /// never a caller error.
    InternalInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Bounds => "index out of bounds",
            ErrorKind::EmptyOperation => "operation not valid on an empty sequence",
            ErrorKind::InternalInvariant => "internal invariant violated",
        };
        f.write_str(name)
    }
}

#[track_caller]
pub(crate) fn bounds_fail(size: usize, index: usize) -> ! {
    panic!("index out of bounds: size={size} index={index}");
}

#[track_caller]
pub(crate) fn range_fail(size: usize, offset: usize, limit: usize) -> ! {
    panic!("invalid offset or limit: size={size} offset={offset} limit={limit}");
}

#[track_caller]
pub(crate) fn empty_fail(operation: &str) -> ! {
    panic!("{operation} called on empty sequence");
}
