//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for binding kinds on a parameter (usually 0 or 1).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
