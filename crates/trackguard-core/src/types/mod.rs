//! Collection aliases used across trackguard.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec, SmallVec2};
