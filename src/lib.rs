//! Self-adjusting ordered collections built on a splay tree.
//!
//! Every access splays the touched key (or its nearest neighbour on a failed search) to the root
//! of the tree, so recently used keys are cheap to reach again. Costs are amortized `O(log n)`;
//! no balance information is stored and a single operation may take `O(n)`.

mod entry;
pub mod error;
pub mod splay_tree;
#[cfg(feature = "sync")]
pub mod sync;

pub use crate::error::{Error, Result};
