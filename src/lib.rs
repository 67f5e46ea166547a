//! This crate is a prefix trie with popularity ranked autocomplete.

pub mod trie;
pub mod seed;
pub mod utils;

/// Trie
/// The top-level struct of this crate.
/// Words are inserted together with an integer popularity, and prefix queries
/// return every inserted word under that prefix, most popular first.
///
/// Internally, it holds:
/// - An append-only arena of nodes
/// - Per node, a child map from `char` to node handle
/// - Per terminal node, the word and its popularity
///
/// `Trie<P>` has one generic parameter:
/// - `P`: Popularity type (e.g., i64, i32, u32). Defaults to `i64`.
///
/// # Ordering
/// Results are sorted by descending popularity.
/// Words with equal popularity are ordered by the word itself (ascending),
/// so the same trie always answers the same way.
///
/// # Errors
/// None. `insert` and `autocomplete` are total; an unknown prefix yields an
/// empty result.
///
/// # Thread Safety
/// Queries take `&self` and may run concurrently.
/// Insertion takes `&mut self`.
pub use trie::Trie;

/// Trie Node
/// A single node of the trie. Exposed for inspection only.
pub use trie::node::{NodeId, TrieNode};

/// Suggestion and Suggestions structures
/// Data structures for ranked autocomplete results.
/// - `Suggestions`: holds a list of results and applies the popularity ordering
/// - `Suggestion`: a single result, containing the word and its popularity
///
/// # Serialization
/// Supported.
pub use trie::suggest::{Suggestion, Suggestions};

/// Seed list loading
/// Parses `word<TAB>popularity` lines into pairs ready for insertion.
pub use seed::{parse_seed, read_seed, SeedError};
