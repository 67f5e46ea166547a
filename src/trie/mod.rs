pub mod node;
pub mod suggest;

use num::PrimInt;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    trie::{
        node::{NodeId, TrieNode},
        suggest::Suggestions,
    },
    utils::datastruct::arena::Arena,
};

/// Prefix trie with popularity ranked autocomplete.
///
/// Nodes live in an append-only arena; each node maps a `char` to the
/// [`NodeId`] of its child. Nothing is ever removed, so every id the trie
/// hands around stays valid for its whole lifetime.
///
/// `P` is the popularity type (e.g., i64, u32). Any value is accepted,
/// including zero and negatives.
///
/// # Examples
/// ```
/// use trie_autocomplete::Trie;
///
/// let mut trie: Trie = Trie::new();
/// trie.insert("hello", 5);
/// trie.insert("hell", 10);
/// trie.insert("heaven", 7);
/// trie.insert("heavy", 2);
///
/// assert_eq!(trie.autocomplete("hea"), vec!["heaven", "heavy"]);
/// assert!(trie.autocomplete("xyz").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Trie<P = i64> {
    nodes: Arena<TrieNode<P>>,
    root: NodeId,
    /// number of distinct words
    word_count: usize,
}

impl<P> Default for Trie<P>
where
    P: PrimInt,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Insertion
impl<P> Trie<P>
where
    P: PrimInt,
{
    /// Create an empty trie
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(TrieNode::new());
        Trie {
            nodes,
            root,
            word_count: 0,
        }
    }

    /// Insert `word` with `popularity`.
    /// Re-inserting a word overwrites its popularity.
    /// The empty string is a valid word and ends at the root.
    pub fn insert(&mut self, word: &str, popularity: P) {
        let mut current = self.root;
        for ch in word.chars() {
            let next = self.nodes[current].child(ch);
            current = match next {
                Some(child) => child,
                None => {
                    let child = self.nodes.alloc(TrieNode::new());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }
        if self.nodes[current].set_terminal(word, popularity) {
            self.word_count += 1;
        }
        trace!(word, nodes = self.nodes.len(), "trie insert");
    }
}

/// Lookup
impl<P> Trie<P>
where
    P: PrimInt,
{
    /// Number of distinct words
    #[inline]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, the root included
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk down `prefix` without creating anything
    fn find_node(&self, prefix: &str) -> Option<NodeId> {
        let mut current = self.root;
        for ch in prefix.chars() {
            current = self.nodes[current].child(ch)?;
        }
        Some(current)
    }

    /// Whether `word` itself was inserted (a mere prefix does not count)
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|id| self.nodes[id].is_terminal())
    }

    /// Current popularity of `word`
    pub fn popularity(&self, word: &str) -> Option<P> {
        let id = self.find_node(word)?;
        self.nodes[id].terminal().map(|s| s.popularity)
    }

    /// Every word under `prefix` with its popularity, ranked.
    /// An absent prefix gives an empty list.
    pub fn suggestions(&self, prefix: &str) -> Suggestions<P>
    where
        P: Send,
    {
        let Some(start) = self.find_node(prefix) else {
            debug!(prefix, "autocomplete: prefix not found");
            return Suggestions::default();
        };

        let mut collected = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(entry) = node.terminal() {
                collected.push(entry.clone());
            }
            stack.extend(node.children.values().rev().copied());
        }

        let mut suggestions = Suggestions::new(collected);
        suggestions.sort_by_popularity();
        debug!(prefix, hits = suggestions.len(), "autocomplete");
        suggestions
    }

    /// Words starting with `prefix`, most popular first.
    /// Equal popularity is ordered by the word itself.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String>
    where
        P: Send,
    {
        self.suggestions(prefix).into_words()
    }

    /// The first `limit` words of [`Trie::autocomplete`]
    pub fn autocomplete_top(&self, prefix: &str, limit: usize) -> Vec<String>
    where
        P: Send,
    {
        if limit == 0 {
            return Vec::new();
        }
        let mut suggestions = self.suggestions(prefix);
        suggestions.truncate(limit);
        suggestions.into_words()
    }

    /// Autocomplete a batch of prefixes on the rayon pool.
    /// Results come back in the order of `prefixes`.
    pub fn autocomplete_many<S>(&self, prefixes: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
        P: Send + Sync,
    {
        prefixes
            .par_iter()
            .map(|prefix| self.autocomplete(prefix.as_ref()))
            .collect()
    }
}

impl<S, P> Extend<(S, P)> for Trie<P>
where
    S: AsRef<str>,
    P: PrimInt,
{
    fn extend<I: IntoIterator<Item = (S, P)>>(&mut self, iter: I) {
        for (word, popularity) in iter {
            self.insert(word.as_ref(), popularity);
        }
    }
}

impl<S, P> FromIterator<(S, P)> for Trie<P>
where
    S: AsRef<str>,
    P: PrimInt,
{
    fn from_iter<I: IntoIterator<Item = (S, P)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
