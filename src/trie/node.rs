use indexmap::IndexMap;

use crate::{trie::suggest::Suggestion, utils::datastruct::arena::ArenaSlot};

/// Handle of a node inside a trie's node arena
pub type NodeId = ArenaSlot;

/// One node of the trie.
/// The path of characters from the root to this node spells its prefix.
#[derive(Debug, Clone)]
pub struct TrieNode<P> {
    /// child per next character, in first-insertion order
    pub(crate) children: IndexMap<char, NodeId>,
    /// the word ending here, if any
    pub(crate) terminal: Option<Suggestion<P>>,
}

impl<P> Default for TrieNode<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TrieNode<P> {
    pub fn new() -> Self {
        TrieNode {
            children: IndexMap::new(),
            terminal: None,
        }
    }

    #[inline]
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    pub fn terminal(&self) -> Option<&Suggestion<P>> {
        self.terminal.as_ref()
    }

    /// Mark this node as the end of `word`.
    /// Returns true when the node was not terminal before.
    pub(crate) fn set_terminal(&mut self, word: &str, popularity: P) -> bool {
        match &mut self.terminal {
            Some(existing) => {
                existing.popularity = popularity;
                existing.word.clear();
                existing.word.push_str(word);
                false
            }
            None => {
                self.terminal = Some(Suggestion::new(word, popularity));
                true
            }
        }
    }
}
