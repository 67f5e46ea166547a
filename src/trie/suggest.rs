use std::{cmp::Ordering, fmt::{self, Debug, Display}};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Lists at least this long are sorted on the rayon pool
const PAR_SORT_THRESHOLD: usize = 4096;

/// A completed word and its popularity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion<P> {
    pub word: String,
    pub popularity: P,
}

impl<P> Suggestion<P> {
    pub fn new(word: impl Into<String>, popularity: P) -> Self {
        Suggestion {
            word: word.into(),
            popularity,
        }
    }
}

/// Ranking order: popularity descending, then word ascending
#[inline]
fn rank_cmp<P: Ord>(a: &Suggestion<P>, b: &Suggestion<P>) -> Ordering {
    b.popularity
        .cmp(&a.popularity)
        .then_with(|| a.word.cmp(&b.word))
}

/// Structure to store autocomplete results
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions<P> {
    pub list: Vec<Suggestion<P>>,
}

impl<P> Default for Suggestions<P> {
    fn default() -> Self {
        Suggestions { list: Vec::new() }
    }
}

impl<P> Suggestions<P> {
    /// Create a new Suggestions instance
    pub fn new(list: Vec<Suggestion<P>>) -> Self {
        Suggestions { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion<P>> {
        self.list.iter()
    }

    /// Keep only the first `limit` entries
    pub fn truncate(&mut self, limit: usize) -> &mut Self {
        self.list.truncate(limit);
        self
    }

    pub fn words(&self) -> Vec<&str> {
        self.list.iter().map(|s| s.word.as_str()).collect()
    }

    pub fn into_words(self) -> Vec<String> {
        self.list.into_iter().map(|s| s.word).collect()
    }
}

impl<P> Suggestions<P>
where
    P: Ord + Send,
{
    /// Sort by descending popularity.
    /// Equal popularity falls back to the word in ascending order,
    /// so the result never depends on traversal order.
    pub fn sort_by_popularity(&mut self) -> &mut Self {
        if self.list.len() >= PAR_SORT_THRESHOLD {
            self.list.par_sort_unstable_by(rank_cmp);
        } else {
            self.list.sort_unstable_by(rank_cmp);
        }
        self
    }
}

impl<P> IntoIterator for Suggestions<P> {
    type Item = Suggestion<P>;
    type IntoIter = std::vec::IntoIter<Suggestion<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<P> Debug for Suggestions<P>
where
    P: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one suggestion per line
            writeln!(f, "Suggestions [")?;
            for s in &self.list {
                writeln!(f, "    {:?}: {:?}", s.word, s.popularity)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|s| (&s.word, &s.popularity)))
                .finish()
        }
    }
}

impl<P> Display for Suggestions<P>
where
    P: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.list {
            writeln!(f, "{}\t{}", s.popularity, s.word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Suggestions<i64> {
        Suggestions::new(vec![
            Suggestion::new("heavy", 2),
            Suggestion::new("hell", 10),
            Suggestion::new("hello", 5),
            Suggestion::new("heaven", 7),
        ])
    }

    #[test]
    fn sorts_descending_by_popularity() {
        let mut s = sample();
        s.sort_by_popularity();
        assert_eq!(s.words(), vec!["hell", "heaven", "hello", "heavy"]);
    }

    #[test]
    fn ties_fall_back_to_word_order() {
        let mut s = Suggestions::new(vec![
            Suggestion::new("pear", 3),
            Suggestion::new("apple", 3),
            Suggestion::new("fig", 9),
            Suggestion::new("banana", 3),
        ]);
        s.sort_by_popularity();
        assert_eq!(s.words(), vec!["fig", "apple", "banana", "pear"]);
    }

    #[test]
    fn negative_popularity_ranks_last() {
        let mut s = Suggestions::new(vec![
            Suggestion::new("b", -1),
            Suggestion::new("a", 0),
            Suggestion::new("c", i64::MIN),
        ]);
        s.sort_by_popularity();
        assert_eq!(s.into_words(), vec!["a", "b", "c"]);
    }

    #[test]
    fn parallel_sort_matches_sequential_policy() {
        let list: Vec<Suggestion<i32>> = (0..(PAR_SORT_THRESHOLD as i32 * 2))
            .map(|i| Suggestion::new(format!("w{i:06}"), i % 17))
            .collect();
        let mut expected = list.clone();
        expected.sort_by(rank_cmp);

        let mut s = Suggestions::new(list);
        s.sort_by_popularity();
        assert_eq!(s.list, expected);
    }

    #[test]
    fn truncate_keeps_the_head() {
        let mut s = sample();
        s.sort_by_popularity().truncate(2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.words(), vec!["hell", "heaven"]);
        s.truncate(0);
        assert!(s.is_empty());
    }

    #[test]
    fn display_and_debug_formats() {
        let mut s = sample();
        s.sort_by_popularity().truncate(2);
        assert_eq!(s.to_string(), "10\thell\n7\theaven\n");
        assert_eq!(format!("{:?}", s), r#"[("hell", 10), ("heaven", 7)]"#);
        assert_eq!(
            format!("{:#?}", s),
            "Suggestions [\n    \"hell\": 10\n    \"heaven\": 7\n]"
        );
    }

    #[test]
    fn serializes_as_word_popularity_records() {
        let s = Suggestions::new(vec![Suggestion::new("hell", 10i64)]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"list":[{"word":"hell","popularity":10}]}"#);
        let back: Suggestions<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
