use trie_autocomplete::{parse_seed, Trie};

const WORDS: [(&str, i64); 8] = [
    ("tea", 4),
    ("team", 9),
    ("teapot", 1),
    ("ten", 6),
    ("tend", 6),
    ("to", 12),
    ("toast", -1),
    ("inn", 3),
];

fn build() -> Trie {
    WORDS.into_iter().collect()
}

/// every prefix of every word finds that word
#[test]
fn every_prefix_finds_its_word() {
    let trie = build();
    for (word, _) in WORDS {
        let chars: Vec<char> = word.chars().collect();
        for end in 0..=chars.len() {
            let prefix: String = chars[..end].iter().collect();
            let hits = trie.autocomplete(&prefix);
            assert!(
                hits.iter().any(|w| w == word),
                "{word:?} missing for prefix {prefix:?}: {hits:?}"
            );
        }
    }
}

#[test]
fn unmatched_prefixes_are_empty() {
    let trie = build();
    for prefix in ["x", "tx", "teams", "innn", "T", " "] {
        assert!(trie.autocomplete(prefix).is_empty(), "prefix {prefix:?}");
    }
}

#[test]
fn results_are_ranked_by_popularity_then_word() {
    let trie = build();
    let results = trie.suggestions("t");
    for pair in results.list.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.popularity > b.popularity || (a.popularity == b.popularity && a.word < b.word),
            "{a:?} ranked before {b:?}"
        );
    }
    assert_eq!(
        trie.autocomplete("te"),
        vec!["team", "ten", "tend", "tea", "teapot"]
    );
}

#[test]
fn empty_prefix_lists_each_word_once() {
    let trie = build();
    let mut all = trie.autocomplete("");
    assert_eq!(all.len(), WORDS.len());
    all.sort();
    all.dedup();
    assert_eq!(all.len(), WORDS.len());
}

#[test]
fn insertion_order_does_not_change_answers() {
    let forward = build();
    let backward: Trie = WORDS.into_iter().rev().collect();
    for prefix in ["", "t", "te", "to", "i"] {
        assert_eq!(forward.autocomplete(prefix), backward.autocomplete(prefix));
    }
}

#[test]
fn overwrite_keeps_a_single_entry() {
    let mut trie = build();
    trie.insert("teapot", 50);
    trie.insert("teapot", 20);

    let hits = trie.autocomplete("tea");
    assert_eq!(hits, vec!["teapot", "team", "tea"]);
    assert_eq!(trie.len(), WORDS.len());
}

#[test]
fn seeded_scenario() {
    let pairs = parse_seed::<i64>("hello\t5\nhell\t10\nheaven\t7\nheavy\t2\n").unwrap();
    let trie: Trie = pairs.into_iter().collect();

    assert_eq!(trie.autocomplete("hea"), vec!["heaven", "heavy"]);
    assert_eq!(
        trie.autocomplete("he"),
        vec!["hell", "heaven", "hello", "heavy"]
    );
    assert!(trie.autocomplete("xyz").is_empty());
    assert_eq!(trie.autocomplete("he"), trie.autocomplete("he"));
}
