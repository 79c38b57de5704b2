//! # Prefix Index
//!
//! A character-keyed trie where each node counts how many times a word
//! ended exactly there. Queries walk to the prefix node and collect every
//! word below it, ranked by usage.
//!
//! ```text
//! root
//! └── t
//!     └── e
//!         └── s
//!             └── t (1)        "test"
//!                 ├── e
//!                 │   └── r (1)    "tester"
//!                 └── i
//!                     └── n
//!                         └── g (1)  "testing"
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    usage_count: u64,
}

// Unlinks children iteratively so very long words don't recurse on drop.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, n)| n));
        }
    }
}

/// A completion found under a prefix: the remaining characters and how
/// often the full word has been used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub count: u64,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    distinct_words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one use of `word`, creating any missing nodes on the way.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.usage_count == 0 {
            self.distinct_words += 1;
        }
        node.usage_count += 1;
    }

    /// Usage count of an exact word (0 if never inserted).
    pub fn count(&self, word: &str) -> u64 {
        self.find(word).map_or(0, |node| node.usage_count)
    }

    /// Number of distinct words with a non-zero count.
    pub fn len(&self) -> usize {
        self.distinct_words
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_words == 0
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// All completions of `prefix`, most used first.
    ///
    /// An empty prefix never suggests anything. A prefix with no matching
    /// path returns empty. Otherwise every word at or below the prefix node
    /// is returned as its suffix (the exact prefix word, if inserted, has
    /// an empty suffix). Ties on count are ordered by suffix.
    pub fn query(&self, prefix: &str) -> Vec<Candidate> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let mut stack: Vec<(&TrieNode, String)> = vec![(start, String::new())];
        while let Some((node, suffix)) = stack.pop() {
            for (c, child) in &node.children {
                let mut next = suffix.clone();
                next.push(*c);
                stack.push((child, next));
            }
            if node.usage_count > 0 {
                found.push(Candidate {
                    text: suffix,
                    count: node.usage_count,
                });
            }
        }

        rank(&mut found);
        found
    }
}

/// Sorts candidates by count descending, then by text ascending.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(by_rank);
}

fn by_rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    #[test]
    fn test_query_returns_suffixes_with_counts() {
        let trie = trie_of(&["test", "tester", "testing", "tester"]);
        let result = trie.query("tes");
        assert_eq!(
            result,
            vec![
                Candidate {
                    text: "ter".into(),
                    count: 2,
                },
                Candidate {
                    text: "t".into(),
                    count: 1,
                },
                Candidate {
                    text: "ting".into(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_empty_prefix_suggests_nothing() {
        let trie = trie_of(&["a", "ab", "abc"]);
        assert!(trie.query("").is_empty());
    }

    #[test]
    fn test_missing_prefix_returns_empty() {
        let trie = trie_of(&["apple", "apply"]);
        assert!(trie.query("b").is_empty());
        assert!(trie.query("applx").is_empty());
        assert!(trie.query("apples").is_empty());
    }

    #[test]
    fn test_exact_word_appears_as_empty_suffix() {
        let trie = trie_of(&["car", "cart"]);
        assert_eq!(texts(&trie.query("car")), vec!["", "t"]);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let trie = trie_of(&["bz", "ba", "bm", "bb"]);
        assert_eq!(texts(&trie.query("b")), vec!["a", "b", "m", "z"]);
    }

    #[test]
    fn test_query_matches_inserted_words_exactly() {
        let words = ["in", "ink", "inn", "inner", "ink", "on", "inner", "inner"];
        let trie = trie_of(&words);

        let mut expected: Vec<(String, u64)> = Vec::new();
        for word in words.iter().filter(|w| w.starts_with("in")) {
            match expected.iter_mut().find(|(w, _)| w == word) {
                Some((_, n)) => *n += 1,
                None => expected.push((word.to_string(), 1)),
            }
        }
        let mut got: Vec<(String, u64)> = trie
            .query("in")
            .into_iter()
            .map(|c| (format!("in{}", c.text), c.count))
            .collect();

        // Ranked order: counts never increase down the list.
        assert!(got.windows(2).all(|w| w[0].1 >= w[1].1));

        got.sort();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_counts_accumulate() {
        let mut trie = Trie::new();
        assert_eq!(trie.count("hello"), 0);
        trie.insert("hello");
        trie.insert("hello");
        assert_eq!(trie.count("hello"), 2);
        assert_eq!(trie.count("hell"), 0);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_unicode_is_indexed_per_char() {
        let trie = trie_of(&["naïve", "naïf"]);
        assert_eq!(texts(&trie.query("naï")), vec!["f", "ve"]);
    }

    #[test]
    fn test_deep_word_does_not_overflow() {
        let long: String = std::iter::repeat_n('x', 10_000).collect();
        let trie = trie_of(&[&long]);
        let result = trie.query("x");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text.len(), 9_999);
    }
}
