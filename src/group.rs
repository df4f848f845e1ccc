//! Group words into anagram sets

use crate::key::{anagram_key, key_len};
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One anagram set : the distinct words sharing a key
pub struct Group {
    key: String,
    words: Vec<String>,
    members: FnvHashSet<String>,
}

impl Group {
    fn new(key: String) -> Self {
        Self { key, words: Vec::new(), members: FnvHashSet::default() }
    }
    /// add a word, return false if it was already there
    fn insert(&mut self, word: &str) -> bool {
        if self.members.contains(word) {
            false
        } else {
            let word = word.to_string();
            self.words.push(word.clone());
            self.members.insert(word);
            true
        }
    }
    /// the sorted characters shared by all the words
    pub fn key(&self) -> &str {
        &self.key
    }
    /// the distinct words, in order of first appearance
    pub fn words(&self) -> &[String] {
        &self.words
    }
    /// number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }
    /// never true for a group owned by [`AnagramGroups`]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    /// is this word a member?
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }
    /// true if there are at least two distinct words
    pub fn is_anagram(&self) -> bool {
        self.len() > 1
    }
}

/// Words grouped by anagram key, plus the running leaders.
///
/// Groups are kept in order of first appearance of their key.
/// The biggest group is the first group to reach the largest size,
/// and the longest group is the first group with more than one word
/// to reach the longest key. Ties never replace the current leader.
#[derive(Debug, Clone, Default)]
pub struct AnagramGroups {
    groups: Vec<Group>,
    index: FnvHashMap<String, usize>,
    biggest: Option<usize>,
    biggest_count: usize,
    longest: Option<usize>,
}

impl AnagramGroups {
    /// new, with no words
    pub fn new() -> Self {
        Self::default()
    }
    /// group all the words, in order
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ret = Self::new();
        for w in words {
            ret.add(w.as_ref());
        }
        ret
    }
    /// add one word, updating the biggest and longest groups
    pub fn add(&mut self, word: &str) {
        let key = anagram_key(word);
        let pos = match self.index.get(&key).copied() {
            Some(pos) => pos,
            None => {
                let pos = self.groups.len();
                self.index.insert(key.clone(), pos);
                self.groups.push(Group::new(key));
                pos
            }
        };
        let group = &mut self.groups[pos];
        group.insert(word);
        let size = group.len();
        let len = key_len(group.key());

        if size > self.biggest_count {
            self.biggest = Some(pos);
            self.biggest_count = size;
        }
        if size > 1 && len > self.longest_len() {
            self.longest = Some(pos);
        }
    }
    /// key length of the longest group, zero if none
    fn longest_len(&self) -> usize {
        self.longest().map_or(0, |g| key_len(g.key()))
    }
    /// the group with this key
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.index.get(key).map(|pos| &self.groups[*pos])
    }
    /// the group holding this word
    pub fn find(&self, word: &str) -> Option<&Group> {
        self.get(&anagram_key(word)).filter(|g| g.contains(word))
    }
    /// number of groups, including those with only one word
    pub fn len(&self) -> usize {
        self.groups.len()
    }
    /// true if no words have been added
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
    /// all groups, in order of first appearance
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }
    /// all groups, sorted by key
    pub fn sorted(&self) -> Vec<&Group> {
        let mut v: Vec<&Group> = self.groups.iter().collect();
        v.sort_by(|a, b| a.key.cmp(&b.key));
        v
    }
    /// the group that first reached the most words. None only if empty.
    pub fn biggest(&self) -> Option<&Group> {
        self.biggest.map(|pos| &self.groups[pos])
    }
    /// size of the biggest group, zero if empty
    pub const fn biggest_count(&self) -> usize {
        self.biggest_count
    }
    /// the group of two or more words with the longest key
    pub fn longest(&self) -> Option<&Group> {
        self.longest.map(|pos| &self.groups[pos])
    }
    /// number of groups with a size other than one
    pub fn num_anagrams(&self) -> usize {
        self.groups.iter().filter(|g| g.len() != 1).count()
    }
}

impl<'a> IntoIterator for &'a AnagramGroups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
