use crate::{
    key::{extract_key, PrNumber},
    utils::LineIter,
};
use hashbrown::{hash_map::Entry, HashMap};

/// Lines indexed by their pull request number
///
/// Iteration follows the order in which each number was first seen. Inserting a line for a
/// number that is already present replaces the stored line but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct KeyedLines<'a> {
    order: Vec<PrNumber>,
    lines: HashMap<PrNumber, &'a str>,
}

impl<'a> KeyedLines<'a> {
    /// Insert a line, returning the line it replaced, if any
    pub fn insert(&mut self, key: PrNumber, line: &'a str) -> Option<&'a str> {
        match self.lines.entry(key) {
            Entry::Occupied(mut o) => {
                log::debug!("{}: {:?} superseded by {:?}", o.key(), o.get(), line);
                Some(o.insert(line))
            }
            Entry::Vacant(v) => {
                self.order.push(v.key().clone());
                v.insert(line);
                None
            }
        }
    }

    pub fn contains_key(&self, key: &PrNumber) -> bool {
        self.lines.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(key, line)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&PrNumber, &'a str)> + '_ {
        self.order.iter().map(|key| (key, self.lines[key]))
    }
}

/// One side of a comparison, split by whether a pull request number could be extracted
#[derive(Clone, Debug, Default)]
pub struct Partition<'a> {
    keyed: KeyedLines<'a>,
    irregular: Vec<&'a str>,
    superseded: usize,
}

impl<'a> Partition<'a> {
    /// Partition a sequence of lines
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut partition = Self::default();
        for line in lines {
            match extract_key(line) {
                Some(key) => {
                    if partition.keyed.insert(key, line).is_some() {
                        partition.superseded += 1;
                    }
                }
                None => partition.irregular.push(line),
            }
        }

        log::debug!(
            "partitioned {} keyed, {} irregular, {} superseded",
            partition.keyed.len(),
            partition.irregular.len(),
            partition.superseded
        );

        partition
    }

    /// Split `text` into lines and partition them
    pub fn from_text(text: &'a str) -> Self {
        Self::from_lines(LineIter::new(text))
    }

    pub fn keyed(&self) -> &KeyedLines<'a> {
        &self.keyed
    }

    /// Lines without a pull request number, in input order
    pub fn irregular(&self) -> &[&'a str] {
        &self.irregular
    }

    /// Number of keyed lines replaced by a later line with the same number
    pub fn superseded(&self) -> usize {
        self.superseded
    }

    pub fn into_parts(self) -> (KeyedLines<'a>, Vec<&'a str>) {
        (self.keyed, self.irregular)
    }
}
