use crate::partition::Partition;
use std::{iter, slice};


/// Styling hint for a `Category`, resolved to escape sequences by `ReportFormatter`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tint {
    Plain,
    Green,
    Red,
}

/// The bucket a line is reported in
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Keyed line whose number only appears on the cherry-pick side
    CherryOnly,
    /// Cherry-pick side line without a pull request number
    CherryIrregular,
    /// Keyed line whose number appears on both sides
    Common,
    /// Merge side line without a pull request number
    MergeIrregular,
    /// Keyed line whose number only appears on the merge side
    MergeOnly,
}

impl Category {
    /// All categories, in report order
    pub const ALL: &'static [Category] = &[
        Category::CherryOnly,
        Category::CherryIrregular,
        Category::Common,
        Category::MergeIrregular,
        Category::MergeOnly,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Category::CherryOnly => "+",
            Category::CherryIrregular => "+?",
            Category::Common => "=",
            Category::MergeIrregular => "-?",
            Category::MergeOnly => "-",
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            Category::CherryOnly | Category::CherryIrregular => Tint::Green,
            Category::Common => Tint::Plain,
            Category::MergeIrregular | Category::MergeOnly => Tint::Red,
        }
    }
}

/// The result of comparing a cherry-pick list against a merge list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison<'a> {
    cherry_only: Vec<&'a str>,
    cherry_irregular: Vec<&'a str>,
    common: Vec<&'a str>,
    merge_irregular: Vec<&'a str>,
    merge_only: Vec<&'a str>,
}

impl<'a> Comparison<'a> {
    /// Compare two partitioned sides
    ///
    /// Lines in `common` are taken from the cherry-pick side.
    pub fn new(cherry: Partition<'a>, merge: Partition<'a>) -> Self {
        let (cherry_keyed, cherry_irregular) = cherry.into_parts();
        let (merge_keyed, merge_irregular) = merge.into_parts();

        let mut cherry_only = Vec::new();
        let mut common = Vec::new();
        for (key, line) in cherry_keyed.iter() {
            if merge_keyed.contains_key(key) {
                common.push(line);
            } else {
                cherry_only.push(line);
            }
        }

        let merge_only = merge_keyed
            .iter()
            .filter(|(key, _)| !cherry_keyed.contains_key(*key))
            .map(|(_, line)| line)
            .collect();

        let comparison = Self {
            cherry_only,
            cherry_irregular,
            common,
            merge_irregular,
            merge_only,
        };

        log::debug!(
            "compared: {} cherry only, {} common, {} merge only, {} irregular",
            comparison.cherry_only.len(),
            comparison.common.len(),
            comparison.merge_only.len(),
            comparison.cherry_irregular.len() + comparison.merge_irregular.len(),
        );

        comparison
    }

    /// Lines reported under `category`, in report order
    pub fn lines(&self, category: Category) -> &[&'a str] {
        match category {
            Category::CherryOnly => &self.cherry_only,
            Category::CherryIrregular => &self.cherry_irregular,
            Category::Common => &self.common,
            Category::MergeIrregular => &self.merge_irregular,
            Category::MergeOnly => &self.merge_only,
        }
    }

    pub fn cherry_only(&self) -> &[&'a str] {
        &self.cherry_only
    }

    pub fn common(&self) -> &[&'a str] {
        &self.common
    }

    pub fn merge_only(&self) -> &[&'a str] {
        &self.merge_only
    }

    /// Total number of reported lines
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.lines(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every reported line along with its category, in report order
    pub fn entries(&self) -> Entries<'_, 'a> {
        Entries {
            comparison: self,
            categories: Category::ALL.iter(),
            current: None,
        }
    }
}

/// Iterator returned by [`Comparison::entries`]
pub struct Entries<'c, 'a> {
    comparison: &'c Comparison<'a>,
    categories: slice::Iter<'static, Category>,
    current: Option<(Category, slice::Iter<'c, &'a str>)>,
}

impl<'a> Iterator for Entries<'_, 'a> {
    type Item = (Category, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((category, lines)) = &mut self.current {
                if let Some(line) = lines.next() {
                    return Some((*category, *line));
                }
            }

            let category = *self.categories.next()?;
            self.current = Some((category, self.comparison.lines(category).iter()));
        }
    }
}

impl iter::FusedIterator for Entries<'_, '_> {}

/// Compare the lines of a cherry-pick list against the lines of a merge list
///
/// ```
/// use cherry_compare::{compare, Category};
///
/// let cherry = "fix #1 crash\nadd #2 feature\n";
/// let merge = "fix #1 crash\ndocs #3 typo\n";
///
/// let comparison = compare(cherry, merge);
/// let entries: Vec<_> = comparison.entries().collect();
/// assert_eq!(
///     entries,
///     vec![
///         (Category::CherryOnly, "add #2 feature"),
///         (Category::Common, "fix #1 crash"),
///         (Category::MergeOnly, "docs #3 typo"),
///     ]
/// );
/// ```
pub fn compare<'a>(cherry: &'a str, merge: &'a str) -> Comparison<'a> {
    Comparison::new(Partition::from_text(cherry), Partition::from_text(merge))
}
