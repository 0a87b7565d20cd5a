//! Tools for comparing a cherry-pick list against a merge list by pull request number
//!
//! Each line is keyed on the first `#<digits><whitespace>` it contains. Lines are then reported
//! as present only on the cherry-pick side (`+`), on both sides (`=`), or only on the merge side
//! (`-`). Lines without a pull request number are reported separately as `+?` or `-?`.
//!
//! ```
//! use cherry_compare::{compare, ReportFormatter};
//!
//! let cherry = "fix #1 crash\nbump version\n";
//! let merge = "fix #1 crash\ndocs #3 typo\n";
//!
//! let comparison = compare(cherry, merge);
//! let report = ReportFormatter::new().fmt_report(&comparison).to_string();
//! assert_eq!(report, "+? bump version\n= fix #1 crash\n- docs #3 typo\n");
//! ```

mod compare;
mod format;
mod key;
mod partition;
mod utils;

pub use compare::{compare, Category, Comparison, Entries, Tint};
pub use format::ReportFormatter;
pub use key::{extract_key, PrNumber};
pub use partition::{KeyedLines, Partition};
