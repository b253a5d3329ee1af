//! Word lists for the solver
//!
//! Word lists are plain text files with one word per line: a "frequent" list
//! whose line order is the commonness rank, and a "junk" list of rare words.

pub mod loader;

/// Default path of the frequent word list
pub const DEFAULT_FREQUENT_PATH: &str = "RussianFreq.txt";

/// Default path of the junk word list
pub const DEFAULT_JUNK_PATH: &str = "RussianJunk.txt";
