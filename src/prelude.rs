//! The prelude

#[doc(inline)]
pub use crate::group::{AnagramGroups, Group};
#[doc(inline)]
pub use crate::key::{anagram_key, key_len};
#[doc(inline)]
pub use crate::report::{print_groups, write_report, Order};
#[doc(inline)]
pub use crate::source::{load_words, read_words, read_words_from};
#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, prerr, Error, Result};

#[doc(inline)]
pub use std::io::{BufRead, Write};
#[doc(inline)]
pub use std::str::FromStr;
