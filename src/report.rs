//! Write the anagram report

use crate::group::{AnagramGroups, Group};
use crate::key::key_len;
use crate::util::{err, Error, Result};
use std::io::Write;
use std::str::FromStr;

/// The order in which groups are printed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Order {
    /// order of first appearance in the input
    #[default]
    Input,
    /// sorted by key
    Key,
}

/// names accepted by [`Order::from_str`]
pub const ORDER_NAMES: [&str; 2] = ["input", "key"];

impl FromStr for Order {
    type Err = Error;
    fn from_str(spec: &str) -> Result<Self> {
        if spec.eq_ignore_ascii_case("input") {
            Ok(Self::Input)
        } else if spec.eq_ignore_ascii_case("key") {
            Ok(Self::Key)
        } else {
            err!("Order must be 'input' or 'key', not '{}'", spec)
        }
    }
}

fn ordered(groups: &AnagramGroups, order: Order) -> Vec<&Group> {
    match order {
        Order::Input => groups.iter().collect(),
        Order::Key => groups.sorted(),
    }
}

/// write the members of the group as `[a, b, c]`, or `[]` if none
pub fn write_set(w: &mut impl Write, group: Option<&Group>) -> Result<()> {
    w.write_all(b"[")?;
    if let Some(g) = group {
        for (i, x) in g.words().iter().enumerate() {
            if i != 0 {
                w.write_all(b", ")?;
            }
            w.write_all(x.as_bytes())?;
        }
    }
    w.write_all(b"]")?;
    Ok(())
}

/// Write one line per group whose size is not one,
/// with the words separated by spaces. Return the number of lines.
pub fn print_groups(groups: &AnagramGroups, order: Order, w: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for g in ordered(groups, order) {
        if g.len() == 1 {
            continue;
        }
        for x in g.words() {
            w.write_all(x.as_bytes())?;
            w.write_all(b" ")?;
        }
        w.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// Write the groups, then the summary of count, biggest and longest.
/// Missing groups are written as `[]` with a size or length of zero.
pub fn write_report(groups: &AnagramGroups, order: Order, w: &mut impl Write) -> Result<()> {
    let count = print_groups(groups, order, w)?;
    writeln!(w)?;
    writeln!(w, "There are {} anagrams.", count)?;

    w.write_all(b"The biggest anagram set is ")?;
    write_set(w, groups.biggest())?;
    writeln!(w, ", with a size of {}.", groups.biggest_count())?;

    let longest = groups.longest();
    w.write_all(b"The longest anagrams are ")?;
    write_set(w, longest)?;
    writeln!(
        w,
        ", with a length of {} characters.",
        longest.map_or(0, |g| key_len(g.key()))
    )?;
    Ok(())
}
