//! Read the word list

use crate::util::{get_reader, prerr, Result};
use std::io::BufRead;

/// Read one word per line from any buffered reader.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`, and the terminator is removed.
/// Nothing else is trimmed. A last line without a terminator is still a word.
/// Bytes that are not valid UTF-8 become U+FFFD.
pub fn read_words_from<R: BufRead>(mut f: R) -> Result<Vec<String>> {
    let mut ret = Vec::new();
    let mut line: Vec<u8> = Vec::new();
    loop {
        line.clear();
        if f.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        for part in line.split(|ch| *ch == b'\r') {
            ret.push(String::from_utf8_lossy(part).into_owned());
        }
    }
    Ok(ret)
}

/// Read one word per line from the named input.
/// See [`get_reader`] for the naming conventions.
pub fn read_words(name: &str) -> Result<Vec<String>> {
    read_words_from(get_reader(name)?)
}

/// Read the words, deciding what an unreadable input means.
///
/// If `lenient`, a failure is reported to stderr as a warning and
/// the result is an empty list. Otherwise the error is returned.
pub fn load_words(name: &str, lenient: bool) -> Result<Vec<String>> {
    match read_words(name) {
        Err(e) if lenient => {
            prerr(&[b"Warning\t", e.to_string().as_bytes()]);
            Ok(Vec::new())
        }
        x => x,
    }
}
