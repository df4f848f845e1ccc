//! Misc utility stuff

use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::io::{self, BufRead, Read, Write};
use std::fmt;

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom anagrams error
    Error(String),
    /// pass through io::Error
    IoError(std::io::Error),
}
/// Result type for anagrams
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

err_type!(std::io::Error, Error::IoError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Error(s) => write!(f, "{}", s)?,
            Error::IoError(s) => write!(f, "IoError : {}", s)?,
        }
        Ok(())
    }
}

/// Input file. Wrapped in a type so I can 'impl Debug'
pub struct Infile(
    /// The file being read
    pub io::BufReader<Box<dyn Read>>,
);

impl Infile {
    /// create a new input file
    pub fn new(f: io::BufReader<Box<dyn Read>>) -> Self {
        Self(f)
    }
}

impl fmt::Debug for Infile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infile")
    }
}

impl Read for Infile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl BufRead for Infile {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.0.fill_buf()
    }
    fn consume(&mut self, amt: usize) {
        self.0.consume(amt);
    }
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name.
/// `-` is stdout and `--` is stderr.
pub fn get_writer(name: &str) -> Result<Outfile> {
    let inner: Box<dyn Write> = {
        if name == "-" {
            Box::new(io::stdout())
        } else if name == "--" {
            Box::new(io::stderr())
        } else {
            Box::new(
                fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(name)?,
            )
        }
    };
    Ok(io::BufWriter::new(inner))
}

// should return Cow<>
fn unescape_vec(data: &[u8]) -> Vec<u8> {
    let mut ret: Vec<u8> = Vec::with_capacity(data.len());
    let mut last_was_slash = false;
    for x in data {
        if last_was_slash {
            ret.push(match x {
                b'n' => b'\n',
                b't' => b'\t',
                b's' => b' ',
                ch => *ch,
            });
            last_was_slash = false;
        } else if x == &b'\\' {
            last_was_slash = true;
        } else {
            ret.push(*x);
        }
    }
    if last_was_slash {
        ret.push(b'\\');
    }
    ret
}

/// Make an Infile from a file name.
/// `-` is stdin, `<<text` is the literal text, anything else is a file.
/// Gzipped input is decompressed.
pub fn get_reader(name: &str) -> Result<Infile> {
    let inner: Box<dyn Read> = {
        if name == "-" {
            Box::new(io::stdin())
        } else if let Some(stripped) = name.strip_prefix("<<") {
            Box::new(io::Cursor::new(unescape_vec(stripped.as_bytes())))
        } else {
            Box::new(fs::File::open(name)?)
        }
    };
    let mut outer = io::BufReader::new(inner);
    let start = outer.fill_buf()?;
    if start.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        outer = io::BufReader::new(Box::new(MultiGzDecoder::new(outer)));
    }
    Ok(Infile::new(outer))
}

/// print a bunch of u8 to stderr, adding a newline
pub fn prerr(data: &[&[u8]]) {
    let mut e = io::stderr().lock();
    for x in data {
        let _ = e.write_all(x);
    }
    let _ = e.write_all(b"\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape() {
        assert_eq!(unescape_vec(b"abc"), b"abc");
        assert_eq!(unescape_vec(b"a\\nb"), b"a\nb");
        assert_eq!(unescape_vec(b"a\\tb\\s"), b"a\tb ");
        assert_eq!(unescape_vec(b"a\\\\b"), b"a\\b");
        assert_eq!(unescape_vec(b"trailing\\"), b"trailing\\");
    }

    #[test]
    fn literal_reader() -> Result<()> {
        let mut f = get_reader("<<cat\\nact")?;
        let mut s = String::new();
        f.read_to_string(&mut s)?;
        assert_eq!(s, "cat\nact");
        Ok(())
    }

    #[test]
    fn infile_is_bufread() -> Result<()> {
        let f = get_reader("<<cat\\nact\\n")?;
        let lines: Vec<String> = f.lines().collect::<io::Result<_>>()?;
        assert_eq!(lines, ["cat", "act"]);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let e = get_reader("/no/such/dir/words.txt").unwrap_err();
        assert!(matches!(e, Error::IoError(_)));
        assert!(!e.suppress());
        assert!(e.to_string().starts_with("IoError : "));
    }

    #[test]
    fn broken_pipe_is_suppressed() {
        let e = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(e.suppress());
    }

    #[test]
    fn err_macro() {
        let r: Result<()> = err!("bad {} value", "sort");
        assert_eq!(r.unwrap_err().to_string(), "bad sort value");
    }
}
