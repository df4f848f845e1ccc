use clap::ArgAction;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: &[] }
    };
}

#[macro_export]
macro_rules! arg_enum {
    ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: $e }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

/// return current version string
pub fn version() -> String {
    format!(
        "{}.{}.{}{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
        option_env!("CARGO_PKG_VERSION_PRE").unwrap_or("")
    )
}
impl ProgSpec {
    pub const fn new(help: &'static str) -> Self {
        Self { help, author: env!("CARGO_PKG_AUTHORS"), version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub values: &'static [&'static str],
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    b = b.long(x.name).help(x.help);
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    if !x.values.is_empty() {
        b = b.value_parser(clap::builder::PossibleValuesParser::new(x.values));
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    let (Some(arg), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) else {
        return;
    };
    for (val, i) in arg.zip(ind) {
        if x.value.is_empty() {
            v.push(ArgValue::new(x.name, "", i));
        } else {
            v.push(ArgValue::new(x.name, val, i));
        }
    }
}

/// parse the command line, return the options in order, and the input file
pub fn parse(prog: &ProgSpec, spec: &[ArgSpec], argv: &[String]) -> (Vec<ArgValue>, String) {
    let mut a = clap::Command::new("anagrams")
        .version(prog.version)
        .author(prog.author)
        .about(prog.help);

    for x in spec {
        a = add_arg(a, x);
    }
    a = a.arg(clap::Arg::new("input_file").help("Word list, one word per line. Default is stdin."));
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    let file = m.get_one::<String>("input_file").map_or_else(|| "-".to_string(), String::clone);
    v.sort_by(|a, b| a.index.cmp(&b.index));
    (v, file)
}
