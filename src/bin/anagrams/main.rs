use anagrams::prelude::*;
use anagrams::report::ORDER_NAMES;
use std::env;

pub mod args;
use crate::args::ArgSpec;

fn main() {
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

pub fn inner_main(args: Vec<String>) -> Result<()> {
    if args.len() > 1 && args[1] == "help" {
        return run(&[args[0].clone(), "--help".to_string()]);
    }
    if args.len() > 1 && args[1] == "version" {
        println!("anagrams version {}", args::version());
        return Ok(());
    }
    run(&args)
}

fn run(argv: &[String]) -> Result<()> {
    let prog = args::ProgSpec::new("Group the words of a file into sets of anagrams.");
    const A: [ArgSpec; 3] = [
        arg! {"output", "o", "File", "Write the report to this file, rather than stdout."},
        arg! {"lenient", "l", "", "If the input can't be read, report the error and continue with no words."},
        arg_enum! {"sort", "s", "Order", "Print groups in 'input' order or sorted by 'key'.", &ORDER_NAMES},
    ];
    let (args, file) = args::parse(&prog, &A, argv);

    let mut output = "-".to_string();
    let mut lenient = false;
    let mut order = Order::default();
    for x in args {
        if x.name == "output" {
            output = x.value;
        } else if x.name == "lenient" {
            lenient = true;
        } else if x.name == "sort" {
            order = Order::from_str(&x.value)?;
        } else {
            unreachable!();
        }
    }

    let words = load_words(&file, lenient)?;
    let groups = AnagramGroups::from_words(&words);
    let mut w = get_writer(&output)?;
    write_report(&groups, order, &mut w)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(a: &[&str]) -> Vec<String> {
        let mut v = vec!["anagrams".to_string()];
        v.extend(a.iter().map(|x| x.to_string()));
        v
    }

    #[test]
    fn report_to_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.txt");
        let out = out.to_str().unwrap();
        run(&argv(&["-o", out, "-s", "key", "<<dog\\ncat\\ngod\\nact"]))?;
        let s = std::fs::read_to_string(out)?;
        assert_eq!(
            s,
            "cat act \n\
             dog god \n\
             \n\
             There are 2 anagrams.\n\
             The biggest anagram set is [dog, god], with a size of 2.\n\
             The longest anagrams are [dog, god], with a length of 3 characters.\n"
        );
        Ok(())
    }

    #[test]
    fn missing_input() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.txt");
        let out = out.to_str().unwrap();
        let missing = dir.path().join("nope.txt");
        let missing = missing.to_str().unwrap();

        assert!(run(&argv(&["-o", out, missing])).is_err());

        run(&argv(&["--lenient", "-o", out, missing]))?;
        let s = std::fs::read_to_string(out)?;
        assert!(s.starts_with("\nThere are 0 anagrams.\n"));
        Ok(())
    }

    #[test]
    fn version_word() -> Result<()> {
        inner_main(argv(&["version"]))
    }
}
