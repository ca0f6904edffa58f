use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{bail, Context, Result};
use mini_regex::{NoTrace, Regex, RegexBuilder, Trace, WriteTrace};

const USAGE: &str = "usage: mini-regex -E <pattern> [-x] [-o] [--trace] [--step-limit N]";

#[derive(Debug)]
struct Args {
    pattern: String,
    full_line: bool,
    only_matching: bool,
    trace: bool,
    step_limit: Option<usize>,
}

/// Parses the command line, without the program name.
fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut pattern = None;
    let mut full_line = false;
    let mut only_matching = false;
    let mut trace = false;
    let mut step_limit = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-E" => pattern = Some(args.next().context("-E needs a pattern")?),
            "-x" => full_line = true,
            "-o" => only_matching = true,
            "--trace" => trace = true,
            "--step-limit" => {
                let limit = args.next().context("--step-limit needs a number")?;
                step_limit = Some(
                    limit
                        .parse()
                        .with_context(|| format!("invalid step limit: {}", limit))?,
                );
            }
            other => bail!("unexpected argument: {}\n{}", other, USAGE),
        }
    }

    let Some(pattern) = pattern else {
        bail!("{}", USAGE);
    };
    Ok(Args {
        pattern,
        full_line,
        only_matching,
        trace,
        step_limit,
    })
}

fn build_regex(args: &Args) -> Result<Regex> {
    let mut builder = RegexBuilder::new(&args.pattern);
    if let Some(limit) = args.step_limit {
        builder.step_limit(limit);
    }
    builder
        .build()
        .with_context(|| format!("failed to compile pattern \"{}\"", args.pattern))
}

/// Writes the lines of `input` that match (or just the matched parts with
/// `-o`) and reports whether any line matched.
fn filter_lines<R, W>(
    regex: &Regex,
    args: &Args,
    input: R,
    mut out: W,
    trace: &mut dyn Trace,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let mut any_matched = false;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let Some(range) = regex.find_traced(&line, trace) else {
            continue;
        };
        if args.full_line && (range.start != 0 || range.end != line.chars().count()) {
            continue;
        }

        any_matched = true;
        if args.only_matching {
            writeln!(out, "{}", range.extract(&line))?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(any_matched)
}

fn run(args: &Args) -> Result<bool> {
    let regex = build_regex(args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    if args.trace {
        eprintln!("Pattern: \"{}\"", regex.as_str());
        eprintln!("Compiled operators: {:?}", regex.operators());
        let mut trace = WriteTrace::new(io::stderr());
        filter_lines(&regex, args, stdin.lock(), stdout.lock(), &mut trace)
    } else {
        filter_lines(&regex, args, stdin.lock(), stdout.lock(), &mut NoTrace)
    }
}

// Usage: echo <input_text> | mini-regex -E <pattern>
fn main() {
    let outcome = parse_args(env::args().skip(1)).and_then(|args| run(&args));
    match outcome {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}
