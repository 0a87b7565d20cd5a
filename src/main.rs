use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    iter,
};

use anyhow::{Context, Result};
use cherry_compare::{compare, ReportFormatter};
use clap::Parser;

const NO_COLOR: &str = "--no-color";

#[derive(Parser)]
#[command(
    about = "Compare cherry-picked and merged commits by pull request number",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(
        allow_hyphen_values = true,
        help = "Cherry-picked commit summaries, one per line"
    )]
    cherry: String,

    #[arg(
        allow_hyphen_values = true,
        help = "Merged commit summaries, one per line"
    )]
    merge: String,

    #[arg(
        allow_hyphen_values = true,
        value_name = "--no-color",
        help = "Pass --no-color to print the report without ANSI colors"
    )]
    color: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

impl Args {
    /// Parse `argv`, treating every argument after the program name as positional
    fn parse_positional<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| "cherry-compare".into());
        Self::parse_from(iter::once(program).chain(iter::once("--".into())).chain(argv))
    }

    fn no_color(&self) -> bool {
        self.color.as_deref() == Some(NO_COLOR)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse_positional(env::args_os());
    if !args.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", args.ignored);
    }

    let comparison = compare(&args.cherry, &args.merge);

    let mut formatter = ReportFormatter::new();
    if !args.no_color() {
        formatter = formatter.with_color();
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", formatter.fmt_report(&comparison)).context("write report")?;
    stdout.flush().context("flush stdout")?;

    Ok(())
}
