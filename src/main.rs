mod cli;
mod report;

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    process,
    time::Instant,
};

use arithparse::{eval_parse, parse, Error, ErrorKind, Expression, PResult};
use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(why) = run(&cli) {
        eprintln!("{why}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> PResult<()> {
    let now = Instant::now();

    let expr = match &cli.file {
        Some(path) => {
            log::debug!("reading expression from {path:?}");
            parse_input(open_file(path)?, cli.eval)
        }
        None => {
            println!("Enter your math expression (CTRL+D to submit):");
            parse_input(io::stdin().lock(), cli.eval)
        }
    }
    .map_err(|err| err.context("could not parse expression"))?;

    log::info!(
        "parsed {} node(s) in {:.2?} (eval mode: {})",
        expr.size(),
        now.elapsed(),
        cli.eval
    );

    let now = Instant::now();
    let result = expr
        .evaluate()
        .map_err(|err| err.context("failed evaluation"))?;
    log::info!("evaluated in {:.2?}", now.elapsed());

    println!("{}", report::render(&expr, result));
    Ok(())
}

fn open_file(path: &Path) -> PResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) => Err(Error::new(ErrorKind::IoError(format!(
            "could not open file {}: {err}",
            path.display()
        )))),
    }
}

fn parse_input<R: Read>(reader: R, eval: bool) -> PResult<Box<Expression>> {
    if eval {
        eval_parse(reader)
    } else {
        parse(reader)
    }
}
