#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Path to the file containing the math expression
    #[arg(short, long, required_unless_present = "stdin")]
    pub file: Option<std::path::PathBuf>,

    /// Read the expression from stdin instead of from a file
    #[arg(short = 'i', long, conflicts_with = "file")]
    pub stdin: bool,

    /// Evaluate subexpressions in place while parsing
    #[arg(short, long)]
    pub eval: bool,
}
