use crate::model::DEFAULT_OUTPUT_CSV;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gloc")]
#[command(about = "Average lines of Java and Python code per month across a git branch's history")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Repository to analyze (remote URL or local path)")]
    pub repo_url: String,

    #[arg(
        long = "output-csv",
        alias = "output_csv",
        default_value = DEFAULT_OUTPUT_CSV,
        help = "Path to the output CSV file"
    )]
    pub output_csv: PathBuf,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::analyze::exec(&self.repo_url, &self.output_csv)
    }
}
