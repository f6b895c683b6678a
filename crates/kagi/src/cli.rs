//! CLI argument parsing for kagi

use clap::Parser;

use kagi::Overrides;

#[derive(Parser, Debug)]
#[command(name = "kagi")]
#[command(about = "Query Kagi FastGPT API from the command line")]
#[command(disable_version_flag = true)]
#[command(after_help = "\
Output formats: text (default), markdown (md), or JSON.
API key: set KAGI_API_KEY or use --api-key.

EXAMPLES:
    kagi golang best practices
    kagi -f md golang best practices
    kagi -f json golang concurrency > result.json
    echo \"explain kubernetes\" | kagi
    kagi --heading --timeout 60 golang generics
    kagi -q golang channels              # Answer only

CONFIGURATION:
    ~/.config/kagi/config.toml

    api_key = \"...\"
    format = \"md\"
    color = \"auto\"
    timeout = 30
    heading = false")]
pub struct Cli {
    /// The query to send (read from stdin when omitted and piped)
    #[arg(num_args = 0..)]
    pub query: Vec<String>,

    /// Output format: text | txt | md | markdown | json [default: text]
    #[arg(short = 'f', long = "format")]
    pub format: Option<String>,

    /// Output only the response body (no heading or references)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Include the query as a heading in text format
    #[arg(long = "heading")]
    pub heading: bool,

    /// HTTP request timeout in seconds [default: 30]
    #[arg(short = 't', long = "timeout", allow_negative_numbers = true)]
    pub timeout: Option<i64>,

    /// Color output: auto | always | never [default: auto]
    #[arg(short = 'c', long = "color")]
    pub color: Option<String>,

    /// Kagi API key (overrides KAGI_API_KEY)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Output process information to stderr
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Output detailed debug information to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Display version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

impl Cli {
    /// Flag values for config resolution
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            format: self.format.clone(),
            color: self.color.clone(),
            timeout: self.timeout,
            heading: self.heading,
            quiet: self.quiet,
            verbose: self.verbose,
            debug: self.debug,
        }
    }
}
