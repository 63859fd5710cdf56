//! formview - read-only detail forms in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use formview_core::prelude::*;

/// formview - render a JSON record through a declarative view config
#[derive(Parser, Debug)]
#[command(name = "formview")]
#[command(about = "Configuration-driven read-only detail form viewer", long_about = None)]
struct Args {
    /// JSON record to display
    #[arg(value_name = "DATA")]
    data: PathBuf,

    /// View config describing the fields (.toml or .json)
    #[arg(short, long, value_name = "VIEW")]
    view: PathBuf,

    /// Run in headless mode (plain-text outline, no TUI)
    #[arg(long)]
    headless: bool,

    /// Directory holding `.formview/config.toml`
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let project_path = args
        .project_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let result = if args.headless {
        formview::run_headless(&args.data, &args.view, &project_path)
    } else {
        formview::run(&args.data, &args.view, &project_path)
    };

    if let Err(ref e) = result {
        if let Some(message) = formview::short_message(e) {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
    result
}
