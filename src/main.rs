use std::path::PathBuf;

use clap::Parser;

use osearch::commands;
use osearch::core::paths::{default_registry_path, expand_home};
use osearch::{RequestArgs, SearchMode, SearchRequest, Tools};

#[derive(Parser)]
#[command(name = "osearch")]
#[command(about = "Search an Obsidian vault and print Alfred script filter results", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, help = "Search file contents instead of file names")]
    grep: bool,
    #[arg(long, help = "Name of vault to search")]
    vault: Option<String>,
    #[arg(long, help = "Path to vault directory")]
    path: Option<String>,
    #[arg(long, help = "Obsidian vault registry (obsidian.json)")]
    registry: Option<String>,
    #[arg(long, help = "Match case exactly in content search")]
    case_sensitive: bool,
    #[arg(long, default_value = "fd", help = "fd executable")]
    fd: String,
    #[arg(long, default_value = "rg", help = "ripgrep executable")]
    rg: String,
    #[arg(short, long, help = "Print diagnostics to stderr")]
    verbose: bool,
    #[arg(required = true, help = "Search term")]
    words: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let registry: PathBuf = cli
        .registry
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(default_registry_path);

    let mode = if cli.grep {
        SearchMode::Content
    } else {
        SearchMode::Filename
    };

    let request = SearchRequest::resolve(
        RequestArgs {
            words: cli.words,
            vault: cli.vault,
            path: cli.path,
            mode,
            verbose: cli.verbose,
        },
        &registry,
    )?;

    let tools = Tools {
        fd: cli.fd,
        rg: cli.rg,
        ignore_case: !cli.case_sensitive,
        verbose: cli.verbose,
    };

    match request.mode {
        SearchMode::Filename => commands::find::run(&request, &tools),
        SearchMode::Content => commands::grep::run(&request, &tools),
    }
}
