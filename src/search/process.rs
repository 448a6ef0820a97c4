use std::path::Path;
use std::process::{Command, Output, Stdio};

use colored::*;

use crate::core::error::{Result, SearchError};

/// External programs and how to call them.
#[derive(Debug, Clone)]
pub struct Tools {
    pub fd: String,
    pub rg: String,
    pub ignore_case: bool,
    pub verbose: bool,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            fd: "fd".to_string(),
            rg: "rg".to_string(),
            ignore_case: true,
            verbose: false,
        }
    }
}

impl Tools {
    pub(crate) fn trace(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Run `program` in `cwd` and collect its output. The caller decides what a
/// non-zero exit means.
pub(crate) fn capture(tools: &Tools, program: &str, args: &[&str], cwd: &Path) -> Result<Output> {
    tools.trace(&format!("{} {} (in {})", program, args.join(" "), cwd.display()));

    Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| SearchError::Spawn {
            program: program.to_string(),
            source,
        })
}
