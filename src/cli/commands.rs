use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::exitcode;
use crate::parser::load_tree;
use crate::tree_stack::{check_super_balance, Balance};
use crate::tree_traits::TreeNodeConvert;

/// Run the parsed command and return the process exit code.
pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<i32> {
    match &cli.command {
        Commands::Check { files, tree, quiet } => {
            let settings = Settings {
                show_tree: settings.show_tree || *tree,
                ..settings.clone()
            };
            check_files(files, &settings, *quiet)
        }
        Commands::Show { file } => show(file),
        Commands::Completion { shell } => completion(*shell),
    }
}

fn format_depths(depths: &[usize]) -> String {
    let depths = depths
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("leaf depths: {{{}}}", depths)
}

/// Check every file; all files are checked even after the first unbalanced one.
#[instrument(level = "debug", skip(settings))]
pub fn check_files(files: &[PathBuf], settings: &Settings, quiet: bool) -> CliResult<i32> {
    let mut code = exitcode::OK;

    for file in files {
        let tree = load_tree(file)?;
        let balance = check_super_balance(tree.as_ref());
        info!(file = %file.display(), balanced = balance.is_balanced(), "checked");

        if !balance.is_balanced() {
            code = exitcode::UNBALANCED;
        }
        if quiet {
            continue;
        }

        if settings.show_tree {
            output::info(&tree.as_ref().to_tree_string());
        }
        match &balance {
            Balance::Balanced { .. } => {
                output::success(&format!("{}: superbalanced", file.display()))
            }
            Balance::Unbalanced { .. } => {
                output::failure(&format!("{}: not superbalanced", file.display()))
            }
        }
        if settings.show_depths {
            output::detail(&format_depths(balance.depths()));
        }
    }

    debug!(code, "check done");
    Ok(code)
}

#[instrument(level = "debug")]
fn show(file: &Path) -> CliResult<i32> {
    let tree = load_tree(file)?;

    output::header(&file.display());
    output::info(&tree.as_ref().to_tree_string());
    if let Some(root) = &tree {
        let depths = root.leaf_depths().into_iter().collect::<Vec<_>>();
        output::detail(&format!("nodes: {}, height: {}", root.node_count(), root.height()));
        output::detail(&format_depths(&depths));
    }
    Ok(exitcode::OK)
}

fn completion(shell: Shell) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(exitcode::OK)
}
