//! Command dispatch: decode the tree argument, run one query, format the answer

use std::io::{self, Read};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::arena::BinaryTree;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::tree_traits::TreeDisplay;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Commands::Completion { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config_file.as_deref())?;
    let answer = render(&cli.command, &settings)?;
    output::info(&answer);
    Ok(())
}

/// Runs `command` and returns the text to print.
#[instrument(level = "debug", skip(settings))]
pub fn render(command: &Commands, settings: &Settings) -> CliResult<String> {
    match command {
        Commands::Depth { tree } => {
            let tree = decode(tree, settings)?;
            Ok(format!("min: {}\nmax: {}", tree.min_depth(), tree.max_depth()))
        }
        Commands::MaxSum { tree } => Ok(decode(tree, settings)?.max_sum()?.to_string()),
        Commands::NextLarger { tree, bound } => Ok(decode(tree, settings)?
            .next_larger(*bound)
            .map_or_else(|| "none".to_string(), |v| v.to_string())),
        Commands::Cousins { tree, a, b } => {
            let tree = decode(tree, settings)?;
            let (a, b) = (tree.node_at(a)?, tree.node_at(b)?);
            Ok(tree.are_cousins(a, b).to_string())
        }
        Commands::Lca { tree, a, b } => {
            let tree = decode(tree, settings)?;
            let (a, b) = (tree.node_at(a)?, tree.node_at(b)?);
            let answer = tree.lowest_common_ancestor(a, b).and_then(|lca| {
                let value = tree.value(lca)?;
                let path = tree.path_of(lca)?;
                Some(format!("{} at {}", value, display_path(&path)))
            });
            Ok(answer.unwrap_or_else(|| "none".to_string()))
        }
        Commands::Show { tree } => {
            let tree = decode(tree, settings)?;
            Ok(tree
                .to_tree_string(&settings.display)
                .to_string()
                .trim_end()
                .to_string())
        }
        Commands::Normalize { tree } => Ok(decode(tree, settings)?.serialize()),
        Commands::Config { command } => match command {
            ConfigCommands::Show => Ok(settings.to_toml()?.trim_end().to_string()),
            ConfigCommands::Path => Ok(global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "no config directory available".to_string())),
        },
        Commands::Completion { .. } => Err(CliError::InvalidArgs(
            "completion is written directly to stdout".to_string(),
        )),
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

/// Decodes the tree argument, reading stdin for `-`.
fn decode(arg: &str, settings: &Settings) -> CliResult<BinaryTree> {
    let input = if arg == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        if buf.trim().is_empty() {
            return Err(CliError::InvalidArgs("no tree on stdin".to_string()));
        }
        buf
    } else {
        arg.to_string()
    };
    let tree = BinaryTree::deserialize_bounded(&input, settings.max_depth)?;
    debug!("tree with {} nodes", tree.len());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1,2,4,null,null,5,null,null,3,null,null,";

    fn run(command: Commands) -> CliResult<String> {
        render(&command, &Settings::default())
    }

    #[test]
    fn given_sample_tree_when_depth_then_prints_min_and_max() {
        let out = run(Commands::Depth {
            tree: SAMPLE.into(),
        })
        .unwrap();
        assert_eq!(out, "min: 2\nmax: 3");
    }

    #[test]
    fn given_leaf_paths_when_lca_then_prints_value_and_path() {
        let out = run(Commands::Lca {
            tree: SAMPLE.into(),
            a: "LL".into(),
            b: "LR".into(),
        })
        .unwrap();
        assert_eq!(out, "2 at L");

        let out = run(Commands::Lca {
            tree: SAMPLE.into(),
            a: "LL".into(),
            b: "R".into(),
        })
        .unwrap();
        assert_eq!(out, "1 at (root)");
    }

    #[test]
    fn given_no_qualifying_value_when_next_larger_then_prints_none() {
        let out = run(Commands::NextLarger {
            tree: SAMPLE.into(),
            bound: 5,
        })
        .unwrap();
        assert_eq!(out, "none");
    }

    #[test]
    fn given_malformed_tree_when_rendering_then_fails_with_dataerr() {
        let err = run(Commands::Normalize {
            tree: "1,x,null,".into(),
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_empty_tree_when_max_sum_then_fails() {
        let err = run(Commands::MaxSum {
            tree: "null,".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn given_single_child_when_show_then_marks_missing_side() {
        let out = run(Commands::Show {
            tree: "1,null,3,null,null,".into(),
        })
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "1");
        assert!(lines[1].ends_with("∅"));
        assert!(lines[2].ends_with("3"));
    }
}
