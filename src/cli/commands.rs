//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use colored::Colorize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, BuiltTree, Scenario, TreeBuilder, TreeRender};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::config::{global_config_dir, global_config_path, local_config_path, OutputFormat, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let settings = Settings::load(Some(&project_dir))?;
    colored::control::set_override(settings.color);
    debug!(?settings, project_dir = %project_dir.display(), "settings loaded");

    match &cli.command {
        Some(Commands::Demo { scenario, format }) => _demo(*scenario, *format, &settings),
        Some(Commands::Build { file, format }) => _build(file, *format, &settings),
        Some(Commands::Check { file }) => _check(file),
        Some(Commands::Config { command }) => _config(command, &settings, &project_dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn resolve_project_dir(project_dir: Option<&Path>) -> CliResult<PathBuf> {
    match project_dir {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        ))),
        None => std::env::current_dir()
            .map_err(|e| ApplicationError::io("determine current directory", e).into()),
    }
}

#[instrument(level = "debug", skip(settings))]
fn _demo(scenario: Scenario, format: Option<OutputFormat>, settings: &Settings) -> CliResult<()> {
    let tree = scenario.build()?;
    print_tree(&tree, format.unwrap_or(settings.format), settings.check)
}

#[instrument(level = "debug", skip(settings))]
fn _build(file: &Path, format: Option<OutputFormat>, settings: &Settings) -> CliResult<()> {
    let tree = TreeBuilder::new().build_from_file(file)?;
    print_tree(&tree, format.unwrap_or(settings.format), settings.check)
}

#[instrument(level = "debug")]
fn _check(file: &Path) -> CliResult<()> {
    let tree = TreeBuilder::new().build_from_file(file)?;
    tree.arena
        .check_tree(tree.root)
        .map_err(ApplicationError::from)?;
    let count = tree.arena.pre_order(tree.root).count();
    println!(
        "{} {} ({} nodes)",
        "OK".green(),
        file.display(),
        count
    );
    Ok(())
}

fn print_tree(tree: &BuiltTree, format: OutputFormat, check: bool) -> CliResult<()> {
    if check {
        tree.arena
            .check_tree(tree.root)
            .map_err(ApplicationError::from)?;
    }
    match format {
        OutputFormat::Tree => print!("{}", tree.arena.to_tree_string(tree.root)),
        OutputFormat::Preorder => println!("{}", tree.arena.to_pre_order_string(tree.root)),
    }
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings, project_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => println!("global: {}", path.display()),
                None => println!("global: {}", "<no home directory>".yellow()),
            }
            println!("local:  {}", local_config_path(project_dir).display());
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                let dir = global_config_dir()
                    .ok_or_else(|| CliError::Usage("no home directory for global config".into()))?;
                std::fs::create_dir_all(&dir)
                    .map_err(|e| ApplicationError::io(format!("create {}", dir.display()), e))?;
                dir.join("linktree.toml")
            } else {
                local_config_path(project_dir)
            };
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            std::fs::write(&path, Settings::default().to_toml()?)
                .map_err(|e| ApplicationError::io(format!("write {}", path.display()), e))?;
            println!("{} {}", "Created".green(), path.display());
            Ok(())
        }
    }
}
