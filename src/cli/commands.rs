//! Command dispatch: one demo driver per subcommand

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{RenderStyle, Settings, ThemeSelection};
use crate::domain::composite::{Folder, ImageLeaf, Node, TextLeaf};
use crate::domain::factory::spawn_and_activate_army;
use crate::domain::strategy::{Context, FnContext, Operation};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if cli.no_color {
        settings.color = false;
    }
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Composite { depth, style }) => {
            if let Some(depth) = depth {
                settings.start_depth = *depth;
            }
            if let Some(style) = style {
                settings.style = *style;
            }
            _composite(&settings)
        }
        Some(Commands::Factory { theme }) => {
            if let Some(theme) = theme {
                settings.theme = *theme;
            }
            _factory(settings.theme)
        }
        Some(Commands::Strategy { a, b, action }) => _strategy(*a, *b, action),
        Some(Commands::All) => _all(&settings),
        Some(Commands::Config) => _config(&settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// `Root -> [readme.txt, User -> [notes.txt, avatar.png]]`
fn sample_tree() -> Node {
    let mut user = Folder::new("User");
    user.add(TextLeaf::new("notes.txt", 12));
    user.add(ImageLeaf::new("avatar.png", 256));

    let mut root = Folder::new("Root");
    root.add(TextLeaf::new("readme.txt", 4));
    root.add(user);
    root.into()
}

#[instrument(level = "debug", skip(settings))]
fn _composite(settings: &Settings) -> CliResult<()> {
    output::banner("Composite");
    let mut tree = sample_tree();

    match settings.style {
        RenderStyle::Indent => {
            for line in tree.render_lines(settings.start_depth) {
                output::info(&line);
            }
        }
        RenderStyle::Tree => output::info(&tree.to_tree_string()),
    }
    output::action("Total size", &format!("{} KB", tree.size_kb()));

    // Leaves cannot hold children: the error is reported, not propagated
    let mut leaf: Node = TextLeaf::new("readme.txt", 4).into();
    if let Err(e) = leaf.add_child(TextLeaf::new("orphan.txt", 1)) {
        output::warning(&e);
    }

    let absent: Node = TextLeaf::new("missing.txt", 1).into();
    tree.remove_child(&absent)?;
    debug!(children = tree.child_count(), "removing absent child left tree unchanged");
    output::detail(&format!(
        "removing '{}' from '{}': {} children remain",
        absent.name(),
        tree.name(),
        tree.child_count()
    ));
    Ok(())
}

#[instrument(level = "debug")]
fn _factory(selection: ThemeSelection) -> CliResult<()> {
    output::banner("Abstract Factory");
    for theme in selection.themes() {
        output::action("System", &format!("Spawning {theme} Faction units..."));
        let factory = theme.factory();
        for line in spawn_and_activate_army(factory.as_ref()) {
            output::detail(&line);
        }
    }
    Ok(())
}

#[instrument(level = "debug")]
fn _strategy(a: i64, b: i64, action: &str) -> CliResult<()> {
    let operation: Operation = action.parse()?;
    let mut context = Context::new();
    context.set_strategy(operation.strategy());
    let result = context.execute_strategy(a, b)?;
    output::action("Result", &result);
    Ok(())
}

fn _all(settings: &Settings) -> CliResult<()> {
    _factory(settings.theme)?;
    output::info("");
    _composite(settings)?;
    output::info("");

    output::banner("Strategy");
    let mut context = Context::new();
    for operation in [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ] {
        context.set_strategy(operation.strategy());
        let result = context.execute_strategy(5, 5)?;
        output::detail(&format!("{operation}(5, 5) = {result}"));
    }

    let mut functional = FnContext::new(|a, b| a * b);
    output::detail(&format!("closure multiply(5, 5) = {}", functional.execute(5, 5)));
    functional.set_strategy(|a, b| a + b);
    output::detail(&format!("closure add(5, 5) = {}", functional.execute(5, 5)));
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
