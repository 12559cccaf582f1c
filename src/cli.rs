use crate::types::TaskCommand;
use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("faena")
        .about("CLI tool to manage your tasks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("add").about("Add a new task").arg(
                Arg::new("description")
                    .help("Task text (words are joined with spaces)")
                    .num_args(1..)
                    .required(true)
                    .value_name("TEXT"),
            ),
        )
        .subcommand(
            Command::new("list").about("List all tasks").arg(
                Arg::new("unchecked-only")
                    .short('u')
                    .long("unchecked-only")
                    .help("Only display the tasks that are not checked")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(Command::new("toggle").about("Toggle the check state of selected tasks"))
        .subcommand(Command::new("delete").about("Delete selected tasks"))
        .subcommand(
            Command::new("completions")
                .about("Print completion script for <SHELL> to stdout")
                .arg(
                    Arg::new("shell")
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .required(true)
                        .value_name("SHELL"),
                ),
        )
}

pub fn parse_command() -> TaskCommand {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("add", sub)) => {
            let description = sub
                .get_many::<String>("description")
                .map(|vals| vals.map(String::as_str).collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            TaskCommand::Add { description }
        }
        Some(("list", sub)) => TaskCommand::List {
            unchecked_only: sub.get_flag("unchecked-only"),
        },
        Some(("toggle", _)) => TaskCommand::Toggle,
        Some(("delete", _)) => TaskCommand::Delete,
        Some(("completions", sub)) => TaskCommand::Completions {
            shell: sub
                .get_one::<String>("shell")
                .cloned()
                .unwrap_or_default(),
        },
        _ => unreachable!(),
    }
}
