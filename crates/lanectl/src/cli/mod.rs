//! CLI command definitions using `clap`

pub mod handlers;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use lane_core::CraneRole;

pub fn build_cli() -> Command {
    Command::new("lanectl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create crane lanes and move their cranes without collisions")
        .subcommand_required(true)
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite database file (overrides config and LANECTL_DB)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Extra config file layered over the global one"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(cmd_create())
        .subcommand(cmd_list())
        .subcommand(cmd_show())
        .subcommand(cmd_move())
        .subcommand(cmd_config())
}

fn cmd_create() -> Command {
    Command::new("create")
        .about("Create lanes with cranes at both ends")
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Number of lanes to create"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .short('l')
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Positions per lane"),
        )
}

fn cmd_list() -> Command {
    Command::new("list").about("List all lanes")
}

fn cmd_show() -> Command {
    Command::new("show")
        .about("Show one lane")
        .arg(Arg::new("lane_id").required(true).help("Lane identifier"))
}

fn cmd_move() -> Command {
    Command::new("move")
        .about("Move a crane; a NEAR crane pushes the FAR crane out of its way")
        .arg(Arg::new("lane_id").required(true).help("Lane identifier"))
        .arg(
            Arg::new("crane")
                .long("crane")
                .short('c')
                .required(true)
                .value_parser(value_parser!(CraneRole))
                .help("Crane to move: near or far"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Desired position"),
        )
}

fn cmd_config() -> Command {
    Command::new("config").about("Print the effective configuration")
}
