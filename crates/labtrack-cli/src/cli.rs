//! Command-line definition

use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, Command};
use labtrack_export::ReportFormat;
use labtrack_model::{Priority, Stage, StepList};

fn parse_stage(s: &str) -> Result<Stage, String> {
    s.replace(['-', '_'], " ").parse().map_err(|e| format!("{e}"))
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_step_list(s: &str) -> Result<StepList, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "completed" | "done" => Ok(StepList::Completed),
        "next" => Ok(StepList::Next),
        other => Err(format!("unknown step list '{other}', expected completed or next")),
    }
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_switch(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "dark" => Ok(true),
        "off" | "false" | "light" => Ok(false),
        other => Err(format!("expected on or off, got '{other}'")),
    }
}

fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Project id")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("stage")
            .long("stage")
            .value_parser(parse_stage)
            .help("Workflow stage, e.g. \"Data Collection\""),
    )
    .arg(
        Arg::new("priority")
            .long("priority")
            .value_parser(parse_priority)
            .help("Low, Medium, High or Critical"),
    )
    .arg(
        Arg::new("progress")
            .long("progress")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .help("Progress percent; clamped to 0..=100"),
    )
    .arg(
        Arg::new("start")
            .long("start")
            .value_parser(parse_date)
            .help("Start date (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("due")
            .long("due")
            .value_parser(parse_date)
            .help("Due date (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .help("Free-text description"),
    )
    .arg(
        Arg::new("tag")
            .long("tag")
            .action(ArgAction::Append)
            .help("Tag (repeatable)"),
    )
}

/// Build the `labtrack` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("labtrack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bioinformatics project tracker")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Override the configured data directory"),
        )
        .subcommand(
            Command::new("list")
                .about("List projects in display order")
                .arg(Arg::new("search").long("search").help("Search text"))
                .arg(
                    Arg::new("stage")
                        .long("stage")
                        .value_parser(parse_stage)
                        .help("Only this stage"),
                )
                .arg(
                    Arg::new("priority")
                        .long("priority")
                        .value_parser(parse_priority)
                        .help("Only this priority"),
                )
                .arg(
                    Arg::new("tag")
                        .long("tag")
                        .action(ArgAction::Append)
                        .help("Any of these tags (repeatable)"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one project with its timeline and suggestions")
                .arg(id_arg())
                .arg(json_arg()),
        )
        .subcommand(field_args(
            Command::new("add")
                .about("Create a project")
                .arg(Arg::new("name").required(true).help("Project name"))
                .arg(
                    Arg::new("template")
                        .long("template")
                        .help("Pre-fill steps from a workflow template"),
                )
                .arg(
                    Arg::new("next")
                        .long("next")
                        .action(ArgAction::Append)
                        .help("Next step (repeatable)"),
                ),
        ))
        .subcommand(field_args(
            Command::new("update")
                .about("Edit a project")
                .arg(id_arg())
                .arg(Arg::new("name").long("name").help("New name"))
                .arg(
                    Arg::new("clear-start")
                        .long("clear-start")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("start")
                        .help("Remove the start date"),
                )
                .arg(
                    Arg::new("clear-due")
                        .long("clear-due")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("due")
                        .help("Remove the due date"),
                ),
        ))
        .subcommand(
            Command::new("remove")
                .about("Delete a project")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("move")
                .about("Move a project to a new position")
                .arg(id_arg())
                .arg(
                    Arg::new("index")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Target index (0-based; past the end means last)"),
                ),
        )
        .subcommand(
            Command::new("move-step")
                .about("Reorder a step within one of a project's step lists")
                .arg(id_arg())
                .arg(
                    Arg::new("list")
                        .required(true)
                        .value_parser(parse_step_list)
                        .help("completed or next"),
                )
                .arg(
                    Arg::new("from")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(Arg::new("to").required(true).value_parser(value_parser!(usize))),
        )
        .subcommand(
            Command::new("attach")
                .about("Record attachment metadata for a file")
                .arg(id_arg())
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            Command::new("detach")
                .about("Remove attachment metadata")
                .arg(id_arg())
                .arg(Arg::new("attachment").required(true).help("Attachment id")),
        )
        .subcommand(
            Command::new("insights")
                .about("Aggregate metrics")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("suggest")
                .about("Ranked recommendations")
                .arg(Arg::new("focus").long("focus").help("Project id to focus on"))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Write a project report")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("md")
                        .value_parser(parse_format)
                        .help("md or txt"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_parser(value_parser!(std::path::PathBuf))
                        .help("Output file"),
                ),
        )
        .subcommand(
            Command::new("track")
                .about("Track time on a project until Ctrl-C")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("dark-mode")
                .about("Show or set the display-mode flag")
                .arg(Arg::new("state").value_parser(parse_switch).help("on or off")),
        )
        .subcommand(Command::new("tags").about("List tags in use"))
        .subcommand(Command::new("templates").about("List workflow templates"))
        .subcommand(
            Command::new("step-hints")
                .about("Common steps matching the input")
                .arg(Arg::new("input").required(true)),
        )
}
