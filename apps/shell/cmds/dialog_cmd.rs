use clap::{arg, Command};

fn group_cli(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add an empty input")
        )
        .subcommand(
            Command::new("remove")
                .about("Remove an input, the last one always stays")
                .arg(arg!(<INDEX> "The input index").value_parser(clap::value_parser!(usize)))
        )
        .subcommand(
            Command::new("set")
                .about("Fill an input")
                .arg(arg!(<INDEX> "The input index").value_parser(clap::value_parser!(usize)))
                .arg(arg!([VALUE] ... "The input value"))
        )
        .help_template("{subcommands}")
        .disable_help_flag(true)
}

fn scalar_cli(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(arg!([VALUE] ... "The value, empty to clear"))
}

pub(crate) fn dialog_cli() -> Command {
    Command::new("dialog")
        .about("Add or edit a contact in the editing dialog")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Open an empty dialog for a new contact")
        )
        .subcommand(
            Command::new("edit")
                .about("Open the dialog pre-filled with a contact")
                .arg(arg!(<ID> "The contact id").value_parser(clap::value_parser!(i64)))
        )
        .subcommand(group_cli("name", "Manage the name inputs"))
        .subcommand(group_cli("phone", "Manage the phone number inputs"))
        .subcommand(scalar_cli("email", "Set the email"))
        .subcommand(scalar_cli("location", "Set the location"))
        .subcommand(scalar_cli("info", "Set the note"))
        .subcommand(scalar_cli("media", "Set the social media handles"))
        .subcommand(
            Command::new("favorite")
                .about("Mark the contact as favorite or not")
                .arg(arg!(<FLAG> "true or false").value_parser(clap::value_parser!(bool)))
        )
        .subcommand(
            Command::new("show")
                .about("Show the dialog")
        )
        .subcommand(
            Command::new("save")
                .about("Save the dialog and close it")
        )
        .subcommand(
            Command::new("cancel")
                .about("Close the dialog without saving")
        )
        .help_template("{subcommands}")
        .disable_help_flag(true)
}
