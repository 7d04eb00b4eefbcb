use clap::{arg, Command};

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("Show all contacts")
}

pub(crate) fn favorites_cli() -> Command {
    Command::new("favorites")
        .about("Show favorite contacts")
        .arg(arg!(-r --remote "Ask the server instead of filtering locally"))
}

pub(crate) fn search_cli() -> Command {
    Command::new("search")
        .about("Search contacts by name or phone number")
        .arg(arg!(<KEYWORD> "The keyword to search for"))
        .arg(arg!(-r --remote "Ask the server instead of filtering locally"))
        .arg_required_else_help(true)
}

pub(crate) fn refresh_cli() -> Command {
    Command::new("refresh")
        .about("Reload all contacts from the server")
}

pub(crate) fn show_cli() -> Command {
    Command::new("show")
        .about("Retrieve one contact from the server")
        .arg(arg!(<ID> "The contact id").value_parser(clap::value_parser!(i64)))
}

pub(crate) fn favorite_cli() -> Command {
    Command::new("favorite")
        .about("Toggle the favorite flag of a contact")
        .arg(arg!(<ID> "The contact id").value_parser(clap::value_parser!(i64)))
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete a contact")
        .arg(arg!(<ID> "The contact id to be removed").value_parser(clap::value_parser!(i64)))
        .arg_required_else_help(true)
}

pub(crate) fn add_name_cli() -> Command {
    Command::new("add-name")
        .about("Append a name to a contact")
        .arg(arg!(<ID> "The contact id").value_parser(clap::value_parser!(i64)))
        .arg(arg!(<NAME> ... "The name to append"))
}

pub(crate) fn add_phone_cli() -> Command {
    Command::new("add-phone")
        .about("Append a phone number to a contact")
        .arg(arg!(<ID> "The contact id").value_parser(clap::value_parser!(i64)))
        .arg(arg!(<PHONE> "The phone number to append"))
}

pub(crate) fn import_cli() -> Command {
    Command::new("import")
        .about("Import contacts from a spreadsheet file")
        .arg(arg!(<FILE> "The spreadsheet to upload"))
}

pub(crate) fn export_cli() -> Command {
    Command::new("export")
        .about("Download all contacts as a spreadsheet")
}
