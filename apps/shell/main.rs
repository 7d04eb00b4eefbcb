use std::path::Path;
use std::sync::Arc;
use clap::{error, Parser, ArgMatches, Command};
use reedline::{Reedline, Signal};

mod prompt;
mod console;
use prompt::ContactsPrompt;
use console::{ConsoleNotifier, ConsoleSurface};

mod cmds {
    pub(crate) mod contact_cmd;
    pub(crate) mod dialog_cmd;
}

use contacts::{
    configuration as cfg,
    logger,
    APIClient,
    ContactsView,
    ViewBuilder,
};

use contacts::contacts::{
    ContactForm,
    FieldGroup,
    Format,
    HtmlFileSurface,
    Locale,
};

fn build_cli() -> Command {
    let mut cmd = Command::new("contacts")
        .about("Interactive contact book shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::list_cli())
        .subcommand(cmds::contact_cmd::favorites_cli())
        .subcommand(cmds::contact_cmd::search_cli())
        .subcommand(cmds::contact_cmd::refresh_cli())
        .subcommand(cmds::contact_cmd::show_cli())
        .subcommand(cmds::contact_cmd::favorite_cli())
        .subcommand(cmds::contact_cmd::delete_cli())
        .subcommand(cmds::contact_cmd::add_name_cli())
        .subcommand(cmds::contact_cmd::add_phone_cli())
        .subcommand(cmds::contact_cmd::import_cli())
        .subcommand(cmds::contact_cmd::export_cli())
        .subcommand(cmds::dialog_cmd::dialog_cli())
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

fn joined(m: &ArgMatches, name: &str) -> String {
    m.get_many::<String>(name)
        .map(|v| v.map(|s| s.as_str()).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn execute_group(group: &mut FieldGroup, matches: &ArgMatches) {
    match matches.subcommand() {
        Some(("add", _)) => {
            let index = group.add_field();
            println!("Input {} added.", index);
        }
        Some(("remove", m)) => {
            let index = *m.get_one::<usize>("INDEX").unwrap();
            if !group.remove_field(index) {
                println!("Input {} kept, at least one input stays.", index);
            }
        }
        Some(("set", m)) => {
            let index = *m.get_one::<usize>("INDEX").unwrap();
            _ = group.set(index, &joined(m, "VALUE")).map_err(|e| {
                println!("Error: {e}");
            });
        }
        _ => println!("Unknown input command"),
    }
}

fn edit_form(view: &mut ContactsView, f: impl FnOnce(&mut ContactForm)) -> bool {
    let Some(form) = view.form_mut() else {
        println!("Error: no dialog is open, use 'dialog add' or 'dialog edit <ID>'");
        return false;
    };
    f(form);
    true
}

async fn execute_dialog(matches: &ArgMatches, view: &mut ContactsView) {
    let shown = match matches.subcommand() {
        Some(("add", _)) => {
            view.show_add_dialog();
            true
        }
        Some(("edit", m)) => {
            let id = *m.get_one::<i64>("ID").unwrap();
            match view.edit_contact(id) {
                Ok(_) => true,
                Err(e) => {
                    println!("Error: {e}");
                    false
                }
            }
        }
        Some(("name", m)) => edit_form(view, |form| execute_group(form.names_mut(), m)),
        Some(("phone", m)) => edit_form(view, |form| execute_group(form.phone_numbers_mut(), m)),
        Some(("email", m)) => edit_form(view, |form| form.set_email(&joined(m, "VALUE"))),
        Some(("location", m)) => edit_form(view, |form| form.set_location(&joined(m, "VALUE"))),
        Some(("info", m)) => edit_form(view, |form| form.set_info(&joined(m, "VALUE"))),
        Some(("media", m)) => edit_form(view, |form| form.set_media_handles(&joined(m, "VALUE"))),
        Some(("favorite", m)) => {
            let flag = *m.get_one::<bool>("FLAG").unwrap();
            edit_form(view, |form| form.set_favorite(flag))
        }
        Some(("show", _)) => edit_form(view, |_| {}),
        Some(("save", _)) => {
            _ = view.save().await.map(|_| {
                println!("Contact saved.");
            });
            false
        }
        Some(("cancel", _)) => {
            view.close_dialog();
            false
        }
        _ => {
            println!("Unknown dialog command");
            false
        }
    };

    if shown {
        if let Some(markup) = view.dialog_markup() {
            print!("{}", markup);
        }
    }
}

async fn execute_command(matches: ArgMatches, view: &mut ContactsView) {
    match matches.subcommand() {
        Some(("list", _)) => view.show_all(),
        Some(("favorites", m)) => match m.get_flag("remote") {
            true => {
                _ = view.show_remote_favorites().await.map(|n| {
                    println!("{} favorite contacts on server.", n);
                });
            }
            false => view.show_favorites(),
        },
        Some(("search", m)) => {
            let keyword = m.get_one::<String>("KEYWORD").unwrap();
            match m.get_flag("remote") {
                true => {
                    _ = view.search_remote(keyword).await.map(|n| {
                        println!("{} contacts matched on server.", n);
                    });
                }
                false => view.search(keyword),
            }
        }
        Some(("refresh", _)) => {
            _ = view.fetch_all().await;
        }
        Some(("show", m)) => {
            let id = *m.get_one::<i64>("ID").unwrap();
            _ = view.inspect(id).await;
        }
        Some(("favorite", m)) => {
            let id = *m.get_one::<i64>("ID").unwrap();
            _ = view.toggle_favorite(id).await.map_err(|e| {
                println!("Error toggling favorite: {e}");
            });
        }
        Some(("delete", m)) => {
            let id = *m.get_one::<i64>("ID").unwrap();
            match view.delete_contact(id).await {
                Ok(true) => println!("Contact {} is deleted.", id),
                Ok(false) => println!("Cancelled."),
                Err(_) => {},
            }
        }
        Some(("add-name", m)) => {
            let id = *m.get_one::<i64>("ID").unwrap();
            _ = view.append_name(id, &joined(m, "NAME")).await.map_err(|e| {
                println!("Error adding name: {e}");
            });
        }
        Some(("add-phone", m)) => {
            let id = *m.get_one::<i64>("ID").unwrap();
            let phone = m.get_one::<String>("PHONE").unwrap();
            _ = view.append_phone_number(id, phone).await.map_err(|e| {
                println!("Error adding phone number: {e}");
            });
        }
        Some(("import", m)) => {
            let file = m.get_one::<String>("FILE").unwrap();
            _ = view.import_contacts(Path::new(file)).await;
        }
        Some(("export", _)) => {
            _ = view.export_contacts().await.map(|path| {
                println!("Contacts exported to {}", path.display());
            });
        }
        Some(("dialog", m)) => execute_dialog(m, view).await,
        _ => println!("Unknown command"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version = "1.0")]
#[command(about = "Interactive contact book shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The base url of the contacts service
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// The language of notices and labels (en or zh)
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let locale = match opts.locale.as_deref().map(|v| v.parse::<Locale>()).transpose() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let mut b = cfg::Builder::new();
    if let Some(path) = opts.config.as_deref() {
        if let Err(e) = b.load(path) {
            eprintln!("Loading config error: {e}");
            return;
        }
    }
    if let Some(url) = opts.api_url.as_deref() {
        b.with_api_url(url);
    }
    if let Some(locale) = locale {
        b.with_locale(locale);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building config error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")]
    cfg.dump();

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
        return;
    }

    let client = match APIClient::new(cfg.api_url()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating contacts client error: {e}");
            return;
        }
    };

    let mut b = ViewBuilder::new();
    b.with_service(Arc::new(client))
        .with_notifier(ConsoleNotifier)
        .with_config(&*cfg);

    match (cfg.format(), cfg.surface_file()) {
        (Format::Html, Some(path)) => {
            println!("Rendering contacts into {}", path);
            b.with_surface(HtmlFileSurface::new(path));
        }
        _ => {
            b.with_format(Format::Text).with_surface(ConsoleSurface);
        }
    }

    let mut view = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating contacts view error: {e}");
            return;
        }
    };

    println!("Welcome to the interactive contacts shell. Type 'exit' to quit.\n");
    _ = view.mount().await;

    let mut cli = build_cli();
    let mut rl = Reedline::create();
    let mut prompt = ContactsPrompt::new();

    loop {
        prompt.set_editing(view.form().is_some());
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args[0] == "help" && args.len() > 1 {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let cmd = args.join(" ");
                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut view).await,
                    Err(_) => {
                        println!("Error: command not found: '{}'", cmd);
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    view.unmount();
    logger::teardown();
}
