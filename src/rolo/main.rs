use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::commands::{CmdMessage, MessageLevel};
use rolo::config::Config;
use rolo::dispatch::{dispatch, is_exit, parse_input};
use rolo::error::Result;
use rolo::store::fs::FileStore;
use rolo::store::BookStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

const BOOK_FILENAME: &str = "contacts.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let book_path = resolve_book_path(&cli);
    let config_dir = book_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(config_dir).unwrap_or_default();

    let mut store = FileStore::new(book_path);
    let mut book = store.load()?;

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        // Closed stdin ends the session like an explicit `exit`, minus the
        // farewell. The book is still saved.
        let Some(line) = lines.next() else {
            store.save(&book)?;
            break;
        };
        let line = line?;

        let Some((command, args)) = parse_input(&line) else {
            print_messages(&[CmdMessage::warning("Enter a command please.")]);
            continue;
        };

        let today = Local::now().date_naive();
        let result = dispatch(&command, &args, &mut book, today, config.window_days);
        print_messages(&result.messages);

        if is_exit(&command) {
            store.save(&book)?;
            break;
        }
    }

    Ok(())
}

fn resolve_book_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.file {
        return path.clone();
    }

    let proj_dirs =
        ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
    proj_dirs.data_dir().join(BOOK_FILENAME)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
