//! Oracle - interactive personal task tracker

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

use oracle::parser;
use oracle::storage::{Storage, DEFAULT_DATA_FILE};
use oracle::task::TaskList;

#[derive(Parser)]
#[command(name = "oracle")]
#[command(about = "Interactive personal task tracker", version)]
struct Cli {
    /// Path to the task data file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    if std::env::var("ORACLE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("oracle=debug")
            .init();
    }

    let cli = Cli::parse();
    let storage = Storage::new(cli.file);

    // A broken data file must not keep the session from starting.
    let mut tasks = match storage.load() {
        Ok(loaded) => TaskList::from_tasks(loaded),
        Err(e) => {
            eprintln!("Error loading tasks from file: {e}");
            TaskList::new()
        }
    };

    println!("Greetings, traveler! I am Oracle, your cosmic guide.");
    println!("How may I chart your course today?");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parser::parse(&line) {
            Ok(command) => match command.execute(&mut tasks, &storage) {
                Ok(message) => {
                    println!("{message}");
                    if command.is_exit() {
                        break;
                    }
                }
                Err(e) => println!("{e}"),
            },
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
