use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, fmt};

use tag_extractor::utils::config::{DEFAULT_CONFIG_PATH, load_config};
use tag_extractor::{TagError, TagSession};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_tracing() {
    // RUST_LOG wins over the build profile default
    let default_level = if cfg!(debug_assertions) { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &TagError) {
    if err.is_usage() {
        println!("{}", err);
    } else {
        eprintln!("{}", err);
    }
}

fn print_help() {
    println!("The valid commands are->");
    println!("stopwords [path]: Loads the stop words file, one word per line");
    println!("process [path]: Counts the words of a text file, skipping stop words");
    println!("show: Prints the current tags");
    println!("save [path]: Saves the current tags (defaults to the configured output path)");
    println!("open [path]: Loads previously saved tags");
    println!("exit: Quits");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut rl = DefaultEditor::new()?;
    let config = load_config(DEFAULT_CONFIG_PATH);
    let mut session = TagSession::new();

    println!("\nCurrent Configuration:");
    println!(
        "  Stop Words File: {}",
        config.stop_words_path.as_deref().unwrap_or("<none>")
    );
    println!("  Output File:     {}", config.output_path);

    if let Some(path) = &config.stop_words_path {
        match session.load_stop_words(path) {
            Ok(stop_words) => println!("Loaded {} stop words from {}", stop_words.len(), path),
            Err(e) => report(&e),
        }
    }
    println!("\nWelcome to Tag Extractor! Type 'help' for commands or 'exit' to quit.\n");

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let (command, argument) = match line.split_once(char::is_whitespace) {
                    Some((command, rest)) => (command, Some(rest.trim())),
                    None => (line, None),
                };

                match (command, argument) {
                    ("help", _) => print_help(),
                    ("stopwords", Some(path)) => match session.load_stop_words(path) {
                        Ok(_) => println!("Stop words loaded successfully."),
                        Err(e) => report(&e),
                    },
                    ("process", Some(path)) => match session.process_file(path) {
                        Ok(_) => {
                            for line in session.display_lines() {
                                println!("{}", line);
                            }
                        }
                        Err(e) => report(&e),
                    },
                    ("open", Some(path)) => match session.load_results(path) {
                        Ok(mapping) => println!("Loaded {} tags", mapping.len()),
                        Err(e) => report(&e),
                    },
                    ("show", _) => {
                        for line in session.display_lines() {
                            println!("{}", line);
                        }
                    }
                    ("save", path) => {
                        let path = path.unwrap_or(config.output_path.as_str());
                        match session.save_results(path) {
                            Ok(()) => println!("Tags saved successfully."),
                            Err(e) => report(&e),
                        }
                    }
                    ("stopwords" | "process" | "open", None) => {
                        println!("'{}' needs a file path", command);
                    }
                    ("quit" | "exit", _) => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        println!(
                            "Invalid command. Type help if you want to see the valid commands"
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
