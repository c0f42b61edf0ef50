use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ordtree_core::{Session, MAX_DEGREE, MIN_DEGREE};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ordtree")]
#[command(about = "Ordered multi-way tree playground")]
struct Cli {
    /// Print debug logs for splits and rebalancing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Shell {
        #[arg(short, long)]
        degree: Option<String>,
    },

    Build {
        #[arg(short, long, default_value = "4")]
        degree: String,

        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Shell { degree } => run_shell(degree),
        Commands::Build { degree, values } => run_build(&degree, &values),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_build(degree: &str, values: &[String]) -> Result<()> {
    let mut session = Session::new();
    session.create(degree).context("Failed to create tree")?;

    for value in values {
        let notice = session.insert(value)?;
        println!("{}", notice);
    }

    print!("{}", session.view()?);
    Ok(())
}

fn run_shell(degree: Option<String>) -> Result<()> {
    let mut session = Session::new();

    if let Some(degree) = degree {
        let notice = session.create(&degree).context("Failed to create tree")?;
        println!("{}\n", notice);
    }

    let mut rl = DefaultEditor::new()?;

    println!("Ordered Tree REPL");
    print_help();
    println!();

    loop {
        let readline = rl.readline("ordtree> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                if line == "quit" || line == "exit" {
                    break;
                }

                if let Err(e) = handle_command(&mut session, line) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    println!("Goodbye");
    Ok(())
}

fn print_help() {
    println!(
        "Commands: create <degree {}-{}>, insert <value>, delete <value>, view, help, quit",
        MIN_DEGREE, MAX_DEGREE
    );
}

fn handle_command(session: &mut Session, line: &str) -> Result<()> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "create" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: create <degree>");
            }
            println!("{}", session.create(rest)?);
        }

        "insert" | "ins" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: insert <value>");
            }
            println!("{}", session.insert(rest)?);
        }

        "delete" | "del" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: delete <value>");
            }
            println!("{}", session.delete(rest)?);
        }

        "view" => {
            print!("{}", session.view()?);
        }

        "help" => print_help(),

        _ => {
            anyhow::bail!("Unknown command: {}", command);
        }
    }

    Ok(())
}
