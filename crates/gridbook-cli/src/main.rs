//! Gridbook CLI - drives the session command interface from the shell

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use gridbook::prelude::*;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gridbook")]
#[command(author, version, about = "Multi-sheet grid editor")]
struct Cli {
    /// Directory holding the local workbook record
    #[arg(long, default_value = ".gridbook", global = true)]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about the workbook
    Info,

    /// List all sheets
    Sheets,

    /// Add a new sheet and select it
    NewSheet {
        /// Sheet name (default: Sheet<N>)
        name: Option<String>,
    },

    /// Rename the active sheet
    RenameSheet { name: String },

    /// Delete the active sheet (the last sheet is cleared, not removed)
    DeleteSheet,

    /// Reset the active sheet to an empty default grid
    ClearSheet,

    /// Select the active sheet by index
    Select { index: usize },

    /// Set a cell on the active sheet
    Set {
        row: usize,
        col: usize,
        value: String,
    },

    /// Set the active sheet's priority (Normal, High, Low)
    Priority { value: String },

    /// Set the active sheet's comments
    Comment { text: String },

    /// Find the first active-sheet cell containing the query
    Find { query: String },

    /// Append a row to the active sheet
    AddRow,

    /// Remove the last row of the active sheet
    DelRow,

    /// Append a column to the active sheet
    AddCol,

    /// Remove the last column of the active sheet
    DelCol,

    /// Export the whole workbook as JSON
    ExportJson {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the workbook from a JSON snapshot
    ImportJson {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Export the active sheet as CSV
    ExportCsv {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the active sheet's grid from CSV
    ImportCsv {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Push sheets to the remote repository as JSON files
    Push {
        /// Push every sheet instead of just the active one
        #[arg(long)]
        all: bool,

        /// Repository owner
        #[arg(long)]
        owner: String,

        /// Repository name
        #[arg(long)]
        repo: String,

        /// Path prefix inside the repository
        #[arg(long, default_value = "")]
        path: String,

        /// Access token (falls back to GRIDBOOK_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = FileStore::new(&cli.state)
        .with_context(|| format!("Failed to open state directory '{}'", cli.state.display()))?;
    let mut session = Session::new(Arc::new(store));
    // One-shot process: there is no debounce window to wait out, so
    // mutations persist immediately instead.
    session.set_autosave(false);

    match cli.command {
        Commands::Info => show_info(&session),
        Commands::Sheets => list_sheets(&session),
        Commands::NewSheet { name } => {
            let index = session.new_sheet(name.as_deref());
            println!("Added sheet {} \"{}\"", index, session.workbook().active_sheet().name());
            persist(&session)
        }
        Commands::RenameSheet { name } => {
            session.rename_sheet(&name);
            persist(&session)
        }
        Commands::DeleteSheet => {
            session.delete_sheet();
            persist(&session)
        }
        Commands::ClearSheet => {
            session.clear_sheet();
            persist(&session)
        }
        Commands::Select { index } => {
            session.select_sheet(index)?;
            persist(&session)
        }
        Commands::Set { row, col, value } => {
            session.set_cell(row, col, value)?;
            persist(&session)
        }
        Commands::Priority { value } => {
            let priority = value.parse::<Priority>().map_err(|e| anyhow!(e))?;
            session.set_priority(priority);
            persist(&session)
        }
        Commands::Comment { text } => {
            session.set_comments(text);
            persist(&session)
        }
        Commands::Find { query } => {
            match session.find(&query) {
                Some((row, col)) => println!("{}\t{}", row, col),
                None => println!("Not found"),
            }
            Ok(())
        }
        Commands::AddRow => {
            session.add_row();
            persist(&session)
        }
        Commands::DelRow => {
            if !session.delete_row() {
                eprintln!("Sheet already has only one row");
            }
            persist(&session)
        }
        Commands::AddCol => {
            session.add_column();
            persist(&session)
        }
        Commands::DelCol => {
            if !session.delete_column() {
                eprintln!("Sheet already has only one column");
            }
            persist(&session)
        }
        Commands::ExportJson { output } => {
            let bytes = session.export_json()?;
            write_output(output.as_deref(), &bytes)
        }
        Commands::ImportJson { input } => {
            let bytes = read_input(input.as_deref())?;
            session
                .import_json(&bytes)
                .context("Invalid workbook snapshot")?;
            persist(&session)
        }
        Commands::ExportCsv { output } => {
            let csv = session.export_csv()?;
            write_output(output.as_deref(), csv.as_bytes())
        }
        Commands::ImportCsv { input } => {
            let bytes = read_input(input.as_deref())?;
            let text = String::from_utf8(bytes).context("CSV input is not valid UTF-8")?;
            session.import_csv(&text);
            persist(&session)
        }
        Commands::Push {
            all,
            owner,
            repo,
            path,
            token,
        } => push(&session, all, owner, repo, path, token),
    }
}

fn persist(session: &Session) -> Result<()> {
    let receipt = session.save_local().context("Failed to save workbook")?;
    println!("Saved (local) {}", receipt.time_string());
    Ok(())
}

fn show_info(session: &Session) -> Result<()> {
    let wb = session.workbook();
    println!("Sheets: {}", wb.sheet_count());

    for (i, sheet) in wb.sheets().enumerate() {
        let marker = if i == wb.active() { "*" } else { " " };
        println!();
        println!("{} Sheet {}: \"{}\"", marker, i, sheet.name());
        println!(
            "    Grid: {} rows x {} columns",
            sheet.row_count(),
            sheet.column_count()
        );
        println!("    Priority: {}", sheet.priority);
        if !sheet.comments.is_empty() {
            println!("    Comments: {}", sheet.comments);
        }
    }

    Ok(())
}

fn list_sheets(session: &Session) -> Result<()> {
    for (i, sheet) in session.workbook().sheets().enumerate() {
        println!("{}\t{}", i, sheet.name());
    }
    Ok(())
}

fn push(
    session: &Session,
    all: bool,
    owner: String,
    repo: String,
    path: String,
    token: Option<String>,
) -> Result<()> {
    let token = token
        .or_else(|| std::env::var("GRIDBOOK_TOKEN").ok())
        .context("Provide --token or set GRIDBOOK_TOKEN")?;

    let config = RemoteConfig {
        token,
        owner,
        repo,
        prefix: path,
        ..Default::default()
    };

    if all {
        let report = session.save_all_remote(&config)?;
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(()) => println!("Saved {}", outcome.path),
                Err(e) => eprintln!("Failed {}: {}", outcome.path, e),
            }
        }
        println!(
            "Saved all sheets (attempted): {} ok, {} failed",
            report.succeeded(),
            report.failed()
        );
    } else {
        let path = session.save_active_remote(&config)?;
        println!("Saved to remote: {}", path);
    }

    Ok(())
}

fn write_output(output: Option<&std::path::Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write '{}'", path.display())),
        None => io::stdout()
            .write_all(bytes)
            .context("Failed to write to stdout"),
    }
}

fn read_input(input: Option<&std::path::Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
