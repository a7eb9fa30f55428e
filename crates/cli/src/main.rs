use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use roster_core::{
    codec, Area, Category, Column, CoreConfig, DatasetStore, Draft, Enrollment, SortKey,
};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Care roster register CLI")]
struct Cli {
    /// Directory holding the dataset backing files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the records of a dataset
    List {
        /// Dataset category (SAMSA, TES or KORTTID)
        category: String,
    },
    /// Add a patient record
    Add {
        /// Dataset category (SAMSA, TES or KORTTID)
        category: String,
        /// Patient number (DDDDDD-DDDD)
        identity: String,
        /// First name (stored as "-" when omitted)
        #[arg(long, default_value = "")]
        first_name: String,
        /// Last name (stored as "-" when omitted)
        #[arg(long, default_value = "")]
        last_name: String,
        /// Care area
        #[arg(long, default_value = "Centrum")]
        area: String,
        /// Enrollment marker (Ja or Nej)
        #[arg(long, default_value = "Ja")]
        enrolled: String,
        /// Note (stored as "-" when omitted)
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Delete the record with the given identity
    Delete {
        category: String,
        identity: String,
    },
    /// Replace a record's note
    Note {
        category: String,
        identity: String,
        note: String,
    },
    /// Edit one grid cell in place
    Set {
        category: String,
        /// Row position in current file order (0-based)
        row: usize,
        /// Column position in display order (0-based)
        column: usize,
        value: String,
    },
    /// Reconcile a dataset against a comma-separated identity list
    Reconcile {
        category: String,
        identities: String,
    },
    /// Show a dataset sorted by a key (first, last, area, enrolled)
    Sort {
        category: String,
        key: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cfg = CoreConfig::new(cli.data_dir);
    ensure_backing_files(&cfg)?;
    let store = DatasetStore::new(cfg);

    match cli.command {
        Commands::List { category } => {
            let category = Category::from_str(&category)?;
            let records = store.read(category)?;
            if records.is_empty() {
                println!("No records in {category}.");
            } else {
                for record in records {
                    print_record(&record);
                }
            }
        }
        Commands::Add {
            category,
            identity,
            first_name,
            last_name,
            area,
            enrolled,
            note,
        } => {
            let category = Category::from_str(&category)?;
            let draft = Draft {
                identity,
                first_name,
                last_name,
                area: Area::from_str(&area)?,
                enrolled: Enrollment::from_str(&enrolled)?,
                note,
            };
            if store.append(category, draft)? {
                println!("Added record to {category}.");
            } else {
                eprintln!("Rejected: identity must match DDDDDD-DDDD. Nothing changed.");
            }
        }
        Commands::Delete { category, identity } => {
            let category = Category::from_str(&category)?;
            if store.delete(category, &identity)? {
                println!("Deleted {identity} from {category}.");
            } else {
                eprintln!("No unique record {identity} in {category}. Nothing changed.");
            }
        }
        Commands::Note {
            category,
            identity,
            note,
        } => {
            let category = Category::from_str(&category)?;
            if store.edit_note(category, &identity, &note)? {
                println!("Updated note for {identity}.");
            } else {
                eprintln!("No unique record {identity} in {category}. Nothing changed.");
            }
        }
        Commands::Set {
            category,
            row,
            column,
            value,
        } => {
            let category = Category::from_str(&category)?;
            let Some(column) = Column::from_index(column) else {
                eprintln!("No such column. Nothing changed.");
                return Ok(());
            };
            if store.edit_cell(category, row, column, &value, None)? {
                println!("Updated {} of row {row}.", column.header());
            } else {
                eprintln!("Edit rejected. Nothing changed.");
            }
        }
        Commands::Reconcile {
            category,
            identities,
        } => {
            let category = Category::from_str(&category)?;
            match store.reconcile(category, &identities)? {
                Some(outcome) => println!("{outcome}"),
                None => eprintln!("Identity list rejected. Nothing changed."),
            }
        }
        Commands::Sort { category, key } => {
            let category = Category::from_str(&category)?;
            let Some(key) = SortKey::parse(&key) else {
                eprintln!("Unknown sort key (use first, last, area or enrolled).");
                return Ok(());
            };
            for record in store.sort(category, key)? {
                print_record(&record);
            }
        }
    }

    Ok(())
}

/// Creates any missing backing file as header-only. File existence is the
/// surfaces' responsibility; the core requires the files to be present.
fn ensure_backing_files(cfg: &CoreConfig) -> Result<(), roster_core::RosterError> {
    for category in Category::ALL {
        let path = cfg.resource_path(category);
        if !path.exists() {
            codec::write_header_only(&path)?;
        }
    }
    Ok(())
}

fn print_record(record: &roster_core::Record) {
    println!(
        "{}  {} {}  |  {}  |  {}  |  {}",
        record.identity,
        record.first_name,
        record.last_name,
        record.area,
        record.enrolled,
        record.note
    );
}
