//! roster-run — the interactive multi-surface roster application.
//!
//! Wires the terminal surfaces to the dataset store the way the desktop
//! views observe it: every category gets a picker, a note panel and a
//! grid, all registered on the notification bus. The command loop then
//! drives the store; surfaces refresh themselves when it commits.

mod surfaces;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use clap::Parser;
use roster_core::{
    codec, Area, Category, Column, CoreConfig, DatasetStore, Draft, Enrollment, ObserverKey,
    ObserverRole, SortKey,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surfaces::{GridPanel, NotePanel, PickerPanel};

#[derive(Parser)]
#[command(name = "roster-run")]
#[command(about = "Care roster register — interactive terminal surfaces")]
struct Args {
    /// Directory holding the dataset backing files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

/// One category's worth of registered surfaces.
struct Page {
    category: Category,
    picker: Rc<PickerPanel>,
    notes: Rc<NotePanel>,
    grid: Rc<GridPanel>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let cfg = CoreConfig::new(args.data_dir);
    create_missing_files(&cfg)?;

    let store = DatasetStore::new(cfg);
    let pages: Vec<Page> = Category::ALL
        .into_iter()
        .map(|category| register_page(&store, category))
        .collect();

    // Prime every surface with the bootstrapped datasets.
    for page in &pages {
        page.picker.refresh(&store);
        page.notes.refresh(&store);
        page.grid.refresh(&store);
    }

    println!("Care roster register. Type 'help' for commands.");
    repl(&store, &pages)
}

fn register_page(store: &DatasetStore, category: Category) -> Page {
    let picker = Rc::new(PickerPanel::new(category));
    let notes = Rc::new(NotePanel::new(category));
    let grid = Rc::new(GridPanel::new(category));

    store.register_observer(
        ObserverKey::new(category, ObserverRole::Picker),
        picker.clone(),
    );
    store.register_observer(
        ObserverKey::new(category, ObserverRole::NoteEditor),
        notes.clone(),
    );
    store.register_observer(ObserverKey::new(category, ObserverRole::Grid), grid.clone());

    Page {
        category,
        picker,
        notes,
        grid,
    }
}

/// Creates any missing backing file as header-only at startup. The core
/// requires the files to exist; their existence is this surface's job.
fn create_missing_files(cfg: &CoreConfig) -> Result<(), roster_core::RosterError> {
    for category in Category::ALL {
        let path = cfg.resource_path(category);
        if !path.exists() {
            codec::write_header_only(&path)?;
            tracing::info!(category = %category, "created empty backing file");
        }
    }
    Ok(())
}

fn repl(store: &DatasetStore, pages: &[Page]) -> anyhow::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            continue;
        };

        match command {
            "quit" | "q" => return Ok(()),
            "help" => print_help(),
            _ => {
                if let Err(err) = run_command(store, pages, command, rest) {
                    eprintln!("error: {err}");
                }
            }
        }
    }
}

fn run_command(
    store: &DatasetStore,
    pages: &[Page],
    command: &str,
    rest: &[&str],
) -> anyhow::Result<()> {
    match command {
        "show" => {
            let page = page_for(pages, rest.first())?;
            println!("{}", page.category);
            print!("{}", page.grid.render());
            if let Some(selected) = page.notes.selected() {
                println!("note [{selected}]: {}", page.notes.note());
            }
        }
        "add" => {
            // add CAT IDENTITY [FIRST] [LAST] [AREA#] [Ja|Nej] [NOTE...]
            let page = page_for(pages, rest.first())?;
            let Some(identity) = rest.get(1) else {
                anyhow::bail!("usage: add CAT IDENTITY [FIRST] [LAST] [AREA#] [Ja|Nej] [NOTE]");
            };
            let area = match rest.get(4) {
                Some(raw) => {
                    let index: usize = raw.parse()?;
                    *Area::ALL
                        .get(index)
                        .ok_or_else(|| anyhow::anyhow!("area number must be 0-3"))?
                }
                None => Area::Centrum,
            };
            let enrolled = match rest.get(5) {
                Some(raw) => Enrollment::from_str(raw)?,
                None => Enrollment::Yes,
            };
            let draft = Draft {
                identity: (*identity).to_owned(),
                first_name: rest.get(2).copied().unwrap_or_default().to_owned(),
                last_name: rest.get(3).copied().unwrap_or_default().to_owned(),
                area,
                enrolled,
                note: rest.get(6..).map(|w| w.join(" ")).unwrap_or_default(),
            };
            if !store.append(page.category, draft)? {
                println!("rejected: identity must match DDDDDD-DDDD");
            }
        }
        "del" => {
            // del CAT N — deletes the N:th picker entry, like the delete view.
            let page = page_for(pages, rest.first())?;
            let Some(identity) = picker_identity(page, rest.get(1))? else {
                println!("no such picker entry");
                return Ok(());
            };
            if !store.delete(page.category, &identity)? {
                println!("no unique record {identity}; nothing changed");
            }
        }
        "note" => {
            // note CAT N [TEXT...] — updates the note of the N:th picker entry.
            let page = page_for(pages, rest.first())?;
            let Some(identity) = picker_identity(page, rest.get(1))? else {
                println!("no such picker entry");
                return Ok(());
            };
            page.notes.select(store, &identity);
            let text = rest.get(2..).map(|w| w.join(" ")).unwrap_or_default();
            if !store.edit_note(page.category, &identity, &text)? {
                println!("no unique record {identity}; nothing changed");
            }
        }
        "set" => {
            // set CAT ROW COL VALUE... — grid cell edit; this surface is
            // the originator, so its own grid is skipped by the bus.
            let page = page_for(pages, rest.first())?;
            let (Some(row), Some(col)) = (rest.get(1), rest.get(2)) else {
                anyhow::bail!("usage: set CAT ROW COL VALUE");
            };
            let row: usize = row.parse()?;
            let Some(column) = col.parse().ok().and_then(Column::from_index) else {
                println!("column must be 0-5");
                return Ok(());
            };
            let value = rest.get(3..).map(|w| w.join(" ")).unwrap_or_default();
            let committed = store.edit_cell(
                page.category,
                row,
                column,
                &value,
                Some(ObserverRole::Grid),
            )?;
            if committed {
                // The bus skipped this grid; catch it up now that the
                // user's edit is finished.
                page.grid.refresh(store);
            } else {
                println!("edit rejected; nothing changed");
            }
        }
        "sync" => {
            // sync CAT ID,ID,... — bulk reconcile against the pasted list.
            let page = page_for(pages, rest.first())?;
            let list = rest.get(1..).map(|w| w.join(" ")).unwrap_or_default();
            match store.reconcile(page.category, &list)? {
                Some(outcome) => println!("{outcome}"),
                None => println!("identity list rejected; nothing changed"),
            }
        }
        "sort" => {
            // sort CAT first|last|area|enrolled
            let page = page_for(pages, rest.first())?;
            let Some(key) = rest.get(1).copied().and_then(SortKey::parse) else {
                println!("sort key must be first, last, area or enrolled");
                return Ok(());
            };
            let sorted = store.sort(page.category, key)?;
            page.grid.repopulate(sorted);
            print!("{}", page.grid.render());
        }
        other => println!("unknown command '{other}'; type 'help'"),
    }
    Ok(())
}

fn page_for<'a>(pages: &'a [Page], tag: Option<&&str>) -> anyhow::Result<&'a Page> {
    let Some(tag) = tag else {
        anyhow::bail!("missing dataset category (SAMSA, TES or KORTTID)");
    };
    let category = Category::from_str(tag)?;
    pages
        .iter()
        .find(|page| page.category == category)
        .ok_or_else(|| anyhow::anyhow!("no surfaces registered for {category}"))
}

/// Resolves a picker entry number to its identity — the first eleven
/// characters of the label, exactly as the selection views recover it.
fn picker_identity(page: &Page, index: Option<&&str>) -> anyhow::Result<Option<String>> {
    let Some(raw) = index else {
        anyhow::bail!("missing picker entry number");
    };
    let index: usize = raw.parse()?;
    Ok(page
        .picker
        .items()
        .get(index)
        .map(|label| label[0..11].to_owned()))
}

fn print_help() {
    println!(
        "\
commands (CAT = SAMSA | TES | KORTTID):
  show CAT                                  render the grid and note panel
  add CAT IDENTITY [FIRST] [LAST] [AREA#] [Ja|Nej] [NOTE]
                                            add a record (AREA# 0-3)
  del CAT N                                 delete the N:th picker entry
  note CAT N [TEXT]                         replace a note (empty -> \"-\")
  set CAT ROW COL VALUE                     edit one grid cell (COL 0-5)
  sync CAT ID,ID,...                        reconcile against an identity list
  sort CAT first|last|area|enrolled         reorder the grid view
  help, quit"
    );
}
