//! `shell`: an interactive session over one desk.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use labeldesk::request::FormField;
use labeldesk::state::{DeleteOutcome, LabelPreview};
use labeldesk::{Desk, render};
use labeldesk_flux::State;

use super::Session;

const HELP: &str = "\
Commands:
  list                   show the visible products
  search [QUERY]         filter the list (no query shows all)
  select KEY             compose the label of a product
  delete KEY             delete a product (asks first)
  size [ID]              show or change the label size
  print                  print the current label
  set FIELD VALUE        fill the entry form (inventory_number, product_name,
                         brand, model, equipment_type, serial_number)
  form                   show the entry form
  add                    submit the entry form
  refresh                reload the catalog
  help                   show this help
  quit                   leave the shell";

pub async fn run(session: &Session, output: Option<PathBuf>) -> Result<()> {
    let desk = session.open(false, output).await?;

    desk.flux().subscribe(LabelPreview::PATH, |_, value| {
        if let Some(label) = value.downcast_ref::<LabelPreview>().and_then(|p| p.label.as_ref()) {
            eprintln!("Label: {}", label.text.join(" / "));
        }
    });

    print!("{}", render::rows_table(&desk.view()));
    let stdin = io::stdin();
    loop {
        print!("labeldesk> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "list" | "ls" => print!("{}", render::rows_table(&desk.view())),
            "search" => {
                desk.search(rest).await;
                print!("{}", render::rows_table(&desk.view()));
            }
            "refresh" => {
                desk.refresh().await;
                report_load_error(&desk);
                print!("{}", render::rows_table(&desk.view()));
            }
            "select" => {
                if !desk.select(rest).await {
                    println!("No visible product {:?}.", rest);
                }
            }
            "delete" => match desk.delete(rest).await {
                None => println!("No visible product {:?}.", rest),
                Some(DeleteOutcome::Deleted) => {
                    report_load_error(&desk);
                    print!("{}", render::rows_table(&desk.view()));
                }
                Some(_) => {}
            },
            "size" if rest.is_empty() => {
                let state = desk.print_state();
                println!("Size: {} (available: {})", state.size, desk.config().ids().join(", "));
            }
            "size" => {
                desk.change_size(rest).await;
                if desk.print_state().size != rest {
                    println!("Unknown size {:?}.", rest);
                }
            }
            "print" => {
                if !desk.print_state().enabled {
                    println!("Select a product first.");
                } else {
                    desk.print().await;
                }
            }
            "set" => match rest.split_once(' ') {
                Some((field, value)) => match field.parse::<FormField>() {
                    Ok(field) => desk.set_field(field, value.trim()).await,
                    Err(e) => println!("{}", e),
                },
                None => println!("Usage: set FIELD VALUE"),
            },
            "form" => {
                let draft = desk.form().draft;
                println!("{}", serde_json::to_string_pretty(&draft)?);
            }
            "add" => {
                desk.submit().await;
                if desk.form().error.is_none() {
                    print!("{}", render::rows_table(&desk.view()));
                }
            }
            other => println!("Unknown command {:?}. Type `help`.", other),
        }
    }
    Ok(())
}

fn report_load_error(desk: &Desk) {
    if let Some(error) = desk.view().error {
        println!("Could not refresh: {}", error);
    }
}
