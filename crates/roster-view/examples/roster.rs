//! Builds a four-person roster, binds it through the adapter, and prints the
//! visible window as it scrolls.
//!
//! Run with `cargo run -p roster-view --example roster`. Set `RUST_LOG` to
//! see the view's recycling decisions, e.g. `RUST_LOG=roster_view=debug`.

use std::sync::Arc;

use roster_view::model::{Person, RosterModel};
use roster_view::view::{PersonAdapter, PersonRowTemplate, RosterView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let roster = Arc::new(RosterModel::new(vec![
        Person::new("Patrick Feltes", 21),
        Person::new("Jane Doe", 43),
        Person::new("John Smith", 44),
        Person::new("Johnny Appleseed", 16),
    ]));

    roster.signals().rows_inserted.connect(|(first, last)| {
        println!("(roster grew: rows {first}..={last})");
    });

    let adapter = PersonAdapter::new(roster.clone());
    let mut view = RosterView::new(adapter, Arc::new(PersonRowTemplate)).with_viewport_rows(3);

    view.refresh()?;
    print_window(&view);

    println!("-- scroll down one row --");
    view.scroll_by(1)?;
    print_window(&view);

    roster.push(Person::new("Grace Hopper", 85));
    println!("-- scroll to the end --");
    view.scroll_to(roster.len())?;
    print_window(&view);

    Ok(())
}

fn print_window(view: &RosterView<PersonAdapter>) {
    for (row, handle) in view.bound_rows() {
        println!("{row:>3}  {:<20} {}", handle.name_text(), handle.age_text());
    }
}
