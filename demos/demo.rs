//! Walks an `OrderedList<char>` through every operation and prints the list
//! after each call.
//!
//! Run with `RUST_LOG=ordered_list=trace cargo run --example demo` to also see
//! the events emitted by the list itself.

use ordered_list::{OrderedList, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let mut list = OrderedList::new();

    for c in ['X', 'E', 'D', 'C', 'B', 'A', 'X', 'X'] {
        tracing::info!("add_front({})", c);
        list.add_front(c);
    }
    show(&list);

    tracing::info!("add_end(X)");
    list.add_end('X');
    show(&list);

    tracing::info!("remove_front()");
    list.remove_front()?;
    show(&list);

    tracing::info!("remove_end()");
    list.remove_end()?;
    show(&list);

    tracing::info!("set(5, X)");
    list.set(5, 'X')?;
    show(&list);

    tracing::info!("get(0) = {}", list.get(0)?);
    tracing::info!("get(4) = {}", list.get(4)?);

    tracing::info!("swap(0, 1)");
    list.swap(0, 1)?;
    show(&list);

    tracing::info!("swap(4, 6)");
    list.swap(4, 6)?;
    show(&list);

    tracing::info!("shift(2)");
    list.shift(2)?;
    show(&list);

    let removed = list.remove_matching(&'X')?;
    tracing::info!("remove_matching(X) removed {}", removed);
    show(&list);

    tracing::info!("shift(-1)");
    list.shift(-1)?;
    show(&list);

    tracing::info!("erase(1, 2)");
    list.erase(1, 2)?;
    show(&list);

    let letters = vec!['M', 'A', 'Z', 'E'];
    tracing::info!("insert_list(1, {:?})", letters);
    list.insert_list(1, letters)?;
    show(&list);

    tracing::info!("erase(5, 1)");
    list.erase(5, 1)?;
    show(&list);

    tracing::info!("erase(0, 1)");
    list.erase(0, 1)?;
    show(&list);

    if let Err(err) = list.shift(10) {
        tracing::warn!("shift(10) rejected: {}", err);
    }

    list.clear();
    if let Err(err) = list.remove_front() {
        tracing::warn!("remove_front() on a cleared list rejected: {}", err);
    }
    Ok(())
}

fn show(list: &OrderedList<char>) {
    println!("{}", list);
}
