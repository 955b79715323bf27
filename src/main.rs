use restaurant_console::console::{Console, ConsoleError};
use restaurant_console::lifecycle::{setup_tracing, Restaurant};
use restaurant_console::store::FlatFileStore;
use std::io;
use tracing::info;

fn main() -> Result<(), ConsoleError> {
    setup_tracing();

    info!("Starting restaurant console");

    let (mut restaurant, notices) = Restaurant::open(FlatFileStore::default());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.report(&notices)?;
    console.run(&mut restaurant)?;

    info!("Restaurant console stopped");
    Ok(())
}
