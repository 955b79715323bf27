use restaurant_console::catalog::MenuCatalog;
use restaurant_console::config::StoreConfig;
use restaurant_console::lifecycle::{Notice, Restaurant};
use restaurant_console::model::{Customer, CustomerId, MenuItem, MenuItemId};
use restaurant_console::roster::CustomerRoster;
use restaurant_console::store::{FlatFileStore, RecordError, SkippedRecord};
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> FlatFileStore {
    FlatFileStore::new(StoreConfig::in_dir(dir.path()))
}

fn triples(catalog: &MenuCatalog) -> Vec<(i32, String, f64)> {
    catalog
        .iter()
        .map(|item| (item.id.0, item.name.clone(), item.price))
        .collect()
}

/// Save then reload reproduces the same id/name/price triples.
#[test]
fn test_menu_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);

    let catalog: MenuCatalog = [
        MenuItem::new(5, "Tea", 10.0),
        MenuItem::new(3, "Coffee", 15.0),
        MenuItem::new(8, "Juice", 20.0),
        MenuItem::new(1, "Paneer Tikka", 249.99),
        MenuItem::new(-4, "Staff Meal", 0.0),
    ]
    .into_iter()
    .collect();

    store.save_menu(&catalog).expect("Failed to save menu");
    let loaded = store.load_menu().expect("Failed to load menu");

    assert!(loaded.file_found);
    assert!(loaded.skipped.is_empty());
    assert_eq!(triples(&loaded.data), triples(&catalog));
}

/// The menu file is written in ascending id order.
#[test]
fn test_menu_file_layout() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);

    let catalog: MenuCatalog = [
        MenuItem::new(5, "Tea", 10.0),
        MenuItem::new(3, "Coffee", 15.5),
        MenuItem::new(8, "Juice", 20.0),
    ]
    .into_iter()
    .collect();
    store.save_menu(&catalog).expect("Failed to save menu");

    let text = fs::read_to_string(&store.config().menu_path).expect("menu file exists");
    assert_eq!(text, "3,Coffee,15.5\n5,Tea,10\n8,Juice,20\n");
}

#[test]
fn test_customer_round_trip_keeps_roster_order() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);

    let roster: CustomerRoster = [
        Customer::new(9, "Zoya"),
        Customer::new(2, "Arjun"),
        Customer::new(9, "Zoya Again"),
    ]
    .into_iter()
    .collect();
    store.save_customers(&roster).expect("Failed to save customers");

    let text = fs::read_to_string(&store.config().customers_path).expect("file exists");
    assert_eq!(text, "9,Zoya\n2,Arjun\n9,Zoya Again\n");

    let loaded = store.load_customers().expect("Failed to load customers");
    assert_eq!(loaded.data.find_all(), roster.find_all());
}

/// Bad lines are skipped with their line numbers; the rest still loads.
#[test]
fn test_malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);
    fs::write(
        &store.config().menu_path,
        "1,Tea,10.0\nnot a record\nx,Coffee,15\n\n2,Idli,40\n3,Dosa,cheap\n4,Soup, hot,60\n2,Idli Again,45\n",
    )
    .expect("Failed to write menu");

    let loaded = store.load_menu().expect("Failed to load menu");

    assert_eq!(
        triples(&loaded.data),
        vec![(1, "Tea".to_string(), 10.0), (2, "Idli".to_string(), 40.0)]
    );
    let skipped: Vec<(usize, RecordError)> = loaded
        .skipped
        .into_iter()
        .map(|record| (record.line, record.error))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (2, RecordError::FieldCount { expected: 3, found: 1 }),
            (3, RecordError::InvalidId("x".to_string())),
            (6, RecordError::InvalidPrice("cheap".to_string())),
            (7, RecordError::FieldCount { expected: 3, found: 4 }),
        ]
    );
}

/// A name with a comma is saved as-is and cannot be read back.
#[test]
fn test_comma_in_name_is_lost_on_reload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);

    let catalog: MenuCatalog = [
        MenuItem::new(1, "Tea, Ginger", 10.0),
        MenuItem::new(2, "Coffee", 15.0),
    ]
    .into_iter()
    .collect();
    store.save_menu(&catalog).expect("Failed to save menu");

    let loaded = store.load_menu().expect("Failed to load menu");
    assert!(loaded.data.search(MenuItemId(1)).is_none());
    assert!(loaded.data.search(MenuItemId(2)).is_some());
    assert_eq!(loaded.skipped.len(), 1);
}

#[test]
fn test_missing_files_load_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);

    let menu = store.load_menu().expect("missing file is not an error");
    assert!(!menu.file_found);
    assert!(menu.data.is_empty());

    let customers = store.load_customers().expect("missing file is not an error");
    assert!(!customers.file_found);
    assert!(customers.data.is_empty());
}

/// Opening with no data files yields empty state and two notices.
#[test]
fn test_restaurant_open_without_data() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let (restaurant, notices) = Restaurant::open(store_in(&dir));

    assert!(restaurant.catalog.is_empty());
    assert!(restaurant.roster.is_empty());
    assert_eq!(notices, vec![Notice::MenuMissing, Notice::CustomersMissing]);
}

/// Shutdown writes both files; a fresh open sees the same data, without orders.
#[test]
fn test_restaurant_shutdown_and_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let (mut restaurant, _) = Restaurant::open(store_in(&dir));
    restaurant.catalog.insert(MenuItem::new(2, "Vada", 25.0));
    restaurant.catalog.insert(MenuItem::new(1, "Idli", 30.0));
    restaurant.roster.add(Customer::new(7, "Kiran"));
    restaurant
        .orders
        .add(CustomerId(7), vec![MenuItem::new(1, "Idli", 30.0)])
        .expect("order placed");
    assert!(restaurant.shutdown().is_empty());

    let (reopened, notices) = Restaurant::open(store_in(&dir));
    assert!(notices.is_empty());
    assert_eq!(triples(&reopened.catalog), triples(&restaurant.catalog));
    assert_eq!(reopened.roster.find_all(), restaurant.roster.find_all());
    assert!(reopened.orders.is_empty());
}

/// Bad customer lines surface as notices carrying the line number.
#[test]
fn test_restaurant_open_reports_skipped_lines() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);
    fs::write(&store.config().menu_path, "1,Tea,10\n").expect("Failed to write menu");
    fs::write(&store.config().customers_path, "1,Asha\nbroken\n2,Ravi\n")
        .expect("Failed to write customers");

    let (restaurant, notices) = Restaurant::open(store);

    assert_eq!(restaurant.catalog.len(), 1);
    assert_eq!(restaurant.roster.len(), 2);
    assert_eq!(notices, vec![Notice::CustomerRecordSkipped { line: 2 }]);
    assert_eq!(
        notices[0].to_string(),
        "Skipping invalid customer entry (line 2)."
    );
}

/// A line that is not UTF-8 is skipped on its own; exit keeps the other items.
#[test]
fn test_non_utf8_line_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = store_in(&dir);
    fs::write(&store.config().menu_path, b"1,Tea,10\n2,Caf\xE9,15\n3,Juice,20\n")
        .expect("Failed to write menu");

    let loaded = store.load_menu().expect("Failed to load menu");
    assert_eq!(
        loaded.skipped,
        vec![SkippedRecord {
            line: 2,
            error: RecordError::Encoding,
        }]
    );

    let (restaurant, notices) = Restaurant::open(store);
    assert_eq!(
        notices,
        vec![Notice::MenuRecordSkipped { line: 2 }, Notice::CustomersMissing]
    );
    assert_eq!(restaurant.catalog.len(), 2);

    assert!(restaurant.shutdown().is_empty());
    let text = fs::read_to_string(&restaurant.store().config().menu_path)
        .expect("menu saved on shutdown");
    assert_eq!(text, "1,Tea,10\n3,Juice,20\n");
}

/// An unwritable location is reported, not fatal.
#[test]
fn test_save_failure_is_reported() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("no-such-dir");
    let restaurant = Restaurant::new(FlatFileStore::new(StoreConfig::in_dir(missing)));

    assert_eq!(
        restaurant.shutdown(),
        vec![Notice::MenuSaveFailed, Notice::CustomersSaveFailed]
    );
}
