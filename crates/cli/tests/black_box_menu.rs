use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use shoestock_cli::{Console, Session};
use shoestock_inventory::{HEADER, Store};

const SEED: &str = "Country,Code,Product,Cost,Quantity\n\
    US,AAAAAAAA,Runner,50.0,3\n\
    UK,BBBBBBBB,Walker,40.0,10\n";

struct Fixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl Fixture {
    fn seeded(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("inventory.txt");
        fs::write(&path, contents).unwrap();
        Self { _dir: dir, path }
    }

    fn missing() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("inventory.txt");
        Self { _dir: dir, path }
    }

    fn file(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

/// Drive a whole session with scripted operator input; returns the final
/// store and everything printed.
fn run_session(path: &Path, script: &str) -> (Store, String) {
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut session = Session::open(console, path).expect("session should open");
    session.run().expect("session should run");
    let (store, out) = session.into_parts();
    (store, String::from_utf8(out).unwrap())
}

#[test]
fn exit_ends_the_session() {
    let fx = Fixture::seeded(SEED);
    let (store, out) = run_session(&fx.path, "exit\n");
    assert_eq!(store.len(), 2);
    assert!(out.contains("Welcome to the Inventory"));
    assert!(out.contains("Thank you for using the Inventory."));
    assert_eq!(fx.file(), SEED, "read-only session must not rewrite the file");
}

#[test]
fn end_of_input_ends_the_session_quietly() {
    let fx = Fixture::seeded(SEED);
    let (_, out) = run_session(&fx.path, "view\n");
    assert!(out.contains("Runner"));
    assert!(!out.contains("Thank you"));
}

#[test]
fn invalid_commands_reprompt() {
    let fx = Fixture::seeded(SEED);
    let (_, out) = run_session(&fx.path, "dance\nTOTAL VALUE\nExit\n");
    assert!(out.contains("Invalid input."));
    assert!(out.contains("Please select one of the following:"));
    assert!(out.contains("R 150.0"));
    assert!(out.contains("R 400.0"));
}

#[test]
fn missing_file_starts_empty_and_reports_it() {
    let fx = Fixture::missing();
    let (store, out) = run_session(&fx.path, "view\nsale\nrestock\nexit\n");
    assert!(store.is_empty());
    assert!(out.contains("was not found"));
    assert_eq!(out.matches("There is no current stock").count(), 3);
    assert!(!fx.path.exists());
}

#[test]
fn restock_adds_to_lowest_and_rewrites_file() {
    let fx = Fixture::seeded(SEED);
    let (store, out) = run_session(&fx.path, "restock\ny\n-1\nseven\n7\nexit\n");

    assert!(out.contains("The shoe with the lowest quantity is\nCountry: US"));
    assert!(out.contains("Please enter a positive number"));
    assert!(out.contains("Please enter a number."));
    assert_eq!(store.find_by_code("AAAAAAAA").unwrap().quantity(), 10);
    assert_eq!(
        fx.file(),
        "Country,Code,Product,Cost,Quantity\n\
         US,AAAAAAAA,Runner,50.0,10\n\
         UK,BBBBBBBB,Walker,40.0,10\n"
    );
}

#[test]
fn restock_overflow_is_reported_and_session_continues() {
    let seed = "Country,Code,Product,Cost,Quantity\n\
        US,AAAAAAAA,Runner,1.0,18446744073709551614\n";
    let fx = Fixture::seeded(seed);
    let (store, out) = run_session(&fx.path, "restock\ny\n5\nview\nexit\n");

    assert!(out.contains("Could not restock: invariant violated: quantity of AAAAAAAA would overflow"));
    assert!(out.contains("18446744073709551614"));
    assert!(out.contains("Thank you for using the Inventory."));
    assert_eq!(store.find_by_code("AAAAAAAA").unwrap().quantity(), u64::MAX - 1);
    assert_eq!(fx.file(), seed);
}

#[test]
fn declining_restock_changes_nothing() {
    let fx = Fixture::seeded(SEED);
    let (store, _) = run_session(&fx.path, "restock\nn\nexit\n");
    assert_eq!(store.find_by_code("AAAAAAAA").unwrap().quantity(), 3);
    assert_eq!(fx.file(), SEED);
}

#[test]
fn capture_reprompts_until_valid_then_persists() {
    let fx = Fixture::seeded(SEED);
    let script = "capture\n\
        Kenya 1\n\
        Kenya\n\
        aaaaaaaa\n\
        abc\n\
        ke000001\n\
        \n\
        Trail\n\
        -5\n\
        75.5\n\
        2.5\n\
        4\n\
        exit\n";
    let (store, out) = run_session(&fx.path, script);

    assert!(out.contains("Please enter letters only."));
    assert!(out.contains("This product code exists. Please enter a unique code"));
    assert!(out.contains("This code is too short\nPlease enter an 8 character code."));
    assert!(out.contains("This field cannot be blank."));
    assert!(out.contains("Please enter a positive number"));
    assert!(out.contains("Please enter a number."));

    assert_eq!(store.len(), 3);
    let captured = store.find_by_code("KE000001").unwrap();
    assert_eq!(captured.code().as_str(), "KE000001");
    assert_eq!(captured.quantity(), 4);
    assert!(fx.file().ends_with("Kenya,KE000001,Trail,75.5,4\n"));
}

#[test]
fn capture_into_missing_file_creates_it() {
    let fx = Fixture::missing();
    let script = "capture\nUS\nzz000001\nRunner\n10\n1\nexit\n";
    run_session(&fx.path, script);
    assert_eq!(fx.file(), format!("{HEADER}\nUS,ZZ000001,Runner,10.0,1\n"));
}

#[test]
fn search_is_case_insensitive_and_offers_retry() {
    let fx = Fixture::seeded(SEED);
    let (_, out) = run_session(&fx.path, "search\nzzzzzzzz\ny\nbbbbbbbb\nexit\n");
    assert!(out.contains("The shoe was not found"));
    assert!(out.contains("Would you like to search again? (Y/N)"));
    assert!(out.contains("Shoe details:\n\nCountry: UK\nCode: BBBBBBBB\nProduct: Walker"));
}

#[test]
fn search_miss_without_retry_returns_to_menu() {
    let fx = Fixture::seeded(SEED);
    let (_, out) = run_session(&fx.path, "search\nnope\nn\nexit\n");
    assert!(out.contains("The shoe was not found"));
    assert!(out.contains("Thank you for using the Inventory."));
}

#[test]
fn sale_names_highest_quantity_product() {
    let fx = Fixture::seeded(SEED);
    let (_, out) = run_session(&fx.path, "sale\nexit\n");
    assert!(out.contains("The shoe with the highest quantity is Walker\nThis shoe is on sale"));
}

#[test]
fn malformed_lines_are_dropped_without_message() {
    let fx = Fixture::seeded(
        "Country,Code,Product,Cost,Quantity\n\
         US,AAAAAAAA,Runner,50.0\n\
         UK,BBBBBBBB,Walker,40.0,10\n",
    );
    let (store, out) = run_session(&fx.path, "exit\n");
    assert_eq!(store.len(), 1);
    assert!(!out.contains("Runner"));
}

#[test]
fn corrupt_number_fails_to_open() {
    let fx = Fixture::seeded("h\nUS,AAAAAAAA,Runner,lots,3\n");
    let console = Console::new(Cursor::new(Vec::new()), Vec::new());
    let err = Session::open(console, &fx.path).err().expect("open should fail");
    assert!(err.to_string().contains("invalid cost"));
}
