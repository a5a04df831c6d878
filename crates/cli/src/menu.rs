//! Interactive menu loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use shoestock_core::DomainError;
use shoestock_inventory::{
    LoadStatus, ShoeRecord, Store, load, persist, validate_code, validate_cost, validate_country,
    validate_product, validate_quantity,
};

use crate::console::Console;
use crate::error::CliError;
use crate::presentation::{menu_table, stock_table, value_table};

pub const NO_STOCK: &str = "There is no current stock";

/// Menu entries and their descriptions, in display order.
pub const OPTIONS: [(&str, &str); 7] = [
    ("Capture", "Capture a new shoe"),
    ("View", "View all shoes in stock."),
    ("Restock", "View the item with the lowest quantity and restock"),
    ("Search", "Search for a shoe using the product code"),
    ("Total Value", "Calculate the total value of each item in stock."),
    ("Sale", "View the product with the highest quantity and mark it on sale"),
    ("Exit", "Exit the inventory system"),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Capture,
    View,
    Restock,
    Search,
    TotalValue,
    Sale,
    Exit,
}

impl FromStr for MenuCommand {
    type Err = ();

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "capture" => Ok(Self::Capture),
            "view" => Ok(Self::View),
            "restock" => Ok(Self::Restock),
            "search" => Ok(Self::Search),
            "total value" => Ok(Self::TotalValue),
            "sale" => Ok(Self::Sale),
            "exit" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// One operator session: the store, the file it mirrors, and the console.
pub struct Session<R, W> {
    console: Console<R, W>,
    store: Store,
    path: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, store: Store, path: impl Into<PathBuf>) -> Self {
        Self {
            console,
            store,
            path: path.into(),
        }
    }

    /// Greet the operator and load the store from `path`.
    ///
    /// A missing file is reported and the session starts empty; a corrupt one
    /// is an error.
    pub fn open(mut console: Console<R, W>, path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        console.say("\nWelcome to the Inventory\n")?;

        let outcome = load(&path)?;
        if outcome.status == LoadStatus::FileNotFound {
            console.say(format!("The file {} was not found", path.display()))?;
        }
        Ok(Self::new(console, outcome.store, path))
    }

    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.console.into_output())
    }

    /// Run the menu until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        match self.run_menu() {
            Err(CliError::InputClosed) => {
                tracing::debug!("input closed; ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu(&mut self) -> Result<(), CliError> {
        loop {
            self.console.say(menu_table(&OPTIONS))?;
            let command = self.read_command()?;
            tracing::debug!(?command, "menu command");
            if !self.dispatch(command)? {
                return Ok(());
            }
        }
    }

    fn read_command(&mut self) -> Result<MenuCommand, CliError> {
        let mut answer = self
            .console
            .read_line("\nPlease select an option from the menu above:")?;
        loop {
            if let Ok(command) = answer.parse() {
                return Ok(command);
            }
            self.console.say("Invalid input.\n")?;
            answer = self.console.read_line(
                "Please select one of the following: \
                 Capture, View, Restock, Search, Total Value, Sale, Exit:",
            )?;
        }
    }

    /// Run one menu command. Returns `false` once the session should end.
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<bool, CliError> {
        match command {
            MenuCommand::Capture => self.capture()?,
            MenuCommand::View => self.view()?,
            MenuCommand::Restock => self.restock()?,
            MenuCommand::Search => self.search()?,
            MenuCommand::TotalValue => self.total_value()?,
            MenuCommand::Sale => self.sale()?,
            MenuCommand::Exit => {
                self.console.say("Thank you for using the Inventory.")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn capture(&mut self) -> Result<(), CliError> {
        let country = self
            .console
            .prompt_until("Please enter the country:", validate_country)?;
        let store = &self.store;
        let code = self
            .console
            .prompt_until("Please enter the product code:", |s| validate_code(s, store))?;
        let product = self
            .console
            .prompt_until("Please enter the product:", validate_product)?;
        let cost = self
            .console
            .prompt_until("Please enter the cost:", validate_cost)?;
        let quantity = self
            .console
            .prompt_until("Please enter the quantity:", validate_quantity)?;

        let record = ShoeRecord::new(country, code, product, cost, quantity);
        tracing::info!(code = %record.code(), "shoe captured");
        self.console.say(format!("\nCaptured:\n{record}"))?;
        self.store.add(record);
        self.save()
    }

    fn view(&mut self) -> Result<(), CliError> {
        if self.store.is_empty() {
            return self.console.say(NO_STOCK);
        }
        self.console.say(stock_table(&self.store))
    }

    fn restock(&mut self) -> Result<(), CliError> {
        let lowest = match self.store.find_lowest_quantity() {
            Ok(record) => record.clone(),
            Err(DomainError::EmptyStore) => return self.console.say(NO_STOCK),
            Err(err) => return Err(err.into()),
        };
        self.console
            .say(format!("The shoe with the lowest quantity is\n{lowest}"))?;

        if !self
            .console
            .confirm("Would you like to update the quantity? Y/N")?
        {
            return Ok(());
        }
        let delta = self
            .console
            .prompt_until("Please enter new value:", validate_quantity)?;

        let updated = match self.store.increment_quantity(lowest.code(), delta) {
            Ok(record) => record.clone(),
            Err(DomainError::InvariantViolation(reason)) => {
                tracing::warn!(code = %lowest.code(), delta, %reason, "restock rejected");
                return self.console.say(format!("Could not restock: {reason}"));
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!(code = %updated.code(), delta, quantity = updated.quantity(), "restocked");
        self.console.say(updated)?;
        self.save()
    }

    fn search(&mut self) -> Result<(), CliError> {
        loop {
            let code = self.console.read_line("Please enter the shoe code:")?;
            if let Some(record) = self.store.find_by_code(code.trim()) {
                let shown = format!("\nShoe details:\n\n{record}");
                return self.console.say(shown);
            }
            self.console.say("The shoe was not found")?;
            if !self
                .console
                .confirm("Would you like to search again? (Y/N)")?
            {
                return Ok(());
            }
        }
    }

    fn total_value(&mut self) -> Result<(), CliError> {
        self.console.say(value_table(&self.store))
    }

    fn sale(&mut self) -> Result<(), CliError> {
        match self.store.find_highest_quantity() {
            Ok(record) => {
                let shown = format!(
                    "The shoe with the highest quantity is {}\nThis shoe is on sale",
                    record.product()
                );
                self.console.say(shown)
            }
            Err(DomainError::EmptyStore) => self.console.say(NO_STOCK),
            Err(err) => Err(err.into()),
        }
    }

    // A failed save is reported and the session keeps going: the in-memory
    // store still holds the change and the next save retries it.
    fn save(&mut self) -> Result<(), CliError> {
        if let Err(err) = persist(&self.store, &self.path) {
            tracing::error!(error = %err, "failed to save inventory");
            self.console
                .say(format!("Could not save the inventory: {err}"))?;
        }
        Ok(())
    }
}
