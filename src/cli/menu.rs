//! The numbered text menu shown after login.
use std::{fmt::Display, io::Write, str::FromStr};

use camino::Utf8Path;
use color_eyre::eyre;
use tracing::{debug, error};

use super::prompt::Prompt;
use crate::{
    backend::{Table, Vault},
    error::{Error, Result},
};

const MAIN_MENU: &str = "\
1. Add information
2. Print information
3. Export information
4. Exit";

const ADD_MENU: &str = "\
1. Add customer
2. Add product
3. Add support
4. Add a ticket
5. Add a user
0. Back";

const PRINT_MENU: &str = "\
1. Print customer table
2. Print product table
3. Print support table
4. Print customer data based on payment type
5. Print ticket table
0. Back";

const EXPORT_MENU: &str = "\
1. Export customer data to csv
2. Export product data to csv
3. Export support data to csv
4. Export ticket data to csv
0. Back";

const CHOOSE: &str = "\nChoose an option: ";

// Implement [FromStr] for a menu selection enum, one digit per variant.
macro_rules! impl_menu_choice {
    ($t:ident { $($key:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $t {
            type Err = Error;

            fn from_str(input: &str) -> Result<Self> {
                match input.trim() {
                    $($key => Ok(Self::$variant),)+
                    _ => Err(Error::InputError(input.to_owned())),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Add,
    Print,
    Export,
    Exit,
}
impl_menu_choice!(MainChoice { "1" => Add, "2" => Print, "3" => Export, "4" => Exit });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddChoice {
    Customer,
    Product,
    Support,
    Ticket,
    User,
    Back,
}
impl_menu_choice!(AddChoice {
    "1" => Customer,
    "2" => Product,
    "3" => Support,
    "4" => Ticket,
    "5" => User,
    "0" => Back,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrintChoice {
    Customers,
    Products,
    Support,
    CustomersByPaymentType,
    Tickets,
    Back,
}
impl_menu_choice!(PrintChoice {
    "1" => Customers,
    "2" => Products,
    "3" => Support,
    "4" => CustomersByPaymentType,
    "5" => Tickets,
    "0" => Back,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportChoice {
    Customers,
    Products,
    Support,
    Tickets,
    Back,
}
impl_menu_choice!(ExportChoice {
    "1" => Customers,
    "2" => Products,
    "3" => Support,
    "4" => Tickets,
    "0" => Back,
});

/// Whether the menu loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The menu controller. Reads selections from a [Prompt], runs them against the [Vault] and
/// writes results to `out`.
///
/// Invalid selections are reported and asked again. Storage errors from a single action are
/// reported and the loop goes on. The loop ends on "Exit" or when input runs out.
pub struct Menu<'a, P, W> {
    vault: &'a Vault,
    prompt: P,
    out: W,
}
impl<'a, P, W> Menu<'a, P, W>
where
    P: Prompt,
    W: Write,
{
    /// Create a new [Menu].
    pub fn new(vault: &'a Vault, prompt: P, out: W) -> Self {
        Self { vault, prompt, out }
    }

    /// Give back the prompt and output.
    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Run the menu loop until the user exits.
    pub fn run(&mut self) -> eyre::Result<()> {
        loop {
            let flow = match self.select::<MainChoice>(MAIN_MENU)? {
                Some(MainChoice::Add) => self.add()?,
                Some(MainChoice::Print) => self.print()?,
                Some(MainChoice::Export) => self.export()?,
                Some(MainChoice::Exit) | None => Flow::Stop,
            };
            if flow == Flow::Stop {
                break;
            }
        }
        writeln!(self.out, "Exiting...")?;
        Ok(())
    }

    fn add(&mut self) -> eyre::Result<Flow> {
        let Some(choice) = self.select::<AddChoice>(ADD_MENU)? else {
            return Ok(Flow::Stop);
        };
        match choice {
            AddChoice::Customer => {
                let Some([contact_no, purchase_hist, ticket_hist, payment_type]) = self.ask_all([
                    "Enter contact_no: ",
                    "Enter purchase_hist: ",
                    "Enter ticket_hist: ",
                    "Enter payment_type: ",
                ])?
                else {
                    return Ok(Flow::Stop);
                };
                let result =
                    self.vault
                        .add_customer(&contact_no, &purchase_hist, &ticket_hist, &payment_type);
                self.report(result.map(|_| "Customer added successfully."))?;
            }
            AddChoice::Product => {
                let Some([product_type, product_date, product_rating]) = self.ask_all([
                    "Enter product_type: ",
                    "Enter product_date: ",
                    "Enter product_rating: ",
                ])?
                else {
                    return Ok(Flow::Stop);
                };
                let result = self
                    .vault
                    .add_product(&product_type, &product_date, &product_rating);
                self.report(result.map(|_| "Product added successfully."))?;
            }
            AddChoice::Support => {
                let Some([ticket_date, ticket_status, ticket_manager]) = self.ask_all([
                    "Enter ticket_date: ",
                    "Enter ticket_status: ",
                    "Enter ticket manager name: ",
                ])?
                else {
                    return Ok(Flow::Stop);
                };
                let result = self
                    .vault
                    .add_support(&ticket_manager, &ticket_date, &ticket_status);
                self.report(result.map(|_| "Support added successfully."))?;
            }
            AddChoice::Ticket => {
                let Some([ticket_reason, ticket_date, ticket_status]) = self.ask_all([
                    "Why would you like to create a ticket? ",
                    "Enter ticket_date: ",
                    "Enter ticket_status: ",
                ])?
                else {
                    return Ok(Flow::Stop);
                };
                let result = self
                    .vault
                    .add_ticket(&ticket_reason, &ticket_date, &ticket_status);
                self.report(result.map(|_| "Ticket added successfully."))?;
            }
            AddChoice::User => {
                let Some(username) = self.prompt.line("Enter new username: ")? else {
                    return Ok(Flow::Stop);
                };
                let Some(password) = self.prompt.secret("Enter new password: ")? else {
                    return Ok(Flow::Stop);
                };
                let result = self.vault.add_user(&username, &password);
                self.report(result.map(|_| "User added successfully."))?;
            }
            AddChoice::Back => {}
        }
        Ok(Flow::Continue)
    }

    fn print(&mut self) -> eyre::Result<Flow> {
        let Some(choice) = self.select::<PrintChoice>(PRINT_MENU)? else {
            return Ok(Flow::Stop);
        };
        match choice {
            PrintChoice::Customers => {
                let rows = self.vault.list_customers();
                self.print_rows(rows, "customers")?;
            }
            PrintChoice::Products => {
                let rows = self.vault.list_products();
                self.print_rows(rows, "products")?;
            }
            PrintChoice::Support => {
                let rows = self.vault.list_support();
                self.print_rows(rows, "support records")?;
            }
            PrintChoice::CustomersByPaymentType => {
                let Some(payment_type) = self.prompt.line("Enter the payment type: ")? else {
                    return Ok(Flow::Stop);
                };
                let rows = self.vault.find_customers_by_payment_type(&payment_type);
                self.print_rows(rows, "customers")?;
            }
            PrintChoice::Tickets => {
                let rows = self.vault.list_tickets();
                self.print_rows(rows, "tickets")?;
            }
            PrintChoice::Back => {}
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> eyre::Result<Flow> {
        let Some(choice) = self.select::<ExportChoice>(EXPORT_MENU)? else {
            return Ok(Flow::Stop);
        };
        let vault = self.vault;
        match choice {
            ExportChoice::Customers => {
                let path = vault.export_path(Table::Customer);
                self.report_export("Customer", &path, vault.export_customers_csv(&path))?;
            }
            ExportChoice::Products => {
                let path = vault.export_path(Table::Product);
                self.report_export("Product", &path, vault.export_products_csv(&path))?;
            }
            ExportChoice::Support => {
                let path = vault.export_path(Table::Support);
                self.report_export("Support", &path, vault.export_support_csv(&path))?;
            }
            ExportChoice::Tickets => {
                let path = vault.export_path(Table::Ticket);
                self.report_export("Ticket", &path, vault.export_tickets_csv(&path))?;
            }
            ExportChoice::Back => {}
        }
        Ok(Flow::Continue)
    }

    // Show a menu until a valid selection is made. [None] once input has ended.
    fn select<C>(&mut self, menu: &str) -> eyre::Result<Option<C>>
    where
        C: FromStr<Err = Error>,
    {
        loop {
            writeln!(self.out, "{}", menu)?;
            let Some(input) = self.prompt.line(CHOOSE)? else {
                return Ok(None);
            };
            match input.parse::<C>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => {
                    debug!(%err, "invalid menu selection");
                    writeln!(self.out, "Invalid option. Please try again.")?;
                }
            }
        }
    }

    // Ask each question in turn. [None] if input ends before every answer is in.
    fn ask_all<const N: usize>(&mut self, messages: [&str; N]) -> eyre::Result<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (answer, message) in answers.iter_mut().zip(messages) {
            match self.prompt.line(message)? {
                Some(line) => *answer = line,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    fn print_rows<T: Display>(&mut self, rows: Result<Vec<T>>, what: &str) -> eyre::Result<()> {
        match rows {
            Ok(rows) if rows.is_empty() => writeln!(self.out, "No {} found.", what)?,
            Ok(rows) => {
                for row in rows {
                    writeln!(self.out, "{}", row)?;
                }
            }
            Err(err) => self.report_error(err)?,
        }
        Ok(())
    }

    fn report_export(&mut self, what: &str, path: &Utf8Path, result: Result<usize>) -> eyre::Result<()> {
        let result = result.map(|row_count| {
            format!("{what} data successfully exported to {path} ({row_count} rows).")
        });
        self.report(result)
    }

    fn report<M: Display>(&mut self, result: Result<M>) -> eyre::Result<()> {
        match result {
            Ok(message) => writeln!(self.out, "{}", message)?,
            Err(err) => self.report_error(err)?,
        }
        Ok(())
    }

    fn report_error(&mut self, err: Error) -> eyre::Result<()> {
        error!(%err, "menu action failed");
        writeln!(self.out, "Error: {}", err)?;
        Ok(())
    }
}
