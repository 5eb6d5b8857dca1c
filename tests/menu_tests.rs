mod common;

use std::fs;

use crm_cli::{
    backend::Vault,
    cli::{processes, Scripted},
};
use pretty_assertions::assert_eq;

#[test]
fn full_session() {
    let export_dir = common::get_test_dir("session-exports");
    let vault = Vault::connect(common::reset_test_db("session"), &export_dir).unwrap();
    vault.add_user("admin", "hunter2").unwrap();

    let script = [
        // login
        "admin", "hunter2",
        // add two customers
        "1", "1", "555-0100", "3 orders", "1 ticket", "cash",
        "1", "1", "555-0101", "none", "none", "credit card",
        // add a product
        "1", "2", "gadget", "2024-01-01", "5",
        // a bad selection inside a submenu, then a good one
        "2", "9", "4", "credit card",
        // export customers
        "3", "1",
        // leave
        "4",
    ];
    let mut out = Vec::new();
    let logged_in = processes::session(&vault, Scripted::new(script), &mut out).unwrap();
    assert!(logged_in);

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Welcome, admin."));
    assert_eq!(out.matches("Customer added successfully.").count(), 2);
    assert!(out.contains("Product added successfully."));
    assert!(out.contains("Invalid option. Please try again."));
    assert!(out.contains(
        "customer_id: 2, contact_no: 555-0101, purchase_hist: none, ticket_hist: none, payment_type: credit card"
    ));
    assert!(!out.contains("customer_id: 1,"));
    assert!(out.contains("Customer data successfully exported to"));
    assert!(out.ends_with("Exiting...\n"));

    let csv = fs::read_to_string(export_dir.join("customer_data.csv")).unwrap();
    assert_eq!(
        csv,
        "customer_id,contact_no,purchase_hist,ticket_hist,payment_type\n\
         1,555-0100,3 orders,1 ticket,cash\n\
         2,555-0101,none,none,credit card\n"
    );
}

#[test]
fn failed_login() {
    let vault = Vault::connect(
        common::reset_test_db("failed-login"),
        common::get_test_dir("failed-login-exports"),
    )
    .unwrap();

    let mut out = Vec::new();
    let logged_in =
        processes::session(&vault, Scripted::new(["admin", "anything", "1"]), &mut out).unwrap();

    assert!(!logged_in);
    assert_eq!(String::from_utf8(out).unwrap(), "Invalid username or password.\n");
}

#[test]
fn user_added_in_menu_can_log_in() {
    let vault = Vault::connect(
        common::reset_test_db("menu-user"),
        common::get_test_dir("menu-user-exports"),
    )
    .unwrap();
    vault.add_user("admin", "hunter2").unwrap();

    let script = ["admin", "hunter2", "1", "5", "carol", "s3cret", "4"];
    processes::session(&vault, Scripted::new(script), Vec::new()).unwrap();

    assert!(vault.authenticate("carol", "s3cret").unwrap());
}

#[test]
fn read_only_export_dir_keeps_session_alive() {
    let export_dir = common::get_test_dir("read-only").join("exports");
    fs::create_dir_all(&export_dir).unwrap();
    let mut permissions = fs::metadata(&export_dir).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&export_dir, permissions).unwrap();

    let vault = Vault::connect(common::reset_test_db("read-only"), &export_dir).unwrap();
    vault.add_user("admin", "hunter2").unwrap();

    let script = [
        "admin", "hunter2",
        "1", "2", "gadget", "2024-01-01", "5",
        "3", "2",
        "2", "2",
        "4",
    ];
    let mut out = Vec::new();
    let logged_in = processes::session(&vault, Scripted::new(script), &mut out).unwrap();
    assert!(logged_in);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Product added successfully."));
    assert!(out.contains("Error: StorageError"));
    assert!(!out.contains("successfully exported"));
    assert!(out.contains("product_id: 1, product_type: gadget"));
    assert!(out.ends_with("Exiting...\n"));
    assert!(!export_dir.join("product_data.csv").exists());
}
