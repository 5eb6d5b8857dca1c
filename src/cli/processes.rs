//! These are all the functional processes run by `crm` commands.
use std::io::Write;

use color_eyre::eyre::{self, eyre};

use super::{menu::Menu, prompt::Prompt};
use crate::backend::Vault;

/// Ask for a username and password and check them against the [Vault].
///
/// Return the username on success, [None] on a failed login or if input ended.
pub fn login<P: Prompt>(vault: &Vault, prompt: &mut P) -> eyre::Result<Option<String>> {
    let Some(username) = prompt.line("Enter username: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt.secret("Enter password: ")? else {
        return Ok(None);
    };
    if vault.authenticate(&username, &password)? {
        Ok(Some(username))
    } else {
        Ok(None)
    }
}

/// Log in, then run the menu until the user exits.
///
/// Return `false` if the login failed; the menu is never shown in that case.
pub fn session<P, W>(vault: &Vault, mut prompt: P, mut out: W) -> eyre::Result<bool>
where
    P: Prompt,
    W: Write,
{
    let Some(username) = login(vault, &mut prompt)? else {
        writeln!(out, "Invalid username or password.")?;
        return Ok(false);
    };
    writeln!(out, "Welcome, {}.\n", username)?;

    Menu::new(vault, prompt, out).run()?;
    Ok(true)
}

/// Create a new user, asking for the password twice.
pub fn add_user<P, W>(vault: &Vault, username: &str, prompt: &mut P, out: &mut W) -> eyre::Result<()>
where
    P: Prompt,
    W: Write,
{
    let password = prompt
        .secret(&format!("Password for new user {}: ", username))?
        .ok_or_else(|| eyre!("No password given for new user."))?;

    // Confirm password.
    let confirm_password = prompt
        .secret(&format!("Confirm password for new user {}: ", username))?
        .ok_or_else(|| eyre!("No password given for new user."))?;
    if confirm_password != password {
        return Err(eyre!("Passwords for new user do not match."));
    }

    vault.add_user(username, &password)?;
    writeln!(out, "User added successfully.")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{super::prompt::Scripted, *};

    fn vault_with_admin() -> Vault {
        let vault = Vault::open_in_memory(".").unwrap();
        vault.add_user("admin", "hunter2").unwrap();
        vault
    }

    #[test]
    fn login_ok() {
        let vault = vault_with_admin();
        let mut prompt = Scripted::new(["admin", "hunter2"]);
        assert_eq!(login(&vault, &mut prompt).unwrap().as_deref(), Some("admin"));
    }

    #[test]
    fn login_wrong_password() {
        let vault = vault_with_admin();
        let mut prompt = Scripted::new(["admin", "hunter3"]);
        assert_eq!(login(&vault, &mut prompt).unwrap(), None);
    }

    #[test]
    fn failed_login_skips_menu() {
        let vault = vault_with_admin();
        let mut out = Vec::new();
        let logged_in = session(&vault, Scripted::new(["nobody", "x", "4"]), &mut out).unwrap();

        assert!(!logged_in);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Invalid username or password.\n"
        );
    }

    #[test]
    fn session_greets_then_exits() {
        let vault = vault_with_admin();
        let mut out = Vec::new();
        let logged_in = session(&vault, Scripted::new(["admin", "hunter2", "4"]), &mut out).unwrap();

        assert!(logged_in);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Welcome, admin.\n\n"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn add_user_confirms_password() {
        let vault = Vault::open_in_memory(".").unwrap();
        let mut out = Vec::new();

        let _ = add_user(&vault, "bob", &mut Scripted::new(["pw", "pq"]), &mut out).unwrap_err();
        assert!(!vault.authenticate("bob", "pw").unwrap());

        add_user(&vault, "bob", &mut Scripted::new(["pw", "pw"]), &mut out).unwrap();
        assert!(vault.authenticate("bob", "pw").unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "User added successfully.\n");
    }
}
