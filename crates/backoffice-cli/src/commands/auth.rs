// Login/logout against the local session marker
//
// Authentication is the original demo check: one hardcoded credential pair,
// a fake token in a local store, and nothing downstream enforcing either.

use anyhow::Result;
use backoffice_core::session::SessionStore;

pub fn login(store: &SessionStore, email: &str, password: &str, quiet: bool) -> Result<()> {
    let session = store.login(email, password)?;
    if !quiet {
        println!("Logged in as {}", session.email);
    }
    Ok(())
}

pub fn logout(store: &SessionStore, quiet: bool) -> Result<()> {
    store.logout()?;
    if !quiet {
        println!("Logged out");
    }
    Ok(())
}
