// Guest approval commands

use anyhow::{bail, Result};
use clap::Subcommand;

use backoffice_client::ApiClient;
use backoffice_core::guests::GuestScreen;
use backoffice_core::remote::RemoteGuests;
use backoffice_core::TextSearch;

use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum GuestsCommand {
    /// List guests pending approval
    List {
        /// Free-text search on email and name
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Approve a guest
    Accept { user_id: i64 },

    /// Decline a guest
    Decline {
        user_id: i64,

        /// Skip the confirmation step
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(
    command: GuestsCommand,
    client: ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut screen = GuestScreen::new(RemoteGuests::new(client));
    screen.refresh().await?;

    match command {
        GuestsCommand::List { search } => {
            if let Some(search) = search {
                screen.query.search = TextSearch::new(search);
            }
            let visible = screen.visible();

            if output.is_text() {
                if visible.is_empty() {
                    println!("No pending guests");
                    return Ok(());
                }
                let table = Table::new(&[("ID", 8), ("EMAIL", 30), ("NAME", 20)]);
                for guest in &visible {
                    table.row(&[
                        guest.user_id.to_string(),
                        guest.email.clone(),
                        guest.name.clone(),
                    ]);
                }
            } else {
                output.print_value(&visible);
            }
        }

        GuestsCommand::Accept { user_id } => {
            let guest = find(&screen, user_id)?;
            screen.accept(&guest).await?;
            if !quiet {
                println!("Guest accepted");
            }
        }

        GuestsCommand::Decline { user_id, yes } => {
            let guest = find(&screen, user_id)?;
            screen.request_decline(guest.clone());

            if !yes {
                print_field("Guest", &guest.email);
                println!("Re-run with --yes to decline.");
                return Ok(());
            }

            screen.confirm_decline().await?;
            if !quiet {
                println!("Guest declined");
            }
        }
    }

    Ok(())
}

fn find<A: backoffice_core::guests::GuestApi>(
    screen: &GuestScreen<A>,
    user_id: i64,
) -> Result<backoffice_contracts::Guest> {
    match screen.all().iter().find(|g| g.user_id == user_id) {
        Some(guest) => Ok(guest.clone()),
        None => bail!("No pending guest with id {user_id}"),
    }
}
