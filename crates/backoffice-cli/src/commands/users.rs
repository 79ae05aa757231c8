// User management commands

use anyhow::{bail, Result};
use clap::Subcommand;

use backoffice_client::ApiClient;
use backoffice_contracts::User;
use backoffice_core::form::UserForm;
use backoffice_core::remote::RemoteUsers;
use backoffice_core::screens::UserScreen;
use backoffice_core::{ModalState, NumericRange, TextSearch};

use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users
    List {
        /// Free-text search on email and name
        #[arg(long, short)]
        search: Option<String>,

        /// Inclusive balance range
        #[arg(long)]
        min_balance: Option<f64>,
        #[arg(long)]
        max_balance: Option<f64>,
    },

    /// Show one user with their assigned events
    Get { user_id: i64 },

    /// Add a user
    Add {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "0")]
        balance: String,

        /// Comma-separated event ids
        #[arg(long, default_value = "")]
        event_ids: String,
    },

    /// Update a user; omitted flags keep their current values
    Update {
        user_id: i64,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        balance: Option<String>,

        /// Comma-separated event ids
        #[arg(long)]
        event_ids: Option<String>,
    },

    /// Delete a user
    Delete {
        user_id: i64,

        /// Skip the confirmation step
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(
    command: UsersCommand,
    client: ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut screen = UserScreen::new(RemoteUsers::new(client));
    screen.refresh().await?;

    match command {
        UsersCommand::List {
            search,
            min_balance,
            max_balance,
        } => {
            if let Some(search) = search {
                screen.query.search = TextSearch::new(search);
            }
            screen.query.balance = NumericRange::new(min_balance, max_balance);
            let visible = screen.visible();

            if output.is_text() {
                if visible.is_empty() {
                    println!("No users found");
                    return Ok(());
                }
                let table = Table::new(&[
                    ("ID", 8),
                    ("EMAIL", 30),
                    ("NAME", 20),
                    ("BALANCE", 10),
                    ("EVENTS", 16),
                ]);
                for user in &visible {
                    table.row(&[
                        user.user_id.to_string(),
                        user.email.clone(),
                        user.name.clone(),
                        format!("{:.2}", user.balance),
                        user.event_ids
                            .iter()
                            .map(|id| id.to_string())
                            .collect::<Vec<_>>()
                            .join(","),
                    ]);
                }
            } else {
                output.print_value(&visible);
            }
        }

        UsersCommand::Get { user_id } => {
            let user = find(&screen, user_id)?;
            screen.open_view(user).await;
            let ModalState::Viewing { entity } = screen.modal() else {
                bail!("No user with id {user_id}");
            };

            if output.is_text() {
                print_field("ID", &entity.user_id.to_string());
                print_field("Email", &entity.email);
                print_field("Name", &entity.name);
                print_field("Balance", &format!("{:.2}", entity.balance));
                if !screen.related_events().is_empty() {
                    println!();
                    println!("Assigned events:");
                    for event in screen.related_events() {
                        print_field(&event.event_id.to_string(), &event.title);
                    }
                }
            } else {
                output.print_value(entity);
            }
        }

        UsersCommand::Add {
            email,
            name,
            password,
            balance,
            event_ids,
        } => {
            screen.open_add();
            if let Some(form) = screen.form_mut() {
                *form = UserForm {
                    email,
                    name,
                    password,
                    balance,
                    event_ids,
                };
            }
            screen.submit().await?;
            if !quiet {
                println!("User added");
            }
        }

        UsersCommand::Update {
            user_id,
            email,
            name,
            password,
            balance,
            event_ids,
        } => {
            let user = find(&screen, user_id)?;
            screen.open_edit(user);
            if let Some(form) = screen.form_mut() {
                apply(&mut form.email, email);
                apply(&mut form.name, name);
                apply(&mut form.password, password);
                apply(&mut form.balance, balance);
                apply(&mut form.event_ids, event_ids);
            }
            screen.submit().await?;
            if !quiet {
                println!("User updated");
            }
        }

        UsersCommand::Delete { user_id, yes } => {
            let user = find(&screen, user_id)?;
            screen.request_delete(user).await;

            if !yes {
                if let Some(user) = screen.modal().pending_delete() {
                    print_field("User", &user.email);
                    for event in screen.related_events() {
                        print_field("Assigned", &event.title);
                    }
                    println!("Re-run with --yes to delete.");
                }
                return Ok(());
            }

            screen.confirm_delete().await?;
            if !quiet {
                println!("User deleted");
            }
        }
    }

    Ok(())
}

fn find<A>(screen: &UserScreen<A>, user_id: i64) -> Result<User>
where
    A: backoffice_core::cache::ResourceApi<User, Payload = backoffice_contracts::UserPayload>
        + backoffice_core::screens::EventDirectory,
{
    match screen.all().iter().find(|u| u.user_id == user_id) {
        Some(user) => Ok(user.clone()),
        None => bail!("No user with id {user_id}"),
    }
}

fn apply(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}
