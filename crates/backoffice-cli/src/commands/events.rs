// Event management commands

use anyhow::{bail, Result};
use clap::Subcommand;

use backoffice_client::ApiClient;
use backoffice_contracts::Event;
use backoffice_core::form::EventForm;
use backoffice_core::remote::RemoteEvents;
use backoffice_core::screens::EventScreen;
use backoffice_core::{ModalState, NumericRange, TextSearch};

use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List events
    List {
        /// Free-text search on title and location
        #[arg(long, short)]
        search: Option<String>,

        /// Exact category filter
        #[arg(long)]
        category_id: Option<i64>,

        /// Substring filter on the location
        #[arg(long)]
        location: Option<String>,

        /// Inclusive price range
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,

        /// Inclusive range on the event's minimum capacity
        #[arg(long)]
        min_capacity: Option<f64>,
        #[arg(long)]
        max_capacity: Option<f64>,
    },

    /// Show one event with its assigned users
    Get { event_id: i64 },

    /// Add an event
    Add {
        #[arg(long)]
        title: String,

        /// YYYY-MM-DD
        #[arg(long)]
        start_date: String,

        /// YYYY-MM-DD
        #[arg(long)]
        end_date: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        category_id: i64,

        /// Image URL or data URL (data URLs are capped at 3MB decoded)
        #[arg(long, default_value = "")]
        image: String,

        #[arg(long, default_value = "0")]
        price: String,

        #[arg(long, default_value = "0")]
        min_capacity: String,

        #[arg(long, default_value = "0")]
        max_capacity: String,

        /// Comma-separated user ids
        #[arg(long, default_value = "")]
        user_ids: String,
    },

    /// Update an event; omitted flags keep their current values
    Update {
        event_id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        start_date: Option<String>,

        #[arg(long)]
        end_date: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        category_id: Option<i64>,

        #[arg(long)]
        image: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        min_capacity: Option<String>,

        #[arg(long)]
        max_capacity: Option<String>,

        /// Comma-separated user ids
        #[arg(long)]
        user_ids: Option<String>,
    },

    /// Delete an event
    Delete {
        event_id: i64,

        /// Skip the confirmation step
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(
    command: EventsCommand,
    client: ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut screen = EventScreen::new(RemoteEvents::new(client));
    screen.refresh().await?;

    match command {
        EventsCommand::List {
            search,
            category_id,
            location,
            min_price,
            max_price,
            min_capacity,
            max_capacity,
        } => {
            if let Some(search) = search {
                screen.query.search = TextSearch::new(search);
            }
            screen.query.category_id = category_id;
            screen.query.location = location.unwrap_or_default();
            screen.query.price = NumericRange::new(min_price, max_price);
            screen.query.min_capacity = NumericRange::new(min_capacity, max_capacity);
            let visible = screen.visible();

            if output.is_text() {
                if visible.is_empty() {
                    println!("No events found");
                    return Ok(());
                }
                let table = Table::new(&[
                    ("ID", 8),
                    ("TITLE", 24),
                    ("START", 10),
                    ("END", 10),
                    ("LOCATION", 18),
                    ("CAT", 5),
                    ("PRICE", 8),
                ]);
                for event in &visible {
                    table.row(&[
                        event.event_id.to_string(),
                        event.title.clone(),
                        event.start_date.to_string(),
                        event.end_date.to_string(),
                        event.location.clone(),
                        event.category_id.to_string(),
                        format!("{:.2}", event.price),
                    ]);
                }
            } else {
                output.print_value(&visible);
            }
        }

        EventsCommand::Get { event_id } => {
            let event = find(&screen, event_id)?;
            screen.open_view(event).await;
            let ModalState::Viewing { entity } = screen.modal() else {
                bail!("No event with id {event_id}");
            };

            if output.is_text() {
                print_event(entity);
                if !screen.related_users().is_empty() {
                    println!();
                    println!("Assigned users:");
                    for user in screen.related_users() {
                        print_field(&user.user_id.to_string(), &user.email);
                    }
                }
            } else {
                output.print_value(entity);
            }
        }

        EventsCommand::Add {
            title,
            start_date,
            end_date,
            location,
            category_id,
            image,
            price,
            min_capacity,
            max_capacity,
            user_ids,
        } => {
            screen.open_add();
            if let Some(form) = screen.form_mut() {
                *form = EventForm {
                    title,
                    start_date,
                    end_date,
                    location,
                    category_id: category_id.to_string(),
                    image,
                    price,
                    min_capacity,
                    max_capacity,
                    user_ids,
                };
            }
            screen.submit().await?;
            if !quiet {
                println!("Event added");
            }
        }

        EventsCommand::Update {
            event_id,
            title,
            start_date,
            end_date,
            location,
            category_id,
            image,
            price,
            min_capacity,
            max_capacity,
            user_ids,
        } => {
            let event = find(&screen, event_id)?;
            screen.open_edit(event);
            if let Some(form) = screen.form_mut() {
                apply(&mut form.title, title);
                apply(&mut form.start_date, start_date);
                apply(&mut form.end_date, end_date);
                apply(&mut form.location, location);
                apply(&mut form.category_id, category_id.map(|id| id.to_string()));
                apply(&mut form.image, image);
                apply(&mut form.price, price);
                apply(&mut form.min_capacity, min_capacity);
                apply(&mut form.max_capacity, max_capacity);
                apply(&mut form.user_ids, user_ids);
            }
            screen.submit().await?;
            if !quiet {
                println!("Event updated");
            }
        }

        EventsCommand::Delete { event_id, yes } => {
            let event = find(&screen, event_id)?;
            screen.request_delete(event).await;

            if !yes {
                if let Some(event) = screen.modal().pending_delete() {
                    print_field("Event", &event.title);
                    print_field("Location", &event.location);
                    for user in screen.related_users() {
                        print_field("Assigned", &user.email);
                    }
                    println!("Re-run with --yes to delete.");
                }
                return Ok(());
            }

            screen.confirm_delete().await?;
            if !quiet {
                println!("Event deleted");
            }
        }
    }

    Ok(())
}

fn find<A>(screen: &EventScreen<A>, event_id: i64) -> Result<Event>
where
    A: backoffice_core::cache::ResourceApi<Event, Payload = backoffice_contracts::EventPayload>
        + backoffice_core::screens::UserDirectory,
{
    match screen.all().iter().find(|e| e.event_id == event_id) {
        Some(event) => Ok(event.clone()),
        None => bail!("No event with id {event_id}"),
    }
}

fn apply(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn print_event(event: &Event) {
    print_field("ID", &event.event_id.to_string());
    print_field("Title", &event.title);
    print_field("Start", &event.start_date.to_string());
    print_field("End", &event.end_date.to_string());
    print_field("Location", &event.location);
    print_field("Category", &event.category_id.to_string());
    print_field("Price", &format!("{:.2}", event.price));
    print_field(
        "Capacity",
        &format!("{}-{}", event.min_capacity, event.max_capacity),
    );
}
