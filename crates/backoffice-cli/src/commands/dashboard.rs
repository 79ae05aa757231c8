// Aggregate counts, one list call per resource

use anyhow::Result;
use serde::Serialize;

use backoffice_client::ApiClient;

use crate::output::{print_field, OutputFormat};

#[derive(Serialize)]
struct DashboardStats {
    categories: usize,
    events: usize,
    users: usize,
}

pub async fn run(client: &ApiClient, output: OutputFormat) -> Result<()> {
    let stats = DashboardStats {
        categories: client.list_categories().await?.len(),
        events: client.list_events().await?.len(),
        users: client.list_users().await?.len(),
    };

    if output.is_text() {
        print_field("Categories", &stats.categories.to_string());
        print_field("Events", &stats.events.to_string());
        print_field("Users", &stats.users.to_string());
    } else {
        output.print_value(&stats);
    }

    Ok(())
}
