// Category management commands

use anyhow::{bail, Result};
use clap::Subcommand;

use backoffice_client::ApiClient;
use backoffice_core::remote::RemoteCategories;
use backoffice_core::screens::CategoryScreen;
use backoffice_core::TextSearch;

use crate::output::{print_field, OutputFormat, Table};

#[derive(Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    List {
        /// Free-text search on the name
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Add a category
    Add {
        #[arg(long)]
        name: String,
    },

    /// Rename a category
    Update {
        category_id: i64,

        #[arg(long)]
        name: String,
    },

    /// Delete a category
    Delete {
        category_id: i64,

        /// Skip the confirmation step
        #[arg(long, short)]
        yes: bool,
    },
}

pub async fn run(
    command: CategoriesCommand,
    client: ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut screen = CategoryScreen::new(RemoteCategories::new(client));
    screen.refresh().await?;

    match command {
        CategoriesCommand::List { search } => {
            if let Some(search) = search {
                screen.query.search = TextSearch::new(search);
            }
            let visible = screen.visible();

            if output.is_text() {
                if visible.is_empty() {
                    println!("No categories found");
                    return Ok(());
                }
                let table = Table::new(&[("ID", 8), ("NAME", 30)]);
                for category in &visible {
                    table.row(&[category.category_id.to_string(), category.name.clone()]);
                }
            } else {
                output.print_value(&visible);
            }
        }

        CategoriesCommand::Add { name } => {
            screen.open_add();
            if let Some(form) = screen.form_mut() {
                form.name = name;
            }
            screen.submit().await?;
            if !quiet {
                println!("Category added");
            }
        }

        CategoriesCommand::Update { category_id, name } => {
            let Some(category) = screen.all().iter().find(|c| c.category_id == category_id) else {
                bail!("No category with id {category_id}");
            };
            screen.open_edit(category.clone());
            if let Some(form) = screen.form_mut() {
                form.name = name;
            }
            screen.submit().await?;
            if !quiet {
                println!("Category updated");
            }
        }

        CategoriesCommand::Delete { category_id, yes } => {
            let Some(category) = screen.all().iter().find(|c| c.category_id == category_id) else {
                bail!("No category with id {category_id}");
            };
            screen.request_delete(category.clone());

            if !yes {
                let pending = screen.modal().pending_delete().cloned();
                if let Some(category) = pending {
                    print_field("Category", &category.name);
                    println!("Re-run with --yes to delete. Events referencing this category are not checked.");
                }
                return Ok(());
            }

            screen.confirm_delete().await?;
            if !quiet {
                println!("Category deleted");
            }
        }
    }

    Ok(())
}
