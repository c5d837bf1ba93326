//! Item management commands for board files.
//!
//! Items live inside a category, so every command names the category by its
//! top-level image.

use crate::board::Board;
use crate::cli::category::validate_field;
use crate::cli::common::{print_json, BoardFileArgs, CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage the items of a category
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ItemCommand {
    /// List the items of a category
    List(ListItemsArgs),
    /// Add an item to a category (or change the text of an existing one)
    Add(AddItemArgs),
    /// Remove an item from a category
    Remove(RemoveItemArgs),
}

/// List the items of a category
#[derive(Debug, Clone, Args)]
pub struct ListItemsArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Image of the category
    #[arg(long, value_name = "IMAGE")]
    pub category: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add an item to a category
#[derive(Debug, Clone, Args)]
pub struct AddItemArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Image of the category
    #[arg(long, value_name = "IMAGE")]
    pub category: String,

    /// Image of the new item
    #[arg(long, value_name = "IMAGE")]
    pub image: String,

    /// Text spoken when the item is selected
    #[arg(long, value_name = "TEXT")]
    pub text: String,
}

/// Remove an item from a category
#[derive(Debug, Clone, Args)]
pub struct RemoveItemArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Image of the category
    #[arg(long, value_name = "IMAGE")]
    pub category: String,

    /// Image of the item to remove
    #[arg(long, value_name = "IMAGE")]
    pub image: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ItemEntry {
    image: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct ListItemsResponse {
    category: String,
    name: String,
    items: Vec<ItemEntry>,
    count: usize,
}

impl ItemArgs {
    /// Execute the item command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ItemCommand::List(args) => args.execute(),
            ItemCommand::Add(args) => args.execute(),
            ItemCommand::Remove(args) => args.execute(),
        }
    }
}

/// Opens `category` on a board positioned at the root.
fn open_category(board: &mut Board, category: &str) -> CliResult<()> {
    board
        .select(category)
        .map(|_| ())
        .map_err(|_| CliError::validation(format!("Category '{category}' not found")))
}

impl ListItemsArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (mut board, _) = self.file.load_for_reading()?;
        open_category(&mut board, &self.category)?;

        let items: Vec<ItemEntry> = board
            .current_category()
            .into_iter()
            .flat_map(|category| category.items())
            .map(|(image, text)| ItemEntry {
                image: image.to_string(),
                text: text.to_string(),
            })
            .collect();

        let response = ListItemsResponse {
            category: self.category.clone(),
            name: board.category_name().to_string(),
            count: items.len(),
            items,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No items in '{}'.", response.name);
        } else {
            println!("Items in '{}' ({}):", response.name, response.count);
            println!();
            for item in response.items {
                println!("  {:<40} {}", item.image, item.text);
            }
        }

        Ok(())
    }
}

impl AddItemArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        validate_field("Image", &self.image, false)?;
        validate_field("Text", &self.text, true)?;

        let (mut board, path) = self.file.load_for_writing()?;
        open_category(&mut board, &self.category)?;

        let replaced = board.has_image(&self.image);
        board.add_item(&self.image, &self.text)?;
        board.save(&path)?;

        if replaced {
            println!("Item '{}' updated in '{}'.", self.image, board.category_name());
        } else {
            println!("Item '{}' added to '{}'.", self.image, board.category_name());
        }
        Ok(())
    }
}

impl RemoveItemArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let (mut board, path) = self.file.load_for_writing()?;
        open_category(&mut board, &self.category)?;

        board.remove_image(&self.image).map_err(|_| {
            CliError::validation(format!(
                "Item '{}' not found in '{}'",
                self.image,
                board.category_name()
            ))
        })?;
        board.save(&path)?;

        println!("Item '{}' removed successfully.", self.image);
        Ok(())
    }
}
