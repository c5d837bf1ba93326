//! Category management commands for board files.
//!
//! Provides commands to list, add, and remove the top-level categories of a board.

use crate::cli::common::{print_json, BoardFileArgs, CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage the categories of a board
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List all categories of a board
    List(ListCategoriesArgs),
    /// Add a category to a board (or rename an existing one, clearing its items)
    Add(AddCategoryArgs),
    /// Remove a category and all its items from a board
    Remove(RemoveCategoryArgs),
}

/// List all categories of a board
#[derive(Debug, Clone, Args)]
pub struct ListCategoriesArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a category to a board
#[derive(Debug, Clone, Args)]
pub struct AddCategoryArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Image that opens the category (e.g. img/food/plate.png)
    #[arg(long, value_name = "IMAGE")]
    pub image: String,

    /// Category display name
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

/// Remove a category from a board
#[derive(Debug, Clone, Args)]
pub struct RemoveCategoryArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Image of the category to remove
    #[arg(long, value_name = "IMAGE")]
    pub image: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryEntry {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryEntry>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CategoryCommand::List(args) => args.execute(),
            CategoryCommand::Add(args) => args.execute(),
            CategoryCommand::Remove(args) => args.execute(),
        }
    }
}

impl ListCategoriesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (board, _) = self.file.load_for_reading()?;

        let categories: Vec<CategoryEntry> = board
            .index()
            .categories()
            .map(|(image, category)| CategoryEntry {
                image: image.to_string(),
                name: category.name().to_string(),
                items: category.len(),
            })
            .collect();

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            println!();
            for cat in response.categories {
                println!("  {:<40} {:<30} {} items", cat.image, cat.name, cat.items);
            }
        }

        Ok(())
    }
}

impl AddCategoryArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        validate_field("Image", &self.image, false)?;
        validate_field("Name", &self.name, true)?;

        let (mut board, path) = self.file.load_for_writing()?;
        let replaced = board.has_image(&self.image);

        // The board starts at the root, where adding registers a category
        board.add_item(&self.image, &self.name)?;
        board.save(&path)?;

        if replaced {
            println!("Category '{}' replaced.", self.image);
        } else {
            println!("Category '{}' added successfully.", self.image);
        }
        Ok(())
    }
}

impl RemoveCategoryArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let (mut board, path) = self.file.load_for_writing()?;

        board
            .remove_image(&self.image)
            .map_err(|_| CliError::validation(format!("Category '{}' not found", self.image)))?;
        board.save(&path)?;

        println!("Category '{}' removed successfully.", self.image);
        Ok(())
    }
}

/// Checks that a value fits on one line of the board format.
///
/// Images are a single field and may not contain spaces. Text may contain
/// single spaces but no leading/trailing whitespace, which would not survive
/// a save and reload.
pub(crate) fn validate_field(label: &str, value: &str, allow_spaces: bool) -> CliResult<()> {
    if value.is_empty() {
        return Err(CliError::validation(format!("{label} cannot be empty")));
    }
    if value.contains(['\n', '\r']) {
        return Err(CliError::validation(format!(
            "{label} cannot contain line breaks"
        )));
    }
    if !allow_spaces && value.contains(' ') {
        return Err(CliError::validation(format!(
            "{label} '{value}' cannot contain spaces"
        )));
    }
    if value.trim() != value {
        return Err(CliError::validation(format!(
            "{label} '{value}' cannot start or end with whitespace"
        )));
    }
    if !allow_spaces && value.starts_with('>') {
        return Err(CliError::validation(format!(
            "{label} '{value}' cannot start with '>'"
        )));
    }
    Ok(())
}
