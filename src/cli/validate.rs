//! Validation command for board files.

use crate::cli::common::{print_json, BoardFileArgs, CliError, CliResult};
use crate::parser;
use clap::Args;
use serde::Serialize;

/// Validate a board file and check that it saves back unchanged
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    categories: usize,
    items: usize,
    /// True when saving the board reproduces the file byte for byte
    round_trip: bool,
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let path = self.file.resolve()?;

        let content = std::fs::read_to_string(&path)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
        let index = match parser::parse_board_str(&content) {
            Ok(index) => index,
            Err(e) => {
                if self.json {
                    print_json(&ValidateResponse {
                        valid: false,
                        categories: 0,
                        items: 0,
                        round_trip: false,
                        warnings: Vec::new(),
                        error: Some(e.to_string()),
                    })?;
                }
                return Err(e.into());
            }
        };

        let regenerated = parser::generate_board(&index);
        let round_trip = regenerated == content;

        let mut warnings = Vec::new();
        if !round_trip {
            warnings.push(
                "Saving this board would change the file (duplicate images, items before \
                 the first category, extra spaces, or a missing final newline)"
                    .to_string(),
            );
        }
        for (image, category) in index.categories() {
            if category.is_empty() {
                warnings.push(format!("Category '{}' ({image}) has no items", category.name()));
            }
        }

        let response = ValidateResponse {
            valid: true,
            categories: index.size(),
            items: index.item_count(),
            round_trip,
            warnings,
            error: None,
        };

        if self.json {
            print_json(&response)?;
        } else {
            println!(
                "{}: {} categories, {} items",
                path.display(),
                response.categories,
                response.items
            );
            for warning in &response.warnings {
                println!("  warning: {warning}");
            }
            if response.warnings.is_empty() {
                println!("✓ Board is valid");
            }
        }

        if self.strict && !response.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
