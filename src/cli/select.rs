//! Select command: walk a board the way a user taps it.

use crate::cli::common::{print_json, BoardFileArgs, CliResult};
use crate::constants::RESET_TOKEN;
use clap::Args;
use serde::Serialize;

/// Select images in order, starting at the root, and print what is spoken
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    #[command(flatten)]
    file: BoardFileArgs,

    /// Images to select in order; `-` returns to the root
    #[arg(value_name = "IMAGE", required = true)]
    pub images: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SelectStep {
    image: String,
    /// Category open after this step ("" at the root)
    category: String,
    spoken: String,
}

#[derive(Debug, Serialize)]
struct SelectResponse<'a> {
    steps: &'a [SelectStep],
    /// Images shown after the last step
    showing: &'a [String],
}

impl SelectArgs {
    /// Execute the select command
    ///
    /// Stops at the first image that is not shown, after printing the steps
    /// that succeeded.
    pub fn execute(&self) -> CliResult<()> {
        let (mut board, _) = self.file.load_for_reading()?;
        let mut steps = Vec::with_capacity(self.images.len());

        for image in &self.images {
            let spoken = if image == RESET_TOKEN {
                board.reset();
                String::new()
            } else {
                match board.select(image) {
                    Ok(spoken) => spoken,
                    Err(e) => {
                        self.report(&steps, &board.image_locs())?;
                        return Err(e.into());
                    }
                }
            };

            steps.push(SelectStep {
                image: image.clone(),
                category: board.category_name().to_string(),
                spoken,
            });
        }

        self.report(&steps, &board.image_locs())
    }

    fn report(&self, steps: &[SelectStep], showing: &[String]) -> CliResult<()> {
        if self.json {
            return print_json(&SelectResponse { steps, showing });
        }

        for step in steps.iter().filter(|s| !s.spoken.is_empty()) {
            println!("{}", step.spoken);
        }
        Ok(())
    }
}
