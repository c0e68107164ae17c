use std::fs;
use log::info;

use crate::cli::types::Commands;
use crate::headings::extract_headings;
use crate::utils::error::{BoxResult, TocError};

/// Handle the headings command
pub fn handle_headings_command(command: &Commands) -> BoxResult<()> {
    let Commands::Headings {
        input,
        output,
        pretty,
    } = command
    else {
        return Err(TocError::Generic("unexpected command".to_string()).into());
    };

    let html = fs::read_to_string(input)
        .map_err(|e| TocError::Headings(format!("Failed to read {}: {}", input.display(), e)))?;

    let headings = extract_headings(&html)?;
    info!("Extracted {} headings from {}", headings.len(), input.display());

    let json = if *pretty {
        serde_json::to_string_pretty(&headings)?
    } else {
        serde_json::to_string(&headings)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Heading list written to {}", path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
