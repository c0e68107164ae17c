use std::fs;
use std::path::Path;
use log::{debug, info};

use crate::cli::types::Commands;
use crate::config;
use crate::headings::extract_headings;
use crate::toc::types::{Exclude, Heading, TocOptions};
use crate::toc::render_toc;
use crate::utils::error::{BoxResult, TocError};

/// Handle the generate command
pub fn handle_generate_command(command: &Commands) -> BoxResult<()> {
    let Commands::Generate {
        input,
        headings,
        output,
        config: config_file,
        from_heading,
        to_heading,
        indent_depth,
        exclude,
        disclosure,
    } = command
    else {
        return Err(TocError::Generic("unexpected command".to_string()).into());
    };

    let mut options = config::load_options(".", config_file.clone())?;
    apply_overrides(
        &mut options,
        *from_heading,
        *to_heading,
        *indent_depth,
        exclude,
        *disclosure,
    );

    let heading_list = load_headings(input.as_deref(), headings.as_deref())?;
    debug!("Loaded {} headings", heading_list.len());

    let toc = render_toc(&heading_list, &options)?;
    if toc.is_empty() {
        info!("No headings survived filtering; output is empty");
    }

    write_output(output.as_deref(), &toc)?;
    Ok(())
}

/// Apply CLI flags on top of file-loaded options
fn apply_overrides(
    options: &mut TocOptions,
    from_heading: Option<usize>,
    to_heading: Option<usize>,
    indent_depth: Option<usize>,
    exclude: &[String],
    disclosure: bool,
) {
    if let Some(from) = from_heading {
        options.from_heading = from;
    }
    if let Some(to) = to_heading {
        options.to_heading = to;
    }
    if let Some(indent) = indent_depth {
        options.indent_depth = indent;
    }
    if !exclude.is_empty() {
        options.exclude = Exclude::Many(exclude.to_vec());
    }
    if disclosure {
        options.as_disclosure = true;
    }
}

/// Load the heading list from a JSON file or by scanning an HTML document
fn load_headings(
    input: Option<&Path>,
    headings_file: Option<&Path>,
) -> BoxResult<Vec<Heading>> {
    if let Some(path) = headings_file {
        let content = fs::read_to_string(path)
            .map_err(|e| TocError::Headings(format!("Failed to read {}: {}", path.display(), e)))?;
        let list: Vec<Heading> = serde_json::from_str(&content)
            .map_err(|e| TocError::Headings(format!("Invalid heading list in {}: {}", path.display(), e)))?;
        return Ok(list);
    }

    if let Some(path) = input {
        let html = fs::read_to_string(path)
            .map_err(|e| TocError::Headings(format!("Failed to read {}: {}", path.display(), e)))?;
        return extract_headings(&html);
    }

    Err(TocError::Generic("either --input or --headings is required".to_string()).into())
}

fn write_output(output: Option<&Path>, toc: &str) -> BoxResult<()> {
    match output {
        Some(path) => {
            fs::write(path, toc)?;
            info!("Table of contents written to {}", path.display());
        }
        None => {
            print!("{}", toc);
        }
    }
    Ok(())
}
