mod generate;
mod headings;

pub use generate::handle_generate_command;
pub use headings::handle_headings_command;
