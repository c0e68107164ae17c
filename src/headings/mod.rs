mod parser;

pub use parser::extract_headings;
