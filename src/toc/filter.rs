use crate::toc::types::{Heading, TocOptions};
use crate::utils::error::BoxResult;

/// Filter headings by depth range and exclusion pattern.
///
/// Keeps headings whose depth lies within `[from_heading, to_heading]`
/// inclusive and whose text does not match the exclusion pattern, preserving
/// input order. The only fallible step is compiling a caller-supplied
/// pattern.
pub fn filter_headings(headings: &[Heading], options: &TocOptions) -> BoxResult<Vec<Heading>> {
    let exclude = options.exclude.to_regex()?;

    let filtered = headings
        .iter()
        .filter(|heading| {
            heading.depth >= options.from_heading
                && heading.depth <= options.to_heading
                && !exclude.is_match(&heading.value)
        })
        .cloned()
        .collect();

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::types::Exclude;

    fn sample_headings() -> Vec<Heading> {
        vec![
            Heading::new(1, "Intro", "#intro"),
            Heading::new(2, "Setup", "#setup"),
            Heading::new(3, "Requirements", "#requirements"),
            Heading::new(2, "Usage", "#usage"),
        ]
    }

    #[test]
    fn test_depth_range_is_inclusive() {
        let options = TocOptions {
            from_heading: 2,
            to_heading: 2,
            ..Default::default()
        };

        let filtered = filter_headings(&sample_headings(), &options).unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|h| h.depth == 2));
    }

    #[test]
    fn test_order_is_preserved() {
        let filtered = filter_headings(&sample_headings(), &TocOptions::default()).unwrap();
        assert_eq!(filtered, sample_headings());
    }

    #[test]
    fn test_empty_exclude_keeps_everything() {
        let filtered = filter_headings(&sample_headings(), &TocOptions::default()).unwrap();
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_exclude_whole_string_only() {
        let options = TocOptions {
            exclude: Exclude::Single("setup".to_string()),
            ..Default::default()
        };

        let filtered = filter_headings(&sample_headings(), &options).unwrap();
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|h| h.value != "Setup"));

        // A partial match must not exclude a heading
        let options = TocOptions {
            exclude: Exclude::Single("Set".to_string()),
            ..Default::default()
        };
        let filtered = filter_headings(&sample_headings(), &options).unwrap();
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_exclude_list_joins_with_alternation() {
        let options = TocOptions {
            exclude: Exclude::Many(vec!["Intro".to_string(), "usage".to_string()]),
            ..Default::default()
        };

        let filtered = filter_headings(&sample_headings(), &options).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value, "Setup");
        assert_eq!(filtered[1].value, "Requirements");
    }

    #[test]
    fn test_exclude_entries_keep_regex_semantics() {
        let options = TocOptions {
            exclude: Exclude::Single("Requ.*".to_string()),
            ..Default::default()
        };

        let filtered = filter_headings(&sample_headings(), &options).unwrap();
        assert!(filtered.iter().all(|h| h.value != "Requirements"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let options = TocOptions {
            exclude: Exclude::Single("(".to_string()),
            ..Default::default()
        };

        assert!(filter_headings(&sample_headings(), &options).is_err());
    }
}
