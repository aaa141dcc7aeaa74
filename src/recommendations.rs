use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_POINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.\s").expect("numbered point pattern is valid")
});

/// Breaks the tutor's reply on its "1. ", "2. " markers. The text is not
/// otherwise interpreted.
pub fn split_points(text: &str) -> Vec<String> {
    NUMBERED_POINT
        .split(text)
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_numbered_list() {
        let text = "Great work this week!\n1. Finish Math Adventures.\n2. Try the robot quiz.\n3. Review fractions";
        assert_eq!(
            split_points(text),
            vec![
                "Great work this week!",
                "Finish Math Adventures.",
                "Try the robot quiz.",
                "Review fractions",
            ]
        );
    }

    #[test]
    fn drops_empty_fragments() {
        assert_eq!(split_points("1. Read 2.  3. Draw"), vec!["Read", "Draw"]);
        assert!(split_points("").is_empty());
        assert!(split_points("   \n").is_empty());
    }

    #[test]
    fn plain_text_is_one_point() {
        assert_eq!(split_points("Keep practising every day"), vec!["Keep practising every day"]);
    }
}
