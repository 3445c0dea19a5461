//! Interpretation of typed answers.

/// Lowercase and trim a menu choice.
pub fn normalize_choice(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Answer to a `[Y/n]` question: anything but an explicit no accepts.
pub fn accepts(answer: Option<&str>) -> bool {
    !matches!(
        answer.map(normalize_choice).as_deref(),
        Some("n") | Some("no")
    )
}

/// Answer to a `[Yn]` question that defaults to no: only an explicit yes
/// confirms.
pub fn confirms(answer: Option<&str>) -> bool {
    matches!(
        answer.map(normalize_choice).as_deref(),
        Some("y") | Some("yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_choice() {
        assert_eq!(normalize_choice("  A \n"), "a");
        assert_eq!(normalize_choice("Q"), "q");
    }

    #[test]
    fn test_accepts_defaults_to_yes() {
        assert!(accepts(Some("")));
        assert!(accepts(Some("y")));
        assert!(accepts(Some("whatever")));
        assert!(accepts(None));
        assert!(!accepts(Some("n")));
        assert!(!accepts(Some(" N ")));
        assert!(!accepts(Some("No")));
    }

    #[test]
    fn test_confirms_defaults_to_no() {
        assert!(!confirms(Some("")));
        assert!(!confirms(Some("n")));
        assert!(!confirms(Some("sure")));
        assert!(!confirms(None));
        assert!(confirms(Some("y")));
        assert!(confirms(Some(" Y ")));
        assert!(confirms(Some("yes")));
    }
}
