//! Turns free-text model output into marketing lines.

/// Marker a line must start with (after trimming) to count as a bullet.
pub const BULLET_MARKER: &str = "- ";
pub const MAX_LINES: usize = 3;

/// Keeps the first [`MAX_LINES`] bullet lines, in order, prefix included.
pub fn extract_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with(BULLET_MARKER))
        .take(MAX_LINES)
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub lines: Vec<String>,
}

impl GenerationResult {
    pub fn from_output(text: &str) -> Self {
        Self {
            lines: extract_lines(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_three_bullets_in_order() {
        let text = "- Bold look.\nRandom line\n- Street ready.\n- Chic vibes.\n- Extra line";
        assert_eq!(
            extract_lines(text),
            vec!["- Bold look.", "- Street ready.", "- Chic vibes."]
        );
    }

    #[test]
    fn no_bullets_yields_empty() {
        assert!(extract_lines("no bullets here").is_empty());
        assert!(GenerationResult::from_output("").is_empty());
    }

    #[test]
    fn count_is_min_of_bullets_and_three() {
        for n in 0..=5 {
            let text = (1..=n)
                .map(|i| format!("- line {i}"))
                .collect::<Vec<_>>()
                .join("\nfiller\n");
            let lines = extract_lines(&text);
            assert_eq!(lines.len(), n.min(MAX_LINES));
            for (i, line) in lines.iter().enumerate() {
                assert_eq!(line, &format!("- line {}", i + 1));
            }
        }
    }

    #[test]
    fn dash_without_space_is_not_a_bullet() {
        let text = "-no space\n--double\n* star\n1. numbered\n- real one";
        assert_eq!(extract_lines(text), vec!["- real one"]);
    }

    #[test]
    fn indented_and_crlf_bullets_are_trimmed() {
        let text = "Here you go:\r\n  - Linen summer shirt 🌞\r\n\t- Breezy fit.\r\n";
        assert_eq!(
            extract_lines(text),
            vec!["- Linen summer shirt 🌞", "- Breezy fit."]
        );
    }

    #[test]
    fn extraction_is_repeatable() {
        let text = "- a\n- b\nnope\n- c\n- d";
        assert_eq!(extract_lines(text), extract_lines(text));
    }
}
