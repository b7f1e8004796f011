//! Splits free-text descriptions into paragraphs and bullet lists.

const BULLET_MARKERS: &[&str] = &["- ", "* ", "• "];

#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    Paragraph(&'a str),
    Bullets(Vec<&'a str>),
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
        .filter(|rest| !rest.is_empty())
}

/// Consecutive bullet lines collapse into one list; blank lines are dropped.
pub fn description_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks: Vec<Block<'_>> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match strip_bullet(line) {
            Some(item) => match blocks.last_mut() {
                Some(Block::Bullets(items)) => items.push(item),
                _ => blocks.push(Block::Bullets(vec![item])),
            },
            None => blocks.push(Block::Paragraph(line)),
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_blocks() {
        assert!(description_blocks("").is_empty());
        assert!(description_blocks("\n  \n").is_empty());
    }

    #[test]
    fn test_plain_lines_are_paragraphs() {
        assert_eq!(
            description_blocks("Led the team.\n\nShipped v2."),
            vec![Block::Paragraph("Led the team."), Block::Paragraph("Shipped v2.")]
        );
    }

    #[test]
    fn test_consecutive_bullets_group() {
        let blocks = description_blocks("Highlights:\n- Cut costs 20%\n* Hired 4\n• Won award\nThanks");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("Highlights:"),
                Block::Bullets(vec!["Cut costs 20%", "Hired 4", "Won award"]),
                Block::Paragraph("Thanks"),
            ]
        );
    }

    #[test]
    fn test_bare_marker_is_a_paragraph() {
        assert_eq!(description_blocks("-"), vec![Block::Paragraph("-")]);
    }

    #[test]
    fn test_hyphenated_word_is_not_a_bullet() {
        assert_eq!(
            description_blocks("-based design"),
            vec![Block::Paragraph("-based design")]
        );
    }
}
