use nu_ansi_term::Style;
use reedline::{Highlighter, StyledText};

use crate::parser::highlight;

pub struct RHighlighter;

impl Highlighter for RHighlighter {
    fn highlight(&self, line: &str, _pos: usize) -> StyledText {
        let mut styled_text = StyledText::new();
        for (style, text) in highlight(line) {
            styled_text.push((Style::from(style), text));
        }
        styled_text
    }
}
