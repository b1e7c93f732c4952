use pest::Parser;

use super::{RParser, Rule};

#[derive(Debug, Copy, Clone, Default, PartialEq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Style {
    Reserved,
    Call,
    Symbol,
    Value,
    Number,
    String,
    Operators,
    Comment,
    #[default]
    None,
}

impl Style {
    fn of(rule: Rule) -> Option<Style> {
        use Rule::*;

        match rule {
            val_true | val_false => Some(Style::Reserved),
            val_null | val_na | val_na_typed | val_inf | val_nan => Some(Style::Value),
            integer | number => Some(Style::Number),
            string => Some(Style::String),
            symbol_ident | symbol_backticked => Some(Style::Symbol),
            assign | assign_right | assign_eq | or | and | vor | vand | eq | neq | lt | gt
            | lte | gte | add | subtract | multiply | divide | modulo | special_in | colon
            | power | negate | not => Some(Style::Operators),
            _ => None,
        }
    }
}

/// Split input into styled segments
///
/// Text between tokens keeps [`Style::None`], apart from comments. Input
/// that fails to parse is returned as a single unstyled segment.
///
pub fn highlight(input: &str) -> Vec<(Style, String)> {
    let Ok(pairs) = RParser::parse(Rule::program, input) else {
        return vec![(Style::None, input.to_string())];
    };

    let mut segments = vec![];
    let mut last = 0;
    let mut calls = vec![];

    for pair in pairs.flatten() {
        // names of called symbols, as in `c(1, 2)`
        if pair.as_rule() == Rule::postfixed {
            let mut inner = pair.clone().into_inner();
            if let (Some(callee), Some(call)) = (inner.next(), inner.next()) {
                if call.as_rule() == Rule::call {
                    calls.push(callee.as_span().start());
                }
            }
        }

        let span = pair.as_span();
        let Some(mut style) = Style::of(pair.as_rule()) else {
            continue;
        };

        // nested tokens were already styled with their parent
        if span.start() < last {
            continue;
        }

        if style == Style::Symbol && calls.contains(&span.start()) {
            style = Style::Call;
        }

        gap(&mut segments, &input[last..span.start()]);
        segments.push((style, span.as_str().to_string()));
        last = span.end();
    }

    gap(&mut segments, &input[last..]);
    segments
}

fn gap(segments: &mut Vec<(Style, String)>, text: &str) {
    let mut rest = text;
    while !rest.is_empty() {
        let Some(start) = rest.find('#') else {
            segments.push((Style::None, rest.to_string()));
            break;
        };

        let end = rest[start..].find('\n').map_or(rest.len(), |i| start + i);
        if start > 0 {
            segments.push((Style::None, rest[..start].to_string()));
        }
        segments.push((Style::Comment, rest[start..end].to_string()));
        rest = &rest[end..];
    }
}

#[cfg(feature = "repl")]
impl From<Style> for nu_ansi_term::Style {
    fn from(val: Style) -> Self {
        use super::Style::*;
        use nu_ansi_term::{Color, Style};

        match val {
            Symbol => Style::new().fg(Color::White).bold(),
            Call => Style::new().fg(Color::Rgb(122, 162, 247)).italic(),
            Value => Style::new().fg(Color::Rgb(255, 158, 101)),
            Number => Style::new().fg(Color::Rgb(240, 158, 130)),
            String => Style::new().fg(Color::Rgb(158, 206, 106)),
            Comment => Style::new().fg(Color::Rgb(100, 100, 100)),
            Reserved => Style::new().fg(Color::Rgb(187, 154, 246)).italic(),
            Operators => Style::new().fg(Color::Rgb(170, 170, 190)),
            None => Style::new().fg(Color::White),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_cover_the_input() {
        let input = "x <- c(1, 'a') # note";
        let text: String = highlight(input).into_iter().map(|(_, t)| t).collect();
        assert_eq!(text, input);
    }

    #[test]
    fn tokens_are_styled() {
        let segments = highlight("x <- c(TRUE, 'a') # note");
        assert!(segments.contains(&(Style::Symbol, "x".to_string())));
        assert!(segments.contains(&(Style::Operators, "<-".to_string())));
        assert!(segments.contains(&(Style::Call, "c".to_string())));
        assert!(segments.contains(&(Style::Reserved, "TRUE".to_string())));
        assert!(segments.contains(&(Style::String, "'a'".to_string())));
        assert!(segments.contains(&(Style::Comment, "# note".to_string())));
    }

    #[test]
    fn unparsed_input_is_unstyled() {
        assert_eq!(highlight("c(1,"), vec![(Style::None, "c(1,".to_string())]);
    }
}
