//! Name and biography extraction from the statblock preamble.

use super::grammar::Grammar;
use super::labels::Label;
use super::sections::Sections;
use super::text::{capitalize_every_word, normalize_glyphs, split_lines};

/// Name and biography of one statblock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBio {
    pub name: String,
    pub biography: Option<String>,
}

/// Read the preamble (everything before the Attributes label) of the raw
/// text, line breaks intact. The first line is the name; the rest is the
/// biography, with a `<br/>` after every sentence-ending line. A Conviction
/// section, label included, is put in front of the biography, separated by
/// `<hr>`.
pub fn extract(raw: &str, sections: &Sections, grammar: &Grammar) -> NameBio {
    let text = normalize_glyphs(raw);
    let preamble = grammar
        .preamble_end
        .find(&text)
        .map(|m| &text[..m.start()])
        .unwrap_or(text.as_str())
        .trim();

    let mut lines = split_lines(preamble)
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let name = lines.next().map(capitalize_every_word).unwrap_or_default();

    let bio = lines
        .map(|line| {
            if line.ends_with('.') {
                format!("{line}<br/>")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let conviction = sections.get(Label::Conviction).map(|s| s.text.as_str());
    let biography = match conviction {
        Some(conviction) => Some(format!("{conviction}<hr>{bio}")),
        None if bio.is_empty() => None,
        None => Some(bio),
    };

    NameBio { name, biography }
}
