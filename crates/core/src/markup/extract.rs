//! Reader-visible text of an HTML document.

use alloc::string::String;

use super::entities::decode_into;
use super::tokenizer::{StartTag, Token, Tokenizer};
use crate::text::{is_blank, is_separator};

/// Elements that may appear before the body without starting it.
const HEAD_ELEMENTS: [&str; 12] = [
    "html", "head", "base", "basefont", "bgsound", "link", "meta", "title", "noscript", "noframes", "style", "script",
];

/// Head elements whose content is not reader-visible. With scripting off,
/// `noscript` content is parsed as markup and any body content starts the body.
const HIDDEN_IN_HEAD: [&str; 1] = ["title"];

/// Raw-text elements whose content is displayed.
const VISIBLE_RAW_TEXT: [&str; 1] = ["xmp"];

const BLOCK_ELEMENTS: [&str; 38] = [
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "details", "dialog", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "summary", "table", "td", "th", "tr", "ul",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Insert a line break at block element boundaries so adjacent blocks
    /// do not glue their words together.
    pub separate_blocks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BeforeBody,
    InBody,
}

/// Element whose subtree is being skipped, with its nesting depth.
struct Hidden<'a> {
    element: &'a str,
    depth: usize,
}

fn contains(list: &[&str], name: &str) -> bool {
    list.iter().any(|e| e.eq_ignore_ascii_case(name))
}

/// Extracts the text a reader would see, with default options.
#[must_use]
pub fn extract_text(document: &str) -> String {
    extract_text_with(document, ExtractOptions::default())
}

/// Extracts the visible body text of `document`.
///
/// Text nodes are concatenated in document order with their own whitespace.
/// Head content, `script`/`style`/`template` content, comments and
/// declarations are dropped. Markup that does not parse is degraded to
/// best-effort text, never an error.
#[must_use]
pub fn extract_text_with(document: &str, options: ExtractOptions) -> String {
    let mut out = String::with_capacity(document.len() / 2);
    let mut phase = Phase::BeforeBody;
    let mut hidden: Option<Hidden<'_>> = None;

    for token in Tokenizer::new(document) {
        match token {
            Token::StartTag(tag) => {
                if let Some(h) = hidden.as_mut() {
                    if tag.is(h.element) {
                        h.depth += 1;
                    }
                    continue;
                }
                if let Some(h) = start_hidden(&tag, phase) {
                    hidden = Some(h);
                    continue;
                }
                if phase == Phase::BeforeBody {
                    if contains(&HEAD_ELEMENTS, tag.name) {
                        continue;
                    }
                    phase = Phase::InBody;
                }
                if options.separate_blocks && contains(&BLOCK_ELEMENTS, tag.name) {
                    push_break(&mut out);
                }
            }
            Token::EndTag(name) => {
                if let Some(h) = hidden.as_mut() {
                    if h.element.eq_ignore_ascii_case(name) {
                        h.depth -= 1;
                        if h.depth == 0 {
                            hidden = None;
                        }
                    }
                    continue;
                }
                if options.separate_blocks && phase == Phase::InBody && contains(&BLOCK_ELEMENTS, name) {
                    push_break(&mut out);
                }
            }
            Token::Text(text) => {
                if hidden.is_some() {
                    continue;
                }
                let text = if phase == Phase::BeforeBody {
                    // Leading whitespace before the body belongs to the head.
                    if is_blank(text) {
                        continue;
                    }
                    phase = Phase::InBody;
                    text.trim_start_matches(is_separator)
                } else {
                    text
                };
                decode_into(&mut out, text);
            }
            Token::RawText { element, text } => {
                if hidden.is_none() && contains(&VISIBLE_RAW_TEXT, element) {
                    out.push_str(text);
                }
            }
            Token::Comment(_) | Token::Doctype(_) => {}
        }
    }

    log::trace!("extracted {} of {} bytes as visible text", out.len(), document.len());
    out
}

fn start_hidden<'a>(tag: &StartTag<'a>, phase: Phase) -> Option<Hidden<'a>> {
    let hides = tag.is("template") || (phase == Phase::BeforeBody && contains(&HIDDEN_IN_HEAD, tag.name));
    hides.then_some(Hidden { element: tag.name, depth: 1 })
}

fn push_break(out: &mut String) {
    if out.chars().next_back().is_some_and(|c| !is_separator(c)) {
        out.push('\n');
    }
}
