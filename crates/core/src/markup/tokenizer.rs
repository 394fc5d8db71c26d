//! Streaming HTML tokenizer.
//!
//! A small state machine over the input bytes: data, tag-open, tag-name,
//! attributes (quoted and unquoted values), self-closing, end tag, markup
//! declarations (comments, doctype, bogus comments) and the raw-text/RCDATA
//! content models. It never allocates and never fails: malformed markup is
//! either reported as text or dropped, following the recovery rules of the
//! HTML parsing algorithm where they matter for visible text.
//!
//! Tag syntax is ASCII, so every slice boundary lands on a char boundary.

use memchr::{memchr, memmem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data. Character references are still encoded.
    Text(&'a str),
    /// Content of a raw-text element (`script`, `style`, `xmp`, ...).
    /// Never contains references to decode.
    RawText { element: &'a str, text: &'a str },
    StartTag(StartTag<'a>),
    EndTag(&'a str),
    Comment(&'a str),
    Doctype(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTag<'a> {
    pub name: &'a str,
    pub self_closing: bool,
}

impl StartTag<'_> {
    /// ASCII case-insensitive name comparison.
    #[inline]
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode<'a> {
    Data,
    /// Only `</element` ends the content; no references.
    RawText(&'a str),
    /// Only `</element` ends the content; references are decoded later.
    Rcdata(&'a str),
    /// Everything up to end of input is text.
    Plaintext,
}

/// What was found at a `<`.
enum Scan<'a> {
    /// Not markup: the `<` is literal text.
    Literal,
    /// Markup that produces no token (`</>`, a tag cut off by end of input).
    Dropped(usize),
    Token(Token<'a>, usize),
}

const RAW_TEXT_ELEMENTS: [&str; 6] = ["script", "style", "xmp", "iframe", "noembed", "noframes"];
const RCDATA_ELEMENTS: [&str; 2] = ["title", "textarea"];

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    mode: Mode<'a>,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0, mode: Mode::Data }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    /// Returns `None` when the step consumed input without producing a token.
    fn data(&mut self) -> Option<Token<'a>> {
        let bytes = self.bytes();
        let start = self.pos;
        let mut search = start;

        loop {
            let Some(offset) = memchr(b'<', &bytes[search..]) else {
                self.pos = bytes.len();
                return Some(Token::Text(&self.input[start..]));
            };
            let lt = search + offset;

            match self.scan_markup(lt) {
                Scan::Literal => search = lt + 1,
                _ if lt > start => {
                    // Flush the text first; the markup is scanned again next step.
                    self.pos = lt;
                    return Some(Token::Text(&self.input[start..lt]));
                }
                Scan::Dropped(end) => {
                    self.pos = end;
                    return None;
                }
                Scan::Token(token, end) => {
                    self.pos = end;
                    if let Token::StartTag(tag) = token {
                        self.enter_content_model(tag);
                    }
                    return Some(token);
                }
            }
        }
    }

    fn enter_content_model(&mut self, tag: StartTag<'a>) {
        if RAW_TEXT_ELEMENTS.iter().any(|e| tag.is(e)) {
            self.mode = Mode::RawText(tag.name);
        } else if RCDATA_ELEMENTS.iter().any(|e| tag.is(e)) {
            self.mode = Mode::Rcdata(tag.name);
        } else if tag.is("plaintext") {
            self.mode = Mode::Plaintext;
        }
    }

    fn scan_markup(&self, lt: usize) -> Scan<'a> {
        let bytes = self.bytes();
        match bytes.get(lt + 1) {
            Some(b) if b.is_ascii_alphabetic() => self.scan_tag(lt + 1, false),
            Some(b'/') => match bytes.get(lt + 2) {
                Some(b) if b.is_ascii_alphabetic() => self.scan_tag(lt + 2, true),
                Some(b'>') => Scan::Dropped(lt + 3),
                None => Scan::Literal,
                Some(_) => self.scan_bogus_comment(lt + 2),
            },
            Some(b'!') => self.scan_declaration(lt + 2),
            Some(b'?') => self.scan_bogus_comment(lt + 1),
            _ => Scan::Literal,
        }
    }

    /// Tag name followed by attributes up to `>`. A tag cut off by end of
    /// input is dropped.
    fn scan_tag(&self, name_start: usize, end_tag: bool) -> Scan<'a> {
        let bytes = self.bytes();
        let name_end = bytes[name_start..]
            .iter()
            .position(|b| b.is_ascii_whitespace() || matches!(b, b'/' | b'>'))
            .map_or(bytes.len(), |p| name_start + p);
        let name = &self.input[name_start..name_end];

        let mut i = name_end;
        let mut self_closing = false;
        loop {
            match bytes.get(i) {
                None => return Scan::Dropped(bytes.len()),
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') => {
                    if bytes.get(i + 1) == Some(&b'>') {
                        self_closing = true;
                        i += 2;
                        break;
                    }
                    i += 1;
                }
                Some(b) if b.is_ascii_whitespace() => i += 1,
                Some(_) => match self.skip_attribute(i) {
                    Some(next) => i = next,
                    None => return Scan::Dropped(bytes.len()),
                },
            }
        }

        let token = if end_tag { Token::EndTag(name) } else { Token::StartTag(StartTag { name, self_closing }) };
        Scan::Token(token, i)
    }

    /// Skips one attribute starting at `i`. Returns `None` when input ends
    /// inside a quoted value.
    fn skip_attribute(&self, mut i: usize) -> Option<usize> {
        let bytes = self.bytes();

        // A leading `=` belongs to the name.
        i += 1;
        while let Some(b) = bytes.get(i) {
            if b.is_ascii_whitespace() || matches!(b, b'/' | b'>' | b'=') {
                break;
            }
            i += 1;
        }

        let mut j = i;
        while bytes.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }
        if bytes.get(j) != Some(&b'=') {
            return Some(i);
        }
        j += 1;
        while bytes.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }

        match bytes.get(j) {
            Some(&quote @ (b'"' | b'\'')) => memchr(quote, &bytes[j + 1..]).map(|p| j + 1 + p + 1),
            Some(_) => {
                while let Some(b) = bytes.get(j) {
                    if b.is_ascii_whitespace() || *b == b'>' {
                        break;
                    }
                    j += 1;
                }
                Some(j)
            }
            None => Some(j),
        }
    }

    /// `<!--comment-->`, `<!DOCTYPE ...>`, or anything else after `<!`.
    fn scan_declaration(&self, start: usize) -> Scan<'a> {
        let bytes = self.bytes();
        let rest = &bytes[start..];

        if rest.starts_with(b"--") {
            let body = start + 2;
            // `<!-->` and `<!--->` are complete (empty) comments.
            for abrupt in [&b">"[..], &b"->"[..]] {
                if bytes[body..].starts_with(abrupt) {
                    return Scan::Token(Token::Comment(""), body + abrupt.len());
                }
            }
            return match memmem::find(&bytes[body..], b"-->") {
                Some(p) => Scan::Token(Token::Comment(&self.input[body..body + p]), body + p + 3),
                None => Scan::Token(Token::Comment(&self.input[body..]), bytes.len()),
            };
        }

        if rest.len() >= 7 && rest[..7].eq_ignore_ascii_case(b"doctype") {
            let (content, end) = self.until_gt(start + 7);
            return Scan::Token(Token::Doctype(content.trim()), end);
        }

        self.scan_bogus_comment(start)
    }

    fn scan_bogus_comment(&self, start: usize) -> Scan<'a> {
        let (content, end) = self.until_gt(start);
        Scan::Token(Token::Comment(content), end)
    }

    /// Content up to the next `>` and the position after it.
    fn until_gt(&self, start: usize) -> (&'a str, usize) {
        let bytes = self.bytes();
        match memchr(b'>', &bytes[start..]) {
            Some(p) => (&self.input[start..start + p], start + p + 1),
            None => (&self.input[start..], bytes.len()),
        }
    }

    /// Content of a raw-text or RCDATA element, up to its end tag.
    fn raw_content(&mut self, element: &'a str, rcdata: bool) -> Option<Token<'a>> {
        let bytes = self.bytes();
        let start = self.pos;
        let mut search = start;

        let end = loop {
            match memmem::find(&bytes[search..], b"</") {
                None => break bytes.len(),
                Some(p) => {
                    let lt = search + p;
                    if self.closes(lt, element) {
                        break lt;
                    }
                    search = lt + 2;
                }
            }
        };

        self.mode = Mode::Data;
        self.pos = end;

        if end == start {
            return None;
        }
        let text = &self.input[start..end];
        Some(if rcdata { Token::Text(text) } else { Token::RawText { element, text } })
    }

    /// Whether `</element` at `lt` is an appropriate end tag.
    fn closes(&self, lt: usize, element: &str) -> bool {
        let bytes = self.bytes();
        let name_start = lt + 2;
        let name_end = name_start + element.len();
        bytes.get(name_start..name_end).is_some_and(|name| name.eq_ignore_ascii_case(element.as_bytes()))
            && bytes
                .get(name_end)
                .is_none_or(|b| b.is_ascii_whitespace() || matches!(b, b'/' | b'>'))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Every step either advances `pos` or leaves a content model, so
        // the loop terminates.
        while self.pos < self.input.len() {
            let token = match self.mode {
                Mode::Data => self.data(),
                Mode::RawText(element) => self.raw_content(element, false),
                Mode::Rcdata(element) => self.raw_content(element, true),
                Mode::Plaintext => {
                    let text = &self.input[self.pos..];
                    self.pos = self.input.len();
                    Some(Token::Text(text))
                }
            };
            if token.is_some() {
                return token;
            }
        }
        None
    }
}
