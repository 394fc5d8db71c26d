//! Character reference decoding.

use alloc::string::String;

use memchr::memchr;

const REPLACEMENT: char = '\u{fffd}';
const MAX_NAME_LEN: usize = 32;

/// Named references recognized in text. Unknown names are kept verbatim.
fn named(name: &str) -> Option<char> {
    let c = match name {
        "amp" | "AMP" => '&',
        "lt" | "LT" => '<',
        "gt" | "GT" => '>',
        "quot" | "QUOT" => '"',
        "apos" => '\'',
        "Tab" => '\t',
        "NewLine" => '\n',
        "nbsp" => '\u{a0}',
        "shy" => '\u{ad}',
        "copy" | "COPY" => '©',
        "reg" | "REG" => '®',
        "trade" => '™',
        "deg" => '°',
        "sect" => '§',
        "para" => '¶',
        "middot" => '·',
        "bull" => '•',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "sbquo" => '‚',
        "ldquo" => '“',
        "rdquo" => '”',
        "bdquo" => '„',
        "laquo" => '«',
        "raquo" => '»',
        "iexcl" => '¡',
        "iquest" => '¿',
        "ordf" => 'ª',
        "ordm" => 'º',
        "euro" => '€',
        "pound" => '£',
        "yen" => '¥',
        "cent" => '¢',
        "curren" => '¤',
        "times" => '×',
        "divide" => '÷',
        "plusmn" => '±',
        "frac12" => '½',
        "frac14" => '¼',
        "frac34" => '¾',
        "sup1" => '¹',
        "sup2" => '²',
        "sup3" => '³',
        "micro" => 'µ',
        "ensp" => '\u{2002}',
        "emsp" => '\u{2003}',
        "thinsp" => '\u{2009}',
        "zwnj" => '\u{200c}',
        "zwj" => '\u{200d}',
        "aacute" => 'á',
        "Aacute" => 'Á',
        "agrave" => 'à',
        "Agrave" => 'À',
        "acirc" => 'â',
        "Acirc" => 'Â',
        "atilde" => 'ã',
        "Atilde" => 'Ã',
        "auml" => 'ä',
        "Auml" => 'Ä',
        "aring" => 'å',
        "eacute" => 'é',
        "Eacute" => 'É',
        "egrave" => 'è',
        "Egrave" => 'È',
        "ecirc" => 'ê',
        "Ecirc" => 'Ê',
        "euml" => 'ë',
        "iacute" => 'í',
        "Iacute" => 'Í',
        "igrave" => 'ì',
        "icirc" => 'î',
        "iuml" => 'ï',
        "oacute" => 'ó',
        "Oacute" => 'Ó',
        "ograve" => 'ò',
        "ocirc" => 'ô',
        "Ocirc" => 'Ô',
        "otilde" => 'õ',
        "Otilde" => 'Õ',
        "ouml" => 'ö',
        "Ouml" => 'Ö',
        "uacute" => 'ú',
        "Uacute" => 'Ú',
        "ugrave" => 'ù',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "Uuml" => 'Ü',
        "ccedil" => 'ç',
        "Ccedil" => 'Ç',
        "ntilde" => 'ñ',
        "Ntilde" => 'Ñ',
        "szlig" => 'ß',
        "yacute" => 'ý',
        "yuml" => 'ÿ',
        _ => return None,
    };
    Some(c)
}

/// Names that also match without a trailing `;`: the four markup escapes and
/// the Latin-1 block.
fn is_legacy(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"') || ('\u{a0}'..='\u{ff}').contains(&c)
}

/// Appends `text` to `out` with character references decoded.
pub fn decode_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut copied = 0;
    let mut search = 0;

    while let Some(offset) = memchr(b'&', &bytes[search..]) {
        let amp = search + offset;
        match reference_at(text, amp) {
            Some((c, len)) => {
                out.push_str(&text[copied..amp]);
                out.push(c);
                copied = amp + len;
                search = copied;
            }
            None => search = amp + 1,
        }
    }

    out.push_str(&text[copied..]);
}

/// Decodes the reference starting at the `&` at `amp`, returning the
/// character and the number of bytes consumed.
fn reference_at(text: &str, amp: usize) -> Option<(char, usize)> {
    let rest = &text.as_bytes()[amp + 1..];
    if rest.first() == Some(&b'#') {
        return numeric(&rest[1..]).map(|(c, len)| (c, len + 2));
    }

    let name_len = rest.iter().take(MAX_NAME_LEN + 1).take_while(|b| b.is_ascii_alphanumeric()).count();
    if name_len == 0 {
        return None;
    }
    let name = &text[amp + 1..amp + 1 + name_len.min(MAX_NAME_LEN)];
    if name_len <= MAX_NAME_LEN
        && rest.get(name_len) == Some(&b';')
        && let Some(c) = named(name)
    {
        return Some((c, name_len + 2));
    }

    // Longest legacy name prefix, `;` absent.
    (2..=name.len()).rev().find_map(|len| named(&name[..len]).filter(|&c| is_legacy(c)).map(|c| (c, len + 1)))
}

/// `NN;` or `xHH;` after `&#`. The semicolon is optional.
fn numeric(rest: &[u8]) -> Option<(char, usize)> {
    let (radix, prefix) = match rest.first() {
        Some(b'x' | b'X') => (16, 1),
        _ => (10, 0),
    };

    let mut value: u32 = 0;
    let mut digits = 0;
    for &b in &rest[prefix..] {
        let Some(d) = char::from(b).to_digit(radix) else { break };
        // Anything past the Unicode range stays out of range.
        value = value.saturating_mul(radix).saturating_add(d).min(0x0011_0000);
        digits += 1;
    }
    if digits == 0 {
        return None;
    }

    let mut len = prefix + digits;
    if rest.get(len) == Some(&b';') {
        len += 1;
    }

    let c = match value {
        0 => REPLACEMENT,
        v => char::from_u32(v).unwrap_or(REPLACEMENT),
    };
    Some((c, len))
}
