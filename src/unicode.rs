// ASCII whitespace bytes: TAB, LF, VT, FF, CR, the four information
// separators FS, GS, RS, US, and SPACE.
// Note that `u8::is_ascii_whitespace` leaves out VT (0x0B).
const ASCII_WS_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[0x09] = true;
    table[0x0A] = true;
    table[0x0B] = true;
    table[0x0C] = true;
    table[0x0D] = true;
    table[0x1C] = true;
    table[0x1D] = true;
    table[0x1E] = true;
    table[0x1F] = true;
    table[0x20] = true;
    table
};

/// Whitespace as the cleaners see it: Unicode `White_Space` plus the
/// information separators U+001C..=U+001F, which `\s` matches in most
/// regex dialects but `char::is_whitespace` rejects.
#[inline(always)]
pub fn is_tts_whitespace(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_WS_TABLE[c as usize];
    }
    c.is_whitespace()
}

#[inline(always)]
pub fn is_ascii_whitespace_fast(b: u8) -> bool {
    ASCII_WS_TABLE[b as usize]
}

/// Lead bytes of every multi-byte UTF-8 sequence that may encode a
/// `White_Space` character (U+0085, U+00A0, U+1680, U+2000..U+205F, U+3000).
#[inline(always)]
pub fn could_be_unicode_ws_start(b: u8) -> bool {
    matches!(b, 0xC2 | 0xE1 | 0xE2 | 0xE3)
}

/// Double quote, the only quote character the Arabic pipeline deletes.
pub const QUOTE: u8 = b'"';
