use crate::layout::FontFace;
use lopdf::{Dictionary, Object, dictionary};

/// Characters WinAnsiEncoding places in 0x80..=0x9F, indexed by `byte - 0x80`.
/// Unassigned codes are `None`.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(c as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|&mapped| mapped == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Encodes `s` for a WinAnsiEncoding font. Characters the encoding cannot
/// represent, including the C1 controls U+0080..U+009F, become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut replaced = false;
    let bytes = s
        .chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                replaced = true;
                b'?'
            })
        })
        .collect();
    if replaced {
        log::warn!("Replaced characters outside WinAnsiEncoding with '?' in PDF text: {:?}", s);
    }
    bytes
}

/// Resource dictionary entry for every [`FontFace`].
pub(crate) fn font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(face.resource_name(), Object::Dictionary(font));
    }
    fonts
}
