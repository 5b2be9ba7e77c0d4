// palette.rs - Fixed palette of traditional Japanese colors

use crate::color::Rgb;

pub struct PaletteEntry {
    pub color: Rgb,
    pub name: &'static str,
}

const fn entry(r: u8, g: u8, b: u8, name: &'static str) -> PaletteEntry {
    PaletteEntry { color: Rgb::new(r, g, b), name }
}

/// Index of the color selected at startup (sakura).
pub const DEFAULT_COLOR_INDEX: usize = 2;

pub const PALETTE: &[PaletteEntry] = &[
    entry(0xff, 0xff, 0xff, "Shiro"),
    entry(0x2b, 0x2b, 0x2b, "Kuro"),
    entry(0xfe, 0xf4, 0xf4, "Sakura-iro"),
    entry(0xf0, 0x91, 0x99, "Momo-iro"),
    entry(0xd7, 0x00, 0x3a, "Kurenai"),
    entry(0xb7, 0x28, 0x2e, "Akane-iro"),
    entry(0xee, 0x78, 0x00, "Daidai-iro"),
    entry(0xf3, 0x98, 0x00, "Kincha"),
    entry(0xf8, 0xb5, 0x00, "Yamabuki-iro"),
    entry(0xff, 0xd9, 0x00, "Ki-iro"),
    entry(0xe6, 0xb4, 0x22, "Kogane"),
    entry(0xc3, 0xd8, 0x25, "Wakakusa-iro"),
    entry(0x3e, 0xb3, 0x70, "Midori"),
    entry(0x00, 0xa3, 0x81, "Hanarokusho"),
    entry(0x38, 0xb4, 0x8b, "Hisui-iro"),
    entry(0x00, 0xa4, 0x97, "Aomidori"),
    entry(0x00, 0xa3, 0xaf, "Asagi-iro"),
    entry(0x2c, 0xa9, 0xe1, "Ama-iro"),
    entry(0x00, 0x95, 0xd9, "Ao"),
    entry(0x16, 0x5e, 0x83, "Ai-iro"),
    entry(0x19, 0x44, 0x8e, "Rurikon"),
    entry(0x4d, 0x5a, 0xaf, "Hana-iro"),
    entry(0x67, 0x41, 0x96, "Ayame-iro"),
    entry(0x88, 0x48, 0x98, "Murasaki"),
    entry(0x9d, 0x5b, 0x8b, "Kyo-murasaki"),
    entry(0x89, 0x5b, 0x8a, "Kodai-murasaki"),
    entry(0xcd, 0x8c, 0x5c, "Edo-cha"),
    entry(0x96, 0x50, 0x42, "Cha-iro"),
    entry(0xa6, 0xa5, 0xc4, "Fuji-nezumi"),
    entry(0x94, 0x94, 0x95, "Nezumi-iro"),
    entry(0xc8, 0xc2, 0xc6, "Kasumi-iro"),
    entry(0xd3, 0xcb, 0xc6, "Kareno-iro"),
];

pub fn default_color() -> Rgb {
    PALETTE[DEFAULT_COLOR_INDEX].color
}

/// Looks up the palette entry for a color, if it has one.
pub fn find(color: Rgb) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.color == color)
}
