/// Number of entries in the output colour table.
pub const COLOUR_COUNT: usize = 4;

// stored indices are masked with COLOUR_COUNT - 1
const _: () = assert!(COLOUR_COUNT.is_power_of_two());

pub const INDEX_MASK: u8 = (COLOUR_COUNT - 1) as u8;

pub type Palette = [[u8; 3]; COLOUR_COUNT];

/// Darkest to brightest.
pub const PALETTE: Palette = [
    [0, 0, 0],       // black
    [255, 0, 0],     // red
    [255, 255, 0],   // yellow
    [255, 255, 255], // white
];

/// Packed `r, g, b` triples in the layout GIF colour tables use.
pub fn palette_bytes(palette: &Palette) -> Vec<u8> {
    palette.iter().flatten().copied().collect()
}
