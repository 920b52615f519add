// Placeholder colours for the four 2-bit pattern indices, 0xAARRGGBB.
// No NES system palette is emulated.
pub static PLACEHOLDER_PALETTE: [u32; 4] = [0xFF00_0000, 0xFF55_5555, 0xFFAA_AAAA, 0xFFFF_FFFF];
