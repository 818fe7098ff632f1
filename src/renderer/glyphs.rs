//! Braille glyph data for sub-character rendering.
//!
//! Each terminal cell covers a 2x4 block of canvas pixels. The Unicode
//! braille block (U+2800..U+28FF) assigns one codepoint per combination of
//! the 8 dot positions:
//!
//! ```text
//! Dot 1 (0x01) | Dot 4 (0x08)
//! Dot 2 (0x02) | Dot 5 (0x10)
//! Dot 3 (0x04) | Dot 6 (0x20)
//! Dot 7 (0x40) | Dot 8 (0x80)
//! ```
//!
//! The table is kept as static data rather than computed at runtime: the
//! mask-to-codepoint mapping is a terminal compatibility contract.

/// Dot bit for the pixel at `[dy][dx]` within a cell's 2x4 block.
pub const DOT_BITS: [[u8; 2]; 4] = [
    [0x01, 0x08], // row 0: dot 1, dot 4
    [0x02, 0x10], // row 1: dot 2, dot 5
    [0x04, 0x20], // row 2: dot 3, dot 6
    [0x40, 0x80], // row 3: dot 7, dot 8
];

/// Glyph for every 8-bit dot mask, indexed directly by the mask.
pub const GLYPHS: [char; 256] = [
    '\u{2800}', '\u{2801}', '\u{2802}', '\u{2803}', '\u{2804}', '\u{2805}', '\u{2806}', '\u{2807}',
    '\u{2808}', '\u{2809}', '\u{280A}', '\u{280B}', '\u{280C}', '\u{280D}', '\u{280E}', '\u{280F}',
    '\u{2810}', '\u{2811}', '\u{2812}', '\u{2813}', '\u{2814}', '\u{2815}', '\u{2816}', '\u{2817}',
    '\u{2818}', '\u{2819}', '\u{281A}', '\u{281B}', '\u{281C}', '\u{281D}', '\u{281E}', '\u{281F}',
    '\u{2820}', '\u{2821}', '\u{2822}', '\u{2823}', '\u{2824}', '\u{2825}', '\u{2826}', '\u{2827}',
    '\u{2828}', '\u{2829}', '\u{282A}', '\u{282B}', '\u{282C}', '\u{282D}', '\u{282E}', '\u{282F}',
    '\u{2830}', '\u{2831}', '\u{2832}', '\u{2833}', '\u{2834}', '\u{2835}', '\u{2836}', '\u{2837}',
    '\u{2838}', '\u{2839}', '\u{283A}', '\u{283B}', '\u{283C}', '\u{283D}', '\u{283E}', '\u{283F}',
    '\u{2840}', '\u{2841}', '\u{2842}', '\u{2843}', '\u{2844}', '\u{2845}', '\u{2846}', '\u{2847}',
    '\u{2848}', '\u{2849}', '\u{284A}', '\u{284B}', '\u{284C}', '\u{284D}', '\u{284E}', '\u{284F}',
    '\u{2850}', '\u{2851}', '\u{2852}', '\u{2853}', '\u{2854}', '\u{2855}', '\u{2856}', '\u{2857}',
    '\u{2858}', '\u{2859}', '\u{285A}', '\u{285B}', '\u{285C}', '\u{285D}', '\u{285E}', '\u{285F}',
    '\u{2860}', '\u{2861}', '\u{2862}', '\u{2863}', '\u{2864}', '\u{2865}', '\u{2866}', '\u{2867}',
    '\u{2868}', '\u{2869}', '\u{286A}', '\u{286B}', '\u{286C}', '\u{286D}', '\u{286E}', '\u{286F}',
    '\u{2870}', '\u{2871}', '\u{2872}', '\u{2873}', '\u{2874}', '\u{2875}', '\u{2876}', '\u{2877}',
    '\u{2878}', '\u{2879}', '\u{287A}', '\u{287B}', '\u{287C}', '\u{287D}', '\u{287E}', '\u{287F}',
    '\u{2880}', '\u{2881}', '\u{2882}', '\u{2883}', '\u{2884}', '\u{2885}', '\u{2886}', '\u{2887}',
    '\u{2888}', '\u{2889}', '\u{288A}', '\u{288B}', '\u{288C}', '\u{288D}', '\u{288E}', '\u{288F}',
    '\u{2890}', '\u{2891}', '\u{2892}', '\u{2893}', '\u{2894}', '\u{2895}', '\u{2896}', '\u{2897}',
    '\u{2898}', '\u{2899}', '\u{289A}', '\u{289B}', '\u{289C}', '\u{289D}', '\u{289E}', '\u{289F}',
    '\u{28A0}', '\u{28A1}', '\u{28A2}', '\u{28A3}', '\u{28A4}', '\u{28A5}', '\u{28A6}', '\u{28A7}',
    '\u{28A8}', '\u{28A9}', '\u{28AA}', '\u{28AB}', '\u{28AC}', '\u{28AD}', '\u{28AE}', '\u{28AF}',
    '\u{28B0}', '\u{28B1}', '\u{28B2}', '\u{28B3}', '\u{28B4}', '\u{28B5}', '\u{28B6}', '\u{28B7}',
    '\u{28B8}', '\u{28B9}', '\u{28BA}', '\u{28BB}', '\u{28BC}', '\u{28BD}', '\u{28BE}', '\u{28BF}',
    '\u{28C0}', '\u{28C1}', '\u{28C2}', '\u{28C3}', '\u{28C4}', '\u{28C5}', '\u{28C6}', '\u{28C7}',
    '\u{28C8}', '\u{28C9}', '\u{28CA}', '\u{28CB}', '\u{28CC}', '\u{28CD}', '\u{28CE}', '\u{28CF}',
    '\u{28D0}', '\u{28D1}', '\u{28D2}', '\u{28D3}', '\u{28D4}', '\u{28D5}', '\u{28D6}', '\u{28D7}',
    '\u{28D8}', '\u{28D9}', '\u{28DA}', '\u{28DB}', '\u{28DC}', '\u{28DD}', '\u{28DE}', '\u{28DF}',
    '\u{28E0}', '\u{28E1}', '\u{28E2}', '\u{28E3}', '\u{28E4}', '\u{28E5}', '\u{28E6}', '\u{28E7}',
    '\u{28E8}', '\u{28E9}', '\u{28EA}', '\u{28EB}', '\u{28EC}', '\u{28ED}', '\u{28EE}', '\u{28EF}',
    '\u{28F0}', '\u{28F1}', '\u{28F2}', '\u{28F3}', '\u{28F4}', '\u{28F5}', '\u{28F6}', '\u{28F7}',
    '\u{28F8}', '\u{28F9}', '\u{28FA}', '\u{28FB}', '\u{28FC}', '\u{28FD}', '\u{28FE}', '\u{28FF}',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_braille_block() {
        for (mask, glyph) in GLYPHS.iter().enumerate() {
            assert_eq!(*glyph as u32, 0x2800 + mask as u32);
        }
    }

    #[test]
    fn test_dot_bits_cover_all_eight_positions() {
        let mut mask = 0u8;
        for row in DOT_BITS {
            for bit in row {
                assert_eq!(mask & bit, 0);
                mask |= bit;
            }
        }
        assert_eq!(mask, 0xFF);
    }
}
