use crate::PixooError;

/// One character bitmap: a flat row-major 0/1 matrix of
/// `width * row_height` bits.
#[derive(Clone, Copy, Debug)]
pub struct Glyph {
    pub width: usize,
    pub bits: &'static [u8],
}

/// A named, immutable catalog of character bitmaps sharing one row height.
/// Entries are sorted by character so lookup is a binary search.
#[derive(Debug)]
pub struct GlyphSet {
    name: &'static str,
    row_height: usize,
    glyphs: &'static [(char, &'static [u8])],
}

impl GlyphSet {
    /// Fixed-width 3x5 set covering punctuation, digits, and A-Z.
    pub fn pico() -> &'static GlyphSet {
        &PICO
    }

    /// Variable-width 5x5 digit set with narrow space and colon, intended
    /// for clock-style readouts.
    pub fn numeric() -> &'static GlyphSet {
        &NUMERIC
    }

    pub fn catalog() -> &'static [&'static GlyphSet] {
        static CATALOG: [&GlyphSet; 2] = [&PICO, &NUMERIC];
        &CATALOG
    }

    pub fn by_name(name: &str) -> Option<&'static GlyphSet> {
        Self::catalog().iter().copied().find(|set| set.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn row_height(&self) -> usize {
        self.row_height
    }

    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        self.glyphs
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|index| self.glyph_at(index))
    }

    /// Resolves a character, substituting `?` for anything the set does not
    /// cover. A set whose `?` is itself missing cannot render the character
    /// at all, which is a configuration fault rather than a silent skip.
    pub fn resolve(&self, ch: char) -> Result<Glyph, PixooError> {
        if let Some(glyph) = self.glyph(ch) {
            return Ok(glyph);
        }
        log::warn!("no glyph for {:?} in glyph set '{}', falling back to '?'", ch, self.name);
        self.glyph('?').ok_or(PixooError::GlyphSetIncomplete(self.name))
    }

    fn glyph_at(&self, index: usize) -> Glyph {
        let (_, bits) = self.glyphs[index];
        Glyph { width: bits.len() / self.row_height, bits }
    }
}

static PICO: GlyphSet = GlyphSet { name: "pico", row_height: 5, glyphs: PICO_GLYPHS };
static NUMERIC: GlyphSet = GlyphSet { name: "numeric", row_height: 5, glyphs: NUMERIC_GLYPHS };

#[rustfmt::skip]
static PICO_GLYPHS: &[(char, &[u8])] = &[
    (' ', &[0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,0,0]),
    ('!', &[0,1,0, 0,1,0, 0,1,0, 0,0,0, 0,1,0]),
    ('%', &[1,0,1, 0,0,1, 0,1,0, 1,0,0, 1,0,1]),
    ('\'', &[0,1,0, 0,1,0, 0,0,0, 0,0,0, 0,0,0]),
    ('(', &[0,1,0, 1,0,0, 1,0,0, 1,0,0, 0,1,0]),
    (')', &[0,1,0, 0,0,1, 0,0,1, 0,0,1, 0,1,0]),
    ('+', &[0,0,0, 0,1,0, 1,1,1, 0,1,0, 0,0,0]),
    (',', &[0,0,0, 0,0,0, 0,0,0, 0,1,0, 1,0,0]),
    ('-', &[0,0,0, 0,0,0, 1,1,1, 0,0,0, 0,0,0]),
    ('.', &[0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,1,0]),
    ('/', &[0,0,1, 0,0,1, 0,1,0, 1,0,0, 1,0,0]),
    ('0', &[1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]),
    ('1', &[1,1,0, 0,1,0, 0,1,0, 0,1,0, 1,1,1]),
    ('2', &[1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1]),
    ('3', &[1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1]),
    ('4', &[1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1]),
    ('5', &[1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1]),
    ('6', &[1,0,0, 1,0,0, 1,1,1, 1,0,1, 1,1,1]),
    ('7', &[1,1,1, 0,0,1, 0,0,1, 0,0,1, 0,0,1]),
    ('8', &[1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1]),
    ('9', &[1,1,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1]),
    (':', &[0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0]),
    ('=', &[0,0,0, 1,1,1, 0,0,0, 1,1,1, 0,0,0]),
    ('?', &[1,1,1, 0,0,1, 0,1,1, 0,0,0, 0,1,0]),
    ('A', &[1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1]),
    ('B', &[1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0]),
    ('C', &[0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1]),
    ('D', &[1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0]),
    ('E', &[1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1]),
    ('F', &[1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,0,0]),
    ('G', &[0,1,1, 1,0,0, 1,0,1, 1,0,1, 0,1,1]),
    ('H', &[1,0,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1]),
    ('I', &[1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1]),
    ('J', &[0,0,1, 0,0,1, 0,0,1, 1,0,1, 0,1,0]),
    ('K', &[1,0,1, 1,1,0, 1,0,0, 1,1,0, 1,0,1]),
    ('L', &[1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1]),
    ('M', &[1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1]),
    ('N', &[1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1]),
    ('O', &[0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0]),
    ('P', &[1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0]),
    ('Q', &[0,1,0, 1,0,1, 1,0,1, 1,1,0, 0,1,1]),
    ('R', &[1,1,0, 1,0,1, 1,1,0, 1,1,0, 1,0,1]),
    ('S', &[0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0]),
    ('T', &[1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0]),
    ('U', &[1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]),
    ('V', &[1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0]),
    ('W', &[1,0,1, 1,0,1, 1,1,1, 1,1,1, 1,0,1]),
    ('X', &[1,0,1, 1,0,1, 0,1,0, 1,0,1, 1,0,1]),
    ('Y', &[1,0,1, 1,0,1, 0,1,0, 0,1,0, 0,1,0]),
    ('Z', &[1,1,1, 0,0,1, 0,1,0, 1,0,0, 1,1,1]),
];

#[rustfmt::skip]
static NUMERIC_GLYPHS: &[(char, &[u8])] = &[
    (' ', &[0,0, 0,0, 0,0, 0,0, 0,0]),
    ('-', &[0,0,0,0,0, 0,0,0,0,0, 0,1,1,1,0, 0,0,0,0,0, 0,0,0,0,0]),
    ('0', &[0,1,1,1,0, 1,0,0,0,1, 1,0,0,0,1, 1,0,0,0,1, 0,1,1,1,0]),
    ('1', &[0,0,1,0,0, 0,1,1,0,0, 0,0,1,0,0, 0,0,1,0,0, 0,1,1,1,0]),
    ('2', &[0,1,1,1,0, 1,0,0,0,1, 0,0,1,1,0, 0,1,0,0,0, 1,1,1,1,1]),
    ('3', &[1,1,1,1,0, 0,0,0,0,1, 0,0,1,1,0, 0,0,0,0,1, 1,1,1,1,0]),
    ('4', &[0,0,0,1,0, 0,0,1,1,0, 0,1,0,1,0, 1,1,1,1,1, 0,0,0,1,0]),
    ('5', &[1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,0, 0,0,0,0,1, 1,1,1,1,0]),
    ('6', &[0,1,1,1,0, 1,0,0,0,0, 1,1,1,1,0, 1,0,0,0,1, 0,1,1,1,0]),
    ('7', &[1,1,1,1,1, 0,0,0,0,1, 0,0,0,1,0, 0,0,1,0,0, 0,0,1,0,0]),
    ('8', &[0,1,1,1,0, 1,0,0,0,1, 0,1,1,1,0, 1,0,0,0,1, 0,1,1,1,0]),
    ('9', &[0,1,1,1,0, 1,0,0,0,1, 0,1,1,1,1, 0,0,0,0,1, 0,1,1,1,0]),
    (':', &[0,0, 0,1, 0,0, 0,1, 0,0]),
    ('?', &[0,1,1,1,0, 1,0,0,0,1, 0,0,1,1,0, 0,0,0,0,0, 0,0,1,0,0]),
];
