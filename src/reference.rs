//! The fixed reference table used to name extracted colors.
//!
//! Entries are kept in a single canonical order. Nearest-name lookups break
//! ties by that order, so `aqua` wins over `cyan` and `fuchsia` over
//! `magenta`.

use palette::Srgb;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One row of a [`ReferenceTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Srgb<u8>,
}

impl NamedColor {
    pub const fn new(name: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            name,
            color: Srgb::new(red, green, blue),
        }
    }
}

/// An ordered, immutable name → color table.
///
/// Construction rejects an empty slice, and since `new` is a `const fn` a
/// table declared as a `static` fails at compile time instead.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    entries: &'static [NamedColor],
}

impl ReferenceTable {
    pub const fn new(entries: &'static [NamedColor]) -> Self {
        assert!(!entries.is_empty(), "reference table must not be empty");
        Self { entries }
    }

    pub fn entries(&self) -> &'static [NamedColor] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'static, NamedColor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look a name up, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&'static NamedColor> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Pick `count` distinct entries at random (fewer if the table is smaller).
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&'static NamedColor> {
        self.entries.choose_multiple(rng, count).collect()
    }
}

impl IntoIterator for &ReferenceTable {
    type Item = &'static NamedColor;
    type IntoIter = std::slice::Iter<'static, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The CSS3 named colors.
pub static CSS3_COLORS: ReferenceTable = ReferenceTable::new(&CSS3_ENTRIES);

static CSS3_ENTRIES: [NamedColor; 140] = [
    NamedColor::new("aliceblue", 0xf0, 0xf8, 0xff),
    NamedColor::new("antiquewhite", 0xfa, 0xeb, 0xd7),
    NamedColor::new("aqua", 0x00, 0xff, 0xff),
    NamedColor::new("aquamarine", 0x7f, 0xff, 0xd4),
    NamedColor::new("azure", 0xf0, 0xff, 0xff),
    NamedColor::new("beige", 0xf5, 0xf5, 0xdc),
    NamedColor::new("bisque", 0xff, 0xe4, 0xc4),
    NamedColor::new("black", 0x00, 0x00, 0x00),
    NamedColor::new("blanchedalmond", 0xff, 0xeb, 0xcd),
    NamedColor::new("blue", 0x00, 0x00, 0xff),
    NamedColor::new("blueviolet", 0x8a, 0x2b, 0xe2),
    NamedColor::new("brown", 0xa5, 0x2a, 0x2a),
    NamedColor::new("burlywood", 0xde, 0xb8, 0x87),
    NamedColor::new("cadetblue", 0x5f, 0x9e, 0xa0),
    NamedColor::new("chartreuse", 0x7f, 0xff, 0x00),
    NamedColor::new("chocolate", 0xd2, 0x69, 0x1e),
    NamedColor::new("coral", 0xff, 0x7f, 0x50),
    NamedColor::new("cornflowerblue", 0x64, 0x95, 0xed),
    NamedColor::new("cornsilk", 0xff, 0xf8, 0xdc),
    NamedColor::new("crimson", 0xdc, 0x14, 0x3c),
    NamedColor::new("cyan", 0x00, 0xff, 0xff),
    NamedColor::new("darkblue", 0x00, 0x00, 0x8b),
    NamedColor::new("darkcyan", 0x00, 0x8b, 0x8b),
    NamedColor::new("darkgoldenrod", 0xb8, 0x86, 0x0b),
    NamedColor::new("darkgray", 0xa9, 0xa9, 0xa9),
    NamedColor::new("darkgreen", 0x00, 0x64, 0x00),
    NamedColor::new("darkkhaki", 0xbd, 0xb7, 0x6b),
    NamedColor::new("darkmagenta", 0x8b, 0x00, 0x8b),
    NamedColor::new("darkolivegreen", 0x55, 0x6b, 0x2f),
    NamedColor::new("darkorange", 0xff, 0x8c, 0x00),
    NamedColor::new("darkorchid", 0x99, 0x32, 0xcc),
    NamedColor::new("darkred", 0x8b, 0x00, 0x00),
    NamedColor::new("darksalmon", 0xe9, 0x96, 0x7a),
    NamedColor::new("darkseagreen", 0x8f, 0xbc, 0x8f),
    NamedColor::new("darkslateblue", 0x48, 0x3d, 0x8b),
    NamedColor::new("darkslategray", 0x2f, 0x4f, 0x4f),
    NamedColor::new("darkturquoise", 0x00, 0xce, 0xd1),
    NamedColor::new("darkviolet", 0x94, 0x00, 0xd3),
    NamedColor::new("deeppink", 0xff, 0x14, 0x93),
    NamedColor::new("deepskyblue", 0x00, 0xbf, 0xff),
    NamedColor::new("dimgray", 0x69, 0x69, 0x69),
    NamedColor::new("dodgerblue", 0x1e, 0x90, 0xff),
    NamedColor::new("firebrick", 0xb2, 0x22, 0x22),
    NamedColor::new("floralwhite", 0xff, 0xfa, 0xf0),
    NamedColor::new("forestgreen", 0x22, 0x8b, 0x22),
    NamedColor::new("fuchsia", 0xff, 0x00, 0xff),
    NamedColor::new("gainsboro", 0xdc, 0xdc, 0xdc),
    NamedColor::new("ghostwhite", 0xf8, 0xf8, 0xff),
    NamedColor::new("gold", 0xff, 0xd7, 0x00),
    NamedColor::new("goldenrod", 0xda, 0xa5, 0x20),
    NamedColor::new("gray", 0x80, 0x80, 0x80),
    NamedColor::new("green", 0x00, 0x80, 0x00),
    NamedColor::new("greenyellow", 0xad, 0xff, 0x2f),
    NamedColor::new("honeydew", 0xf0, 0xff, 0xf0),
    NamedColor::new("hotpink", 0xff, 0x69, 0xb4),
    NamedColor::new("indianred", 0xcd, 0x5c, 0x5c),
    NamedColor::new("indigo", 0x4b, 0x00, 0x82),
    NamedColor::new("ivory", 0xff, 0xff, 0xf0),
    NamedColor::new("khaki", 0xf0, 0xe6, 0x8c),
    NamedColor::new("lavender", 0xe6, 0xe6, 0xfa),
    NamedColor::new("lavenderblush", 0xff, 0xf0, 0xf5),
    NamedColor::new("lawngreen", 0x7c, 0xfc, 0x00),
    NamedColor::new("lemonchiffon", 0xff, 0xfa, 0xcd),
    NamedColor::new("lightblue", 0xad, 0xd8, 0xe6),
    NamedColor::new("lightcoral", 0xf0, 0x80, 0x80),
    NamedColor::new("lightcyan", 0xe0, 0xff, 0xff),
    NamedColor::new("lightgoldenrodyellow", 0xfa, 0xfa, 0xd2),
    NamedColor::new("lightgray", 0xd3, 0xd3, 0xd3),
    NamedColor::new("lightgreen", 0x90, 0xee, 0x90),
    NamedColor::new("lightpink", 0xff, 0xb6, 0xc1),
    NamedColor::new("lightsalmon", 0xff, 0xa0, 0x7a),
    NamedColor::new("lightseagreen", 0x20, 0xb2, 0xaa),
    NamedColor::new("lightskyblue", 0x87, 0xce, 0xfa),
    NamedColor::new("lightslategray", 0x77, 0x88, 0x99),
    NamedColor::new("lightsteelblue", 0xb0, 0xc4, 0xde),
    NamedColor::new("lightyellow", 0xff, 0xff, 0xe0),
    NamedColor::new("lime", 0x00, 0xff, 0x00),
    NamedColor::new("limegreen", 0x32, 0xcd, 0x32),
    NamedColor::new("linen", 0xfa, 0xf0, 0xe6),
    NamedColor::new("magenta", 0xff, 0x00, 0xff),
    NamedColor::new("maroon", 0x80, 0x00, 0x00),
    NamedColor::new("mediumaquamarine", 0x66, 0xcd, 0xaa),
    NamedColor::new("mediumblue", 0x00, 0x00, 0xcd),
    NamedColor::new("mediumorchid", 0xba, 0x55, 0xd3),
    NamedColor::new("mediumpurple", 0x93, 0x70, 0xdb),
    NamedColor::new("mediumseagreen", 0x3c, 0xb3, 0x71),
    NamedColor::new("mediumslateblue", 0x7b, 0x68, 0xee),
    NamedColor::new("mediumspringgreen", 0x00, 0xfa, 0x9a),
    NamedColor::new("mediumturquoise", 0x48, 0xd1, 0xcc),
    NamedColor::new("mediumvioletred", 0xc7, 0x15, 0x85),
    NamedColor::new("midnightblue", 0x19, 0x19, 0x70),
    NamedColor::new("mintcream", 0xf5, 0xff, 0xfa),
    NamedColor::new("mistyrose", 0xff, 0xe4, 0xe1),
    NamedColor::new("moccasin", 0xff, 0xe4, 0xb5),
    NamedColor::new("navajowhite", 0xff, 0xde, 0xad),
    NamedColor::new("navy", 0x00, 0x00, 0x80),
    NamedColor::new("oldlace", 0xfd, 0xf5, 0xe6),
    NamedColor::new("olive", 0x80, 0x80, 0x00),
    NamedColor::new("olivedrab", 0x6b, 0x8e, 0x23),
    NamedColor::new("orange", 0xff, 0xa5, 0x00),
    NamedColor::new("orangered", 0xff, 0x45, 0x00),
    NamedColor::new("orchid", 0xda, 0x70, 0xd6),
    NamedColor::new("palegoldenrod", 0xee, 0xe8, 0xaa),
    NamedColor::new("palegreen", 0x98, 0xfb, 0x98),
    NamedColor::new("paleturquoise", 0xaf, 0xee, 0xee),
    NamedColor::new("palevioletred", 0xdb, 0x70, 0x93),
    NamedColor::new("papayawhip", 0xff, 0xef, 0xd5),
    NamedColor::new("peachpuff", 0xff, 0xda, 0xb9),
    NamedColor::new("peru", 0xcd, 0x85, 0x3f),
    NamedColor::new("pink", 0xff, 0xc0, 0xcb),
    NamedColor::new("plum", 0xdd, 0xa0, 0xdd),
    NamedColor::new("powderblue", 0xb0, 0xe0, 0xe6),
    NamedColor::new("purple", 0x80, 0x00, 0x80),
    NamedColor::new("red", 0xff, 0x00, 0x00),
    NamedColor::new("rosybrown", 0xbc, 0x8f, 0x8f),
    NamedColor::new("royalblue", 0x41, 0x69, 0xe1),
    NamedColor::new("saddlebrown", 0x8b, 0x45, 0x13),
    NamedColor::new("salmon", 0xfa, 0x80, 0x72),
    NamedColor::new("sandybrown", 0xf4, 0xa4, 0x60),
    NamedColor::new("seagreen", 0x2e, 0x8b, 0x57),
    NamedColor::new("seashell", 0xff, 0xf5, 0xee),
    NamedColor::new("sienna", 0xa0, 0x52, 0x2d),
    NamedColor::new("silver", 0xc0, 0xc0, 0xc0),
    NamedColor::new("skyblue", 0x87, 0xce, 0xeb),
    NamedColor::new("slateblue", 0x6a, 0x5a, 0xcd),
    NamedColor::new("slategray", 0x70, 0x80, 0x90),
    NamedColor::new("snow", 0xff, 0xfa, 0xfa),
    NamedColor::new("springgreen", 0x00, 0xff, 0x7f),
    NamedColor::new("steelblue", 0x46, 0x82, 0xb4),
    NamedColor::new("tan", 0xd2, 0xb4, 0x8c),
    NamedColor::new("teal", 0x00, 0x80, 0x80),
    NamedColor::new("thistle", 0xd8, 0xbf, 0xd8),
    NamedColor::new("tomato", 0xff, 0x63, 0x47),
    NamedColor::new("turquoise", 0x40, 0xe0, 0xd0),
    NamedColor::new("violet", 0xee, 0x82, 0xee),
    NamedColor::new("wheat", 0xf5, 0xde, 0xb3),
    NamedColor::new("white", 0xff, 0xff, 0xff),
    NamedColor::new("whitesmoke", 0xf5, 0xf5, 0xf5),
    NamedColor::new("yellow", 0xff, 0xff, 0x00),
    NamedColor::new("yellowgreen", 0x9a, 0xcd, 0x32),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in &CSS3_COLORS {
            assert!(seen.insert(entry.name), "duplicate name {}", entry.name);
            assert_eq!(entry.name, entry.name.to_lowercase());
        }
        assert_eq!(seen.len(), CSS3_COLORS.len());
        assert!(!CSS3_COLORS.is_empty());
    }

    #[test]
    fn test_get_ignores_case() {
        let red = CSS3_COLORS.get("Red").unwrap();
        assert_eq!(red.name, "red");
        assert_eq!(red.color, Srgb::new(255, 0, 0));
        assert_eq!(CSS3_COLORS.get("rebeccapurple"), None);
    }

    #[test]
    fn test_canonical_order_starts_alphabetically() {
        let names: Vec<&str> = CSS3_COLORS.iter().take(3).map(|e| e.name).collect();
        assert_eq!(names, ["aliceblue", "antiquewhite", "aqua"]);
        assert_eq!(CSS3_COLORS.entries().last().map(|e| e.name), Some("yellowgreen"));
    }

    #[test]
    fn test_sample_returns_distinct_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = CSS3_COLORS.sample(30, &mut rng);
        assert_eq!(picked.len(), 30);
        let names: HashSet<&str> = picked.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), 30);
    }

    #[test]
    fn test_sample_is_clamped_to_table_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(CSS3_COLORS.sample(1000, &mut rng).len(), CSS3_COLORS.len());
        assert!(CSS3_COLORS.sample(0, &mut rng).is_empty());
    }
}
