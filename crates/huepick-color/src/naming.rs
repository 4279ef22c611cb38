//! Nearest named color lookup.
//!
//! Nearest-neighbor search by CIE76 ΔE in D50/2° Lab over a fixed
//! dictionary. Ties resolve to the first entry in dictionary order, so the
//! result for a given color never changes.

use crate::context::LabContext;
use crate::convert::rgb_to_lab;
use crate::model::Lab;
use huepick_core::{Color, Error, Result, Rgb8};
use tracing::debug;

/// Suffix appended to an approximate match when precision is requested.
pub const APPROXIMATION_MARKER: &str = " ~";

/// One dictionary entry with its precomputed Lab value.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColor {
    /// Display name
    pub name: String,
    /// 8-bit reference value
    pub rgb: Rgb8,
    lab: Lab,
}

impl NamedColor {
    fn new(name: impl Into<String>, rgb: Rgb8, ctx: &LabContext) -> Self {
        Self {
            name: name.into(),
            rgb,
            lab: rgb_to_lab(Color::from_rgb8(rgb), ctx),
        }
    }

    /// Lab value under D50/2°.
    pub fn lab(&self) -> Lab {
        self.lab
    }
}

/// Result of a lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch<'a> {
    /// The nearest entry.
    pub entry: &'a NamedColor,
    /// ΔE76 to the query color.
    pub distance: f32,
    /// Whether the 8-bit query equals the entry exactly.
    pub exact: bool,
}

/// Read-only nearest-name lookup.
///
/// ```rust
/// use huepick_color::NamingService;
/// use huepick_core::Color;
///
/// let names = NamingService::css();
/// assert_eq!(names.name(Color::new(1.0, 0.0, 0.0), true), "red");
/// assert_eq!(names.name(Color::new(0.98, 0.0, 0.0), true), "red ~");
/// assert_eq!(names.name(Color::new(0.98, 0.0, 0.0), false), "red");
/// ```
#[derive(Debug, Clone)]
pub struct NamingService {
    entries: Vec<NamedColor>,
}

impl NamingService {
    /// The CSS named color set in alphabetical order.
    pub fn css() -> Self {
        let ctx = LabContext::d50();
        let entries = CSS_COLORS
            .iter()
            .map(|&(name, [r, g, b])| NamedColor::new(name, Rgb8::new(r, g, b), &ctx))
            .collect::<Vec<_>>();
        debug!(entries = entries.len(), "loaded css color dictionary");
        Self { entries }
    }

    /// Custom dictionary; order decides ties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty dictionary.
    pub fn from_entries<S: Into<String>>(entries: impl IntoIterator<Item = (S, Rgb8)>) -> Result<Self> {
        let ctx = LabContext::d50();
        let entries: Vec<_> = entries
            .into_iter()
            .map(|(name, rgb)| NamedColor::new(name, rgb, &ctx))
            .collect();
        if entries.is_empty() {
            return Err(Error::invalid_config("color dictionary is empty"));
        }
        debug!(entries = entries.len(), "loaded custom color dictionary");
        Ok(Self { entries })
    }

    /// Entries in dictionary order.
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Nearest entry to `color`.
    pub fn find(&self, color: Color) -> ColorMatch<'_> {
        let rgb = color.to_rgb8();
        let lab = rgb_to_lab(color, &LabContext::d50());

        let mut best = &self.entries[0];
        let mut best_d = lab.delta_e(best.lab);
        for entry in &self.entries[1..] {
            let d = lab.delta_e(entry.lab);
            // Strict: ties keep the earlier entry.
            if d < best_d {
                best = entry;
                best_d = d;
            }
        }
        ColorMatch {
            entry: best,
            distance: best_d,
            exact: best.rgb == rgb,
        }
    }

    /// Nearest name, with [`APPROXIMATION_MARKER`] appended when `precise`
    /// is set and the match is not exact.
    pub fn name(&self, color: Color, precise: bool) -> String {
        let m = self.find(color);
        if precise && !m.exact {
            format!("{}{APPROXIMATION_MARKER}", m.entry.name)
        } else {
            m.entry.name.clone()
        }
    }
}

impl Default for NamingService {
    fn default() -> Self {
        Self::css()
    }
}

const CSS_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];
