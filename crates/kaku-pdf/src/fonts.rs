use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::PdfError;

/// Helvetica advance widths for the printable ASCII range, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_ASCENT: f32 = 718.0;
const HELVETICA_DESCENT: f32 = -207.0;

/// Glyph IDs per ToUnicode `bfchar` block; the CMap format caps this at 100
const BFCHAR_CHUNK: usize = 100;

/// sfnt version tags for TrueType outlines
const TRUETYPE_TAGS: [[u8; 4]; 2] = [[0, 1, 0, 0], *b"true"];
/// CFF-flavoured OpenType, which cannot go in FontFile2
const CFF_TAG: &[u8] = b"OTTO";

/// TrueType font embedded as a Type0 composite font with Identity-H encoding
pub struct EmbeddedFont {
    name: String,
    data: Vec<u8>,
    face: fontdue::Font,
    ascent: f32,
    descent: f32,
    /// Glyphs shown so far, with the character they map back to and their
    /// advance in 1/1000 em
    used: BTreeMap<u16, (char, f32)>,
}

impl EmbeddedFont {
    pub fn from_file(path: &Path) -> Result<Self, PdfError> {
        let data = std::fs::read(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_bytes(data, &path.display().to_string(), &stem)
    }

    pub fn from_bytes(data: Vec<u8>, label: &str, base_name: &str) -> Result<Self, PdfError> {
        let unsupported = || PdfError::UnsupportedFont {
            path: label.to_string(),
            reason: "only TrueType outlines can be embedded".to_string(),
        };

        if data.starts_with(CFF_TAG) {
            return Err(unsupported());
        }

        let face = fontdue::Font::from_bytes(data.as_slice(), fontdue::FontSettings::default())
            .map_err(|e| PdfError::FontParse {
                path: label.to_string(),
                message: e.to_string(),
            })?;

        if !data.get(..4).is_some_and(|tag| TRUETYPE_TAGS.iter().any(|t| t == tag)) {
            return Err(unsupported());
        }

        // At 1000px the line metrics come out in 1/1000 em
        let (ascent, descent) = face
            .horizontal_line_metrics(1000.0)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((880.0, -120.0));

        let name = sanitize_name(base_name);
        let font = Self {
            name: if name.is_empty() {
                "KakuEmbedded".to_string()
            } else {
                name
            },
            data,
            face,
            ascent,
            descent,
            used: BTreeMap::new(),
        };

        tracing::debug!("Loaded font {} from {}", font.name, label);

        Ok(font)
    }

    /// Advance of a glyph in 1/1000 em
    fn advance(&self, glyph: u16) -> f32 {
        self.face.metrics_indexed(glyph, 1000.0).advance_width
    }

    fn width_em(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| self.advance(self.face.lookup_glyph_index(c)))
            .sum::<f32>()
            / 1000.0
    }

    fn encode(&mut self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);

        for c in text.chars() {
            let glyph = self.face.lookup_glyph_index(c);
            if glyph == 0 {
                tracing::debug!("No glyph for {:?} in {}", c, self.name);
            }
            let width = self.advance(glyph);
            self.used.entry(glyph).or_insert((c, width));
            bytes.extend_from_slice(&glyph.to_be_bytes());
        }

        bytes
    }

    fn to_unicode_cmap(&self) -> Vec<u8> {
        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mapped: Vec<_> = self
            .used
            .iter()
            .filter(|(gid, _)| **gid != 0)
            .collect();
        for chunk in mapped.chunks(BFCHAR_CHUNK) {
            let _ = writeln!(cmap, "{} beginbfchar", chunk.len());
            for (gid, (c, _)) in chunk {
                let mut units = [0u16; 2];
                let hex: String = c
                    .encode_utf16(&mut units)
                    .iter()
                    .map(|u| format!("{u:04X}"))
                    .collect();
                let _ = writeln!(cmap, "<{gid:04X}> <{hex}>");
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str(
            "endcmap\n\
             CMapName currentdict /CMap defineresource pop\n\
             end\n\
             end\n",
        );
        cmap.into_bytes()
    }

    fn write(&self, pdf: &mut Pdf, refs: [Ref; 5]) {
        let [font_id, cid_id, descriptor_id, file_id, cmap_id] = refs;
        let base = Name(self.name.as_bytes());

        pdf.type0_font(font_id)
            .base_font(base)
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_id)
            .to_unicode(cmap_id);

        {
            let mut cid = pdf.cid_font(cid_id);
            cid.subtype(CidFontType::Type2)
                .base_font(base)
                .system_info(SystemInfo {
                    registry: Str(b"Adobe"),
                    ordering: Str(b"Identity"),
                    supplement: 0,
                })
                .font_descriptor(descriptor_id)
                .default_width(1000.0)
                .cid_to_gid_map_predefined(Name(b"Identity"));
            let mut widths = cid.widths();
            for (gid, (_, width)) in &self.used {
                widths.consecutive(*gid, [*width]);
            }
        }

        pdf.font_descriptor(descriptor_id)
            .name(base)
            .flags(FontFlags::SYMBOLIC)
            .bbox(Rect::new(0.0, self.descent, 1000.0, self.ascent))
            .italic_angle(0.0)
            .ascent(self.ascent)
            .descent(self.descent)
            .cap_height(self.ascent)
            .stem_v(80.0)
            .font_file2(file_id);

        let compressed = compress_to_vec_zlib(&self.data, 6);
        pdf.stream(file_id, &compressed)
            .filter(Filter::FlateDecode)
            .pair(Name(b"Length1"), self.data.len() as i32);

        pdf.stream(cmap_id, &self.to_unicode_cmap());
    }
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Font used by the canvas: an embedded TrueType face or a standard-14 font
pub enum PdfFont {
    Embedded(Box<EmbeddedFont>),
    /// Standard Helvetica with WinAnsi encoding; characters outside ASCII
    /// are shown as `?`
    Builtin { base: &'static str },
}

impl PdfFont {
    pub fn load(path: &Path) -> Result<Self, PdfError> {
        Ok(Self::Embedded(Box::new(EmbeddedFont::from_file(path)?)))
    }

    pub fn helvetica() -> Self {
        Self::Builtin { base: "Helvetica" }
    }

    pub fn helvetica_bold() -> Self {
        Self::Builtin {
            base: "Helvetica-Bold",
        }
    }

    /// Advance width of `text` at `size`, in points
    pub fn width(&self, text: &str, size: f32) -> f32 {
        match self {
            PdfFont::Embedded(font) => font.width_em(text) * size,
            PdfFont::Builtin { .. } => {
                text.chars().map(builtin_width).sum::<f32>() / 1000.0 * size
            }
        }
    }

    /// Ascent and descent in 1/1000 em, descent negative
    pub(crate) fn vertical_metrics(&self) -> (f32, f32) {
        match self {
            PdfFont::Embedded(font) => (font.ascent, font.descent),
            PdfFont::Builtin { .. } => (HELVETICA_ASCENT, HELVETICA_DESCENT),
        }
    }

    pub(crate) fn encode(&mut self, text: &str) -> Vec<u8> {
        match self {
            PdfFont::Embedded(font) => font.encode(text),
            PdfFont::Builtin { .. } => text.chars().map(builtin_byte).collect(),
        }
    }

    /// Object IDs this font needs when written
    pub(crate) fn object_count(&self) -> usize {
        match self {
            PdfFont::Embedded(_) => 5,
            PdfFont::Builtin { .. } => 1,
        }
    }

    /// Write the font; `refs[0]` is the ID referenced from page resources
    pub(crate) fn write(&self, pdf: &mut Pdf, refs: &[Ref]) {
        match self {
            PdfFont::Embedded(font) => {
                if let [a, b, c, d, e] = *refs {
                    font.write(pdf, [a, b, c, d, e]);
                }
            }
            PdfFont::Builtin { base } => {
                if let Some(id) = refs.first() {
                    pdf.type1_font(*id)
                        .base_font(Name(base.as_bytes()))
                        .encoding_predefined(Name(b"WinAnsiEncoding"));
                }
            }
        }
    }
}

fn builtin_byte(c: char) -> u8 {
    if (' '..='~').contains(&c) { c as u8 } else { b'?' }
}

fn builtin_width(c: char) -> f32 {
    let index = builtin_byte(c) - b' ';
    HELVETICA_WIDTHS[index as usize] as f32
}

/// Regular and bold faces for a document
pub struct FontSet {
    pub regular: PdfFont,
    /// Bold text falls back to the regular face when unset
    pub bold: Option<PdfFont>,
}

impl FontSet {
    pub fn builtin() -> Self {
        Self {
            regular: PdfFont::helvetica(),
            bold: Some(PdfFont::helvetica_bold()),
        }
    }

    /// Load the configured fonts
    ///
    /// A missing regular font falls back to Helvetica, which cannot show
    /// kana or kanji. A font file that exists but fails to parse is an error.
    pub fn discover(regular: &Path, bold: &Path) -> Result<Self, PdfError> {
        if !regular.exists() {
            tracing::warn!(
                "Font {} not found, falling back to Helvetica; Japanese text will not render",
                regular.display()
            );
            return Ok(Self::builtin());
        }

        let regular = PdfFont::load(regular)?;
        let bold = if bold.exists() {
            Some(PdfFont::load(bold)?)
        } else {
            tracing::warn!(
                "Bold font {} not found, using the regular face",
                bold.display()
            );
            None
        };

        Ok(Self { regular, bold })
    }
}
