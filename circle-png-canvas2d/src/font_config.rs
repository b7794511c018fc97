use crate::font::GenericFamily;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the fonts for text drawing come from.
///
/// [`FontConfig::resolve`] loads everything into a font database once; the
/// result is cloned into every surface.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Scan the platform's font directories (default: true).
    pub load_system_fonts: bool,
    pub font_dirs: Vec<PathBuf>,
    /// In-memory TTF/OTF/TTC files.
    pub custom_fonts: Vec<CustomFont>,
    pub generic_families: GenericFamilyMap,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CustomFont {
    pub data: Arc<Vec<u8>>,
}

/// Candidate families for each generic family, most preferred first. The
/// first candidate that is installed becomes the generic family's face.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericFamilyMap {
    entries: Vec<(GenericFamily, Vec<String>)>,
}

impl Default for GenericFamilyMap {
    /// Browser choices first, then metric-compatible Linux families.
    fn default() -> Self {
        let list = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        Self {
            entries: vec![
                (
                    GenericFamily::SansSerif,
                    list(&["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans"]),
                ),
                (
                    GenericFamily::Serif,
                    list(&["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif"]),
                ),
                (
                    GenericFamily::Monospace,
                    list(&["Courier New", "Courier", "Liberation Mono", "DejaVu Sans Mono"]),
                ),
                (GenericFamily::Cursive, list(&["Comic Sans MS", "Apple Chancery"])),
                (GenericFamily::Fantasy, list(&["Impact", "Papyrus"])),
            ],
        }
    }
}

impl GenericFamilyMap {
    pub fn candidates(&self, generic: GenericFamily) -> &[String] {
        self.entries
            .iter()
            .find(|(g, _)| *g == generic)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    /// Replace the candidates for `generic`.
    pub fn set(&mut self, generic: GenericFamily, names: Vec<String>) {
        match self.entries.iter_mut().find(|(g, _)| *g == generic) {
            Some(entry) => entry.1 = names,
            None => self.entries.push((generic, names)),
        }
    }
}

impl FontConfig {
    /// Load the configured fonts. This is the expensive step.
    pub fn resolve(&self) -> ResolvedFontConfig {
        ResolvedFontConfig {
            db: font_config_to_fontdb(self),
        }
    }
}

/// A loaded font database, cheap to hand to new surfaces.
#[derive(Clone)]
pub struct ResolvedFontConfig {
    pub(crate) db: fontdb::Database,
}

impl ResolvedFontConfig {
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub fn has_faces(&self) -> bool {
        !self.db.is_empty()
    }

    pub fn has_family(&self, family: &str) -> bool {
        has_family(&self.db, family)
    }
}

impl std::fmt::Debug for ResolvedFontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResolvedFontConfig({} faces)", self.db.len())
    }
}

/// Build the `fontdb` database described by `config`.
pub fn font_config_to_fontdb(config: &FontConfig) -> fontdb::Database {
    let mut db = fontdb::Database::new();
    if config.load_system_fonts {
        db.load_system_fonts();
    }
    config.font_dirs.iter().for_each(|dir| db.load_fonts_dir(dir));
    for font in &config.custom_fonts {
        db.load_font_source(fontdb::Source::Binary(font.data.clone()));
    }

    for generic in GenericFamily::ALL {
        let installed = config
            .generic_families
            .candidates(generic)
            .iter()
            .find(|name| has_family(&db, name))
            .cloned();
        let Some(name) = installed else {
            continue;
        };
        log::debug!(target: "canvas", "{:?} -> {}", generic, name);
        match generic {
            GenericFamily::SansSerif => db.set_sans_serif_family(name),
            GenericFamily::Serif => db.set_serif_family(name),
            GenericFamily::Monospace => db.set_monospace_family(name),
            GenericFamily::Cursive => db.set_cursive_family(name),
            GenericFamily::Fantasy => db.set_fantasy_family(name),
        }
    }

    log::debug!(target: "canvas", "loaded {} font faces", db.len());
    db
}

fn has_family(db: &fontdb::Database, family: &str) -> bool {
    db.faces()
        .flat_map(|face| face.families.iter())
        .any(|(name, _)| name == family)
}
