//! Asset kind classification by filename extension.

/// Kind of build output file, determines destination and rewrite role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Markup file (.html) - stays at the build root, references rewritten
    Markup,
    /// Script file (.js) - moved to the combined assets directory
    Script,
    /// Source map (.map) - moved to the combined assets directory
    SourceMap,
    /// Stylesheet (.css) - moved to the combined assets directory
    Stylesheet,
    /// Any other file with an extension - moved to the static directory
    Static,
}

impl AssetKind {
    /// Classify a file name by its final extension.
    ///
    /// Precedence is markup > script > source-map > stylesheet > static.
    /// Matching is case-sensitive: `INDEX.HTML` is a static asset, not
    /// markup. Names without an extension (no dot, leading dot only, or
    /// trailing dot) belong to no kind and return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(match ext {
            "html" => Self::Markup,
            "js" => Self::Script,
            "map" => Self::SourceMap,
            "css" => Self::Stylesheet,
            _ => Self::Static,
        })
    }

    /// Display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Script => "scripts",
            Self::SourceMap => "maps",
            Self::Stylesheet => "stylesheets",
            Self::Static => "static",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_kinds() {
        assert_eq!(AssetKind::from_name("index.html"), Some(AssetKind::Markup));
        assert_eq!(AssetKind::from_name("main.js"), Some(AssetKind::Script));
        assert_eq!(
            AssetKind::from_name("main.js.map"),
            Some(AssetKind::SourceMap)
        );
        assert_eq!(
            AssetKind::from_name("style.css"),
            Some(AssetKind::Stylesheet)
        );
        assert_eq!(AssetKind::from_name("logo.png"), Some(AssetKind::Static));
    }

    #[test]
    fn test_from_name_precedence_on_stacked_suffixes() {
        // The final extension decides: a .map name built on a .js stem is a
        // source map, not a script, and vice versa.
        assert_eq!(
            AssetKind::from_name("main.js.map"),
            Some(AssetKind::SourceMap)
        );
        assert_eq!(AssetKind::from_name("main.map.js"), Some(AssetKind::Script));
        assert_eq!(
            AssetKind::from_name("page.css.html"),
            Some(AssetKind::Markup)
        );
    }

    #[test]
    fn test_from_name_case_sensitive() {
        assert_eq!(AssetKind::from_name("INDEX.HTML"), Some(AssetKind::Static));
        assert_eq!(AssetKind::from_name("MAIN.JS"), Some(AssetKind::Static));
    }

    #[test]
    fn test_from_name_extensionless_ignored() {
        assert_eq!(AssetKind::from_name("README"), None);
        assert_eq!(AssetKind::from_name(".gitignore"), None);
        assert_eq!(AssetKind::from_name("file."), None);
        assert_eq!(AssetKind::from_name(""), None);
    }
}
