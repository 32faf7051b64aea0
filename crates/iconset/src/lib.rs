// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
An app icons catalog.

Maps icon keys to a foreground VectorDrawable and a background, which is either
a VectorDrawable or a solid `#RRGGBB` color. All layers are converted into SVG
once, during loading, and can be merged into a single icon afterwards.

The catalog is a JSON object:

```json
{
    "night": {
        "aliasSuffix": "Night",
        "title": "Night",
        "subtitle": "Dark background",
        "iconForeground": "firefox",
        "iconBackground": "#20123a"
    }
}
```

`iconForeground` defaults to `firefox` and `iconBackground` to `#ffffff`.
Layer files are resolved as `<icons-dir>/foreground/<name>.xml`
and `<icons-dir>/background/<name>.xml`.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use vd2svg::{ComposeOptions, Source, WriteOptions};

pub use vd2svg::{BACKGROUND_ID_PREFIX, FOREGROUND_ID_PREFIX};

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the catalog or to write the output.
    Io(std::io::Error),

    /// The catalog is not a valid JSON or has an unexpected structure.
    Json(serde_json::Error),

    /// Failed to convert a layer.
    Convert {
        /// Layer name.
        name: String,
        /// Conversion error.
        source: vd2svg::Error,
    },

    /// An unknown icon, foreground or background.
    MissingResource {
        /// Resource kind, like `icon`.
        kind: &'static str,
        /// Requested name.
        name: String,
    },

    /// A background color is not in the `#RRGGBB` format.
    InvalidColor(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "I/O error cause {}", e),
            Error::Json(ref e) => write!(f, "failed to parse the catalog cause {}", e),
            Error::Convert {
                ref name,
                ref source,
            } => write!(f, "failed to convert '{}' cause {}", name, source),
            Error::MissingResource { kind, ref name } => write!(f, "unknown {} '{}'", kind, name),
            Error::InvalidColor(ref color) => {
                write!(f, "'{}' is not a valid #RRGGBB color", color)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Json(ref e) => Some(e),
            Error::Convert { ref source, .. } => Some(source),
            Error::MissingResource { .. } | Error::InvalidColor(_) => None,
        }
    }
}

/// Catalog loading options.
#[derive(Clone, Debug)]
pub struct Options {
    /// A directory with `foreground` and `background` subdirectories.
    ///
    /// Default: `icons`
    pub icons_dir: PathBuf,

    /// VectorDrawable conversion options.
    pub convert: vd2svg::Options,

    /// Icon composition options.
    pub compose: ComposeOptions,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            icons_dir: PathBuf::from("icons"),
            convert: vd2svg::Options::default(),
            compose: ComposeOptions::default(),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IconDef {
    alias_suffix: String,
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default = "default_foreground")]
    icon_foreground: String,
    #[serde(default = "default_background")]
    icon_background: String,
}

fn default_foreground() -> String {
    "firefox".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

/// An icon definition.
#[derive(Clone, Debug)]
pub struct Icon {
    /// Catalog key.
    pub key: String,
    /// App alias suffix. Not used during conversion.
    pub alias_suffix: String,
    /// Display title.
    pub title: String,
    /// Optional display subtitle.
    pub subtitle: Option<String>,
    /// Foreground name.
    pub foreground: String,
    /// Background name or color.
    pub background: String,
}

/// A converted icon layer.
#[derive(Clone, Debug)]
pub struct Layer {
    /// Layer name, as referenced by icons.
    pub name: String,
    /// Where the layer came from.
    pub source: Source,
    /// Converted SVG document.
    pub svg: String,
}

/// A loaded icons catalog.
#[derive(Clone, Debug)]
pub struct Catalog {
    icons: BTreeMap<String, Icon>,
    foregrounds: BTreeMap<String, Layer>,
    backgrounds: BTreeMap<String, Layer>,
    compose: ComposeOptions,
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path, opt: &Options) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text, opt)
    }

    /// Loads a catalog from a JSON string.
    ///
    /// Every distinct foreground and background is converted exactly once.
    pub fn from_str(text: &str, opt: &Options) -> Result<Self, Error> {
        let defs: BTreeMap<String, IconDef> = serde_json::from_str(text)?;

        let mut catalog = Catalog {
            icons: BTreeMap::new(),
            foregrounds: BTreeMap::new(),
            backgrounds: BTreeMap::new(),
            compose: opt.compose.clone(),
        };

        for (key, def) in defs {
            if !catalog.foregrounds.contains_key(&def.icon_foreground) {
                let source = Source::File(layer_path(opt, "foreground", &def.icon_foreground));
                let layer = load_layer(&def.icon_foreground, source, FOREGROUND_ID_PREFIX, opt)?;
                catalog.foregrounds.insert(def.icon_foreground.clone(), layer);
            }

            if !catalog.backgrounds.contains_key(&def.icon_background) {
                let source = background_source(&def.icon_background, opt)?;
                let layer = load_layer(&def.icon_background, source, BACKGROUND_ID_PREFIX, opt)?;
                catalog.backgrounds.insert(def.icon_background.clone(), layer);
            }

            let icon = Icon {
                key: key.clone(),
                alias_suffix: def.alias_suffix,
                title: def.title,
                subtitle: def.subtitle,
                foreground: def.icon_foreground,
                background: def.icon_background,
            };
            catalog.icons.insert(key, icon);
        }

        log::debug!(
            "Loaded {} icon(s) with {} foreground(s) and {} background(s).",
            catalog.icons.len(),
            catalog.foregrounds.len(),
            catalog.backgrounds.len()
        );

        Ok(catalog)
    }

    /// Returns a foreground by name.
    pub fn foreground(&self, name: &str) -> Result<&Layer, Error> {
        self.foregrounds.get(name).ok_or_else(|| missing("foreground", name))
    }

    /// Returns a background by name or color.
    pub fn background(&self, name: &str) -> Result<&Layer, Error> {
        self.backgrounds.get(name).ok_or_else(|| missing("background", name))
    }

    /// Returns an icon by key.
    pub fn icon(&self, key: &str) -> Result<&Icon, Error> {
        self.icons.get(key).ok_or_else(|| missing("icon", key))
    }

    /// Returns an icon's foreground merged over its background.
    pub fn icon_svg(&self, key: &str) -> Result<String, Error> {
        let icon = self.icon(key)?;
        let fg = self.foreground(&icon.foreground)?;
        let bg = self.background(&icon.background)?;
        Ok(vd2svg::merge_with(&fg.svg, &bg.svg, &self.compose))
    }

    /// Checks that a foreground with the specified name exists.
    pub fn has_foreground(&self, name: &str) -> bool {
        self.foregrounds.contains_key(name)
    }

    /// Checks that a background with the specified name exists.
    pub fn has_background(&self, name: &str) -> bool {
        self.backgrounds.contains_key(name)
    }

    /// Checks that an icon with the specified key exists.
    pub fn has_icon(&self, key: &str) -> bool {
        self.icons.contains_key(key)
    }

    /// Returns all foregrounds, ordered by name.
    pub fn foregrounds(&self) -> impl Iterator<Item = &Layer> {
        self.foregrounds.values()
    }

    /// Returns all backgrounds, ordered by name.
    pub fn backgrounds(&self) -> impl Iterator<Item = &Layer> {
        self.backgrounds.values()
    }

    /// Returns all icons, ordered by key.
    pub fn icons(&self) -> impl Iterator<Item = &Icon> {
        self.icons.values()
    }
}

/// Checks that a string is a `#RRGGBB` color.
pub fn is_solid_color(text: &str) -> bool {
    match text.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

fn background_source(name: &str, opt: &Options) -> Result<Source, Error> {
    if is_solid_color(name) {
        Ok(Source::Solid(name.to_string()))
    } else if name.starts_with('#') {
        Err(Error::InvalidColor(name.to_string()))
    } else {
        Ok(Source::File(layer_path(opt, "background", name)))
    }
}

fn layer_path(opt: &Options, kind: &str, name: &str) -> PathBuf {
    opt.icons_dir.join(kind).join(format!("{}.xml", name))
}

fn load_layer(name: &str, source: Source, id_prefix: &str, opt: &Options) -> Result<Layer, Error> {
    let wopt = WriteOptions {
        id_prefix: Some(id_prefix.to_string()),
        ..WriteOptions::default()
    };

    let svg = source
        .to_svg(&opt.convert, &wopt, &opt.compose)
        .map_err(|e| Error::Convert {
            name: name.to_string(),
            source: e,
        })?;

    Ok(Layer {
        name: name.to_string(),
        source,
        svg,
    })
}

fn missing(kind: &'static str, name: &str) -> Error {
    Error::MissingResource {
        kind,
        name: name.to_string(),
    }
}
