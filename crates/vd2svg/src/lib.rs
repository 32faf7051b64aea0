// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`vd2svg` is an [Android VectorDrawable](https://developer.android.com/develop/ui/views/graphics/vector-drawable-resources)
to [SVG](https://en.wikipedia.org/wiki/Scalable_Vector_Graphics) converter.

Supports static vectors only: groups, paths, clip paths and linear gradients.
Everything else, like animations or radial gradients, is skipped with a warning.

It also provides a way to compose two SVG documents into a single
app icon, see [`merge`].
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Android color literals.
pub mod color;
mod compose;
mod parser;
mod tree;
mod writer;

use std::path::Path as FilePath;

pub use compose::*;
pub use parser::*;
pub use tree::*;
pub use writer::*;

pub use roxmltree;
pub use strict_num;
pub use tiny_skia_path;

/// Converts a VectorDrawable file into an SVG document.
///
/// When `output` is set, the result is also saved to it using a single write.
pub fn transcode(
    input: &FilePath,
    output: Option<&FilePath>,
    opt: &Options,
    wopt: &WriteOptions,
) -> Result<String, Error> {
    let data = std::fs::read(input)?;
    let drawable = Drawable::from_data(&data, opt)?;
    let svg = drawable.to_string(wopt);

    if let Some(path) = output {
        std::fs::write(path, &svg)?;
        log::info!("Saved SVG to: {}", path.display());
    }

    Ok(svg)
}

/// Converts a VectorDrawable string into an SVG document.
pub fn transcode_str(text: &str, opt: &Options, wopt: &WriteOptions) -> Result<String, Error> {
    let drawable = Drawable::from_str(text, opt)?;
    Ok(drawable.to_string(wopt))
}
