// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod clippath;
mod converter;
mod options;
mod paint_server;
mod style;
mod vdtree;

pub use options::Options;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Failed to parse an XML data.
    ///
    /// Also returned when elements are nested deeper than 1024 levels,
    /// counting groups added for multiple clip paths.
    ParsingFailed(roxmltree::Error),

    /// Failed to read the input or to write the output file.
    Io(std::io::Error),
}

impl Error {
    /// Checks that the error is caused by a malformed input document.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::NotAnUtf8Str | Error::ParsingFailed(_))
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "VectorDrawable data parsing failed cause {}", e)
            }
            Error::Io(ref e) => {
                write!(f, "I/O error cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::ParsingFailed(ref e) => Some(e),
            Error::Io(ref e) => Some(e),
            Error::NotAnUtf8Str => None,
        }
    }
}

trait OptionLog {
    fn log_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionLog for Option<T> {
    #[inline]
    fn log_none<F: FnOnce()>(self, f: F) -> Self {
        self.or_else(|| {
            f();
            None
        })
    }
}

impl crate::Drawable {
    /// Parses `Drawable` from a VectorDrawable data.
    pub fn from_data(data: &[u8], opt: &Options) -> Result<Self, Error> {
        let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
        Self::from_str(text, opt)
    }

    /// Parses `Drawable` from a VectorDrawable string.
    pub fn from_str(text: &str, opt: &Options) -> Result<Self, Error> {
        let xml_opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };

        let doc =
            roxmltree::Document::parse_with_options(text, xml_opt).map_err(Error::ParsingFailed)?;

        Self::from_xmltree(&doc, opt)
    }

    /// Parses `Drawable` from a `roxmltree::Document`.
    pub fn from_xmltree(doc: &roxmltree::Document, opt: &Options) -> Result<Self, Error> {
        let doc = vdtree::Document::parse_tree(doc)?;
        converter::convert_doc(&doc, opt)
    }
}
