// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Processing options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Canvas size to assume when neither `viewportWidth`/`viewportHeight`
    /// nor `width`/`height` are set.
    ///
    /// Default: 438
    pub default_size: f32,
}

impl Default for Options {
    fn default() -> Options {
        Options { default_size: 438.0 }
    }
}
