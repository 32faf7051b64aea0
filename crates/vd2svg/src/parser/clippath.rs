// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use super::converter::Cache;
use super::vdtree::{AId, VdNode};
use crate::ClipPath;

/// Converts a `clip-path` element.
///
/// Every `clip-path` element gets its own ID, even when path data is identical.
pub(crate) fn convert(node: VdNode, cache: &mut Cache) -> Arc<ClipPath> {
    let data: &str = node.attribute(AId::PathData).unwrap_or_default();
    if data.trim().is_empty() {
        log::warn!("Clip path without path data. Everything will be clipped.");
    }

    let clip = Arc::new(ClipPath {
        id: cache.gen_clip_path_id(),
        data: data.to_string(),
    });

    cache.clip_paths.push(clip.clone());
    clip
}
