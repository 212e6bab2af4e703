use swc_common::comments::Comment;

use crate::core::options::KeepMarkers;

/// Verdict for one matched console call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Keep,
    Strip,
}

/// True if any comment text contains any marker.
pub fn should_keep<'c>(
    comments: impl IntoIterator<Item = &'c Comment>,
    markers: &KeepMarkers,
) -> bool {
    comments
        .into_iter()
        .any(|comment| markers.matches(&comment.text))
}

pub fn disposition<'c>(
    comments: impl IntoIterator<Item = &'c Comment>,
    markers: &KeepMarkers,
) -> Disposition {
    if should_keep(comments, markers) {
        Disposition::Keep
    } else {
        Disposition::Strip
    }
}
