//! File names of covers in the Steam grid directory.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::ItemId;

/// Marker between the app id and the extension; Steam uses it for portrait
/// library covers.
pub const COVER_SUFFIX: char = 'p';

/// Number of trailing URL characters used as the extension.
const EXTENSION_LEN: usize = 4;

/// Builds `<id>p<last four characters of url>`, e.g. `100p.png`.
///
/// Path separators in the tail are replaced so the name always stays
/// inside the cover directory.
#[must_use]
pub fn cover_file_name(item_id: ItemId, url: &str) -> String {
    let tail_start = url
        .char_indices()
        .rev()
        .nth(EXTENSION_LEN - 1)
        .map_or(0, |(idx, _)| idx);

    let extension: String = url[tail_start..]
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    format!("{item_id}{COVER_SUFFIX}{extension}")
}

/// Returns the item id if `name` is an existing cover file (`<id>p.png` or
/// `<id>p.jpg`).
#[must_use]
pub fn parse_cover_file_name(name: &str) -> Option<ItemId> {
    static COVER_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d+)p\.(?:png|jpg)$").expect("Invalid regex"));

    let captures = COVER_RE.captures(name)?;
    captures.get(1)?.as_str().parse().ok()
}
