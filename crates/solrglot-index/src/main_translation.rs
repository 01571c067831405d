//! Dedicated main translation copies.

use solrglot_core::{Document, Placement};

/// Suffix appended to the ids of main translation copies.
pub const MAIN_TRANSLATION_ID_SUFFIX: &str = "mt";

/// Copy of `document` for the main-languages endpoint.
///
/// The copy and every nested child get the id suffix and the main-only
/// placement. `document` itself is left untouched.
pub fn derive_main_translation_copy(document: &Document) -> Document {
    let mut copy = document.clone();
    suffix_ids(&mut copy);
    copy.with_placement(Placement::Main)
}

fn suffix_ids(document: &mut Document) {
    document.id.push_str(MAIN_TRANSLATION_ID_SUFFIX);
    for child in &mut document.documents {
        suffix_ids(child);
    }
}
