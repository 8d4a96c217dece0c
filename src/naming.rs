use crate::constants::{GENERATED_ID_LEN, GENERATED_NAME_PREFIX};
use std::collections::HashSet;

/// Derives the output file stem for the job at 1-based `position`.
///
/// Stems that look like generated identifiers (36 hex digits and hyphens)
/// carry no meaning for a reader, so they become `parallax-<position>`.
/// Every other stem is lower-cased with whitespace runs collapsed to `-`.
///
/// # Example
/// ```
/// use site_image_optimizer::derive_output_name;
///
/// assert_eq!(
///     derive_output_name("3f2a9c1e-7b4d-4e2f-9a6b-1c0d5e8f7a2b", 2),
///     "parallax-2"
/// );
/// assert_eq!(derive_output_name("Board Of  Directors", 1), "board-of-directors");
/// ```
pub fn derive_output_name(file_stem: &str, position: usize) -> String {
    if is_generated_identifier(file_stem) {
        format!("{}-{}", GENERATED_NAME_PREFIX, position)
    } else {
        slugify(file_stem)
    }
}

pub fn is_generated_identifier(stem: &str) -> bool {
    stem.len() == GENERATED_ID_LEN && stem.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

/// Lower-cases `stem` and replaces each run of whitespace with a single hyphen.
pub fn slugify(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    let mut in_whitespace = false;

    for c in stem.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// Returns `name`, or `name-2`, `name-3`, ... when earlier jobs already
/// claimed it. `taken` is updated with the returned value.
pub fn claim_unique_name(name: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.clone()) {
        return name;
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", name, suffix);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}
