use proptest::prelude::*;
use site_image_optimizer::{
    derive_output_name, is_generated_identifier, savings_percent, slugify, target_dimensions,
    OptimizeOptions,
};

proptest! {
    #[test]
    fn target_dimensions_fit_and_never_enlarge(
        width in 1u32..=8000u32,
        height in 1u32..=8000u32,
        max_width in 1u32..=4000u32,
        max_height in 1u32..=4000u32
    ) {
        let (w, h) = target_dimensions(width, height, max_width, max_height);

        prop_assert!(w >= 1 && h >= 1);
        prop_assert!(w <= max_width && h <= max_height);
        prop_assert!(w <= width && h <= height);
    }

    #[test]
    fn target_dimensions_identity_when_fits(
        width in 1u32..=2000u32,
        height in 1u32..=2000u32
    ) {
        prop_assert_eq!(target_dimensions(width, height, 2000, 2000), (width, height));
    }

    #[test]
    fn generated_identifiers_always_positional(
        id in "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        position in 1usize..1000
    ) {
        prop_assert!(is_generated_identifier(&id));
        prop_assert_eq!(derive_output_name(&id, position), format!("parallax-{}", position));
    }

    #[test]
    fn slugs_are_lowercase_without_whitespace(stem in "[A-Za-z0-9 \t_-]{1,40}") {
        let slug = slugify(&stem);

        prop_assert!(!slug.chars().any(char::is_whitespace));
        prop_assert!(slug.chars().count() <= stem.chars().count());
        prop_assert_eq!(slug.clone(), slug.to_lowercase());
    }

    #[test]
    fn quality_validation(quality in 0u8..=255u8) {
        let result = OptimizeOptions::new(None, None, Some(quality), None);
        prop_assert_eq!(result.is_ok(), (1..=100).contains(&quality));
    }

    #[test]
    fn savings_never_exceed_hundred(original in 1u64..u64::MAX / 2, new in 0u64..u64::MAX / 2) {
        prop_assert!(savings_percent(original, new) <= 100.0);
    }
}
