//! Display glyphs for expense categories, keyed by category id.

const FALLBACK: &str = "•";

pub(crate) fn glyph(category_id: u8) -> &'static str {
    match category_id {
        1 => "🏠",
        2 => "🍴",
        3 => "🚗",
        4 => "📱",
        5 => "💓",
        6 => "👕",
        7 => "💳",
        8 => "📈",
        9 => "🎯",
        _ => FALLBACK,
    }
}

/// Header glyph for the theme toggle: shows the theme a press switches to.
pub(crate) fn theme_toggle(dark: bool) -> &'static str {
    if dark {
        "☀"
    } else {
        "☾"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATALOG;

    #[test]
    fn test_every_category_has_a_glyph() {
        for cat in &CATALOG {
            assert_ne!(glyph(cat.id), FALLBACK, "{}", cat.label);
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(glyph(0), FALLBACK);
        assert_eq!(glyph(42), FALLBACK);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut seen: Vec<&str> = CATALOG.iter().map(|c| glyph(c.id)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), CATALOG.len());
    }
}
