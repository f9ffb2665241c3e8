use crate::event::pattern::Patterns;
use crate::event::record::Tags;
use tracing::warn;

/// Split a "[S/E W]" tag block into distance, difficulty and wet.
///
/// An empty or malformed block gives all-empty fields; a missing tag is a
/// valid state, not an error.
pub fn decompose_tags(patterns: &Patterns, raw_tags: &str) -> Tags {
    if raw_tags.is_empty() {
        return Tags::default();
    }

    let Some(caps) = patterns.tag.captures(raw_tags) else {
        warn!(raw_tags, "tag block does not match [distance/difficulty W], ignoring");
        return Tags::default();
    };

    let field = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    Tags {
        distance: field("distance"),
        difficulty: field("difficulty"),
        wet: field("wet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(distance: &str, difficulty: &str, wet: &str) -> Tags {
        Tags {
            distance: distance.into(),
            difficulty: difficulty.into(),
            wet: wet.into(),
        }
    }

    #[test]
    fn decomposes_distance_difficulty_and_wet() {
        let p = Patterns::compile().unwrap();
        assert_eq!(decompose_tags(&p, "[S/E]"), tags("S", "E", ""));
        assert_eq!(decompose_tags(&p, "[M/M W]"), tags("M", "M", "W"));
        assert_eq!(decompose_tags(&p, "[L/RW]"), tags("L", "R", "W"));
    }

    #[test]
    fn empty_sentinel_stays_empty() {
        let p = Patterns::compile().unwrap();
        assert_eq!(decompose_tags(&p, ""), Tags::default());
        assert_eq!(decompose_tags(&p, ""), tags("", "", ""));
    }

    #[test]
    fn malformed_block_defaults_instead_of_failing() {
        let p = Patterns::compile().unwrap();
        assert_eq!(decompose_tags(&p, "[Q/E]"), Tags::default());
        assert_eq!(decompose_tags(&p, "[overnight]"), Tags::default());
        assert_eq!(decompose_tags(&p, "[]"), Tags::default());
    }
}
