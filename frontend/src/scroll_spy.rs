//! Which page section is "active" for the sticky table of contents.
//!
//! Everything here is plain data so it can be tested without a browser. The
//! DOM side lives in `components::scroll_spy`.
//!
//! Rule: a section counts as reached once its top edge is at or above the
//! reference line (scroll position plus the sticky header height). Of the
//! reached sections the lowest one wins. If nothing is reached the previous
//! choice stays.

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// A resolved section and its top edge in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionOffset<'a> {
    pub id: &'a str,
    pub top: f64,
}

pub fn reference_coordinate(scroll_y: f64, header_offset: f64) -> f64 {
    scroll_y + header_offset
}

/// The reached section with the largest top offset. Equal tops go to the one
/// later in document order.
pub fn active_section<'a>(offsets: &[SectionOffset<'a>], reference: f64) -> Option<&'a str> {
    offsets
        .iter()
        .filter(|s| s.top.is_finite() && s.top <= reference)
        .fold(None, |best: Option<&SectionOffset<'a>>, s| match best {
            Some(b) if b.top > s.top => Some(b),
            _ => Some(s),
        })
        .map(|s| s.id)
}

/// Current navigation state. Only ever moves from one section to another,
/// never back to none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Applies one detection result. Returns true if the active id changed.
    pub fn observe(&mut self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(id) if self.current.as_deref() != Some(id) => {
                self.current = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

/// Row of the active entry, for positioning the sliding indicator.
pub fn indicator_index(sections: &[Section], active: Option<&str>) -> Option<usize> {
    let active = active?;
    sections.iter().position(|s| s.id == active)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets<'a>(pairs: &[(&'a str, f64)]) -> Vec<SectionOffset<'a>> {
        pairs
            .iter()
            .map(|&(id, top)| SectionOffset { id, top })
            .collect()
    }

    #[test]
    fn later_reached_section_wins() {
        let sections = offsets(&[("intro", 0.0), ("teams", 800.0), ("schedule", 1600.0)]);
        let reference = reference_coordinate(750.0, 120.0);

        assert_eq!(reference, 870.0);
        assert_eq!(active_section(&sections, reference), Some("teams"));
    }

    #[test]
    fn boundary_is_inclusive() {
        let sections = offsets(&[("intro", 0.0), ("teams", 800.0)]);

        assert_eq!(active_section(&sections, 800.0), Some("teams"));
        assert_eq!(active_section(&sections, 799.5), Some("intro"));
    }

    #[test]
    fn nothing_reached_yields_none() {
        let sections = offsets(&[("intro", 300.0), ("teams", 800.0)]);

        assert_eq!(active_section(&sections, 120.0), None);
        assert_eq!(active_section(&[], 5000.0), None);
    }

    #[test]
    fn largest_top_wins_even_out_of_list_order() {
        let sections = offsets(&[("schedule", 1600.0), ("intro", 0.0), ("teams", 800.0)]);

        assert_eq!(active_section(&sections, 1000.0), Some("teams"));
    }

    #[test]
    fn equal_tops_go_to_the_later_section() {
        let sections = offsets(&[("hotels", 400.0), ("hotel-map", 400.0)]);

        assert_eq!(active_section(&sections, 500.0), Some("hotel-map"));
    }

    #[test]
    fn non_finite_tops_never_qualify() {
        let sections = offsets(&[("intro", 0.0), ("broken", f64::NAN), ("gone", f64::NEG_INFINITY)]);

        assert_eq!(active_section(&sections, 10_000.0), Some("intro"));
    }

    #[test]
    fn missing_sections_are_never_selected() {
        // "matches" is configured but not rendered, so it never gets an offset.
        let configured = [
            Section::new("overview", "Overview"),
            Section::new("matches", "Matches"),
            Section::new("hotels", "Hotels"),
        ];
        let rendered = offsets(&[("overview", 0.0), ("hotels", 900.0)]);

        for y in [0.0, 500.0, 1000.0, 5000.0] {
            let picked = active_section(&rendered, reference_coordinate(y, 120.0));
            assert_ne!(picked, Some("matches"));
            assert!(configured.iter().any(|s| Some(s.id) == picked));
        }
    }

    #[test]
    fn active_section_is_retained_when_nothing_qualifies() {
        let mut state = ActiveSection::default();
        assert_eq!(state.current(), None);

        assert!(!state.observe(None));
        assert_eq!(state.current(), None);

        assert!(state.observe(Some("teams")));
        assert!(!state.observe(None));
        assert_eq!(state.current(), Some("teams"));
    }

    #[test]
    fn observe_reports_only_real_changes() {
        let mut state = ActiveSection::default();

        assert!(state.observe(Some("intro")));
        assert!(!state.observe(Some("intro")));
        assert!(state.observe(Some("teams")));
        assert_eq!(state.current(), Some("teams"));
    }

    #[test]
    fn scrolling_down_then_up_tracks_one_section_at_a_time() {
        let sections = offsets(&[("intro", 200.0), ("teams", 800.0), ("schedule", 1600.0)]);
        let mut state = ActiveSection::default();
        let mut seen = Vec::new();

        for y in [0.0, 100.0, 700.0, 1500.0, 2000.0, 900.0, 150.0, 0.0] {
            let candidate = active_section(&sections, reference_coordinate(y, 120.0));
            if state.observe(candidate) {
                seen.push(state.current().unwrap().to_string());
            }
        }

        assert_eq!(seen, vec!["intro", "teams", "schedule", "teams", "intro"]);
        // Back at the very top nothing is reached any more, "intro" stays.
        assert_eq!(state.current(), Some("intro"));
    }

    #[test]
    fn indicator_follows_list_position() {
        let sections = [
            Section::new("overview", "Overview"),
            Section::new("stadium", "Stadium"),
            Section::new("hotels", "Hotels"),
        ];

        assert_eq!(indicator_index(&sections, Some("hotels")), Some(2));
        assert_eq!(indicator_index(&sections, Some("faq")), None);
        assert_eq!(indicator_index(&sections, None), None);
    }
}
