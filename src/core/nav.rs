//! # Navigation State
//!
//! Tracks which page (unit) is current, which theme/part sections are
//! expanded, which conversation sections are collapsed, and what is
//! highlighted. All mutation goes through the transitions defined here;
//! the rendering layer derives visual styles from this state, never the
//! reverse.
//!
//! The state serializes to and from a [`Location`] — the small set of
//! optional integer parameters (`unit`, `topic`, `part`) used for
//! deep-linking. Only the focused path is encoded: expansions that
//! accumulated from unrelated toggles are deliberately not preserved by
//! a round trip.

use std::collections::HashSet;
use std::fmt;

use crate::content::Curriculum;

/// Transient visual emphasis on the most recently focused element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Unit(u32),
    Part(u32, u32, u32),
}

/// The deep-link descriptor, in query-string form: `unit=2&topic=1&part=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub unit: Option<u32>,
    pub topic: Option<u32>,
    pub part: Option<u32>,
}

impl Location {
    /// Parse a query string. Unknown keys and malformed values are
    /// ignored — a bad deep link degrades to a plain startup.
    pub fn parse(query: &str) -> Self {
        let mut loc = Location::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Ok(value) = value.parse::<u32>() else {
                continue;
            };
            match key {
                "unit" => loc.unit = Some(value),
                "topic" => loc.topic = Some(value),
                "part" => loc.part = Some(value),
                _ => {}
            }
        }
        loc
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_none() && self.topic.is_none() && self.part.is_none()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (key, value) in [
            ("unit", self.unit),
            ("topic", self.topic),
            ("part", self.part),
        ] {
            if let Some(v) = value {
                write!(f, "{sep}{key}={v}")?;
                sep = "&";
            }
        }
        Ok(())
    }
}

pub struct NavState {
    /// 1-based index into the unit list (not a unit id).
    pub current_page: usize,
    pub expanded_themes: HashSet<(u32, u32)>,
    pub expanded_parts: HashSet<(u32, u32, u32)>,
    /// Conversation sections start expanded, so collapse is what we track.
    pub collapsed_sections: HashSet<(u32, u32, u32, usize)>,
    pub highlight: Option<Highlight>,
    /// Theme focus recorded by `focus_theme`, emitted as `topic` in the
    /// location. Cleared whenever focus moves to a bare unit or page.
    focused_theme: Option<(u32, u32)>,
}

impl NavState {
    /// Initial state for a loaded tree: first page, all themes expanded,
    /// all parts collapsed, nothing highlighted.
    pub fn new(tree: &Curriculum) -> Self {
        let expanded_themes = tree
            .units
            .iter()
            .flat_map(|u| u.themes.iter().map(move |t| (u.id, t.id)))
            .collect();
        Self {
            current_page: 1,
            expanded_themes,
            expanded_parts: HashSet::new(),
            collapsed_sections: HashSet::new(),
            highlight: None,
            focused_theme: None,
        }
    }

    /// Switch to the given 1-based page, dropping any focus.
    ///
    /// Assumes pre-validated input: callers check `page ∈ [1, N]` first.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
        self.highlight = None;
        self.focused_theme = None;
    }

    /// Focus a unit by id: jump to its page and highlight it. An id not
    /// present in the tree is a silent no-op.
    pub fn focus_unit(&mut self, tree: &Curriculum, unit_id: u32) {
        let Some(page) = tree.page_of_unit(unit_id) else {
            return;
        };
        self.current_page = page;
        self.highlight = Some(Highlight::Unit(unit_id));
        self.focused_theme = None;
    }

    /// Focus a theme: focus its unit, then make sure the theme is
    /// expanded. The insert is idempotent — an already-expanded theme is
    /// never collapsed as a side effect.
    pub fn focus_theme(&mut self, tree: &Curriculum, unit_id: u32, theme_id: u32) {
        if tree.page_of_unit(unit_id).is_none() {
            return;
        }
        self.focus_unit(tree, unit_id);
        self.expanded_themes.insert((unit_id, theme_id));
        self.focused_theme = Some((unit_id, theme_id));
    }

    /// Focus a part: focus its theme, expand the part, highlight it.
    pub fn focus_part(&mut self, tree: &Curriculum, unit_id: u32, theme_id: u32, part_id: u32) {
        if tree.page_of_unit(unit_id).is_none() {
            return;
        }
        self.focus_theme(tree, unit_id, theme_id);
        self.expanded_parts.insert((unit_id, theme_id, part_id));
        self.highlight = Some(Highlight::Part(unit_id, theme_id, part_id));
    }

    pub fn toggle_theme(&mut self, unit_id: u32, theme_id: u32) {
        let key = (unit_id, theme_id);
        if !self.expanded_themes.remove(&key) {
            self.expanded_themes.insert(key);
        }
    }

    pub fn toggle_part(&mut self, unit_id: u32, theme_id: u32, part_id: u32) {
        let key = (unit_id, theme_id, part_id);
        if !self.expanded_parts.remove(&key) {
            self.expanded_parts.insert(key);
        }
    }

    pub fn toggle_section(&mut self, unit_id: u32, theme_id: u32, part_id: u32, section: usize) {
        let key = (unit_id, theme_id, part_id, section);
        if !self.collapsed_sections.remove(&key) {
            self.collapsed_sections.insert(key);
        }
    }

    pub fn is_theme_expanded(&self, unit_id: u32, theme_id: u32) -> bool {
        self.expanded_themes.contains(&(unit_id, theme_id))
    }

    pub fn is_part_expanded(&self, unit_id: u32, theme_id: u32, part_id: u32) -> bool {
        self.expanded_parts.contains(&(unit_id, theme_id, part_id))
    }

    pub fn is_section_collapsed(
        &self,
        unit_id: u32,
        theme_id: u32,
        part_id: u32,
        section: usize,
    ) -> bool {
        self.collapsed_sections
            .contains(&(unit_id, theme_id, part_id, section))
    }

    /// Serialize the current focus as a deep-link location.
    ///
    /// `unit` reflects the current page; `topic` is present only under a
    /// theme or part focus, `part` only under a part focus.
    pub fn to_location(&self, tree: &Curriculum) -> Location {
        if let Some(Highlight::Part(u, t, p)) = self.highlight {
            return Location {
                unit: Some(u),
                topic: Some(t),
                part: Some(p),
            };
        }
        Location {
            unit: tree.unit_at_page(self.current_page).map(|u| u.id),
            topic: self.focused_theme.map(|(_, t)| t),
            part: None,
        }
    }

    /// Reconstruct focus from a location, unit → topic → part, each step
    /// conditional on the presence of the next-finer parameter. A unit id
    /// outside the tree leaves the state unchanged.
    pub fn apply_location(&mut self, tree: &Curriculum, loc: &Location) {
        let Some(unit) = loc.unit else {
            return;
        };
        if tree.page_of_unit(unit).is_none() {
            return;
        }
        match (loc.topic, loc.part) {
            (Some(topic), Some(part)) => self.focus_part(tree, unit, topic, part),
            (Some(topic), None) => self.focus_theme(tree, unit, topic),
            _ => self.focus_unit(tree, unit),
        }
    }
}
