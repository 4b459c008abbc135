//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::Section;
use crate::domain::sources::Viewport;
use anyhow::Error;
use log::{debug, warn};
use std::cmp;
use std::fmt;

///
/// Smoothly scroll the page so that the named section is at the top of the
/// viewport. Identifiers that do not name a rendered section are ignored.
///
pub struct ScrollToSection {
    viewport: Box<dyn Viewport>,
}

impl ScrollToSection {
    pub fn new(viewport: Box<dyn Viewport>) -> Self {
        Self { viewport }
    }
}

impl super::UseCase<Option<Section>, Params> for ScrollToSection {
    fn call(&self, params: Params) -> Result<Option<Section>, Error> {
        let section = match params.section_id.parse::<Section>() {
            Ok(section) => section,
            Err(err) => {
                debug!("ignoring scroll request: {}", err);
                return Ok(None);
            }
        };
        debug!("scrolling to section {}", section);
        if self.viewport.scroll_into_view(section.anchor()) {
            Ok(Some(section))
        } else {
            warn!("section {} is not rendered", section);
            Ok(None)
        }
    }
}

pub struct Params {
    /// Identifier of the section to be scrolled into view.
    section_id: String,
}

impl Params {
    pub fn new<S: Into<String>>(section_id: S) -> Self {
        Self {
            section_id: section_id.into(),
        }
    }
}

impl From<Section> for Params {
    fn from(section: Section) -> Self {
        Self::new(section.anchor())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params({})", self.section_id)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.section_id == other.section_id
    }
}

impl cmp::Eq for Params {}
