//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::sources::Viewport;
use gloo::utils::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

///
/// `Viewport` implementation that delegates smooth scrolling to the browser.
/// Only usable in the browser, never during server-side rendering.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&self, element_id: &str) -> bool {
        match document().get_element_by_id(element_id) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}
