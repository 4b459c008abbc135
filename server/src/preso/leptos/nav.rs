//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::{page, Section};
use crate::domain::usecases::scroll_to_section::{Params, ScrollToSection};
use crate::domain::usecases::UseCase;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::error;
use std::sync::Arc;

fn scroll_to(scroller: &ScrollToSection, section: Section) {
    if let Err(err) = scroller.call(Params::from(section)) {
        error!("scroll to {} failed: {:#}", section, err);
    }
}

#[component]
pub fn NavBar(navbar: page::NavBar, scroller: Arc<ScrollToSection>) -> impl IntoView {
    let links = navbar
        .links
        .into_iter()
        .map(|link| {
            let scroller = scroller.clone();
            let target = link.target;
            view! {
                <a
                    id=link.anchor
                    class="navbar-item"
                    href=format!("#{}", target)
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        scroll_to(&scroller, target);
                    }
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav id=navbar.anchor class="navbar" role="navigation" aria-label="main navigation">
            <div class="navbar-start">{links}</div>
        </nav>
    }
}
