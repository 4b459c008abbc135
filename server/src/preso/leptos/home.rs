//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::data::repositories::MenuRepositoryImpl;
use crate::data::sources::{BrowserViewport, MenuDataSourceImpl};
use crate::domain::entities::page::{self, PageView};
use crate::domain::entities::{Catalog, HoverState, PointerEvent};
use crate::domain::usecases::get_menu::GetMenu;
use crate::domain::usecases::scroll_to_section::ScrollToSection;
use crate::domain::usecases::{NoParams, UseCase};
use crate::preso::leptos::nav;
use crate::preso::leptos::sections::{AboutUs, ContactUs, MenuGrid, PageFooter};
use leptos::prelude::*;
use log::error;
use std::sync::Arc;

// An unusable catalog leaves the menu grid empty rather than failing the page.
fn load_catalog() -> Catalog {
    let source = MenuDataSourceImpl::new();
    let repo = MenuRepositoryImpl::new(Arc::new(source));
    let usecase = GetMenu::new(Box::new(repo));
    match usecase.call(NoParams {}) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("unable to load menu: {:#}", err);
            Catalog::default()
        }
    }
}

///
/// Reactive state of the page: the hover flag, the page view computed from
/// it, and the reserve button fill derived from that view.
///
#[derive(Clone, Copy)]
struct PageState {
    hover: RwSignal<HoverState>,
    page: Memo<PageView>,
    fill: Signal<&'static str>,
}

impl PageState {
    fn new(catalog: Catalog) -> Self {
        let hover = RwSignal::new(HoverState::Idle);
        let page = Memo::new(move |_| PageView::render(&catalog, hover.get()));
        let fill = Signal::derive(move || page.with(|p| p.hero.reserve.fill));
        Self { hover, page, fill }
    }

    fn pointer(&self, event: PointerEvent) {
        self.hover.update(|state| *state = state.apply(event));
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = PageState::new(load_catalog());
    let scroller = Arc::new(ScrollToSection::new(Box::new(BrowserViewport)));
    let current = state.page.get_untracked();

    view! {
        <nav::NavBar navbar=current.navbar scroller />
        <HeroBanner hero=current.hero state />
        <MenuGrid menu=current.menu />
        <AboutUs about=current.about />
        <ContactUs contact=current.contact />
        <PageFooter footer=current.footer />
    }
}

#[component]
fn HeroBanner(hero: page::Hero, state: PageState) -> impl IntoView {
    let fill = state.fill;

    view! {
        <section id=hero.anchor class="hero">
            <h1 id=hero.name.anchor class="hero-title">
                {hero.name.text}
            </h1>
            <p id=hero.tagline.anchor class="hero-tagline">
                {hero.tagline.text}
            </p>
            <button
                id=hero.reserve.anchor
                class="reserve-button"
                style:background-color=move || fill.get()
                on:mouseenter=move |_| state.pointer(PointerEvent::Enter)
                on:mouseleave=move |_| state.pointer(PointerEvent::Leave)
            >
                {hero.reserve.label}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MenuItem;

    #[test]
    fn test_pointer_events_drive_fill() {
        let owner = Owner::new();
        owner.with(|| {
            // arrange
            let catalog = Catalog::new(vec![MenuItem::new(1, "Espresso", "$3.50", "☕")]).unwrap();
            let state = PageState::new(catalog);
            assert_eq!(state.fill.get_untracked(), "#f39c12");
            // act
            state.pointer(PointerEvent::Enter);
            // assert
            assert_eq!(state.hover.get_untracked(), HoverState::Hovered);
            assert_eq!(state.fill.get_untracked(), "#e67e22");
            state.pointer(PointerEvent::Enter);
            assert_eq!(state.fill.get_untracked(), "#e67e22");
            state.pointer(PointerEvent::Leave);
            assert_eq!(state.hover.get_untracked(), HoverState::Idle);
            assert_eq!(state.fill.get_untracked(), "#f39c12");
        });
    }

    #[test]
    fn test_hover_leaves_rest_of_page_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let state = PageState::new(load_catalog());
            let idle = state.page.get_untracked();
            state.pointer(PointerEvent::Enter);
            let hovered = state.page.get_untracked();
            assert_eq!(hovered.hero.reserve.fill, "#e67e22");
            assert_eq!(hovered.menu, idle.menu);
            assert_eq!(hovered.navbar, idle.navbar);
            assert_eq!(hovered.hero.name, idle.hero.name);
        });
    }
}
