//
// Copyright (c) 2025 Nathan Fiedler
//
use crate::domain::entities::page::{self, classes};
use leptos::prelude::*;

#[component]
pub fn MenuGrid(menu: page::MenuSection) -> impl IntoView {
    let cards = menu
        .cards
        .into_iter()
        .map(|card| view! { <MenuItemCard card /> })
        .collect_view();

    view! {
        <section id=menu.anchor class="menu-section">
            <h2 class="section-title">{menu.heading}</h2>
            <div id=menu.container class="menu-grid">
                {cards}
            </div>
        </section>
    }
}

#[component]
fn MenuItemCard(card: page::MenuCard) -> impl IntoView {
    view! {
        <div class=classes::MENU_ITEM>
            <div class=classes::MENU_ITEM_IMAGE>{card.glyph}</div>
            <h3 class=classes::MENU_ITEM_NAME>{card.name}</h3>
            <p class=classes::MENU_ITEM_PRICE>{card.price}</p>
        </div>
    }
}

#[component]
pub fn AboutUs(about: page::AboutSection) -> impl IntoView {
    view! {
        <section id=about.anchor class="about-section">
            <h2 class="section-title">{about.heading}</h2>
            <div id=about.text.anchor class="about-text">
                {about.text.text}
            </div>
        </section>
    }
}

#[component]
pub fn ContactUs(contact: page::ContactSection) -> impl IntoView {
    view! {
        <section id=contact.anchor class="contact-section">
            <h2 class="section-title">{contact.heading}</h2>
            <div class="contact-details">
                <p>
                    <strong>"Email:"</strong>
                    " "
                    <span id=contact.email.anchor>{contact.email.text}</span>
                </p>
                <p>
                    <strong>"Phone:"</strong>
                    " "
                    <span id=contact.phone.anchor>{contact.phone.text}</span>
                </p>
                <p class="contact-address">{contact.address}</p>
            </div>
        </section>
    }
}

#[component]
pub fn PageFooter(footer: page::Footer) -> impl IntoView {
    view! {
        <footer id=footer.anchor class="footer">
            <p id=footer.copyright.anchor>{footer.copyright.text}</p>
        </footer>
    }
}
