//
// Copyright (c) 2025 Nathan Fiedler
//

//! View model of the café page, computed from the catalog and hover state.

use super::{Catalog, HoverState, Section};

/// Element identifiers that external test drivers rely upon.
pub mod anchors {
    pub const NAVBAR: &str = "navbar";
    pub const HOME: &str = "home";
    pub const MENU: &str = "menu";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
    pub const FOOTER: &str = "footer";
    pub const NAV_HOME: &str = "nav-home";
    pub const NAV_MENU: &str = "nav-menu";
    pub const NAV_ABOUT: &str = "nav-about";
    pub const NAV_CONTACT: &str = "nav-contact";
    pub const CAFE_NAME: &str = "cafe-name";
    pub const TAGLINE: &str = "tagline";
    pub const RESERVE_BUTTON: &str = "reserve-button";
    pub const MENU_CONTAINER: &str = "menu-container";
    pub const ABOUT_TEXT: &str = "about-text";
    pub const CONTACT_EMAIL: &str = "contact-email";
    pub const CONTACT_PHONE: &str = "contact-phone";
    pub const COPYRIGHT_TEXT: &str = "copyright-text";

    /// Every identifier, each of which appears exactly once per page.
    pub const ALL: [&str; 18] = [
        NAVBAR,
        NAV_HOME,
        NAV_MENU,
        NAV_ABOUT,
        NAV_CONTACT,
        HOME,
        CAFE_NAME,
        TAGLINE,
        RESERVE_BUTTON,
        MENU,
        MENU_CONTAINER,
        ABOUT,
        ABOUT_TEXT,
        CONTACT,
        CONTACT_EMAIL,
        CONTACT_PHONE,
        FOOTER,
        COPYRIGHT_TEXT,
    ];
}

/// Class markers shared by every card in the menu grid.
pub mod classes {
    pub const MENU_ITEM: &str = "menu-item";
    pub const MENU_ITEM_IMAGE: &str = "menu-item-image";
    pub const MENU_ITEM_NAME: &str = "menu-item-name";
    pub const MENU_ITEM_PRICE: &str = "menu-item-price";
}

pub const CAFE_NAME: &str = "Brew & Bite Café";
pub const TAGLINE: &str = "Where Every Sip Tells a Story";
pub const RESERVE_LABEL: &str = "Reserve Table";
pub const MENU_HEADING: &str = "Our Menu";
pub const ABOUT_HEADING: &str = "About Us";
pub const CONTACT_HEADING: &str = "Contact Us";
pub const ABOUT_TEXT: &str = "Welcome to Brew & Bite Café, where passion meets perfection in \
    every cup and every bite. Established in 2024, we are a trendy urban café dedicated to \
    serving exceptional coffee and delicious food in a warm, inviting atmosphere. Our expert \
    baristas craft each beverage with precision, using only the finest ethically-sourced beans \
    from around the world. From our signature espresso blends to our artisanal pastries and \
    wholesome meals, every item on our menu is prepared with love and attention to detail. We \
    believe in creating more than just a café – we're building a community space where friends \
    gather, ideas flourish, and memories are made over great food and exceptional coffee.";
pub const CONTACT_EMAIL: &str = "info@brewandbitecafe.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const ADDRESS: &str = "Visit us at 123 Coffee Street, Downtown City";
pub const COPYRIGHT: &str = "© 2024 Brew & Bite Café. All rights reserved.";

/// A piece of text addressed by a stable element identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Labeled {
    pub anchor: &'static str,
    pub text: String,
}

impl Labeled {
    fn new(anchor: &'static str, text: &str) -> Self {
        Self {
            anchor,
            text: text.to_owned(),
        }
    }
}

/// Navigation control that scrolls to a section when clicked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: String,
    pub target: Section,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavBar {
    pub anchor: &'static str,
    pub links: Vec<NavLink>,
}

/// The reservation control, whose fill follows the hover state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveButton {
    pub anchor: &'static str,
    pub label: String,
    pub fill: &'static str,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hero {
    pub anchor: &'static str,
    pub name: Labeled,
    pub tagline: Labeled,
    pub reserve: ReserveButton,
}

/// One card in the menu grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuCard {
    /// Catalog identifier, used as the rendering key.
    pub key: u32,
    pub name: String,
    pub price: String,
    pub glyph: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuSection {
    pub anchor: &'static str,
    pub heading: String,
    pub container: &'static str,
    pub cards: Vec<MenuCard>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AboutSection {
    pub anchor: &'static str,
    pub heading: String,
    pub text: Labeled,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactSection {
    pub anchor: &'static str,
    pub heading: String,
    pub email: Labeled,
    pub phone: Labeled,
    pub address: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Footer {
    pub anchor: &'static str,
    pub copyright: Labeled,
}

///
/// Everything the page displays, in document order.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageView {
    pub navbar: NavBar,
    pub hero: Hero,
    pub menu: MenuSection,
    pub about: AboutSection,
    pub contact: ContactSection,
    pub footer: Footer,
}

impl PageView {
    ///
    /// Compute the page for the given catalog and hover state. Cards follow
    /// the catalog order exactly; only the reserve button fill depends on the
    /// hover state.
    ///
    pub fn render(catalog: &Catalog, hover: HoverState) -> Self {
        let links = vec![
            nav_link(anchors::NAV_HOME, "Home", Section::Home),
            nav_link(anchors::NAV_MENU, "Menu", Section::Menu),
            nav_link(anchors::NAV_ABOUT, "About Us", Section::About),
            nav_link(anchors::NAV_CONTACT, "Contact", Section::Contact),
        ];
        let cards = catalog
            .items()
            .iter()
            .map(|item| MenuCard {
                key: item.id,
                name: item.name.clone(),
                price: item.price.clone(),
                glyph: item.glyph.clone(),
            })
            .collect();
        Self {
            navbar: NavBar {
                anchor: anchors::NAVBAR,
                links,
            },
            hero: Hero {
                anchor: Section::Home.anchor(),
                name: Labeled::new(anchors::CAFE_NAME, CAFE_NAME),
                tagline: Labeled::new(anchors::TAGLINE, TAGLINE),
                reserve: ReserveButton {
                    anchor: anchors::RESERVE_BUTTON,
                    label: RESERVE_LABEL.to_owned(),
                    fill: hover.fill(),
                },
            },
            menu: MenuSection {
                anchor: Section::Menu.anchor(),
                heading: MENU_HEADING.to_owned(),
                container: anchors::MENU_CONTAINER,
                cards,
            },
            about: AboutSection {
                anchor: Section::About.anchor(),
                heading: ABOUT_HEADING.to_owned(),
                text: Labeled::new(anchors::ABOUT_TEXT, ABOUT_TEXT),
            },
            contact: ContactSection {
                anchor: Section::Contact.anchor(),
                heading: CONTACT_HEADING.to_owned(),
                email: Labeled::new(anchors::CONTACT_EMAIL, CONTACT_EMAIL),
                phone: Labeled::new(anchors::CONTACT_PHONE, CONTACT_PHONE),
                address: ADDRESS.to_owned(),
            },
            footer: Footer {
                anchor: anchors::FOOTER,
                copyright: Labeled::new(anchors::COPYRIGHT_TEXT, COPYRIGHT),
            },
        }
    }
}

fn nav_link(anchor: &'static str, label: &str, target: Section) -> NavLink {
    NavLink {
        anchor,
        label: label.to_owned(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MenuItem;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            MenuItem::new(3, "Avocado Toast", "$8.99", "🥑"),
            MenuItem::new(1, "Espresso", "$3.50", "☕"),
            MenuItem::new(2, "Espresso", "$3.50", "☕"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_keeps_catalog_order() {
        let page = PageView::render(&catalog(), HoverState::Idle);
        let keys: Vec<u32> = page.menu.cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
        // same-named entries are not merged
        assert_eq!(page.menu.cards[1].name, page.menu.cards[2].name);
        assert_eq!(page.menu.cards[0].glyph, "🥑");
    }

    #[test]
    fn test_render_idempotent() {
        let catalog = catalog();
        let first = PageView::render(&catalog, HoverState::Hovered);
        let second = PageView::render(&catalog, HoverState::Hovered);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hover_changes_only_fill() {
        let catalog = catalog();
        let idle = PageView::render(&catalog, HoverState::Idle);
        let hovered = PageView::render(&catalog, HoverState::Hovered);
        assert_eq!(idle.hero.reserve.fill, "#f39c12");
        assert_eq!(hovered.hero.reserve.fill, "#e67e22");
        let mut patched = hovered.clone();
        patched.hero.reserve.fill = idle.hero.reserve.fill;
        assert_eq!(patched, idle);
    }

    #[test]
    fn test_nav_links_target_sections() {
        let page = PageView::render(&catalog(), HoverState::Idle);
        let targets: Vec<Section> = page.navbar.links.iter().map(|l| l.target).collect();
        assert_eq!(targets, Section::ALL.to_vec());
        for link in page.navbar.links.iter() {
            assert_eq!(link.anchor, format!("nav-{}", link.target));
        }
    }
}
