//
// Copyright (c) 2025 Nathan Fiedler
//
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod page;

///
/// A single sellable item shown in the menu grid.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuItem {
    /// Positive identifier, unique within the catalog.
    pub id: u32,
    /// Display name of the item.
    pub name: String,
    /// Price already formatted for display, such as `$3.50`.
    pub price: String,
    /// Pictographic character standing in for a photo of the item.
    pub glyph: String,
}

impl MenuItem {
    pub fn new(id: u32, name: &str, price: &str, glyph: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            price: price.to_owned(),
            glyph: glyph.to_owned(),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MenuItem({}, {}, {})", self.id, self.name, self.price)
    }
}

/// Reasons a set of menu items cannot form a catalog.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CatalogError {
    #[error("menu item identifier must be positive")]
    ZeroId,
    #[error("duplicate menu item identifier: {0}")]
    DuplicateId(u32),
    #[error("menu item {0} has an empty name")]
    EmptyName(u32),
    #[error("menu item {0} has a malformed price: {1}")]
    MalformedPrice(u32, String),
    #[error("menu item {0} has no glyph")]
    MissingGlyph(u32),
}

///
/// Return `true` if the text has the form `$<integer>.<two digits>`.
///
pub fn is_display_price(price: &str) -> bool {
    let Some(amount) = price.strip_prefix('$') else {
        return false;
    };
    match amount.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty()
                && dollars.bytes().all(|b| b.is_ascii_digit())
                && cents.len() == 2
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

///
/// The ordered, immutable list of menu items shown on the page.
///
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    ///
    /// Build a catalog from the given items, preserving their order. Every
    /// item must have a positive and unique identifier, a name, a well-formed
    /// price, and a glyph.
    ///
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<u32> = HashSet::new();
        for item in items.iter() {
            if item.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id));
            }
            if !is_display_price(&item.price) {
                return Err(CatalogError::MalformedPrice(item.id, item.price.clone()));
            }
            if item.glyph.is_empty() {
                return Err(CatalogError::MissingGlyph(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

///
/// A region of the page that can be the target of a navigation scroll.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    Home,
    Menu,
    About,
    Contact,
}

impl Section {
    /// All scroll targets, in page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Menu,
        Section::About,
        Section::Contact,
    ];

    /// The element identifier of the region in the rendered page.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Menu => "menu",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

/// Raised when parsing an identifier that names no known section.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Section::Home),
            "menu" => Ok(Section::Menu),
            "about" => Ok(Section::About),
            "contact" => Ok(Section::Contact),
            _ => Err(UnknownSection(s.to_owned())),
        }
    }
}

/// Pointer events the reservation control responds to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

///
/// Whether the pointer is currently over the reservation control.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub const IDLE_FILL: &'static str = "#f39c12";
    pub const HOVERED_FILL: &'static str = "#e67e22";

    /// Transition to the state that follows the given pointer event.
    pub fn apply(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => HoverState::Hovered,
            PointerEvent::Leave => HoverState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, HoverState::Hovered)
    }

    /// Background color of the reservation control in this state.
    pub fn fill(&self) -> &'static str {
        match self {
            HoverState::Idle => Self::IDLE_FILL,
            HoverState::Hovered => Self::HOVERED_FILL,
        }
    }
}

impl From<bool> for HoverState {
    fn from(active: bool) -> Self {
        if active {
            HoverState::Hovered
        } else {
            HoverState::Idle
        }
    }
}

impl fmt::Display for HoverState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HoverState::Idle => write!(f, "idle"),
            HoverState::Hovered => write!(f, "hovered"),
        }
    }
}
