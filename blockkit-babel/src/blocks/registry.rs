//! Which block and element types each surface accepts.

use super::Surface;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const LAYOUT_BLOCKS: &[&str] = &["actions", "context", "divider", "header", "image", "section"];

const INTERACTIVE_ELEMENTS: &[&str] = &[
    "button",
    "static_select",
    "external_select",
    "users_select",
    "conversations_select",
    "channels_select",
    "overflow",
    "datepicker",
    "radio_buttons",
    "checkboxes",
];

/// Interactive elements only a home tab can host.
const HOME_ONLY_ELEMENTS: &[&str] = &["radio_buttons", "checkboxes"];

const CONTEXT_ELEMENTS: &[&str] = &["image", "mrkdwn", "plain_text"];

/// Element types that collect user input; a context only takes them in a modal.
pub const INPUT_ELEMENTS: &[&str] = &["plain_text_input", "input"];

/// Accepted types for one surface.
#[derive(Debug, Clone, Default)]
pub struct Compatibility {
    pub blocks: HashSet<&'static str>,
    pub actions: HashSet<&'static str>,
    pub accessories: HashSet<&'static str>,
    pub context_elements: HashSet<&'static str>,
}

impl Compatibility {
    fn new(surface: Surface) -> Self {
        let mut blocks: HashSet<_> = LAYOUT_BLOCKS.iter().copied().collect();
        let mut context_elements: HashSet<_> = CONTEXT_ELEMENTS.iter().copied().collect();
        match surface {
            Surface::Message => {
                blocks.insert("file");
            }
            Surface::Modal => {
                blocks.insert("input");
                context_elements.extend(INPUT_ELEMENTS);
            }
            Surface::Home => {}
        }

        let actions: HashSet<_> = INTERACTIVE_ELEMENTS
            .iter()
            .copied()
            .filter(|kind| surface == Surface::Home || !HOME_ONLY_ELEMENTS.contains(kind))
            .collect();
        let mut accessories = actions.clone();
        accessories.insert("image");

        Self {
            blocks,
            actions,
            accessories,
            context_elements,
        }
    }
}

/// Compatibility table for every surface, built once.
#[derive(Debug)]
pub struct CompatibilityRegistry {
    surfaces: HashMap<Surface, Compatibility>,
}

impl CompatibilityRegistry {
    fn build() -> Self {
        let surfaces = [Surface::Message, Surface::Modal, Surface::Home]
            .into_iter()
            .map(|surface| (surface, Compatibility::new(surface)))
            .collect();
        Self { surfaces }
    }

    pub fn get(&self, surface: Surface) -> &Compatibility {
        // Every variant is inserted by `build`.
        &self.surfaces[&surface]
    }
}

static REGISTRY: Lazy<CompatibilityRegistry> = Lazy::new(CompatibilityRegistry::build);

pub fn registry() -> &'static CompatibilityRegistry {
    &REGISTRY
}
