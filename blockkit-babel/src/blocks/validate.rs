//! Post-build compatibility checks.

use super::registry::{registry, Compatibility};
use super::{Deferred, PostBuild, Surface};
use crate::error::RenderError;
use serde_json::Value;
use tracing::debug;

/// Maximum number of elements in a context block.
pub const CONTEXT_ELEMENT_LIMIT: usize = 10;

/// Run scheduled checks in the order they were recorded.
pub fn run_deferred(deferred: &[Deferred]) -> Result<(), RenderError> {
    for entry in deferred {
        match entry.hook {
            PostBuild::Container(surface) => validate_container(surface, &entry.output)?,
            PostBuild::ContextElements => validate_context(entry.surface, &entry.output)?,
        }
    }
    Ok(())
}

fn type_of(value: &Value) -> Result<&str, RenderError> {
    value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| RenderError::MalformedBlock(format!("missing \"type\" in {value}")))
}

/// Check a rendered block list against what `surface` accepts.
pub fn validate_container(surface: Surface, output: &Value) -> Result<(), RenderError> {
    let blocks = output.as_array().ok_or_else(|| {
        RenderError::MalformedBlock(format!("{surface} container did not render to a list"))
    })?;
    let compat = registry().get(surface);

    for block in blocks {
        let kind = type_of(block)?;
        if !compat.blocks.contains(kind) {
            return Err(RenderError::IncompatibleBlock {
                surface,
                kind: kind.to_string(),
            });
        }
        match kind {
            "actions" => validate_actions(surface, compat, block)?,
            "section" => validate_accessory(surface, compat, block)?,
            _ => {}
        }
    }

    debug!(%surface, blocks = blocks.len(), "validated block container");
    Ok(())
}

fn validate_actions(surface: Surface, compat: &Compatibility, block: &Value) -> Result<(), RenderError> {
    let elements = block.get("elements").and_then(Value::as_array);
    for element in elements.into_iter().flatten() {
        let kind = type_of(element)?;
        if !compat.actions.contains(kind) {
            return Err(RenderError::IncompatibleAction {
                surface,
                kind: kind.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_accessory(surface: Surface, compat: &Compatibility, block: &Value) -> Result<(), RenderError> {
    match block.get("accessory") {
        None | Some(Value::Null) => Ok(()),
        Some(accessory) => {
            let kind = type_of(accessory)?;
            if compat.accessories.contains(kind) {
                Ok(())
            } else {
                Err(RenderError::IncompatibleAccessory {
                    surface,
                    kind: kind.to_string(),
                })
            }
        }
    }
}

/// Check a rendered context block rendered inside a `surface` container.
pub fn validate_context(surface: Surface, output: &Value) -> Result<(), RenderError> {
    let elements = output
        .get("elements")
        .and_then(Value::as_array)
        .ok_or_else(|| RenderError::MalformedBlock("context block without elements".to_string()))?;

    if elements.len() > CONTEXT_ELEMENT_LIMIT {
        return Err(RenderError::TooManyElements {
            count: elements.len(),
            limit: CONTEXT_ELEMENT_LIMIT,
        });
    }

    let compat = registry().get(surface);
    for element in elements {
        let kind = type_of(element)?;
        if !compat.context_elements.contains(kind) {
            return Err(RenderError::IncompatibleContextElement {
                surface,
                kind: kind.to_string(),
            });
        }
    }

    debug!(%surface, elements = elements.len(), "validated context block");
    Ok(())
}
