//! Single-trigger commands: fire one binding and return its rendered slot.

use anyhow::Context;
use yta_bridge::bindings::{analyzer_bindings, ids};
use yta_bridge::{FormBridge, MemoryPage, Transport};

/// An analyzer page with every element present, seeded with `values`.
pub fn analyzer_page(values: &[(&str, &str)]) -> MemoryPage {
    let page = MemoryPage::new();
    for id in ids::ALL {
        page.insert(id, "");
    }
    for (id, value) in values {
        page.insert(id, value);
    }
    page
}

/// A bridge over `page` with the full analyzer binding table registered.
pub fn analyzer_bridge<T: Transport>(page: MemoryPage, transport: T) -> FormBridge<MemoryPage, T> {
    let mut bridge = FormBridge::new(page, transport);
    for binding in analyzer_bindings() {
        bridge.register(binding);
    }
    bridge
}

/// Fire `trigger_id` against a page seeded with `values`.
///
/// Returns the text rendered into the binding's output slot.
pub async fn run_trigger<T: Transport>(
    transport: T,
    trigger_id: &str,
    values: &[(&str, &str)],
) -> anyhow::Result<String> {
    let page = analyzer_page(values);
    let bridge = analyzer_bridge(page.clone(), transport);
    let binding = bridge
        .binding(trigger_id)
        .with_context(|| format!("no analyzer action bound to `{trigger_id}`"))?;

    bridge
        .fire(trigger_id)
        .await
        .into_result()
        .with_context(|| format!("{} request failed", binding.endpoint))?;

    Ok(page.text(&binding.output.element_id).unwrap_or_default())
}
