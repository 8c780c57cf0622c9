//! Event-binding extraction over the parsed markup tree.

use xweave_markup::{MarkupNode, MarkupTree};
use xweave_model::{EventBinding, NamespaceAlias, substitute_alias};

use crate::{
    adapters::TypeRegistry,
    error::{Error, Result},
};

/// Reserved prefix for markup metadata nodes.
const META_PREFIX: &str = "x:";

struct ExtractContext<'a> {
    aliases: &'a [NamespaceAlias],
    registry: &'a dyn TypeRegistry,
    default_namespace: &'a str,
    source_path: &'a str,
}

/// Walk the tree in pre-order and collect declared event bindings.
///
/// Property-element nodes (`Grid.Resources` under `Grid`) and metadata nodes
/// (`x:...`) contribute no bindings of their own but their children are
/// still traversed. Every other node's type must resolve in the registry;
/// a miss is fatal, since bindings cannot be safely determined for it.
pub(crate) fn extract_events(
    tree: &MarkupTree,
    aliases: &[NamespaceAlias],
    registry: &dyn TypeRegistry,
    default_namespace: &str,
    source_path: &str,
) -> Result<Vec<EventBinding>> {
    let ctx = ExtractContext {
        aliases,
        registry,
        default_namespace,
        source_path,
    };
    let mut bindings = Vec::new();
    visit(&tree.root, None, &ctx, &mut bindings)?;
    Ok(bindings)
}

fn visit(
    node: &MarkupNode,
    parent_tag: Option<&str>,
    ctx: &ExtractContext<'_>,
    bindings: &mut Vec<EventBinding>,
) -> Result<()> {
    if !is_property_element(&node.tag, parent_tag) && !node.tag.starts_with(META_PREFIX) {
        collect_node_bindings(node, ctx, bindings)?;
    }
    for child in &node.children {
        visit(child, Some(&node.tag), ctx, bindings)?;
    }
    Ok(())
}

/// Property-element syntax: a node named `Owner.Property` nested under
/// `Owner` is a property value, not a distinct typed element.
fn is_property_element(tag: &str, parent_tag: Option<&str>) -> bool {
    parent_tag.is_some_and(|parent| {
        tag.strip_prefix(parent).is_some_and(|rest| rest.starts_with('.'))
    })
}

fn collect_node_bindings(
    node: &MarkupNode,
    ctx: &ExtractContext<'_>,
    bindings: &mut Vec<EventBinding>,
) -> Result<()> {
    let resolved = substitute_alias(&node.tag, ctx.aliases);
    // An unsubstituted tag belongs to the toolkit's default namespace; the
    // binding still records the short name, which compiles under the
    // generated `using`.
    let lookup = if resolved == node.tag {
        format!("{}.{}", ctx.default_namespace, resolved)
    } else {
        resolved.clone()
    };
    let Some(handle) = ctx.registry.resolve(&lookup) else {
        return Err(Box::new(Error::UnknownType {
            tag: node.tag.clone(),
            resolved: lookup,
            path: ctx.source_path.to_string(),
        }));
    };

    for attr in &node.attributes {
        if ctx.registry.has_event(&handle, &attr.name) {
            bindings.push(EventBinding {
                owner_type: resolved.clone(),
                event: attr.name.clone(),
                handler: attr.value.clone(),
            });
        }
    }
    Ok(())
}
