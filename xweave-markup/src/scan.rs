//! Textual scanners over raw markup.
//!
//! These scans deliberately work on the document text rather than the parsed
//! tree: alias, name, and class declarations are plain attribute patterns,
//! and their document order matters for the generated output.

use lazy_static::lazy_static;
use miette::SourceSpan;
use regex::Regex;
use xweave_model::{CodeBehindIdentity, NamedElement, NamespaceAlias};

use crate::error::{Result, SourceContext};

lazy_static! {
    /// x:Name="MyElementName"
    static ref NAME_RE: Regex = Regex::new(r#"x:Name="([\w]+)""#).unwrap();

    /// xmlns:designerui="clr-namespace:Assets.UI.Views.DesignerUI;assembly=..."
    static ref XMLNS_RE: Regex =
        Regex::new(r#"xmlns:([\w]+)="clr-namespace:([^;"]+)(?:;[^"]*)?""#).unwrap();

    /// x:Class="Assets.UI.Views.DesignerUI.CircleButton"
    static ref CLASS_RE: Regex = Regex::new(r#"x:Class="([^"]+)""#).unwrap();
}

/// Collect a tag name starting at `start`: the run of characters up to the
/// next whitespace, `>`, or `/`.
fn tag_name_at(text: &str, start: usize) -> String {
    text[start..]
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '>' && *c != '/')
        .collect()
}

/// Extract `xmlns:` alias declarations in first-to-last textual order.
///
/// Purely textual; the target namespace is not validated. A document with no
/// alias declarations yields an empty table.
pub(crate) fn scan_aliases(text: &str) -> Vec<NamespaceAlias> {
    XMLNS_RE
        .captures_iter(text)
        .map(|cap| NamespaceAlias::new(&cap[1], &cap[2]))
        .collect()
}

/// Extract `x:Name` declarations in document order.
///
/// Each element's owning tag is recovered by scanning backward from the
/// declaration to the nearest `<` and reading the tag name after it. The
/// returned `resolved_type` starts out as the raw tag; the assembler applies
/// alias substitution.
pub(crate) fn scan_named_elements(ctx: &SourceContext) -> Result<Vec<NamedElement>> {
    let text = ctx.src();
    let mut elements = Vec::new();
    for cap in NAME_RE.captures_iter(text) {
        let whole = cap.get(0).unwrap();
        let Some(lt) = text[..whole.start()].rfind('<') else {
            return Err(ctx.dangling_name_error(
                &cap[1],
                SourceSpan::from((whole.start(), whole.len())),
            ));
        };
        let raw_tag = tag_name_at(text, lt + 1);
        elements.push(NamedElement {
            name: cap[1].to_string(),
            resolved_type: raw_tag.clone(),
            raw_tag,
        });
    }
    Ok(elements)
}

/// Recover the root element's tag name, the base type of the generated class.
pub(crate) fn scan_base_type(ctx: &SourceContext) -> Result<String> {
    let text = ctx.src();
    let Some(lt) = text.find('<') else {
        return Err(ctx.missing_root_error());
    };
    let tag = tag_name_at(text, lt + 1);
    if tag.is_empty() {
        return Err(ctx.malformed_error("empty tag name", SourceSpan::from((lt, 1))));
    }
    Ok(tag)
}

/// Extract the `x:Class` code-behind identity, if declared.
///
/// Markup without a code-behind class is valid and yields `None`. A declared
/// class name with no `.` separator is malformed input.
pub(crate) fn scan_code_behind(ctx: &SourceContext) -> Result<Option<CodeBehindIdentity>> {
    let Some(cap) = CLASS_RE.captures(ctx.src()) else {
        return Ok(None);
    };
    let group = cap.get(1).unwrap();
    match CodeBehindIdentity::from_qualified(group.as_str()) {
        Some(identity) => Ok(Some(identity)),
        None => Err(ctx.unqualified_class_error(
            group.as_str(),
            SourceSpan::from((group.start(), group.len())),
        )),
    }
}
