//! Lightweight markup tree parser.
//!
//! A purpose-built recursive-descent parser over the constrained dialect:
//! one root element, nested elements with quoted attributes, XML prolog,
//! comments, doctype, and CDATA sections (skipped), character data (ignored).
//! Tag and attribute names are case-preserving; attribute values are taken
//! raw, with no entity expansion.

use crate::error::{Result, SourceContext};

/// One attribute on a markup node, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element node in the parsed markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    /// The tag exactly as written, including any alias prefix or
    /// property-element dot (e.g. `ui:Circle`, `Grid.Resources`).
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<MarkupNode>,
}

/// A parsed markup document: the root element and everything below it.
///
/// The tree itself stands in for the synthetic document wrapper; traversals
/// start at [`MarkupTree::root`], which is a real element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupTree {
    pub root: MarkupNode,
}

pub(crate) fn parse_tree(ctx: &SourceContext) -> Result<MarkupTree> {
    Parser {
        ctx,
        text: ctx.src(),
        pos: 0,
    }
    .parse_document()
}

struct Parser<'a> {
    ctx: &'a SourceContext,
    text: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Skip to just past `marker`, or fail with an unexpected-end error.
    fn skip_past(&mut self, marker: &str, expected: &str) -> Result<()> {
        match self.rest().find(marker) {
            Some(idx) => {
                self.pos += idx + marker.len();
                Ok(())
            }
            None => Err(self.ctx.unexpected_end_error(expected, self.text.len())),
        }
    }

    /// Skip whitespace, comments, prolog, and doctype between elements.
    fn skip_misc(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.rest().starts_with("<!--") {
                self.skip_past("-->", "end of comment")?;
            } else if self.rest().starts_with("<?") {
                self.skip_past("?>", "end of processing instruction")?;
            } else if self.rest().starts_with("<!") {
                self.skip_past(">", "end of doctype declaration")?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_document(mut self) -> Result<MarkupTree> {
        self.skip_misc()?;
        if self.peek() != Some('<') {
            return Err(self.ctx.missing_root_error());
        }
        let root = self.parse_element()?;
        self.skip_misc()?;
        if !self.at_end() {
            return Err(self
                .ctx
                .malformed_error("unexpected content after root element", (self.pos, 1).into()));
        }
        Ok(MarkupTree { root })
    }

    /// Read a tag name: the run of characters up to whitespace, `>`, or `/`.
    fn read_tag_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '>' || c == '/' {
                break;
            }
            name.push(c);
            self.bump();
        }
        name
    }

    /// Parse one element; `self.pos` is on its `<`.
    fn parse_element(&mut self) -> Result<MarkupNode> {
        let open = self.pos;
        self.bump(); // consume '<'
        let tag = self.read_tag_name();
        if tag.is_empty() {
            return Err(self.ctx.malformed_error("empty tag name", (open, 1).into()));
        }

        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Err(self
                    .ctx
                    .unexpected_end_error(format!("'>' closing <{tag}>"), self.text.len()));
            }
            if self.rest().starts_with("/>") {
                self.pos += 2;
                return Ok(MarkupNode {
                    tag,
                    attributes,
                    children: Vec::new(),
                });
            }
            if self.rest().starts_with('>') {
                self.bump();
                let children = self.parse_children(&tag)?;
                return Ok(MarkupNode {
                    tag,
                    attributes,
                    children,
                });
            }
            attributes.push(self.parse_attribute()?);
        }
    }

    fn parse_attribute(&mut self) -> Result<Attribute> {
        let start = self.pos;
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
                break;
            }
            name.push(c);
            self.bump();
        }
        if name.is_empty() {
            return Err(self
                .ctx
                .malformed_error("malformed attribute", (start, 1).into()));
        }

        self.skip_whitespace();
        if self.peek() != Some('=') {
            return Err(self.ctx.malformed_error(
                format!("expected '=' after attribute '{name}'"),
                (start, name.len()).into(),
            ));
        }
        self.bump();
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                return Err(self.ctx.malformed_error(
                    format!("expected quoted value for attribute '{name}'"),
                    (start, name.len()).into(),
                ));
            }
        };
        self.bump();
        let Some(end) = self.rest().find(quote) else {
            return Err(self
                .ctx
                .unexpected_end_error(format!("closing quote for attribute '{name}'"), self.text.len()));
        };
        let value = self.rest()[..end].to_string();
        self.pos += end + 1;
        Ok(Attribute { name, value })
    }

    /// Parse child content until the matching closing tag for `parent`.
    fn parse_children(&mut self, parent: &str) -> Result<Vec<MarkupNode>> {
        let mut children = Vec::new();
        loop {
            // Character data between elements is not part of the model.
            let Some(lt) = self.rest().find('<') else {
                return Err(self
                    .ctx
                    .unexpected_end_error(format!("</{parent}>"), self.text.len()));
            };
            self.pos += lt;

            if self.rest().starts_with("<!--") {
                self.skip_past("-->", "end of comment")?;
            } else if self.rest().starts_with("<![CDATA[") {
                self.skip_past("]]>", "end of CDATA section")?;
            } else if self.rest().starts_with("<?") {
                self.skip_past("?>", "end of processing instruction")?;
            } else if self.rest().starts_with("</") {
                let close = self.pos;
                self.pos += 2;
                let found = self.read_tag_name();
                self.skip_whitespace();
                if self.peek() != Some('>') {
                    return Err(self
                        .ctx
                        .malformed_error("malformed closing tag", (close, 2).into()));
                }
                self.bump();
                if found != parent {
                    return Err(self.ctx.mismatched_tag_error(
                        parent,
                        &found,
                        (close, self.pos - close).into(),
                    ));
                }
                return Ok(children);
            } else {
                children.push(self.parse_element()?);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(src: &str) -> Result<MarkupTree> {
        parse_tree(&SourceContext::new(src, "test.xaml"))
    }

    #[test]
    fn test_parses_nested_elements_case_preserved() {
        let tree = parse(
            r#"<Grid xmlns:ui="clr-namespace:App.UI">
                <StackPanel>
                    <ui:CircleButton Click="OnClick"/>
                </StackPanel>
            </Grid>"#,
        )
        .unwrap();
        assert_eq!(tree.root.tag, "Grid");
        let panel = &tree.root.children[0];
        assert_eq!(panel.tag, "StackPanel");
        assert_eq!(panel.children[0].tag, "ui:CircleButton");
        assert_eq!(
            panel.children[0].attributes,
            vec![Attribute {
                name: "Click".to_string(),
                value: "OnClick".to_string(),
            }]
        );
    }

    #[test]
    fn test_attribute_declaration_order_is_kept() {
        let tree = parse(r#"<Button Click="A" MouseEnter="B" Click2="C"/>"#).unwrap();
        let names: Vec<&str> = tree.root.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Click", "MouseEnter", "Click2"]);
    }

    #[test]
    fn test_property_element_tags_keep_their_dot() {
        let tree = parse("<Grid><Grid.Resources></Grid.Resources></Grid>").unwrap();
        assert_eq!(tree.root.children[0].tag, "Grid.Resources");
    }

    #[test]
    fn test_prolog_comments_and_text_are_skipped() {
        let tree = parse(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <!-- header -->\n\
             <Grid>some text<Button/><!-- trailing --></Grid>\n\
             <!-- footer -->",
        )
        .unwrap();
        assert_eq!(tree.root.tag, "Grid");
        assert_eq!(tree.root.children.len(), 1);
        assert_eq!(tree.root.children[0].tag, "Button");
    }

    #[test]
    fn test_single_quoted_attributes() {
        let tree = parse("<Button Content='Ok'/>").unwrap();
        assert_eq!(tree.root.attributes[0].value, "Ok");
    }

    #[test]
    fn test_mismatched_closing_tag_is_fatal() {
        let err = parse("<Grid><Button></Grid></Grid>").unwrap_err();
        assert!(matches!(*err, Error::MismatchedClosingTag { .. }));
    }

    #[test]
    fn test_unclosed_element_is_fatal() {
        let err = parse("<Grid><Button>").unwrap_err();
        assert!(matches!(*err, Error::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = parse("   \n  ").unwrap_err();
        assert!(matches!(*err, Error::MissingRootElement { .. }));
    }

    #[test]
    fn test_content_after_root_is_fatal() {
        let err = parse("<Grid/><Grid/>").unwrap_err();
        assert!(matches!(*err, Error::Malformed { .. }));
    }
}
