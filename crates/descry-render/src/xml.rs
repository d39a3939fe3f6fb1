//! Minimal XML-ish node model and indented printer.
//!
//! This is presentation plumbing, not a markup library: no escaping, no
//! declaration, no namespaces. The printer's layout rules are the contract:
//!
//! - a node with no children prints self-closing on one line;
//! - a node whose only child is a text leaf prints compactly on one line;
//! - anything else prints an opening line, each child indented one more
//!   level (two spaces per level), and a closing line — a single non-text
//!   child still takes this multi-line form.

pub(crate) enum Xml {
    Text(String),
    Node {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Xml>,
    },
}

pub(crate) fn text(value: impl Into<String>) -> Xml {
    Xml::Text(value.into())
}

pub(crate) fn node(
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Xml>,
) -> Xml {
    Xml::Node {
        tag,
        attrs,
        children,
    }
}

const INDENT: &str = "  ";

pub(crate) fn xml_to_string(xml: &Xml) -> String {
    render(0, xml)
}

fn render(level: usize, xml: &Xml) -> String {
    let indentation = INDENT.repeat(level);

    match xml {
        Xml::Text(value) => format!("{indentation}{value}"),

        Xml::Node {
            tag,
            attrs,
            children,
        } => {
            let attrs = attrs
                .iter()
                .map(|(key, value)| format!("{key}=\"{value}\""))
                .collect::<Vec<_>>()
                .join(" ");
            let space = if attrs.is_empty() { "" } else { " " };

            match children.as_slice() {
                [] => format!("{indentation}<{tag}{space}{attrs} />"),
                [Xml::Text(only)] => {
                    format!("{indentation}<{tag}{space}{attrs}> {only} </{tag}>")
                }
                _ => {
                    let body = children
                        .iter()
                        .map(|child| render(level + 1, child))
                        .collect::<Vec<_>>()
                        .join("\n");
                    format!("{indentation}<{tag}{space}{attrs}>\n{body}\n{indentation}</{tag}>")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_with_text_is_one_line() {
        let xml = node("fail", vec![], vec![text("err")]);
        assert_eq!(xml_to_string(&xml), "<fail> err </fail>");
    }

    #[test]
    fn test_childless_node_is_self_closing() {
        let xml = node("missing-field", vec![("name", "f".to_owned())], vec![]);
        assert_eq!(xml_to_string(&xml), "<missing-field name=\"f\" />");
    }

    #[test]
    fn test_single_node_child_is_still_multi_line() {
        let xml = node("one-of", vec![], vec![node("fail", vec![], vec![text("err")])]);
        assert_eq!(
            xml_to_string(&xml),
            "<one-of>\n  <fail> err </fail>\n</one-of>"
        );
    }

    #[test]
    fn test_indent_grows_per_level() {
        let xml = node(
            "array",
            vec![("index", "0".to_owned())],
            vec![node("one-of", vec![], vec![node("fail", vec![], vec![text("x")])])],
        );
        assert_eq!(
            xml_to_string(&xml),
            "<array index=\"0\">\n  <one-of>\n    <fail> x </fail>\n  </one-of>\n</array>"
        );
    }
}
