//! Namespace-agnostic helpers over `roxmltree` nodes.

use roxmltree::Node;

/// Check whether a node is an element with the given local name.
pub(crate) fn is_tag(node: &Node, local: &str) -> bool {
    node.is_element() && node.tag_name().name() == local
}

/// Attribute value by local name, ignoring its namespace.
pub(crate) fn attr<'a>(node: &Node<'a, 'a>, local: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == local)
        .map(|a| a.value())
}

/// First child element with the given local name.
pub(crate) fn child<'a>(node: &Node<'a, 'a>, local: &str) -> Option<Node<'a, 'a>> {
    node.children().find(|n| is_tag(n, local))
}

/// All child elements with the given local name.
pub(crate) fn children<'a, 'b>(
    node: &Node<'a, 'a>,
    local: &'b str,
) -> impl Iterator<Item = Node<'a, 'a>> + 'b
where
    'a: 'b,
{
    node.children().filter(move |n| is_tag(n, local))
}

/// Whether an OOXML on/off property is on.
///
/// The element being present turns the property on unless its `val`
/// says otherwise.
pub(crate) fn toggle_on(node: &Node) -> bool {
    !matches!(
        attr(node, "val"),
        Some("0") | Some("false") | Some("off")
    )
}

/// Strip a UTF-8 byte order mark.
pub(crate) fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}
