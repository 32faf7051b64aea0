// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use roxmltree::Error;

use super::{AId, Attribute, Document, EId, NodeData, NodeId, NodeKind, ShortRange};

pub(crate) const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
pub(crate) const AAPT_NS: &str = "http://schemas.android.com/aapt";

/// Maximum nesting depth, both for the input and for the output tree.
pub(crate) const MAX_DEPTH: u32 = 1024;

impl<'input> Document<'input> {
    /// Parses a [`Document`] from a [`roxmltree::Document`].
    pub fn parse_tree(xml: &roxmltree::Document<'input>) -> Result<Document<'input>, Error> {
        parse(xml)
    }

    fn append(&mut self, parent_id: NodeId, kind: NodeKind) -> NodeId {
        let new_child_id = NodeId::from(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent_id),
            next_sibling: None,
            children: None,
            kind,
        });

        let last_child_id = self.nodes[parent_id.get_usize()].children.map(|(_, id)| id);

        if let Some(id) = last_child_id {
            self.nodes[id.get_usize()].next_sibling = Some(new_child_id);
        }

        self.nodes[parent_id.get_usize()].children = Some(
            if let Some((first_child_id, _)) = self.nodes[parent_id.get_usize()].children {
                (first_child_id, new_child_id)
            } else {
                (new_child_id, new_child_id)
            },
        );

        new_child_id
    }
}

fn parse<'input>(xml: &roxmltree::Document<'input>) -> Result<Document<'input>, Error> {
    let mut doc = Document {
        nodes: Vec::new(),
        attrs: Vec::new(),
    };

    // Add a root node.
    doc.nodes.push(NodeData {
        parent: None,
        next_sibling: None,
        children: None,
        kind: NodeKind::Root,
    });

    parse_xml_node(xml.root_element(), doc.root().id, 0, &mut doc)?;

    Ok(doc)
}

pub(crate) fn parse_tag_name(node: roxmltree::Node) -> EId {
    let tag_name = node.tag_name();
    match tag_name.namespace() {
        None | Some(ANDROID_NS) => EId::from_str(tag_name.name()).unwrap_or(EId::Unknown),
        Some(AAPT_NS) if tag_name.name() == "attr" => EId::Attr,
        _ => EId::Unknown,
    }
}

fn parse_xml_node<'input>(
    node: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    depth: u32,
    doc: &mut Document<'input>,
) -> Result<(), Error> {
    if depth > MAX_DEPTH {
        return Err(Error::NodesLimitReached);
    }

    let tag_name = parse_tag_name(node);
    let node_id = parse_vd_element(node, parent_id, tag_name, doc);

    for child in node.children().filter(|n| n.is_element()) {
        parse_xml_node(child, node_id, depth + 1, doc)?;
    }

    Ok(())
}

fn parse_vd_element<'input>(
    xml_node: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    tag_name: EId,
    doc: &mut Document<'input>,
) -> NodeId {
    let attrs_start_idx = doc.attrs.len();

    for attr in xml_node.attributes() {
        let qualified = match attr.namespace() {
            None => false,
            Some(ANDROID_NS) => true,
            _ => continue,
        };

        let aid = match AId::from_str(attr.name()) {
            Some(v) => v,
            None => continue,
        };

        doc.attrs.push(Attribute {
            name: aid,
            qualified,
            value: attr.value_storage().clone(),
        });
    }

    let attributes = ShortRange::new(attrs_start_idx as u32, doc.attrs.len() as u32);
    doc.append(
        parent_id,
        NodeKind::Element {
            tag_name,
            attributes,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str) -> roxmltree::Document {
        roxmltree::Document::parse(text).unwrap()
    }

    #[test]
    fn tag_names() {
        let xml = parse_str(
            "<vector xmlns:android='http://schemas.android.com/apk/res/android' \
                     xmlns:aapt='http://schemas.android.com/aapt'>
                <group><path/><clip-path/></group>
                <aapt:attr name='android:fillColor'><gradient><item/></gradient></aapt:attr>
                <animated-vector/>
            </vector>",
        );
        let doc = Document::parse_tree(&xml).unwrap();
        let tags: Vec<_> = doc.descendants().filter_map(|n| n.tag_name()).collect();
        assert_eq!(
            tags,
            vec![
                EId::Vector,
                EId::Group,
                EId::Path,
                EId::ClipPath,
                EId::Attr,
                EId::Gradient,
                EId::Item,
                EId::Unknown,
            ]
        );
    }

    #[test]
    fn qualified_attribute_takes_precedence() {
        let xml = parse_str(
            "<vector xmlns:android='http://schemas.android.com/apk/res/android'>
                <path pathData='M 1 1' android:pathData='M 2 2'/>
                <path pathData='M 3 3'/>
            </vector>",
        );
        let doc = Document::parse_tree(&xml).unwrap();
        let paths: Vec<_> = doc
            .descendants()
            .filter(|n| n.tag_name() == Some(EId::Path))
            .map(|n| n.attribute::<&str>(AId::PathData).unwrap())
            .collect();
        assert_eq!(paths, vec!["M 2 2", "M 3 3"]);
    }

    #[test]
    fn foreign_attributes_are_ignored() {
        let xml = parse_str(
            "<vector xmlns:tools='http://schemas.android.com/tools' tools:width='5' width='7'/>",
        );
        let doc = Document::parse_tree(&xml).unwrap();
        let root = doc.root_element().unwrap();
        assert_eq!(root.attributes().len(), 1);
        assert_eq!(root.attribute::<f32>(AId::Width), Some(7.0));
    }

    #[test]
    fn identical_nodes_have_distinct_ids() {
        let xml = parse_str("<vector><gradient/><gradient/></vector>");
        let doc = Document::parse_tree(&xml).unwrap();
        let ids: Vec<_> = doc
            .descendants()
            .filter(|n| n.tag_name() == Some(EId::Gradient))
            .map(|n| n.id())
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }
}
