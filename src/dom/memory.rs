//! In-memory document for native builds and tests.
//!
//! Nodes live in an arena behind `Rc<RefCell<..>>`; a [`MemoryElement`] is the
//! arena plus an index, so clones alias the same node just like `web_sys`
//! handles do. Only elements are modelled; text is a per-element string.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{Dom, DomElement, ElementFactory, ElementLocator, Selector};
use crate::error::DomError;

const FORM_CONTROLS: [&str; 3] = ["input", "textarea", "select"];

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    value: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    root: usize,
    head: usize,
    body: usize,
    focused: Option<usize>,
}

impl Tree {
    fn push(&mut self, tag: &str) -> usize {
        self.nodes.push(Node { tag: tag.to_ascii_lowercase(), ..Node::default() });
        self.nodes.len() - 1
    }

    fn attach(&mut self, parent: usize, child: usize) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    fn detach(&mut self, child: usize) {
        if let Some(parent) = self.nodes[child].parent.take() {
            self.nodes[parent].children.retain(|&c| c != child);
        }
        if self.focused.is_some_and(|f| f == child || self.is_ancestor(child, f)) {
            self.focused = None;
        }
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    fn is_ancestor(&self, ancestor: usize, node: usize) -> bool {
        let mut cursor = self.nodes[node].parent;
        while let Some(p) = cursor {
            if p == ancestor {
                return true;
            }
            cursor = self.nodes[p].parent;
        }
        false
    }

    fn is_connected(&self, node: usize) -> bool {
        node == self.root || self.is_ancestor(self.root, node)
    }

    /// Descendants of `scope` in document order, `scope` excluded.
    fn descendants(&self, scope: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.nodes[scope].children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.nodes[n].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: usize, selector: &Selector) -> bool {
        let n = &self.nodes[node];
        let own = selector.matches_element(&n.tag, |name| self.attribute_ref(node, name));
        if !own {
            return false;
        }
        match &selector.ancestor_class {
            None => true,
            Some(class) => {
                let mut cursor = n.parent;
                while let Some(p) = cursor {
                    if self.nodes[p].classes.iter().any(|c| c == class) {
                        return true;
                    }
                    cursor = self.nodes[p].parent;
                }
                false
            }
        }
    }

    fn attribute_ref(&self, node: usize, name: &str) -> Option<&str> {
        let n = &self.nodes[node];
        if name == "class" && !n.classes.is_empty() {
            // `class` is kept split; selectors only ever test its presence.
            return Some("");
        }
        n.attributes.get(name).map(String::as_str)
    }

    fn text_content(&self, node: usize) -> String {
        let mut out = self.nodes[node].text.clone();
        for &child in &self.nodes[node].children {
            out.push_str(&self.text_content(child));
        }
        out
    }
}

/// A standalone document with `<html>`, `<head>` and `<body>`.
#[derive(Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Tree { nodes: Vec::new(), root: 0, head: 0, body: 0, focused: None };
        let root = tree.push("html");
        let head = tree.push("head");
        let body = tree.push("body");
        tree.attach(root, head);
        tree.attach(root, body);
        tree.root = root;
        tree.head = head;
        tree.body = body;
        Self { tree: Rc::new(RefCell::new(tree)) }
    }

    /// Create a detached element. Never fails for the in-memory tree.
    #[must_use]
    pub fn element(&self, tag: &str) -> MemoryElement {
        let id = self.tree.borrow_mut().push(tag);
        self.handle(id)
    }

    /// The element holding keyboard focus, if any.
    #[must_use]
    pub fn active_element(&self) -> Option<MemoryElement> {
        let focused = self.tree.borrow().focused;
        focused.map(|id| self.handle(id))
    }

    /// All connected elements with `class`, in document order.
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<MemoryElement> {
        let tree = self.tree.borrow();
        tree.descendants(tree.root)
            .into_iter()
            .filter(|&n| tree.nodes[n].classes.iter().any(|c| c == class))
            .map(|n| self.handle(n))
            .collect()
    }

    fn handle(&self, id: usize) -> MemoryElement {
        MemoryElement { tree: Rc::clone(&self.tree), id }
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument").field("nodes", &self.tree.borrow().nodes.len()).finish()
    }
}

impl Dom for MemoryDocument {
    type Element = MemoryElement;
}

impl ElementLocator for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let tree = self.tree.borrow();
        tree.descendants(tree.root)
            .into_iter()
            .find(|&n| tree.nodes[n].attributes.get("id").is_some_and(|v| v == id))
            .map(|n| self.handle(n))
    }

    fn query_selector(&self, selector: &Selector) -> Option<MemoryElement> {
        let tree = self.tree.borrow();
        tree.descendants(tree.root)
            .into_iter()
            .find(|&n| tree.matches(n, selector))
            .map(|n| self.handle(n))
    }

    fn query_selector_all_in(&self, scope: &MemoryElement, selector: &Selector) -> Vec<MemoryElement> {
        let tree = self.tree.borrow();
        tree.descendants(scope.id)
            .into_iter()
            .filter(|&n| tree.matches(n, selector))
            .map(|n| self.handle(n))
            .collect()
    }
}

impl ElementFactory for MemoryDocument {
    fn create_element(&self, tag: &str) -> Result<MemoryElement, DomError> {
        Ok(self.element(tag))
    }

    fn body(&self) -> Option<MemoryElement> {
        let body = self.tree.borrow().body;
        Some(self.handle(body))
    }

    fn head(&self) -> Option<MemoryElement> {
        let head = self.tree.borrow().head;
        Some(self.handle(head))
    }
}

/// Handle to a node of a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryElement {
    tree: Rc<RefCell<Tree>>,
    id: usize,
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.id];
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("id", &node.attributes.get("id"))
            .field("classes", &node.classes)
            .finish()
    }
}

impl MemoryElement {
    /// Builder-style attribute setter for test fixtures.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.write_attribute(name, value);
        self
    }

    /// Builder-style value setter for test fixtures.
    #[must_use]
    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Builder-style child append for test fixtures. Panics on a cycle.
    #[must_use]
    pub fn with_child(self, child: &MemoryElement) -> Self {
        if let Err(e) = self.append_child(child) {
            panic!("invalid fixture tree: {e}");
        }
        self
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.tree.borrow().nodes[self.id].classes.clone()
    }

    #[must_use]
    pub fn children(&self) -> Vec<MemoryElement> {
        let children = self.tree.borrow().nodes[self.id].children.clone();
        children.into_iter().map(|id| MemoryElement { tree: Rc::clone(&self.tree), id }).collect()
    }

    fn write_attribute(&self, name: &str, value: &str) {
        let mut tree = self.tree.borrow_mut();
        let node = &mut tree.nodes[self.id];
        match name {
            "class" => node.classes = value.split_whitespace().map(str::to_owned).collect(),
            _ => {
                if name == "value" && FORM_CONTROLS.contains(&node.tag.as_str()) {
                    node.value = value.to_owned();
                }
                node.attributes.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}

impl DomElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.tree.borrow().nodes[self.id].tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.id];
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.write_attribute(name, value);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.tree.borrow().nodes[self.id].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.nodes[self.id].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.tree.borrow_mut().nodes[self.id].classes.retain(|c| c != class);
        Ok(())
    }

    fn text_content(&self) -> String {
        self.tree.borrow().text_content(self.id)
    }

    fn set_text_content(&self, text: &str) {
        let mut tree = self.tree.borrow_mut();
        let children = std::mem::take(&mut tree.nodes[self.id].children);
        for child in children {
            tree.nodes[child].parent = None;
        }
        tree.nodes[self.id].text = text.to_owned();
    }

    fn value(&self) -> Option<String> {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.id];
        FORM_CONTROLS.contains(&node.tag.as_str()).then(|| node.value.clone())
    }

    fn set_value(&self, value: &str) {
        let mut tree = self.tree.borrow_mut();
        let node = &mut tree.nodes[self.id];
        if FORM_CONTROLS.contains(&node.tag.as_str()) {
            node.value = value.to_owned();
        }
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        if !Rc::ptr_eq(&self.tree, &child.tree) {
            return Err(DomError::Js("WrongDocumentError: node belongs to another document".into()));
        }
        let mut tree = self.tree.borrow_mut();
        if child.id == self.id || tree.is_ancestor(child.id, self.id) {
            return Err(DomError::Js("HierarchyRequestError: cannot append an ancestor".into()));
        }
        tree.detach(child.id);
        tree.attach(self.id, child.id);
        Ok(())
    }

    fn remove(&self) {
        self.tree.borrow_mut().detach(self.id);
    }

    fn focus(&self) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        if tree.is_connected(self.id) {
            tree.focused = Some(self.id);
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.tree.borrow().is_connected(self.id)
    }
}
