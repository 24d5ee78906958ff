// File: crates/playground-chart/src/scene.rs
// Summary: Retained drawing-surface model: an SVG element arena plus the HTML tooltip layer.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

/// Handle to an element of a [`Surface`]. Handles from before a `clear()` stop resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self { tag: tag.to_string(), attrs: Vec::new(), style: Vec::new(), text: None, parent, children: Vec::new() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        lookup(&self.attrs, name)
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        lookup(&self.style, name)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some((_, v)) => *v = value,
        None => pairs.push((name.to_string(), value)),
    }
}

/// The host's `<svg>` drawing surface. The root element survives `clear()`.
#[derive(Clone, Debug)]
pub struct Surface {
    nodes: Vec<Element>,
    generation: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        let mut root = Element::new("svg", None);
        root.attrs.push(("xmlns".into(), "http://www.w3.org/2000/svg".into()));
        Self { nodes: vec![root], generation: 0 }
    }

    pub fn root(&self) -> NodeId {
        NodeId { index: 0, generation: self.generation }
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        // The root is stable across clears.
        if id.index == 0 {
            return Some(0);
        }
        (id.generation == self.generation && id.index < self.nodes.len()).then_some(id.index)
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.resolve(id).map(|i| &self.nodes[i])
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        let i = self.resolve(id)?;
        Some(&mut self.nodes[i])
    }

    /// Remove every descendant of the root, invalidating their handles.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
        self.generation += 1;
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Append a new `<tag>` as the last child of `parent`.
    ///
    /// A stale parent appends to the root instead.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let parent = if self.resolve(parent).is_some() { parent } else { self.root() };
        let id = NodeId { index: self.nodes.len(), generation: self.generation };
        self.nodes.push(Element::new(tag, Some(parent)));
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        id
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl ToString) -> &mut Self {
        if let Some(e) = self.get_mut(id) {
            upsert(&mut e.attrs, name, value.to_string());
        }
        self
    }

    pub fn set_style(&mut self, id: NodeId, name: &str, value: impl ToString) -> &mut Self {
        if let Some(e) = self.get_mut(id) {
            upsert(&mut e.style, name, value.to_string());
        }
        self
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> &mut Self {
        if let Some(e) = self.get_mut(id) {
            e.text = Some(text.into());
        }
        self
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> &mut Self {
        if let Some(e) = self.get_mut(id) {
            if !e.has_class(class) {
                let joined = match e.attr("class") {
                    Some(c) if !c.is_empty() => format!("{c} {class}"),
                    _ => class.to_string(),
                };
                upsert(&mut e.attrs, "class", joined);
            }
        }
        self
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.attr(name))
    }

    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.style(name))
    }

    /// Re-insert `id` as the last child of its parent, drawing it above its siblings.
    pub fn raise(&mut self, id: NodeId) {
        let Some(parent) = self.get(id).and_then(|e| e.parent) else { return };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != id);
            p.children.push(id);
        }
    }

    /// Pre-order walk of everything under (and excluding) `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.get(id).map(|e| e.children.iter().rev().copied().collect()).unwrap_or_default();
        while let Some(n) = stack.pop() {
            out.push(n);
            if let Some(e) = self.get(n) {
                stack.extend(e.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.get(*n).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.get(*n).is_some_and(|e| e.tag == tag))
            .collect()
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.root(), 0);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let Some(e) = self.get(id) else { return };
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", e.tag);
        for (k, v) in &e.attrs {
            let _ = write!(out, " {k}=\"{}\"", escape(v));
        }
        if !e.style.is_empty() {
            let css = e.style.iter().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>().join("; ");
            let _ = write!(out, " style=\"{}\"", escape(&css));
        }
        match (&e.text, e.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(t), true) => {
                let _ = writeln!(out, ">{}</{}>", escape(t), e.tag);
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(t) = text {
                    let _ = writeln!(out, "{indent}  {}", escape(t));
                }
                for c in &e.children {
                    self.write_node(out, *c, depth + 1);
                }
                let _ = writeln!(out, "{indent}</{}>", e.tag);
            }
        }
    }

    /// Serialize the scene to an `.svg` file, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// The floating HTML tooltip box (`div.d3-tooltip`), positioned in client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipElement {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    /// CSS transform applied on top of `left`/`top`.
    pub transform: String,
    pub text: String,
    pub style: Vec<(String, String)>,
}

impl TooltipElement {
    pub const CLASS: &'static str = "d3-tooltip";

    pub fn hidden(style: Vec<(String, String)>) -> Self {
        Self { visible: false, left: 0.0, top: 0.0, transform: String::new(), text: String::new(), style }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        lookup(&self.style, name)
    }

    pub fn to_html(&self) -> String {
        let mut css = vec![format!("display: {}", if self.visible { "block" } else { "none" })];
        css.extend(self.style.iter().map(|(k, v)| format!("{k}: {v}")));
        css.push(format!("top: {}px", self.top));
        css.push(format!("left: {}px", self.left));
        if !self.transform.is_empty() {
            css.push(format!("transform: {}", self.transform));
        }
        format!("<div class=\"{}\" style=\"{}\">{}</div>", Self::CLASS, escape(&css.join("; ")), escape(&self.text))
    }
}

/// The host's tooltip container; holds at most one tooltip element.
#[derive(Clone, Debug, Default)]
pub struct TooltipLayer {
    current: Option<TooltipElement>,
}

impl TooltipLayer {
    /// Drop any previous tooltip and install `el`.
    pub fn replace(&mut self, el: TooltipElement) {
        self.current = Some(el);
    }

    pub fn remove(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<&TooltipElement> {
        self.current.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut TooltipElement> {
        self.current.as_mut()
    }

    pub fn is_visible(&self) -> bool {
        self.current.as_ref().is_some_and(|t| t.visible)
    }
}
