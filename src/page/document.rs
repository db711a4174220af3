// src/page/document.rs
// =============================================================================
// A parsed HTML page and the asset references inside it.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (html5ever underneath)
// - Supports CSS selectors for finding elements
// - Lets us edit element attributes in the parsed tree and serialize it back
//
// Reference kinds, in the order they are collected:
//   <script src=...>, <link href=...>, <img src=...>
// Within one kind, references come in document order.
// =============================================================================

use scraper::{Html, Node, Selector};

/// Element kinds that can point at a mirrorable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Script,
    Link,
    Img,
}

impl ReferenceKind {
    /// Fixed collection order.
    pub const ALL: [ReferenceKind; 3] = [ReferenceKind::Script, ReferenceKind::Link, ReferenceKind::Img];

    pub fn tag(self) -> &'static str {
        match self {
            ReferenceKind::Script => "script",
            ReferenceKind::Link => "link",
            ReferenceKind::Img => "img",
        }
    }

    /// The attribute carrying the URL for this kind.
    pub fn attribute(self) -> &'static str {
        match self {
            ReferenceKind::Script | ReferenceKind::Img => "src",
            ReferenceKind::Link => "href",
        }
    }

    fn selector(self) -> Selector {
        // The selector is built from two constant identifiers, so parsing
        // cannot fail.
        Selector::parse(&format!("{}[{}]", self.tag(), self.attribute())).unwrap()
    }
}

/// One attribute value found on a reference element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReference {
    pub kind: ReferenceKind,
    pub value: String,
}

/// A page parsed once and shared between discovery and rewriting.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// All references, scripts first, then links, then images.
    ///
    /// A reference's position in this list is its index for
    /// [`PageDocument::set_reference_values`].
    pub fn references(&self) -> Vec<PageReference> {
        let mut references = Vec::new();

        for kind in ReferenceKind::ALL {
            let selector = kind.selector();
            for element in self.html.select(&selector) {
                if let Some(value) = element.value().attr(kind.attribute()) {
                    references.push(PageReference {
                        kind,
                        value: value.to_string(),
                    });
                }
            }
        }

        references
    }

    /// Overwrites reference attributes by index. Indices that don't exist
    /// are ignored; untouched references keep their original value.
    pub fn set_reference_values<'a, I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        // Same walk as references(), so indices line up.
        let mut targets = Vec::new();
        for kind in ReferenceKind::ALL {
            let selector = kind.selector();
            for element in self.html.select(&selector) {
                if element.value().attr(kind.attribute()).is_some() {
                    targets.push((element.id(), kind));
                }
            }
        }

        for (index, value) in updates {
            let Some(&(id, kind)) = targets.get(index) else {
                continue;
            };
            let Some(mut node) = self.html.tree.get_mut(id) else {
                continue;
            };

            if let Node::Element(element) = node.value() {
                for (name, attr_value) in element.attrs.iter_mut() {
                    if &*name.local == kind.attribute() {
                        *attr_value = value.into();
                    }
                }
            }
        }
    }

    /// Serializes the (possibly edited) tree back to HTML.
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}
