//! Typed access to the parsed HTML tree
//!
//! `ReportDocument` owns the tree; `Element` is a cheap handle into it that
//! exposes only the lookups the extractors need. Parsing goes through
//! html5ever, which recovers from unclosed tags and stray markup, so loading
//! never fails; missing elements surface as `None` or empty iterators.

use crate::text::normalize;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

macro_rules! tag_selector {
    ($name:ident, $css:literal) => {
        pub(crate) static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect(concat!("invalid selector: ", $css)));
    };
}

tag_selector!(HEADING, "h1");
tag_selector!(SUBHEADING, "h2");
tag_selector!(PARAGRAPH, "p");
tag_selector!(BOLD, "strong");
tag_selector!(ORDERED_LIST, "ol");
tag_selector!(IMAGE, "img");

/// A parsed HTML document
pub struct ReportDocument {
    html: Html,
}

impl ReportDocument {
    /// Parse raw HTML, recovering from malformed markup
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The document's root element
    pub fn root(&self) -> Element<'_> {
        Element(self.html.root_element())
    }

    /// First element matching `selector` in document order
    pub fn select_first(&self, selector: &Selector) -> Option<Element<'_>> {
        self.html.select(selector).next().map(Element)
    }

    /// Every element carrying `attr`, in document order
    pub fn find_all_with_attr<'a, 'b>(
        &'a self,
        attr: &'b str,
    ) -> impl Iterator<Item = Element<'a>> + 'b
    where
        'a: 'b,
    {
        self.root()
            .0
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().attr(attr).is_some())
            .map(Element)
    }

    /// First element whose `attr` equals `value`
    pub fn find_by_attr(&self, attr: &str, value: &str) -> Option<Element<'_>> {
        self.find_all_with_attr(attr)
            .find(|el| el.attr(attr) == Some(value))
    }
}

/// Handle to one element of a `ReportDocument`
#[derive(Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// Lower-case tag name
    pub fn tag_name(&self) -> &'a str {
        self.0.value().name()
    }

    /// Attribute value, if present
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Whether the element's class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    /// Concatenated text of all descendant text nodes, untouched
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// Text content passed through [`normalize`]
    pub fn normalized_text(&self) -> String {
        normalize(&self.text())
    }

    /// First descendant matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<Element<'a>> {
        self.0.select(selector).next().map(Element)
    }

    /// Every descendant matching `selector`, in document order
    pub fn select_all<'b>(&self, selector: &'b Selector) -> impl Iterator<Item = Element<'a>> + 'b
    where
        'a: 'b,
    {
        self.0.select(selector).map(Element)
    }

    /// Direct child elements with the given tag name
    pub fn children_named<'b>(&self, tag: &'b str) -> impl Iterator<Item = Element<'a>> + 'b
    where
        'a: 'b,
    {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name() == tag)
            .map(Element)
    }

    /// Descendants with the given tag name and class, in document order
    pub fn descendants_with_class<'b>(
        &self,
        tag: &'b str,
        class: &'b str,
    ) -> impl Iterator<Item = Element<'a>> + 'b
    where
        'a: 'b,
    {
        self.0
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Element)
            .filter(move |el| el.tag_name() == tag && el.has_class(class))
    }

    /// First following sibling with the given tag name and class
    pub fn next_sibling_with_class(&self, tag: &str, class: &str) -> Option<Element<'a>> {
        self.0
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .map(Element)
            .find(|el| el.tag_name() == tag && el.has_class(class))
    }
}
