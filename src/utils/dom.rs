// src/utils/dom.rs

//! Tree query primitives over a parsed HTML document.
//!
//! The wiki's markup carries no usable ids or classes, so extraction works
//! from tag traversal, text content, and inline style attributes alone.
//! Everything here is a pure read; missing attributes answer `false` rather
//! than erroring.

use scraper::ElementRef;

/// All descendant elements with the given tag, document order, unbounded
/// depth. The root itself is included when it matches.
pub fn find_all<'a>(root: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == tag)
        .collect()
}

/// First descendant element with the given tag, or `None`.
pub fn find_first<'a>(root: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}

/// Concatenated text of every text node under `node`, document order.
/// Element boundaries are ignored, so adjacent cell markup collapses into
/// one string.
pub fn text_of(node: ElementRef) -> String {
    node.text().collect()
}

/// True when the element has a `style` attribute containing `needle`.
pub fn has_style_containing(node: ElementRef, needle: &str) -> bool {
    node.value()
        .attr("style")
        .is_some_and(|style| style.contains(needle))
}

/// True when the element's style sets the given pixel width.
pub fn has_style_width(node: ElementRef, width: &str) -> bool {
    has_style_containing(node, &format!("width:{width}"))
}

/// True when the element's style sets any of the given pixel widths.
pub fn has_any_style_width(node: ElementRef, widths: &[String]) -> bool {
    widths.iter().any(|width| has_style_width(node, width))
}

/// True when `text` contains every needle.
pub fn contains_all(text: &str, needles: &[String]) -> bool {
    needles.iter().all(|needle| text.contains(needle.as_str()))
}

/// True when `text` contains at least one needle.
pub fn contains_any(text: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| text.contains(needle.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_find_all_document_order() {
        let doc = Html::parse_document(
            "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>",
        );
        let cells = find_all(doc.root_element(), "td");
        let texts: Vec<String> = cells.into_iter().map(text_of).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_all_unbounded_depth() {
        let doc = Html::parse_document("<div><p><span><em>deep</em></span></p></div>");
        assert_eq!(find_all(doc.root_element(), "em").len(), 1);
    }

    #[test]
    fn test_find_first() {
        let doc = Html::parse_document("<p><strong>first</strong><strong>second</strong></p>");
        let node = find_first(doc.root_element(), "strong").unwrap();
        assert_eq!(text_of(node), "first");
        assert!(find_first(doc.root_element(), "table").is_none());
    }

    #[test]
    fn test_text_collapses_markup() {
        let doc = Html::parse_document(
            "<table><tr><td>曹操<span>(</span>そうそう<span>)</span></td></tr></table>",
        );
        let cell = find_first(doc.root_element(), "td").unwrap();
        assert_eq!(text_of(cell), "曹操(そうそう)");
    }

    #[test]
    fn test_style_matching() {
        let doc = Html::parse_document(
            r#"<table><tr>
                <td style="width:70px;background-color:gold">x</td>
                <td>y</td>
            </tr></table>"#,
        );
        let cells = find_all(doc.root_element(), "td");
        assert!(has_style_containing(cells[0], "background-color:gold"));
        assert!(has_style_width(cells[0], "70px"));
        assert!(!has_style_width(cells[0], "60px"));
        // No style attribute at all: false, not an error.
        assert!(!has_style_containing(cells[1], "gold"));
    }

    #[test]
    fn test_has_any_style_width() {
        let doc =
            Html::parse_document(r#"<table><tr><td style="width:53px">x</td></tr></table>"#);
        let cell = find_first(doc.root_element(), "td").unwrap();
        assert!(has_any_style_width(cell, &strings(&["60px", "53px"])));
        assert!(!has_any_style_width(cell, &strings(&["60px", "50px"])));
    }

    #[test]
    fn test_contains_all_and_any() {
        let needles = strings(&["字", "没年"]);
        assert!(contains_all("字 没年 生年", &needles));
        assert!(!contains_all("字 生年", &needles));
        assert!(contains_any("没年だけ", &needles));
        assert!(!contains_any("何もなし", &needles));
    }
}
