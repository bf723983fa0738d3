use crate::types::{ExtractedItem, ExtractionResult};
use scraper::{ElementRef, Html};
use tracing::debug;

pub struct TagExtractor;

impl TagExtractor {
    /// Parses `markup` once and collects the trimmed text of every element
    /// matching each tag, tag by tag in the given order.
    pub fn extract<S: AsRef<str>>(markup: &str, tags: &[S]) -> ExtractionResult {
        let document = Html::parse_document(markup);
        let mut items = Vec::new();

        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                continue;
            }

            let before = items.len();
            items.extend(Self::texts_for_tag(&document, tag));
            debug!("Tag <{}> matched {} elements", tag, items.len() - before);
        }

        ExtractionResult { items }
    }

    fn texts_for_tag<'a>(
        document: &'a Html,
        tag: &'a str,
    ) -> impl Iterator<Item = ExtractedItem> + 'a {
        document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name().eq_ignore_ascii_case(tag))
            .map(|element| element.text().collect::<String>().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_then_document_order() {
        let result = TagExtractor::extract("<h1>A</h1><p>B</p><h1>C</h1>", &["h1", "p"]);
        assert_eq!(result.items, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_empty_element_kept() {
        let result = TagExtractor::extract("<p></p>", &["p"]);
        assert_eq!(result.items, vec![""]);
    }

    #[test]
    fn test_unknown_tag_yields_nothing() {
        let result = TagExtractor::extract("<p>text</p>", &["blink", "p"]);
        assert_eq!(result.items, vec!["text"]);
    }

    #[test]
    fn test_descendant_text_is_concatenated_and_trimmed() {
        let markup = "<div>\n  <p>  Hello <b>bold</b> <a href=\"/x\">world</a>  </p>\n</div>";
        let result = TagExtractor::extract(markup, &["p", "a"]);
        assert_eq!(result.items, vec!["Hello bold world", "world"]);
    }

    #[test]
    fn test_count_matches_elements_per_tag() {
        let markup = r#"<html><head><title>Page</title></head>
            <body>
              <h2>one</h2><span>s1</span><h2>two</h2><span></span><h2> three </h2>
            </body></html>"#;
        let result = TagExtractor::extract(markup, &["h2", "span", "title"]);
        assert_eq!(result.len(), 3 + 2 + 1);
        assert_eq!(result.items, vec!["one", "two", "three", "s1", "", "Page"]);
    }

    #[test]
    fn test_duplicates_preserved_and_repeated_tags() {
        let result = TagExtractor::extract("<p>x</p><p>x</p>", &["p", "p"]);
        assert_eq!(result.items, vec!["x", "x", "x", "x"]);
    }

    #[test]
    fn test_tag_name_case_insensitive() {
        let result = TagExtractor::extract("<H1>Upper</H1>", &["H1"]);
        assert_eq!(result.items, vec!["Upper"]);
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let result = TagExtractor::extract("<p>unclosed <h1>head", &["p", "h1", "table"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.items[1], "head");
    }
}
