//! HTML field extraction for the case status response page.
//!
//! Headline = text of the first `<h1>`; detail = text of the `<p>`
//! elements inside the `text-center` container.

use scraper::{Html, Selector};

/// Text of the first `<h1>` element, whitespace collapsed. `None` when
/// the page has no heading or it is empty.
pub fn heading_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1").ok()?;
    let text = document
        .select(&selector)
        .next()
        .map(|el| collapse_ws(&el.text().collect::<String>()))?;
    (!text.is_empty()).then_some(text)
}

/// Concatenated text of the `<p>` elements inside the `text-center`
/// container. `None` when no paragraph text is found there.
pub fn centered_paragraph_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".text-center p").ok()?;
    let parts: Vec<String> = document
        .select(&selector)
        .map(|el| collapse_ws(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// Collapse whitespace runs (including non-breaking spaces) into single
/// spaces and trim.
fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
      <div class="rows text-center">
        <h1>Case Was Received</h1>
        <p>As of May 1, 2022, we received your case and sent a receipt
           notice.&nbsp;Please follow the instructions on the notice.</p>
        <p>If you don&#39;t receive it, contact us.</p>
      </div>
    </body></html>"#;

    #[test]
    fn heading_is_first_h1_text() {
        assert_eq!(heading_text(PAGE).as_deref(), Some("Case Was Received"));
    }

    #[test]
    fn detail_joins_centered_paragraphs() {
        let detail = centered_paragraph_text(PAGE).unwrap();
        assert!(detail.starts_with("As of May 1, 2022, we received your case"));
        assert!(detail.contains("receipt notice. Please follow"));
        assert!(detail.ends_with("If you don't receive it, contact us."));
    }

    #[test]
    fn no_heading_yields_none() {
        let html = "<html><body><div class='text-center'><p>x</p></div></body></html>";
        assert_eq!(heading_text(html), None);
    }

    #[test]
    fn empty_heading_yields_none() {
        assert_eq!(heading_text("<h1>   </h1>"), None);
    }

    #[test]
    fn nested_markup_is_stripped() {
        let html = "<H1>Case <strong>Was</strong> Approved</H1>";
        assert_eq!(heading_text(html).as_deref(), Some("Case Was Approved"));
    }

    #[test]
    fn commented_out_markup_is_not_live() {
        let html = "<!-- legacy banner: <h1>Maintenance Notice</h1> -->\
                    <h1>Case Was Approved</h1>";
        assert_eq!(heading_text(html).as_deref(), Some("Case Was Approved"));
    }

    #[test]
    fn pre_block_is_not_a_paragraph() {
        let html = "<div class=\"text-center\"><pre>raw</pre><p>real text</p></div>";
        assert_eq!(centered_paragraph_text(html).as_deref(), Some("real text"));
    }

    #[test]
    fn paragraphs_outside_the_container_are_ignored() {
        let html = "<p>footer boilerplate</p>\
                    <div class=\"text-center\"><p>the detail</p></div>";
        assert_eq!(centered_paragraph_text(html).as_deref(), Some("the detail"));
    }

    #[test]
    fn page_without_container_yields_none() {
        assert_eq!(centered_paragraph_text("<h1>Status</h1>"), None);
    }
}
