use crate::model::RenderRequest;
use crate::xml::{SVG_NS, escape_xml, fmt};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text!";
pub const CONVERSION_FAILED_COMMENT: &str =
    "<!-- Warning: Text-to-path conversion failed, showing original text -->";

const NOTICE_COLOR: &str = "#d32f2f";

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// Canvas size estimated from the character count and font size.
pub fn placeholder_size(text: &str, font_size: f64) -> (f64, f64) {
    let char_width = font_size * 0.6;
    let padding = 40.0;
    let width = (text.chars().count() as f64 * char_width + padding).max(200.0);
    let height = (font_size * 2.0 + 40.0).max(80.0);
    (width, height)
}

fn centered_text_svg(
    width: f64,
    height: f64,
    text: &str,
    family: &str,
    font_size: f64,
    color: &str,
) -> String {
    let (w, h) = (fmt(width), fmt(height));
    format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}"><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="{}" font-size="{}" fill="{}">{}</text></svg>"#,
        escape_xml(family),
        fmt(font_size),
        escape_xml(color),
        escape_xml(text),
    )
}

/// Builds the `<text>` document the shaping collaborator converts.
pub fn build_placeholder(request: &RenderRequest, family: &str) -> Placeholder {
    let (width, height) = placeholder_size(&request.text, request.font_size);
    Placeholder {
        svg: centered_text_svg(
            width,
            height,
            &request.text,
            family,
            request.font_size,
            &request.color,
        ),
        width,
        height,
    }
}

/// Document shown instead of a conversion when the text is empty.
pub fn empty_input_notice() -> String {
    centered_text_svg(
        200.0,
        80.0,
        EMPTY_INPUT_MESSAGE,
        "sans-serif",
        16.0,
        NOTICE_COLOR,
    )
}

/// Marks a placeholder as unconverted output.
pub fn annotate_conversion_failure(svg: &str) -> String {
    match svg.rfind("</svg>") {
        Some(idx) => format!("{}{CONVERSION_FAILED_COMMENT}{}", &svg[..idx], &svg[idx..]),
        None => format!("{svg}{CONVERSION_FAILED_COMMENT}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_has_minimums() {
        assert_eq!(placeholder_size("Hi", 16.0), (200.0, 80.0));
        let (w, h) = placeholder_size("Hello World!", 48.0);
        assert!((w - (12.0 * 48.0 * 0.6 + 40.0)).abs() < 1e-9);
        assert_eq!(h, 136.0);
    }

    #[test]
    fn placeholder_escapes_text_and_attributes() {
        let req = RenderRequest::new(r#"<a & 'b'>"#, 20.0, "#ff0000");
        let p = build_placeholder(&req, r#"My "Font""#);
        assert!(p.svg.contains("&lt;a &amp; &#039;b&#039;&gt;</text>"));
        assert!(p.svg.contains(r#"font-family="My &quot;Font&quot;""#));

        let doc = roxmltree::Document::parse(&p.svg).unwrap();
        let text = doc
            .descendants()
            .find(|n| n.has_tag_name("text"))
            .unwrap();
        assert_eq!(text.text(), Some("<a & 'b'>"));
        assert_eq!(text.attribute("fill"), Some("#ff0000"));
        assert_eq!(text.attribute("font-size"), Some("20"));
        assert_eq!(doc.root_element().attribute("width"), Some("200"));
    }

    #[test]
    fn empty_notice_is_well_formed() {
        let svg = empty_input_notice();
        let doc = roxmltree::Document::parse(&svg).unwrap();
        let text = doc.descendants().find(|n| n.has_tag_name("text")).unwrap();
        assert_eq!(text.text(), Some(EMPTY_INPUT_MESSAGE));
        assert!(text.attribute("fill").is_some());
    }

    #[test]
    fn failure_comment_sits_inside_root() {
        let annotated = annotate_conversion_failure(r#"<svg xmlns="http://www.w3.org/2000/svg"><text>x</text></svg>"#);
        assert!(annotated.ends_with(&format!("{CONVERSION_FAILED_COMMENT}</svg>")));
        assert!(roxmltree::Document::parse(&annotated).is_ok());
    }
}
