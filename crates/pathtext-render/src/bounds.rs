use pathtext_core::bounds::{BoundsProvider, Rect};
use pathtext_core::xml::{SVG_NS, escape_xml};

/// Measures path data by letting `usvg` parse it as a standalone document.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsvgBounds;

impl UsvgBounds {
    pub fn new() -> Self {
        Self
    }
}

fn first_path(group: &usvg::Group) -> Option<&usvg::Path> {
    group.children().iter().find_map(|node| match node {
        usvg::Node::Path(path) => Some(path.as_ref()),
        usvg::Node::Group(g) => first_path(g),
        usvg::Node::Text(_) | usvg::Node::Image(_) => None,
    })
}

impl BoundsProvider for UsvgBounds {
    fn path_bounds(&self, d: &str) -> Option<Rect> {
        let svg = format!(
            r#"<svg xmlns="{SVG_NS}" width="1" height="1"><path d="{}"/></svg>"#,
            escape_xml(d)
        );
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).ok()?;
        let bounds = first_path(tree.root())?.bounding_box();
        Some(Rect::new(
            f64::from(bounds.x()),
            f64::from(bounds.y()),
            f64::from(bounds.width()),
            f64::from(bounds.height()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_untransformed_geometry() {
        let r = UsvgBounds::new()
            .path_bounds("M10 20 L30 20 L30 45 Z")
            .unwrap();
        assert_eq!(r, Rect::new(10.0, 20.0, 20.0, 25.0));
    }

    #[test]
    fn curves_are_measured_by_extent() {
        // The control point sits at y=20 but the curve only reaches y=10.
        let r = UsvgBounds::new()
            .path_bounds("M0 0 Q10 20 20 0 Z")
            .unwrap();
        assert!(r.x.abs() < 1e-4 && r.y.abs() < 1e-4, "{r:?}");
        assert!((r.width - 20.0).abs() < 1e-4, "{r:?}");
        assert!((r.height - 10.0).abs() < 1e-4, "{r:?}");
    }

    #[test]
    fn invalid_data_has_no_bounds() {
        assert_eq!(UsvgBounds::new().path_bounds(""), None);
        assert_eq!(UsvgBounds::new().path_bounds("not a path"), None);
    }
}
