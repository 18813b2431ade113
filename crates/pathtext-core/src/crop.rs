use crate::bounds::{BoundsProvider, Rect};
use crate::error::CropError;
use crate::xml::{Rewrite, fmt, serialize};

pub const DEFAULT_PADDING: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Cropped {
    pub svg: String,
    /// The new viewBox, padding included.
    pub view_box: Rect,
}

/// Union of the bounds reported for every `<path>` in `svg`.
///
/// Paths the provider cannot measure are skipped.
pub fn path_bounds_union<B: BoundsProvider + ?Sized>(
    doc: &roxmltree::Document<'_>,
    bounds: &B,
) -> Result<Rect, CropError> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut saw_path = false;

    for path in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
    {
        saw_path = true;
        let Some(d) = path.attribute("d") else {
            continue;
        };
        match bounds.path_bounds(d) {
            Some(r) if r.is_finite() => {
                min_x = min_x.min(r.x);
                min_y = min_y.min(r.y);
                max_x = max_x.max(r.max_x());
                max_y = max_y.max(r.max_y());
            }
            _ => tracing::debug!(d, "no bounds for path"),
        }
    }

    if !saw_path {
        return Err(CropError::NoPaths);
    }
    if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
        return Err(CropError::NoFiniteBounds);
    }
    Ok(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Shrinks the canvas of `svg` to the union of its path bounds plus `padding` on every side.
///
/// Group transforms are removed so the geometry is not offset twice once the viewBox moves.
pub fn crop_to_path_bounds<B: BoundsProvider + ?Sized>(
    svg: &str,
    bounds: &B,
    padding: f64,
) -> Result<Cropped, CropError> {
    let doc = roxmltree::Document::parse(svg).map_err(|e| CropError::Unparseable {
        message: e.to_string(),
    })?;
    let union = path_bounds_union(&doc, bounds)?;

    let view_box = Rect::new(
        union.x - padding,
        union.y - padding,
        union.width + padding * 2.0,
        union.height + padding * 2.0,
    );
    let rewrite = Rewrite {
        root_attributes: vec![
            ("width", fmt(view_box.width.ceil())),
            ("height", fmt(view_box.height.ceil())),
            (
                "viewBox",
                format!(
                    "{} {} {} {}",
                    fmt(view_box.x),
                    fmt(view_box.y),
                    fmt(view_box.width),
                    fmt(view_box.height)
                ),
            ),
        ],
        strip_group_transforms: true,
    };

    Ok(Cropped {
        svg: serialize(&doc, &rewrite),
        view_box,
    })
}

/// Best-effort variant of [`crop_to_path_bounds`]: returns the input unchanged when cropping is
/// not possible. The flag reports whether the document was cropped.
pub fn crop_or_keep<B: BoundsProvider + ?Sized>(svg: &str, bounds: &B, padding: f64) -> (String, bool) {
    match crop_to_path_bounds(svg, bounds, padding) {
        Ok(cropped) => (cropped.svg, true),
        Err(err) => {
            tracing::warn!(error = %err, "cropping unavailable, keeping uncropped output");
            (svg.to_string(), false)
        }
    }
}
