// Image fit scaling for hybrid segments
// Icons must fit a square of half the control height

use crate::core::{IconImage, Size};

/// Side of the square an icon has to fit in for a control of `layout_height`
pub fn fit_bound(layout_height: f64) -> f64 {
    layout_height / 2.0
}

/// Size an icon is displayed at inside a control of `layout_height`
///
/// Icons already inside the bound pass through. Larger ones are scaled
/// uniformly so their height equals the bound; the width follows the same
/// ratio and may exceed the bound for wide images.
pub fn fit_size(size: Size, layout_height: f64) -> Size {
    let bound = fit_bound(layout_height);
    if size.width <= bound && size.height <= bound {
        return size;
    }
    if size.height <= 0.0 {
        return Size::new(0.0, 0.0);
    }
    Size::new(size.width * bound / size.height, bound)
}

/// Icon handle resized with `fit_size`
pub fn fit_icon(icon: &IconImage, layout_height: f64) -> IconImage {
    icon.with_size(fit_size(icon.size, layout_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_icon_scaled_to_bound_height() {
        let fitted = fit_size(Size::new(100.0, 50.0), 88.0);
        assert_eq!(fitted, Size::new(88.0, 44.0));
    }

    #[test]
    fn test_small_icon_passes_through() {
        assert_eq!(fit_size(Size::new(44.0, 44.0), 88.0), Size::new(44.0, 44.0));
        assert_eq!(fit_size(Size::new(20.0, 10.0), 88.0), Size::new(20.0, 10.0));
    }

    #[test]
    fn test_tall_icon_keeps_aspect_ratio() {
        let fitted = fit_size(Size::new(30.0, 96.0), 96.0);
        assert_eq!(fitted, Size::new(15.0, 48.0));
    }

    #[test]
    fn test_bound_tracks_layout_height() {
        let icon = IconImage::new("star", 40.0, 40.0);
        assert_eq!(fit_icon(&icon, 88.0).size, Size::new(40.0, 40.0));
        assert_eq!(fit_icon(&icon, 44.0).size, Size::new(22.0, 22.0));
        assert_eq!(fit_icon(&icon, 44.0).name, "star");
    }
}
