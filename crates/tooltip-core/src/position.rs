//! Tooltip placement math

use chart_tooltip_shared::{
    AnchorPosition, HorizontalAnchor, Placement, Point, Size, TooltipOffset, VerticalAnchor,
};

/// Coordinate frame the tooltip is positioned in
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerFrame {
    /// Tooltip lives inside the chart container
    Container {
        /// Top-left of the container's bounding box, in viewport coordinates
        origin: Point,
        /// Page scroll offset
        scroll: Point,
        /// Point geometry that replaces the pointer in anchor-to-point mode
        anchor: Option<Point>,
    },
    /// Tooltip lives at the document body
    Page,
}

/// Offset of the tooltip's top-left corner from the anchor point.
///
/// Returns `None` when either anchor keyword is unrecognized.
pub fn anchor_offset(position: AnchorPosition, offset: TooltipOffset, size: Size) -> Option<Point> {
    let x = match position.x {
        HorizontalAnchor::Left => -size.width + offset.x,
        HorizontalAnchor::Right => -offset.x,
        HorizontalAnchor::Center => -size.width / 2.0 + offset.x,
        HorizontalAnchor::Unrecognized => return None,
    };

    let y = match position.y {
        VerticalAnchor::Top => -size.height + offset.y,
        VerticalAnchor::Bottom => -offset.y,
        VerticalAnchor::Middle => -size.height / 2.0 + offset.y,
        VerticalAnchor::Unrecognized => return None,
    };

    Some(Point::new(x, y))
}

/// Point the tooltip is anchored to, before offsets
pub fn anchor_point(pointer: Point, frame: PointerFrame) -> Point {
    match frame {
        PointerFrame::Container {
            origin,
            scroll,
            anchor,
        } => anchor.unwrap_or(Point::new(
            pointer.x - origin.x - scroll.x,
            pointer.y - origin.y - scroll.y,
        )),
        PointerFrame::Page => pointer,
    }
}

/// Final `top`/`left` for the tooltip, given the pointer's page coordinates
pub fn compute_placement(
    position: AnchorPosition,
    offset: TooltipOffset,
    size: Size,
    pointer: Point,
    frame: PointerFrame,
) -> Option<Placement> {
    let shift = anchor_offset(position, offset, size)?;
    let base = anchor_point(pointer, frame);

    Some(Placement {
        top: base.y + shift.y,
        left: base.x + shift.x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: HorizontalAnchor, y: VerticalAnchor) -> AnchorPosition {
        AnchorPosition { x, y }
    }

    #[test]
    fn test_horizontal_offsets() {
        let size = Size::new(80.0, 30.0);
        let offset = TooltipOffset { x: 4.0, y: 0.0 };

        let left = anchor_offset(at(HorizontalAnchor::Left, VerticalAnchor::Top), offset, size);
        assert_eq!(left.unwrap().x, -76.0);

        let right = anchor_offset(at(HorizontalAnchor::Right, VerticalAnchor::Top), offset, size);
        assert_eq!(right.unwrap().x, -4.0);

        let center = anchor_offset(at(HorizontalAnchor::Center, VerticalAnchor::Top), offset, size);
        assert_eq!(center.unwrap().x, -36.0);
    }

    #[test]
    fn test_center_with_zero_offset_is_half_width() {
        let size = Size::new(120.0, 40.0);
        let offset = TooltipOffset { x: 0.0, y: 0.0 };
        let shift = anchor_offset(AnchorPosition::default(), offset, size).unwrap();
        assert_eq!(shift.x, -60.0);
    }

    #[test]
    fn test_vertical_offsets() {
        let size = Size::new(80.0, 30.0);
        let offset = TooltipOffset::default();

        let top = anchor_offset(at(HorizontalAnchor::Center, VerticalAnchor::Top), offset, size);
        assert_eq!(top.unwrap().y, -50.0);

        let bottom = anchor_offset(
            at(HorizontalAnchor::Center, VerticalAnchor::Bottom),
            offset,
            size,
        );
        assert_eq!(bottom.unwrap().y, 20.0);

        let middle = anchor_offset(
            at(HorizontalAnchor::Center, VerticalAnchor::Middle),
            offset,
            size,
        );
        assert_eq!(middle.unwrap().y, -35.0);
    }

    #[test]
    fn test_unrecognized_keyword() {
        let size = Size::new(80.0, 30.0);
        let offset = TooltipOffset::default();
        let sideways = at(HorizontalAnchor::Unrecognized, VerticalAnchor::Top);
        assert!(anchor_offset(sideways, offset, size).is_none());

        let upside = at(HorizontalAnchor::Left, VerticalAnchor::Unrecognized);
        assert!(anchor_offset(upside, offset, size).is_none());
    }

    #[test]
    fn test_container_frame() {
        let frame = PointerFrame::Container {
            origin: Point::new(100.0, 50.0),
            scroll: Point::new(0.0, 200.0),
            anchor: None,
        };
        let placement = compute_placement(
            AnchorPosition::default(),
            TooltipOffset { x: 0.0, y: 0.0 },
            Size::new(40.0, 20.0),
            Point::new(300.0, 400.0),
            frame,
        )
        .unwrap();

        assert_eq!(placement.left, 300.0 - 100.0 - 20.0);
        assert_eq!(placement.top, 400.0 - 50.0 - 200.0 - 20.0);
    }

    #[test]
    fn test_anchor_replaces_pointer() {
        let frame = PointerFrame::Container {
            origin: Point::new(100.0, 50.0),
            scroll: Point::default(),
            anchor: Some(Point::new(10.0, 20.0)),
        };
        assert_eq!(anchor_point(Point::new(300.0, 400.0), frame), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_page_frame() {
        let placement = compute_placement(
            AnchorPosition::default(),
            TooltipOffset::default(),
            Size::new(40.0, 20.0),
            Point::new(300.0, 400.0),
            PointerFrame::Page,
        )
        .unwrap();

        assert_eq!(placement, Placement { top: 360.0, left: 280.0 });
    }
}
