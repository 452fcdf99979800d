//! Touch to pointer translation.

use super::events::{PointerEvent, TouchEvent, TouchPoint};
use crate::draw::Point;

/// Translates a touch event into the pointer vocabulary.
///
/// Only the primary touch is honored; its client coordinates are made
/// surface-local by subtracting `origin`, the surface's client position.
/// A start or move without any touch point yields nothing.
pub fn normalize_touch(event: &TouchEvent, origin: Point) -> Option<PointerEvent> {
    let to_local = |points: &[TouchPoint]| {
        points
            .first()
            .map(|touch| Point::new(touch.client_x - origin.x, touch.client_y - origin.y))
    };

    match event {
        TouchEvent::Start(points) => to_local(points).map(PointerEvent::Down),
        TouchEvent::Move(points) => to_local(points).map(PointerEvent::Move),
        TouchEvent::End => Some(PointerEvent::Up),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_maps_to_down_at_local_coordinates() {
        let event = TouchEvent::Start(vec![TouchPoint::new(110.0, 75.0)]);
        assert_eq!(
            normalize_touch(&event, Point::new(10.0, 25.0)),
            Some(PointerEvent::Down(Point::new(100.0, 50.0)))
        );
    }

    #[test]
    fn move_uses_primary_touch_only() {
        let event = TouchEvent::Move(vec![TouchPoint::new(5.0, 6.0), TouchPoint::new(300.0, 300.0)]);
        assert_eq!(
            normalize_touch(&event, Point::new(0.0, 0.0)),
            Some(PointerEvent::Move(Point::new(5.0, 6.0)))
        );
    }

    #[test]
    fn end_maps_to_up() {
        assert_eq!(
            normalize_touch(&TouchEvent::End, Point::new(3.0, 3.0)),
            Some(PointerEvent::Up)
        );
    }

    #[test]
    fn empty_touch_list_is_dropped() {
        assert_eq!(normalize_touch(&TouchEvent::Start(vec![]), Point::new(0.0, 0.0)), None);
        assert_eq!(normalize_touch(&TouchEvent::Move(vec![]), Point::new(0.0, 0.0)), None);
    }
}
