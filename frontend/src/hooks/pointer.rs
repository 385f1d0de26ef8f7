use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

/// Last pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// CSS transform centring a circle of `diameter` px on the pointer.
    pub fn follower_transform(self, diameter: f64) -> String {
        let radius = diameter / 2.0;
        format!("translate({}px, {}px)", self.x - radius, self.y - radius)
    }
}

/// Subscribes to window `mousemove` for as long as the calling component
/// is mounted. `None` until the pointer first moves.
#[hook]
pub fn use_pointer_position() -> Option<PointerPosition> {
    let position = use_state_eq(|| None::<PointerPosition>);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(Some(PointerPosition {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            }));
        });
    }

    *position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_is_centred_on_pointer() {
        let pos = PointerPosition { x: 300.0, y: 120.0 };
        assert_eq!(pos.follower_transform(96.0), "translate(252px, 72px)");
    }

    #[test]
    fn test_follower_near_origin_goes_negative() {
        let pos = PointerPosition { x: 10.0, y: 0.0 };
        assert_eq!(pos.follower_transform(96.0), "translate(-38px, -48px)");
    }
}
