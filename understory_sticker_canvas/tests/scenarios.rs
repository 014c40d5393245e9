// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End‑to‑end scenarios for `understory_sticker_canvas`.
//!
//! Each test drives a [`Canvas`] the way a host event loop would: viewport
//! layout, background load callbacks, gestures and drops, in arrival order.

use kurbo::{Point, Size, Vec2};
use understory_event_state::drag::DragState;
use understory_event_state::gesture::GesturePhase;
use understory_event_state::pinch::PinchState;
use understory_sticker_canvas::{
    BackgroundStatus, Canvas, CanvasConfig, DropOutcome, DropPayload, GestureEvent, LoadOutcome,
    PayloadKind,
};

/// A decoded image as the host would hand it over.
#[derive(Debug)]
struct Image {
    width: u32,
    height: u32,
}

impl understory_sticker_canvas::BackgroundImage for Image {
    fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

fn laid_out_canvas() -> Canvas<Image> {
    let mut canvas = Canvas::new(CanvasConfig::default()).unwrap();
    canvas.set_viewport_size(Size::new(400.0, 800.0));
    canvas
}

#[test]
fn fit_then_drop_text_at_center() {
    let mut canvas = laid_out_canvas();
    let url = "https://example.com/landscape.png";

    assert!(canvas.set_background_source(url));
    assert_eq!(
        canvas.on_background_loaded(
            Image {
                width: 200,
                height: 100,
            },
            url,
        ),
        LoadOutcome::Applied { fitted: true }
    );
    assert_eq!(canvas.document().steady_zoom(), 2.0);
    assert_eq!(canvas.document().steady_pan(), Vec2::ZERO);

    assert!(
        canvas
            .handle_drop(&[DropPayload::text("😀")], Point::new(200.0, 400.0))
            .is_handled()
    );
    let items = canvas.document().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].symbol(), "😀");
    assert_eq!(items[0].location(), Point::ORIGIN);
    assert_eq!(items[0].font_size(), 40.0);

    // Rendered at the viewport center, twice the nominal size.
    let placement = canvas.item_placements().next().unwrap();
    assert_eq!(placement.position, Point::new(200.0, 400.0));
    assert_eq!(placement.font_size, 80.0);
}

#[test]
fn pan_at_zoom_two_commits_half_the_translation() {
    let mut canvas = laid_out_canvas();
    canvas.set_background_source("bg");
    canvas.on_background_loaded(
        Image {
            width: 200,
            height: 100,
        },
        "bg",
    );

    canvas
        .handle_gesture(GestureEvent::Pan(GesturePhase::Began(Vec2::ZERO)))
        .unwrap();
    canvas
        .handle_gesture(GestureEvent::Pan(GesturePhase::Changed(Vec2::new(40.0, 0.0))))
        .unwrap();
    assert_eq!(canvas.gesture_state().in_flight_pan, Vec2::new(20.0, 0.0));
    assert_eq!(canvas.document().steady_pan(), Vec2::ZERO);

    canvas
        .handle_gesture(GestureEvent::Pan(GesturePhase::Ended(Vec2::new(40.0, 0.0))))
        .unwrap();
    assert_eq!(canvas.document().steady_pan(), Vec2::new(20.0, 0.0));
    assert_eq!(canvas.gesture_state().in_flight_pan, Vec2::ZERO);
}

#[test]
fn superseded_load_is_ignored_and_latest_wins() {
    let mut canvas = laid_out_canvas();
    canvas.set_background_source("first");
    canvas.set_background_source("second");

    // The first load finishes late.
    assert_eq!(
        canvas.on_background_loaded(
            Image {
                width: 10,
                height: 10,
            },
            "first",
        ),
        LoadOutcome::Stale
    );
    assert!(canvas.is_loading());
    assert!(canvas.background_placement().is_none());

    assert_eq!(
        canvas.on_background_loaded(
            Image {
                width: 800,
                height: 400,
            },
            "second",
        ),
        LoadOutcome::Applied { fitted: true }
    );
    assert_eq!(canvas.document().steady_zoom(), 0.5);
    assert_eq!(canvas.background_placement().unwrap().image.width, 800);
}

#[test]
fn dropped_url_starts_a_new_load() {
    let mut canvas = laid_out_canvas();
    let payloads = [DropPayload::url("https://example.com/a.png"), DropPayload::text("🎈")];
    assert_eq!(
        canvas.handle_drop(&payloads, Point::new(0.0, 0.0)),
        DropOutcome::BackgroundReplaced
    );
    assert_eq!(
        canvas.document().background_status(),
        BackgroundStatus::Loading
    );
    assert!(canvas.document().items().is_empty());

    assert_eq!(
        canvas.on_background_load_failed("https://example.com/a.png"),
        LoadOutcome::Failed
    );
    assert_eq!(canvas.document().background_status(), BackgroundStatus::Failed);
}

#[test]
fn async_payloads_resolve_out_of_order() {
    let mut canvas = laid_out_canvas();
    let mut pending = canvas
        .begin_drop(
            [PayloadKind::Other, PayloadKind::Text, PayloadKind::Url],
            Point::new(200.0, 400.0),
        )
        .unwrap();

    // The URL resolves before the text even though it was listed later.
    assert!(pending.resolve(2, "https://example.com/bg.png"));
    assert!(pending.resolve(1, "🐙"));
    assert!(!pending.resolve(2, "https://example.com/other.png"));

    assert_eq!(canvas.dispatch_drop(pending), DropOutcome::BackgroundReplaced);
    assert_eq!(
        canvas.document().background_source(),
        Some("https://example.com/bg.png")
    );
    assert!(canvas.document().items().is_empty());
}

#[test]
fn dropping_the_current_background_keeps_the_user_zoom() {
    let mut canvas = laid_out_canvas();
    canvas.set_background_source("a");
    canvas.on_background_loaded(
        Image {
            width: 200,
            height: 100,
        },
        "a",
    );
    canvas
        .handle_gesture(GestureEvent::Zoom(GesturePhase::Began(1.0)))
        .unwrap();
    canvas
        .handle_gesture(GestureEvent::Zoom(GesturePhase::Ended(1.5)))
        .unwrap();
    assert_eq!(canvas.document().steady_zoom(), 3.0);

    let mut pending = canvas
        .begin_drop([PayloadKind::Url], Point::new(10.0, 10.0))
        .unwrap();
    assert!(pending.resolve(0, "a"));
    let outcome = canvas.dispatch_drop(pending);
    assert_eq!(outcome, DropOutcome::BackgroundUnchanged);
    assert!(outcome.is_handled());
    assert!(!outcome.needs_load());
    assert_eq!(canvas.document().background_status(), BackgroundStatus::Loaded);

    // The synchronous path reports the same thing.
    assert_eq!(
        canvas.handle_drop(&[DropPayload::url("a")], Point::ORIGIN),
        DropOutcome::BackgroundUnchanged
    );
    assert_eq!(canvas.document().steady_zoom(), 3.0);
    assert!(canvas.background_placement().is_some());
}

#[test]
fn pointer_adapters_drive_gestures() {
    let mut canvas = laid_out_canvas();

    // Two fingers spread from 100px to 300px apart.
    let mut pinch = PinchState::default();
    let began = pinch
        .touch_start(Point::new(100.0, 400.0), Point::new(200.0, 400.0))
        .unwrap();
    canvas.handle_gesture(GestureEvent::Zoom(began)).unwrap();
    let changed = pinch
        .touch_move(Point::new(50.0, 400.0), Point::new(350.0, 400.0))
        .unwrap();
    canvas.handle_gesture(GestureEvent::Zoom(changed)).unwrap();
    assert_eq!(canvas.effective_transform().zoom, 3.0);

    // While still pinching, drag with one pointer.
    let mut drag = DragState::default();
    canvas
        .handle_gesture(GestureEvent::Pan(drag.press(Point::new(10.0, 10.0))))
        .unwrap();
    let moved = drag.motion(Point::new(40.0, 10.0)).unwrap();
    canvas.handle_gesture(GestureEvent::Pan(moved)).unwrap();
    assert_eq!(canvas.gesture_state().in_flight_pan, Vec2::new(10.0, 0.0));

    canvas
        .handle_gesture(GestureEvent::Zoom(pinch.touch_end().unwrap()))
        .unwrap();
    let released = drag.release(Point::new(40.0, 10.0)).unwrap();
    canvas.handle_gesture(GestureEvent::Pan(released)).unwrap();

    assert_eq!(canvas.document().steady_zoom(), 3.0);
    assert_eq!(canvas.document().steady_pan(), Vec2::new(10.0, 0.0));
    assert!(canvas.item_placements().next().is_none());
}

#[test]
fn interrupted_gestures_leave_no_trace() {
    let mut canvas = laid_out_canvas();
    canvas.place("🍕", Point::new(-5.0, 5.0), 24.0).unwrap();
    let before = canvas.item_placements().next().unwrap().position;

    canvas
        .handle_gesture(GestureEvent::Zoom(GesturePhase::Began(1.0)))
        .unwrap();
    canvas
        .handle_gesture(GestureEvent::Zoom(GesturePhase::Changed(2.5)))
        .unwrap();
    canvas
        .handle_gesture(GestureEvent::Pan(GesturePhase::Changed(Vec2::new(30.0, 30.0))))
        .unwrap();
    assert_ne!(canvas.item_placements().next().unwrap().position, before);

    canvas.cancel_gestures();
    assert_eq!(canvas.item_placements().next().unwrap().position, before);
    assert_eq!(canvas.document().steady_zoom(), 1.0);
    assert_eq!(canvas.document().steady_pan(), Vec2::ZERO);
}
