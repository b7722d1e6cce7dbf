use std::rc::Rc;

use desk_wm::window::{CaptureState, ChromeHit, LayoutBranch};
use desk_wm::{AppCatalog, AppId, Point, PointerEvent, Rect, Size, Viewport, WindowManager};

fn managed() -> (WindowManager, Rc<CaptureState>) {
    let capture = Rc::new(CaptureState::new());
    let wm = WindowManager::with_capture(
        AppCatalog::default(),
        Viewport::new(1200, 800),
        capture.clone(),
    );
    (wm, capture)
}

#[test]
fn capture_is_held_for_exactly_one_session() {
    let (mut wm, capture) = managed();
    wm.open(AppId::Notes, None);
    // Notes sits at (400, 150) with size 400x500.
    wm.handle_pointer(&PointerEvent::down(600, 160));
    assert!(capture.is_active());
    wm.handle_pointer(&PointerEvent::moved(-100, 900));
    wm.handle_pointer(&PointerEvent::up(-100, 900));
    assert!(!capture.is_active());
    assert_eq!(capture.acquisitions(), 1);
    // Dragged partially off screen; nothing clamps the origin.
    assert_eq!(
        wm.window(AppId::Notes).map(|r| r.position()),
        Some(Point::new(-300, 890))
    );
}

#[test]
fn press_on_background_window_raises_it_before_dragging() {
    let (mut wm, _) = managed();
    wm.open(AppId::Finder, None);
    wm.open(AppId::Notes, None);
    // Finder's title bar at (150..1050, 75..111), outside Notes (420.., 170..).
    assert_eq!(
        wm.hit_test(Point::new(200, 90)),
        Some((AppId::Finder, ChromeHit::TitleBar))
    );
    wm.handle_pointer(&PointerEvent::down(200, 90));
    assert_eq!(wm.active(), Some(AppId::Finder));
    assert_eq!(wm.registry().topmost().map(|r| r.id()), Some(AppId::Finder));
    assert_eq!(wm.interaction_target(), Some(AppId::Finder));
}

#[test]
fn overlapping_windows_hit_topmost_first() {
    let (mut wm, _) = managed();
    wm.open(AppId::Finder, None);
    wm.open(AppId::Notes, None);
    // Notes cascaded to (420, 170), on top of Finder.
    let inside_both = Point::new(500, 400);
    assert_eq!(
        wm.hit_test(inside_both),
        Some((AppId::Notes, ChromeHit::Content))
    );
    wm.focus(AppId::Finder);
    assert_eq!(
        wm.hit_test(inside_both),
        Some((AppId::Finder, ChromeHit::Content))
    );
}

#[test]
fn west_resize_freezes_at_last_valid_edge() {
    let (mut wm, _) = managed();
    wm.open(AppId::Notes, None);
    // West handle is the leftmost 6px of (400, 150, 400, 500).
    wm.handle_pointer(&PointerEvent::down(402, 300));
    wm.handle_pointer(&PointerEvent::moved(452, 300));
    assert_eq!(
        wm.layout_for(AppId::Notes).map(|l| l.rect),
        Some(Rect::new(450, 150, 350, 500))
    );
    // Would leave 250px; the edge stays where it was.
    wm.handle_pointer(&PointerEvent::moved(552, 300));
    assert_eq!(
        wm.layout_for(AppId::Notes).map(|l| l.rect),
        Some(Rect::new(450, 150, 350, 500))
    );
    wm.handle_pointer(&PointerEvent::up(552, 300));
    let notes = wm.window(AppId::Notes).expect("notes");
    assert_eq!(notes.position(), Point::new(450, 150));
    assert_eq!(notes.size(), Size::new(350, 500));
}

#[test]
fn presses_during_a_session_are_swallowed() {
    let (mut wm, capture) = managed();
    wm.open(AppId::Finder, None);
    wm.open(AppId::Notes, None);
    wm.handle_pointer(&PointerEvent::down(600, 180));
    let target = wm.interaction_target();
    // A second press (another button, a touch) must not start anything.
    assert!(wm.handle_pointer(&PointerEvent::down(200, 90)));
    assert!(wm.handle_pointer(&PointerEvent::double_click(200, 90)));
    assert_eq!(wm.interaction_target(), target);
    assert_eq!(capture.acquisitions(), 1);
}

#[test]
fn closing_the_dragged_window_discards_the_drag() {
    let (mut wm, capture) = managed();
    wm.open(AppId::Notes, None);
    wm.handle_pointer(&PointerEvent::down(600, 160));
    wm.handle_pointer(&PointerEvent::moved(650, 200));
    assert!(wm.close(AppId::Notes));
    assert!(!capture.is_active());
    assert!(!wm.handle_pointer(&PointerEvent::up(650, 200)));

    // Re-opening starts from fresh defaults, not the abandoned drag.
    wm.open(AppId::Notes, None);
    assert_eq!(
        wm.window(AppId::Notes).map(|r| r.position()),
        Some(Point::new(400, 150))
    );
}

#[test]
fn draw_plan_suppresses_animation_only_for_dragged_window() {
    let (mut wm, _) = managed();
    wm.open(AppId::Finder, None);
    wm.open(AppId::Notes, None);
    wm.handle_pointer(&PointerEvent::down(600, 180));
    let plan = wm.draw_plan();
    assert_eq!(plan.len(), 2);
    for draw in &plan {
        assert_eq!(draw.animate, draw.id != AppId::Notes);
        assert_eq!(draw.branch, LayoutBranch::Normal);
    }
}
