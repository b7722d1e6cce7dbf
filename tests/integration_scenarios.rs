use desk_wm::layout::floating::ResizeDirection;
use desk_wm::window::LayoutBranch;
use desk_wm::{
    AppCatalog, AppId, AppProfile, OpenOutcome, Payload, Point, Size, Viewport, WindowManager,
};

fn desktop(width: u32) -> WindowManager {
    WindowManager::new(AppCatalog::default(), Viewport::new(width, 800))
}

#[test]
fn finder_opens_centered_on_empty_desktop() {
    let mut wm = desktop(1200);
    assert_eq!(wm.open(AppId::Finder, None), OpenOutcome::Created);
    let finder = wm.window(AppId::Finder).expect("finder");
    assert_eq!(finder.size(), Size::new(900, 650));
    assert_eq!(finder.position().x, 150);
    assert_eq!(wm.active_title(), Some("Finder"));
}

#[test]
fn reopening_calculator_only_refocuses() {
    let mut wm = desktop(1200);
    wm.open(AppId::Calculator, None);
    wm.open(AppId::Notes, None);
    let before = wm.window(AppId::Calculator).cloned().expect("calculator");

    assert_eq!(wm.open(AppId::Calculator, None), OpenOutcome::Refocused);
    let after = wm.window(AppId::Calculator).expect("calculator");
    let calculators = wm
        .registry()
        .records()
        .iter()
        .filter(|r| r.id() == AppId::Calculator)
        .count();
    assert_eq!(calculators, 1);
    assert!(after.z_index() > before.z_index());
    assert_eq!(after.restored_rect(), before.restored_rect());
    assert_eq!(wm.active(), Some(AppId::Calculator));
}

#[test]
fn south_east_resize_clamps_to_minimum_on_commit() {
    let mut catalog = AppCatalog::default();
    catalog.set_profile(AppId::Photos, AppProfile::new("Photos", Size::new(400, 300)));
    let mut wm = WindowManager::new(catalog, Viewport::new(1200, 800));
    wm.open(AppId::Photos, None);
    // Centered at (400, 250); bottom-right corner ends at (800, 550).
    let grab = Point::new(795, 545);
    assert!(wm.begin_resize(AppId::Photos, ResizeDirection::SOUTH_EAST, grab));
    wm.pointer_moved(Point::new(595, 345));
    assert!(wm.pointer_released());
    let photos = wm.window(AppId::Photos).expect("photos");
    assert_eq!(photos.size(), Size::new(300, 200));
    assert_eq!(photos.position(), Point::new(400, 250));
}

#[test]
fn maximize_round_trip_restores_geometry() {
    let mut wm = desktop(1200);
    wm.open(AppId::Notes, None);
    wm.begin_move(AppId::Notes, Point::new(500, 160));
    wm.pointer_moved(Point::new(430, 220));
    wm.pointer_released();
    let before = wm.window(AppId::Notes).map(|r| r.restored_rect());

    wm.toggle_maximize(AppId::Notes);
    assert_eq!(
        wm.layout_for(AppId::Notes).map(|l| l.branch),
        Some(LayoutBranch::Maximized)
    );
    wm.toggle_maximize(AppId::Notes);
    assert_eq!(wm.window(AppId::Notes).map(|r| r.restored_rect()), before);
    assert_eq!(wm.layout_for(AppId::Notes).map(|l| l.rect), before);
}

#[test]
fn closing_active_window_leaves_nothing_active() {
    let mut wm = desktop(1200);
    wm.open(AppId::Finder, None);
    wm.open(AppId::Terminal, None);
    assert!(wm.close(AppId::Terminal));
    assert_eq!(wm.active(), None);
    assert_eq!(wm.active_title(), None);
    assert!(wm.focus(AppId::Finder));
    assert_eq!(wm.active(), Some(AppId::Finder));
}

#[test]
fn browser_reopen_with_url_retargets_and_restores() {
    let mut wm = desktop(1200);
    wm.open(AppId::Safari, None);
    wm.minimize(AppId::Safari);
    let outcome = wm.open(AppId::Safari, Some(Payload::navigate("https://docs.rs")));
    assert_eq!(outcome, OpenOutcome::Retargeted);
    let safari = wm.window(AppId::Safari).expect("safari");
    assert!(!safari.is_minimized());
    assert_eq!(safari.payload(), Some(&Payload::navigate("https://docs.rs")));
    assert_eq!(wm.active(), Some(AppId::Safari));
}

#[test]
fn small_viewport_opens_full_bleed_except_utilities() {
    let mut wm = desktop(390);
    wm.open(AppId::Notes, None);
    wm.open(AppId::TicTacToe, None);
    assert!(wm.window(AppId::Notes).expect("notes").is_maximized());
    assert!(!wm.window(AppId::TicTacToe).expect("game").is_maximized());
    for id in [AppId::Notes, AppId::TicTacToe] {
        assert_eq!(
            wm.layout_for(id).map(|l| l.branch),
            Some(LayoutBranch::Constrained)
        );
    }

    // Growing past the breakpoint brings the windowed utility back to its
    // stored geometry.
    wm.set_viewport(Viewport::new(1024, 800));
    assert_eq!(
        wm.layout_for(AppId::TicTacToe).map(|l| l.branch),
        Some(LayoutBranch::Normal)
    );
    assert_eq!(
        wm.layout_for(AppId::Notes).map(|l| l.branch),
        Some(LayoutBranch::Maximized)
    );
}
