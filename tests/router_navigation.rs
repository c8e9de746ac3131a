use greenhouse::error::NavError;
use greenhouse::screens::{self, AppScreen, GALLERY, HOME, PLANT_DETAIL};
use greenhouse::ui::nav::{params, RouteParams, RouteRegistry, Router};

fn router() -> Router<AppScreen> {
    Router::new(screens::registry().unwrap(), HOME).unwrap()
}

#[test]
fn navigate_then_up_restores_home() {
    let mut router = router();

    let route = router
        .navigate(PLANT_DETAIL, &params([("id", "42")]))
        .unwrap();
    assert_eq!(route.path(), "detail/42");
    assert_eq!(router.current_route().path(), "detail/42");
    assert_eq!(router.back_stack().paths(), vec!["home", "detail/42"]);

    assert!(router.navigate_up());
    assert_eq!(router.back_stack().paths(), vec!["home"]);
}

#[test]
fn navigate_up_at_root_is_noop() {
    let mut router = router();
    assert!(!router.navigate_up());
    assert!(!router.navigate_up());
    assert_eq!(router.back_stack().paths(), vec!["home"]);
    assert_eq!(router.current_screen().unwrap(), AppScreen::Home);
}

#[test]
fn stack_never_drops_below_one() {
    let mut router = router();
    let ids = ["a", "b", "c"];
    for (step, id) in ids.iter().cycle().take(30).enumerate() {
        if step % 3 == 2 {
            router.navigate_up();
            router.navigate_up();
        } else {
            router.navigate(PLANT_DETAIL, &params([("id", *id)])).unwrap();
        }
        assert!(router.back_stack().depth() >= 1);
        assert_eq!(router.back_stack().root().map(|r| r.path()), Some("home"));
    }
}

#[test]
fn every_template_resolves_with_full_params_and_fails_without() {
    let registry = screens::registry().unwrap();
    let full = params([("id", "1"), ("name", "Apple")]);
    for template in [HOME, PLANT_DETAIL, GALLERY] {
        assert!(registry.resolve(template, &full).is_ok(), "{template}");
    }

    for (template, param) in [(PLANT_DETAIL, "id"), (GALLERY, "name")] {
        assert_eq!(
            registry.resolve(template, &RouteParams::new()),
            Err(NavError::UnresolvedParameter {
                template: template.to_string(),
                param: param.to_string(),
            })
        );
    }
}

#[test]
fn unresolved_navigation_does_not_move() {
    let mut router = router();
    let err = router.navigate(GALLERY, &params([("id", "1")])).unwrap_err();
    assert!(matches!(err, NavError::UnresolvedParameter { .. }));
    assert_eq!(router.back_stack().paths(), vec!["home"]);
}

#[test]
fn unknown_template_is_rejected() {
    let mut router = router();
    assert!(matches!(
        router.navigate("settings", &RouteParams::new()),
        Err(NavError::UnknownRoute { .. })
    ));
}

#[test]
fn values_with_separator_are_rejected() {
    let mut router = router();
    let err = router
        .navigate(GALLERY, &params([("name", "Tomato/Cherry")]))
        .unwrap_err();
    assert!(matches!(err, NavError::InvalidSegment { .. }));
    assert_eq!(router.back_stack().depth(), 1);
}

#[test]
fn deep_link_rebuilds_screen() {
    let mut router = router();
    router.navigate_to_path("gallery/Apple").unwrap();
    assert_eq!(
        router.current_screen().unwrap(),
        AppScreen::Gallery {
            plant_name: "Apple".to_string()
        }
    );
    assert!(matches!(
        router.navigate_to_path("detail/1/extra"),
        Err(NavError::UnmatchedPath { .. })
    ));
}

#[test]
fn subscribers_see_route_changes() {
    let mut router = router();
    let mut rx = router.subscribe();
    assert!(!rx.has_changed().unwrap());

    router.navigate(PLANT_DETAIL, &params([("id", "7")])).unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().path(), "detail/7");

    router.navigate_up();
    assert_eq!(rx.borrow_and_update().path(), "home");
}

#[test]
fn ignored_up_does_not_notify() {
    let mut router = router();
    let rx = router.subscribe();
    router.navigate_up();
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn result_is_delivered_to_caller() {
    let mut router = router();
    let rx = router
        .navigate_for_result(GALLERY, &params([("name", "Apple")]))
        .unwrap();
    assert!(router.navigate_up_with_result("p2"));
    assert_eq!(rx.await.unwrap(), Some("p2".to_string()));
    assert_eq!(router.back_stack().paths(), vec!["home"]);
}

#[test]
fn result_at_root_is_ignored() {
    let mut router = router();
    assert!(!router.navigate_up_with_result("x"));
    assert_eq!(router.back_stack().depth(), 1);
}

#[test]
fn custom_registry_rejects_ambiguous_patterns() {
    let registry = RouteRegistry::<&'static str>::new()
        .with("home", |_| "home")
        .unwrap();
    let err = registry
        .with("home", |_| "again")
        .err()
        .expect("duplicate should be rejected");
    assert!(matches!(err, NavError::AmbiguousPattern { .. }));
}
