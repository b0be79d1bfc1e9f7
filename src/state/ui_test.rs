use super::*;

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn theme_selects_logo_asset() {
    assert_eq!(Theme::Light.logo_asset(), "/assets/image/logo-light.png");
    assert_eq!(Theme::Dark.logo_asset(), "/assets/image/logo-dark.png");
}

#[test]
fn theme_selects_illustration_asset() {
    assert_eq!(
        Theme::Light.illustration_asset(),
        "/assets/image/auth/designer.gif"
    );
    assert_eq!(
        Theme::Dark.illustration_asset(),
        "/assets/image/auth/designer-dark.gif"
    );
}
