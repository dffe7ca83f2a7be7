use super::*;
use crate::foundation::error::ReelError;

fn builtin() -> &'static VariantRegistry {
    VariantRegistry::builtin().unwrap()
}

fn color(s: &str) -> Color {
    Color::parse(s).unwrap()
}

#[test]
fn builtin_catalog_has_all_styles() {
    let reg = builtin();
    assert_eq!(reg.len(), 8);
    for id in [
        "Bold", "Minimal", "Glitch", "Retro", "Swiss", "Neon", "Kinetic", "Bauhaus",
    ] {
        assert!(reg.get(id).is_some(), "{id}");
    }
    assert_eq!(reg.get(" swiss ").unwrap().id, "Swiss");
}

#[test]
fn resolve_rejects_unknown_ids() {
    let err = builtin().resolve("Vaporwave").unwrap_err();
    assert!(matches!(err, ReelError::Configuration(_)));
    assert!(err.to_string().contains("Swiss"));
}

#[test]
fn glitch_forces_grid_and_even_glitch() {
    let v = builtin().get("Glitch").unwrap();
    for idx in 0..20 {
        let d = v.design(idx);
        assert_eq!(d.background, BackgroundKind::Grid);
        assert_eq!(d.transition, TransitionKind::Dissolve);
        if idx % 2 == 0 {
            assert_eq!(d.text_effect, TextEffect::Glitch);
        } else {
            let generated = DesignConfig::generate_from_tables(&v.fonts, &v.palettes, idx);
            assert_eq!(d.text_effect, generated.text_effect);
        }
    }
}

#[test]
fn minimal_alternates_background() {
    let v = builtin().get("Minimal").unwrap();
    assert_eq!(v.design(0).background, BackgroundKind::Solid);
    assert_eq!(v.design(1).background, BackgroundKind::Gradient);
    assert_eq!(v.design(6).background, BackgroundKind::Solid);
}

#[test]
fn swiss_always_has_three_colors() {
    let v = builtin().get("Swiss").unwrap();
    for idx in 0..10 {
        let d = v.design(idx);
        assert_eq!(
            d.palette,
            vec![color("#FFF"), color("#000"), color("#F00")]
        );
        assert_eq!(d.text_effect, TextEffect::None);
        assert_eq!(d.background, BackgroundKind::Solid);
    }
}

#[test]
fn bauhaus_coin_flip_and_pinned_font() {
    let v = builtin().get("Bauhaus").unwrap();
    let light = vec![color("#F0EAD6"), color("#202020")];
    let dark = vec![color("#202020"), color("#F0EAD6")];
    let mut seen_light = false;
    let mut seen_dark = false;
    for idx in 0..40 {
        let d = v.design(idx);
        assert_eq!(d.font, "Impact");
        assert_eq!(d.transition, TransitionKind::None);
        seen_light |= d.palette == light;
        seen_dark |= d.palette == dark;
        assert!(d.palette == light || d.palette == dark);
    }
    assert!(seen_light && seen_dark);
}

#[test]
fn neon_remaps_background_colors() {
    let v = builtin().get("Neon").unwrap();
    let d = v.design(0);
    let bg = v.background_colors(&d);
    assert_eq!(bg.len(), 3);
    assert_eq!(bg[0], color("#000"));
    assert_eq!(bg[1], d.palette[1]);
    assert_eq!(bg[2], color("#111"));
}

#[test]
fn display_text_applies_case() {
    let scene = Scene::with_text("Hello World");
    let minimal = builtin().get("Minimal").unwrap();
    assert_eq!(minimal.display_text(&scene), "hello world");
    let bold = builtin().get("Bold").unwrap();
    assert_eq!(bold.display_text(&scene), "HELLO WORLD");
    assert_eq!(bold.display_text(&Scene::narration_only("x")), "BOLD IMPACT");
}

#[test]
fn pick_semantics() {
    let alt = Pick::Alternate { even: 1, odd: 2 };
    assert_eq!(alt.select(0, 9), 1);
    assert_eq!(alt.select(3, 9), 2);
    let even = Pick::EvenOnly(7);
    assert_eq!(even.select(2, 9), 7);
    assert_eq!(even.select(5, 9), 9);
    assert_eq!(Pick::Always(4).select(5, 9), 4);
}

#[test]
fn color_slot_falls_back() {
    let palette = vec![color("#000"), color("#FFF")];
    let slot = ColorSlot::Palette {
        index: 2,
        fallback: Some(color("#ff0000")),
    };
    assert_eq!(slot.resolve(&palette), color("#ff0000"));
    assert_eq!(ColorSlot::palette(5).resolve(&palette), Color::white());
    assert_eq!(ColorSlot::palette(0).resolve(&palette), color("#000"));
}

const MINIMAL_CATALOG: &str = r##"{
  "styles": [
    {
      "id": "Mono",
      "fonts": ["Courier"],
      "palettes": [["#000", "#FFF"]],
      "placeholder": "MONO",
      "overrides": { "background": { "always": "grid" } },
      "transition_color": { "fixed": "#000" }
    }
  ]
}"##;

#[test]
fn loads_custom_catalog() {
    let reg = VariantRegistry::from_json_str(MINIMAL_CATALOG).unwrap();
    let v = reg.resolve("mono").unwrap();
    let d = v.design(3);
    assert_eq!(d.font, "Courier");
    assert_eq!(d.background, BackgroundKind::Grid);
    assert_eq!(v.text, TextStyle::default());
}

#[test]
fn catalog_validation() {
    let one_color = MINIMAL_CATALOG.replace(r##"[["#000", "#FFF"]]"##, r##"[["#000"]]"##);
    assert!(matches!(
        VariantRegistry::from_json_str(&one_color),
        Err(ReelError::Validation(_))
    ));

    let bad_color = MINIMAL_CATALOG.replace("#FFF", "white");
    assert!(matches!(
        VariantRegistry::from_json_str(&bad_color),
        Err(ReelError::Serde(_))
    ));

    let v = VariantRegistry::from_json_str(MINIMAL_CATALOG)
        .unwrap()
        .iter()
        .next()
        .unwrap()
        .clone();
    let dup = VariantRegistry::new(vec![v.clone(), v]);
    assert!(dup.is_err());
}
