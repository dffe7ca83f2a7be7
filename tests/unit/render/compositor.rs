use super::*;
use crate::{
    render::drawable::Paint,
    style::{
        color::Color,
        design::{BackgroundKind, TextEffect, TransitionKind},
        registry::VariantRegistry,
    },
};

fn variant(id: &str) -> &'static StyleVariant {
    VariantRegistry::builtin().unwrap().get(id).unwrap()
}

#[test]
fn text_precedence_reaches_the_text_layer() {
    let v = variant("Swiss");
    let c = SceneCompositor::new(v);
    let d = v.design(0);

    let both = Scene::with_text("A").prompt("B");
    assert_eq!(c.compose(0, &both, &d, 100).text.text, "A");
    let prompt = Scene::narration_only("n").prompt("B");
    assert_eq!(c.compose(0, &prompt, &d, 100).text.text, "B");
    let neither = Scene::narration_only("n");
    assert_eq!(c.compose(0, &neither, &d, 100).text.text, "HELVETICA");
}

#[test]
fn swiss_layers() {
    let v = variant("Swiss");
    let c = SceneCompositor::new(v);
    let d = v.design(1);
    let layers = c.compose(1, &Scene::with_text("TWO"), &d, 0);

    assert_eq!(layers.background.kind, BackgroundKind::Solid);
    assert_eq!(
        layers.background.fill,
        Paint::Solid {
            color: Color::parse("#FFF").unwrap()
        }
    );
    assert_eq!(layers.decorations.len(), 3);
    assert_eq!(layers.text.color, Color::parse("#000").unwrap());
    let overlay = layers.transition.unwrap();
    assert_eq!(overlay.kind, TransitionKind::Wipe);
    assert_eq!(overlay.color, Color::parse("#000").unwrap());

    assert!(c.compose(1, &Scene::with_text("TWO"), &d, 15).transition.is_none());
}

#[test]
fn neon_text_and_background_colors() {
    let v = variant("Neon");
    let c = SceneCompositor::new(v);
    let d = v.design(3);
    let layers = c.compose(3, &Scene::with_text("x"), &d, 20);
    assert_eq!(layers.text.color, Color::parse("#FFF").unwrap());
    assert_eq!(layers.text.shadows.len(), 3);
    assert_eq!(
        layers.background.fill,
        Paint::Solid {
            color: Color::parse("#000").unwrap()
        }
    );
    assert_eq!(layers.background.shapes.len(), 30);
}

#[test]
fn kinetic_rotation_alternates() {
    let v = variant("Kinetic");
    let c = SceneCompositor::new(v);
    let even = c.text_look(&v.design(0), 0);
    let odd = c.text_look(&v.design(1), 1);
    assert_eq!(even.rotation_deg, 5.0);
    assert_eq!(odd.rotation_deg, -5.0);
    assert!(even.backdrop.is_some());

    let layers = c.compose(0, &Scene::with_text("GO FAST NOW"), &v.design(0), 0);
    assert_eq!(layers.text.words.as_ref().map(Vec::len), Some(3));
}

#[test]
fn glitch_even_scene_uses_glitch_effect() {
    let v = variant("Glitch");
    let d = v.design(2);
    assert_eq!(d.text_effect, TextEffect::Glitch);
    let layers = SceneCompositor::new(v).compose(2, &Scene::with_text("err"), &d, 7);
    assert!((0.9..1.0).contains(&layers.text.opacity));
}

#[test]
fn bauhaus_has_no_transition() {
    let v = variant("Bauhaus");
    let c = SceneCompositor::new(v);
    for idx in 0..4 {
        let layers = c.compose(idx, &Scene::with_text("less is more"), &v.design(idx), 0);
        assert!(layers.transition.is_none());
        assert_eq!(layers.decorations.len(), 2);
        assert_eq!(layers.text.text, "LESS IS MORE");
    }
}

#[test]
fn compose_is_pure() {
    let reg = VariantRegistry::builtin().unwrap();
    for v in reg.iter() {
        let c = SceneCompositor::new(v);
        let scene = Scene::with_text("same in any order");
        let d = v.design(5);
        let a = c.compose(5, &scene, &d, 9);
        let _ = c.compose(5, &scene, &d, 200);
        let b = c.compose(5, &scene, &d, 9);
        assert_eq!(a, b, "{}", v.id);
    }
}
