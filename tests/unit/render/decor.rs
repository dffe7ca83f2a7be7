use super::*;
use crate::{
    foundation::core::{CANVAS, FPS},
    style::registry::{ColorSlot, VariantRegistry},
};

fn ctx<'a>(palette: &'a [Color], scene_index: usize, local_frame: u64) -> DecorContext<'a> {
    DecorContext {
        palette,
        font: "Arial",
        scene_index,
        local_frame,
        fps: FPS,
        canvas: CANVAS,
    }
}

fn palette() -> Vec<Color> {
    vec![
        Color::parse("#FFF").unwrap(),
        Color::parse("#000").unwrap(),
        Color::parse("#F00").unwrap(),
    ]
}

#[test]
fn swiss_decorations() {
    let swiss = VariantRegistry::builtin().unwrap().get("Swiss").unwrap();
    let p = palette();
    let shapes = render_decorations(&swiss.decorations, &ctx(&p, 2, 0));
    assert_eq!(shapes.len(), 3);

    let Geometry::Rect { rect, .. } = shapes[0].geometry else {
        panic!("expected border rect");
    };
    assert_eq!(rect, Rect::new(50.0, 50.0, 1030.0, 1870.0));
    assert_eq!(shapes[0].stroke.as_ref().unwrap().color, p[1]);
    assert!(shapes[0].fill.is_none());

    let Geometry::Label { text, font, .. } = &shapes[1].geometry else {
        panic!("expected label");
    };
    assert_eq!(text, "No. 3");
    assert_eq!(font, "Arial");

    assert_eq!(shapes[2].fill, Some(p[2].clone()));
}

#[test]
fn sun_grid_only_on_even_scenes() {
    let retro = VariantRegistry::builtin().unwrap().get("Retro").unwrap();
    let p = palette();
    assert_eq!(render_decorations(&retro.decorations, &ctx(&p, 0, 0)).len(), 1);
    assert!(render_decorations(&retro.decorations, &ctx(&p, 1, 0)).is_empty());
}

#[test]
fn bauhaus_shapes_spring_in() {
    let deco = [Decoration::BauhausShapes {
        circle: Color::parse("#D93025").unwrap(),
        bar: Color::parse("#1A3F99").unwrap(),
    }];
    let p = palette();

    let first = render_decorations(&deco, &ctx(&p, 0, 0));
    assert_eq!(first.len(), 2);
    let Geometry::Circle { center, .. } = first[0].geometry else {
        panic!("expected circle");
    };
    // Zero scale collapses everything onto the anchor.
    assert!(((first[0].transform * Point::ORIGIN) - center).hypot() < 1e-9);

    let settled = render_decorations(&deco, &ctx(&p, 0, 300));
    let t = settled[0].transform * center;
    assert!((t - center).hypot() < 1e-6);
    assert_eq!(
        render_decorations(&deco, &ctx(&p, 4, 12)),
        render_decorations(&deco, &ctx(&p, 4, 12))
    );
    assert_ne!(
        render_decorations(&deco, &ctx(&p, 4, 300)),
        render_decorations(&deco, &ctx(&p, 5, 300))
    );
}

#[test]
fn slots_fall_back_when_palette_is_short() {
    let deco = [Decoration::Disc {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
        color: ColorSlot::Palette {
            index: 2,
            fallback: Some(Color::parse("#F00").unwrap()),
        },
    }];
    let two = vec![Color::black(), Color::white()];
    let shapes = render_decorations(&deco, &ctx(&two, 0, 0));
    assert_eq!(shapes[0].fill, Some(Color::parse("#F00").unwrap()));
}
