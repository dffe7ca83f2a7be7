use super::*;

fn fonts(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn generate_is_deterministic_for_every_builtin_style() {
    let reg = VariantRegistry::builtin().unwrap();
    for id in reg.ids() {
        for idx in 0..40 {
            assert_eq!(generate(id, idx), generate(id, idx), "{id} #{idx}");
        }
    }
}

#[test]
fn font_table_does_not_move_other_categories() {
    let palettes = vec![default_palette()];
    let a = fonts(&["A"]);
    let b = fonts(&["B1", "B2", "B3", "B4", "B5", "B6", "B7"]);
    for idx in 0..64 {
        let da = DesignConfig::generate_from_tables(&a, &palettes, idx);
        let db = DesignConfig::generate_from_tables(&b, &palettes, idx);
        assert_eq!(da.entry_animation, db.entry_animation);
        assert_eq!(da.text_effect, db.text_effect);
        assert_eq!(da.transition, db.transition);
        assert_eq!(da.background, db.background);
        assert_eq!(da.palette, db.palette);
    }
}

#[test]
fn font_comes_from_the_table() {
    let table = fonts(&["Inter", "Roboto", "Lato"]);
    for idx in 0..30 {
        let d = DesignConfig::generate_from_tables(&table, &[], idx);
        assert!(table.contains(&d.font));
        assert_eq!(d.palette, default_palette());
    }
    let d = DesignConfig::generate_from_tables(&[], &[], 0);
    assert_eq!(d.font, DEFAULT_FONT);
}

#[test]
fn every_choice_is_reachable() {
    let designs: Vec<DesignConfig> = (0..400)
        .map(|i| DesignConfig::generate_from_tables(&fonts(&["F"]), &[], i))
        .collect();
    for a in EntryAnimation::ALL {
        assert!(designs.iter().any(|d| d.entry_animation == *a), "{a}");
    }
    for e in TextEffect::ALL {
        assert!(designs.iter().any(|d| d.text_effect == *e), "{e}");
    }
    for t in TransitionKind::ALL {
        assert!(designs.iter().any(|d| d.transition == *t), "{t}");
    }
    for b in BackgroundKind::ALL {
        assert!(designs.iter().any(|d| d.background == *b), "{b}");
    }
}

#[test]
fn unknown_style_degrades_to_default_tables() {
    for idx in 0..10 {
        let d = generate("Vaporwave", idx);
        assert!(FALLBACK_FONTS_FOR_TEST.contains(&d.font.as_str()));
        assert_eq!(d.palette, default_palette());
    }
}

const FALLBACK_FONTS_FOR_TEST: &[&str] = &["Oswald", "Impact", "Anton", "Bebas Neue", "Fjalla One"];

#[test]
fn seed_offsets_are_distinct() {
    let cats = [
        SeedCategory::Font,
        SeedCategory::Animation,
        SeedCategory::Effect,
        SeedCategory::Transition,
        SeedCategory::Palette,
        SeedCategory::Background,
    ];
    for (i, a) in cats.iter().enumerate() {
        for b in &cats[i + 1..] {
            assert_ne!(a.offset(), b.offset());
        }
    }
    assert_eq!(SeedCategory::Font.seed(3), 103);
}

#[test]
fn choices_serialize_lowercase() {
    let d = generate("Swiss", 0);
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["background"], "solid");
    assert_eq!(v["transition"], "wipe");
    assert_eq!(TextEffect::Typewriter.to_string(), "typewriter");
}
