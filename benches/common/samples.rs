use once_cell::sync::Lazy;
use projplot::scene::presets;
use projplot::{Scene, SceneConfig};

/// The stock scenes plus a grid heavy one, sampled once and shared by every benchmark
pub static SCENES: Lazy<Vec<(&'static str, Scene)>> = Lazy::new(|| {
    vec![
        ("rational", Scene::rational().expect("stock table is valid")),
        ("trigonometric", Scene::trigonometric().expect("stock table is valid")),
        (
            "dense_grid",
            Scene::from_table(SceneConfig::default().with_grid_lines(50), &presets::RATIONAL)
                .expect("stock table is valid"),
        ),
    ]
});
