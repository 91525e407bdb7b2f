use criterion::{black_box, criterion_group, criterion_main, Criterion};
use devreel_scene_core::demo;
use devreel_scene_core::{Scene, SceneDesc};

fn demo_scenes() -> Vec<(String, Scene)> {
    let project = demo::project().expect("demo project builds");
    project
        .scenes
        .iter()
        .map(|desc: &SceneDesc| {
            let scene = Scene::new(desc, &project.config).expect("demo scene builds");
            (desc.name.clone(), scene)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    for (name, scene) in demo_scenes() {
        c.bench_function(&format!("render/{name}"), |b| {
            b.iter(|| black_box(scene.render().expect("render")))
        });
    }
}

fn bench_advance(c: &mut Criterion) {
    let project = demo::project().expect("demo project builds");
    let desc = &project.scenes[1];
    let scene = Scene::new(desc, &project.config).expect("terminal scene builds");
    let dt = project.config.frame_dt();
    c.bench_function("advance/terminal-demo/1s", |b| {
        b.iter(|| {
            let mut player = scene.play();
            for k in 0..=project.config.fps {
                player.advance_to(k as f64 * dt).expect("advance");
            }
            black_box(player.history("command", "text").len())
        })
    });
}

criterion_group!(benches, bench_render, bench_advance);
criterion_main!(benches);
