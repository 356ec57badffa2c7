use criterion::{criterion_group, criterion_main, Criterion};

use facecap_retarget_core::{
    Bone, ContainerId, LinkOptions, MeshObject, SelectedObject, Selection, ShapeKey, ShapeKeySet,
    Skeleton,
};

fn mk_scene(channels: usize) -> (Skeleton, MeshObject) {
    let mut skeleton = Skeleton::new("Brekel");
    let mut keys = Vec::with_capacity(channels);
    for i in 0..channels {
        let name = format!("Shape_{i}");
        skeleton
            .add_bone(Bone {
                name: name.clone(),
                head: [0.0, 0.0, 0.0],
                tail: [0.0, 0.0, 1.0],
                rotation_order: Default::default(),
            })
            .unwrap();
        keys.push(ShapeKey { name, value: 0.0 });
    }
    let mut mesh = MeshObject::new(ContainerId(0), "Face");
    mesh.shape_keys = Some(ShapeKeySet {
        keys,
        drivers: Vec::new(),
    });
    (skeleton, mesh)
}

fn bench_link_drivers(c: &mut Criterion) {
    c.bench_function("link_drivers_64_channels", |b| {
        b.iter_batched(
            || mk_scene(64),
            |(skeleton, mut mesh)| {
                let mut selection = Selection::from_ordered(vec![
                    SelectedObject::Mesh(&mut mesh),
                    SelectedObject::Armature(&skeleton),
                ])
                .unwrap();
                facecap_retarget_core::link_drivers(&mut selection, &LinkOptions::default())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_link_drivers);
criterion_main!(benches);
