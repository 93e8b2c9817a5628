// tests/render_pipeline.rs
//
// End to end checks of the render: golden index grids for small frames of the
// fixed scene, the floor-only scene, and the GIF written by `run`.

use glam::dvec3;

use mirror_spheres::{
    define_render_scene, run, Camera, FrameDimensions, PixelBuffer, Ray, RenderConfig,
    RenderError, RenderScene, Renderer, Sphere, PALETTE,
};

fn render(width: u32, height: u32, scene: RenderScene) -> Vec<Vec<u8>> {
    let dimensions = FrameDimensions::new(width, height).expect("valid dimensions");
    let renderer = Renderer::new(Camera::new(dvec3(0.0, -0.1, 3.0), dimensions), scene);
    let mut pixels = PixelBuffer::new(dimensions).expect("alloc");
    renderer.render_serial(&mut pixels).expect("render");

    pixels
        .indices()
        .chunks(width as usize)
        .map(|row| row.to_vec())
        .collect()
}

#[test]
fn golden_4x4() {
    let expected = vec![
        vec![1, 0, 0, 0],
        vec![2, 2, 1, 1],
        vec![2, 0, 1, 0],
        vec![1, 1, 0, 1],
    ];
    assert_eq!(render(4, 4, define_render_scene()), expected);
}

#[test]
fn golden_8x6() {
    let expected = vec![
        vec![2, 1, 1, 0, 1, 0, 1, 0],
        vec![2, 2, 1, 1, 1, 1, 0, 1],
        vec![1, 1, 1, 1, 2, 1, 2, 1],
        vec![1, 1, 0, 1, 1, 2, 1, 2],
        vec![2, 1, 0, 0, 2, 1, 1, 1],
        vec![1, 1, 1, 1, 0, 1, 1, 2],
    ];
    assert_eq!(render(8, 6, define_render_scene()), expected);
}

#[test]
fn golden_4x4_floor_only() {
    let expected = vec![
        vec![1, 0, 1, 0],
        vec![1, 1, 1, 1],
        vec![2, 1, 2, 1],
        vec![1, 2, 1, 1],
    ];
    assert_eq!(render(4, 4, RenderScene::new(vec![])), expected);
}

#[test]
fn head_on_ray_hits_unit_sphere_at_distance_four() {
    let scene = RenderScene::new(vec![Sphere::new(dvec3(0.0, 0.0, 0.0), 1.0)]);
    let ray = Ray {
        origin: dvec3(0.0, 0.0, 5.0),
        direction: dvec3(0.0, 0.0, -1.0),
    };

    let (_, distance) = scene.closest_hit(&ray).expect("hit");
    assert!((distance - 4.0).abs() < 1e-12);
}

#[test]
fn downward_rays_in_an_empty_scene_always_reach_the_floor() {
    let scene = RenderScene::new(vec![]);

    for i in 1..=20u32 {
        let t = f64::from(i) / 20.0;
        let mut ray = Ray {
            origin: dvec3(0.0, -0.1, 3.0),
            direction: dvec3(t - 0.5, -t, -1.0).normalize(),
        };

        assert_eq!(scene.trace(&mut ray), 0);
        assert!(mirror_spheres::shader::shade_floor(&mut ray));
    }
}

#[test]
fn fixed_scene_needs_only_a_few_bounces() {
    let scene = define_render_scene();
    let dimensions = FrameDimensions::new(160, 90).expect("valid");
    let camera = Camera::new(dvec3(0.0, -0.1, 3.0), dimensions);

    let mut deepest = 0;
    for y in 0..90 {
        for x in 0..160 {
            let mut ray = camera.ray_for_pixel(x, y);
            deepest = deepest.max(scene.trace(&mut ray));
        }
    }

    assert!(deepest >= 1);
    assert!(deepest < scene.max_bounces);
}

#[test]
fn run_writes_a_decodable_gif() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = RenderConfig {
        width: 8,
        height: 6,
        output_path: dir.path().join("out.gif"),
        threads: 2,
        ..RenderConfig::default()
    };

    run(&config).expect("render succeeds");

    let file = std::fs::File::open(&config.output_path).expect("output exists");
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(file).expect("GIF header");

    assert_eq!((decoder.width(), decoder.height()), (8, 6));
    let palette: Vec<u8> = PALETTE.iter().flatten().copied().collect();
    assert_eq!(decoder.global_palette(), Some(palette.as_slice()));

    let frame = decoder
        .read_next_frame()
        .expect("frame decodes")
        .expect("one frame")
        .buffer
        .to_vec();
    let expected: Vec<u8> = render(8, 6, define_render_scene())
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(frame, expected);
    assert!(decoder.read_next_frame().expect("trailer").is_none());
}

#[test]
fn run_rejects_oversized_frames_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = RenderConfig {
        width: 70_000,
        height: 10,
        output_path: dir.path().join("out.gif"),
        ..RenderConfig::default()
    };

    assert!(matches!(run(&config), Err(RenderError::Dimensions { .. })));
    assert!(!config.output_path.exists());
}
