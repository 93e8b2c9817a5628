use glam::dvec3;

use super::scene::RenderScene;
use super::sphere::Sphere;

pub fn define_render_scene() -> RenderScene {
    let upper_left = Sphere::new(dvec3(-1.0, 1.0, 0.0), 1.0);
    let lower_right = Sphere::new(dvec3(1.0, -1.0, 0.0), 1.0);
    let big_backdrop = Sphere::new(dvec3(4.5, 3.0, -4.0), 5.0);
    let small_front = Sphere::new(dvec3(-0.5, -0.5, 1.75), 0.6);
    let far_left = Sphere::new(dvec3(-10.0, 2.0, -8.0), 2.0);

    RenderScene::new(vec![
        upper_left,
        lower_right,
        big_backdrop,
        small_front,
        far_left,
    ])
}
