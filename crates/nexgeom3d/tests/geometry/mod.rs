#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod ball_ball_distance;
mod bounding_sphere_from_points;
mod cuboid_cuboid_gjk;
mod frustum_culling;
mod johnson_simplex_support_loop;
