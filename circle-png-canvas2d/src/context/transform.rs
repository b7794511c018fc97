use super::Canvas2dContext;
use tiny_skia::{Point, Transform};

impl Canvas2dContext {
    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.pre_translate(x, y);
    }

    /// Turn user space by `radians`, clockwise on screen.
    pub fn rotate(&mut self, radians: f32) {
        let rotation = Transform::from_rotate(radians.to_degrees());
        self.state.transform = self.state.transform.pre_concat(rotation);
    }

    pub fn get_transform(&self) -> Transform {
        self.state.transform
    }

    /// Device coordinates of a user-space point.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let mut p = Point::from_xy(x, y);
        self.state.transform.map_point(&mut p);
        (p.x, p.y)
    }
}
