#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    // centerpoint
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn from_center(xc: u32, yc: u32, w: u32, h: u32) -> Rect {
        Rect { x: xc, y: yc, w, h }
    }

    pub fn left(&self) -> u32 {
        self.x.saturating_sub(self.w / 2)
    }

    pub fn right(&self) -> u32 {
        self.x + self.w / 2
    }

    pub fn top(&self) -> u32 {
        self.y.saturating_sub(self.h / 2)
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.h / 2
    }

    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Grow (or shrink) around the center, clamping each edge to
    /// `[0, max_x] x [0, max_y]`.
    pub fn scale(&mut self, mag: f32, max_x: u32, max_y: u32) -> Rect {
        let new_w = self.w as f32 * mag;
        let new_l = (self.x as f32 - new_w / 2.).max(0.).round() as u32;
        let new_r = ((self.x as f32 + new_w / 2.).round() as u32).min(max_x);
        self.w = new_r - new_l;
        self.x = new_l + self.w / 2;

        let new_h = self.h as f32 * mag;
        let new_t = (self.y as f32 - new_h / 2.).max(0.).round() as u32;
        let new_b = ((self.y as f32 + new_h / 2.).round() as u32).min(max_y);
        self.h = new_b - new_t;
        self.y = new_t + self.h / 2;

        *self
    }

    pub fn overlap_pct(&self, other: &Rect) -> f32 {
        let x_min = self.left().max(other.left());
        let x_max = self.right().min(other.right());
        let y_min = self.top().max(other.top());
        let y_max = self.bottom().min(other.bottom());

        let overlap_area = if x_min < x_max && y_min < y_max {
            (x_max - x_min) * (y_max - y_min)
        } else {
            0
        };

        let area_delta = self.area() + other.area() - overlap_area;

        if area_delta > 0 {
            overlap_area as f32 / area_delta as f32 * 100.
        } else {
            0.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_from_center() {
        let r = Rect::from_center(50, 40, 20, 10);
        assert_eq!(r.left(), 40);
        assert_eq!(r.right(), 60);
        assert_eq!(r.top(), 35);
        assert_eq!(r.bottom(), 45);
    }

    #[test]
    fn test_scale_clamps_to_image() {
        let mut r = Rect::from_center(10, 10, 40, 40);
        r.scale(1.5, 100, 100);
        assert_eq!(r.left(), 0);
        assert_eq!(r.top(), 0);
        assert!(r.right() <= 100 && r.bottom() <= 100);
    }

    #[test]
    fn test_overlap_pct() {
        let a = Rect::from_center(10, 10, 10, 10);
        let b = Rect::from_center(10, 10, 10, 10);
        assert!((a.overlap_pct(&b) - 100.).abs() < 1e-3);

        let far = Rect::from_center(100, 100, 10, 10);
        assert_eq!(a.overlap_pct(&far), 0.);
    }
}
